use crate::core::{ConfigProvider, PlanRequest};
use crate::domain::catalog::ReferenceTable;
use crate::domain::model::{DomainTag, OutputFormat, PartitionMode};
use crate::utils::error::{CurriculumError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

const DEFAULT_WEEKS: usize = 4;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub project: ProjectConfig,
    pub curriculum: CurriculumConfig,
    pub output: OutputConfig,
    pub references: Option<BTreeMap<String, String>>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurriculumConfig {
    pub courses: Vec<String>,
    pub duration_weeks: Option<usize>,
    pub plan: Option<PartitionMode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub output_path: String,
    pub formats: Vec<OutputFormat>,
    pub bundle: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// Loads and parses a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CurriculumError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CurriculumError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` placeholders with environment values; unknown vars are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CurriculumError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn duration_weeks(&self) -> usize {
        self.curriculum.duration_weeks.unwrap_or(DEFAULT_WEEKS)
    }

    pub fn plan_mode(&self) -> PartitionMode {
        self.curriculum.plan.unwrap_or_default()
    }

    pub fn log_level(&self) -> Option<&str> {
        self.monitoring.as_ref().and_then(|m| m.log_level.as_deref())
    }

    /// Builds the reference table, rejecting unknown domains and non-http URLs.
    pub fn resolve_references(&self) -> Result<ReferenceTable> {
        let mut table = ReferenceTable::default();

        for (key, url) in self.references.iter().flatten() {
            let field = format!("references.{}", key);
            let domain =
                DomainTag::from_key(key).ok_or_else(|| CurriculumError::InvalidConfigValueError {
                    field: field.clone(),
                    value: key.clone(),
                    reason: format!(
                        "Unknown domain. Valid domains: {}",
                        DomainTag::ALL.map(|d| d.as_str()).join(", ")
                    ),
                })?;
            validation::validate_url(&field, url)?;
            table = table.with_override(domain, url.clone());
        }

        Ok(table)
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("project.name", &self.project.name)?;

        validation::validate_non_empty_list("curriculum.courses", &self.curriculum.courses)?;
        for course in &self.curriculum.courses {
            validation::validate_non_empty_string("curriculum.courses", course)?;
        }

        if self.plan_mode() == PartitionMode::WeekWise {
            validation::validate_range("curriculum.duration_weeks", self.duration_weeks(), 1, 52)?;
        }

        validation::validate_path("output.output_path", &self.output.output_path)?;
        validation::validate_non_empty_list("output.formats", &self.output.formats)?;

        if let Some(level) = self.log_level() {
            validation::validate_log_level("monitoring.log_level", level)?;
        }

        self.resolve_references()?;

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn requests(&self) -> Vec<PlanRequest> {
        self.curriculum
            .courses
            .iter()
            .map(|course| PlanRequest::new(course.trim(), self.duration_weeks(), self.plan_mode()))
            .collect()
    }

    fn output_path(&self) -> &str {
        &self.output.output_path
    }

    fn output_formats(&self) -> &[OutputFormat] {
        &self.output.formats
    }

    fn bundle(&self) -> bool {
        self.output.bundle.unwrap_or(false)
    }

    fn reference_table(&self) -> ReferenceTable {
        // validate_config has already rejected bad entries
        self.resolve_references().unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC: &str = r#"
[project]
name = "spring-cohort"
description = "Spring cohort tracks"
version = "1.0.0"

[curriculum]
courses = ["Python Programming", "Deep Learning"]
duration_weeks = 6
plan = "week-wise"

[output]
output_path = "./cohort-output"
formats = ["markdown", "json"]
"#;

    #[test]
    fn test_parse_basic_toml_config() {
        let config = TomlConfig::from_toml_str(BASIC).unwrap();

        assert_eq!(config.project.name, "spring-cohort");
        assert_eq!(config.duration_weeks(), 6);
        assert_eq!(config.plan_mode(), PartitionMode::WeekWise);
        assert_eq!(
            config.output_formats(),
            &[OutputFormat::Markdown, OutputFormat::Json]
        );
        assert!(!config.bundle());

        let requests = config.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1], PlanRequest::new("Deep Learning", 6, PartitionMode::WeekWise));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_for_optional_fields() {
        let toml_content = r#"
[project]
name = "minimal"

[curriculum]
courses = ["IoT"]

[output]
output_path = "./output"
formats = ["text"]
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.duration_weeks(), 4);
        assert_eq!(config.plan_mode(), PartitionMode::WeekWise);
        assert_eq!(config.log_level(), None);
        assert_eq!(config.reference_table(), ReferenceTable::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CURRICUFORGE_TEST_OUTPUT", "/tmp/curricula");

        let toml_content = r#"
[project]
name = "env"

[curriculum]
courses = ["Terraform"]
plan = "day-wise"

[output]
output_path = "${CURRICUFORGE_TEST_OUTPUT}"
formats = ["csv"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output_path(), "/tmp/curricula");
        assert_eq!(config.plan_mode(), PartitionMode::DayWise);

        std::env::remove_var("CURRICUFORGE_TEST_OUTPUT");
    }

    #[test]
    fn test_reference_overrides() {
        let toml_content = format!(
            "{}\n[references]\nprogramming = \"https://doc.rust-lang.org\"\n",
            BASIC
        );
        let config = TomlConfig::from_toml_str(&toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.reference_table().lookup(DomainTag::Programming),
            "https://doc.rust-lang.org"
        );
    }

    #[test]
    fn test_invalid_configs_are_rejected() {
        let bad_domain = format!("{}\n[references]\nbiology = \"https://example.com\"\n", BASIC);
        let config = TomlConfig::from_toml_str(&bad_domain).unwrap();
        assert!(config.validate().is_err());

        let bad_url = format!("{}\n[references]\nweb = \"ftp://example.com\"\n", BASIC);
        let config = TomlConfig::from_toml_str(&bad_url).unwrap();
        assert!(config.validate().is_err());

        let zero_weeks = BASIC.replace("duration_weeks = 6", "duration_weeks = 0");
        let config = TomlConfig::from_toml_str(&zero_weeks).unwrap();
        assert!(config.validate().is_err());

        let no_courses = BASIC.replace(
            "courses = [\"Python Programming\", \"Deep Learning\"]",
            "courses = []",
        );
        let config = TomlConfig::from_toml_str(&no_courses).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_monitoring_log_level_is_checked() {
        let valid = format!("{}\n[monitoring]\nlog_level = \"DEBUG\"\n", BASIC);
        let config = TomlConfig::from_toml_str(&valid).unwrap();
        assert!(config.validate().is_ok());

        let typo = format!("{}\n[monitoring]\nlog_level = \"verbose\"\n", BASIC);
        let config = TomlConfig::from_toml_str(&typo).unwrap();
        assert!(matches!(
            config.validate(),
            Err(CurriculumError::InvalidConfigValueError { field, .. }) if field == "monitoring.log_level"
        ));
    }

    #[test]
    fn test_unknown_format_fails_to_parse() {
        let toml_content = BASIC.replace("[\"markdown\", \"json\"]", "[\"docx\"]");
        assert!(matches!(
            TomlConfig::from_toml_str(&toml_content),
            Err(CurriculumError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(BASIC.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.project.name, "spring-cohort");
    }
}
