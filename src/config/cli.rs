use crate::core::{ConfigProvider, PlanRequest};
use crate::domain::model::{OutputFormat, PartitionMode};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "curricuforge")]
#[command(about = "Generate week-wise or day-wise course curricula")]
pub struct CliConfig {
    /// Course name; see --list-courses for the catalog
    #[arg(long, default_value = "Python Programming")]
    pub course: String,

    /// Course duration in weeks (week-wise plans only)
    #[arg(long, default_value_t = 4)]
    pub weeks: usize,

    #[arg(long, value_enum, default_value_t = PartitionMode::WeekWise)]
    pub plan: PartitionMode,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, value_enum, value_delimiter = ',', default_value = "markdown")]
    pub formats: Vec<OutputFormat>,

    /// Pack all formats into a single ZIP archive
    #[arg(long)]
    pub bundle: bool,

    /// Print the curriculum to stdout
    #[arg(long)]
    pub print: bool,

    #[arg(long)]
    pub list_courses: bool,

    /// Show what would be generated without writing files
    #[arg(long)]
    pub dry_run: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn request(&self) -> PlanRequest {
        PlanRequest::new(self.course.trim(), self.weeks, self.plan)
    }
}

impl ConfigProvider for CliConfig {
    fn requests(&self) -> Vec<PlanRequest> {
        vec![self.request()]
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[OutputFormat] {
        &self.formats
    }

    fn bundle(&self) -> bool {
        self.bundle
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("course", &self.course)?;
        if self.plan == PartitionMode::WeekWise {
            validation::validate_range("weeks", self.weeks, 1, 52)?;
        }
        validation::validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}
