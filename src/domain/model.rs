use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of course domains. Drives extra topic titles and reference URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainTag {
    Programming,
    Web,
    DataAi,
    Cloud,
    Mobile,
    Security,
    Testing,
    General,
}

impl DomainTag {
    pub const ALL: [DomainTag; 8] = [
        DomainTag::Programming,
        DomainTag::Web,
        DomainTag::DataAi,
        DomainTag::Cloud,
        DomainTag::Mobile,
        DomainTag::Security,
        DomainTag::Testing,
        DomainTag::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DomainTag::Programming => "programming",
            DomainTag::Web => "web",
            DomainTag::DataAi => "data_ai",
            DomainTag::Cloud => "cloud",
            DomainTag::Mobile => "mobile",
            DomainTag::Security => "security",
            DomainTag::Testing => "testing",
            DomainTag::General => "general",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.as_str() == key)
    }
}

impl fmt::Display for DomainTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRecord {
    pub title: String,
    pub subtopics: [String; 3],
    #[serde(rename = "ref")]
    pub reference: String,
}

pub type TopicSequence = Vec<TopicRecord>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum PartitionMode {
    #[default]
    WeekWise,
    DayWise,
}

impl PartitionMode {
    pub fn bucket_prefix(&self) -> &'static str {
        match self {
            PartitionMode::WeekWise => "Week",
            PartitionMode::DayWise => "Day",
        }
    }
}

impl fmt::Display for PartitionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionMode::WeekWise => f.write_str("Week-wise"),
            PartitionMode::DayWise => f.write_str("Day-wise"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub label: String,
    pub topics: Vec<TopicRecord>,
}

/// Time-bucketed arrangement of topics. Bucket order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumPlan {
    pub mode: PartitionMode,
    pub buckets: Vec<Bucket>,
}

impl CurriculumPlan {
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<&[TopicRecord]> {
        self.buckets
            .iter()
            .find(|bucket| bucket.label == label)
            .map(|bucket| bucket.topics.as_slice())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|bucket| bucket.label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[TopicRecord])> {
        self.buckets
            .iter()
            .map(|bucket| (bucket.label.as_str(), bucket.topics.as_slice()))
    }

    pub fn topic_count(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.topics.len()).sum()
    }

    /// Flattens the plan back into topic order.
    pub fn into_topics(self) -> TopicSequence {
        self.buckets
            .into_iter()
            .flat_map(|bucket| bucket.topics)
            .collect()
    }
}

/// One user selection: which course, how long, which layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub course: String,
    pub weeks: usize,
    pub mode: PartitionMode,
}

impl PlanRequest {
    pub fn new(course: impl Into<String>, weeks: usize, mode: PartitionMode) -> Self {
        Self {
            course: course.into(),
            weeks,
            mode,
        }
    }
}

/// A plan together with the course metadata renderers need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurriculumDocument {
    pub course: String,
    pub domain: DomainTag,
    pub plan: CurriculumPlan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    Markdown,
    Json,
    Csv,
    Text,
    Pdf,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
            OutputFormat::Pdf => "pdf",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Markdown => "markdown",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "text",
            OutputFormat::Pdf => "pdf",
        };
        f.write_str(name)
    }
}
