pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{LocalStorage, TomlConfig};

pub use crate::core::{
    classifier::classify,
    engine::{CurriculumEngine, RunReport},
    generator::{generate_topics, TopicGenerator},
    partitioner::partition,
    pipeline::CurriculumPipeline,
};
pub use domain::catalog::{ReferenceTable, COURSE_CATALOG};
pub use domain::model::{
    Bucket, CurriculumDocument, CurriculumPlan, DomainTag, OutputFormat, PartitionMode,
    PlanRequest, TopicRecord, TopicSequence,
};
pub use utils::error::{CurriculumError, Result};
