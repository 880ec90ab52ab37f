pub mod classifier;
pub mod engine;
pub mod generator;
pub mod partitioner;
pub mod pipeline;
pub mod render;

pub use crate::domain::model::{CurriculumDocument, CurriculumPlan, PlanRequest, TopicSequence};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
