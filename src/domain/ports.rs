use crate::domain::catalog::ReferenceTable;
use crate::domain::model::{CurriculumDocument, OutputFormat, PlanRequest, TopicSequence};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn requests(&self) -> Vec<PlanRequest>;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[OutputFormat];
    fn bundle(&self) -> bool;

    fn reference_table(&self) -> ReferenceTable {
        ReferenceTable::default()
    }
}

/// generate -> arrange -> publish, one request at a time.
pub trait Pipeline {
    fn generate(&self, request: &PlanRequest) -> Result<TopicSequence>;
    fn arrange(&self, request: &PlanRequest, topics: TopicSequence) -> Result<CurriculumDocument>;
    fn publish(&self, document: &CurriculumDocument) -> Result<Vec<String>>;
}
