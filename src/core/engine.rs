use crate::core::{CurriculumDocument, Pipeline, PlanRequest};
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct RunReport {
    pub document: CurriculumDocument,
    pub outputs: Vec<String>,
}

pub struct CurriculumEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> CurriculumEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// Generates, arranges and publishes one curriculum.
    pub fn run(&self, request: &PlanRequest) -> Result<RunReport> {
        tracing::info!(
            "Building {} curriculum for '{}' ({} weeks)",
            request.mode,
            request.course,
            request.weeks
        );

        let topics = self.pipeline.generate(request)?;
        tracing::info!("Generated {} topics", topics.len());

        let document = self.pipeline.arrange(request, topics)?;
        tracing::info!("Arranged into {} periods", document.plan.len());

        let outputs = self.pipeline.publish(&document)?;
        for output in &outputs {
            tracing::info!("Output saved to: {}", output);
        }

        Ok(RunReport { document, outputs })
    }

    /// Runs every request in order, stopping at the first failure.
    pub fn run_all(&self, requests: &[PlanRequest]) -> Result<Vec<RunReport>> {
        requests.iter().map(|request| self.run(request)).collect()
    }
}
