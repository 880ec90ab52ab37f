use crate::core::classifier::classify;
use crate::core::generator::TopicGenerator;
use crate::core::partitioner::partition;
use crate::core::render::{self, file_name, file_stem};
use crate::core::{ConfigProvider, CurriculumDocument, Pipeline, PlanRequest, Storage, TopicSequence};
use crate::domain::catalog::is_catalog_course;
use crate::utils::error::{CurriculumError, Result};
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};
use zip::ZipArchive;

pub struct CurriculumPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    generator: TopicGenerator,
}

impl<S: Storage, C: ConfigProvider> CurriculumPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let generator = TopicGenerator::new(config.reference_table());
        Self {
            storage,
            config,
            generator,
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    fn write_bundle(&self, document: &CurriculumDocument) -> Result<Vec<String>> {
        let archive_name = format!("{}.zip", file_stem(&document.course));

        let zip_data = {
            let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

            for format in self.config.output_formats() {
                let name = file_name(&document.course, *format);
                tracing::debug!("Adding {} to {}", name, archive_name);
                zip.start_file::<_, ()>(name, FileOptions::default())?;
                zip.write_all(&render::render(document, *format)?)?;
            }

            let cursor = zip.finish()?;
            cursor.into_inner()
        };

        tracing::debug!("Writing ZIP file ({} bytes) to storage", zip_data.len());
        self.storage.write_file(&archive_name, &zip_data)?;
        self.verify_bundle(&archive_name)?;

        Ok(vec![self.output_location(&archive_name)])
    }

    /// Reads the stored archive back and checks it holds one entry per format.
    fn verify_bundle(&self, archive_name: &str) -> Result<()> {
        let stored = self.storage.read_file(archive_name)?;
        let archive = ZipArchive::new(std::io::Cursor::new(stored))?;
        let expected = self.config.output_formats().len();

        if archive.len() != expected {
            return Err(CurriculumError::IoError(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!(
                    "{} holds {} entries, expected {}",
                    archive_name,
                    archive.len(),
                    expected
                ),
            )));
        }

        tracing::debug!("Verified {} ({} entries)", archive_name, expected);
        Ok(())
    }

    fn write_files(&self, document: &CurriculumDocument) -> Result<Vec<String>> {
        let mut written = Vec::new();

        for format in self.config.output_formats() {
            let name = file_name(&document.course, *format);
            let data = render::render(document, *format)?;
            tracing::debug!("Writing {} ({} bytes)", name, data.len());
            self.storage.write_file(&name, &data)?;
            written.push(self.output_location(&name));
        }

        Ok(written)
    }

    fn output_location(&self, name: &str) -> String {
        format!("{}/{}", self.config.output_path().trim_end_matches('/'), name)
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for CurriculumPipeline<S, C> {
    fn generate(&self, request: &PlanRequest) -> Result<TopicSequence> {
        if !is_catalog_course(&request.course) {
            tracing::warn!(
                "'{}' is not in the course catalog; using keyword classification only",
                request.course
            );
        }

        let topics = self.generator.generate(&request.course);
        tracing::debug!("Generated {} topics for '{}'", topics.len(), request.course);
        Ok(topics)
    }

    fn arrange(&self, request: &PlanRequest, topics: TopicSequence) -> Result<CurriculumDocument> {
        let domain = classify(&request.course);
        let plan = partition(topics, request.weeks, request.mode)?;
        tracing::debug!(
            "Arranged '{}' ({}) into {} {} buckets",
            request.course,
            domain,
            plan.len(),
            request.mode
        );

        Ok(CurriculumDocument {
            course: request.course.clone(),
            domain,
            plan,
        })
    }

    fn publish(&self, document: &CurriculumDocument) -> Result<Vec<String>> {
        if self.config.output_formats().is_empty() {
            tracing::debug!("No output formats selected, nothing to write");
            return Ok(Vec::new());
        }

        if self.config.bundle() {
            self.write_bundle(document)
        } else {
            self.write_files(document)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::ReferenceTable;
    use crate::domain::model::{DomainTag, OutputFormat, PartitionMode};
    use std::collections::HashMap;
    use std::io::Read;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            self.files.lock().unwrap().get(path).cloned()
        }

        fn names(&self) -> Vec<String> {
            let mut names: Vec<String> = self.files.lock().unwrap().keys().cloned().collect();
            names.sort();
            names
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.get_file(path).ok_or_else(|| {
                CurriculumError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files
                .lock()
                .unwrap()
                .insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct TestConfig {
        formats: Vec<OutputFormat>,
        bundle: bool,
        references: ReferenceTable,
    }

    impl TestConfig {
        fn new(formats: Vec<OutputFormat>, bundle: bool) -> Self {
            Self {
                formats,
                bundle,
                references: ReferenceTable::default(),
            }
        }
    }

    impl ConfigProvider for TestConfig {
        fn requests(&self) -> Vec<PlanRequest> {
            vec![PlanRequest::new("Python Programming", 4, PartitionMode::WeekWise)]
        }

        fn output_path(&self) -> &str {
            "./out/"
        }

        fn output_formats(&self) -> &[OutputFormat] {
            &self.formats
        }

        fn bundle(&self) -> bool {
            self.bundle
        }

        fn reference_table(&self) -> ReferenceTable {
            self.references.clone()
        }
    }

    #[test]
    fn test_arrange_attaches_domain() {
        let pipeline = CurriculumPipeline::new(
            MockStorage::default(),
            TestConfig::new(vec![OutputFormat::Markdown], false),
        );
        let request = PlanRequest::new("Docker & Kubernetes", 2, PartitionMode::WeekWise);

        let topics = pipeline.generate(&request).unwrap();
        let document = pipeline.arrange(&request, topics).unwrap();

        assert_eq!(document.domain, DomainTag::Cloud);
        assert_eq!(document.plan.len(), 2);
        assert_eq!(document.plan.topic_count(), 17);
    }

    #[test]
    fn test_arrange_rejects_zero_weeks() {
        let pipeline = CurriculumPipeline::new(
            MockStorage::default(),
            TestConfig::new(vec![OutputFormat::Markdown], false),
        );
        let request = PlanRequest::new("Go Programming", 0, PartitionMode::WeekWise);
        let topics = pipeline.generate(&request).unwrap();

        assert!(matches!(
            pipeline.arrange(&request, topics),
            Err(CurriculumError::InvalidBucketCount { .. })
        ));
    }

    #[test]
    fn test_publish_writes_one_file_per_format() {
        let storage = MockStorage::default();
        let pipeline = CurriculumPipeline::new(
            storage.clone(),
            TestConfig::new(vec![OutputFormat::Markdown, OutputFormat::Csv], false),
        );
        let request = PlanRequest::new("Python Programming", 4, PartitionMode::WeekWise);
        let topics = pipeline.generate(&request).unwrap();
        let document = pipeline.arrange(&request, topics).unwrap();

        let written = pipeline.publish(&document).unwrap();

        assert_eq!(
            written,
            vec![
                "./out/Python_Programming_Curriculum.md".to_string(),
                "./out/Python_Programming_Curriculum.csv".to_string(),
            ]
        );
        assert_eq!(
            storage.names(),
            vec![
                "Python_Programming_Curriculum.csv".to_string(),
                "Python_Programming_Curriculum.md".to_string(),
            ]
        );
        let md = String::from_utf8(storage.read_file("Python_Programming_Curriculum.md").unwrap())
            .unwrap();
        assert!(md.contains("## Week 4"));
    }

    #[test]
    fn test_publish_bundle_writes_single_archive() {
        let storage = MockStorage::default();
        let pipeline = CurriculumPipeline::new(
            storage.clone(),
            TestConfig::new(vec![OutputFormat::Json, OutputFormat::Text], true),
        );
        let request = PlanRequest::new("CI/CD Pipelines", 2, PartitionMode::DayWise);
        let topics = pipeline.generate(&request).unwrap();
        let document = pipeline.arrange(&request, topics).unwrap();

        let written = pipeline.publish(&document).unwrap();
        assert_eq!(written, vec!["./out/CI-CD_Pipelines_Curriculum.zip".to_string()]);

        let zip_data = storage.get_file("CI-CD_Pipelines_Curriculum.zip").unwrap();
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(zip_data)).unwrap();
        assert_eq!(archive.len(), 2);
        assert!(archive.by_name("CI-CD_Pipelines_Curriculum.json").is_ok());
        assert!(archive.by_name("CI-CD_Pipelines_Curriculum.txt").is_ok());
    }

    #[test]
    fn test_reference_overrides_flow_into_topics() {
        let mut config = TestConfig::new(vec![], false);
        config.references =
            ReferenceTable::default().with_override(DomainTag::Programming, "https://doc.rust-lang.org");
        let storage = MockStorage::default();
        let pipeline = CurriculumPipeline::new(storage.clone(), config);

        let request = PlanRequest::new("Rust Programming", 3, PartitionMode::WeekWise);
        let topics = pipeline.generate(&request).unwrap();
        assert!(topics.iter().all(|t| t.reference == "https://doc.rust-lang.org"));

        let document = pipeline.arrange(&request, topics).unwrap();
        assert!(pipeline.publish(&document).unwrap().is_empty());
        assert!(storage.names().is_empty());
    }

    /// Keeps only the first half of every write.
    #[derive(Clone, Default)]
    struct TruncatingStorage {
        inner: MockStorage,
    }

    impl Storage for TruncatingStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.inner.read_file(path)
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.inner.write_file(path, &data[..data.len() / 2])
        }
    }

    #[test]
    fn test_bundle_includes_pdf() {
        let storage = MockStorage::default();
        let pipeline = CurriculumPipeline::new(
            storage.clone(),
            TestConfig::new(vec![OutputFormat::Pdf, OutputFormat::Markdown], true),
        );
        let request = PlanRequest::new("Kubernetes", 3, PartitionMode::WeekWise);
        let topics = pipeline.generate(&request).unwrap();
        let document = pipeline.arrange(&request, topics).unwrap();
        pipeline.publish(&document).unwrap();

        let zip_data = storage.get_file("Kubernetes_Curriculum.zip").unwrap();
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(zip_data)).unwrap();
        let mut pdf = Vec::new();
        archive
            .by_name("Kubernetes_Curriculum.pdf")
            .unwrap()
            .read_to_end(&mut pdf)
            .unwrap();
        assert!(pdf.starts_with(b"%PDF"));
    }

    #[test]
    fn test_corrupted_bundle_is_reported() {
        let storage = TruncatingStorage::default();
        let pipeline = CurriculumPipeline::new(
            storage,
            TestConfig::new(vec![OutputFormat::Json, OutputFormat::Csv], true),
        );
        let request = PlanRequest::new("Selenium Testing", 2, PartitionMode::WeekWise);
        let topics = pipeline.generate(&request).unwrap();
        let document = pipeline.arrange(&request, topics).unwrap();

        assert!(matches!(
            pipeline.publish(&document),
            Err(CurriculumError::ZipError(_))
        ));
    }
}
