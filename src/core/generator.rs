use crate::core::classifier::classify;
use crate::domain::catalog::{domain_topics, ReferenceTable, BASE_TOPICS};
use crate::domain::model::{DomainTag, TopicRecord, TopicSequence};

#[derive(Debug, Clone, Default)]
pub struct TopicGenerator {
    references: ReferenceTable,
}

impl TopicGenerator {
    pub fn new(references: ReferenceTable) -> Self {
        Self { references }
    }

    pub fn generate(&self, course_name: &str) -> TopicSequence {
        let domain = classify(course_name);
        self.generate_for(course_name, domain)
    }

    /// Builds the 12 base topics followed by the domain extras.
    pub fn generate_for(&self, course_name: &str, domain: DomainTag) -> TopicSequence {
        let reference = self.references.lookup(domain);

        BASE_TOPICS
            .iter()
            .chain(domain_topics(domain))
            .map(|title| topic_record(course_name, title, reference))
            .collect()
    }
}

fn topic_record(course_name: &str, title: &str, reference: &str) -> TopicRecord {
    TopicRecord {
        title: format!("{} in {}", title, course_name),
        subtopics: [
            format!("Concepts of {}", title),
            format!("Hands-on with {}", title),
            format!("Common mistakes in {}", title),
        ],
        reference: reference.to_string(),
    }
}

pub fn generate_topics(course_name: &str) -> TopicSequence {
    TopicGenerator::default().generate(course_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_programming_first_record() {
        let topics = generate_topics("Python Programming");
        assert_eq!(topics.len(), 18);

        let first = &topics[0];
        assert_eq!(first.title, "Introduction in Python Programming");
        assert_eq!(
            first.subtopics,
            [
                "Concepts of Introduction".to_string(),
                "Hands-on with Introduction".to_string(),
                "Common mistakes in Introduction".to_string(),
            ]
        );
        assert_eq!(first.reference, "https://www.geeksforgeeks.org");
        assert_eq!(topics[17].title, "Libraries in Python Programming");
    }

    #[test]
    fn test_general_courses_get_base_topics_only() {
        let topics = generate_topics("System Design");
        assert_eq!(topics.len(), 12);
        assert_eq!(topics[11].title, "Interview Preparation in System Design");
        assert!(topics.iter().all(|t| t.reference == "https://www.coursera.org"));
    }

    #[test]
    fn test_domain_lengths() {
        assert_eq!(generate_topics("Deep Learning").len(), 17);
        assert_eq!(generate_topics("Terraform").len(), 17);
        assert_eq!(generate_topics("API Testing").len(), 16);
        assert_eq!(generate_topics("Backend Web Development").len(), 18);
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(generate_topics("Ethical Hacking"), generate_topics("Ethical Hacking"));
    }

    #[test]
    fn test_unknown_course_is_accepted_verbatim() {
        let topics = generate_topics("Underwater Basket Weaving");
        assert_eq!(topics.len(), 12);
        assert_eq!(topics[0].title, "Introduction in Underwater Basket Weaving");
    }

    #[test]
    fn test_reference_override() {
        let generator = TopicGenerator::new(
            ReferenceTable::default().with_override(DomainTag::Testing, "https://playwright.dev"),
        );
        let topics = generator.generate("Automation Testing");
        assert!(topics.iter().all(|t| t.reference == "https://playwright.dev"));
        assert_eq!(topics[12].title, "Test Cases in Automation Testing");
    }
}
