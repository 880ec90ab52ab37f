//! Static lookup tables: course catalog, classifier keywords, topic titles and references.

use crate::domain::model::DomainTag;
use std::collections::HashMap;

pub const COURSE_CATALOG: [&str; 52] = [
    "C Programming",
    "C++ Programming",
    "Java Programming",
    "Python Programming",
    "Go Programming",
    "Rust Programming",
    "Kotlin Programming",
    "Swift Programming",
    "Data Structures & Algorithms",
    "Competitive Programming",
    "Frontend Web Development",
    "Backend Web Development",
    "Full Stack Web Development",
    "MERN Stack Development",
    "MEAN Stack Development",
    "Django Web Development",
    "Flask Web Development",
    "Spring Boot Development",
    "REST API Development",
    "GraphQL APIs",
    "Data Science with Python",
    "Machine Learning Fundamentals",
    "Deep Learning",
    "Artificial Intelligence",
    "NLP",
    "Computer Vision",
    "Big Data Analytics",
    "Power BI",
    "Tableau",
    "AWS Cloud Practitioner",
    "Azure Fundamentals",
    "Google Cloud Platform",
    "DevOps Engineering",
    "Docker & Kubernetes",
    "CI/CD Pipelines",
    "Terraform",
    "Android App Development",
    "iOS App Development",
    "Flutter Development",
    "React Native Development",
    "Cyber Security Fundamentals",
    "Ethical Hacking",
    "Web Security",
    "Blockchain Development",
    "Web3",
    "IoT",
    "Manual Testing",
    "Automation Testing",
    "API Testing",
    "System Design",
    "Agile & Scrum",
    "Git & GitHub",
];

/// Keyword groups in classifier priority order. The first group with any
/// keyword occurring in the lowercased course name wins.
pub const KEYWORD_GROUPS: [(DomainTag, &[&str]); 7] = [
    (
        DomainTag::Programming,
        &["python", "java", "c ", "c++", "go", "rust", "kotlin", "swift"],
    ),
    (
        DomainTag::Web,
        &["web", "frontend", "backend", "mern", "mean", "django", "flask", "spring"],
    ),
    (DomainTag::DataAi, &["data", "ml", "ai", "deep", "nlp", "vision"]),
    (
        DomainTag::Cloud,
        &["cloud", "aws", "azure", "gcp", "devops", "docker", "kubernetes", "terraform"],
    ),
    (DomainTag::Mobile, &["android", "ios", "flutter", "react native"]),
    (DomainTag::Security, &["security", "hacking", "cyber"]),
    (DomainTag::Testing, &["testing", "automation"]),
];

pub const BASE_TOPICS: [&str; 12] = [
    "Introduction",
    "Environment Setup",
    "Core Concepts",
    "Syntax & Structure",
    "Control Flow",
    "Functions",
    "Data Handling",
    "Error Handling",
    "Best Practices",
    "Mini Project",
    "Capstone Project",
    "Interview Preparation",
];

pub fn is_catalog_course(course: &str) -> bool {
    COURSE_CATALOG.contains(&course)
}

pub fn domain_topics(domain: DomainTag) -> &'static [&'static str] {
    match domain {
        DomainTag::Programming => &["Variables", "Loops", "OOP", "Memory", "Files", "Libraries"],
        DomainTag::Web => &["HTML", "CSS", "JavaScript", "Frameworks", "APIs", "Deployment"],
        DomainTag::DataAi => &[
            "Data Cleaning",
            "Statistics",
            "Models",
            "Evaluation",
            "Deployment",
        ],
        DomainTag::Cloud => &["Compute", "Storage", "Networking", "CI/CD", "Monitoring"],
        DomainTag::Mobile => &[
            "UI Design",
            "Navigation",
            "Storage",
            "API Integration",
            "Publishing",
        ],
        DomainTag::Security => &[
            "Threats",
            "Networking",
            "Vulnerabilities",
            "Pentesting",
            "Defense",
        ],
        DomainTag::Testing => &["Test Cases", "Automation Tools", "Frameworks", "CI Integration"],
        DomainTag::General => &[],
    }
}

pub fn default_reference(domain: DomainTag) -> &'static str {
    match domain {
        DomainTag::Programming => "https://www.geeksforgeeks.org",
        DomainTag::Web => "https://developer.mozilla.org",
        DomainTag::DataAi => "https://scikit-learn.org",
        DomainTag::Cloud => "https://docs.aws.amazon.com",
        DomainTag::Mobile => "https://developer.android.com",
        DomainTag::Security => "https://owasp.org",
        DomainTag::Testing => "https://www.selenium.dev",
        DomainTag::General => "https://www.coursera.org",
    }
}

/// Reference URL lookup with optional per-domain overrides on top of the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceTable {
    overrides: HashMap<DomainTag, String>,
}

impl ReferenceTable {
    pub fn with_override(mut self, domain: DomainTag, url: impl Into<String>) -> Self {
        self.overrides.insert(domain, url.into());
        self
    }

    pub fn lookup(&self, domain: DomainTag) -> &str {
        self.overrides
            .get(&domain)
            .map(String::as_str)
            .unwrap_or_else(|| default_reference(domain))
    }

    pub fn overrides(&self) -> usize {
        self.overrides.len()
    }
}
