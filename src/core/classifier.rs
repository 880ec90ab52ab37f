use crate::domain::catalog::KEYWORD_GROUPS;
use crate::domain::model::DomainTag;

/// Classifies a course name by keyword substring match.
///
/// Groups are checked in the fixed order programming, web, data_ai, cloud,
/// mobile, security, testing; the first group with a matching keyword wins.
/// Short keywords match inside longer words, so "Django" lands in
/// `programming` through "go" before the web group is consulted.
pub fn classify(course_name: &str) -> DomainTag {
    let normalized = course_name.to_lowercase();

    KEYWORD_GROUPS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| normalized.contains(k)))
        .map(|(tag, _)| *tag)
        .unwrap_or(DomainTag::General)
}
