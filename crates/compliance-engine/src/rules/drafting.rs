//! Drafting-quality checks: definitions section and clause numbering.

use corpus_retrieval::cite;
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{Issue, Severity};

lazy_static! {
    static ref DEFINED_TERMS_HEADING: Regex = Regex::new(r"(?i)definitions|interpretation").unwrap();
    /// Numbered clauses such as "1. " or "2.3. ".
    static ref NUMBERED_CLAUSE: Regex = Regex::new(r"\b\d+\.(?:\d+\.)?\s").unwrap();
}

/// Require a Definitions/Interpretation section.
pub fn check_defined_terms_section(text: &str) -> Vec<Issue> {
    if DEFINED_TERMS_HEADING.is_match(text) {
        return Vec::new();
    }
    vec![Issue {
        document: String::new(),
        issue: "No Definitions/Interpretation section".to_string(),
        severity: Severity::Medium,
        suggestion: "Add a Definitions/Interpretation section to standardize capitalized terms."
            .to_string(),
        citations: cite(&["companies_best_practices_drafting"]),
        rationale: None,
    }]
}

/// Expect at least some numbered clauses for readability and
/// cross-referencing.
pub fn check_clause_numbering(text: &str) -> Vec<Issue> {
    if NUMBERED_CLAUSE.is_match(text) {
        return Vec::new();
    }
    vec![Issue {
        document: String::new(),
        issue: "Clauses not clearly numbered".to_string(),
        severity: Severity::Low,
        suggestion: "Number clauses (e.g., 1., 1.1, 1.2) for readability and cross-referencing."
            .to_string(),
        citations: cite(&["companies_best_practices_drafting"]),
        rationale: None,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_missing_definitions() {
        let issues = check_defined_terms_section("The Company may issue shares.");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Medium);
    }

    #[test]
    fn accepts_interpretation_heading() {
        assert!(check_defined_terms_section("1. INTERPRETATION\nIn these Articles...").is_empty());
    }

    #[test]
    fn flags_unnumbered_clauses() {
        let issues = check_clause_numbering("The company may issue shares. The board decides.");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Low);
    }

    #[test]
    fn accepts_nested_numbering() {
        assert!(check_clause_numbering("1. Name\n1.1. The company is called...").is_empty());
        assert!(check_clause_numbering("2. Shares\n3. Board").is_empty());
    }
}
