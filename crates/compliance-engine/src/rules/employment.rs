//! Minimum-contents check for employment contracts.
//!
//! Employment Regulations 2024 require ten content areas in every
//! contract. Wages, pay period, leave, and notice carry High severity
//! when absent; the rest are Medium.

use corpus_retrieval::cite;
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{Issue, Severity};

lazy_static! {
    /// (area label, recognizer, severity when missing), in the order
    /// the regulations list them.
    static ref CONTENT_AREAS: Vec<(&'static str, Regex, Severity)> = vec![
        area("parties", r"(?i)employee|employer", Severity::Medium),
        area("start date", r"(?i)start date|commencement", Severity::Medium),
        area("job title", r"(?i)job title|position", Severity::Medium),
        area("wages", r"(?i)wage|salary|compensation", Severity::High),
        area("pay period", r"(?i)pay period|monthly|weekly", Severity::High),
        area("hours of work", r"(?i)hours of work|working hours", Severity::Medium),
        area("leave", r"(?i)annual leave|vacation|sick leave", Severity::High),
        area("notice", r"(?i)notice|termination", Severity::High),
        area("place of work", r"(?i)place of work|remote", Severity::Medium),
        area("grievance procedure", r"(?i)disciplinary|grievance", Severity::Medium),
    ];
}

fn area(label: &'static str, pattern: &str, severity: Severity) -> (&'static str, Regex, Severity) {
    (
        label,
        Regex::new(pattern).expect("employment pattern must compile"),
        severity,
    )
}

/// One issue per required content area absent from the contract text.
pub fn check_employment_minimums(text: &str) -> Vec<Issue> {
    CONTENT_AREAS
        .iter()
        .filter(|(_, pattern, _)| !pattern.is_match(text))
        .map(|(label, _, severity)| Issue {
            document: String::new(),
            issue: format!("Employment: missing {label}"),
            severity: *severity,
            suggestion: format!("Add {label} per Employment Regulations 2024."),
            citations: cite(&[
                "employment_regulations_minimums",
                "employment_standard_template",
            ]),
            rationale: None,
        })
        .collect()
}
