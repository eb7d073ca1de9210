//! Jurisdiction, registered-office, and governing-law checks.
//!
//! ADGM-registered entities must keep their registered office in the
//! Abu Dhabi Global Market and submit to ADGM Courts; references to
//! mainland or other emirate forums are flagged.

use corpus_retrieval::cite;
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{Issue, Severity};

lazy_static! {
    static ref NON_ADGM_FORUM: Regex =
        Regex::new(r"(?i)uae federal court|mainland|dubai courts|abu dhabi courts").unwrap();
    static ref ADGM_OFFICE_MARKER: Regex =
        Regex::new(r"(?i)registered\s+office|al maryah|adgm").unwrap();
    static ref GOVERNING_LAW_CLAUSE: Regex = Regex::new(r"(?i)governing\s+law|law\s+of").unwrap();
    static ref ADGM_MENTION: Regex = Regex::new(r"(?i)adgm|abu dhabi global market").unwrap();
}

/// Flag references to courts or forums outside ADGM.
pub fn check_jurisdiction(text: &str) -> Vec<Issue> {
    let mut issues = Vec::new();
    if let Some(m) = NON_ADGM_FORUM.find(text) {
        issues.push(Issue {
            document: String::new(),
            issue: "Jurisdiction refers outside ADGM".to_string(),
            severity: Severity::High,
            suggestion: "Replace forum with ADGM Courts and ADGM governing law, as applicable."
                .to_string(),
            citations: cite(&["companies_regulations_formation", "adgm_courts"]),
            rationale: Some(format!("Found forum reference: \"{}\"", m.as_str())),
        });
    }
    issues
}

/// Require some ADGM registered-office marker.
pub fn check_registered_office(text: &str) -> Vec<Issue> {
    if ADGM_OFFICE_MARKER.is_match(text) {
        return Vec::new();
    }
    vec![Issue {
        document: String::new(),
        issue: "No ADGM registered office found".to_string(),
        severity: Severity::High,
        suggestion: "Add the ADGM registered office address in Abu Dhabi Global Market."
            .to_string(),
        citations: cite(&[
            "companies_registrations_registered_office",
            "checklist_registered_office",
        ]),
        rationale: None,
    }]
}

/// If a governing-law clause appears, it must name ADGM.
pub fn check_governing_law(text: &str) -> Vec<Issue> {
    let mut issues = Vec::new();
    if GOVERNING_LAW_CLAUSE.is_match(text) && !ADGM_MENTION.is_match(text) {
        issues.push(Issue {
            document: String::new(),
            issue: "Governing law not set to ADGM".to_string(),
            severity: Severity::High,
            suggestion:
                "Set governing law to Abu Dhabi Global Market (ADGM) where appropriate."
                    .to_string(),
            citations: cite(&["companies_regulations_formation", "adgm_courts"]),
            rationale: None,
        });
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_dubai_courts_forum() {
        let issues = check_jurisdiction("Disputes shall be referred to the Dubai Courts.");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::High);
        assert!(issues[0].rationale.as_deref().unwrap().contains("Dubai Courts"));
        assert!(!issues[0].citations.is_empty());
    }

    #[test]
    fn accepts_adgm_forum() {
        assert!(check_jurisdiction("Disputes go to the ADGM Courts.").is_empty());
    }

    #[test]
    fn flags_missing_registered_office() {
        let issues = check_registered_office("The company shall keep minutes at its premises.");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::High);
    }

    #[test]
    fn accepts_al_maryah_address() {
        assert!(check_registered_office("Office at Al Maryah Island, Abu Dhabi.").is_empty());
    }

    #[test]
    fn flags_foreign_governing_law() {
        let issues = check_governing_law("This agreement is subject to the governing law of England.");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].issue, "Governing law not set to ADGM");
    }

    #[test]
    fn accepts_adgm_governing_law() {
        assert!(check_governing_law("Governing law: Abu Dhabi Global Market (ADGM).").is_empty());
    }

    #[test]
    fn silent_text_raises_no_governing_law_issue() {
        // Absence of any governing-law clause is not itself a defect here.
        assert!(check_governing_law("The board shall meet quarterly.").is_empty());
    }
}
