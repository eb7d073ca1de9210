//! Execution-block checks: signature/date markers and signing authority.

use corpus_retrieval::cite;
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{Issue, Severity};

lazy_static! {
    static ref SIGNATURE_MARKER: Regex =
        Regex::new(r"(?i)signed by|signature|name:\s+|date:\s+").unwrap();
    static ref SIGNING_AUTHORITY: Regex =
        Regex::new(r"(?i)authori[sz]ed\s+signator|director|company secretary").unwrap();
}

/// Require a signature/date block somewhere in the document.
pub fn check_signature_block(text: &str) -> Vec<Issue> {
    if SIGNATURE_MARKER.is_match(text) {
        return Vec::new();
    }
    vec![Issue {
        document: String::new(),
        issue: "Missing signature/date block".to_string(),
        severity: Severity::Medium,
        suggestion: "Add Name, Title, Signature, Date at the end.".to_string(),
        citations: cite(&["checklist_evidence_of_appointment"]),
        rationale: None,
    }]
}

/// Require an identified authorised signatory in the execution block.
pub fn check_signing_authority(text: &str) -> Vec<Issue> {
    if SIGNING_AUTHORITY.is_match(text) {
        return Vec::new();
    }
    vec![Issue {
        document: String::new(),
        issue: "Signing authority not evident".to_string(),
        severity: Severity::Medium,
        suggestion: "Identify the authorised signatory (e.g., Director) in the execution block."
            .to_string(),
        citations: cite(&["checklist_evidence_of_appointment"]),
        rationale: None,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_missing_signature_block() {
        let issues = check_signature_block("Resolved that the company open a bank account.");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Medium);
    }

    #[test]
    fn accepts_signed_by_marker() {
        assert!(check_signature_block("Signed by the chairperson on behalf of the members.").is_empty());
    }

    #[test]
    fn accepts_name_and_date_fields() {
        assert!(check_signature_block("Name: Amal Rashid\nDate: 2024-03-12").is_empty());
    }

    #[test]
    fn flags_missing_signing_authority() {
        let issues = check_signing_authority("Executed for and on behalf of the company.");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].issue, "Signing authority not evident");
    }

    #[test]
    fn accepts_authorised_signatory_british_and_american_spelling() {
        assert!(check_signing_authority("Authorised signatory: A. Rashid").is_empty());
        assert!(check_signing_authority("Authorized signatory: A. Rashid").is_empty());
    }

    #[test]
    fn accepts_director_as_authority() {
        assert!(check_signing_authority("By order of the sole Director.").is_empty());
    }
}
