//! Cross-document consistency checks.
//!
//! Three independent entity extractors (parties by role, dates,
//! registered addresses) scan every document in the bundle; each
//! heuristic raises at most one issue naming the disagreeing values.
//! The whole step is best-effort: a document that failed extraction has
//! empty text and simply contributes nothing.

use corpus_retrieval::cite;
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{Bundle, Issue, Severity, CROSS_DOCUMENT};
use std::collections::{BTreeMap, BTreeSet};

lazy_static! {
    static ref PARTY: Regex = Regex::new(
        r"(?i)(company|employer|shareholder|director|party)\s*:\s*([A-Z][A-Za-z0-9 &.,'-]{2,})"
    )
    .unwrap();
    /// `D Month YYYY` or ISO `YYYY-MM-DD`.
    static ref DATE: Regex =
        Regex::new(r"\b(\d{1,2}\s+[A-Za-z]{3,9}\s+\d{4}|\d{4}-\d{2}-\d{2})\b").unwrap();
    static ref ADDRESS: Regex =
        Regex::new(r"(?i)(registered\s+office|address)\s*:\s*([^\n\r]{5,})").unwrap();
    static ref LEGAL_SUFFIX: Regex =
        Regex::new(r"(?i)\b(ltd|limited|llc|inc|co\.?|company|fzc|plc)\.?\s*$").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Run all cross-document heuristics over the bundle.
pub fn check_consistency(bundle: &Bundle) -> Vec<Issue> {
    let mut issues = Vec::new();
    issues.extend(check_party_consistency(bundle));
    issues.extend(check_date_consistency(bundle));
    issues.extend(check_address_consistency(bundle));
    issues
}

/// Normalize a party name for comparison: strip a trailing legal-entity
/// suffix, collapse whitespace, lower-case.
fn normalize_party(raw: &str) -> String {
    let trimmed = raw.trim();
    let stripped = LEGAL_SUFFIX.replace_all(trimmed, "");
    WHITESPACE
        .replace_all(stripped.trim(), " ")
        .to_lowercase()
}

/// Per role, flag disagreement between normalized party names.
fn check_party_consistency(bundle: &Bundle) -> Vec<Issue> {
    let mut role_values: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for doc in bundle.documents.values() {
        for cap in PARTY.captures_iter(&doc.text) {
            let role = cap[1].to_lowercase();
            let value = normalize_party(&cap[2]);
            if !value.is_empty() {
                role_values.entry(role).or_default().insert(value);
            }
        }
    }

    role_values
        .into_iter()
        .filter(|(_, values)| values.len() > 1)
        .map(|(role, values)| {
            let listed = values.into_iter().collect::<Vec<_>>().join(", ");
            Issue {
                document: CROSS_DOCUMENT.to_string(),
                issue: format!("Cross-document mismatch: {role} names differ"),
                severity: Severity::Medium,
                suggestion: format!("Align the {role} name across all documents: {listed}."),
                citations: cite(&["companies_best_practices_drafting"]),
                rationale: None,
            }
        })
        .collect()
}

/// Flag inconsistent dates when the distinct count is small enough to
/// suggest one intended date. The two recognized forms are compared as
/// literal strings: `12 March 2024` and `2024-03-12` are NOT unified to
/// a common calendar value (known limitation, kept deliberately).
fn check_date_consistency(bundle: &Bundle) -> Vec<Issue> {
    let mut dates: BTreeSet<String> = BTreeSet::new();
    for doc in bundle.documents.values() {
        for m in DATE.find_iter(&doc.text) {
            dates.insert(m.as_str().to_string());
        }
    }

    // Many distinct dates usually mean legitimately different dates,
    // not a mismatch; only flag small disagreement sets.
    if dates.len() > 1 && dates.len() <= 6 {
        let listed = dates.into_iter().collect::<Vec<_>>().join(", ");
        return vec![Issue {
            document: CROSS_DOCUMENT.to_string(),
            issue: "Cross-document mismatch: dates are inconsistent".to_string(),
            severity: Severity::Low,
            suggestion: format!("Confirm effective/commencement dates; found: {listed}."),
            citations: cite(&["companies_best_practices_drafting"]),
            rationale: None,
        }];
    }
    Vec::new()
}

/// Flag disagreement between registered-office/address values.
fn check_address_consistency(bundle: &Bundle) -> Vec<Issue> {
    let mut addresses: BTreeSet<String> = BTreeSet::new();
    for doc in bundle.documents.values() {
        for cap in ADDRESS.captures_iter(&doc.text) {
            addresses.insert(cap[2].trim().to_string());
        }
    }

    if addresses.len() > 1 {
        let listed = addresses.into_iter().collect::<Vec<_>>().join(", ");
        return vec![Issue {
            document: CROSS_DOCUMENT.to_string(),
            issue: "Cross-document mismatch: registered office/address differs".to_string(),
            severity: Severity::Medium,
            suggestion: format!(
                "Confirm the registered office/address across documents: {listed}."
            ),
            citations: cite(&["companies_registrations_registered_office"]),
            rationale: None,
        }];
    }
    Vec::new()
}
