//! Per-document-type compliance checks.
//!
//! Each check is a pure `fn(&str) -> Vec<Issue>` testing one regulatory
//! heuristic. Checks for a type run independently, in the declared
//! order; no check depends on another's result. A check that cannot
//! determine an answer returns an empty vec rather than failing the
//! bundle, and every emitted issue carries at least one citation.

pub mod drafting;
pub mod employment;
pub mod execution;
pub mod jurisdiction;

use shared_types::{Bundle, DocumentType, Issue};

pub type Check = fn(&str) -> Vec<Issue>;

/// The ordered check list for a document type. Exhaustive over the
/// closed type set, so adding a type forces a decision here.
pub fn checks_for(doc_type: DocumentType) -> &'static [Check] {
    match doc_type {
        DocumentType::ArticlesOfAssociation => &[
            jurisdiction::check_jurisdiction,
            jurisdiction::check_registered_office,
            jurisdiction::check_governing_law,
            drafting::check_defined_terms_section,
            drafting::check_clause_numbering,
        ],
        DocumentType::ShareholderResolution | DocumentType::BoardResolution => &[
            execution::check_signature_block,
            execution::check_signing_authority,
        ],
        DocumentType::IncorporationApplication => &[
            jurisdiction::check_registered_office,
            jurisdiction::check_governing_law,
        ],
        DocumentType::EmploymentContract => &[employment::check_employment_minimums],
        DocumentType::MemorandumOfAssociation
        | DocumentType::UboDeclaration
        | DocumentType::RegisterOfMembersAndDirectors
        | DocumentType::ChangeOfRegisteredAddress
        | DocumentType::Unknown => &[],
    }
}

/// Run every check registered for `doc_type` against `text`, in order.
pub fn run_checks(doc_type: DocumentType, text: &str) -> Vec<Issue> {
    checks_for(doc_type)
        .iter()
        .flat_map(|check| check(text))
        .collect()
}

/// Run the per-type checks over every document in bundle iteration
/// order, stamping each issue with its document name.
pub fn run_checks_for_bundle(bundle: &Bundle) -> Vec<Issue> {
    let mut issues = Vec::new();
    for (name, doc) in &bundle.documents {
        for mut issue in run_checks(doc.doc_type, &doc.text) {
            issue.document = name.clone();
            issues.push(issue);
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{ClassifiedDocument, ProcessType};
    use std::collections::BTreeMap;

    #[test]
    fn register_types_have_no_checks() {
        assert!(checks_for(DocumentType::UboDeclaration).is_empty());
        assert!(checks_for(DocumentType::RegisterOfMembersAndDirectors).is_empty());
        assert!(checks_for(DocumentType::Unknown).is_empty());
    }

    #[test]
    fn articles_absence_checks_fire_in_declared_order() {
        // Empty text trips registered office, definitions, and numbering
        // but neither jurisdiction nor governing law (absence checks only).
        let issues = run_checks(DocumentType::ArticlesOfAssociation, "");
        let descriptions: Vec<&str> = issues.iter().map(|i| i.issue.as_str()).collect();
        assert_eq!(
            descriptions,
            vec![
                "No ADGM registered office found",
                "No Definitions/Interpretation section",
                "Clauses not clearly numbered",
            ]
        );
    }

    #[test]
    fn bundle_runner_stamps_document_names() {
        let mut documents = BTreeMap::new();
        documents.insert(
            "resolution.docx".to_string(),
            ClassifiedDocument::classified(
                "resolution.docx",
                DocumentType::ShareholderResolution,
                "Resolved that the company adopt the articles.",
            ),
        );
        let bundle = Bundle {
            process: ProcessType::CompanyIncorporation,
            documents,
        };
        let issues = run_checks_for_bundle(&bundle);
        assert!(!issues.is_empty());
        assert!(issues.iter().all(|i| i.document == "resolution.docx"));
    }

    #[test]
    fn every_emitted_issue_carries_a_citation() {
        for doc_type in DocumentType::ALL {
            for issue in run_checks(doc_type, "") {
                assert!(
                    !issue.citations.is_empty(),
                    "{doc_type}: {} has no citation",
                    issue.issue
                );
            }
        }
    }

    #[test]
    fn checks_accept_compliant_text() {
        let compliant = "1. INTERPRETATION\nRegistered office: ADGM, Al Maryah Island.\n\
                         Governing law: ADGM. Signed by a Director. Name: A. Date: 2024-01-01";
        for doc_type in [
            DocumentType::ArticlesOfAssociation,
            DocumentType::ShareholderResolution,
            DocumentType::IncorporationApplication,
        ] {
            let issues = run_checks(doc_type, compliant);
            assert!(issues.is_empty(), "{doc_type} flagged compliant text: {issues:?}");
        }
    }
}
