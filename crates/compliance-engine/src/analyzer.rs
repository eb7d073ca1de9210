//! Bundle analysis: missing-document computation and score aggregation.

use crate::{consistency, rules};
use shared_types::{AnalysisReport, Bundle, DocumentType, Issue, ProcessType};

/// Documents required to complete each process.
pub fn required_documents(process: ProcessType) -> &'static [DocumentType] {
    match process {
        ProcessType::CompanyIncorporation => &[
            DocumentType::ArticlesOfAssociation,
            DocumentType::ShareholderResolution,
            DocumentType::RegisterOfMembersAndDirectors,
            DocumentType::UboDeclaration,
            DocumentType::IncorporationApplication,
        ],
        ProcessType::EmploymentAndHr => &[DocumentType::EmploymentContract],
        ProcessType::Unknown => &[],
    }
}

/// Score deductions: 8 per High, 4 per Medium, 1 per Low, 5 per missing
/// required document, clamped to 0..=100. Purely additive, so the
/// result is independent of issue ordering.
pub fn compliance_score(issues: &[Issue], missing_count: usize) -> u8 {
    let deductions: u32 = issues
        .iter()
        .map(|issue| issue.severity.deduction())
        .sum::<u32>()
        + 5 * missing_count as u32;
    100u32.saturating_sub(deductions) as u8
}

/// Produce the full analysis report for a classified bundle.
///
/// Total: always returns a well-formed report, never fails. Contains no
/// timestamps or randomness, so identical bundles yield identical
/// reports.
pub fn analyze(bundle: &Bundle) -> AnalysisReport {
    let required = required_documents(bundle.process);
    let present = bundle.types_present();
    let missing: Vec<DocumentType> = required
        .iter()
        .copied()
        .filter(|t| !present.contains(t))
        .collect();

    let mut issues = rules::run_checks_for_bundle(bundle);
    issues.extend(consistency::check_consistency(bundle));

    let compliance_score = compliance_score(&issues, missing.len());

    AnalysisReport {
        process: bundle.process,
        documents_uploaded: bundle.documents.len(),
        required_documents: required.len(),
        missing_documents: missing,
        issues_found: issues,
        compliance_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{ClassifiedDocument, Severity, CROSS_DOCUMENT};
    use std::collections::BTreeMap;

    fn issue(severity: Severity) -> Issue {
        Issue {
            document: "doc.docx".to_string(),
            issue: "test".to_string(),
            severity,
            suggestion: String::new(),
            citations: vec!["[X] test".to_string()],
            rationale: None,
        }
    }

    fn bundle(process: ProcessType, docs: &[(&str, DocumentType, &str)]) -> Bundle {
        let documents = docs
            .iter()
            .map(|(name, doc_type, text)| {
                (
                    name.to_string(),
                    ClassifiedDocument::classified(*name, *doc_type, *text),
                )
            })
            .collect();
        Bundle { process, documents }
    }

    #[test]
    fn score_deductions_match_severity_weights() {
        assert_eq!(compliance_score(&[], 0), 100);
        assert_eq!(compliance_score(&[issue(Severity::High)], 0), 92);
        assert_eq!(compliance_score(&[issue(Severity::Medium)], 0), 96);
        assert_eq!(compliance_score(&[issue(Severity::Low)], 0), 99);
        assert_eq!(compliance_score(&[], 2), 90);
    }

    #[test]
    fn score_clamps_at_zero() {
        let issues: Vec<Issue> = (0..20).map(|_| issue(Severity::High)).collect();
        assert_eq!(compliance_score(&issues, 5), 0);
    }

    #[test]
    fn score_is_order_independent() {
        let mut issues = vec![
            issue(Severity::Low),
            issue(Severity::High),
            issue(Severity::Medium),
        ];
        let forward = compliance_score(&issues, 1);
        issues.reverse();
        assert_eq!(forward, compliance_score(&issues, 1));
    }

    #[test]
    fn adding_issues_never_raises_the_score() {
        let mut issues = Vec::new();
        let mut last = compliance_score(&issues, 0);
        for severity in [Severity::Low, Severity::Medium, Severity::High] {
            issues.push(issue(severity));
            let next = compliance_score(&issues, 0);
            assert!(next <= last);
            last = next;
        }
        assert!(compliance_score(&issues, 1) <= last);
    }

    #[test]
    fn missing_documents_are_subset_of_required() {
        let b = bundle(
            ProcessType::CompanyIncorporation,
            &[(
                "aoa.docx",
                DocumentType::ArticlesOfAssociation,
                "1. INTERPRETATION\nRegistered office: ADGM. Governing law: ADGM.",
            )],
        );
        let report = analyze(&b);
        assert_eq!(report.required_documents, 5);
        assert_eq!(report.missing_documents.len(), 4);
        let required = required_documents(ProcessType::CompanyIncorporation);
        assert!(report
            .missing_documents
            .iter()
            .all(|t| required.contains(t)));
        assert!(!report
            .missing_documents
            .contains(&DocumentType::ArticlesOfAssociation));
    }

    #[test]
    fn unknown_process_requires_nothing() {
        let b = bundle(ProcessType::Unknown, &[("x.docx", DocumentType::Unknown, "")]);
        let report = analyze(&b);
        assert_eq!(report.required_documents, 0);
        assert!(report.missing_documents.is_empty());
        assert_eq!(report.compliance_score, 100);
    }

    #[test]
    fn report_combines_rule_and_consistency_issues() {
        let b = bundle(
            ProcessType::EmploymentAndHr,
            &[
                (
                    "contract.docx",
                    DocumentType::EmploymentContract,
                    "Employment contract between Employer: Acme Ltd and the employee. \
                     Start date: 2024-03-12. Job title: Analyst. Salary monthly. \
                     Working hours: 40. Annual leave: 25 days. Notice: 30 days. \
                     Place of work: ADGM. Grievance procedure applies.",
                ),
                (
                    "letter.docx",
                    DocumentType::Unknown,
                    "Employer: Beta Co confirms the offer dated 2024-04-01.",
                ),
            ],
        );
        let report = analyze(&b);
        // Cross-document employer mismatch and date drift.
        assert!(report
            .issues_found
            .iter()
            .any(|i| i.document == CROSS_DOCUMENT && i.issue.contains("employer")));
        assert!(report
            .issues_found
            .iter()
            .any(|i| i.issue.contains("dates are inconsistent")));
        assert!(report.compliance_score < 100);
    }
}
