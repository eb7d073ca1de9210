//! Document-type classification from filename and extracted text.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::DocumentType;

lazy_static! {
    /// Per-type recognition patterns, in [`DocumentType`] priority order.
    /// Patterns are written against lower-cased input.
    static ref DOC_PATTERNS: Vec<(DocumentType, Vec<Regex>)> = vec![
        (
            DocumentType::ArticlesOfAssociation,
            compile(&[r"articles of association", r"\baoa\b"]),
        ),
        (
            DocumentType::MemorandumOfAssociation,
            compile(&[r"memorandum of association", r"\bmoa\b"]),
        ),
        (
            DocumentType::ShareholderResolution,
            compile(&[r"shareholder resolution", r"written resolution"]),
        ),
        (DocumentType::BoardResolution, compile(&[r"board resolution"])),
        (
            DocumentType::IncorporationApplication,
            compile(&[r"incorporation application", r"application to incorporate"]),
        ),
        (
            DocumentType::UboDeclaration,
            compile(&[r"beneficial owner", r"\bubo\b"]),
        ),
        (
            DocumentType::RegisterOfMembersAndDirectors,
            compile(&[r"register of members", r"register of directors"]),
        ),
        (
            DocumentType::ChangeOfRegisteredAddress,
            compile(&[r"change of registered address", r"registered office address"]),
        ),
        (
            DocumentType::EmploymentContract,
            compile(&[r"employment contract", r"employee", r"employer"]),
        ),
    ];
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("classifier pattern must compile"))
        .collect()
}

/// Classify a document by display name and extracted text.
///
/// The lower-cased name is tested before the lower-cased text, and the
/// first type (in declaration order) with any matching pattern wins.
/// Pure and total: never fails for any string input; no match yields
/// [`DocumentType::Unknown`].
pub fn classify(name: &str, text: &str) -> DocumentType {
    let name = name.to_lowercase();
    let text = text.to_lowercase();
    for (doc_type, patterns) in DOC_PATTERNS.iter() {
        for pattern in patterns {
            if pattern.is_match(&name) || pattern.is_match(&text) {
                return *doc_type;
            }
        }
    }
    DocumentType::Unknown
}
