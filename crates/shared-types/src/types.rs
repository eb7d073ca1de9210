use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Document types recognized by the classifier.
///
/// Declaration order matters: when a document's name or text matches
/// patterns of more than one type, the earliest-declared type wins.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum DocumentType {
    #[serde(rename = "Articles of Association")]
    ArticlesOfAssociation,
    #[serde(rename = "Memorandum of Association")]
    MemorandumOfAssociation,
    #[serde(rename = "Shareholder Resolution")]
    ShareholderResolution,
    #[serde(rename = "Board Resolution")]
    BoardResolution,
    #[serde(rename = "Incorporation Application")]
    IncorporationApplication,
    #[serde(rename = "UBO Declaration")]
    UboDeclaration,
    #[serde(rename = "Register of Members and Directors")]
    RegisterOfMembersAndDirectors,
    #[serde(rename = "Change of Registered Address")]
    ChangeOfRegisteredAddress,
    #[serde(rename = "Employment Contract")]
    EmploymentContract,
    Unknown,
}

impl DocumentType {
    /// All classifiable types in priority order. `Unknown` is the
    /// fallback when nothing matches and is never listed here.
    pub const ALL: [DocumentType; 9] = [
        DocumentType::ArticlesOfAssociation,
        DocumentType::MemorandumOfAssociation,
        DocumentType::ShareholderResolution,
        DocumentType::BoardResolution,
        DocumentType::IncorporationApplication,
        DocumentType::UboDeclaration,
        DocumentType::RegisterOfMembersAndDirectors,
        DocumentType::ChangeOfRegisteredAddress,
        DocumentType::EmploymentContract,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::ArticlesOfAssociation => "Articles of Association",
            DocumentType::MemorandumOfAssociation => "Memorandum of Association",
            DocumentType::ShareholderResolution => "Shareholder Resolution",
            DocumentType::BoardResolution => "Board Resolution",
            DocumentType::IncorporationApplication => "Incorporation Application",
            DocumentType::UboDeclaration => "UBO Declaration",
            DocumentType::RegisterOfMembersAndDirectors => "Register of Members and Directors",
            DocumentType::ChangeOfRegisteredAddress => "Change of Registered Address",
            DocumentType::EmploymentContract => "Employment Contract",
            DocumentType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Legal processes a bundle can belong to.
///
/// Declaration order is the tie-break order for process detection:
/// when two processes score equally, the earlier-declared one is chosen.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum ProcessType {
    #[serde(rename = "Company Incorporation")]
    CompanyIncorporation,
    #[serde(rename = "Employment & HR")]
    EmploymentAndHr,
    Unknown,
}

impl ProcessType {
    pub fn label(&self) -> &'static str {
        match self {
            ProcessType::CompanyIncorporation => "Company Incorporation",
            ProcessType::EmploymentAndHr => "Employment & HR",
            ProcessType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ProcessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// Points deducted from the compliance score per issue at this level.
    pub fn deduction(&self) -> u32 {
        match self {
            Severity::High => 8,
            Severity::Medium => 4,
            Severity::Low => 1,
        }
    }
}

/// Sentinel used in [`Issue::document`] for issues that span the whole
/// bundle rather than a single document.
pub const CROSS_DOCUMENT: &str = "Cross-Document";

/// One flagged compliance problem. Pure value object; issues have no
/// identity beyond their position in the report.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Issue {
    /// Document name, or [`CROSS_DOCUMENT`] for bundle-wide issues.
    pub document: String,
    pub issue: String,
    pub severity: Severity,
    pub suggestion: String,
    /// Resolved citation strings, 0-3 per issue.
    pub citations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
}

/// A single uploaded document after extraction and classification.
/// Created once per upload and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ClassifiedDocument {
    pub name: String,
    pub doc_type: DocumentType,
    pub text: String,
    /// Set when text extraction failed; such documents classify as
    /// `Unknown` with empty text and never abort the bundle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ClassifiedDocument {
    pub fn classified(name: impl Into<String>, doc_type: DocumentType, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc_type,
            text: text.into(),
            error: None,
        }
    }

    pub fn failed(name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc_type: DocumentType::Unknown,
            text: String::new(),
            error: Some(error.into()),
        }
    }
}

/// The set of documents uploaded together for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Bundle {
    pub process: ProcessType,
    pub documents: BTreeMap<String, ClassifiedDocument>,
}

impl Bundle {
    /// Distinct document types present anywhere in the bundle.
    pub fn types_present(&self) -> BTreeSet<DocumentType> {
        self.documents.values().map(|d| d.doc_type).collect()
    }
}

/// The analysis result consumed by every renderer.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnalysisReport {
    pub process: ProcessType,
    pub documents_uploaded: usize,
    pub required_documents: usize,
    pub missing_documents: Vec<DocumentType>,
    pub issues_found: Vec<Issue>,
    /// Always clamped to 0-100.
    pub compliance_score: u8,
}

/// Input tuple for the annotation collaborator, which inserts inline
/// notes into the original document near a best-effort text anchor.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnnotationNote {
    pub issue: String,
    pub suggestion: String,
    pub citations: Vec<String>,
    /// Anchor substring; the annotator targets the first paragraph
    /// containing it (case-insensitive), falling back to the first.
    pub location: Option<String>,
}

impl From<&Issue> for AnnotationNote {
    fn from(issue: &Issue) -> Self {
        Self {
            issue: issue.issue.clone(),
            suggestion: issue.suggestion.clone(),
            citations: issue.citations.clone(),
            location: None,
        }
    }
}
