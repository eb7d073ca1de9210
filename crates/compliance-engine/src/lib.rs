//! Compliance engine for ADGM legal-document bundles.
//!
//! Callers supply a mapping of document name to raw bytes plus a
//! [`TextExtractor`]; the engine classifies each document, infers the
//! legal process, runs per-type regulatory checks and cross-document
//! consistency checks, and aggregates everything into one
//! [`AnalysisReport`]. The report is the sole artifact renderers
//! consume.
//!
//! Every entry point is total: extraction failures degrade a single
//! document to `Unknown`, check misfires produce empty results, and
//! [`ComplianceEngine::analyze`] never fails.

pub mod analyzer;
pub mod classify;
pub mod consistency;
pub mod process;
pub mod rules;

use shared_types::{AnalysisReport, AnnotationNote, Bundle, ClassifiedDocument};
use std::collections::BTreeMap;
use thiserror::Error;

/// Failure modes a text-extraction collaborator may report. Each one is
/// recorded on the affected document and never aborts the bundle.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),
    #[error("malformed document: {0}")]
    Malformed(String),
    #[error("document is empty")]
    Empty,
}

/// Document-content extraction collaborator.
///
/// Implementations parse raw word-processing bytes into plain text
/// (paragraph and table-cell text, newline-joined, in source order)
/// plus an opaque handle that annotation collaborators can round-trip
/// back into modified bytes.
pub trait TextExtractor {
    type Handle;

    fn extract(&self, bytes: &[u8]) -> Result<(String, Self::Handle), ExtractionError>;
}

/// Annotation collaborator: inserts inline notes into the original
/// document near a best-effort text anchor (first paragraph containing
/// the anchor substring, case-insensitive; first paragraph otherwise).
pub trait DocumentAnnotator {
    fn annotate(&self, bytes: &[u8], notes: &[AnnotationNote]) -> anyhow::Result<Vec<u8>>;
}

/// Optional ML-backed analysis subsystem producing the same report
/// shape. Constructed by the caller and passed in explicitly; the
/// engine holds no global instance.
pub trait AdvancedAnalyzer {
    fn analyze_bundle(&self, bundle: &Bundle) -> anyhow::Result<AnalysisReport>;
}

/// Engine entry point.
pub struct ComplianceEngine;

impl ComplianceEngine {
    pub fn new() -> Self {
        Self
    }

    /// Extract and classify every uploaded document, then infer the
    /// bundle's process. A document whose extraction fails is recorded
    /// with its error and classifies as `Unknown`.
    pub fn classify_bundle<E: TextExtractor>(
        &self,
        extractor: &E,
        files: &BTreeMap<String, Vec<u8>>,
    ) -> Bundle {
        let mut documents = BTreeMap::new();
        for (name, bytes) in files {
            let doc = match extractor.extract(bytes) {
                Ok((text, _handle)) => {
                    let doc_type = classify::classify(name, &text);
                    tracing::debug!(document = %name, doc_type = %doc_type, "classified document");
                    ClassifiedDocument::classified(name.clone(), doc_type, text)
                }
                Err(err) => {
                    tracing::warn!(document = %name, %err, "text extraction failed");
                    ClassifiedDocument::failed(name.clone(), format!("Failed to read document: {err}"))
                }
            };
            documents.insert(name.clone(), doc);
        }

        let types = documents.values().map(|d| d.doc_type).collect();
        let process = process::detect_process(&types);
        Bundle { process, documents }
    }

    /// Run the deterministic rule-based analysis.
    pub fn analyze(&self, bundle: &Bundle) -> AnalysisReport {
        let report = analyzer::analyze(bundle);
        tracing::info!(
            process = %report.process,
            documents = report.documents_uploaded,
            issues = report.issues_found.len(),
            score = report.compliance_score,
            "bundle analyzed"
        );
        report
    }

    /// Prefer an advanced analyzer when one is supplied, falling back
    /// to the deterministic rule-based path if it fails.
    pub fn analyze_with(
        &self,
        bundle: &Bundle,
        advanced: Option<&dyn AdvancedAnalyzer>,
    ) -> AnalysisReport {
        if let Some(advanced) = advanced {
            match advanced.analyze_bundle(bundle) {
                Ok(report) => return report,
                Err(err) => {
                    tracing::warn!(%err, "advanced analysis failed, using rule-based path");
                }
            }
        }
        self.analyze(bundle)
    }

    /// Build annotation-collaborator input for one document's issues.
    pub fn annotation_notes(&self, report: &AnalysisReport, document: &str) -> Vec<AnnotationNote> {
        report
            .issues_found
            .iter()
            .filter(|issue| issue.document == document)
            .map(AnnotationNote::from)
            .collect()
    }
}

impl Default for ComplianceEngine {
    fn default() -> Self {
        Self::new()
    }
}
