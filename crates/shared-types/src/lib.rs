pub mod types;

pub use types::{
    AnalysisReport, AnnotationNote, Bundle, ClassifiedDocument, DocumentType, Issue, ProcessType,
    Severity, CROSS_DOCUMENT,
};
