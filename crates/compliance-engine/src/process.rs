//! Legal-process inference from the document types present in a bundle.

use shared_types::{DocumentType, ProcessType};
use std::collections::BTreeSet;

/// Signal document types per process. A process scores one point for
/// each distinct signal type present in the bundle (presence, not
/// frequency). Table order is the documented tie-break order.
pub const PROCESS_SIGNALS: &[(ProcessType, &[DocumentType])] = &[
    (
        ProcessType::CompanyIncorporation,
        &[
            DocumentType::ArticlesOfAssociation,
            DocumentType::ShareholderResolution,
            DocumentType::RegisterOfMembersAndDirectors,
        ],
    ),
    (
        ProcessType::EmploymentAndHr,
        &[DocumentType::EmploymentContract],
    ),
];

/// Infer the best-matching process for the given set of present types.
///
/// The maximum-scoring process wins; a maximum score of zero yields
/// [`ProcessType::Unknown`]. Equal nonzero scores resolve to the process
/// declared first in [`PROCESS_SIGNALS`].
pub fn detect_process(types_present: &BTreeSet<DocumentType>) -> ProcessType {
    let mut best = ProcessType::Unknown;
    let mut best_score = 0usize;
    for (process, signals) in PROCESS_SIGNALS {
        let score = signals
            .iter()
            .filter(|t| types_present.contains(*t))
            .count();
        // Strictly greater keeps the earlier table entry on ties.
        if score > best_score {
            best = *process;
            best_score = score;
        }
    }
    best
}

/// Score a single process against the present types. Exposed for
/// report explanations.
pub fn process_score(process: ProcessType, types_present: &BTreeSet<DocumentType>) -> usize {
    PROCESS_SIGNALS
        .iter()
        .find(|(p, _)| *p == process)
        .map(|(_, signals)| {
            signals
                .iter()
                .filter(|t| types_present.contains(*t))
                .count()
        })
        .unwrap_or(0)
}
