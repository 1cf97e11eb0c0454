//! Typed error for the contextor crate.

use thiserror::Error;

/// Document-level failures. Backend errors never reach here: they become
/// per-question sentinel answers.
#[derive(Debug, Error)]
pub enum ContextorError {
    /// The document could not be fetched (network-style failure).
    /// The pipeline recovers from this by treating the document as empty.
    #[error("failed to fetch document `{reference}`: {reason}")]
    DocumentFetch { reference: String, reason: String },

    /// The document was fetched but could not be turned into clauses.
    #[error("failed to parse document `{reference}`: {reason}")]
    DocumentParse { reference: String, reason: String },
}
