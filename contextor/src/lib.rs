//! Document question answering over a grounding context.
//!
//! Pipeline per request: fetch the document's clauses ([`DocumentSource`]),
//! pick the ones relevant to the questions ([`ContextSelector`]), then ask
//! the generation backend once per question with a grounding prompt.
//!
//! Failures below the pipeline are turned into sentinel answers
//! ([`NOT_FOUND`], [`RETRIEVAL_FAILED`], [`GENERATION_FAILED`]) so callers
//! always get one answer per question.

pub mod answer;
pub mod clause_store;
mod error;
pub mod prompt;
pub mod select;
mod service;

pub use answer::{GENERATION_FAILED, NOT_FOUND, RETRIEVAL_FAILED, generate_answers};
pub use clause_store::{Clause, DocumentSource, POLICY_CLAUSES, StaticClauseSource};
pub use error::ContextorError;
pub use select::{ContextSelector, KeywordSelector, POLICY_KEYWORDS};
pub use service::{DocumentQuery, DocumentQueryService};
