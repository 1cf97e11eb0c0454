//! The query pipeline: source → selector → generator.

use std::future::Future;

use ai_llm_service::TextGenerator;
use tracing::{info, instrument, warn};

use crate::{
    answer::{RETRIEVAL_FAILED, generate_answers},
    clause_store::{DocumentSource, StaticClauseSource},
    error::ContextorError,
    select::{ContextSelector, KeywordSelector},
};

/// Answers a batch of questions about one document.
pub trait DocumentQuery: Send + Sync {
    /// Returns exactly one answer per question, in order.
    ///
    /// Content-level problems come back as sentinel answers; only failures
    /// the pipeline cannot recover from are errors.
    fn query_document(
        &self,
        reference: &str,
        questions: &[String],
    ) -> impl Future<Output = Result<Vec<String>, ContextorError>> + Send;
}

/// Composes a [`DocumentSource`], a [`ContextSelector`] and a [`TextGenerator`].
pub struct DocumentQueryService<S, R, G> {
    source: S,
    selector: R,
    generator: G,
}

impl<G: TextGenerator> DocumentQueryService<StaticClauseSource, KeywordSelector, G> {
    /// Static policy clauses + keyword selection in front of `generator`.
    pub fn with_generator(generator: G) -> Self {
        Self::new(StaticClauseSource, KeywordSelector::default(), generator)
    }
}

impl<S, R, G> DocumentQueryService<S, R, G>
where
    S: DocumentSource,
    R: ContextSelector,
    G: TextGenerator,
{
    pub fn new(source: S, selector: R, generator: G) -> Self {
        Self {
            source,
            selector,
            generator,
        }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }
}

impl<S, R, G> DocumentQuery for DocumentQueryService<S, R, G>
where
    S: DocumentSource,
    R: ContextSelector,
    G: TextGenerator,
{
    #[instrument(skip_all, fields(questions = questions.len()))]
    async fn query_document(
        &self,
        reference: &str,
        questions: &[String],
    ) -> Result<Vec<String>, ContextorError> {
        let clauses = match self.source.fetch_clauses(reference).await {
            Ok(clauses) => clauses,
            Err(err @ ContextorError::DocumentFetch { .. }) => {
                warn!(error = %err, "error fetching document");
                Vec::new()
            }
            Err(err) => return Err(err),
        };

        if clauses.is_empty() {
            return Ok(vec![RETRIEVAL_FAILED.to_string(); questions.len()]);
        }

        let context = self.selector.select_context(questions, &clauses);
        let answers = generate_answers(&self.generator, &context, questions).await;

        info!(answers = answers.len(), "document query completed");
        Ok(answers)
    }
}
