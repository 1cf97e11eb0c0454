//! Per-question answer generation with isolated failures.

use std::time::Instant;

use ai_llm_service::TextGenerator;
use tracing::{debug, error};

use crate::prompt::build_prompt;

/// Returned when the context holds no answer (also what the model is told to say).
pub const NOT_FOUND: &str = "Information not found in the document.";
/// Returned for every question when the document yielded no clauses.
pub const RETRIEVAL_FAILED: &str = "Failed to retrieve or process document content.";
/// Returned for a single question whose backend call failed.
pub const GENERATION_FAILED: &str = "An error occurred while generating the answer.";

/// Answers each question against `context`, one backend call per question.
///
/// Output has the same length and order as `questions`. An empty `context`
/// short-circuits to [`NOT_FOUND`] for every question without calling the
/// backend. A failed call yields [`GENERATION_FAILED`] for that question only.
pub async fn generate_answers<G>(generator: &G, context: &str, questions: &[String]) -> Vec<String>
where
    G: TextGenerator,
{
    if context.is_empty() {
        return vec![NOT_FOUND.to_string(); questions.len()];
    }

    let mut answers = Vec::with_capacity(questions.len());
    for (idx, question) in questions.iter().enumerate() {
        let started = Instant::now();
        let prompt = build_prompt(context, question);

        match generator.generate(&prompt).await {
            Ok(text) => {
                debug!(
                    question = idx,
                    latency_ms = started.elapsed().as_millis(),
                    "answer generated"
                );
                answers.push(text.trim().to_string());
            }
            Err(err) => {
                error!(question = idx, error = %err, "error during LLM API call");
                answers.push(GENERATION_FAILED.to_string());
            }
        }
    }
    answers
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use ai_llm_service::{
        AiLlmError, LlmProvider,
        error_handler::{ProviderError, ProviderErrorKind},
    };

    use super::*;

    /// Scripted generator: echoes the question line, or fails on marked calls.
    pub(crate) struct ScriptedGenerator {
        pub fail_on: Vec<usize>,
        pub calls: AtomicUsize,
        pub prompts: Mutex<Vec<String>>,
    }

    impl ScriptedGenerator {
        pub(crate) fn new(fail_on: Vec<usize>) -> Self {
            Self {
                fail_on,
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, AiLlmError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());
            if self.fail_on.contains(&n) {
                return Err(ProviderError::new(
                    LlmProvider::Gemini,
                    ProviderErrorKind::Decode("scripted failure".into()),
                )
                .into());
            }
            let question = prompt
                .lines()
                .find_map(|l| l.strip_prefix("Question: "))
                .unwrap_or_default();
            Ok(format!("  answer to {question}\n"))
        }
    }

    fn qs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn answers_are_trimmed_and_ordered() {
        let g = ScriptedGenerator::new(vec![]);
        let out = generate_answers(&g, "ctx", &qs(&["a?", "b?", "c?"])).await;
        assert_eq!(out, vec!["answer to a?", "answer to b?", "answer to c?"]);
        assert_eq!(g.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn one_failure_does_not_affect_siblings() {
        let g = ScriptedGenerator::new(vec![1]);
        let out = generate_answers(&g, "ctx", &qs(&["a?", "b?", "c?"])).await;
        assert_eq!(out, vec!["answer to a?", GENERATION_FAILED, "answer to c?"]);
    }

    #[tokio::test]
    async fn empty_context_skips_backend() {
        let g = ScriptedGenerator::new(vec![]);
        let out = generate_answers(&g, "", &qs(&["a?", "b?"])).await;
        assert_eq!(out, vec![NOT_FOUND, NOT_FOUND]);
        assert_eq!(g.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn every_prompt_carries_the_shared_context() {
        let g = ScriptedGenerator::new(vec![]);
        generate_answers(&g, "Clause A\nClause B", &qs(&["x?", "y?"])).await;
        let prompts = g.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 2);
        assert!(prompts.iter().all(|p| p.contains("Document Context:\nClause A\nClause B\n")));
        assert!(prompts[1].contains("Question: y?"));
    }
}
