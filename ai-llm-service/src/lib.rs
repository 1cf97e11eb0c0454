//! Text generation backends behind one shared service.
//!
//! - Construct [`LlmService`] once at startup, wrap in `Arc`, pass clones around.
//! - Providers are dispatched by enum: Gemini, Ollama, OpenAI-compatible.
//! - [`TextGenerator`] is the seam consumers depend on, so tests can swap in
//!   a scripted generator without touching the network.

use std::future::Future;

pub mod config;
pub mod error_handler;
pub mod llm_service;
pub mod services;
pub mod telemetry;

pub use config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider};
pub use error_handler::AiLlmError;
pub use llm_service::LlmService;

/// Anything that turns a prompt into a completion.
///
/// Implementations must be shareable across request tasks, and the returned
/// future must be `Send` so it can run inside an axum handler.
pub trait TextGenerator: Send + Sync {
    /// Generates a completion for `prompt`. The text is returned as produced
    /// by the backend (callers decide about trimming).
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, AiLlmError>> + Send;
}
