//! Shared generation service.
//!
//! - Built once from [`LlmModelConfig`] at startup; the provider client is
//!   created eagerly so misconfiguration fails before the server binds.
//! - Dispatches by enum, no trait objects.
//! - Immutable after construction: share it with `Arc` across requests.
//!
//! # Example
//! ```no_run
//! use std::sync::Arc;
//! use ai_llm_service::{LlmService, TextGenerator, config::default_config::config_from_env};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let svc = Arc::new(LlmService::new(config_from_env()?)?);
//!     let txt = svc.generate("Hello").await?;
//!     println!("{txt}");
//!     Ok(())
//! }
//! ```

use crate::{
    TextGenerator,
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::AiLlmError,
    services::{
        gemini_service::GeminiService, ollama_service::OllamaService,
        open_ai_service::OpenAiService,
    },
};

#[derive(Debug)]
enum Backend {
    Gemini(GeminiService),
    Ollama(OllamaService),
    OpenAI(OpenAiService),
}

/// Provider-agnostic text generation.
#[derive(Debug)]
pub struct LlmService {
    cfg: LlmModelConfig,
    backend: Backend,
}

impl LlmService {
    /// Validates `cfg` and builds the matching provider client.
    ///
    /// # Errors
    /// Returns [`AiLlmError`] on invalid config or if the HTTP client cannot be built.
    pub fn new(cfg: LlmModelConfig) -> Result<Self, AiLlmError> {
        cfg.validate()?;

        let backend = match cfg.provider {
            LlmProvider::Gemini => Backend::Gemini(GeminiService::new(cfg.clone())?),
            LlmProvider::Ollama => Backend::Ollama(OllamaService::new(cfg.clone())?),
            LlmProvider::OpenAI => Backend::OpenAI(OpenAiService::new(cfg.clone())?),
        };

        Ok(Self { cfg, backend })
    }

    /// Active config.
    pub fn config(&self) -> &LlmModelConfig {
        &self.cfg
    }

    /// Generates a completion with the configured provider.
    ///
    /// # Errors
    /// Propagates the provider's [`AiLlmError`].
    pub async fn generate_text(&self, prompt: &str) -> Result<String, AiLlmError> {
        match &self.backend {
            Backend::Gemini(cli) => cli.generate(prompt).await,
            Backend::Ollama(cli) => cli.generate(prompt).await,
            Backend::OpenAI(cli) => cli.generate(prompt).await,
        }
    }
}

impl TextGenerator for LlmService {
    async fn generate(&self, prompt: &str) -> Result<String, AiLlmError> {
        self.generate_text(prompt).await
    }
}
