//! Lightweight Ollama client for text generation.
//!
//! - `POST {endpoint}/api/generate` for synchronous text generation (`stream=false`)
//!
//! # Examples
//!
//! ```no_run
//! use ai_llm_service::{LlmModelConfig, LlmProvider};
//! use ai_llm_service::services::ollama_service::OllamaService;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = LlmModelConfig {
//!     provider: LlmProvider::Ollama,
//!     model: "llama3".into(),
//!     endpoint: "http://localhost:11434".into(),
//!     api_key: None,
//!     max_tokens: Some(256),
//!     temperature: Some(0.2),
//!     top_p: None,
//!     timeout_secs: Some(30),
//! };
//!
//! let svc = OllamaService::new(cfg)?;
//! let text = svc.generate("What is the grace period?").await?;
//! println!("{text}");
//! # Ok(()) }
//! ```

use std::time::Instant;

use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{AiLlmError, ProviderError, ProviderErrorKind},
    services::{build_client, checked_base, decode_error, ensure_success},
};

/// Thin client for Ollama.
#[derive(Debug)]
pub struct OllamaService {
    client: reqwest::Client,
    cfg: LlmModelConfig,
    url_generate: String,
}

impl OllamaService {
    /// Creates a new [`OllamaService`] from the given config.
    ///
    /// # Errors
    /// - `InvalidProvider` if `cfg.provider` is not `Ollama`
    /// - `InvalidEndpoint` if `cfg.endpoint` is invalid
    /// - [`AiLlmError::HttpTransport`] if HTTP client cannot be built
    pub fn new(cfg: LlmModelConfig) -> Result<Self, AiLlmError> {
        let base = checked_base(LlmProvider::Ollama, &cfg)?;
        let client = build_client(&cfg, HeaderMap::new())?;
        let url_generate = format!("{}/api/generate", base);

        info!(
            model = %cfg.model,
            endpoint = %cfg.endpoint,
            "OllamaService initialized"
        );

        Ok(Self {
            client,
            cfg,
            url_generate,
        })
    }

    /// Performs a **non-streaming** generation request via `/api/generate`.
    ///
    /// Mapped options:
    /// - `model`        ← `self.cfg.model`
    /// - `prompt`       ← argument
    /// - `num_predict`  ← `self.cfg.max_tokens`
    /// - `temperature`  ← `self.cfg.temperature`
    /// - `top_p`        ← `self.cfg.top_p`
    ///
    /// A blank `response` is reported as `EmptyCompletion`.
    #[instrument(skip_all, fields(model = %self.cfg.model))]
    pub async fn generate(&self, prompt: &str) -> Result<String, AiLlmError> {
        let started = Instant::now();
        let body = GenerateRequest::from_cfg(&self.cfg, prompt);

        debug!("POST {}", self.url_generate);
        let resp = self
            .client
            .post(&self.url_generate)
            .json(&body)
            .send()
            .await?;
        let resp = ensure_success(
            LlmProvider::Ollama,
            &self.cfg,
            &self.url_generate,
            resp,
            started,
        )
        .await?;

        let out: GenerateResponse = resp.json().await.map_err(|e| {
            decode_error(LlmProvider::Ollama, &self.cfg, e, "{ response: string }", started)
        })?;

        if out.response.trim().is_empty() {
            return Err(
                ProviderError::new(LlmProvider::Ollama, ProviderErrorKind::EmptyCompletion).into(),
            );
        }

        debug!(latency_ms = started.elapsed().as_millis(), "generate completed");
        Ok(out.response)
    }
}

/* ==========================
HTTP payloads & options
========================== */

/// Request body for `/api/generate` (non-streaming).
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<GenerateOptions>,
}

impl<'a> GenerateRequest<'a> {
    fn from_cfg(cfg: &'a LlmModelConfig, prompt: &'a str) -> Self {
        let options = GenerateOptions {
            temperature: cfg.temperature,
            top_p: cfg.top_p,
            num_predict: cfg.max_tokens,
        };

        Self {
            model: &cfg.model,
            prompt,
            stream: false,
            options: Some(options),
        }
    }
}

/// Subset of Ollama `options`.
#[derive(Debug, Default, Serialize)]
struct GenerateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<u32>,
}

/// Response body for `/api/generate`; the text is in `response`.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::services::test_support::serve_once;

    fn cfg() -> LlmModelConfig {
        LlmModelConfig {
            provider: LlmProvider::Ollama,
            model: "llama3".into(),
            endpoint: "http://localhost:11434/".into(),
            api_key: None,
            max_tokens: Some(64),
            temperature: None,
            top_p: None,
            timeout_secs: None,
        }
    }

    #[test]
    fn generate_url_and_body() {
        let svc = OllamaService::new(cfg()).unwrap();
        assert_eq!(svc.url_generate, "http://localhost:11434/api/generate");

        let c = cfg();
        let body = serde_json::to_value(GenerateRequest::from_cfg(&c, "q")).unwrap();
        assert_eq!(
            body,
            json!({
                "model": "llama3",
                "prompt": "q",
                "stream": false,
                "options": { "num_predict": 64 }
            })
        );
    }

    #[test]
    fn invalid_endpoint_is_rejected() {
        let err = OllamaService::new(LlmModelConfig {
            endpoint: "localhost:11434".into(),
            ..cfg()
        })
        .unwrap_err();
        assert!(err.to_string().contains("invalid endpoint"));
    }

    fn local(endpoint: String) -> OllamaService {
        OllamaService::new(LlmModelConfig { endpoint, ..cfg() }).unwrap()
    }

    #[tokio::test]
    async fn returns_response_text() {
        let svc = local(serve_once(r#"{"response":" Thirty days. "}"#).await);
        assert_eq!(svc.generate("q").await.unwrap(), " Thirty days. ");
    }

    #[tokio::test]
    async fn blank_response_is_empty_completion() {
        let svc = local(serve_once(r#"{"response":"   "}"#).await);
        let err = svc.generate("q").await.unwrap_err();
        assert!(matches!(
            err,
            AiLlmError::Provider(ProviderError {
                kind: ProviderErrorKind::EmptyCompletion,
                ..
            })
        ));
    }
}
