//! Google Generative Language API client (Gemini and Gemma models).
//!
//! Single, non-streaming call:
//! - POST {endpoint}/v1beta/models/{model}:generateContent
//!
//! The API key travels in the `x-goog-api-key` header, so URLs are safe to log.

use std::time::Instant;

use reqwest::header;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{AiLlmError, ProviderError, ProviderErrorKind},
    services::{build_client, checked_base, decode_error, ensure_success},
};

/// Thin client for `generateContent`.
#[derive(Debug)]
pub struct GeminiService {
    client: reqwest::Client,
    cfg: LlmModelConfig,
    url_generate: String,
}

impl GeminiService {
    /// Creates a new [`GeminiService`] from the given config.
    ///
    /// # Errors
    /// - `InvalidProvider` if `cfg.provider` is not Gemini
    /// - `MissingApiKey` if `cfg.api_key` is `None`
    /// - `InvalidEndpoint` if `cfg.endpoint` is not http(s)
    /// - [`AiLlmError::HttpTransport`] if the HTTP client cannot be built
    pub fn new(cfg: LlmModelConfig) -> Result<Self, AiLlmError> {
        let base = checked_base(LlmProvider::Gemini, &cfg)?;

        let api_key = cfg.api_key.as_deref().ok_or_else(|| {
            ProviderError::new(LlmProvider::Gemini, ProviderErrorKind::MissingApiKey)
        })?;

        let mut headers = header::HeaderMap::new();
        let mut key = header::HeaderValue::from_str(api_key).map_err(|e| {
            ProviderError::new(
                LlmProvider::Gemini,
                ProviderErrorKind::InvalidApiKey(e.to_string()),
            )
        })?;
        key.set_sensitive(true);
        headers.insert("x-goog-api-key", key);
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = build_client(&cfg, headers)?;
        let url_generate = format!("{}/v1beta/models/{}:generateContent", base, cfg.model);

        info!(
            model = %cfg.model,
            endpoint = %cfg.endpoint,
            "GeminiService initialized"
        );

        Ok(Self {
            client,
            cfg,
            url_generate,
        })
    }

    /// Sends `prompt` as a single user turn and returns the candidate text.
    ///
    /// # Errors
    /// - `HttpStatus` for non-2xx responses (quota, auth, bad model)
    /// - [`AiLlmError::HttpTransport`] for network failures and timeouts
    /// - `Decode` if the JSON cannot be parsed
    /// - `EmptyCompletion` if no candidate carries text (e.g. safety block)
    #[instrument(skip_all, fields(model = %self.cfg.model))]
    pub async fn generate(&self, prompt: &str) -> Result<String, AiLlmError> {
        let started = Instant::now();
        let body = GenerateContentRequest::from_cfg(&self.cfg, prompt);

        debug!(prompt_len = prompt.len(), "POST {}", self.url_generate);
        let resp = self
            .client
            .post(&self.url_generate)
            .json(&body)
            .send()
            .await?;
        let resp = ensure_success(
            LlmProvider::Gemini,
            &self.cfg,
            &self.url_generate,
            resp,
            started,
        )
        .await?;

        let out: GenerateContentResponse = resp.json().await.map_err(|e| {
            decode_error(
                LlmProvider::Gemini,
                &self.cfg,
                e,
                "candidates[0].content.parts[].text",
                started,
            )
        })?;

        let text = out.into_text().ok_or_else(|| {
            ProviderError::new(LlmProvider::Gemini, ProviderErrorKind::EmptyCompletion)
        })?;

        debug!(
            latency_ms = started.elapsed().as_millis(),
            "generateContent completed"
        );
        Ok(text)
    }
}

/* ===========================================================================
HTTP payloads
======================================================================== */

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl<'a> GenerateContentRequest<'a> {
    fn from_cfg(cfg: &LlmModelConfig, prompt: &'a str) -> Self {
        let generation_config = GenerationConfig {
            temperature: cfg.temperature,
            top_p: cfg.top_p,
            max_output_tokens: cfg.max_tokens,
        };
        let generation_config = (!generation_config.is_empty()).then_some(generation_config);

        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            generation_config,
        }
    }
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

impl GenerationConfig {
    fn is_empty(&self) -> bool {
        self.temperature.is_none() && self.top_p.is_none() && self.max_output_tokens.is_none()
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<PartOut>,
}

#[derive(Debug, Deserialize)]
struct PartOut {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate that has any.
    fn into_text(self) -> Option<String> {
        self.candidates.into_iter().find_map(|c| {
            let parts = c.content?.parts;
            let text: String = parts.into_iter().filter_map(|p| p.text).collect();
            (!text.trim().is_empty()).then_some(text)
        })
    }
}
