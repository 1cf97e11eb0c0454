//! OpenAI (or compatible) chat completion client.
//!
//! Minimal, non-streaming client around `POST {endpoint}/v1/chat/completions`.
//!
//! Constructor validation:
//! - `cfg.provider` must be `LlmProvider::OpenAI`
//! - `cfg.api_key` must be present
//! - `cfg.endpoint` must start with http:// or https://

use std::time::Instant;

use reqwest::header;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{AiLlmError, ProviderError, ProviderErrorKind},
    services::{build_client, checked_base, decode_error, ensure_success},
};

/// Thin client for the OpenAI chat API.
#[derive(Debug)]
pub struct OpenAiService {
    client: reqwest::Client,
    cfg: LlmModelConfig,
    url_chat: String,
}

impl OpenAiService {
    /// Creates a new [`OpenAiService`] from the given config.
    ///
    /// # Errors
    /// - `InvalidProvider` if `cfg.provider` is not OpenAI
    /// - `MissingApiKey` if `cfg.api_key` is `None`
    /// - `InvalidEndpoint` if `cfg.endpoint` is invalid
    /// - [`AiLlmError::HttpTransport`] if the HTTP client cannot be built
    pub fn new(cfg: LlmModelConfig) -> Result<Self, AiLlmError> {
        let base = checked_base(LlmProvider::OpenAI, &cfg)?;

        let api_key = cfg.api_key.as_deref().ok_or_else(|| {
            ProviderError::new(LlmProvider::OpenAI, ProviderErrorKind::MissingApiKey)
        })?;

        let mut headers = header::HeaderMap::new();
        let mut auth = header::HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(
            |e| {
                ProviderError::new(
                    LlmProvider::OpenAI,
                    ProviderErrorKind::InvalidApiKey(e.to_string()),
                )
            },
        )?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = build_client(&cfg, headers)?;
        let url_chat = format!("{}/v1/chat/completions", base);

        info!(
            model = %cfg.model,
            endpoint = %cfg.endpoint,
            "OpenAiService initialized"
        );

        Ok(Self {
            client,
            cfg,
            url_chat,
        })
    }

    /// Performs a **non-streaming** chat completion with a single user message.
    ///
    /// # Errors
    /// - `HttpStatus` for non-2xx responses
    /// - [`AiLlmError::HttpTransport`] for client/network failures
    /// - `Decode` if the JSON cannot be parsed
    /// - `EmptyCompletion` if no choice carries content
    #[instrument(skip_all, fields(model = %self.cfg.model))]
    pub async fn generate(&self, prompt: &str) -> Result<String, AiLlmError> {
        let started = Instant::now();
        let body = ChatCompletionRequest::from_cfg(&self.cfg, prompt);

        debug!(prompt_len = prompt.len(), "POST {}", self.url_chat);
        let resp = self.client.post(&self.url_chat).json(&body).send().await?;
        let resp = ensure_success(
            LlmProvider::OpenAI,
            &self.cfg,
            &self.url_chat,
            resp,
            started,
        )
        .await?;

        let out: ChatCompletionResponse = resp.json().await.map_err(|e| {
            decode_error(
                LlmProvider::OpenAI,
                &self.cfg,
                e,
                "choices[0].message.content",
                started,
            )
        })?;

        let content = out.into_text().ok_or_else(|| {
            ProviderError::new(LlmProvider::OpenAI, ProviderErrorKind::EmptyCompletion)
        })?;

        debug!(
            latency_ms = started.elapsed().as_millis(),
            "chat completion completed"
        );
        Ok(content)
    }
}

/* ===========================================================================
HTTP payloads
======================================================================== */

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

impl<'a> ChatCompletionRequest<'a> {
    fn from_cfg(cfg: &'a LlmModelConfig, prompt: &'a str) -> Self {
        Self {
            model: &cfg.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: cfg.temperature,
            top_p: cfg.top_p,
            max_tokens: cfg.max_tokens,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageOut,
}

#[derive(Debug, Deserialize)]
struct ChatMessageOut {
    content: Option<String>,
}

impl ChatCompletionResponse {
    fn into_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .find_map(|c| c.message.content.filter(|t| !t.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::services::test_support::serve_once;

    fn cfg() -> LlmModelConfig {
        LlmModelConfig {
            provider: LlmProvider::OpenAI,
            model: "gpt-4o-mini".into(),
            endpoint: "https://api.openai.com".into(),
            api_key: Some("sk-test".into()),
            max_tokens: None,
            temperature: None,
            top_p: None,
            timeout_secs: Some(10),
        }
    }

    #[test]
    fn chat_url() {
        let svc = OpenAiService::new(cfg()).unwrap();
        assert_eq!(svc.url_chat, "https://api.openai.com/v1/chat/completions");
    }

    #[test]
    fn first_choice_with_content_wins() {
        let raw = json!({
            "choices": [
                { "message": { "content": null } },
                { "message": { "content": "Answer" } }
            ]
        });
        let out: ChatCompletionResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(out.into_text().as_deref(), Some("Answer"));
    }

    #[test]
    fn request_has_single_user_message() {
        let c = cfg();
        let body = serde_json::to_value(ChatCompletionRequest::from_cfg(&c, "p")).unwrap();
        assert_eq!(
            body,
            json!({
                "model": "gpt-4o-mini",
                "messages": [{ "role": "user", "content": "p" }]
            })
        );
    }

    #[test]
    fn blank_content_is_skipped() {
        let raw = json!({ "choices": [{ "message": { "content": " \n" } }] });
        let out: ChatCompletionResponse = serde_json::from_value(raw).unwrap();
        assert!(out.into_text().is_none());
    }

    #[tokio::test]
    async fn blank_completion_is_an_error() {
        let endpoint = serve_once(r#"{"choices":[{"message":{"content":""}}]}"#).await;
        let svc = OpenAiService::new(LlmModelConfig { endpoint, ..cfg() }).unwrap();
        let err = svc.generate("q").await.unwrap_err();
        assert!(matches!(
            err,
            AiLlmError::Provider(ProviderError {
                kind: ProviderErrorKind::EmptyCompletion,
                ..
            })
        ));
    }

    #[test]
    fn api_key_must_be_a_header_value() {
        let err = OpenAiService::new(LlmModelConfig {
            api_key: Some("sk-\nbroken".into()),
            ..cfg()
        })
        .unwrap_err();
        assert!(matches!(
            err,
            AiLlmError::Provider(ProviderError {
                kind: ProviderErrorKind::InvalidApiKey(_),
                ..
            })
        ));
    }
}
