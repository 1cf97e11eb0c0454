//! Provider clients. Each one owns a preconfigured `reqwest::Client`.

pub mod gemini_service;
pub mod ollama_service;
pub mod open_ai_service;

use std::time::{Duration, Instant};

use reqwest::{Response, header::HeaderMap};
use tracing::error;

use crate::{
    config::{
        default_config::DEFAULT_TIMEOUT_SECS, llm_model_config::LlmModelConfig,
        llm_provider::LlmProvider,
    },
    error_handler::{AiLlmError, HttpError, ProviderError, ProviderErrorKind, make_snippet},
};

/// Checks that `cfg` targets `provider` and has an http(s) endpoint.
///
/// Returns the endpoint without trailing slashes.
pub(crate) fn checked_base(
    provider: LlmProvider,
    cfg: &LlmModelConfig,
) -> Result<String, AiLlmError> {
    if cfg.provider != provider {
        return Err(ProviderError::new(provider, ProviderErrorKind::InvalidProvider).into());
    }

    let endpoint = cfg.endpoint.trim();
    if endpoint.is_empty()
        || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
    {
        return Err(ProviderError::new(
            provider,
            ProviderErrorKind::InvalidEndpoint(cfg.endpoint.clone()),
        )
        .into());
    }

    Ok(endpoint.trim_end_matches('/').to_string())
}

/// Builds a client with the configured timeout and default headers.
pub(crate) fn build_client(
    cfg: &LlmModelConfig,
    headers: HeaderMap,
) -> Result<reqwest::Client, AiLlmError> {
    let timeout = Duration::from_secs(cfg.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));

    Ok(reqwest::Client::builder()
        .timeout(timeout)
        .default_headers(headers)
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .build()?)
}

/// Passes 2xx responses through; maps everything else to `HttpStatus`.
pub(crate) async fn ensure_success(
    provider: LlmProvider,
    cfg: &LlmModelConfig,
    url: &str,
    resp: Response,
    started: Instant,
) -> Result<Response, AiLlmError> {
    if resp.status().is_success() {
        return Ok(resp);
    }

    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    let snippet = make_snippet(&text);

    error!(
        %provider,
        %status,
        %snippet,
        model = %cfg.model,
        latency_ms = started.elapsed().as_millis(),
        "generation endpoint returned non-success status"
    );

    Err(ProviderError::new(
        provider,
        ProviderErrorKind::HttpStatus(HttpError {
            status,
            url: url.to_string(),
            snippet,
        }),
    )
    .into())
}

/// Wraps a serde failure with a hint about the expected shape.
pub(crate) fn decode_error(
    provider: LlmProvider,
    cfg: &LlmModelConfig,
    err: reqwest::Error,
    expected: &str,
    started: Instant,
) -> AiLlmError {
    error!(
        %provider,
        error = %err,
        model = %cfg.model,
        latency_ms = started.elapsed().as_millis(),
        "failed to decode generation response"
    );
    ProviderError::new(
        provider,
        ProviderErrorKind::Decode(format!("serde error: {err}; expected `{expected}`")),
    )
    .into()
}
