//! LLM config loaded strictly from environment variables.
//!
//! # Environment variables
//!
//! Common:
//! - `LLM_KIND`         = `gemini` (default) | `ollama` | `openai`
//! - `LLM_MAX_TOKENS`   = optional max tokens (u32)
//! - `LLM_TEMPERATURE`  = optional sampling temperature (f32)
//! - `LLM_TIMEOUT_SECS` = HTTP timeout per generation call (u64, default 60)
//!
//! Gemini:
//! - `GEMINI_API_KEY` (mandatory)
//! - `GEMINI_MODEL`   (default `gemma-3-1b-it`)
//! - `GEMINI_URL`     (default `https://generativelanguage.googleapis.com`)
//!
//! Ollama:
//! - `OLLAMA_URL` or `OLLAMA_PORT` (mandatory)
//! - `OLLAMA_MODEL`                (mandatory)
//!
//! OpenAI-compatible:
//! - `OPENAI_API_KEY` (mandatory)
//! - `OPENAI_MODEL`   (mandatory)
//! - `OPENAI_URL`     (default `https://api.openai.com`)

use tracing::info;

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{AiLlmError, ConfigError, env_opt_parse, env_or, must_env},
};

pub const DEFAULT_GEMINI_MODEL: &str = "gemma-3-1b-it";
pub const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Builds and validates the generation config selected by `LLM_KIND`.
///
/// # Errors
/// Any [`ConfigError`] from missing/invalid variables, wrapped in [`AiLlmError`].
pub fn config_from_env() -> Result<LlmModelConfig, AiLlmError> {
    let provider: LlmProvider = env_or("LLM_KIND", "gemini").parse()?;

    let cfg = match provider {
        LlmProvider::Gemini => config_gemini()?,
        LlmProvider::Ollama => config_ollama()?,
        LlmProvider::OpenAI => config_openai()?,
    };
    cfg.validate()?;

    info!(
        provider = %cfg.provider,
        model = %cfg.model,
        endpoint = %cfg.endpoint,
        "LLM config loaded"
    );
    Ok(cfg)
}

/// Knobs shared by every provider: `(max_tokens, temperature, timeout_secs)`.
fn common_knobs() -> Result<(Option<u32>, Option<f32>, Option<u64>), AiLlmError> {
    let max_tokens = env_opt_parse::<u32>("LLM_MAX_TOKENS", "expected u32")?;
    let temperature = env_opt_parse::<f32>("LLM_TEMPERATURE", "expected f32")?;
    let timeout = env_opt_parse::<u64>("LLM_TIMEOUT_SECS", "expected u64 seconds")?
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    Ok((max_tokens, temperature, Some(timeout)))
}

/// Gemini / Gemma via the Generative Language API.
pub fn config_gemini() -> Result<LlmModelConfig, AiLlmError> {
    let api_key = must_env("GEMINI_API_KEY")?;
    let (max_tokens, temperature, timeout_secs) = common_knobs()?;

    Ok(LlmModelConfig {
        provider: LlmProvider::Gemini,
        model: env_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
        endpoint: env_or("GEMINI_URL", DEFAULT_GEMINI_URL),
        api_key: Some(api_key),
        max_tokens,
        temperature,
        top_p: None,
        timeout_secs,
    })
}

/// Resolves the Ollama endpoint.
///
/// Precedence:
/// 1. `OLLAMA_URL` if present and non-empty
/// 2. `OLLAMA_PORT` → `http://localhost:{port}`
fn ollama_endpoint() -> Result<String, AiLlmError> {
    if let Ok(url) = std::env::var("OLLAMA_URL") {
        if !url.trim().is_empty() {
            return Ok(url);
        }
    }
    if let Some(port) = env_opt_parse::<u16>("OLLAMA_PORT", "expected u16 (1..=65535)")? {
        return Ok(format!("http://localhost:{port}"));
    }
    Err(ConfigError::MissingVar("OLLAMA_URL or OLLAMA_PORT").into())
}

/// Local Ollama runtime.
pub fn config_ollama() -> Result<LlmModelConfig, AiLlmError> {
    let endpoint = ollama_endpoint()?;
    let model = must_env("OLLAMA_MODEL")?;
    let (max_tokens, temperature, timeout_secs) = common_knobs()?;

    Ok(LlmModelConfig {
        provider: LlmProvider::Ollama,
        model,
        endpoint,
        api_key: None,
        max_tokens,
        temperature,
        top_p: None,
        timeout_secs,
    })
}

/// OpenAI or a compatible `/v1/chat/completions` server.
pub fn config_openai() -> Result<LlmModelConfig, AiLlmError> {
    let api_key = must_env("OPENAI_API_KEY")?;
    let model = must_env("OPENAI_MODEL")?;
    let (max_tokens, temperature, timeout_secs) = common_knobs()?;

    Ok(LlmModelConfig {
        provider: LlmProvider::OpenAI,
        model,
        endpoint: env_or("OPENAI_URL", DEFAULT_OPENAI_URL),
        api_key: Some(api_key),
        max_tokens,
        temperature,
        top_p: None,
        timeout_secs,
    })
}
