use crate::{
    config::llm_provider::LlmProvider,
    error_handler::{ConfigError, Result, validate_http_endpoint, validate_range_f32},
};

/// Configuration for a generation backend.
///
/// # Fields
///
/// - `provider`: which backend to call (Gemini, Ollama, OpenAI-compatible).
/// - `model`: the model identifier (e.g. `"gemma-3-1b-it"`, `"llama3"`).
/// - `endpoint`: base URL of the API, without a trailing path.
/// - `api_key`: key for providers that require authentication.
/// - `max_tokens`: upper bound on generated tokens (if supported).
/// - `temperature`: sampling temperature.
/// - `top_p`: nucleus sampling cutoff.
/// - `timeout_secs`: HTTP timeout for one generation call.
///
/// # Examples
///
/// ```
/// use ai_llm_service::{LlmModelConfig, LlmProvider};
///
/// let cfg = LlmModelConfig {
///     provider: LlmProvider::Gemini,
///     model: "gemma-3-1b-it".to_string(),
///     endpoint: "https://generativelanguage.googleapis.com".to_string(),
///     api_key: Some("key".to_string()),
///     max_tokens: None,
///     temperature: Some(0.2),
///     top_p: None,
///     timeout_secs: Some(60),
/// };
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Clone, PartialEq)]
pub struct LlmModelConfig {
    /// The backend provider.
    pub provider: LlmProvider,

    /// Model identifier string.
    pub model: String,

    /// Base URL (`http://` or `https://`).
    pub endpoint: String,

    /// API key (Gemini, OpenAI).
    pub api_key: Option<String>,

    /// Maximum number of tokens to generate.
    pub max_tokens: Option<u32>,

    /// Sampling temperature.
    pub temperature: Option<f32>,

    /// Nucleus sampling parameter.
    pub top_p: Option<f32>,

    /// Request timeout (in seconds).
    pub timeout_secs: Option<u64>,
}

impl LlmModelConfig {
    /// Checks the invariants every provider relies on.
    ///
    /// # Errors
    /// - [`ConfigError::EmptyModel`] if `model` is blank
    /// - [`ConfigError::InvalidFormat`] if `endpoint` has no http(s) scheme
    /// - [`ConfigError::OutOfRange`] for `temperature` outside `0.0..=2.0`
    ///   or `top_p` outside `0.0..=1.0`
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::EmptyModel.into());
        }
        validate_http_endpoint("endpoint", &self.endpoint)?;
        if let Some(t) = self.temperature {
            validate_range_f32("temperature", t, 0.0, 2.0)?;
        }
        if let Some(p) = self.top_p {
            validate_range_f32("top_p", p, 0.0, 1.0)?;
        }
        Ok(())
    }
}

// Manual impl so the API key never ends up in logs.
impl std::fmt::Debug for LlmModelConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmModelConfig")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("top_p", &self.top_p)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handler::AiLlmError;

    fn base() -> LlmModelConfig {
        LlmModelConfig {
            provider: LlmProvider::Ollama,
            model: "llama3".into(),
            endpoint: "http://localhost:11434".into(),
            api_key: Some("secret-key".into()),
            max_tokens: Some(256),
            temperature: Some(0.7),
            top_p: Some(0.9),
            timeout_secs: Some(30),
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(base().validate().is_ok());
    }

    #[test]
    fn blank_model_is_rejected() {
        let cfg = LlmModelConfig {
            model: "  ".into(),
            ..base()
        };
        assert!(matches!(
            cfg.validate(),
            Err(AiLlmError::Config(ConfigError::EmptyModel))
        ));
    }

    #[test]
    fn endpoint_needs_scheme() {
        let cfg = LlmModelConfig {
            endpoint: "localhost:11434".into(),
            ..base()
        };
        assert!(matches!(
            cfg.validate(),
            Err(AiLlmError::Config(ConfigError::InvalidFormat { .. }))
        ));
    }

    #[test]
    fn temperature_out_of_range() {
        let cfg = LlmModelConfig {
            temperature: Some(3.5),
            ..base()
        };
        assert!(matches!(
            cfg.validate(),
            Err(AiLlmError::Config(ConfigError::OutOfRange {
                field: "temperature",
                ..
            }))
        ));
    }

    #[test]
    fn debug_hides_api_key() {
        let rendered = format!("{:?}", base());
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("***"));
    }
}
