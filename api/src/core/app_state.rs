use thiserror::Error;

use crate::core::auth::BearerAuth;

pub const DEFAULT_API_ADDRESS: &str = "0.0.0.0:5000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),
}

/// Startup configuration for the HTTP layer.
#[derive(Clone)]
pub struct ApiConfig {
    /// Listen address, e.g. `0.0.0.0:5000`.
    pub address: String,
    /// Secret callers must present as `Authorization: Bearer <token>`.
    pub bearer_token: String,
}

impl ApiConfig {
    /// Load from environment variables.
    ///
    /// - `API_ADDRESS` (default `0.0.0.0:5000`)
    /// - `HACKRX_BEARER_TOKEN` (required)
    pub fn from_env() -> Result<Self, ConfigError> {
        let address = std::env::var("API_ADDRESS")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_ADDRESS.into());

        let bearer_token = std::env::var("HACKRX_BEARER_TOKEN")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVar("HACKRX_BEARER_TOKEN"))?;

        Ok(Self {
            address,
            bearer_token,
        })
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("address", &self.address)
            .field("bearer_token", &"***")
            .finish()
    }
}

/// Shared state for all HTTP handlers.
pub struct AppState<Q> {
    /// Caller authentication.
    pub auth: BearerAuth,
    /// The document query pipeline.
    pub query: Q,
}

impl<Q> AppState<Q> {
    pub fn new(config: &ApiConfig, query: Q) -> Self {
        Self {
            auth: BearerAuth::new(&config.bearer_token),
            query,
        }
    }
}
