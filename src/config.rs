use std::env;
use std::fmt;

use crate::config_file::AppConfig;
use crate::types::ModelId;

pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// API credential. Debug output never reveals the key material.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Everything the generation service needs, resolved once at startup.
/// A missing credential is a typed absent state here; `submit` turns it
/// into a configuration error without contacting the service.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_key: Option<ApiKey>,
    pub model: ModelId,
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Resolve from `.env`, process env and `.ghostwriter/config.json`.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        let file = AppConfig::load().unwrap_or_default();
        Self::from_env_with(&file)
    }

    /// Resolve from process env overlaid on an already-loaded config file.
    pub fn from_env_with(file: &AppConfig) -> Self {
        Self::from_parts(
            env::var("GEMINI_API_KEY").ok(),
            env::var("MODEL").ok(),
            file,
        )
    }

    fn from_parts(key: Option<String>, model_env: Option<String>, file: &AppConfig) -> Self {
        let api_key = key.filter(|k| !k.trim().is_empty()).map(ApiKey::new);
        let model = model_env
            .or_else(|| file.model.clone())
            .map(ModelId::new)
            .unwrap_or_else(ModelId::gemini_flash);
        let timeout_secs = file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            api_key,
            model,
            timeout_secs,
        }
    }
}
