use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// User-owned configuration file schema (`.ghostwriter/config.json`).
/// The app reads it and never writes it; env vars take precedence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Model name/ID (MODEL env var wins if set)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Style selected at startup, e.g. "boom-bap"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_style: Option<String>,

    /// API timeout in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Load config from `.ghostwriter/config.json`
    pub fn load() -> Result<Self> {
        Self::load_at(Path::new(".ghostwriter/config.json"))
    }

    pub fn load_at(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }
}
