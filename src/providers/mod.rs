use std::time::Duration;

pub mod gemini;

use crate::config::ApiConfig;
use crate::errors::GenerateError;
use crate::types::ModelId;
use reqwest::Client;

pub(crate) struct ProviderHttpClient {
    client: Client,
}

impl ProviderHttpClient {
    pub fn new(timeout_secs: u64) -> Result<Self, GenerateError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { client })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

/// Trait for hosted text generation services
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for the given prompt
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;

    /// Get the name of this generator
    fn name(&self) -> &str;

    /// Get the model being used
    fn model(&self) -> &ModelId;

    /// Validate that this generator is properly configured
    fn validate_config(&self) -> Result<(), GenerateError>;
}

/// Create the generator described by the resolved configuration.
pub fn create_generator(config: &ApiConfig) -> Result<Box<dyn TextGenerator>, GenerateError> {
    Ok(Box::new(gemini::GeminiGenerator::new(config)?))
}
