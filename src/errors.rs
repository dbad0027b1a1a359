use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("No API key configured for {0}. Set GEMINI_API_KEY to continue.")]
    MissingApiKey(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Api(String),

    #[error("Unexpected API response: {0}")]
    InvalidResponse(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Unknown style '{0}'; expected one of: trap, boom-bap, conscious, drill, old-school")]
    UnknownStyle(String),
}
