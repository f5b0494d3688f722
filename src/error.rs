//! Error types for Screen Assist.

use uuid::Uuid;

/// Top-level error type for the interview engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Translation error: {0}")]
    Translate(#[from] TranslateError),

    #[error("Sentiment error: {0}")]
    Sentiment(#[from] SentimentError),

    #[error("Question generation error: {0}")]
    Generate(#[from] GenerateError),

    #[error("Transcript store error: {0}")]
    Store(#[from] StoreError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Translation collaborator errors.
///
/// The engine never surfaces these to the candidate — a failed detection or
/// translation degrades to the original text.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("Translation request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response from translation service: {0}")]
    InvalidResponse(String),
}

/// Sentiment collaborator errors. The engine degrades to a neutral score.
#[derive(Debug, thiserror::Error)]
pub enum SentimentError {
    #[error("Sentiment scoring failed: {0}")]
    ScoreFailed(String),
}

/// Question generator errors. The engine falls back to the predefined bank.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Generation request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response from generator: {0}")]
    InvalidResponse(String),
}

/// Transcript persistence errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Session registry errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session {0} not found")]
    NotFound(Uuid),
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
