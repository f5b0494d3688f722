//! Collaborator interfaces consumed by the interview engine.
//!
//! The engine only decides how collaborator *results* advance the
//! conversation; translation, sentiment, generation, and persistence are all
//! behind async traits so they can be swapped out (and mocked in tests).
//! Every trait returns an explicit `Result` — the engine consumes failures
//! with documented fallbacks instead of letting collaborators panic or
//! swallow errors.

pub mod generator;
pub mod language;
pub mod sentiment;
pub mod sink;
pub mod translate;

pub use generator::HttpQuestionGenerator;
pub use language::{LanguagePreference, CANONICAL_LANGUAGE, SUPPORTED_LANGUAGES};
pub use sentiment::LexiconScorer;
pub use sink::{InterviewRecord, JsonFileSink, NullSink};
pub use translate::{HttpTranslator, IdentityTranslator};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{GenerateError, SentimentError, StoreError, TranslateError};

/// Sentiment category derived from a numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentCategory {
    Positive,
    Neutral,
    Negative,
}

impl std::fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Neutral => write!(f, "neutral"),
            Self::Negative => write!(f, "negative"),
        }
    }
}

/// A scored sentiment: category plus raw polarity in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub category: SentimentCategory,
    pub score: f32,
}

impl Sentiment {
    /// Categorize a raw polarity score. Positive above 0.3, negative below
    /// -0.3, neutral in between.
    pub fn from_score(score: f32) -> Self {
        let category = if score > 0.3 {
            SentimentCategory::Positive
        } else if score < -0.3 {
            SentimentCategory::Negative
        } else {
            SentimentCategory::Neutral
        };
        Self { category, score }
    }

    /// The fallback value when scoring is unavailable.
    pub fn neutral() -> Self {
        Self {
            category: SentimentCategory::Neutral,
            score: 0.0,
        }
    }
}

/// Language detection and translation.
///
/// Implementations should short-circuit `translate` when source and target
/// are equal; the engine relies on that being an identity operation.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Detect the language of `text`, returning an ISO 639-1 code.
    async fn detect_language(&self, text: &str) -> Result<String, TranslateError>;

    /// Translate `text` from `source` to `target`.
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslateError>;
}

/// Sentiment scoring for user utterances.
#[async_trait]
pub trait SentimentScorer: Send + Sync {
    async fn score(&self, text: &str) -> Result<Sentiment, SentimentError>;
}

/// Optional free-text question generation.
///
/// `Ok(None)` means "no suggestion" — the selector falls back to the
/// predefined bank. Acceptance checks on the suggestion text are the
/// selector's job, not the generator's.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate(&self, tech: &str) -> Result<Option<String>, GenerateError>;
}

/// Sink for a finished conversation. Invoked exactly once per conversation;
/// failures are logged by the engine and never surfaced to the candidate.
#[async_trait]
pub trait TranscriptSink: Send + Sync {
    async fn store(&self, record: &InterviewRecord) -> Result<(), StoreError>;
}
