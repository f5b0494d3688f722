//! Lexicon-based sentiment scorer.
//!
//! A small word-polarity lexicon in the spirit of TextBlob's polarity score:
//! each matched word contributes +1 or -1, the result is the mean over
//! matched words, so the score stays in [-1, 1]. Good enough to trace a
//! candidate's mood over a conversation; swap in a real model behind the
//! `SentimentScorer` trait if you need better.

use async_trait::async_trait;

use crate::collab::{Sentiment, SentimentScorer};
use crate::error::SentimentError;

const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "amazing",
    "awesome",
    "fantastic",
    "wonderful",
    "love",
    "like",
    "enjoy",
    "happy",
    "glad",
    "excited",
    "passionate",
    "comfortable",
    "confident",
    "strong",
    "nice",
    "interesting",
    "fun",
    "best",
    "perfect",
    "easy",
    "thanks",
    "thank",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "horrible",
    "hate",
    "dislike",
    "sad",
    "angry",
    "frustrated",
    "frustrating",
    "difficult",
    "hard",
    "struggle",
    "weak",
    "boring",
    "worst",
    "poor",
    "annoying",
    "confusing",
    "stressful",
    "nervous",
    "worried",
    "afraid",
];

/// Word-list polarity scorer.
pub struct LexiconScorer;

impl LexiconScorer {
    fn polarity(text: &str) -> f32 {
        let lower = text.to_lowercase();
        let mut sum = 0i32;
        let mut hits = 0i32;
        for word in lower.split(|c: char| !c.is_alphanumeric()) {
            if word.is_empty() {
                continue;
            }
            if POSITIVE_WORDS.contains(&word) {
                sum += 1;
                hits += 1;
            } else if NEGATIVE_WORDS.contains(&word) {
                sum -= 1;
                hits += 1;
            }
        }
        if hits == 0 {
            0.0
        } else {
            sum as f32 / hits as f32
        }
    }
}

#[async_trait]
impl SentimentScorer for LexiconScorer {
    async fn score(&self, text: &str) -> Result<Sentiment, SentimentError> {
        Ok(Sentiment::from_score(Self::polarity(text)))
    }
}
