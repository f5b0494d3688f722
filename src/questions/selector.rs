//! Question selection.

use std::collections::HashSet;
use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::RngCore;

use crate::collab::QuestionGenerator;
use crate::config::InterviewConfig;
use crate::questions::QuestionBank;

/// Outcome of a selection attempt.
///
/// `Exhausted` is a value, never an error: callers must be able to advance to
/// the next technology (or wrap up) deterministically when a bank runs dry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Question(String),
    Exhausted,
}

/// Picks the next question for a technology: generator first (subject to an
/// acceptance check), then a uniform-random choice from the bank questions
/// not yet asked.
pub struct QuestionSelector {
    bank: Arc<QuestionBank>,
    min_generated_len: usize,
    require_question_mark: bool,
}

impl QuestionSelector {
    pub fn new(bank: Arc<QuestionBank>, config: &InterviewConfig) -> Self {
        Self {
            bank,
            min_generated_len: config.min_generated_len,
            require_question_mark: config.require_question_mark,
        }
    }

    /// Select a fresh question for `tech`.
    ///
    /// Any returned question is added to `asked`. Generated questions are
    /// recorded there but deliberately not checked against it — only bank
    /// questions carry the no-repeat guarantee.
    pub async fn select(
        &self,
        tech: &str,
        asked: &mut HashSet<String>,
        generator: Option<&dyn QuestionGenerator>,
        rng: &mut dyn RngCore,
    ) -> Selection {
        if let Some(generator) = generator {
            match generator.generate(tech).await {
                Ok(Some(question)) if self.is_acceptable(&question) => {
                    asked.insert(question.clone());
                    return Selection::Question(question);
                }
                Ok(Some(question)) => {
                    tracing::debug!(tech, rejected = %question, "Generated question rejected");
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(tech, error = %e, "Question generation failed; using bank");
                }
            }
        }

        let available: Vec<&String> = self
            .bank
            .questions_for(tech)
            .iter()
            .filter(|q| !asked.contains(*q))
            .collect();

        match available.choose(rng) {
            Some(question) => {
                let question = (*question).clone();
                asked.insert(question.clone());
                Selection::Question(question)
            }
            None => Selection::Exhausted,
        }
    }

    /// Guard against truncated or malformed generated text.
    fn is_acceptable(&self, question: &str) -> bool {
        question.len() >= self.min_generated_len
            && (!self.require_question_mark || question.contains('?'))
    }
}
