//! Configuration types.

/// Interview flow configuration.
#[derive(Debug, Clone)]
pub struct InterviewConfig {
    /// Language all text is normalized to before stage logic runs.
    pub canonical_language: String,
    /// Questions asked per technology before advancing to the next one.
    pub max_questions_per_tech: u32,
    /// Minimum length for a generated question to be accepted.
    pub min_generated_len: usize,
    /// Whether a generated question must contain a question mark.
    pub require_question_mark: bool,
}

impl Default for InterviewConfig {
    fn default() -> Self {
        Self {
            canonical_language: "en".to_string(),
            max_questions_per_tech: 3,
            min_generated_len: 20,
            require_question_mark: true,
        }
    }
}
