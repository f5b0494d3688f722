//! Conversation transcript and sentiment trace.

use serde::{Deserialize, Serialize};

use crate::collab::Sentiment;

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// One transcript entry. Text is stored post-translation: the form the
/// message was actually displayed or received in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
}

/// One point of the sentiment trace: which message, what score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TracePoint {
    pub message_index: usize,
    pub score: f32,
}

/// Ordered message log plus the append-only sentiment trace.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
    trace: Vec<TracePoint>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user message; a scored sentiment also extends the trace.
    pub fn push_user(&mut self, text: impl Into<String>, sentiment: Option<Sentiment>) {
        self.messages.push(Message {
            role: Role::User,
            text: text.into(),
            sentiment,
        });
        if let Some(sentiment) = sentiment {
            self.trace.push(TracePoint {
                message_index: self.messages.len() - 1,
                score: sentiment.score,
            });
        }
    }

    /// Append an assistant message.
    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.messages.push(Message {
            role: Role::Assistant,
            text: text.into(),
            sentiment: None,
        });
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn trace(&self) -> &[TracePoint] {
        &self.trace
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_with_sentiment_extends_trace() {
        let mut t = Transcript::new();
        t.push_assistant("Hello!");
        t.push_user("Hi, doing great", Some(Sentiment::from_score(0.8)));

        assert_eq!(t.len(), 2);
        assert_eq!(t.trace().len(), 1);
        assert_eq!(t.trace()[0].message_index, 1);
        assert_eq!(t.trace()[0].score, 0.8);
    }

    #[test]
    fn assistant_messages_do_not_trace() {
        let mut t = Transcript::new();
        t.push_assistant("Welcome");
        t.push_assistant("What's your name?");
        assert!(t.trace().is_empty());
    }

    #[test]
    fn user_message_without_sentiment_does_not_trace() {
        let mut t = Transcript::new();
        t.push_user("hello", None);
        assert_eq!(t.len(), 1);
        assert!(t.trace().is_empty());
    }

    #[test]
    fn message_serde_omits_missing_sentiment() {
        let msg = Message {
            role: Role::Assistant,
            text: "Hi".to_string(),
            sentiment: None,
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(!json.contains("sentiment"));
        assert!(json.contains("\"assistant\""));
    }
}
