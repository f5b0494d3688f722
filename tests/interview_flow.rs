//! End-to-end interview flow tests with scripted collaborators.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::Mutex;

use screen_assist::collab::sink::InterviewRecord;
use screen_assist::collab::{
    IdentityTranslator, LexiconScorer, Sentiment, SentimentScorer, TranscriptSink, Translator,
};
use screen_assist::config::InterviewConfig;
use screen_assist::error::{SentimentError, StoreError, TranslateError};
use screen_assist::questions::QuestionBank;
use screen_assist::session::{InterviewSession, SessionDeps, Stage};

/// Counts store calls and keeps the last record for inspection.
#[derive(Default)]
struct CountingSink {
    calls: AtomicUsize,
    last: Mutex<Option<InterviewRecord>>,
}

#[async_trait]
impl TranscriptSink for CountingSink {
    async fn store(&self, record: &InterviewRecord) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().await = Some(record.clone());
        Ok(())
    }
}

/// Detects Spanish for utterances starting with "¡" and tags translations so
/// tests can see which direction ran.
struct TaggingTranslator;

#[async_trait]
impl Translator for TaggingTranslator {
    async fn detect_language(&self, text: &str) -> Result<String, TranslateError> {
        if text.starts_with('¡') {
            Ok("es".to_string())
        } else {
            Ok("en".to_string())
        }
    }

    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslateError> {
        if source == target {
            return Ok(text.to_string());
        }
        Ok(format!("[{source}->{target}] {text}"))
    }
}

/// Always fails, to exercise the neutral-sentiment fallback.
struct BrokenScorer;

#[async_trait]
impl SentimentScorer for BrokenScorer {
    async fn score(&self, _text: &str) -> Result<Sentiment, SentimentError> {
        Err(SentimentError::ScoreFailed("model offline".to_string()))
    }
}

fn deps_with_sink(sink: Arc<CountingSink>) -> SessionDeps {
    SessionDeps {
        translator: Arc::new(IdentityTranslator),
        sentiment: Arc::new(LexiconScorer),
        generator: None,
        sink,
    }
}

fn session(deps: SessionDeps) -> InterviewSession {
    InterviewSession::new(
        InterviewConfig::default(),
        Arc::new(QuestionBank::builtin()),
        deps,
    )
    .with_rng(Box::new(StdRng::seed_from_u64(1)))
}

const INTAKE_ANSWERS: [&str; 7] = [
    "doing well today",
    "Alice Example",
    "alice@example.com",
    "+1 555 0100",
    "6 years",
    "Platform Engineer",
    "Lisbon",
];

async fn run_intake(s: &mut InterviewSession) {
    s.start().await;
    for answer in INTAKE_ANSWERS {
        s.handle_utterance(answer).await;
    }
}

#[tokio::test]
async fn intake_fills_every_profile_field_in_order() {
    let mut s = session(deps_with_sink(Arc::new(CountingSink::default())));
    run_intake(&mut s).await;

    let profile = s.profile();
    assert_eq!(profile.name, "Alice Example");
    assert_eq!(profile.email, "alice@example.com");
    assert_eq!(profile.phone, "+1 555 0100");
    assert_eq!(profile.experience, "6 years");
    assert_eq!(profile.position, "Platform Engineer");
    assert_eq!(profile.location, "Lisbon");
    assert!(profile.tech_stack.is_empty(), "empty until tech_stack stage");
    assert_eq!(s.stage(), Stage::TechStack);
}

#[tokio::test]
async fn tech_stack_filters_to_known_keys_in_order() {
    let mut s = session(deps_with_sink(Arc::new(CountingSink::default())));
    run_intake(&mut s).await;

    let replies = s.handle_utterance("Python, Unknowntech, SQL").await;
    assert_eq!(s.profile().tech_stack, vec!["python", "sql"]);
    assert_eq!(s.stage(), Stage::TechnicalQuestions);
    assert_eq!(replies.len(), 1);
    assert!(replies[0].starts_with("About Python:"));
}

#[tokio::test]
async fn unknown_tech_stack_emits_two_messages_and_wraps_up() {
    let mut s = session(deps_with_sink(Arc::new(CountingSink::default())));
    run_intake(&mut s).await;

    let replies = s.handle_utterance("foobar, bazqux").await;
    assert_eq!(replies.len(), 2);
    assert!(replies[0].contains("don't have specific technical questions"));
    assert!(replies[1].contains("technical background"));
    assert_eq!(s.stage(), Stage::WrapUp);
}

#[tokio::test]
async fn no_bank_question_repeats_within_a_conversation() {
    let mut s = InterviewSession::new(
        InterviewConfig {
            max_questions_per_tech: 10,
            ..Default::default()
        },
        Arc::new(QuestionBank::builtin()),
        deps_with_sink(Arc::new(CountingSink::default())),
    )
    .with_rng(Box::new(StdRng::seed_from_u64(1)));
    run_intake(&mut s).await;

    let mut replies = s.handle_utterance("python").await;
    let mut seen = std::collections::HashSet::new();
    let mut asked = 0;
    while s.stage() == Stage::TechnicalQuestions {
        assert_eq!(replies.len(), 1);
        assert!(seen.insert(replies[0].clone()), "question repeated");
        asked += 1;
        replies = s.handle_utterance("here is my answer").await;
    }
    // The python bank holds exactly 5 questions; exhaustion beats the cap.
    assert_eq!(asked, 5);
    assert_eq!(s.stage(), Stage::WrapUp);
}

#[tokio::test]
async fn exit_phrase_ends_and_stores_exactly_once() {
    let sink = Arc::new(CountingSink::default());
    let mut s = session(deps_with_sink(Arc::clone(&sink)));
    s.start().await;
    s.handle_utterance("hello there").await;
    s.handle_utterance("Alice Example").await;

    let replies = s.handle_utterance("thanks, bye!").await;
    assert!(s.is_ended());
    assert_eq!(replies.len(), 1);
    assert!(replies[0].contains("Alice Example"));
    assert_eq!(sink.calls.load(Ordering::SeqCst), 1);

    // Further input is a no-op; the sink is never invoked again.
    assert!(s.handle_utterance("bye again").await.is_empty());
    assert_eq!(sink.calls.load(Ordering::SeqCst), 1);

    let record = sink.last.lock().await.clone().unwrap();
    assert_eq!(record.candidate.name, "Alice Example");
    let last = record.messages.last().unwrap();
    assert!(last.text.contains("Have a great day"));
    // One trace point per user message.
    assert_eq!(record.sentiment_trace.len(), 3);
}

#[tokio::test]
async fn detected_language_switches_assistant_replies() {
    let deps = SessionDeps {
        translator: Arc::new(TaggingTranslator),
        sentiment: Arc::new(LexiconScorer),
        generator: None,
        sink: Arc::new(CountingSink::default()),
    };
    let mut s = session(deps);
    s.start().await;

    // English utterance: source == target, replies untagged.
    let replies = s.handle_utterance("hello!").await;
    assert!(!replies[0].contains("->"));

    // Spanish utterance: preference flips, replies now translated out.
    let replies = s.handle_utterance("¡Soy Alicia!").await;
    assert_eq!(s.language().code, "es");
    assert!(replies[0].starts_with("[en->es] "));

    // The transcript keeps the original user text, not the translation.
    let user_texts: Vec<&str> = s
        .transcript()
        .messages()
        .iter()
        .filter(|m| m.sentiment.is_some())
        .map(|m| m.text.as_str())
        .collect();
    assert!(user_texts.contains(&"¡Soy Alicia!"));
}

#[tokio::test]
async fn sentiment_failure_defaults_to_neutral() {
    let sink = Arc::new(CountingSink::default());
    let deps = SessionDeps {
        translator: Arc::new(IdentityTranslator),
        sentiment: Arc::new(BrokenScorer),
        generator: None,
        sink: sink.clone(),
    };
    let mut s = session(deps);
    s.start().await;
    s.handle_utterance("hello").await;
    s.handle_utterance("goodbye").await;
    assert!(s.is_ended());

    let record = sink.last.lock().await.clone().unwrap();
    for point in &record.sentiment_trace {
        assert_eq!(point.score, 0.0);
    }
}

#[tokio::test]
async fn reset_then_start_matches_a_fresh_conversation() {
    let mut s = session(deps_with_sink(Arc::new(CountingSink::default())));
    run_intake(&mut s).await;
    s.handle_utterance("python").await;

    s.reset();
    let greeting_after_reset = s.start().await;

    let mut fresh = session(deps_with_sink(Arc::new(CountingSink::default())));
    let greeting_fresh = fresh.start().await;

    assert_eq!(greeting_after_reset, greeting_fresh);
    assert_eq!(s.stage(), fresh.stage());
    assert_eq!(s.profile(), fresh.profile());
    assert_eq!(s.transcript().len(), fresh.transcript().len());
    assert_eq!(s.language(), fresh.language());
}
