//! The interview dialog state machine.
//!
//! One `InterviewSession` owns all state for one conversation and processes
//! utterances strictly one at a time. Collaborators come in through
//! [`SessionDeps`]; their failures degrade conversationally and are never
//! surfaced to the candidate as diagnostics.

use std::collections::HashSet;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use uuid::Uuid;

use crate::collab::sink::InterviewRecord;
use crate::collab::{
    LanguagePreference, QuestionGenerator, Sentiment, SentimentScorer, TranscriptSink, Translator,
};
use crate::config::InterviewConfig;
use crate::questions::{QuestionBank, QuestionSelector, Selection};
use crate::session::profile::{normalize_tech_stack, CandidateProfile};
use crate::session::script;
use crate::session::stage::Stage;
use crate::session::transcript::Transcript;

/// Collaborators injected into every session.
#[derive(Clone)]
pub struct SessionDeps {
    pub translator: Arc<dyn Translator>,
    pub sentiment: Arc<dyn SentimentScorer>,
    pub generator: Option<Arc<dyn QuestionGenerator>>,
    pub sink: Arc<dyn TranscriptSink>,
}

/// One screening conversation.
pub struct InterviewSession {
    id: Uuid,
    config: InterviewConfig,
    bank: Arc<QuestionBank>,
    selector: QuestionSelector,
    deps: SessionDeps,
    rng: Box<dyn RngCore + Send>,

    stage: Stage,
    profile: CandidateProfile,
    transcript: Transcript,
    /// Question texts already asked, across all technologies.
    asked: HashSet<String>,
    /// Index into `profile.tech_stack` of the technology under discussion.
    tech_index: usize,
    /// Questions asked so far for the current technology.
    tech_question_count: u32,
    language: LanguagePreference,
}

impl InterviewSession {
    pub fn new(config: InterviewConfig, bank: Arc<QuestionBank>, deps: SessionDeps) -> Self {
        let selector = QuestionSelector::new(Arc::clone(&bank), &config);
        Self {
            id: Uuid::new_v4(),
            config,
            bank,
            selector,
            deps,
            rng: Box::new(StdRng::from_entropy()),
            stage: Stage::Greeting,
            profile: CandidateProfile::default(),
            transcript: Transcript::new(),
            asked: HashSet::new(),
            tech_index: 0,
            tech_question_count: 0,
            language: LanguagePreference::default(),
        }
    }

    /// Replace the randomness source. Tests inject a seeded RNG here.
    pub fn with_rng(mut self, rng: Box<dyn RngCore + Send>) -> Self {
        self.rng = rng;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn profile(&self) -> &CandidateProfile {
        &self.profile
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn language(&self) -> &LanguagePreference {
        &self.language
    }

    pub fn is_ended(&self) -> bool {
        self.stage.is_terminal()
    }

    /// Open the conversation with the greeting. Emits nothing if the
    /// conversation has already started.
    pub async fn start(&mut self) -> Vec<String> {
        let mut replies = Vec::new();
        if self.stage == Stage::Greeting && self.transcript.is_empty() {
            self.say(script::greeting(), &mut replies).await;
        }
        replies
    }

    /// Restore the session to a pristine state, keeping configuration and
    /// collaborators. There is no partial reset.
    pub fn reset(&mut self) {
        self.stage = Stage::Greeting;
        self.profile = CandidateProfile::default();
        self.transcript = Transcript::new();
        self.asked.clear();
        self.tech_index = 0;
        self.tech_question_count = 0;
        self.language = LanguagePreference::default();
    }

    /// Process one candidate utterance and return the assistant's replies,
    /// already translated to the candidate's preferred language.
    ///
    /// Input after the conversation has ended is a no-op; callers should
    /// check [`is_ended`](Self::is_ended) first.
    pub async fn handle_utterance(&mut self, raw: &str) -> Vec<String> {
        let mut replies = Vec::new();
        if self.is_ended() {
            return replies;
        }

        // 1. Detect language, normalize to the canonical language. A failed
        //    detection or translation degrades to the raw text.
        let text = self.normalize_inbound(raw).await;

        // 2. Record the original utterance with its sentiment. Scoring
        //    failure defaults to neutral.
        let sentiment = match self.deps.sentiment.score(raw).await {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(error = %e, "Sentiment scoring failed; defaulting to neutral");
                Sentiment::neutral()
            }
        };
        self.transcript.push_user(raw, Some(sentiment));

        // 3. Exit phrases take priority over all stage logic.
        if self.stage != Stage::Greeting && script::contains_exit_phrase(&text) {
            self.finish(&mut replies).await;
            return replies;
        }

        // 4. Stage dispatch.
        match self.stage {
            Stage::Greeting => {
                // Content ignored; the greeting answer just moves us along.
                self.stage = Stage::Name;
                self.say(script::ask_name(), &mut replies).await;
            }
            Stage::Name => {
                self.profile.name = text;
                self.stage = Stage::Email;
                self.say(script::ask_email(&self.profile.name), &mut replies)
                    .await;
            }
            Stage::Email => {
                self.profile.email = text;
                self.stage = Stage::Phone;
                self.say(script::ask_phone(), &mut replies).await;
            }
            Stage::Phone => {
                self.profile.phone = text;
                self.stage = Stage::Experience;
                self.say(script::ask_experience(), &mut replies).await;
            }
            Stage::Experience => {
                self.profile.experience = text;
                self.stage = Stage::Position;
                self.say(script::ask_position(), &mut replies).await;
            }
            Stage::Position => {
                self.profile.position = text;
                self.stage = Stage::Location;
                self.say(script::ask_location(), &mut replies).await;
            }
            Stage::Location => {
                self.profile.location = text;
                self.stage = Stage::TechStack;
                self.say(script::ask_tech_stack(), &mut replies).await;
            }
            Stage::TechStack => {
                self.handle_tech_stack(&text, &mut replies).await;
            }
            Stage::TechnicalQuestions => {
                self.handle_technical_answer(&mut replies).await;
            }
            Stage::WrapUp => {
                self.finish(&mut replies).await;
            }
            // Unreachable: checked at the top. Kept explicit so the match
            // stays exhaustive.
            Stage::Ended => {}
        }

        replies
    }

    /// Detect the utterance's language, update the candidate's preference if
    /// it changed to a supported language, and return the canonical-language
    /// form of the text.
    async fn normalize_inbound(&mut self, raw: &str) -> String {
        let canonical = self.config.canonical_language.clone();
        let detected = match self.deps.translator.detect_language(raw).await {
            Ok(code) => code,
            Err(e) => {
                tracing::warn!(error = %e, "Language detection failed; assuming canonical");
                return raw.to_string();
            }
        };

        if detected == canonical {
            return raw.to_string();
        }

        if let Some(pref) = LanguagePreference::for_code(&detected) {
            if pref != self.language {
                tracing::info!(language = %pref.name, "Candidate language updated");
                self.language = pref;
            }
        }

        match self
            .deps
            .translator
            .translate(raw, &detected, &canonical)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "Inbound translation failed; using raw text");
                raw.to_string()
            }
        }
    }

    async fn handle_tech_stack(&mut self, text: &str, replies: &mut Vec<String>) {
        let requested = normalize_tech_stack(text);
        let valid: Vec<String> = requested
            .into_iter()
            .filter(|tech| self.bank.contains(tech))
            .collect();

        if valid.is_empty() {
            // No recognized technology: acknowledge, ask one generic
            // question, and skip the technical round entirely.
            self.profile.tech_stack = valid;
            self.say(script::unknown_tech_notice(), replies).await;
            self.say(script::general_question(), replies).await;
            self.stage = Stage::WrapUp;
            return;
        }

        self.profile.tech_stack = valid;
        self.stage = Stage::TechnicalQuestions;
        self.tech_index = 0;
        self.tech_question_count = 0;
        self.ask_next_question(replies).await;
    }

    async fn handle_technical_answer(&mut self, replies: &mut Vec<String>) {
        if self.profile.tech_stack.is_empty() {
            // Internal inconsistency: technical stage with nothing to ask
            // about. Clarify without changing stage.
            self.fallback(replies).await;
            return;
        }

        self.tech_question_count += 1;
        if self.tech_question_count >= self.config.max_questions_per_tech {
            self.tech_index += 1;
            self.tech_question_count = 0;
        }
        if self.tech_index < self.profile.tech_stack.len() {
            self.ask_next_question(replies).await;
        } else {
            self.enter_wrap_up(replies).await;
        }
    }

    /// Ask a question for the current technology, skipping forward through
    /// exhausted technologies. The loop is bounded by the tech-stack length,
    /// so a whole chain of dry banks is crossed within one turn.
    async fn ask_next_question(&mut self, replies: &mut Vec<String>) {
        while self.tech_index < self.profile.tech_stack.len() {
            let tech = self.profile.tech_stack[self.tech_index].clone();
            let generator = self.deps.generator.as_deref();
            match self
                .selector
                .select(&tech, &mut self.asked, generator, self.rng.as_mut())
                .await
            {
                Selection::Question(question) => {
                    self.say(script::tech_question(&tech, &question), replies)
                        .await;
                    return;
                }
                Selection::Exhausted => {
                    tracing::debug!(tech, "Question bank exhausted; advancing");
                    self.tech_index += 1;
                    self.tech_question_count = 0;
                }
            }
        }
        self.enter_wrap_up(replies).await;
    }

    async fn enter_wrap_up(&mut self, replies: &mut Vec<String>) {
        self.stage = Stage::WrapUp;
        self.say(script::wrap_up(&self.profile.name), replies).await;
    }

    /// Farewell handling. Idempotent: once ended, calling again does nothing.
    /// The transcript is handed to the sink exactly once, fire-and-forget.
    async fn finish(&mut self, replies: &mut Vec<String>) {
        if self.is_ended() {
            return;
        }

        let farewell = script::farewell(
            &self.profile.name,
            &self.profile.email,
            &self.profile.phone,
        );
        self.say(farewell, replies).await;
        self.stage = Stage::Ended;

        let record = InterviewRecord {
            candidate: self.profile.clone(),
            messages: self.transcript.messages().to_vec(),
            sentiment_trace: self.transcript.trace().to_vec(),
        };
        if let Err(e) = self.deps.sink.store(&record).await {
            tracing::warn!(session = %self.id, error = %e, "Failed to persist transcript");
        }
    }

    /// Defensive clarification, uniformly random, stage unchanged.
    async fn fallback(&mut self, replies: &mut Vec<String>) {
        let line = script::FALLBACK_REPLIES
            .choose(self.rng.as_mut())
            .copied()
            .unwrap_or(script::FALLBACK_REPLIES[0]);
        self.say(line.to_string(), replies).await;
    }

    /// Translate an assistant line to the candidate's language, record it,
    /// and queue it for the caller.
    async fn say(&mut self, text: String, replies: &mut Vec<String>) {
        let rendered = if self.language.code == self.config.canonical_language {
            text
        } else {
            match self
                .deps
                .translator
                .translate(&text, &self.config.canonical_language, &self.language.code)
                .await
            {
                Ok(translated) => translated,
                Err(e) => {
                    tracing::warn!(error = %e, "Outbound translation failed; sending canonical");
                    text
                }
            }
        };
        self.transcript.push_assistant(&rendered);
        replies.push(rendered);
    }
}
