//! Session registry — the external interface for running multiple
//! independent conversations.
//!
//! Each conversation is an [`InterviewSession`] behind its own lock; the
//! only shared resource is the read-only question bank. Distinct sessions
//! can be driven in parallel, while each individual conversation processes
//! one utterance at a time.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::config::InterviewConfig;
use crate::error::SessionError;
use crate::questions::QuestionBank;
use crate::session::engine::{InterviewSession, SessionDeps};

pub struct SessionRegistry {
    config: InterviewConfig,
    bank: Arc<QuestionBank>,
    deps: SessionDeps,
    sessions: RwLock<HashMap<Uuid, Arc<Mutex<InterviewSession>>>>,
}

impl SessionRegistry {
    pub fn new(config: InterviewConfig, bank: Arc<QuestionBank>, deps: SessionDeps) -> Self {
        Self {
            config,
            bank,
            deps,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Start a new conversation. Returns its handle and the greeting.
    pub async fn start_conversation(&self) -> (Uuid, Vec<String>) {
        let mut session = InterviewSession::new(
            self.config.clone(),
            Arc::clone(&self.bank),
            self.deps.clone(),
        );
        let greeting = session.start().await;
        let id = session.id();
        self.sessions
            .write()
            .await
            .insert(id, Arc::new(Mutex::new(session)));
        tracing::info!(session = %id, "Conversation started");
        (id, greeting)
    }

    /// Feed one utterance to a conversation.
    pub async fn handle_utterance(
        &self,
        id: Uuid,
        text: &str,
    ) -> Result<Vec<String>, SessionError> {
        let session = self.get(id).await?;
        let mut session = session.lock().await;
        Ok(session.handle_utterance(text).await)
    }

    pub async fn is_ended(&self, id: Uuid) -> Result<bool, SessionError> {
        let session = self.get(id).await?;
        let session = session.lock().await;
        Ok(session.is_ended())
    }

    /// Reset a conversation to a pristine state and re-open it. The returned
    /// greeting makes the handle indistinguishable from a freshly started one.
    pub async fn reset(&self, id: Uuid) -> Result<Vec<String>, SessionError> {
        let session = self.get(id).await?;
        let mut session = session.lock().await;
        session.reset();
        Ok(session.start().await)
    }

    /// Drop a conversation. Returns whether it existed.
    pub async fn remove(&self, id: Uuid) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    async fn get(&self, id: Uuid) -> Result<Arc<Mutex<InterviewSession>>, SessionError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(SessionError::NotFound(id))
    }
}
