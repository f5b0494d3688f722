//! Transcript persistence.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::collab::TranscriptSink;
use crate::error::StoreError;
use crate::session::profile::CandidateProfile;
use crate::session::transcript::{Message, TracePoint};

/// The record handed to a sink when a conversation ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewRecord {
    pub candidate: CandidateProfile,
    pub messages: Vec<Message>,
    pub sentiment_trace: Vec<TracePoint>,
}

/// Writes each finished conversation to a timestamped JSON file.
pub struct JsonFileSink {
    dir: PathBuf,
}

impl JsonFileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl TranscriptSink for JsonFileSink {
    async fn store(&self, record: &InterviewRecord) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.dir).await?;

        // Timestamp plus a random suffix so parallel sessions never collide.
        let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        let path = self
            .dir
            .join(format!("interview_{timestamp}_{}.json", &suffix[..8]));

        let json = serde_json::to_vec_pretty(record)?;
        tokio::fs::write(&path, json).await?;
        tracing::info!(path = %path.display(), "Interview transcript stored");
        Ok(())
    }
}

/// Discards transcripts. Used when persistence is disabled and in tests.
pub struct NullSink;

#[async_trait]
impl TranscriptSink for NullSink {
    async fn store(&self, _record: &InterviewRecord) -> Result<(), StoreError> {
        Ok(())
    }
}
