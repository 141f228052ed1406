use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    Coach,
    Candidate,
}

/// One entry in the session transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptMessage {
    pub speaker: Speaker,
    pub text: String,
    pub at: DateTime<Utc>,
}

/// The value threaded through all five stages.
///
/// Each stage consumes the record and returns a new one with exactly its
/// own field set — a failed stage sets nothing. The transcript is
/// append-only and never reordered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterviewRecord {
    pub role: String,
    pub question: String,
    pub answer: String,
    pub evaluation: String,
    pub feedback: String,
    pub transcript: Vec<TranscriptMessage>,
}

impl InterviewRecord {
    /// A fresh record with every field empty. Created once per run.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Appends a message to the transcript, stamped now.
    pub fn log(mut self, speaker: Speaker, text: impl Into<String>) -> Self {
        self.transcript.push(TranscriptMessage {
            speaker,
            text: text.into(),
            at: Utc::now(),
        });
        self
    }
}
