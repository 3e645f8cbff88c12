//! Session Types

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::logic::recognition::ConfirmedEvent;

/// Payload handed to persistence sinks after each confirmation.
///
/// Mirrors the recognition-save contract of the surrounding application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognitionRecord {
    pub session_id: Uuid,
    pub gesture_name: String,
    pub confidence: f32,
    pub duration_ms: u64,
    /// Whether the symbol is in the gesture catalog. Unknown symbols are still
    /// recorded (with `false`) rather than rejected.
    pub success: bool,
    pub recorded_at: DateTime<Utc>,
}

/// Running counters for one session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub frames_processed: u64,
    pub frames_without_hand: u64,
    pub confirmations: u64,
    pub per_gesture: BTreeMap<String, u64>,
}

impl SessionStats {
    /// Share of frames where a hand was visible (0.0 - 1.0)
    pub fn hand_visibility(&self) -> f32 {
        if self.frames_processed == 0 {
            return 0.0;
        }
        let seen = self.frames_processed - self.frames_without_hand;
        seen as f32 / self.frames_processed as f32
    }
}

/// What remains of a session once it ends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub transcript: String,
    pub events: Vec<ConfirmedEvent>,
    pub stats: SessionStats,
}
