//! Recognition Types
//!
//! Core types for gesture confirmation.
//! NO logic here beyond accessors - only data structures.

use serde::{Deserialize, Serialize};

/// Symbol identifier reported by the recognizer (e.g. "A")
pub type GestureId = String;

// ============================================================================
// OBSERVATION (input)
// ============================================================================

/// One processed frame's detection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub hand_detected: bool,
    pub gesture_detected: bool,
    pub gesture_id: Option<GestureId>,
    /// Recognizer confidence (0.0 - 1.0)
    pub confidence: f32,
    /// Monotonic observation time in milliseconds
    pub timestamp_ms: u64,
}

impl Observation {
    /// A frame where a hand and gesture were both detected
    pub fn gesture(gesture_id: impl Into<GestureId>, confidence: f32, timestamp_ms: u64) -> Self {
        Self {
            hand_detected: true,
            gesture_detected: true,
            gesture_id: Some(gesture_id.into()),
            confidence,
            timestamp_ms,
        }
    }

    /// A frame with no hand in view
    pub fn no_hand(timestamp_ms: u64) -> Self {
        Self {
            hand_detected: false,
            gesture_detected: false,
            gesture_id: None,
            confidence: 0.0,
            timestamp_ms,
        }
    }

    /// A frame with a hand but no recognized gesture
    pub fn hand_only(timestamp_ms: u64) -> Self {
        Self {
            hand_detected: true,
            ..Self::no_hand(timestamp_ms)
        }
    }

    /// The gesture this frame names, if it names one at all.
    ///
    /// Returns `None` for no-hand, no-gesture, and the malformed
    /// `gesture_detected=true` / missing id case alike.
    pub fn matched_gesture(&self) -> Option<&str> {
        if !self.hand_detected || !self.gesture_detected {
            return None;
        }
        self.gesture_id.as_deref()
    }
}

// ============================================================================
// CONFIRMED EVENT (output)
// ============================================================================

/// A settled symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmedEvent {
    pub gesture_id: GestureId,
    /// Confidence of the observation that completed the run
    pub confidence: f32,
    pub confirmed_at_ms: u64,
    /// Timestamp of the first accepted observation of the confirming run
    pub run_started_at_ms: u64,
}

impl ConfirmedEvent {
    /// Time from run start to confirmation
    pub fn duration_ms(&self) -> u64 {
        self.confirmed_at_ms.saturating_sub(self.run_started_at_ms)
    }
}

// ============================================================================
// ENGINE STATE
// ============================================================================

/// Consecutive-match buffer.
///
/// Holds one gesture and a count instead of a list of copies, so the run
/// is homogeneous by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingRun {
    pub gesture: GestureId,
    pub len: usize,
    pub started_at_ms: u64,
}

impl PendingRun {
    pub(crate) fn start(gesture: &str, timestamp_ms: u64) -> Self {
        Self {
            gesture: gesture.to_string(),
            len: 1,
            started_at_ms: timestamp_ms,
        }
    }
}

/// Per-session engine state, owned by the caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    pub(crate) run: Option<PendingRun>,
    pub(crate) last_confirmed: Option<GestureId>,
    pub(crate) last_confirmed_at: Option<u64>,
}

impl EngineState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_run(&self) -> Option<&PendingRun> {
        self.run.as_ref()
    }

    pub fn pending_len(&self) -> usize {
        self.run.as_ref().map_or(0, |r| r.len)
    }

    pub fn pending_gesture(&self) -> Option<&str> {
        self.run.as_ref().map(|r| r.gesture.as_str())
    }

    pub fn last_confirmed(&self) -> Option<&str> {
        self.last_confirmed.as_deref()
    }

    pub fn last_confirmed_at(&self) -> Option<u64> {
        self.last_confirmed_at
    }

    /// Current position in the Idle / Accumulating state machine
    pub fn phase(&self) -> EnginePhase {
        match &self.run {
            None => EnginePhase::Idle,
            Some(run) => EnginePhase::Accumulating {
                gesture: run.gesture.clone(),
                count: run.len,
            },
        }
    }

    /// Whether `now_ms` still falls inside the cooldown window
    pub fn is_cooling(&self, now_ms: u64, cooldown_ms: u64) -> bool {
        self.last_confirmed_at
            .map_or(false, |at| now_ms.saturating_sub(at) <= cooldown_ms)
    }
}

/// Explicit state machine view of `EngineState`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnginePhase {
    Idle,
    Accumulating { gesture: GestureId, count: usize },
}

impl EnginePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnginePhase::Idle => "idle",
            EnginePhase::Accumulating { .. } => "accumulating",
        }
    }
}

impl std::fmt::Display for EnginePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnginePhase::Idle => write!(f, "idle"),
            EnginePhase::Accumulating { gesture, count } => {
                write!(f, "accumulating({}, {})", gesture, count)
            }
        }
    }
}

// ============================================================================
// PROGRESS
// ============================================================================

/// Run progress snapshot for UI feedback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunProgress {
    pub gesture: Option<GestureId>,
    pub current_len: usize,
    pub required_len: usize,
    pub is_full: bool,
    /// len / buffer_size * 100, not clamped
    pub fill_percent: f32,
}
