//! Gesture Confirmation Engine
//!
//! ONLY decision logic - types live in `types.rs`.
//! Input: Observation + caller-owned EngineState
//! Output: Option<ConfirmedEvent>
//!
//! The engine never fails and never blocks. Observations must arrive in
//! non-decreasing timestamp order; time differences saturate at zero.

use super::config::{EngineConfig, RepeatPolicy};
use super::types::*;

/// Stateless engine; all mutable state lives in `EngineState`
#[derive(Debug, Clone)]
pub struct GestureConfirmationEngine {
    config: EngineConfig,
}

impl GestureConfirmationEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Fresh state for a new session
    pub fn new_state(&self) -> EngineState {
        EngineState::new()
    }

    /// Feed one observation. Returns at most one confirmation.
    pub fn ingest(&self, state: &mut EngineState, observation: &Observation) -> Option<ConfirmedEvent> {
        ingest_with_config(&self.config, state, observation)
    }

    /// len(run) / buffer_size * 100
    pub fn buffer_progress(&self, state: &EngineState) -> f32 {
        buffer_progress(&self.config, state)
    }

    pub fn progress(&self, state: &EngineState) -> RunProgress {
        progress(&self.config, state)
    }
}

// ============================================================================
// MAIN INGEST FUNCTION
// ============================================================================

/// Run one step of the confirmation state machine
pub fn ingest_with_config(
    config: &EngineConfig,
    state: &mut EngineState,
    observation: &Observation,
) -> Option<ConfirmedEvent> {
    // Loss of signal (or a gesture flag without an id) resets the run
    let Some(gesture) = observation.matched_gesture() else {
        if let Some(run) = state.run.take() {
            log::trace!("Run of '{}' x{} dropped: no hand/gesture", run.gesture, run.len);
        }
        return None;
    };

    let confidence = observation.confidence;
    let now = observation.timestamp_ms;

    // Ungated observations leave the run untouched
    if !passes_gate(config, state, confidence, now) {
        return None;
    }

    let extended = match state.run.as_mut() {
        Some(run) if run.gesture == gesture => {
            run.len = run.len.saturating_add(1);
            Some(run.len)
        }
        _ => None,
    };

    // A different symbol restarts the count; no voting across symbols
    let len = match extended {
        Some(len) => len,
        None => {
            if let Some(old) = state.run.replace(PendingRun::start(gesture, now)) {
                log::trace!("Run of '{}' x{} replaced by '{}'", old.gesture, old.len, gesture);
            }
            1
        }
    };

    if len < config.buffer_size {
        return None;
    }

    if state.last_confirmed.as_deref() == Some(gesture) {
        if config.repeat_policy == RepeatPolicy::ResetRun {
            state.run = None;
        }
        return None;
    }

    let run_started_at_ms = state.run.take().map_or(now, |run| run.started_at_ms);
    state.last_confirmed = Some(gesture.to_string());
    state.last_confirmed_at = Some(now);

    log::debug!("Confirmed '{}' at {}ms (confidence {:.2})", gesture, now, confidence);

    Some(ConfirmedEvent {
        gesture_id: gesture.to_string(),
        confidence,
        confirmed_at_ms: now,
        run_started_at_ms,
    })
}

/// Confidence strictly above threshold and cooldown strictly elapsed
fn passes_gate(config: &EngineConfig, state: &EngineState, confidence: f32, now: u64) -> bool {
    // NaN compares false and is rejected here
    let above_threshold = confidence > config.confidence_threshold;
    if !above_threshold {
        return false;
    }
    match state.last_confirmed_at {
        None => true,
        Some(at) => now.saturating_sub(at) > config.cooldown_ms,
    }
}

// ============================================================================
// PROGRESS
// ============================================================================

pub fn buffer_progress(config: &EngineConfig, state: &EngineState) -> f32 {
    if config.buffer_size == 0 {
        return 0.0;
    }
    state.pending_len() as f32 / config.buffer_size as f32 * 100.0
}

pub fn progress(config: &EngineConfig, state: &EngineState) -> RunProgress {
    let current_len = state.pending_len();
    RunProgress {
        gesture: state.pending_gesture().map(str::to_string),
        current_len,
        required_len: config.buffer_size,
        is_full: current_len >= config.buffer_size,
        fill_percent: buffer_progress(config, state),
    }
}
