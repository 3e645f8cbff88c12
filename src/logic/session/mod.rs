//! Session Module - One camera-on to camera-off recognition session
//!
//! Owns the engine state for its lifetime, keeps the confirmed transcript
//! and hands each confirmation to the registered sinks.
//! Dropping (or `end`ing) the session discards all state.

pub mod types;
pub mod sink;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::logic::catalog;
use crate::logic::inference::InferenceResponse;
use crate::logic::recognition::{
    ConfirmedEvent, EngineConfig, EnginePhase, EngineState, GestureConfirmationEngine, Observation,
    RunProgress,
};

pub use sink::{LogSink, MemorySink, RecognitionSink};
pub use types::{RecognitionRecord, SessionStats, SessionSummary};

pub struct RecognitionSession {
    id: Uuid,
    started_at: DateTime<Utc>,
    engine: GestureConfirmationEngine,
    state: EngineState,
    transcript: Vec<ConfirmedEvent>,
    stats: SessionStats,
    sinks: Vec<Arc<dyn RecognitionSink>>,
}

impl RecognitionSession {
    pub fn new(config: EngineConfig) -> Self {
        let engine = GestureConfirmationEngine::new(config);
        let state = engine.new_state();
        let session = Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            engine,
            state,
            transcript: Vec::new(),
            stats: SessionStats::default(),
            sinks: Vec::new(),
        };
        log::info!(
            "Session {} started (threshold {:.2}, cooldown {}ms, buffer {}, repeat {})",
            session.id,
            session.config().confidence_threshold,
            session.config().cooldown_ms,
            session.config().buffer_size,
            session.config().repeat_policy
        );
        session
    }

    pub fn with_sink(mut self, sink: Arc<dyn RecognitionSink>) -> Self {
        self.add_sink(sink);
        self
    }

    pub fn add_sink(&mut self, sink: Arc<dyn RecognitionSink>) {
        log::debug!("Session {}: sink '{}' registered", self.id, sink.name());
        self.sinks.push(sink);
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn config(&self) -> &EngineConfig {
        self.engine.config()
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn phase(&self) -> EnginePhase {
        self.state.phase()
    }

    // ========================================================================
    // PROCESSING
    // ========================================================================

    /// Feed one observation through the engine
    pub fn process(&mut self, observation: &Observation) -> Option<ConfirmedEvent> {
        self.stats.frames_processed += 1;
        if !observation.hand_detected {
            self.stats.frames_without_hand += 1;
        }

        let event = self.engine.ingest(&mut self.state, observation)?;

        self.stats.confirmations += 1;
        *self
            .stats
            .per_gesture
            .entry(event.gesture_id.clone())
            .or_insert(0) += 1;
        self.transcript.push(event.clone());

        log::info!(
            "Session {}: confirmed '{}' ({:.2}) -> \"{}\"",
            self.id,
            event.gesture_id,
            event.confidence,
            self.transcript_text()
        );

        self.dispatch(&event);
        Some(event)
    }

    /// Convenience for callers holding a decoded response
    pub fn process_response(
        &mut self,
        response: &InferenceResponse,
        timestamp_ms: u64,
    ) -> Option<ConfirmedEvent> {
        let observation = response.to_observation(timestamp_ms);
        self.process(&observation)
    }

    fn dispatch(&self, event: &ConfirmedEvent) {
        if self.sinks.is_empty() {
            return;
        }

        // success = "in catalog"; unknown symbols are recorded, not rejected
        let success = catalog::is_supported(&event.gesture_id);
        if !success {
            log::warn!("Session {}: '{}' is not in the gesture catalog", self.id, event.gesture_id);
        }

        let record = RecognitionRecord {
            session_id: self.id,
            gesture_name: event.gesture_id.clone(),
            confidence: event.confidence,
            duration_ms: event.duration_ms(),
            success,
            recorded_at: Utc::now(),
        };

        for sink in &self.sinks {
            if let Err(e) = sink.record(&record) {
                log::error!("Session {}: sink '{}' failed: {}", self.id, sink.name(), e);
            }
        }
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn progress(&self) -> RunProgress {
        self.engine.progress(&self.state)
    }

    pub fn buffer_progress(&self) -> f32 {
        self.engine.buffer_progress(&self.state)
    }

    pub fn transcript(&self) -> &[ConfirmedEvent] {
        &self.transcript
    }

    /// Confirmed symbols concatenated in order
    pub fn transcript_text(&self) -> String {
        self.transcript.iter().map(|e| e.gesture_id.as_str()).collect()
    }

    /// Clears the displayed transcript only; engine state is untouched
    pub fn clear_transcript(&mut self) {
        self.transcript.clear();
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// End the session, discarding engine state
    pub fn end(self) -> SessionSummary {
        let summary = SessionSummary {
            session_id: self.id,
            started_at: self.started_at,
            ended_at: Utc::now(),
            transcript: self.transcript_text(),
            events: self.transcript,
            stats: self.stats,
        };
        log::info!(
            "Session {} ended: {} frames, {} confirmations, transcript \"{}\"",
            summary.session_id,
            summary.stats.frames_processed,
            summary.stats.confirmations,
            summary.transcript
        );
        summary
    }
}
