//! Recognition Module - Temporal Gesture Confirmation
//!
//! Turns a noisy per-frame stream of (gesture, confidence) observations
//! into a de-duplicated sequence of confirmed symbols, using confidence
//! thresholding, run-length buffering and cooldown timing.

pub mod types;
pub mod config;
pub mod engine;


// Re-export common types
pub use types::{
    ConfirmedEvent, EnginePhase, EngineState, GestureId, Observation, PendingRun, RunProgress,
};
pub use config::{EngineConfig, RepeatPolicy};
pub use engine::{buffer_progress, ingest_with_config, progress, GestureConfirmationEngine};
