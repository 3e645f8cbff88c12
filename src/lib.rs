//! ASL Recognizer Core
//!
//! Temporal gesture confirmation for a webcam sign-language recognizer.
//! Frames are classified elsewhere; this crate turns the per-frame results
//! into a settled, de-duplicated symbol transcript.

pub mod config;
pub mod constants;
pub mod error;
pub mod logic;

pub use config::AppConfig;
pub use error::{ConfigError, DecodeError, ReplayError, SinkError};
pub use logic::recognition::{
    ConfirmedEvent, EngineConfig, EngineState, GestureConfirmationEngine, Observation,
    RepeatPolicy,
};
pub use logic::session::RecognitionSession;
