//! Error types
//!
//! The confirmation engine itself is infallible. Errors only exist at the
//! edges: building a configuration, decoding a wire payload, replaying a file.

use thiserror::Error;

/// Invalid engine configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("buffer size must be at least 1, got {0}")]
    ZeroBufferSize(usize),

    #[error("confidence threshold must be a finite value in [0, 1], got {0}")]
    InvalidThreshold(f32),

    #[error("unknown repeat policy '{0}' (expected 'hold' or 'reset')")]
    UnknownRepeatPolicy(String),
}

/// Inference response could not be decoded
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("empty payload")]
    Empty,

    #[error("malformed inference response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Replay of a recorded session failed
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode event: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A recognition sink failed to accept a record
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("sink unavailable: {0}")]
    Unavailable(String),
}
