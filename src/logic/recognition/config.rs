//! Engine Configuration
//!
//! All options are caller-supplied. `Default` mirrors the crate constants
//! for convenience but the engine never falls back on its own.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BUFFER_SIZE, DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_COOLDOWN_MS};
use crate::error::ConfigError;

/// What happens when a run fills up with the symbol that was just confirmed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepeatPolicy {
    /// Keep the run and let it grow past the buffer size
    #[default]
    HoldRun,
    /// Discard the run on every full buffer, confirmed or not
    ResetRun,
}

impl RepeatPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepeatPolicy::HoldRun => "hold",
            RepeatPolicy::ResetRun => "reset",
        }
    }
}

impl FromStr for RepeatPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hold" | "hold_run" => Ok(RepeatPolicy::HoldRun),
            "reset" | "reset_run" => Ok(RepeatPolicy::ResetRun),
            other => Err(ConfigError::UnknownRepeatPolicy(other.to_string())),
        }
    }
}

impl std::fmt::Display for RepeatPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Gesture confirmation options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Observations must be strictly above this to join a run
    pub confidence_threshold: f32,

    /// Minimum elapsed time after a confirmation before any gated match
    pub cooldown_ms: u64,

    /// Consecutive matches required to confirm (>= 1)
    pub buffer_size: usize,

    pub repeat_policy: RepeatPolicy,
}

impl EngineConfig {
    /// Validated constructor with the default repeat policy
    pub fn new(
        confidence_threshold: f32,
        cooldown_ms: u64,
        buffer_size: usize,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            confidence_threshold,
            cooldown_ms,
            buffer_size,
            repeat_policy: RepeatPolicy::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_repeat_policy(mut self, policy: RepeatPolicy) -> Self {
        self.repeat_policy = policy;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.buffer_size == 0 {
            return Err(ConfigError::ZeroBufferSize(self.buffer_size));
        }
        if !self.confidence_threshold.is_finite()
            || !(0.0..=1.0).contains(&self.confidence_threshold)
        {
            return Err(ConfigError::InvalidThreshold(self.confidence_threshold));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            cooldown_ms: DEFAULT_COOLDOWN_MS,
            buffer_size: DEFAULT_BUFFER_SIZE,
            repeat_policy: RepeatPolicy::default(),
        }
    }
}
