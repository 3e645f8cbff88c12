//! Configuration module

use crate::constants;
use crate::error::ConfigError;
use crate::logic::recognition::{EngineConfig, RepeatPolicy};

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Confidence gate (strictly greater-than)
    pub confidence_threshold: f32,

    /// Cooldown after a confirmation, in milliseconds
    pub cooldown_ms: u64,

    /// Consecutive matches required to confirm
    pub buffer_size: usize,

    /// "hold" or "reset"
    pub repeat_policy: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            confidence_threshold: constants::get_confidence_threshold(),
            cooldown_ms: constants::get_cooldown_ms(),
            buffer_size: constants::get_buffer_size(),
            repeat_policy: constants::get_repeat_policy(),
        }
    }

    /// Validate into engine options
    pub fn engine_config(&self) -> Result<EngineConfig, ConfigError> {
        let policy: RepeatPolicy = self.repeat_policy.parse()?;
        let config = EngineConfig::new(self.confidence_threshold, self.cooldown_ms, self.buffer_size)?;
        Ok(config.with_repeat_policy(policy))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: constants::DEFAULT_CONFIDENCE_THRESHOLD,
            cooldown_ms: constants::DEFAULT_COOLDOWN_MS,
            buffer_size: constants::DEFAULT_BUFFER_SIZE,
            repeat_policy: constants::DEFAULT_REPEAT_POLICY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_engine_config() {
        let config = AppConfig::default().engine_config().unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_reset_policy() {
        let app = AppConfig {
            repeat_policy: "reset".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(app.engine_config().unwrap().repeat_policy, RepeatPolicy::ResetRun);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let app = AppConfig {
            buffer_size: 0,
            ..AppConfig::default()
        };
        assert_eq!(app.engine_config(), Err(ConfigError::ZeroBufferSize(0)));

        let app = AppConfig {
            repeat_policy: "never".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(app.engine_config(), Err(ConfigError::UnknownRepeatPolicy(_))));
    }
}
