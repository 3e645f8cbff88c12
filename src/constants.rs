//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! The engine itself never reads these; they only seed `AppConfig`.

/// Default confidence threshold (strictly greater-than gate)
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.7;

/// Default cooldown after a confirmation (milliseconds)
pub const DEFAULT_COOLDOWN_MS: u64 = 1500;

/// Default number of consecutive matches required to confirm
pub const DEFAULT_BUFFER_SIZE: usize = 5;

/// Default repeat policy name (see `RepeatPolicy`)
pub const DEFAULT_REPEAT_POLICY: &str = "hold";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "ASL Recognizer";

// ============================================
// Environment variable names
// ============================================

pub const ENV_CONFIDENCE_THRESHOLD: &str = "ASL_CONFIDENCE_THRESHOLD";
pub const ENV_COOLDOWN_MS: &str = "ASL_COOLDOWN_MS";
pub const ENV_BUFFER_SIZE: &str = "ASL_BUFFER_SIZE";
pub const ENV_REPEAT_POLICY: &str = "ASL_REPEAT_POLICY";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get confidence threshold from environment or use default
pub fn get_confidence_threshold() -> f32 {
    std::env::var(ENV_CONFIDENCE_THRESHOLD)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(DEFAULT_CONFIDENCE_THRESHOLD)
}

/// Get cooldown from environment or use default
pub fn get_cooldown_ms() -> u64 {
    std::env::var(ENV_COOLDOWN_MS)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(DEFAULT_COOLDOWN_MS)
}

/// Get buffer size from environment or use default
pub fn get_buffer_size() -> usize {
    std::env::var(ENV_BUFFER_SIZE)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(DEFAULT_BUFFER_SIZE)
}

/// Get repeat policy name from environment or use default
pub fn get_repeat_policy() -> String {
    std::env::var(ENV_REPEAT_POLICY)
        .unwrap_or_else(|_| DEFAULT_REPEAT_POLICY.to_string())
}
