//! Logic Module - Recognition pipeline
//!
//! - `recognition/` - Gesture confirmation engine (threshold, run buffer, cooldown)
//! - `inference/` - Remote recognizer response decoding
//! - `session/` - Per-session state, transcript and sinks
//! - `catalog` - Supported gestures
//! - `replay` - Recorded-session driving loop

pub mod recognition;
pub mod inference;
pub mod session;
pub mod catalog;
pub mod replay;
