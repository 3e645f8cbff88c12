//! Response -> Observation decoding
//!
//! Decode failures never reach the engine as errors: the caller-facing
//! helper degrades them into a no-hand observation.

use crate::error::DecodeError;
use crate::logic::recognition::Observation;

use super::types::InferenceResponse;

/// Parse a raw JSON response body
pub fn decode_response(raw: &str) -> Result<InferenceResponse, DecodeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DecodeError::Empty);
    }
    Ok(serde_json::from_str(trimmed)?)
}

impl InferenceResponse {
    /// Convert to an engine observation stamped at `timestamp_ms`
    pub fn to_observation(&self, timestamp_ms: u64) -> Observation {
        if let Some(err) = &self.error {
            log::debug!("Inference error body treated as no hand: {}", err);
            return Observation::no_hand(timestamp_ms);
        }

        let gesture_id = self
            .gesture_name()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        Observation {
            hand_detected: self.hand_detected,
            gesture_detected: self.gesture_detected,
            gesture_id,
            confidence: sanitize_confidence(self.confidence),
            timestamp_ms,
        }
    }
}

/// Decode and convert in one step; undecodable bodies become no-hand frames
pub fn observation_from_json(raw: &str, timestamp_ms: u64) -> Observation {
    match decode_response(raw) {
        Ok(response) => response.to_observation(timestamp_ms),
        Err(e) => {
            log::warn!("Dropping undecodable inference response at {}ms: {}", timestamp_ms, e);
            Observation::no_hand(timestamp_ms)
        }
    }
}

/// Clamp into [0, 1]; non-finite values become 0
fn sanitize_confidence(confidence: f32) -> f32 {
    if confidence.is_finite() {
        confidence.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
