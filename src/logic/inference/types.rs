//! Inference Response Types
//!
//! Wire shape of the remote frame-processing endpoint.
//! Every field is optional on the wire; missing values default to "nothing seen".

use serde::{Deserialize, Serialize};

/// Gesture as reported by the recognizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureDescriptor {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Normalized hand landmark
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

/// Secondary sign-language classifier output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignLanguageReading {
    pub text: String,
    pub confidence: f32,
}

/// Decoded `/process_frame` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceResponse {
    pub hand_detected: bool,
    pub gesture_detected: bool,
    pub gesture: Option<GestureDescriptor>,
    pub confidence: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landmarks: Option<Vec<Landmark>>,
    /// Data URL of the annotated frame; carried through, never inspected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotated_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign_language: Option<SignLanguageReading>,
    /// Error body returned instead of a detection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl InferenceResponse {
    pub fn gesture_name(&self) -> Option<&str> {
        self.gesture.as_ref().map(|g| g.name.as_str())
    }
}
