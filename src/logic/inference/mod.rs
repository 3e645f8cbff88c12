//! Inference Module - Remote recognizer contract
//!
//! Decodes the frame-processing endpoint's JSON into engine observations.
//! Transport is the caller's concern.

pub mod types;
pub mod decode;

pub use types::{GestureDescriptor, InferenceResponse, Landmark, SignLanguageReading};
pub use decode::{decode_response, observation_from_json};
