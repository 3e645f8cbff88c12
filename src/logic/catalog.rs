//! Gesture Catalog
//!
//! Supported ASL letters with descriptions and difficulty levels (1-4).

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One supported gesture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureInfo {
    pub name: String,
    pub description: String,
    pub difficulty_level: u8,
}

const ASL_ALPHABET: &[(&str, &str, u8)] = &[
    ("A", "Letter A - Fist with thumb pointing up", 1),
    ("B", "Letter B - All fingers extended and together", 1),
    ("C", "Letter C - Fingers together curved in C shape", 2),
    ("D", "Letter D - Index finger pointing up, others closed", 2),
    ("E", "Letter E - All fingers curled, palm facing out", 1),
    ("F", "Letter F - Index finger and thumb touch, other fingers extended", 3),
    ("G", "Letter G - Index pointing, thumb extended", 2),
    ("H", "Letter H - Index and middle finger extended together", 2),
    ("I", "Letter I - Pinky finger extended, others closed", 1),
    ("J", "Letter J - Pinky extended with J motion", 3),
    ("K", "Letter K - Index and middle finger in V, thumb between", 3),
    ("L", "Letter L - Index finger and thumb in L shape", 1),
    ("M", "Letter M - Thumb tucked between folded fingers", 2),
    ("N", "Letter N - Thumb tucked under index and middle fingers", 2),
    ("O", "Letter O - Fingertips and thumb form circle", 1),
    ("P", "Letter P - Index pointing down, thumb to side", 3),
    ("Q", "Letter Q - Finger pointing down, thumb and pinky out", 3),
    ("R", "Letter R - Crossed index and middle fingers", 3),
    ("S", "Letter S - Fist with thumb over fingers", 2),
    ("T", "Letter T - Thumb between index and middle finger", 2),
    ("U", "Letter U - Index and middle finger extended together", 2),
    ("V", "Letter V - Index and middle finger in V shape", 1),
    ("W", "Letter W - Index, middle, and ring fingers extended", 2),
    ("X", "Letter X - Index finger bent at middle joint", 3),
    ("Y", "Letter Y - Thumb and pinky extended, others closed", 2),
    ("Z", "Letter Z - Index finger traces Z shape", 4),
];

static CATALOG: Lazy<Vec<GestureInfo>> = Lazy::new(|| {
    ASL_ALPHABET
        .iter()
        .map(|(name, description, difficulty_level)| GestureInfo {
            name: name.to_string(),
            description: description.to_string(),
            difficulty_level: *difficulty_level,
        })
        .collect()
});

static BY_NAME: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    ASL_ALPHABET
        .iter()
        .enumerate()
        .map(|(i, (name, _, _))| (*name, i))
        .collect()
});

/// All supported gestures, alphabetical
pub fn supported_gestures() -> &'static [GestureInfo] {
    &CATALOG
}

/// Look up a gesture by name (case-sensitive, as the recognizer reports it)
pub fn lookup(name: &str) -> Option<&'static GestureInfo> {
    BY_NAME.get(name).and_then(|&i| CATALOG.get(i))
}

pub fn is_supported(name: &str) -> bool {
    BY_NAME.contains_key(name)
}
