//! `(feed, kill)` pairs known to produce stable patterns with the default
//! diffusion rates.

use crate::error::{GridError, Result};
use std::collections::HashMap;

pub const CORAL_GROWTH: (f64, f64) = (0.0545, 0.062);
pub const MITOSIS: (f64, f64) = (0.0367, 0.0649);
pub const SLOW_SPIRALS: (f64, f64) = (0.024, 0.060);
pub const MAZE: (f64, f64) = (0.029, 0.057);
pub const SOLITONS: (f64, f64) = (0.030, 0.062);
pub const WORMS: (f64, f64) = (0.078, 0.061);
pub const SPOTS: (f64, f64) = (0.035, 0.065);
pub const MOVING_SPOTS: (f64, f64) = (0.014, 0.054);

pub const DEFAULT: (f64, f64) = CORAL_GROWTH;

lazy_static::lazy_static! {
    static ref PRESETS: HashMap<&'static str, (f64, f64)> = {
        let mut map = HashMap::new();
        map.insert("default", DEFAULT);
        map.insert("coral_growth", CORAL_GROWTH);
        map.insert("mitosis", MITOSIS);
        map.insert("slow_spirals", SLOW_SPIRALS);
        map.insert("maze", MAZE);
        map.insert("solitons", SOLITONS);
        map.insert("worms", WORMS);
        map.insert("spots", SPOTS);
        map.insert("moving_spots", MOVING_SPOTS);
        map
    };
}

/// Looks a preset up by name, ignoring case and treating `-` like `_`.
pub fn by_name(name: &str) -> Result<(f64, f64)> {
    let key = name.trim().to_lowercase().replace('-', "_");
    PRESETS
        .get(key.as_str())
        .copied()
        .ok_or_else(|| GridError::UnknownPreset(name.to_string()))
}

pub fn names() -> Vec<&'static str> {
    let mut names: Vec<_> = PRESETS.keys().copied().collect();
    names.sort_unstable();
    names
}
