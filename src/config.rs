use crate::error::{GridError, Result};
use crate::model_presets;
use log::debug;
use std::env;
use std::str::FromStr;

/// Settings for a headless run, read from `GS_*` environment variables
/// (a `.env` file is honoured).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub frames: usize,
    pub iterations_per_frame: usize,
    pub preset_name: String,
    pub preset: (f64, f64),
    pub feedback: bool,
    pub seed: u64,
    pub advanced: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            frames: 10,
            iterations_per_frame: 50,
            preset_name: "default".to_string(),
            preset: model_presets::DEFAULT,
            feedback: false,
            seed: 0,
            advanced: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenv::dotenv() {
            debug!("loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their
    /// defaults.
    pub fn from_lookup<L>(lookup: L) -> Result<Self>
    where
        L: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let preset_name = lookup("GS_PRESET").unwrap_or(defaults.preset_name);
        let preset = model_presets::by_name(&preset_name)?;

        Ok(Self {
            width: parse_or(&lookup, "GS_WIDTH", defaults.width)?,
            height: parse_or(&lookup, "GS_HEIGHT", defaults.height)?,
            frames: parse_or(&lookup, "GS_FRAMES", defaults.frames)?,
            iterations_per_frame: parse_or(
                &lookup,
                "GS_ITERATIONS_PER_FRAME",
                defaults.iterations_per_frame,
            )?,
            preset_name,
            preset,
            feedback: parse_flag(&lookup, "GS_FEEDBACK", defaults.feedback)?,
            seed: parse_or(&lookup, "GS_SEED", defaults.seed)?,
            advanced: parse_flag(&lookup, "GS_ADVANCED", defaults.advanced)?,
        })
    }
}

fn parse_or<L, T>(lookup: &L, key: &str, default: T) -> Result<T>
where
    L: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| GridError::Config(format!("{}={:?}: {}", key, raw, e))),
    }
}

fn parse_flag<L>(lookup: &L, key: &str, default: bool) -> Result<bool>
where
    L: Fn(&str) -> Option<String>,
{
    match lookup(key).map(|raw| raw.trim().to_lowercase()) {
        None => Ok(default),
        Some(raw) => match raw.as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(GridError::Config(format!("{}={:?} is not a flag", key, raw))),
        },
    }
}
