//! Core domain: session configuration and the seeded session RNG.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ron::Options;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::core::clock::Tick;
use crate::host::AreaId;

/// Success criterion for the target, one policy per session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub enum WinCondition {
    /// Target wins on reaching this experience level.
    LevelThreshold(u32),
    /// Target wins on entering the named area.
    ReachArea(AreaId),
}

impl WinCondition {
    /// Imperative goal description used in instructional notifications,
    /// e.g. "Get to level 5".
    pub fn describe(&self) -> String {
        match self {
            WinCondition::LevelThreshold(level) => format!("Get to level {level}"),
            WinCondition::ReachArea(area) => format!("Reach {}", area.0),
        }
    }

    /// Past-tense form used in win/lose notifications, e.g. "reached level 5".
    pub fn fulfilled(&self) -> String {
        match self {
            WinCondition::LevelThreshold(level) => format!("reached level {level}"),
            WinCondition::ReachArea(area) => format!("reached {}", area.0),
        }
    }
}

/// Title display timing, in ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TitleTiming {
    pub stay: Tick,
    pub fade_in: Tick,
    pub fade_out: Tick,
}

impl Default for TitleTiming {
    fn default() -> Self {
        Self {
            stay: 160,
            fade_in: 2,
            fade_out: 4,
        }
    }
}

/// Session tuning. Insert a customized copy before adding `ManhuntPlugin`;
/// the defaults match the reference behavior pack.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ManhuntConfig {
    pub win_condition: WinCondition,
    pub title_timing: TitleTiming,
    /// Delay between a spawn and the role decision, so the decision cannot
    /// race the inventory/progress/HUD resets.
    pub role_decision_delay: Tick,
    /// Delay before the compass grant, past the connection-setup inventory
    /// clear.
    pub compass_grant_delay: Tick,
    /// Period of the target speed refresh and the assassin equipment hook.
    pub effect_period: Tick,
    /// Poll period of the level win check.
    pub win_check_period: Tick,
    /// Delay between win detection and the win/lose notifications.
    pub win_announce_delay: Tick,
    /// Seed for random target selection. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for ManhuntConfig {
    fn default() -> Self {
        Self {
            win_condition: WinCondition::LevelThreshold(5),
            title_timing: TitleTiming::default(),
            role_decision_delay: 2,
            compass_grant_delay: 2,
            effect_period: 600,
            win_check_period: 100,
            win_announce_delay: 40,
            seed: None,
        }
    }
}

/// Error type for config loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ConfigLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

impl ManhuntConfig {
    /// Parse a config from RON source. Missing fields fall back to defaults.
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigLoadError> {
        ron_options().from_str(source).map_err(|e| ConfigLoadError {
            file: "<inline>".to_string(),
            message: format!("Parse error: {}", e),
        })
    }

    /// Load a config from a RON file, falling back to defaults on any
    /// failure.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from_path(path) {
            Ok(config) => config,
            Err(error) => {
                warn!("{error}; using defaults");
                Self::default()
            }
        }
    }

    /// Load a config from a RON file on disk.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigLoadError> {
        let file = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
            file: file.clone(),
            message: format!("IO error: {}", e),
        })?;

        ron_options()
            .from_str(&contents)
            .map_err(|e| ConfigLoadError {
                file,
                message: format!("Parse error: {}", e),
            })
    }
}

/// Seeded RNG for random target selection. Deterministic when the config
/// carries a seed.
#[derive(Resource, Debug)]
pub struct SessionRng(pub ChaCha8Rng);

impl FromWorld for SessionRng {
    fn from_world(world: &mut World) -> Self {
        let seed = world
            .get_resource::<ManhuntConfig>()
            .and_then(|config| config.seed)
            .unwrap_or_else(|| rand::rng().random());
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}
