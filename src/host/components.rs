//! Host boundary: components the host maintains on participant entities.
//! The core reads and reacts to these; it never spawns or despawns them.

use bevy::prelude::*;
use serde::Deserialize;

/// Item id of the tracking compass handed to assassins.
pub const TRACKING_COMPASS: &str = "tracking_compass";

/// A connected player identity.
#[derive(Component, Debug, Clone)]
pub struct Participant {
    pub name: String,
}

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Named world area (dimension) a participant can be in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct AreaId(pub String);

impl AreaId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

/// Participant position within the world.
#[derive(Component, Debug, Clone)]
pub struct Location {
    pub position: Vec3,
    pub area: AreaId,
}

/// Progress metric checked against the level win threshold.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExperienceLevel(pub u32);
