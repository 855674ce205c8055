//! Host boundary: outbound commands, consumed by the host adapter.
//! All of these are fire-and-forget; failures on the host side are absorbed
//! there and never reported back.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::core::{Tick, TitleTiming};
use crate::host::components::AreaId;

/// Direct text message to one participant.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub participant: Entity,
    pub text: String,
}

impl Message for ChatMessage {}

/// Ephemeral on-screen title with subtitle and fade timing.
#[derive(Debug, Clone)]
pub struct TitleNotification {
    pub participant: Entity,
    pub title: String,
    pub subtitle: String,
    pub timing: TitleTiming,
}

impl Message for TitleNotification {}

/// Wipe the participant's inventory.
#[derive(Debug, Clone, Copy)]
pub struct ClearInventory {
    pub participant: Entity,
}

impl Message for ClearInventory {}

/// Reset the participant's progress level to zero.
#[derive(Debug, Clone, Copy)]
pub struct ResetProgress {
    pub participant: Entity,
}

impl Message for ResetProgress {}

/// Clear any lingering HUD elements from a previous session.
#[derive(Debug, Clone, Copy)]
pub struct ResetHud {
    pub participant: Entity,
}

impl Message for ResetHud {}

/// Put `quantity` of the item into the participant's inventory.
#[derive(Debug, Clone)]
pub struct GrantItem {
    pub participant: Entity,
    pub item_id: String,
    pub quantity: u32,
}

impl Message for GrantItem {}

/// Timed status effect kinds the core applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusEffect {
    Speed,
}

/// Apply a timed status effect to a participant.
#[derive(Debug, Clone, Copy)]
pub struct ApplyStatusEffect {
    pub participant: Entity,
    pub effect: StatusEffect,
    pub duration_ticks: Tick,
    pub show_particles: bool,
}

impl Message for ApplyStatusEffect {}

/// Move the world's default respawn anchor.
#[derive(Debug, Clone, Copy)]
pub struct SetWorldSpawn {
    pub position: Vec3,
}

impl Message for SetWorldSpawn {}

/// Set a participant's personal respawn point.
#[derive(Debug, Clone)]
pub struct SetPersonalSpawn {
    pub participant: Entity,
    pub position: Vec3,
    pub area: AreaId,
}

impl Message for SetPersonalSpawn {}

/// Dispatch a text command into a named game area asynchronously. Boundary
/// utility; no core path depends on it.
#[derive(Debug, Clone)]
pub struct WorldCommand {
    pub area: AreaId,
    pub command: String,
}

impl Message for WorldCommand {}
