//! Host boundary: inbound game events, written by the host adapter.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::host::components::AreaId;

/// A participant (re-)spawned into the world.
#[derive(Debug, Clone, Copy)]
pub struct ParticipantSpawnedEvent {
    pub participant: Entity,
}

impl Message for ParticipantSpawnedEvent {}

/// A participant died. `killer` is the damaging entity if there was one;
/// non-participant killers are filtered out by the handlers.
#[derive(Debug, Clone, Copy)]
pub struct ParticipantDiedEvent {
    pub participant: Entity,
    pub killer: Option<Entity>,
}

impl Message for ParticipantDiedEvent {}

/// A participant activated an item.
#[derive(Debug, Clone)]
pub struct ItemUsedEvent {
    pub participant: Entity,
    pub item_id: String,
}

impl Message for ItemUsedEvent {}

/// A participant crossed into another world area.
#[derive(Debug, Clone)]
pub struct AreaEnteredEvent {
    pub participant: Entity,
    pub area: AreaId,
}

impl Message for AreaEnteredEvent {}

/// Manual target (re)assignment. `None` picks a random connected participant
/// using the session RNG.
#[derive(Debug, Clone, Copy)]
pub struct SelectTargetEvent {
    pub participant: Option<Entity>,
}

impl Message for SelectTargetEvent {}
