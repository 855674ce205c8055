//! Roles domain: role transition messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::roles::resources::Role;

/// Emitted whenever a participant is (re-)inited into a role. Consumed by the
/// drivers domain to start the new role's tasks and cancel the superseded
/// role's.
#[derive(Debug, Clone, Copy)]
pub struct RoleAssignedEvent {
    pub participant: Entity,
    pub role: Role,
}

impl Message for RoleAssignedEvent {}

/// The target satisfied the session win condition. Written by the level
/// win-check driver or the area-entry handler, whichever the config selects.
#[derive(Debug, Clone, Copy)]
pub struct WinConditionMetEvent {
    pub target: Entity,
}

impl Message for WinConditionMetEvent {}
