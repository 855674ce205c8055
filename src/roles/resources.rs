//! Roles domain: the role board, sole authority over role assignment.

use bevy::prelude::*;
use std::collections::HashMap;

/// Session role of a participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    /// Connected before any target existed and not yet assigned.
    #[default]
    Unassigned,
    Target,
    Assassin,
}

/// Single source of truth for role assignment. The target slot and the
/// per-participant role map are only mutated together, through [`crown`]
/// and [`mark_assassin`], which keeps the at-most-one-target invariant
/// structural.
///
/// [`crown`]: RoleBoard::crown
/// [`mark_assassin`]: RoleBoard::mark_assassin
#[derive(Resource, Debug, Default)]
pub struct RoleBoard {
    target: Option<Entity>,
    roles: HashMap<Entity, Role>,
}

impl RoleBoard {
    pub fn target(&self) -> Option<Entity> {
        self.target
    }

    pub fn role_of(&self, participant: Entity) -> Role {
        self.roles.get(&participant).copied().unwrap_or_default()
    }

    /// Makes `participant` the target, demoting any previous target to
    /// assassin. Returns the demoted participant.
    pub fn crown(&mut self, participant: Entity) -> Option<Entity> {
        let previous = self.target.filter(|&prev| prev != participant);
        if let Some(prev) = previous {
            self.roles.insert(prev, Role::Assassin);
        }
        self.target = Some(participant);
        self.roles.insert(participant, Role::Target);
        previous
    }

    /// Marks `participant` as assassin. Clears the target slot if they held
    /// it.
    pub fn mark_assassin(&mut self, participant: Entity) {
        if self.target == Some(participant) {
            self.target = None;
        }
        self.roles.insert(participant, Role::Assassin);
    }

    /// Number of participants currently holding [`Role::Target`].
    pub fn target_count(&self) -> usize {
        self.roles
            .values()
            .filter(|role| **role == Role::Target)
            .count()
    }
}
