//! Drivers domain: recurring per-role tasks (speed refresh, assassin
//! equipment hook, level win check).

mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use resources::{RecurringTasks, TaskKind};

use bevy::prelude::*;

use crate::core::ManhuntSet;
use crate::drivers::systems::{drive_recurring, sync_role_tasks};

pub struct DriversPlugin;

impl Plugin for DriversPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RecurringTasks>().add_systems(
            Update,
            (sync_role_tasks, drive_recurring)
                .chain()
                .in_set(ManhuntSet::Drivers),
        );
    }
}
