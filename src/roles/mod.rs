//! Roles domain: the role store and the role state machine.

mod events;
mod resources;
mod systems;

pub use events::{RoleAssignedEvent, WinConditionMetEvent};
pub use resources::{Role, RoleBoard};

use bevy::prelude::*;

use crate::core::ManhuntSet;
use crate::roles::systems::{
    apply_deferred_actions, handle_area_entered, handle_compass_use, handle_death,
    handle_select_target, handle_spawn, handle_win_condition,
};

pub struct RolesPlugin;

impl Plugin for RolesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RoleBoard>()
            .add_message::<RoleAssignedEvent>()
            .add_message::<WinConditionMetEvent>()
            .add_systems(
                Update,
                (
                    handle_spawn,
                    handle_select_target,
                    apply_deferred_actions,
                    handle_death,
                    handle_compass_use,
                    handle_area_entered,
                    handle_win_condition,
                )
                    .chain()
                    .in_set(ManhuntSet::Handlers),
            );
    }
}
