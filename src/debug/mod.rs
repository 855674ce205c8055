//! Debug tooling for headless observability of the role flow (dev-tools
//! feature).
//!
//! Features:
//! - Log every role transition with the participant's name
//! - Announce met win conditions into the overworld via a world command
//! - Periodic role board dump at debug level

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::{GameClock, ManhuntConfig, ManhuntSet};
use crate::host::{AreaId, Participant, WorldCommand};
use crate::roles::{RoleAssignedEvent, RoleBoard, WinConditionMetEvent};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (log_role_transitions, announce_win_trigger, dump_role_board)
                .chain()
                .after(ManhuntSet::Drivers),
        );
    }
}

fn log_role_transitions(
    mut assignments: MessageReader<RoleAssignedEvent>,
    participants: Query<&Participant>,
) {
    for assignment in assignments.read() {
        let name = participants
            .get(assignment.participant)
            .map(|participant| participant.name.clone())
            .unwrap_or_else(|_| format!("{:?}", assignment.participant));
        info!("[DEBUG] {} is now {:?}", name, assignment.role);
    }
}

/// Mirrors win detection into the overworld as a broadcast command,
/// exercising the world-command boundary utility.
fn announce_win_trigger(
    mut wins: MessageReader<WinConditionMetEvent>,
    participants: Query<&Participant>,
    mut commands: MessageWriter<WorldCommand>,
) {
    for win in wins.read() {
        let name = participants
            .get(win.target)
            .map(|participant| participant.name.clone())
            .unwrap_or_else(|_| format!("{:?}", win.target));
        info!("[DEBUG] Win condition met by {}", name);
        commands.write(WorldCommand {
            area: AreaId::new("overworld"),
            command: format!("say {} has won the manhunt", name),
        });
    }
}

/// Dumps the role board once per effect period.
fn dump_role_board(
    clock: Res<GameClock>,
    config: Res<ManhuntConfig>,
    board: Res<RoleBoard>,
    participants: Query<(Entity, &Participant)>,
) {
    if config.effect_period == 0 || clock.now() % config.effect_period != 0 {
        return;
    }
    for (entity, participant) in participants.iter() {
        debug!("[DEBUG] {} -> {:?}", participant.name, board.role_of(entity));
    }
}
