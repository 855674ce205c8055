//! Drivers domain: task lifecycle sync and the periodic drive loop.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::{GameClock, ManhuntConfig, WinCondition};
use crate::drivers::resources::{RecurringTasks, TaskKind};
use crate::host::{ApplyStatusEffect, ExperienceLevel, StatusEffect};
use crate::roles::{Role, RoleAssignedEvent, WinConditionMetEvent};

/// Starts the new role's tasks and cancels the superseded role's on every
/// role transition. Tasks stay bound to the participant they were started
/// for; a role change is the only thing that stops them.
pub(crate) fn sync_role_tasks(
    mut assignments: MessageReader<RoleAssignedEvent>,
    clock: Res<GameClock>,
    config: Res<ManhuntConfig>,
    mut tasks: ResMut<RecurringTasks>,
) {
    for assignment in assignments.read() {
        let participant = assignment.participant;
        let now = clock.now();
        match assignment.role {
            Role::Target => {
                tasks.cancel(participant, TaskKind::AssassinRefresh);
                tasks.start(participant, TaskKind::TargetSpeed, config.effect_period, now);
                if matches!(config.win_condition, WinCondition::LevelThreshold(_)) {
                    tasks.start(participant, TaskKind::WinCheck, config.win_check_period, now);
                }
            }
            Role::Assassin => {
                tasks.cancel(participant, TaskKind::TargetSpeed);
                tasks.cancel(participant, TaskKind::WinCheck);
                tasks.start(
                    participant,
                    TaskKind::AssassinRefresh,
                    config.effect_period,
                    now + config.effect_period,
                );
            }
            Role::Unassigned => tasks.cancel_all(participant),
        }
    }
}

/// Fires every due task and reschedules it one period out. The win check
/// fires once and unregisters itself.
pub(crate) fn drive_recurring(
    clock: Res<GameClock>,
    config: Res<ManhuntConfig>,
    mut tasks: ResMut<RecurringTasks>,
    levels: Query<&ExperienceLevel>,
    mut effects: MessageWriter<ApplyStatusEffect>,
    mut wins: MessageWriter<WinConditionMetEvent>,
) {
    let now = clock.now();
    for (participant, kind) in tasks.due(now) {
        match kind {
            TaskKind::TargetSpeed => {
                effects.write(ApplyStatusEffect {
                    participant,
                    effect: StatusEffect::Speed,
                    duration_ticks: config.effect_period,
                    show_particles: false,
                });
                tasks.advance(participant, kind, now);
            }
            TaskKind::AssassinRefresh => {
                // Equipment re-supply goes here once assassins carry more
                // than the compass.
                tasks.advance(participant, kind, now);
            }
            TaskKind::WinCheck => {
                let WinCondition::LevelThreshold(threshold) = &config.win_condition else {
                    tasks.cancel(participant, kind);
                    continue;
                };
                let level = levels
                    .get(participant)
                    .map(|level| level.0)
                    .unwrap_or_default();
                if level >= *threshold {
                    wins.write(WinConditionMetEvent {
                        target: participant,
                    });
                    tasks.cancel(participant, kind);
                } else {
                    tasks.advance(participant, kind, now);
                }
            }
        }
    }
}
