//! Roles domain: event handlers and role state machine transitions.
//!
//! Handlers filter inbound host events down to the relevant predicate and
//! invoke the matching transition. All role mutation goes through the
//! [`RoleBoard`] mutators inside `init_target` / `init_assassin`.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use rand::Rng;

use crate::core::{
    DeferredAction, GameClock, ManhuntConfig, Scheduler, SessionRng, Tick, WinCondition,
};
use crate::host::{
    AreaEnteredEvent, ChatMessage, ClearInventory, GrantItem, ItemUsedEvent, Location,
    Participant, ParticipantDiedEvent, ParticipantSpawnedEvent, ResetHud, ResetProgress,
    SelectTargetEvent, SetPersonalSpawn, SetWorldSpawn, TRACKING_COMPASS, TitleNotification,
};
use crate::roles::events::{RoleAssignedEvent, WinConditionMetEvent};
use crate::roles::resources::{Role, RoleBoard};

const GAME_TITLE: &str = "Manhunt";

type ParticipantQuery<'w, 's> = Query<'w, 's, (Entity, &'static Participant, Option<&'static Location>)>;

/// Connection setup on every spawn, then a deferred role decision.
pub(crate) fn handle_spawn(
    mut spawns: MessageReader<ParticipantSpawnedEvent>,
    participants: Query<(), With<Participant>>,
    clock: Res<GameClock>,
    config: Res<ManhuntConfig>,
    mut scheduler: ResMut<Scheduler>,
    mut clear_inventory: MessageWriter<ClearInventory>,
    mut reset_progress: MessageWriter<ResetProgress>,
    mut reset_hud: MessageWriter<ResetHud>,
) {
    for spawn in spawns.read() {
        if participants.get(spawn.participant).is_err() {
            continue;
        }
        clear_inventory.write(ClearInventory {
            participant: spawn.participant,
        });
        reset_progress.write(ResetProgress {
            participant: spawn.participant,
        });
        reset_hud.write(ResetHud {
            participant: spawn.participant,
        });
        scheduler.schedule_after(
            clock.now(),
            config.role_decision_delay,
            DeferredAction::AssignRole(spawn.participant),
        );
    }
}

/// Executes deferred actions once the scheduler dispatches them.
pub(crate) fn apply_deferred_actions(
    mut actions: MessageReader<DeferredAction>,
    mut board: ResMut<RoleBoard>,
    clock: Res<GameClock>,
    config: Res<ManhuntConfig>,
    mut scheduler: ResMut<Scheduler>,
    participants: ParticipantQuery,
    mut role_assigned: MessageWriter<RoleAssignedEvent>,
    mut titles: MessageWriter<TitleNotification>,
    mut chat: MessageWriter<ChatMessage>,
    mut grant_item: MessageWriter<GrantItem>,
    mut set_world_spawn: MessageWriter<SetWorldSpawn>,
) {
    for action in actions.read() {
        match *action {
            DeferredAction::AssignRole(participant) => match board.target() {
                None => init_target(
                    participant,
                    &mut board,
                    &config,
                    &participants,
                    &mut role_assigned,
                    &mut titles,
                    &mut chat,
                    &mut set_world_spawn,
                ),
                Some(target) if target != participant => init_assassin(
                    participant,
                    &mut board,
                    &config,
                    clock.now(),
                    &mut scheduler,
                    &participants,
                    &mut role_assigned,
                    &mut titles,
                    &mut chat,
                ),
                Some(_) => {}
            },
            DeferredAction::GrantCompass(participant) => {
                grant_item.write(GrantItem {
                    participant,
                    item_id: TRACKING_COMPASS.to_string(),
                    quantity: 1,
                });
            }
            DeferredAction::CrownTarget(participant) => init_target(
                participant,
                &mut board,
                &config,
                &participants,
                &mut role_assigned,
                &mut titles,
                &mut chat,
                &mut set_world_spawn,
            ),
            DeferredAction::DemoteToAssassin(participant) => init_assassin(
                participant,
                &mut board,
                &config,
                clock.now(),
                &mut scheduler,
                &participants,
                &mut role_assigned,
                &mut titles,
                &mut chat,
            ),
            DeferredAction::AnnounceTargetWin => {
                announce_target_win(&board, &config, &participants, &mut titles, &mut chat);
            }
        }
    }
}

/// Assassin win: the current target died to another participant. The killer
/// is crowned once their win title has run; the victim is re-inited as an
/// assassin on the same delay.
pub(crate) fn handle_death(
    mut deaths: MessageReader<ParticipantDiedEvent>,
    board: Res<RoleBoard>,
    clock: Res<GameClock>,
    config: Res<ManhuntConfig>,
    mut scheduler: ResMut<Scheduler>,
    participants: ParticipantQuery,
    mut titles: MessageWriter<TitleNotification>,
) {
    for death in deaths.read() {
        if board.target() != Some(death.participant) {
            continue;
        }
        let Some(killer) = death.killer else {
            continue;
        };
        if killer == death.participant || participants.get(killer).is_err() {
            continue;
        }

        titles.write(TitleNotification {
            participant: killer,
            title: "You win!".to_string(),
            subtitle: "You are a highly effective killer.".to_string(),
            timing: config.title_timing,
        });
        titles.write(TitleNotification {
            participant: death.participant,
            title: "You lose!".to_string(),
            subtitle: "Better luck next time.".to_string(),
            timing: config.title_timing,
        });

        scheduler.schedule_after(
            clock.now(),
            config.title_timing.stay,
            DeferredAction::CrownTarget(killer),
        );
        scheduler.schedule_after(
            clock.now(),
            config.title_timing.stay,
            DeferredAction::DemoteToAssassin(death.participant),
        );
    }
}

/// Compass use: tells both parties a search is underway, points the world
/// respawn anchor at the target and the user's personal respawn at their own
/// current spot. Silent no-op while no target exists.
pub(crate) fn handle_compass_use(
    mut uses: MessageReader<ItemUsedEvent>,
    board: Res<RoleBoard>,
    participants: ParticipantQuery,
    mut chat: MessageWriter<ChatMessage>,
    mut set_world_spawn: MessageWriter<SetWorldSpawn>,
    mut set_personal_spawn: MessageWriter<SetPersonalSpawn>,
) {
    for used in uses.read() {
        if used.item_id != TRACKING_COMPASS {
            continue;
        }
        let Some(target) = board.target() else {
            continue;
        };
        let Ok((_, _, user_location)) = participants.get(used.participant) else {
            continue;
        };
        let Ok((_, target_identity, target_location)) = participants.get(target) else {
            continue;
        };

        chat.write(ChatMessage {
            participant: used.participant,
            text: format!("Seeking target {}...", target_identity.name),
        });
        chat.write(ChatMessage {
            participant: target,
            text: "Someone is seeking you...".to_string(),
        });

        if let Some(location) = target_location {
            set_world_spawn.write(SetWorldSpawn {
                position: location.position,
            });
        }
        if let Some(location) = user_location {
            set_personal_spawn.write(SetPersonalSpawn {
                participant: used.participant,
                position: location.position,
                area: location.area.clone(),
            });
        }
    }
}

/// Area-transition win detection, active only for the `ReachArea` condition.
pub(crate) fn handle_area_entered(
    mut entries: MessageReader<AreaEnteredEvent>,
    board: Res<RoleBoard>,
    config: Res<ManhuntConfig>,
    mut wins: MessageWriter<WinConditionMetEvent>,
) {
    let WinCondition::ReachArea(goal) = &config.win_condition else {
        return;
    };
    for entered in entries.read() {
        if board.target() == Some(entered.participant) && entered.area == *goal {
            wins.write(WinConditionMetEvent {
                target: entered.participant,
            });
        }
    }
}

/// Manual or random target (re)assignment. A previous target is re-inited as
/// an assassin right away.
pub(crate) fn handle_select_target(
    mut selects: MessageReader<SelectTargetEvent>,
    mut board: ResMut<RoleBoard>,
    clock: Res<GameClock>,
    config: Res<ManhuntConfig>,
    mut scheduler: ResMut<Scheduler>,
    mut rng: ResMut<SessionRng>,
    participants: ParticipantQuery,
    mut role_assigned: MessageWriter<RoleAssignedEvent>,
    mut titles: MessageWriter<TitleNotification>,
    mut chat: MessageWriter<ChatMessage>,
    mut set_world_spawn: MessageWriter<SetWorldSpawn>,
) {
    for select in selects.read() {
        let chosen = match select.participant {
            Some(participant) => participants
                .get(participant)
                .ok()
                .map(|(entity, _, _)| entity),
            None => {
                let connected: Vec<Entity> =
                    participants.iter().map(|(entity, _, _)| entity).collect();
                if connected.is_empty() {
                    None
                } else {
                    Some(connected[rng.0.random_range(0..connected.len())])
                }
            }
        };
        let Some(chosen) = chosen else {
            continue;
        };
        if board.target() == Some(chosen) {
            continue;
        }

        let previous = board.target();
        init_target(
            chosen,
            &mut board,
            &config,
            &participants,
            &mut role_assigned,
            &mut titles,
            &mut chat,
            &mut set_world_spawn,
        );
        if let Some(previous) = previous {
            init_assassin(
                previous,
                &mut board,
                &config,
                clock.now(),
                &mut scheduler,
                &participants,
                &mut role_assigned,
                &mut titles,
                &mut chat,
            );
        }
    }
}

/// Target-Win is terminal for the round: the announcement is deferred by
/// `win_announce_delay`, and no re-roll follows.
pub(crate) fn handle_win_condition(
    mut wins: MessageReader<WinConditionMetEvent>,
    clock: Res<GameClock>,
    config: Res<ManhuntConfig>,
    mut scheduler: ResMut<Scheduler>,
) {
    for _win in wins.read() {
        scheduler.schedule_after(
            clock.now(),
            config.win_announce_delay,
            DeferredAction::AnnounceTargetWin,
        );
    }
}

/// Target-Init: crown, instruct, anchor the world respawn at the new target,
/// and hand the role transition to the drivers.
#[allow(clippy::too_many_arguments)]
fn init_target(
    participant: Entity,
    board: &mut RoleBoard,
    config: &ManhuntConfig,
    participants: &ParticipantQuery,
    role_assigned: &mut MessageWriter<RoleAssignedEvent>,
    titles: &mut MessageWriter<TitleNotification>,
    chat: &mut MessageWriter<ChatMessage>,
    set_world_spawn: &mut MessageWriter<SetWorldSpawn>,
) {
    let Ok((_, identity, location)) = participants.get(participant) else {
        return;
    };

    board.crown(participant);

    let goal = config.win_condition.describe();
    titles.write(TitleNotification {
        participant,
        title: GAME_TITLE.to_string(),
        subtitle: format!(
            "{}, \nYOU are the assassination target. \n{goal} \nbefore you're murdered!",
            identity.name
        ),
        timing: config.title_timing,
    });
    chat.write(ChatMessage {
        participant,
        text: format!(
            "{}, YOU are the assassination target. {goal} before you're murdered!",
            identity.name
        ),
    });

    if let Some(location) = location {
        set_world_spawn.write(SetWorldSpawn {
            position: location.position,
        });
    }

    role_assigned.write(RoleAssignedEvent {
        participant,
        role: Role::Target,
    });
}

/// Assassin-Init: mark, instruct, and schedule the compass grant past the
/// connection-setup inventory clear.
#[allow(clippy::too_many_arguments)]
fn init_assassin(
    participant: Entity,
    board: &mut RoleBoard,
    config: &ManhuntConfig,
    now: Tick,
    scheduler: &mut Scheduler,
    participants: &ParticipantQuery,
    role_assigned: &mut MessageWriter<RoleAssignedEvent>,
    titles: &mut MessageWriter<TitleNotification>,
    chat: &mut MessageWriter<ChatMessage>,
) {
    let Ok((_, identity, _)) = participants.get(participant) else {
        return;
    };

    board.mark_assassin(participant);
    scheduler.schedule_after(
        now,
        config.compass_grant_delay,
        DeferredAction::GrantCompass(participant),
    );

    titles.write(TitleNotification {
        participant,
        title: GAME_TITLE.to_string(),
        subtitle: format!(
            "{}, you are an assassin! \nUSE your compass \nto find the current location \nof your target.",
            identity.name
        ),
        timing: config.title_timing,
    });
    chat.write(ChatMessage {
        participant,
        text: format!(
            "{}, you are an assassin! Use your compass to find the current location of your target.",
            identity.name
        ),
    });

    role_assigned.write(RoleAssignedEvent {
        participant,
        role: Role::Assassin,
    });
}

/// Win notification to the target, lose notifications to everyone else.
fn announce_target_win(
    board: &RoleBoard,
    config: &ManhuntConfig,
    participants: &ParticipantQuery,
    titles: &mut MessageWriter<TitleNotification>,
    chat: &mut MessageWriter<ChatMessage>,
) {
    let Some(target) = board.target() else {
        return;
    };
    let fulfilled = config.win_condition.fulfilled();

    for (entity, _, _) in participants.iter() {
        if entity == target {
            titles.write(TitleNotification {
                participant: entity,
                title: "You win!".to_string(),
                subtitle: format!("You {fulfilled} \nand beat out the assassins. \nWell done!"),
                timing: config.title_timing,
            });
            chat.write(ChatMessage {
                participant: entity,
                text: format!("You {fulfilled} and beat out the assassins. Well done!"),
            });
        } else {
            titles.write(TitleNotification {
                participant: entity,
                title: "You lose!".to_string(),
                subtitle: format!(
                    "You failed to assassinate the target\nbefore they {fulfilled}.\nBetter luck next time."
                ),
                timing: config.title_timing,
            });
        }
    }
}
