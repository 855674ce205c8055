//! Drivers domain: recurring task lifecycle and driver loop tests.

use bevy::ecs::message::{Message, Messages};
use bevy::prelude::*;

use super::{RecurringTasks, TaskKind};
use crate::ManhuntPlugin;
use crate::core::ManhuntConfig;
use crate::host::{
    ApplyStatusEffect, AreaId, ExperienceLevel, Location, Participant, ParticipantDiedEvent,
    ParticipantSpawnedEvent, StatusEffect, TitleNotification,
};

fn test_app() -> App {
    let mut app = App::new();
    app.insert_resource(ManhuntConfig {
        seed: Some(7),
        ..Default::default()
    });
    app.add_plugins(ManhuntPlugin);
    app
}

fn connect(app: &mut App, name: &str) -> Entity {
    let participant = app
        .world_mut()
        .spawn((
            Participant::new(name),
            Location {
                position: Vec3::new(0.0, 64.0, 0.0),
                area: AreaId::new("overworld"),
            },
            ExperienceLevel(0),
        ))
        .id();
    send(app, ParticipantSpawnedEvent { participant });
    participant
}

fn send<M: Message>(app: &mut App, message: M) {
    app.world_mut().resource_mut::<Messages<M>>().write(message);
}

fn drain<M: Message>(app: &mut App) -> Vec<M> {
    app.world_mut()
        .resource_mut::<Messages<M>>()
        .drain()
        .collect()
}

fn tick_collect<M: Message>(app: &mut App, count: usize) -> Vec<M> {
    let mut collected = Vec::new();
    for _ in 0..count {
        app.update();
        collected.extend(drain::<M>(app));
    }
    collected
}

fn tasks(app: &App) -> &RecurringTasks {
    app.world().resource::<RecurringTasks>()
}

// -----------------------------------------------------------------------------
// RecurringTasks unit tests
// -----------------------------------------------------------------------------

#[test]
fn test_recurring_tasks_fire_on_due_tick() {
    let mut world = World::new();
    let a = world.spawn_empty().id();

    let mut tasks = RecurringTasks::default();
    tasks.start(a, TaskKind::TargetSpeed, 600, 10);

    assert!(tasks.due(9).is_empty());
    assert_eq!(tasks.due(10), vec![(a, TaskKind::TargetSpeed)]);

    tasks.advance(a, TaskKind::TargetSpeed, 10);
    assert!(tasks.due(10).is_empty());
    assert_eq!(tasks.due(610), vec![(a, TaskKind::TargetSpeed)]);
}

#[test]
fn test_recurring_tasks_cancel_and_rebind() {
    let mut world = World::new();
    let a = world.spawn_empty().id();
    let b = world.spawn_empty().id();

    let mut tasks = RecurringTasks::default();
    tasks.start(a, TaskKind::TargetSpeed, 600, 0);
    tasks.start(a, TaskKind::WinCheck, 100, 0);
    tasks.start(b, TaskKind::AssassinRefresh, 600, 0);

    tasks.cancel(a, TaskKind::WinCheck);
    assert!(!tasks.is_scheduled(a, TaskKind::WinCheck));
    assert!(tasks.is_scheduled(a, TaskKind::TargetSpeed));

    tasks.cancel_all(a);
    assert!(!tasks.is_scheduled(a, TaskKind::TargetSpeed));
    assert!(tasks.is_scheduled(b, TaskKind::AssassinRefresh));

    // Restarting rebinds the schedule.
    tasks.start(b, TaskKind::AssassinRefresh, 600, 50);
    assert!(tasks.due(0).is_empty());
    assert_eq!(tasks.due(50), vec![(b, TaskKind::AssassinRefresh)]);
}

// -----------------------------------------------------------------------------
// Driver loop tests
// -----------------------------------------------------------------------------

#[test]
fn test_target_speed_refreshes_every_period() {
    let mut app = test_app();
    let alice = connect(&mut app, "Alice");

    // First boost lands with the crown, the next one a full period later.
    let effects = tick_collect::<ApplyStatusEffect>(&mut app, 5);
    assert_eq!(effects.len(), 1);
    assert_eq!(effects[0].participant, alice);
    assert_eq!(effects[0].effect, StatusEffect::Speed);
    assert_eq!(effects[0].duration_ticks, 600);
    assert!(!effects[0].show_particles);

    let effects = tick_collect::<ApplyStatusEffect>(&mut app, 600);
    assert_eq!(effects.len(), 1);
    assert_eq!(effects[0].participant, alice);
}

#[test]
fn test_win_check_fires_once_and_unregisters() {
    let mut app = test_app();
    let alice = connect(&mut app, "Alice");
    let _bob = connect(&mut app, "Bob");
    tick_collect::<TitleNotification>(&mut app, 6);
    assert!(tasks(&app).is_scheduled(alice, TaskKind::WinCheck));

    app.world_mut().entity_mut(alice).insert(ExperienceLevel(6));
    let titles = tick_collect::<TitleNotification>(&mut app, 150);

    assert!(!tasks(&app).is_scheduled(alice, TaskKind::WinCheck));
    assert_eq!(
        titles.iter().filter(|t| t.title == "You win!").count(),
        1,
        "the poll must not fire again after the win"
    );

    // No further polls, no further announcements.
    let titles = tick_collect::<TitleNotification>(&mut app, 300);
    assert!(titles.is_empty());
}

#[test]
fn test_role_change_cancels_superseded_tasks() {
    let mut app = test_app();
    let alice = connect(&mut app, "Alice");
    tick_collect::<TitleNotification>(&mut app, 3);
    let bob = connect(&mut app, "Bob");
    tick_collect::<TitleNotification>(&mut app, 3);

    assert!(tasks(&app).is_scheduled(alice, TaskKind::TargetSpeed));
    assert!(tasks(&app).is_scheduled(alice, TaskKind::WinCheck));
    assert!(tasks(&app).is_scheduled(bob, TaskKind::AssassinRefresh));
    assert!(!tasks(&app).is_scheduled(bob, TaskKind::TargetSpeed));

    send(
        &mut app,
        ParticipantDiedEvent {
            participant: alice,
            killer: Some(bob),
        },
    );
    tick_collect::<TitleNotification>(&mut app, 161);

    // Roles swapped; each participant only carries the new role's tasks.
    assert!(tasks(&app).is_scheduled(bob, TaskKind::TargetSpeed));
    assert!(tasks(&app).is_scheduled(bob, TaskKind::WinCheck));
    assert!(!tasks(&app).is_scheduled(bob, TaskKind::AssassinRefresh));

    assert!(tasks(&app).is_scheduled(alice, TaskKind::AssassinRefresh));
    assert!(!tasks(&app).is_scheduled(alice, TaskKind::TargetSpeed));
    assert!(!tasks(&app).is_scheduled(alice, TaskKind::WinCheck));
}

#[test]
fn test_assassin_refresh_emits_no_effects() {
    let mut app = test_app();
    let _alice = connect(&mut app, "Alice");
    tick_collect::<ApplyStatusEffect>(&mut app, 3);
    let bob = connect(&mut app, "Bob");

    let effects = tick_collect::<ApplyStatusEffect>(&mut app, 700);
    assert!(
        effects.iter().all(|effect| effect.participant != bob),
        "the assassin hook is reserved and must not apply effects"
    );
}
