//! Headless demo session with a console host adapter: three participants
//! connect, the target is killed, and the new target levels to the win
//! threshold.

use bevy::ecs::message::{Message, MessageReader, Messages};
use bevy::prelude::*;

use manhunt::ManhuntPlugin;
use manhunt::core::{ManhuntConfig, ManhuntSet};
use manhunt::host::{
    ApplyStatusEffect, AreaId, ChatMessage, ExperienceLevel, GrantItem, ItemUsedEvent, Location,
    Participant, ParticipantDiedEvent, ParticipantSpawnedEvent, TRACKING_COMPASS,
    TitleNotification, WorldCommand,
};

fn main() {
    let mut app = App::new();
    app.add_plugins(bevy::log::LogPlugin::default());
    app.insert_resource(ManhuntConfig {
        seed: Some(7),
        ..Default::default()
    });
    app.add_plugins(ManhuntPlugin);
    app.add_systems(Update, print_outbound.after(ManhuntSet::Drivers));

    let alice = connect(&mut app, "Alice", Vec3::new(0.0, 64.0, 0.0));
    tick(&mut app, 3);

    let bob = connect(&mut app, "Bob", Vec3::new(40.0, 64.0, 12.0));
    let carol = connect(&mut app, "Carol", Vec3::new(-25.0, 70.0, 8.0));
    tick(&mut app, 5);

    // Bob tracks the target.
    send(
        &mut app,
        ItemUsedEvent {
            participant: bob,
            item_id: TRACKING_COMPASS.to_string(),
        },
    );
    tick(&mut app, 1);

    // Carol gets the kill and is crowned once the title has run.
    send(
        &mut app,
        ParticipantDiedEvent {
            participant: alice,
            killer: Some(carol),
        },
    );
    tick(&mut app, 161);

    // Carol races to the level threshold and wins.
    app.world_mut().entity_mut(carol).insert(ExperienceLevel(5));
    tick(&mut app, 150);
}

fn connect(app: &mut App, name: &str, position: Vec3) -> Entity {
    let participant = app
        .world_mut()
        .spawn((
            Participant::new(name),
            Location {
                position,
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

fn tick(app: &mut App, count: usize) {
    for _ in 0..count {
        app.update();
    }
}

/// Console host adapter: prints the outbound command stream.
fn print_outbound(
    mut titles: MessageReader<TitleNotification>,
    mut chat: MessageReader<ChatMessage>,
    mut grants: MessageReader<GrantItem>,
    mut effects: MessageReader<ApplyStatusEffect>,
    mut world_commands: MessageReader<WorldCommand>,
    participants: Query<&Participant>,
) {
    let name = |entity: Entity| {
        participants
            .get(entity)
            .map(|participant| participant.name.clone())
            .unwrap_or_else(|_| format!("{entity:?}"))
    };

    for title in titles.read() {
        info!(
            "[title -> {}] {} / {}",
            name(title.participant),
            title.title,
            title.subtitle.replace('\n', " ")
        );
    }
    for message in chat.read() {
        info!("[chat -> {}] {}", name(message.participant), message.text);
    }
    for grant in grants.read() {
        info!(
            "[grant -> {}] {} x{}",
            name(grant.participant),
            grant.item_id,
            grant.quantity
        );
    }
    for effect in effects.read() {
        info!(
            "[effect -> {}] {:?} for {} ticks",
            name(effect.participant),
            effect.effect,
            effect.duration_ticks
        );
    }
    for command in world_commands.read() {
        info!("[command -> {}] {}", command.area.0, command.command);
    }
}
