//! Host boundary: participant components and the message surface exchanged
//! with the host engine. Inbound messages are written by the host adapter;
//! outbound commands are consumed by it. The core never calls the host
//! directly.

mod commands;
mod components;
mod events;

pub use commands::{
    ApplyStatusEffect, ChatMessage, ClearInventory, GrantItem, ResetHud, ResetProgress,
    SetPersonalSpawn, SetWorldSpawn, StatusEffect, TitleNotification, WorldCommand,
};
pub use components::{AreaId, ExperienceLevel, Location, Participant, TRACKING_COMPASS};
pub use events::{
    AreaEnteredEvent, ItemUsedEvent, ParticipantDiedEvent, ParticipantSpawnedEvent,
    SelectTargetEvent,
};

use bevy::prelude::*;

pub struct HostPlugin;

impl Plugin for HostPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ParticipantSpawnedEvent>()
            .add_message::<ParticipantDiedEvent>()
            .add_message::<ItemUsedEvent>()
            .add_message::<AreaEnteredEvent>()
            .add_message::<SelectTargetEvent>()
            .add_message::<ChatMessage>()
            .add_message::<TitleNotification>()
            .add_message::<ClearInventory>()
            .add_message::<ResetProgress>()
            .add_message::<ResetHud>()
            .add_message::<GrantItem>()
            .add_message::<ApplyStatusEffect>()
            .add_message::<SetWorldSpawn>()
            .add_message::<SetPersonalSpawn>()
            .add_message::<WorldCommand>();
    }
}
