//! Core domain: game clock, deferred-action scheduler, and session config.

mod clock;
mod config;
mod scheduler;

pub use clock::{GameClock, Tick};
pub use config::{ConfigLoadError, ManhuntConfig, SessionRng, TitleTiming, WinCondition};
pub use scheduler::{DeferredAction, Scheduler};

use bevy::prelude::*;

use crate::core::clock::advance_clock;
use crate::core::scheduler::dispatch_due_actions;

/// Fixed execution order for the whole plugin within `Update`.
/// One `Update` pass is one tick of the session clock.
#[derive(SystemSet, Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum ManhuntSet {
    /// Clock advance and dispatch of due deferred actions.
    Clock,
    /// Event handlers and role state machine transitions.
    Handlers,
    /// Recurring per-role task sync and drive.
    Drivers,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameClock>()
            .init_resource::<Scheduler>()
            .init_resource::<ManhuntConfig>()
            .init_resource::<SessionRng>()
            .add_message::<DeferredAction>()
            .configure_sets(
                Update,
                (
                    ManhuntSet::Clock,
                    ManhuntSet::Handlers,
                    ManhuntSet::Drivers,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (advance_clock, dispatch_due_actions)
                    .chain()
                    .in_set(ManhuntSet::Clock),
            );
    }
}
