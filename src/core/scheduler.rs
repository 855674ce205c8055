//! Core domain: one-shot deferred actions against the tick clock.

use bevy::ecs::message::{Message, MessageWriter};
use bevy::prelude::*;

use crate::core::clock::{GameClock, Tick};

/// A role-machine action deferred to a later tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    /// Decide the spawning participant's role, after the connection-setup
    /// resets have landed.
    AssignRole(Entity),
    /// Hand a tracking compass to a freshly inited assassin.
    GrantCompass(Entity),
    /// Re-run Target-Init on the participant (killer crowned once their win
    /// title has run).
    CrownTarget(Entity),
    /// Re-run Assassin-Init on a dethroned target.
    DemoteToAssassin(Entity),
    /// Send the win/lose notifications for a met win condition.
    AnnounceTargetWin,
}

impl Message for DeferredAction {}

#[derive(Debug)]
struct ScheduledEntry {
    due: Tick,
    action: DeferredAction,
}

/// "Run after N ticks" queue. Entries are dispatched as [`DeferredAction`]
/// messages once the clock reaches their due tick, in scheduling order.
#[derive(Resource, Debug, Default)]
pub struct Scheduler {
    entries: Vec<ScheduledEntry>,
}

impl Scheduler {
    pub fn schedule_after(&mut self, now: Tick, delay: Tick, action: DeferredAction) {
        self.entries.push(ScheduledEntry {
            due: now + delay,
            action,
        });
    }

    /// Removes and returns every entry due at or before `now`, preserving
    /// scheduling order.
    pub fn drain_due(&mut self, now: Tick) -> Vec<DeferredAction> {
        let mut due = Vec::new();
        self.entries.retain(|entry| {
            if entry.due <= now {
                due.push(entry.action);
                false
            } else {
                true
            }
        });
        due
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }
}

pub(crate) fn dispatch_due_actions(
    clock: Res<GameClock>,
    mut scheduler: ResMut<Scheduler>,
    mut actions: MessageWriter<DeferredAction>,
) {
    for action in scheduler.drain_due(clock.now()) {
        actions.write(action);
    }
}
