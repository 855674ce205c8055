//! Drivers domain: recurring task bookkeeping.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::core::Tick;

/// Kind of recurring work bound to a participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// Refreshes the target's speed boost every effect period.
    TargetSpeed,
    /// Equipment re-check hook for assassins. Reserved, currently empty.
    AssassinRefresh,
    /// Polls the target's level against the win threshold.
    WinCheck,
}

#[derive(Debug, Clone, Copy)]
struct TaskState {
    period: Tick,
    next_due: Tick,
}

/// Repeating tasks keyed by participant and kind. Role transitions cancel
/// superseded entries instead of leaving stale loops bound to a participant
/// who changed roles.
#[derive(Resource, Debug, Default)]
pub struct RecurringTasks {
    tasks: HashMap<(Entity, TaskKind), TaskState>,
}

impl RecurringTasks {
    /// Registers (or rebinds) a task. A `next_due` of the current tick fires
    /// on this very tick.
    pub fn start(&mut self, participant: Entity, kind: TaskKind, period: Tick, next_due: Tick) {
        self.tasks
            .insert((participant, kind), TaskState { period, next_due });
    }

    pub fn cancel(&mut self, participant: Entity, kind: TaskKind) {
        self.tasks.remove(&(participant, kind));
    }

    pub fn cancel_all(&mut self, participant: Entity) {
        self.tasks.retain(|(bound, _), _| *bound != participant);
    }

    pub fn is_scheduled(&self, participant: Entity, kind: TaskKind) -> bool {
        self.tasks.contains_key(&(participant, kind))
    }

    /// Tasks due at `now`, in deterministic (participant, kind) order.
    pub fn due(&self, now: Tick) -> Vec<(Entity, TaskKind)> {
        let mut due: Vec<(Entity, TaskKind)> = self
            .tasks
            .iter()
            .filter(|(_, state)| state.next_due <= now)
            .map(|(key, _)| *key)
            .collect();
        due.sort_by_key(|&(participant, kind)| (participant, kind as u8));
        due
    }

    /// Pushes a fired task to its next period boundary.
    pub fn advance(&mut self, participant: Entity, kind: TaskKind, now: Tick) {
        if let Some(state) = self.tasks.get_mut(&(participant, kind)) {
            state.next_due = now + state.period;
        }
    }
}
