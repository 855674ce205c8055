//! Core domain: the shared session tick clock.

use bevy::prelude::*;

/// Host simulation time unit. 20 ticks per second on the reference host.
pub type Tick = u64;

/// Monotonic tick counter, advanced once per `Update` pass.
#[derive(Resource, Debug, Default)]
pub struct GameClock {
    tick: Tick,
}

impl GameClock {
    pub fn now(&self) -> Tick {
        self.tick
    }
}

pub(crate) fn advance_clock(mut clock: ResMut<GameClock>) {
    clock.tick += 1;
}
