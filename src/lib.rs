//! Manhunt minigame behavior plugin.
//!
//! One participant is the hunted Target; every other connected participant is
//! an Assassin carrying a tracking compass. The Target wins by satisfying the
//! configured win condition (experience level threshold or entering a
//! designated area) before being killed; an Assassin wins by killing the
//! Target first, which crowns them as the new Target.
//!
//! The host engine feeds game events in as messages (participant spawn,
//! death, item use, area entry) and consumes outbound host commands
//! (notifications, item grants, status effects, spawn-point changes). All
//! logic runs on a shared tick clock inside `Update`, in a fixed system
//! order, which mirrors the host's serialized-callback contract.
//!
//! Insert a customized [`core::ManhuntConfig`] before adding [`ManhuntPlugin`]
//! to change the win condition or timings.

pub mod core;
#[cfg(feature = "dev-tools")]
pub mod debug;
pub mod drivers;
pub mod host;
pub mod roles;

use bevy::prelude::*;

pub struct ManhuntPlugin;

impl Plugin for ManhuntPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            core::CorePlugin,
            host::HostPlugin,
            roles::RolesPlugin,
            drivers::DriversPlugin,
        ));

        #[cfg(feature = "dev-tools")]
        app.add_plugins(debug::DebugPlugin);
    }
}
