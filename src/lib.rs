//! Scape Devil - a minimal first-person chase demo in Bevy.
//!
//! The player walks around a small walled arena while a single demon patrols
//! between two waypoints. When the player comes within the demon's vision
//! range it switches to chasing, and catching the player ends the session
//! and resets it to its initial state.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, session reset
//! - **Player**: First-person movement and camera
//! - **Demon**: Patrol/chase AI, spawning, positional audio
//! - **World**: Arena geometry and lighting

pub mod core;
pub mod demon;
pub mod player;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct ScapeDevilPlugin;

impl Plugin for ScapeDevilPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // Demon systems
            .add_plugins(demon::DemonPlugin)

            // World systems
            .add_plugins(world::WorldPlugin);
    }
}
