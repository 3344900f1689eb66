//! Demon plugin - registers spawning, AI, and audio systems.

use bevy::prelude::*;

use super::ai;
use super::audio;
use super::data::load_demon_definition;
use super::spawning::{self, PendingDemon};
use crate::core::GameState;

/// Demon plugin - handles the demon's spawning, behavior, and sounds.
pub struct DemonPlugin;

impl Plugin for DemonPlugin {
    fn build(&self, app: &mut App) {
        app
            // Load the definition, then request the model
            .add_systems(
                Startup,
                (load_demon_definition, spawning::queue_demon_assets).chain(),
            )
            // Spawn once the model has arrived
            .add_systems(
                Update,
                spawning::spawn_demon_when_ready
                    .run_if(in_state(GameState::InGame))
                    .run_if(resource_exists::<PendingDemon>),
            )
            // The behavior chain runs in a fixed order every frame: a state
            // change from the vision check must affect the same frame's
            // movement, and orientation always follows movement
            .add_systems(
                Update,
                (
                    ai::demon_vision,
                    ai::demon_patrol,
                    ai::demon_chase,
                    ai::demon_orientation,
                )
                    .chain()
                    .run_if(in_state(GameState::InGame)),
            )
            // Audio reacts to the demon's position after the AI has moved it
            .add_systems(
                Update,
                (
                    audio::start_demon_audio,
                    audio::update_demon_audio.run_if(resource_exists::<audio::DemonAudio>),
                )
                    .after(ai::demon_orientation)
                    .run_if(in_state(GameState::InGame)),
            );
    }
}
