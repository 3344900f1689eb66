//! Player plugin - registers movement and camera systems.

use bevy::prelude::*;

use super::components::PlayerConfig;
use super::movement;
use crate::core::GameState;

/// Player plugin - first-person controls.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerConfig>()
            .add_systems(OnEnter(GameState::InGame), movement::grab_cursor)
            .add_systems(
                Update,
                (movement::mouse_look, movement::player_movement)
                    .run_if(in_state(GameState::InGame)),
            );
    }
}
