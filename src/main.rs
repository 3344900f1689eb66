//! Scape Devil - Entry Point
//!
//! A minimal first-person horror demo: escape the patrolling demon.
//!
//! Controls:
//! - WASD: Move
//! - Mouse: Look around

use bevy::prelude::*;
use bevy_kira_audio::prelude::*;
use bevy_rapier3d::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Scape Devil".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))

        // Physics
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())

        // Audio
        .add_plugins(AudioPlugin)

        // Our game plugin
        .add_plugins(scape_devil::ScapeDevilPlugin)

        .run();
}
