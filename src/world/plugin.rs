//! World plugin - arena construction and player spawn.

use bevy::prelude::*;

use super::data::{load_arena_definition, ArenaDefinition};
use super::spawning::{spawn_floor, spawn_light, spawn_wall, wall_material};
use crate::player::spawn_player;

/// World plugin - builds the arena once at startup.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (load_arena_definition, setup_arena).chain());
    }
}

/// Build the arena from its definition and spawn the player in it.
///
/// Runs exactly once; a session reset moves entities back to their spawn
/// points instead of rebuilding the world.
fn setup_arena(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    arena: Res<ArenaDefinition>,
) {
    info!("Building arena ({} wall blocks)", arena.walls.len());

    spawn_floor(&mut commands, &mut meshes, &mut materials, arena.floor_size);

    let material = wall_material(&mut materials);
    for wall in &arena.walls {
        spawn_wall(&mut commands, &mut meshes, material.clone(), wall);
    }

    spawn_light(&mut commands, arena.light_illuminance);

    spawn_player(&mut commands, arena.player_spawn());
}
