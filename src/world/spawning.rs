//! Geometry spawning functions for arena construction.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::data::WallDef;

/// Marker for everything spawned as part of the arena.
#[derive(Component)]
pub struct ArenaGeometry;

/// Spawn the square floor as a thin box with a collider.
pub fn spawn_floor(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    size: f32,
) {
    let thickness = 0.2;
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.25, 0.23, 0.21),
        perceptual_roughness: 0.9,
        ..default()
    });

    // Top surface at y = 0
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(size, thickness, size))),
        MeshMaterial3d(material),
        Transform::from_xyz(0.0, -thickness / 2.0, 0.0),
        Collider::cuboid(size / 2.0, thickness / 2.0, size / 2.0),
        ArenaGeometry,
    ));
}

/// Spawn a wall block with a collider.
pub fn spawn_wall(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    material: Handle<StandardMaterial>,
    wall: &WallDef,
) {
    let size = Vec3::from_array(wall.size);
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
        MeshMaterial3d(material),
        Transform::from_translation(Vec3::from_array(wall.position)),
        Collider::cuboid(size.x / 2.0, size.y / 2.0, size.z / 2.0),
        ArenaGeometry,
    ));
}

/// Make the wall material, shared by all wall blocks.
pub fn wall_material(materials: &mut Assets<StandardMaterial>) -> Handle<StandardMaterial> {
    materials.add(StandardMaterial {
        base_color: Color::srgb(0.32, 0.30, 0.28),
        perceptual_roughness: 0.8,
        ..default()
    })
}

/// Spawn the overhead light, standing in for a sky hemisphere.
pub fn spawn_light(commands: &mut Commands, illuminance: f32) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 120.0,
    });

    commands.spawn((
        DirectionalLight {
            illuminance,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(0.0, 200.0, 0.0).looking_at(Vec3::ZERO, Vec3::Z),
        ArenaGeometry,
    ));
}
