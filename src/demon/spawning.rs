//! Demon spawning.
//!
//! The model arrives asynchronously, so the demon entity is created only
//! once its scene asset (and all dependencies) has finished loading. Until
//! then there is no demon in the world and the AI systems do nothing.

use bevy::asset::LoadState;
use bevy::prelude::*;

use super::components::{Demon, DemonState};
use super::data::DemonDefinition;
use crate::core::DemonReadyEvent;

/// Tracks the in-flight demon scene load. Removed once the demon spawns.
#[derive(Resource)]
pub struct PendingDemon {
    scene: Handle<Scene>,
}

/// Request the demon's model right after the definition is loaded.
pub fn queue_demon_assets(
    mut commands: Commands,
    definition: Res<DemonDefinition>,
    asset_server: Res<AssetServer>,
) {
    let scene = asset_server
        .load(GltfAssetLabel::Scene(0).from_asset(definition.model_path.clone()));
    commands.insert_resource(PendingDemon { scene });
}

/// Spawn the demon once its scene asset has arrived.
///
/// Runs every frame while a load is pending. On a failed load the demon is
/// spawned anyway (invisible) so the behavior demo still works without the
/// model file.
pub fn spawn_demon_when_ready(
    mut commands: Commands,
    pending: Res<PendingDemon>,
    definition: Res<DemonDefinition>,
    asset_server: Res<AssetServer>,
    mut ready_events: EventWriter<DemonReadyEvent>,
) {
    match asset_server.load_state(&pending.scene) {
        LoadState::Loaded if asset_server.is_loaded_with_dependencies(&pending.scene) => {}
        LoadState::Failed(e) => {
            warn!("Demon model failed to load, spawning without it: {}", e);
        }
        _ => return,
    }

    let demon = commands
        .spawn((
            Demon,
            DemonState::default(),
            definition.patrol_route(),
            definition.to_stats(),
            SceneRoot(pending.scene.clone()),
            Transform::from_translation(definition.spawn_position())
                .with_scale(Vec3::splat(definition.scale)),
        ))
        .id();

    commands.remove_resource::<PendingDemon>();
    ready_events.send(DemonReadyEvent { demon });

    info!("{} spawned at {:?}", definition.name, definition.spawn_position());
}
