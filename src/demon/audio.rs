//! Demon sound loops with distance attenuation.
//!
//! Two loops play for the whole session once the demon exists: heavy steps
//! and a low growl. Their volume falls off with the demon's distance to the
//! player, approximating the positional audio of a 3D listener.

use bevy::prelude::*;
use bevy_kira_audio::prelude::*;

use super::components::Demon;
use super::data::DemonDefinition;
use crate::core::DemonReadyEvent;
use crate::player::Player;

/// Distance at which the step loop plays at half volume.
const STEP_REF_DISTANCE: f32 = 20.0;
/// Distance at which the growl loop plays at half volume.
const GROWL_REF_DISTANCE: f32 = 30.0;

/// Handles to the demon's running audio loops.
#[derive(Resource)]
pub struct DemonAudio {
    steps: Handle<AudioInstance>,
    growl: Handle<AudioInstance>,
}

/// Start the looping sounds when the demon entity appears.
pub fn start_demon_audio(
    mut commands: Commands,
    mut ready_events: EventReader<DemonReadyEvent>,
    definition: Res<DemonDefinition>,
    asset_server: Res<AssetServer>,
    audio: Res<Audio>,
) {
    for _ in ready_events.read() {
        let steps = audio
            .play(asset_server.load(&definition.step_sound))
            .looped()
            .with_volume(0.0)
            .handle();
        let growl = audio
            .play(asset_server.load(&definition.growl_sound))
            .looped()
            .with_volume(0.0)
            .handle();
        commands.insert_resource(DemonAudio { steps, growl });
    }
}

/// Scale loop volume by the demon's current distance to the player.
pub fn update_demon_audio(
    demon_audio: Res<DemonAudio>,
    mut instances: ResMut<Assets<AudioInstance>>,
    demon_query: Query<&Transform, (With<Demon>, Without<Player>)>,
    player_query: Query<&Transform, (With<Player>, Without<Demon>)>,
) {
    let Ok(demon_transform) = demon_query.get_single() else {
        return;
    };
    let Ok(player_transform) = player_query.get_single() else {
        return;
    };

    let distance = demon_transform
        .translation
        .distance(player_transform.translation);

    if let Some(instance) = instances.get_mut(&demon_audio.steps) {
        instance.set_volume(attenuation(distance, STEP_REF_DISTANCE), AudioTween::default());
    }
    if let Some(instance) = instances.get_mut(&demon_audio.growl) {
        instance.set_volume(attenuation(distance, GROWL_REF_DISTANCE), AudioTween::default());
    }
}

/// Inverse-distance rolloff: 1.0 at the source, 0.5 at the reference
/// distance.
fn attenuation(distance: f32, ref_distance: f32) -> f64 {
    (ref_distance / (ref_distance + distance.max(0.0))) as f64
}
