//! Demon definition loading from RON.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::components::{DemonStats, PatrolRoute};
use crate::world::DataLoadError;

/// Path of the demon definition file, relative to the working directory.
const DEMON_DATA_PATH: &str = "assets/data/demon.ron";

/// Demon definition loaded from a RON file.
///
/// Inserted as a resource at startup; the built-in default is used when the
/// file is missing or invalid, so the demo always runs.
#[derive(Resource, Deserialize, Clone, Debug)]
pub struct DemonDefinition {
    pub name: String,
    pub model_path: String,
    pub scale: f32,
    pub spawn_position: [f32; 3],
    pub patrol_points: Vec<[f32; 3]>,
    pub patrol_speed: f32,
    pub chase_speed: f32,
    pub vision_range: f32,
    #[serde(default = "default_waypoint_tolerance")]
    pub waypoint_tolerance: f32,
    pub catch_radius: f32,
    pub step_sound: String,
    pub growl_sound: String,
}

fn default_waypoint_tolerance() -> f32 {
    1.0
}

impl Default for DemonDefinition {
    fn default() -> Self {
        Self {
            name: "Scape Devil".to_string(),
            model_path: "models/demon.glb".to_string(),
            scale: 2.0,
            spawn_position: [10.0, 0.0, 10.0],
            patrol_points: vec![[10.0, 0.0, 10.0], [-10.0, 0.0, -10.0]],
            patrol_speed: 2.0,
            chase_speed: 3.0,
            vision_range: 15.0,
            waypoint_tolerance: 1.0,
            catch_radius: 1.5,
            step_sound: "audio/step-heavy.ogg".to_string(),
            growl_sound: "audio/growl-low.ogg".to_string(),
        }
    }
}

impl DemonDefinition {
    /// Check that the definition can drive the AI.
    pub fn validate(&self) -> Result<(), DataLoadError> {
        if self.patrol_points.is_empty() {
            return Err(DataLoadError::EmptyPatrolRoute {
                demon: self.name.clone(),
            });
        }
        Ok(())
    }

    /// World position the demon spawns (and resets) to.
    pub fn spawn_position(&self) -> Vec3 {
        Vec3::from_array(self.spawn_position)
    }

    /// Build the patrol route component, starting at the first waypoint.
    pub fn patrol_route(&self) -> PatrolRoute {
        PatrolRoute::new(self.patrol_points.iter().map(|p| Vec3::from_array(*p)).collect())
    }

    /// Convert to the DemonStats component.
    pub fn to_stats(&self) -> DemonStats {
        DemonStats {
            patrol_speed: self.patrol_speed,
            chase_speed: self.chase_speed,
            vision_range: self.vision_range,
            waypoint_tolerance: self.waypoint_tolerance,
            catch_radius: self.catch_radius,
        }
    }
}

/// Load the demon definition from assets/data/demon.ron.
///
/// Falls back to the built-in default on any problem, logging why.
pub fn load_demon_definition(mut commands: Commands) {
    let path = Path::new(DEMON_DATA_PATH);

    let definition = if path.exists() {
        match read_definition(path) {
            Ok(definition) => {
                info!("Loaded demon definition: {}", definition.name);
                definition
            }
            Err(e) => {
                error!("{}; using default demon definition", e);
                DemonDefinition::default()
            }
        }
    } else {
        warn!("Demon definition not found at {:?}, using defaults", path);
        DemonDefinition::default()
    };

    commands.insert_resource(definition);
}

fn read_definition(path: &Path) -> Result<DemonDefinition, DataLoadError> {
    let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
        path: path.display().to_string(),
        details: e.to_string(),
    })?;

    let definition: DemonDefinition =
        ron::from_str(&contents).map_err(|e| DataLoadError::ParseError {
            path: path.display().to_string(),
            details: e.to_string(),
        })?;

    definition.validate()?;
    Ok(definition)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_definition_is_valid() {
        let definition = DemonDefinition::default();
        assert!(definition.validate().is_ok());
        assert_eq!(definition.patrol_route().len(), 2);
        assert_eq!(definition.spawn_position(), Vec3::new(10.0, 0.0, 10.0));
    }

    #[test]
    fn parses_ron_definition() {
        let ron_text = r#"(
            name: "Test Devil",
            model_path: "models/test.glb",
            scale: 1.0,
            spawn_position: [0.0, 0.0, 0.0],
            patrol_points: [[1.0, 0.0, 1.0]],
            patrol_speed: 2.5,
            chase_speed: 4.0,
            vision_range: 12.0,
            catch_radius: 1.0,
            step_sound: "audio/step.ogg",
            growl_sound: "audio/growl.ogg",
        )"#;

        let definition: DemonDefinition = ron::from_str(ron_text).unwrap();
        assert_eq!(definition.name, "Test Devil");
        // Omitted field takes the serde default
        assert_eq!(definition.waypoint_tolerance, 1.0);

        let stats = definition.to_stats();
        assert_eq!(stats.chase_speed, 4.0);
        assert_eq!(stats.vision_range, 12.0);
    }

    #[test]
    fn empty_patrol_route_is_rejected() {
        let definition = DemonDefinition {
            patrol_points: Vec::new(),
            ..Default::default()
        };
        assert!(definition.validate().is_err());
    }
}
