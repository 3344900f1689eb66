//! Arena data structures and RON loading.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::error::DataLoadError;

/// Path of the arena definition file, relative to the working directory.
const ARENA_DATA_PATH: &str = "assets/data/arena.ron";

/// A single wall block.
#[derive(Deserialize, Clone, Debug)]
pub struct WallDef {
    /// Center of the wall in world space
    pub position: [f32; 3],
    /// Full extents along each axis
    pub size: [f32; 3],
}

/// Arena definition loaded from a RON file.
///
/// The built-in default is a 200x200 floor, a row of wall blocks along
/// z = -20, and the player starting a few units back from the center.
#[derive(Resource, Deserialize, Clone, Debug)]
pub struct ArenaDefinition {
    /// Side length of the square floor
    pub floor_size: f32,
    pub walls: Vec<WallDef>,
    pub player_spawn: [f32; 3],
    /// Illuminance of the overhead light, in lux
    pub light_illuminance: f32,
}

impl Default for ArenaDefinition {
    fn default() -> Self {
        // Wall blocks every 10 units from x = -50 to x = 50
        let walls = (-5..=5)
            .map(|i| WallDef {
                position: [i as f32 * 10.0, 2.5, -20.0],
                size: [10.0, 5.0, 1.0],
            })
            .collect();

        Self {
            floor_size: 200.0,
            walls,
            player_spawn: [0.0, 1.5, 5.0],
            light_illuminance: 4000.0,
        }
    }
}

impl ArenaDefinition {
    /// Check that the arena can be built.
    pub fn validate(&self) -> Result<(), DataLoadError> {
        if self.floor_size <= 0.0 {
            return Err(DataLoadError::InvalidDimension {
                field: "floor_size",
                value: self.floor_size,
            });
        }
        Ok(())
    }

    /// World position the player spawns (and resets) to.
    pub fn player_spawn(&self) -> Vec3 {
        Vec3::from_array(self.player_spawn)
    }
}

/// Load the arena definition from assets/data/arena.ron.
///
/// Falls back to the built-in default on any problem, logging why.
pub fn load_arena_definition(mut commands: Commands) {
    let path = Path::new(ARENA_DATA_PATH);

    let definition = if path.exists() {
        match read_definition(path) {
            Ok(definition) => {
                info!("Loaded arena definition ({} walls)", definition.walls.len());
                definition
            }
            Err(e) => {
                error!("{}; using default arena", e);
                ArenaDefinition::default()
            }
        }
    } else {
        warn!("Arena definition not found at {:?}, using defaults", path);
        ArenaDefinition::default()
    };

    commands.insert_resource(definition);
}

fn read_definition(path: &Path) -> Result<ArenaDefinition, DataLoadError> {
    let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
        path: path.display().to_string(),
        details: e.to_string(),
    })?;

    let definition: ArenaDefinition =
        ron::from_str(&contents).map_err(|e| DataLoadError::ParseError {
            path: path.display().to_string(),
            details: e.to_string(),
        })?;

    definition.validate()?;
    Ok(definition)
}
