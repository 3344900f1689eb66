//! World module - the arena the chase happens in.

mod data;
mod error;
mod plugin;
mod spawning;

pub use data::{ArenaDefinition, WallDef};
pub use error::DataLoadError;
pub use plugin::WorldPlugin;
