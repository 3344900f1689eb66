//! Demon module - the patrolling enemy, its AI, spawning, and audio.

mod ai;
mod audio;
mod components;
mod data;
mod plugin;
mod spawning;

pub use components::*;
pub use data::DemonDefinition;
pub use plugin::DemonPlugin;
