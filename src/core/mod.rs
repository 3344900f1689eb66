//! Core module - game states, global events, and session lifecycle.

mod events;
mod plugin;
mod states;

pub use events::*;
pub use plugin::{reset_session, CorePlugin};
pub use states::GameState;
