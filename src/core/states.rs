//! Game state definitions that control the overall flow of the session.
//!
//! States determine which systems run at any given time. The demon AI and
//! player movement only run in the InGame state.

use bevy::prelude::*;

/// Main game states - controls overall session flow.
///
/// The session moves through these states:
/// - Start in `Loading` while data files are read and the demon's assets
///   are requested
/// - Move to `InGame` once the arena can be built
/// - Enter `Caught` for exactly one transition when the demon reaches the
///   player; the session is reset there and play resumes in `InGame`
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading data files
    #[default]
    Loading,
    /// Active gameplay
    InGame,
    /// The demon caught the player; the session resets from here
    Caught,
}
