//! Global events used for cross-system communication.
//!
//! Events allow decoupled systems to communicate. The demon AI sends a
//! PlayerCaughtEvent when it closes on the player, and the core plugin
//! receives it to end the session. This keeps systems independent and
//! testable.

use bevy::prelude::*;

/// Sent once when the demon entity has been spawned with all of its assets
/// attached.
///
/// The AI never runs against a partially-initialized demon: until this
/// event fires there is no demon entity at all, and the AI systems simply
/// find an empty query.
#[derive(Event)]
pub struct DemonReadyEvent {
    /// The freshly spawned demon entity
    pub demon: Entity,
}

/// Sent when the chasing demon closes within catch radius of the player.
///
/// This is the terminal signal of a session. The core plugin listens for it
/// and schedules a full session reset at the end of the frame.
#[derive(Event)]
pub struct PlayerCaughtEvent {
    /// The demon that caught the player
    pub demon: Entity,
    /// Distance between demon and player when the catch triggered
    pub distance: f32,
}
