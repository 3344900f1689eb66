//! Core plugin that sets up game states, events, and the session lifecycle.

use bevy::prelude::*;

use super::events::*;
use super::states::*;
use crate::demon::{Demon, DemonDefinition, DemonState, PatrolRoute};
use crate::player::{MovementState, Player};
use crate::world::ArenaDefinition;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, InGame, Caught)
/// - Global events (DemonReadyEvent, PlayerCaughtEvent)
/// - The caught/reset session flow
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()

            // Register global events
            .add_event::<DemonReadyEvent>()
            .add_event::<PlayerCaughtEvent>()

            // Loading state - data files are read in Startup systems, so by
            // the time the first state transition runs we can start playing
            .add_systems(OnEnter(GameState::Loading), transition_to_in_game)

            // React to the terminal signal at the end of the frame's update
            .add_systems(
                Update,
                handle_player_caught.run_if(in_state(GameState::InGame)),
            )

            // Caught: notify, reset everything, resume play
            .add_systems(
                OnEnter(GameState::Caught),
                (reset_session, resume_session).chain(),
            );
    }
}

/// Transition from Loading into gameplay.
///
/// Data files are loaded in Startup systems and the demon's model arrives
/// asynchronously later, so there is nothing to wait for here.
fn transition_to_in_game(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::InGame);
}

/// End the session when the demon catches the player.
///
/// The AI only sends the event; the actual reset happens through the state
/// transition at the frame boundary, so the demon is never left in a
/// half-updated state.
fn handle_player_caught(
    mut caught_events: EventReader<PlayerCaughtEvent>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for event in caught_events.read() {
        info!(
            "You were caught by the Scape Devil! (distance {:.2})",
            event.distance
        );
        next_state.set(GameState::Caught);
    }
}

/// Reset all mutable session state to its initial values.
///
/// Deterministic replacement for a full restart: the player returns to the
/// arena spawn, the demon returns to its spawn with patrol index 0 and
/// state Patrolling. Safe to call while the demon has not spawned yet.
pub fn reset_session(
    arena: Res<ArenaDefinition>,
    definition: Res<DemonDefinition>,
    mut demon_query: Query<
        (&mut Transform, &mut DemonState, &mut PatrolRoute),
        (With<Demon>, Without<Player>),
    >,
    mut player_query: Query<(&mut Transform, &mut MovementState), (With<Player>, Without<Demon>)>,
) {
    if let Ok((mut transform, mut state, mut route)) = demon_query.get_single_mut() {
        transform.translation = definition.spawn_position();
        transform.rotation = Quat::IDENTITY;
        *state = DemonState::Patrolling;
        route.reset();
    }

    if let Ok((mut transform, mut movement_state)) = player_query.get_single_mut() {
        transform.translation = arena.player_spawn();
        transform.rotation = Quat::IDENTITY;
        movement_state.vertical_velocity = 0.0;
    }
}

/// Return to gameplay after the reset.
fn resume_session(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::InGame);
}
