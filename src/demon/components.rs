//! Demon-related components.

use bevy::prelude::*;

/// Marker component for the demon.
#[derive(Component)]
pub struct Demon;

/// Two-state behavior machine for the demon.
///
/// The transition is a one-way latch: once the demon spots the player it
/// chases for the rest of the session and never returns to patrolling.
#[derive(Component, Default, PartialEq, Eq, Clone, Copy, Debug)]
pub enum DemonState {
    /// Walking its waypoint route, unaware of the player.
    #[default]
    Patrolling,
    /// Moving straight toward the player.
    Chasing,
}

impl DemonState {
    /// Latch into Chasing. Idempotent; there is no way back.
    pub fn alert(&mut self) {
        *self = DemonState::Chasing;
    }
}

/// Cyclic waypoint route the demon walks while patrolling.
///
/// The route must hold at least one waypoint (validated when loading the
/// demon definition). A single waypoint is an allowed degenerate case: the
/// demon stands at it, facing it.
#[derive(Component, Clone, Debug)]
pub struct PatrolRoute {
    points: Vec<Vec3>,
    current: usize,
}

impl PatrolRoute {
    /// Build a route from an ordered waypoint list, starting at index 0.
    pub fn new(points: Vec<Vec3>) -> Self {
        debug_assert!(!points.is_empty(), "patrol route needs at least one waypoint");
        Self { points, current: 0 }
    }

    /// The waypoint the demon is currently walking toward.
    pub fn target(&self) -> Vec3 {
        self.points[self.current]
    }

    /// Advance to the next waypoint, wrapping back to the first.
    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.points.len();
    }

    /// Restart the route from its first waypoint.
    pub fn reset(&mut self) {
        self.current = 0;
    }

    /// Index of the current waypoint. Always within bounds.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of waypoints on the route.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Tuning values for the demon's behavior, loaded from the RON definition.
#[derive(Component, Clone, Debug)]
pub struct DemonStats {
    /// Movement speed while patrolling, units per second
    pub patrol_speed: f32,
    /// Movement speed while chasing, units per second
    pub chase_speed: f32,
    /// Distance below which the demon spots the player (exclusive)
    pub vision_range: f32,
    /// Distance below which a waypoint counts as reached
    pub waypoint_tolerance: f32,
    /// Distance below which a chasing demon catches the player
    pub catch_radius: f32,
}

impl Default for DemonStats {
    fn default() -> Self {
        Self {
            patrol_speed: 2.0,
            chase_speed: 3.0,
            vision_range: 15.0,
            waypoint_tolerance: 1.0,
            catch_radius: 1.5,
        }
    }
}
