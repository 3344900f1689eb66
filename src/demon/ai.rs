//! Demon AI behavior systems.
//!
//! Runs once per frame as a fixed chain: vision check, movement for the
//! active state, then orientation. A state change from the vision check
//! takes effect in the same frame's movement.

use bevy::prelude::*;

use super::components::{Demon, DemonState, DemonStats, PatrolRoute};
use crate::core::PlayerCaughtEvent;
use crate::player::Player;

/// Spot the player and latch from Patrolling into Chasing.
///
/// Uses full Euclidean distance with a strict `<` comparison, so a player
/// at exactly vision range is not seen. Once chasing, the demon never
/// disengages for the rest of the session.
pub fn demon_vision(
    player_query: Query<&Transform, (With<Player>, Without<Demon>)>,
    mut demon_query: Query<(&Transform, &DemonStats, &mut DemonState), (With<Demon>, Without<Player>)>,
) {
    let Ok(player_transform) = player_query.get_single() else {
        return;
    };
    let Ok((demon_transform, stats, mut state)) = demon_query.get_single_mut() else {
        return;
    };

    // Already latched; nothing to decide
    if *state == DemonState::Chasing {
        return;
    }

    let distance = demon_transform
        .translation
        .distance(player_transform.translation);

    if distance < stats.vision_range {
        state.alert();
    }
}

/// Walk the patrol route.
///
/// Moves toward the current waypoint at patrol speed and advances the route
/// index when the pre-movement distance drops below the waypoint tolerance.
/// A waypoint coincident with the demon yields zero displacement for the
/// frame rather than a NaN direction.
pub fn demon_patrol(
    time: Res<Time>,
    mut demon_query: Query<(&mut Transform, &DemonStats, &DemonState, &mut PatrolRoute), With<Demon>>,
) {
    let Ok((mut transform, stats, state, mut route)) = demon_query.get_single_mut() else {
        return;
    };

    if *state != DemonState::Patrolling {
        return;
    }

    let target = route.target();
    let to_target = target - transform.translation;
    let distance = to_target.length();

    let direction = to_target.normalize_or_zero();
    transform.translation += direction * stats.patrol_speed * time.delta_secs();

    if distance < stats.waypoint_tolerance {
        route.advance();
    }
}

/// Run straight at the player, and signal the catch.
///
/// The caught check compares the distance measured before this frame's
/// movement, so an overshooting step does not trigger it.
pub fn demon_chase(
    time: Res<Time>,
    mut caught_events: EventWriter<PlayerCaughtEvent>,
    player_query: Query<&Transform, (With<Player>, Without<Demon>)>,
    mut demon_query: Query<
        (Entity, &mut Transform, &DemonStats, &DemonState),
        (With<Demon>, Without<Player>),
    >,
) {
    let Ok(player_transform) = player_query.get_single() else {
        return;
    };
    let Ok((entity, mut transform, stats, state)) = demon_query.get_single_mut() else {
        return;
    };

    if *state != DemonState::Chasing {
        return;
    }

    let to_player = player_transform.translation - transform.translation;
    let distance = to_player.length();

    let direction = to_player.normalize_or_zero();
    transform.translation += direction * stats.chase_speed * time.delta_secs();

    if distance < stats.catch_radius {
        caught_events.send(PlayerCaughtEvent {
            demon: entity,
            distance,
        });
    }
}

/// Face the player while chasing, the current waypoint while patrolling.
///
/// Recomputed from current positions every frame; skipped when the look
/// target coincides with the demon, where a look direction is undefined.
pub fn demon_orientation(
    player_query: Query<&Transform, (With<Player>, Without<Demon>)>,
    mut demon_query: Query<(&mut Transform, &DemonState, &PatrolRoute), (With<Demon>, Without<Player>)>,
) {
    let Ok(player_transform) = player_query.get_single() else {
        return;
    };
    let Ok((mut transform, state, route)) = demon_query.get_single_mut() else {
        return;
    };

    let target = match state {
        DemonState::Chasing => player_transform.translation,
        DemonState::Patrolling => route.target(),
    };

    if target.distance_squared(transform.translation) > f32::EPSILON {
        transform.look_at(target, Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_app() -> App {
        let mut app = App::new();
        app.init_resource::<Time>();
        app.add_event::<PlayerCaughtEvent>();
        app.add_systems(
            Update,
            (demon_vision, demon_patrol, demon_chase, demon_orientation).chain(),
        );
        app
    }

    fn spawn_player(app: &mut App, position: Vec3) -> Entity {
        app.world_mut()
            .spawn((Player, Transform::from_translation(position)))
            .id()
    }

    fn spawn_demon(app: &mut App, position: Vec3, state: DemonState, route: Vec<Vec3>) -> Entity {
        app.world_mut()
            .spawn((
                Demon,
                state,
                PatrolRoute::new(route),
                DemonStats::default(),
                Transform::from_translation(position),
            ))
            .id()
    }

    /// Advance the clock by `secs` and run one frame.
    fn tick(app: &mut App, secs: f32) {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(secs));
        app.update();
    }

    fn translation(app: &App, entity: Entity) -> Vec3 {
        app.world().entity(entity).get::<Transform>().unwrap().translation
    }

    fn state(app: &App, entity: Entity) -> DemonState {
        *app.world().entity(entity).get::<DemonState>().unwrap()
    }

    fn caught_count(app: &App) -> usize {
        app.world().resource::<Events<PlayerCaughtEvent>>().len()
    }

    #[test]
    fn absent_demon_is_a_no_op() {
        let mut app = test_app();
        let player = spawn_player(&mut app, Vec3::new(0.0, 2.0, 5.0));

        tick(&mut app, 0.5);

        assert_eq!(translation(&app, player), Vec3::new(0.0, 2.0, 5.0));
        assert_eq!(caught_count(&app), 0);
    }

    #[test]
    fn patrol_moves_toward_current_waypoint() {
        // Scenario A: one 0.5s frame at patrol speed 2 covers 1 unit toward
        // the far corner.
        let mut app = test_app();
        spawn_player(&mut app, Vec3::new(0.0, 2.0, 50.0));
        let demon = spawn_demon(
            &mut app,
            Vec3::new(10.0, 0.0, 10.0),
            DemonState::Patrolling,
            vec![Vec3::new(-10.0, 0.0, -10.0), Vec3::new(10.0, 0.0, 10.0)],
        );

        tick(&mut app, 0.5);

        let expected = Vec3::new(10.0, 0.0, 10.0)
            + (Vec3::new(-10.0, 0.0, -10.0) - Vec3::new(10.0, 0.0, 10.0)).normalize() * 1.0;
        let actual = translation(&app, demon);
        assert!(actual.distance(expected) < 1e-4, "got {actual:?}, expected {expected:?}");
        assert!(actual.distance(Vec3::new(9.293, 0.0, 9.293)) < 1e-3);
        assert_eq!(state(&app, demon), DemonState::Patrolling);
    }

    #[test]
    fn coincident_waypoint_gives_zero_displacement_and_advances() {
        let mut app = test_app();
        spawn_player(&mut app, Vec3::new(0.0, 2.0, 50.0));
        let demon = spawn_demon(
            &mut app,
            Vec3::new(10.0, 0.0, 10.0),
            DemonState::Patrolling,
            vec![Vec3::new(10.0, 0.0, 10.0), Vec3::new(-10.0, 0.0, -10.0)],
        );

        tick(&mut app, 0.5);

        // No movement this frame (degenerate direction), but the route
        // advances to the far corner.
        assert_eq!(translation(&app, demon), Vec3::new(10.0, 0.0, 10.0));
        let route = app.world().entity(demon).get::<PatrolRoute>().unwrap();
        assert_eq!(route.current_index(), 1);
    }

    #[test]
    fn waypoint_advance_requires_tolerance() {
        let mut app = test_app();
        spawn_player(&mut app, Vec3::new(0.0, 2.0, 50.0));
        let demon = spawn_demon(
            &mut app,
            Vec3::new(2.0, 0.0, 0.0),
            DemonState::Patrolling,
            vec![Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0)],
        );

        // Two units out: not reached yet
        tick(&mut app, 0.1);
        let route = app.world().entity(demon).get::<PatrolRoute>().unwrap();
        assert_eq!(route.current_index(), 0);

        // Teleport within tolerance; the next frame advances exactly once
        app.world_mut()
            .entity_mut(demon)
            .get_mut::<Transform>()
            .unwrap()
            .translation = Vec3::new(0.5, 0.0, 0.0);
        tick(&mut app, 0.1);
        let route = app.world().entity(demon).get::<PatrolRoute>().unwrap();
        assert_eq!(route.current_index(), 1);
    }

    #[test]
    fn vision_boundary_is_exclusive() {
        let mut app = test_app();
        let player = spawn_player(&mut app, Vec3::new(15.0, 0.0, 0.0));
        let demon = spawn_demon(&mut app, Vec3::ZERO, DemonState::Patrolling, vec![Vec3::ZERO]);

        // Exactly at vision range: not seen
        tick(&mut app, 0.0);
        assert_eq!(state(&app, demon), DemonState::Patrolling);

        // Just inside: seen
        app.world_mut()
            .entity_mut(player)
            .get_mut::<Transform>()
            .unwrap()
            .translation = Vec3::new(14.9, 0.0, 0.0);
        tick(&mut app, 0.0);
        assert_eq!(state(&app, demon), DemonState::Chasing);
    }

    #[test]
    fn chase_latch_never_reverts() {
        let mut app = test_app();
        let player = spawn_player(&mut app, Vec3::new(10.0, 0.0, 0.0));
        let demon = spawn_demon(&mut app, Vec3::ZERO, DemonState::Patrolling, vec![Vec3::ZERO]);

        tick(&mut app, 0.0);
        assert_eq!(state(&app, demon), DemonState::Chasing);

        // Player escapes far outside vision range; the demon keeps chasing
        app.world_mut()
            .entity_mut(player)
            .get_mut::<Transform>()
            .unwrap()
            .translation = Vec3::new(500.0, 0.0, 500.0);
        for _ in 0..4 {
            tick(&mut app, 0.1);
            assert_eq!(state(&app, demon), DemonState::Chasing);
        }
    }

    #[test]
    fn detection_and_chase_happen_in_the_same_frame() {
        // Scenario B: the patrol target pulls -X, the player stands +X just
        // inside vision range. The same frame that detects the player must
        // already move along the chase branch.
        let mut app = test_app();
        spawn_player(&mut app, Vec3::new(14.9, 0.0, 0.0));
        let demon = spawn_demon(
            &mut app,
            Vec3::ZERO,
            DemonState::Patrolling,
            vec![Vec3::new(-100.0, 0.0, 0.0)],
        );

        tick(&mut app, 0.5);

        assert_eq!(state(&app, demon), DemonState::Chasing);
        let position = translation(&app, demon);
        // Chase speed 3 for 0.5s, toward +X
        assert!((position.x - 1.5).abs() < 1e-4, "got {position:?}");
        assert_eq!(position.z, 0.0);
    }

    #[test]
    fn catching_the_player_fires_the_terminal_signal_once() {
        // Scenario C
        let mut app = test_app();
        spawn_player(&mut app, Vec3::new(1.2, 0.0, 0.0));
        spawn_demon(&mut app, Vec3::ZERO, DemonState::Chasing, vec![Vec3::ZERO]);

        tick(&mut app, 0.01);

        assert_eq!(caught_count(&app), 1);
    }

    #[test]
    fn caught_uses_pre_movement_distance() {
        // Starting 1.6 out with a large step overshoots past the player,
        // but the pre-movement distance was outside catch radius, so no
        // signal this frame.
        let mut app = test_app();
        spawn_player(&mut app, Vec3::new(1.6, 0.0, 0.0));
        spawn_demon(&mut app, Vec3::ZERO, DemonState::Chasing, vec![Vec3::ZERO]);

        tick(&mut app, 1.0);

        assert_eq!(caught_count(&app), 0);
    }

    #[test]
    fn chasing_demon_faces_the_player() {
        let mut app = test_app();
        spawn_player(&mut app, Vec3::new(10.0, 0.0, 0.0));
        let demon = spawn_demon(&mut app, Vec3::ZERO, DemonState::Chasing, vec![Vec3::ZERO]);

        tick(&mut app, 0.1);

        let transform = app.world().entity(demon).get::<Transform>().unwrap();
        let to_player = (Vec3::new(10.0, 0.0, 0.0) - transform.translation).normalize();
        assert!(transform.forward().dot(to_player) > 0.99);
    }

    #[test]
    fn patrolling_demon_faces_its_waypoint() {
        let mut app = test_app();
        spawn_player(&mut app, Vec3::new(0.0, 2.0, 50.0));
        let demon = spawn_demon(
            &mut app,
            Vec3::ZERO,
            DemonState::Patrolling,
            vec![Vec3::new(-8.0, 0.0, 0.0)],
        );

        tick(&mut app, 0.1);

        let transform = app.world().entity(demon).get::<Transform>().unwrap();
        let to_waypoint = (Vec3::new(-8.0, 0.0, 0.0) - transform.translation).normalize();
        assert!(transform.forward().dot(to_waypoint) > 0.99);
    }
}
