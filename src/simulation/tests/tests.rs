use super::*;

fn world_with_gravity(x: f32, y: f32) -> WorldCore {
    let mut world = WorldCore::new();
    world.set_gravity(x, y);
    world
}

#[test]
fn free_fall_matches_closed_form() {
    let mut world = world_with_gravity(0.0, 10.0);
    world.set_fixed_dt(0.01).unwrap();
    let id = world.spawn_circle(0.0, 0.0, 0.5, 1.0).unwrap();

    for _ in 0..10 {
        world.step();
    }

    // Semi-implicit Euler: v_n = n g dt, y_n = g dt^2 (1 + 2 + ... + n).
    let (_, vy) = world.body_velocity(id).unwrap();
    let (_, y) = world.body_position(id).unwrap();
    assert!((vy - 1.0).abs() < 1e-4);
    assert!((y - 10.0 * 0.01 * 0.01 * 55.0).abs() < 1e-4);
}

#[test]
fn static_body_ignores_gravity_and_forces() {
    let mut world = world_with_gravity(0.0, 10.0);
    let id = world.spawn_box(2.0, 3.0, 4.0, 1.0, 0.0).unwrap();
    world.apply_force(id, 100.0, 100.0).unwrap();

    for _ in 0..60 {
        world.step();
    }

    assert_eq!(world.body_position(id), Some((2.0, 3.0)));
    assert_eq!(world.body_velocity(id), Some((0.0, 0.0)));
}

#[test]
fn zero_dt_step_is_identity() {
    let mut world = world_with_gravity(0.0, 10.0);
    let id = world.spawn_circle(1.0, 2.0, 0.5, 1.0).unwrap();
    world.set_body_velocity(id, 3.0, 4.0).unwrap();
    world.config.fixed_dt = 0.0;

    world.step();

    assert_eq!(world.body_position(id), Some((1.0, 2.0)));
    assert_eq!(world.body_velocity(id), Some((3.0, 4.0)));
    assert_eq!(world.frame(), 0);
}

#[test]
fn tick_runs_whole_steps_and_banks_remainder() {
    let mut world = world_with_gravity(0.0, 0.0);

    // 0.035 s at 60 Hz holds two whole steps plus a remainder.
    let steps = world.tick(0.035);
    assert_eq!(steps, 2);
    assert!(world.accumulator > 0.0);
    assert!(world.accumulator < world.config.fixed_dt);
    assert_eq!(world.frame(), 2);

    assert_eq!(world.tick(0.0), 0);
    assert_eq!(world.tick(f32::NAN), 0);
}

#[test]
fn tick_caps_catch_up_and_drops_backlog() {
    let mut world = world_with_gravity(0.0, 0.0);

    // A one-second stall would owe 60 steps; the cap wins.
    let steps = world.tick(1.0);
    assert_eq!(steps, world.config.max_steps_per_tick);
    assert!(world.accumulator < world.config.fixed_dt);
}

#[test]
fn ball_comes_to_rest_on_static_floor() {
    let mut world = world_with_gravity(0.0, 10.0);
    world.spawn_box(0.0, 5.0, 10.0, 1.0, 0.0).unwrap();
    let ball = world.spawn_circle(0.0, 3.0, 0.5, 1.0).unwrap();
    world.set_restitution(ball, 0.0).unwrap();

    for _ in 0..300 {
        world.step();
    }

    // Floor top is at y = 4.5, so the ball center settles near 4.0.
    let (_, y) = world.body_position(ball).unwrap();
    let (_, vy) = world.body_velocity(ball).unwrap();
    assert!((y - 4.0).abs() < 0.05, "ball rests at y = {}", y);
    assert!(vy.abs() < 0.25, "residual velocity {}", vy);
}

#[test]
fn head_on_elastic_collision_through_full_steps() {
    let mut world = world_with_gravity(0.0, 0.0);
    let a = world.spawn_circle(0.0, 0.0, 0.5, 1.0).unwrap();
    let b = world.spawn_circle(3.0, 0.0, 0.5, 1.0).unwrap();
    for id in [a, b] {
        world.set_restitution(id, 1.0).unwrap();
        world.set_friction(id, 0.0, 0.0).unwrap();
    }
    world.set_body_velocity(a, 1.0, 0.0).unwrap();
    world.set_body_velocity(b, -1.0, 0.0).unwrap();

    for _ in 0..120 {
        world.step();
    }

    let (vax, _) = world.body_velocity(a).unwrap();
    let (vbx, _) = world.body_velocity(b).unwrap();
    assert!((vax + 1.0).abs() < 0.05, "a bounced back, vx = {}", vax);
    assert!((vbx - 1.0).abs() < 0.05, "b bounced back, vx = {}", vbx);
}

#[test]
fn state_buffer_tracks_spawn_and_remove() {
    let mut world = world_with_gravity(0.0, 0.0);
    let a = world.spawn_circle(1.0, 2.0, 0.5, 1.0).unwrap();
    let b = world.spawn_circle(5.0, 6.0, 0.5, 1.0).unwrap();
    assert_eq!(world.state_len(), 2 * STATE_STRIDE);

    // First body's lanes: x, y, angle, vx, vy, angular velocity.
    assert_eq!(world.state[0], 1.0);
    assert_eq!(world.state[1], 2.0);

    assert!(world.remove_body(a));
    assert_eq!(world.state_len(), STATE_STRIDE);
    assert_eq!(world.state[0], 5.0);

    // IDs are never reused.
    assert!(!world.remove_body(a));
    assert!(world.body_position(b).is_some());
    let c = world.spawn_circle(0.0, 0.0, 0.5, 1.0).unwrap();
    assert!(c > b);
}

#[test]
fn velocity_mutators_refresh_state_buffer() {
    let mut world = world_with_gravity(0.0, 0.0);
    let id = world.spawn_circle(1.0, 2.0, 0.5, 1.0).unwrap();

    // Velocity lanes must be current immediately, not only after a step.
    world.set_body_velocity(id, 3.0, 4.0).unwrap();
    assert_eq!(world.state[3], 3.0);
    assert_eq!(world.state[4], 4.0);

    world.apply_impulse(id, 1.0, 0.0).unwrap();
    assert_eq!(world.state[3], 4.0);
    assert_eq!(world.state[4], 4.0);
}

#[test]
fn unknown_body_id_is_an_error() {
    let mut world = WorldCore::new();
    assert!(world.set_body_velocity(42, 1.0, 0.0).is_err());
    assert!(world.apply_impulse(42, 1.0, 0.0).is_err());
    assert!(!world.remove_body(42));
    assert_eq!(world.body_position(42), None);
}

#[test]
fn load_scene_replaces_config_and_bodies() {
    let mut world = WorldCore::new();
    world.spawn_circle(9.0, 9.0, 1.0, 1.0).unwrap();

    let json = r#"{
        "config": { "gravity": { "x": 0.0, "y": -1.0 } },
        "bodies": [
            { "shape": { "kind": "circle", "radius": 0.5 }, "position": [0, 0], "mass": 1.0 },
            { "shape": { "kind": "box", "width": 4.0, "height": 1.0 }, "position": [0, 5] }
        ]
    }"#;
    world.load_scene_json(json).unwrap();

    assert_eq!(world.body_count(), 2);
    assert_eq!(world.state_len(), 2 * STATE_STRIDE);
    assert!((world.config.gravity.y + 1.0).abs() < 1e-6);
}

#[test]
fn malformed_scene_leaves_world_untouched() {
    let mut world = WorldCore::new();
    world.spawn_circle(1.0, 1.0, 1.0, 1.0).unwrap();

    let json = r#"{
        "bodies": [
            { "shape": { "kind": "polygon", "vertices": [[0,0],[1,0]] }, "position": [0, 0] }
        ]
    }"#;
    assert!(world.load_scene_json(json).is_err());
    assert_eq!(world.body_count(), 1);
}

#[test]
fn perf_stats_populate_when_enabled() {
    let mut world = world_with_gravity(0.0, 10.0);
    world.spawn_circle(0.0, 0.0, 0.5, 1.0).unwrap();
    world.spawn_circle(0.4, 0.0, 0.5, 1.0).unwrap();

    world.step();
    assert_eq!(world.get_perf_stats().body_count(), 0);

    world.enable_perf_metrics(true);
    world.step();
    let stats = world.get_perf_stats();
    assert_eq!(stats.body_count(), 2);
    assert_eq!(stats.candidate_pairs(), 1);
    assert_eq!(stats.manifold_count(), 1);
}
