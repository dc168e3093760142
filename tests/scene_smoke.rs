use impulse2d_engine::simulation::WorldCore;

const SCENE: &str = r#"{
    "config": {
        "gravity": { "x": 0.0, "y": 10.0 },
        "fixed_dt": 0.016666668
    },
    "bodies": [
        { "shape": { "kind": "box", "width": 20.0, "height": 2.0 }, "position": [0, 10] },
        { "shape": { "kind": "circle", "radius": 0.5 }, "position": [-2, 0], "mass": 1.0, "restitution": 0.1 },
        { "shape": { "kind": "circle", "radius": 0.5 }, "position": [2, 0], "mass": 1.0, "restitution": 0.1 },
        { "shape": { "kind": "box", "width": 1.0, "height": 1.0 }, "position": [0, 4], "mass": 2.0 },
        { "shape": { "kind": "polygon", "vertices": [[-0.5, 0.4], [0.5, 0.4], [0.0, -0.6]] }, "position": [5, 0], "mass": 1.0 }
    ]
}"#;

#[test]
fn scene_smoke_settles_on_floor() {
    let mut world = WorldCore::new();
    world.load_scene_json(SCENE).expect("scene should parse");
    assert_eq!(world.body_count(), 5);

    // Ten simulated seconds: everything should land on the floor and stay.
    for _ in 0..600 {
        world.step();
    }

    // Floor top is at y = 9. Every dynamic body rests above it, none fell
    // through, none is still moving fast.
    let ids = [2u32, 3, 4, 5];
    for id in ids {
        let (_, y) = world.body_position(id).expect("body still exists");
        assert!(y < 9.0, "body {} sank to y = {}", id, y);
        assert!(y > 0.0, "body {} never fell, y = {}", id, y);
        let (vx, vy) = world.body_velocity(id).unwrap();
        assert!(vx.abs() < 1.0 && vy.abs() < 1.0, "body {} still moving", id);
    }

    // The static floor has not budged.
    assert_eq!(world.body_position(1), Some((0.0, 10.0)));
}

#[test]
fn perf_smoke_step() {
    let mut world = WorldCore::new();
    world.load_scene_json(SCENE).expect("scene should parse");
    world.enable_perf_metrics(true);

    world.step();

    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.body_count(), 5);
}

#[test]
fn driver_tick_advances_like_manual_steps() {
    let mut a = WorldCore::new();
    let mut b = WorldCore::new();
    a.load_scene_json(SCENE).unwrap();
    b.load_scene_json(SCENE).unwrap();

    // Three whole steps via the driver vs. three manual steps.
    let steps = a.tick(3.0 * 0.016666668 + 1e-4);
    assert_eq!(steps, 3);
    for _ in 0..3 {
        b.step();
    }

    for id in 1..=5u32 {
        assert_eq!(a.body_position(id), b.body_position(id));
        assert_eq!(a.body_velocity(id), b.body_velocity(id));
    }
}
