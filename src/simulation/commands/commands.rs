use crate::core::Vec2;
use crate::domain::{RigidBody, Shape};

use super::{step, WorldCore};

/// Register a pre-built body and hand out its ID.
pub(super) fn insert_body(world: &mut WorldCore, mut body: RigidBody) -> u32 {
    let id = world.next_id;
    world.next_id += 1;
    body.id = id;
    world.bodies.push(body);
    id
}

fn spawn(world: &mut WorldCore, position: Vec2, shape: Shape, mass: f32) -> Result<u32, String> {
    let body = RigidBody::new(position, shape, mass)?;
    let id = insert_body(world, body);
    step::refresh_state(world);
    Ok(id)
}

pub(super) fn spawn_circle(
    world: &mut WorldCore,
    x: f32,
    y: f32,
    radius: f32,
    mass: f32,
) -> Result<u32, String> {
    spawn(world, Vec2::new(x, y), Shape::Circle { radius }, mass)
}

pub(super) fn spawn_box(
    world: &mut WorldCore,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    mass: f32,
) -> Result<u32, String> {
    spawn(world, Vec2::new(x, y), Shape::new_box(width, height), mass)
}

pub(super) fn spawn_polygon(
    world: &mut WorldCore,
    x: f32,
    y: f32,
    vertices: &[f32],
    mass: f32,
) -> Result<u32, String> {
    if vertices.len() % 2 != 0 {
        return Err(format!(
            "polygon vertices must be [x0, y0, x1, y1, ...], got {} floats",
            vertices.len()
        ));
    }
    let vertices = vertices
        .chunks_exact(2)
        .map(|v| Vec2::new(v[0], v[1]))
        .collect();
    spawn(world, Vec2::new(x, y), Shape::Polygon { vertices }, mass)
}

pub(super) fn remove_body(world: &mut WorldCore, id: u32) -> bool {
    let Some(index) = index_of(world, id) else {
        return false;
    };
    // Plain remove, not swap_remove: body order feeds the broad-phase pair
    // order and must stay stable for determinism.
    world.bodies.remove(index);
    step::refresh_state(world);
    true
}

pub(super) fn clear(world: &mut WorldCore) {
    world.bodies.clear();
    world.state.clear();
    world.accumulator = 0.0;
}

pub(super) fn set_body_velocity(
    world: &mut WorldCore,
    id: u32,
    vx: f32,
    vy: f32,
) -> Result<(), String> {
    let body = body_mut(world, id)?;
    body.velocity = Vec2::new(vx, vy);
    step::refresh_state(world);
    Ok(())
}

pub(super) fn apply_force(world: &mut WorldCore, id: u32, fx: f32, fy: f32) -> Result<(), String> {
    body_mut(world, id)?.apply_force(Vec2::new(fx, fy));
    Ok(())
}

pub(super) fn apply_impulse(world: &mut WorldCore, id: u32, ix: f32, iy: f32) -> Result<(), String> {
    body_mut(world, id)?.apply_impulse(Vec2::new(ix, iy));
    step::refresh_state(world);
    Ok(())
}

pub(super) fn set_restitution(world: &mut WorldCore, id: u32, restitution: f32) -> Result<(), String> {
    body_mut(world, id)?.set_restitution(restitution);
    Ok(())
}

pub(super) fn set_friction(
    world: &mut WorldCore,
    id: u32,
    static_friction: f32,
    dynamic_friction: f32,
) -> Result<(), String> {
    body_mut(world, id)?.set_friction(static_friction, dynamic_friction);
    Ok(())
}

pub(super) fn body_position(world: &WorldCore, id: u32) -> Option<(f32, f32)> {
    body_ref(world, id).map(|b| (b.position.x, b.position.y))
}

pub(super) fn body_velocity(world: &WorldCore, id: u32) -> Option<(f32, f32)> {
    body_ref(world, id).map(|b| (b.velocity.x, b.velocity.y))
}

pub(super) fn body_angle(world: &WorldCore, id: u32) -> Option<f32> {
    body_ref(world, id).map(|b| b.angle)
}

pub(super) fn body_angular_velocity(world: &WorldCore, id: u32) -> Option<f32> {
    body_ref(world, id).map(|b| b.angular_velocity)
}

fn index_of(world: &WorldCore, id: u32) -> Option<usize> {
    world.bodies.iter().position(|b| b.id == id)
}

fn body_ref(world: &WorldCore, id: u32) -> Option<&RigidBody> {
    world.bodies.iter().find(|b| b.id == id)
}

fn body_mut(world: &mut WorldCore, id: u32) -> Result<&mut RigidBody, String> {
    world
        .bodies
        .iter_mut()
        .find(|b| b.id == id)
        .ok_or_else(|| format!("unknown body id {}", id))
}
