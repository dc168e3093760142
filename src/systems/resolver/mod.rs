//! Impulse-based contact resolution.
//!
//! Full rotational variant: the impulse denominator carries the
//! perpendicular-distance/inertia terms and impulses are applied at the
//! manifold contact point, so offset contacts spin bodies. Friction is a
//! Coulomb impulse along the tangent with the usual static/dynamic switch.

use crate::core::Vec2;
use crate::domain::RigidBody;

use super::narrowphase::Manifold;

mod correction;

pub use correction::positional_correction;

/// Resolve one manifold: velocity impulses only, positions are handled by
/// `positional_correction` afterwards.
///
/// Static-static pairs never reach this function - the broad phase filters
/// them - so the impulse denominator cannot be zero for valid input.
pub fn resolve(bodies: &mut [RigidBody], manifold: &Manifold) {
    let (a, b) = pair_mut(bodies, manifold.a, manifold.b);
    debug_assert!(a.inv_mass + b.inv_mass > 0.0);

    let normal = manifold.normal;
    let r_a = manifold.contact - a.position;
    let r_b = manifold.contact - b.position;

    let rel_vel = b.velocity_at(manifold.contact) - a.velocity_at(manifold.contact);
    let vel_along_normal = rel_vel.dot(normal);

    // Already separating: applying an impulse here would glue the bodies
    // together. Not an error, just nothing to do.
    if vel_along_normal > 0.0 {
        return;
    }

    let ra_cross_n = r_a.cross(normal);
    let rb_cross_n = r_b.cross(normal);
    let inv_mass_sum = a.inv_mass
        + b.inv_mass
        + ra_cross_n * ra_cross_n * a.inv_inertia
        + rb_cross_n * rb_cross_n * b.inv_inertia;
    if inv_mass_sum <= 0.0 {
        return;
    }

    // min() so one very bouncy body cannot add energy to the pair.
    let e = a.restitution.min(b.restitution);
    let j = -(1.0 + e) * vel_along_normal / inv_mass_sum;

    let impulse = normal * j;
    a.apply_impulse_at(-impulse, r_a);
    b.apply_impulse_at(impulse, r_b);

    apply_friction(a, b, manifold, r_a, r_b, j);
}

/// Coulomb friction along the contact tangent.
///
/// Below the static threshold the tangential impulse cancels sliding
/// entirely; above it the body slides and the impulse is clamped to the
/// dynamic cone.
fn apply_friction(
    a: &mut RigidBody,
    b: &mut RigidBody,
    manifold: &Manifold,
    r_a: Vec2,
    r_b: Vec2,
    j: f32,
) {
    // Recompute with post-impulse velocities.
    let rel_vel = b.velocity_at(manifold.contact) - a.velocity_at(manifold.contact);
    let tangent = (rel_vel - manifold.normal * rel_vel.dot(manifold.normal)).normalize();
    if tangent == Vec2::zero() {
        return;
    }

    let ra_cross_t = r_a.cross(tangent);
    let rb_cross_t = r_b.cross(tangent);
    let inv_mass_sum = a.inv_mass
        + b.inv_mass
        + ra_cross_t * ra_cross_t * a.inv_inertia
        + rb_cross_t * rb_cross_t * b.inv_inertia;
    if inv_mass_sum <= 0.0 {
        return;
    }

    let jt = -rel_vel.dot(tangent) / inv_mass_sum;

    let static_friction = (a.static_friction + b.static_friction) * 0.5;
    let dynamic_friction = (a.dynamic_friction + b.dynamic_friction) * 0.5;

    let friction_impulse = if jt.abs() <= j * static_friction {
        tangent * jt
    } else {
        tangent * (jt.signum() * j * dynamic_friction)
    };

    a.apply_impulse_at(-friction_impulse, r_a);
    b.apply_impulse_at(friction_impulse, r_b);
}

/// Two disjoint mutable references into the body store. Indices come from a
/// manifold, so `i != j` always holds.
pub(crate) fn pair_mut(
    bodies: &mut [RigidBody],
    i: usize,
    j: usize,
) -> (&mut RigidBody, &mut RigidBody) {
    debug_assert!(i != j);
    if i < j {
        let (left, right) = bodies.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = bodies.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}
