//! Positional correction for residual overlap.
//!
//! Impulses fix velocities, not positions, so resting contacts slowly sink
//! under gravity. Pushing a fraction of the remaining penetration apart each
//! step (above a small slop) keeps stacks stable without adding jitter.

use crate::domain::RigidBody;

use super::super::narrowphase::Manifold;
use super::pair_mut;

pub fn positional_correction(
    bodies: &mut [RigidBody],
    manifold: &Manifold,
    percent: f32,
    slop: f32,
) {
    let (a, b) = pair_mut(bodies, manifold.a, manifold.b);

    let inv_mass_sum = a.inv_mass + b.inv_mass;
    if inv_mass_sum <= 0.0 {
        return;
    }

    let depth = (manifold.penetration - slop).max(0.0);
    if depth == 0.0 {
        return;
    }

    let correction = manifold.normal * (depth / inv_mass_sum * percent);
    a.position -= correction * a.inv_mass;
    b.position += correction * b.inv_mass;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vec2;
    use crate::domain::Shape;
    use crate::systems::narrowphase::detect;

    fn circle(x: f32, y: f32, radius: f32, mass: f32) -> RigidBody {
        RigidBody::new(Vec2::new(x, y), Shape::Circle { radius }, mass).unwrap()
    }

    #[test]
    fn overlapping_bodies_are_pushed_apart() {
        let mut bodies = vec![
            circle(0.0, 0.0, 1.0, 1.0),
            circle(1.0, 0.0, 1.0, 1.0),
        ];
        let m = detect(&bodies, 0, 1).expect("overlap");
        positional_correction(&mut bodies, &m, 0.4, 0.01);

        assert!(bodies[0].position.x < 0.0);
        assert!(bodies[1].position.x > 1.0);
        // Equal masses split the correction evenly.
        assert!((bodies[0].position.x + (bodies[1].position.x - 1.0)).abs() < 1e-6);
    }

    #[test]
    fn static_body_does_not_move() {
        let mut bodies = vec![
            circle(0.0, 0.0, 1.0, 1.0),
            circle(1.0, 0.0, 1.0, 0.0),
        ];
        let m = detect(&bodies, 0, 1).expect("overlap");
        positional_correction(&mut bodies, &m, 0.4, 0.01);

        assert_eq!(bodies[1].position, Vec2::new(1.0, 0.0));
        assert!(bodies[0].position.x < 0.0);
    }

    #[test]
    fn penetration_within_slop_is_ignored() {
        let mut bodies = vec![
            circle(0.0, 0.0, 1.0, 1.0),
            circle(1.995, 0.0, 1.0, 1.0),
        ];
        let m = detect(&bodies, 0, 1).expect("overlap");
        positional_correction(&mut bodies, &m, 0.4, 0.01);

        assert_eq!(bodies[0].position, Vec2::zero());
        assert_eq!(bodies[1].position, Vec2::new(1.995, 0.0));
    }
}
