use crate::core::Vec2;
use crate::domain::{RigidBody, Shape};

/// Closed-form circle vs circle test.
///
/// Returns (normal a->b, penetration, world contact point).
pub(super) fn circle_circle(a: &RigidBody, b: &RigidBody) -> Option<(Vec2, f32, Vec2)> {
    let (Shape::Circle { radius: ra }, Shape::Circle { radius: rb }) = (&a.shape, &b.shape) else {
        return None;
    };

    let delta = b.position - a.position;
    let radius_sum = ra + rb;
    let dist_sq = delta.length_squared();
    if dist_sq >= radius_sum * radius_sum {
        return None;
    }

    let dist = dist_sq.sqrt();
    if dist > 1e-6 {
        let normal = delta * (1.0 / dist);
        let penetration = radius_sum - dist;
        let contact = a.position + normal * *ra;
        Some((normal, penetration, contact))
    } else {
        // Concentric centers: any direction works, pick a fixed one so the
        // result is reproducible.
        Some((Vec2::new(1.0, 0.0), radius_sum, a.position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle(x: f32, y: f32, radius: f32) -> RigidBody {
        RigidBody::new(Vec2::new(x, y), Shape::Circle { radius }, 1.0).unwrap()
    }

    #[test]
    fn touching_circles_do_not_collide() {
        let a = circle(0.0, 0.0, 1.0);
        let b = circle(2.0, 0.0, 1.0);
        assert!(circle_circle(&a, &b).is_none());
    }

    #[test]
    fn penetration_is_radius_sum_minus_distance() {
        let a = circle(0.0, 0.0, 1.0);
        let b = circle(0.0, 1.2, 0.5);
        let (normal, penetration, contact) = circle_circle(&a, &b).unwrap();
        assert!((penetration - 0.3).abs() < 1e-6);
        assert!((normal.y - 1.0).abs() < 1e-6);
        // Contact sits on A's surface along the normal.
        assert!((contact.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn concentric_circles_use_fixed_normal() {
        let a = circle(3.0, 3.0, 1.0);
        let b = circle(3.0, 3.0, 0.5);
        let (normal, penetration, _) = circle_circle(&a, &b).unwrap();
        assert_eq!(normal, Vec2::new(1.0, 0.0));
        assert!((penetration - 1.5).abs() < 1e-6);
    }
}
