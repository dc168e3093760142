//! Narrow phase: exact intersection tests producing contact manifolds.
//!
//! Dispatch is a match over the closed `Shape` pair; the compiler keeps it
//! exhaustive when a variant is added. "No collision" is the normal result,
//! expressed as `None`, never as an error.

use crate::core::Vec2;
use crate::domain::{RigidBody, Shape};

mod circle;
mod sat;

/// One confirmed contact between two bodies.
///
/// Holds indices into the body store, not references: manifolds are built
/// fresh every step, consumed by the resolver, and discarded. They must
/// never outlive the step that created them.
#[derive(Clone, Copy, Debug)]
pub struct Manifold {
    pub a: usize,
    pub b: usize,
    /// Unit vector pointing from body `a` toward body `b`.
    pub normal: Vec2,
    /// Overlap along the normal, always >= 0.
    pub penetration: f32,
    /// World-space contact point, used for the angular impulse terms.
    pub contact: Vec2,
}

/// Test one candidate pair. `a < b` by broad-phase convention.
pub fn detect(bodies: &[RigidBody], a: usize, b: usize) -> Option<Manifold> {
    let body_a = &bodies[a];
    let body_b = &bodies[b];

    match (&body_a.shape, &body_b.shape) {
        (Shape::Circle { .. }, Shape::Circle { .. }) => {
            circle::circle_circle(body_a, body_b).map(|(normal, penetration, contact)| Manifold {
                a,
                b,
                normal,
                penetration,
                contact,
            })
        }
        (Shape::Polygon { .. }, Shape::Polygon { .. }) => {
            sat::polygon_polygon(body_a, body_b).map(|(normal, penetration, contact)| Manifold {
                a,
                b,
                normal,
                penetration,
                contact,
            })
        }
        (Shape::Polygon { .. }, Shape::Circle { .. }) => {
            // sat reports the normal polygon -> circle, which is a -> b here.
            sat::circle_polygon(body_a, body_b).map(|(normal, penetration, contact)| Manifold {
                a,
                b,
                normal,
                penetration,
                contact,
            })
        }
        (Shape::Circle { .. }, Shape::Polygon { .. }) => {
            // Run with the polygon as reference, then flip to keep a -> b.
            sat::circle_polygon(body_b, body_a).map(|(normal, penetration, contact)| Manifold {
                a,
                b,
                normal: -normal,
                penetration,
                contact,
            })
        }
    }
}
