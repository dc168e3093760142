//! Separating Axis Theorem tests for convex polygons.

use crate::core::Vec2;
use crate::domain::{RigidBody, Shape};

/// Polygon vs polygon SAT.
///
/// One candidate axis per edge of each polygon. A single separating axis
/// ends the test immediately; if all axes overlap, the axis with the
/// smallest overlap is the minimum translation vector. Ties go to the
/// first axis found (strict `<`), which keeps results reproducible.
///
/// Returns (normal a->b, penetration, world contact point).
pub(super) fn polygon_polygon(a: &RigidBody, b: &RigidBody) -> Option<(Vec2, f32, Vec2)> {
    let verts_a = a.shape.world_vertices(a.position, a.angle);
    let verts_b = b.shape.world_vertices(b.position, b.angle);

    let mut best_overlap = f32::MAX;
    let mut best_axis = Vec2::zero();
    let mut best_from_a = true;

    for (axis, from_a) in axes_of(&verts_a, true).chain(axes_of(&verts_b, false)) {
        let (min_a, max_a) = project(&verts_a, axis);
        let (min_b, max_b) = project(&verts_b, axis);
        let overlap = max_a.min(max_b) - min_a.max(min_b);
        if overlap <= 0.0 {
            // Separating axis found: disjoint, stop here.
            return None;
        }
        if overlap < best_overlap {
            best_overlap = overlap;
            best_axis = axis;
            best_from_a = from_a;
        }
    }

    if best_axis == Vec2::zero() {
        return None;
    }

    // Orient the MTV axis from A toward B.
    let mut normal = best_axis;
    if (b.position - a.position).dot(normal) < 0.0 {
        normal = -normal;
    }

    // Contact point: deepest vertex of the incident polygon. When the
    // reference edge came from A, that is B's support point against the
    // normal, and vice versa.
    let contact = if best_from_a {
        support(&verts_b, -normal)
    } else {
        support(&verts_a, normal)
    };

    Some((normal, best_overlap, contact))
}

/// Circle vs polygon SAT.
///
/// Candidate axes are the polygon edge normals plus the axis from the
/// nearest polygon vertex to the circle center - the extra axis covers the
/// corner-contact case edge normals alone miss.
///
/// Returns (normal polygon->circle, penetration, world contact point).
pub(super) fn circle_polygon(poly: &RigidBody, circle: &RigidBody) -> Option<(Vec2, f32, Vec2)> {
    let Shape::Circle { radius } = &circle.shape else {
        return None;
    };
    let radius = *radius;
    let verts = poly.shape.world_vertices(poly.position, poly.angle);
    let center = circle.position;

    let mut best_overlap = f32::MAX;
    let mut best_axis = Vec2::zero();

    let vertex_axis = nearest_vertex_axis(&verts, center);
    let edge_axes = axes_of(&verts, true).map(|(axis, _)| axis);

    for axis in edge_axes.chain(vertex_axis.into_iter()) {
        let (min_p, max_p) = project(&verts, axis);
        let c = center.dot(axis);
        let (min_c, max_c) = (c - radius, c + radius);
        let overlap = max_p.min(max_c) - min_p.max(min_c);
        if overlap <= 0.0 {
            return None;
        }
        if overlap < best_overlap {
            best_overlap = overlap;
            best_axis = axis;
        }
    }

    if best_axis == Vec2::zero() {
        return None;
    }

    let mut normal = best_axis;
    if (center - poly.position).dot(normal) < 0.0 {
        normal = -normal;
    }

    // Deepest point of the circle inside the polygon.
    let contact = center - normal * radius;

    Some((normal, best_overlap, contact))
}

/// Edge normals, unit length, zero-length edges skipped. The bool tags the
/// owning polygon for contact-point selection.
fn axes_of<'a>(
    vertices: &'a [Vec2],
    from_a: bool,
) -> impl Iterator<Item = (Vec2, bool)> + 'a {
    let n = vertices.len();
    (0..n).filter_map(move |i| {
        let edge = vertices[(i + 1) % n] - vertices[i];
        let axis = edge.perp().normalize();
        if axis == Vec2::zero() {
            None
        } else {
            Some((axis, from_a))
        }
    })
}

fn project(vertices: &[Vec2], axis: Vec2) -> (f32, f32) {
    let mut min = f32::MAX;
    let mut max = f32::MIN;
    for v in vertices {
        let d = v.dot(axis);
        min = min.min(d);
        max = max.max(d);
    }
    (min, max)
}

/// Vertex with the greatest extent along `dir`. First wins on ties.
fn support(vertices: &[Vec2], dir: Vec2) -> Vec2 {
    let mut best = vertices[0];
    let mut best_d = best.dot(dir);
    for v in &vertices[1..] {
        let d = v.dot(dir);
        if d > best_d {
            best_d = d;
            best = *v;
        }
    }
    best
}

/// Axis from the polygon vertex nearest to the circle center. `None` when
/// the center sits exactly on a vertex (edge normals still decide then).
fn nearest_vertex_axis(vertices: &[Vec2], center: Vec2) -> Option<Vec2> {
    let mut best = vertices[0];
    let mut best_d = (center - best).length_squared();
    for v in &vertices[1..] {
        let d = (center - *v).length_squared();
        if d < best_d {
            best_d = d;
            best = *v;
        }
    }
    let axis = (center - best).normalize();
    if axis == Vec2::zero() {
        None
    } else {
        Some(axis)
    }
}
