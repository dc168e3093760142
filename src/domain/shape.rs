use crate::core::{Aabb, Vec2};

/// Collision geometry, local space.
///
/// Closed sum type on purpose: the narrow phase dispatches on the pair of
/// variants and the compiler checks exhaustiveness. Polygon vertices are
/// counter-clockwise and convex; `validate` enforces both at registration
/// time so detection never sees a degenerate shape.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Circle { radius: f32 },
    Polygon { vertices: Vec<Vec2> },
}

const CONVEXITY_EPS: f32 = 1e-6;
const MIN_AREA: f32 = 1e-6;

impl Shape {
    /// Convenience constructor for an axis-aligned box centered on the body
    /// origin. Vertices come out counter-clockwise.
    pub fn new_box(width: f32, height: f32) -> Self {
        let hw = width * 0.5;
        let hh = height * 0.5;
        Shape::Polygon {
            vertices: vec![
                Vec2::new(-hw, -hh),
                Vec2::new(hw, -hh),
                Vec2::new(hw, hh),
                Vec2::new(-hw, hh),
            ],
        }
    }

    /// Validate the shape and normalize polygon winding to counter-clockwise.
    ///
    /// Fails fast on anything the collision pipeline cannot handle: bad
    /// radius, fewer than 3 vertices, non-finite coordinates, near-zero area
    /// or a reflex (non-convex) corner.
    pub fn into_valid(self) -> Result<Shape, String> {
        match self {
            Shape::Circle { radius } => {
                if !radius.is_finite() || radius <= 0.0 {
                    return Err(format!("circle radius must be positive, got {}", radius));
                }
                Ok(Shape::Circle { radius })
            }
            Shape::Polygon { mut vertices } => {
                if vertices.len() < 3 {
                    return Err(format!(
                        "polygon needs at least 3 vertices, got {}",
                        vertices.len()
                    ));
                }
                if vertices.iter().any(|v| !v.is_finite()) {
                    return Err("polygon vertices must be finite".to_string());
                }

                let area = signed_area(&vertices);
                if area.abs() < MIN_AREA {
                    return Err("polygon has (near) zero area".to_string());
                }
                // Accept clockwise input, store counter-clockwise.
                if area < 0.0 {
                    vertices.reverse();
                }

                let n = vertices.len();
                for i in 0..n {
                    let e0 = vertices[(i + 1) % n] - vertices[i];
                    let e1 = vertices[(i + 2) % n] - vertices[(i + 1) % n];
                    if e0.cross(e1) < -CONVEXITY_EPS {
                        return Err(format!("polygon is not convex (reflex corner at vertex {})", (i + 1) % n));
                    }
                }

                Ok(Shape::Polygon { vertices })
            }
        }
    }

    /// Moment of inertia about the body origin for the given mass.
    pub fn inertia(&self, mass: f32) -> f32 {
        match self {
            Shape::Circle { radius } => 0.5 * mass * radius * radius,
            Shape::Polygon { vertices } => {
                // Uniform-density polygon, second moment about the local origin.
                let n = vertices.len();
                let mut numer = 0.0f32;
                let mut denom = 0.0f32;
                for i in 0..n {
                    let v0 = vertices[i];
                    let v1 = vertices[(i + 1) % n];
                    let cross = v0.cross(v1);
                    numer += cross * (v0.dot(v0) + v0.dot(v1) + v1.dot(v1));
                    denom += cross;
                }
                if denom.abs() < MIN_AREA {
                    return 0.0;
                }
                mass * numer / (6.0 * denom)
            }
        }
    }

    /// Bounding box for the shape placed at `position` with orientation `angle`.
    pub fn aabb(&self, position: Vec2, angle: f32) -> Aabb {
        match self {
            Shape::Circle { radius } => {
                Aabb::from_center(position, Vec2::new(*radius, *radius))
            }
            Shape::Polygon { vertices } => {
                let mut min = Vec2::new(f32::MAX, f32::MAX);
                let mut max = Vec2::new(f32::MIN, f32::MIN);
                for v in vertices.iter() {
                    let w = position + v.rotate(angle);
                    min.x = min.x.min(w.x);
                    min.y = min.y.min(w.y);
                    max.x = max.x.max(w.x);
                    max.y = max.y.max(w.y);
                }
                Aabb::new(min, max)
            }
        }
    }

    /// Polygon vertices transformed to world space. Empty for circles.
    pub fn world_vertices(&self, position: Vec2, angle: f32) -> Vec<Vec2> {
        match self {
            Shape::Circle { .. } => Vec::new(),
            Shape::Polygon { vertices } => vertices
                .iter()
                .map(|v| position + v.rotate(angle))
                .collect(),
        }
    }
}

fn signed_area(vertices: &[Vec2]) -> f32 {
    let n = vertices.len();
    let mut sum = 0.0;
    for i in 0..n {
        sum += vertices[i].cross(vertices[(i + 1) % n]);
    }
    sum * 0.5
}
