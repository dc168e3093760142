use super::vec2::Vec2;

/// Axis-aligned bounding box used by the broad phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Inclusive overlap: touching boxes count as overlapping. The broad phase
    /// must never miss a real contact, false positives are fine.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    pub fn extents(&self) -> Vec2 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disjoint_boxes_do_not_overlap() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0));
        let b = Aabb::new(Vec2::new(2.0, 0.0), Vec2::new(3.0, 1.0));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn touching_boxes_overlap() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0));
        let b = Aabb::new(Vec2::new(1.0, 0.0), Vec2::new(2.0, 1.0));
        assert!(a.overlaps(&b));
    }

    #[test]
    fn contained_box_overlaps() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(4.0, 4.0));
        let b = Aabb::new(Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }
}
