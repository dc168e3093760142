//! Broad phase: spatial hash grid over body AABBs.
//!
//! Rebuilt from scratch every step (bodies move). Guarantees: every pair
//! whose bounding boxes overlap appears exactly once, no self pairs, no
//! (A,B)/(B,A) duplicates, and static-static pairs never come out - the
//! resolver must not see them. False positives are fine, the narrow phase
//! filters them.

use std::collections::{HashMap, HashSet};

use crate::core::Aabb;
use crate::domain::RigidBody;

const DEFAULT_CELL_SIZE: f32 = 1.0;
const MIN_CELL_SIZE: f32 = 1e-3;

pub struct BroadPhase {
    cells: HashMap<(i32, i32), Vec<usize>>,
    aabbs: Vec<Aabb>,
    seen: HashSet<(usize, usize)>,
    pairs: Vec<(usize, usize)>,
}

impl BroadPhase {
    pub fn new() -> Self {
        Self {
            cells: HashMap::new(),
            aabbs: Vec::new(),
            seen: HashSet::new(),
            pairs: Vec::new(),
        }
    }

    /// Rebuild the grid and collect candidate pairs, sorted by index so the
    /// downstream pipeline (and therefore the whole simulation) is
    /// deterministic regardless of hash iteration order.
    pub fn collect_pairs(&mut self, bodies: &[RigidBody], cell_size_cfg: f32) -> &[(usize, usize)] {
        self.cells.clear();
        self.aabbs.clear();
        self.seen.clear();
        self.pairs.clear();

        for body in bodies.iter() {
            self.aabbs.push(body.aabb());
        }

        let cell_size = if cell_size_cfg > 0.0 {
            cell_size_cfg.max(MIN_CELL_SIZE)
        } else {
            auto_cell_size(&self.aabbs)
        };

        for (idx, aabb) in self.aabbs.iter().enumerate() {
            let (x0, y0) = cell_of(aabb.min.x, aabb.min.y, cell_size);
            let (x1, y1) = cell_of(aabb.max.x, aabb.max.y, cell_size);
            for cy in y0..=y1 {
                for cx in x0..=x1 {
                    self.cells.entry((cx, cy)).or_default().push(idx);
                }
            }
        }

        for indices in self.cells.values() {
            for (k, &i) in indices.iter().enumerate() {
                for &j in indices[k + 1..].iter() {
                    let pair = if i < j { (i, j) } else { (j, i) };
                    if bodies[pair.0].inv_mass == 0.0 && bodies[pair.1].inv_mass == 0.0 {
                        continue;
                    }
                    if !self.aabbs[pair.0].overlaps(&self.aabbs[pair.1]) {
                        continue;
                    }
                    if self.seen.insert(pair) {
                        self.pairs.push(pair);
                    }
                }
            }
        }

        self.pairs.sort_unstable();
        &self.pairs
    }

    /// Cells with at least one body, after the last `collect_pairs`.
    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }
}

impl Default for BroadPhase {
    fn default() -> Self {
        Self::new()
    }
}

fn cell_of(x: f32, y: f32, cell_size: f32) -> (i32, i32) {
    ((x / cell_size).floor() as i32, (y / cell_size).floor() as i32)
}

/// Cell size close to the average body extent keeps bodies in few cells
/// while still partitioning the space usefully.
fn auto_cell_size(aabbs: &[Aabb]) -> f32 {
    if aabbs.is_empty() {
        return DEFAULT_CELL_SIZE;
    }
    let mut sum = 0.0;
    for aabb in aabbs {
        let ext = aabb.extents();
        sum += ext.x.max(ext.y);
    }
    (sum / aabbs.len() as f32).max(MIN_CELL_SIZE)
}
