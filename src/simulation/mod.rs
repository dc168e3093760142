//! World - rigid body simulation orchestrator
//!
//! `WorldCore` owns the body store and drives the step pipeline; all real
//! work is delegated:
//! - Integration, broad/narrow phase and contact resolution live in systems/
//! - Body and scene validation lives in domain/
//!
//! `World` (facade.rs) is the wasm-bindgen wrapper around `WorldCore`.

use crate::domain::scene::SceneRoot;
use crate::domain::{RigidBody, WorldConfig};
use crate::systems::narrowphase::Manifold;
use crate::systems::BroadPhase;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "step/driver.rs"]
mod driver;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// f32 lanes per body in the packed state buffer:
/// x, y, angle, vx, vy, angular_velocity.
pub const STATE_STRIDE: usize = 6;

/// The simulation world
pub struct WorldCore {
    config: WorldConfig,
    bodies: Vec<RigidBody>,
    broadphase: BroadPhase,
    /// Per-step contact scratch, reused to avoid reallocating.
    manifolds: Vec<Manifold>,
    /// Packed body state for zero-copy readback, refreshed after every
    /// change to the state it mirrors (steps, spawns, removals, velocity
    /// writes). Layout per body is `STATE_STRIDE` f32 lanes.
    state: Vec<f32>,

    // Fixed-timestep driver state
    accumulator: f32,

    // State
    next_id: u32,
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create a world with default parameters.
    pub fn new() -> Self {
        init::create_world_core(WorldConfig::default())
    }

    pub fn with_config(config: WorldConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(init::create_world_core(config))
    }

    /// Replace the whole config from JSON. Bodies are kept.
    pub fn load_config_json(&mut self, json: &str) -> Result<(), String> {
        self.config = WorldConfig::from_json(json)?;
        Ok(())
    }

    pub fn config_json(&self) -> String {
        self.config.to_json()
    }

    /// Replace config (optional) and body list from a scene document.
    /// All-or-nothing: a malformed scene leaves the world untouched.
    pub fn load_scene_json(&mut self, json: &str) -> Result<(), String> {
        let scene = SceneRoot::from_json(json)?;
        let mut bodies = Vec::with_capacity(scene.bodies.len());
        for scene_body in &scene.bodies {
            bodies.push(scene_body.build()?);
        }

        if let Some(config) = scene.config {
            self.config = config;
        }
        self.bodies.clear();
        self.accumulator = 0.0;
        for body in bodies {
            commands::insert_body(self, body);
        }
        step::refresh_state(self);
        Ok(())
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        settings::set_gravity(self, x, y);
    }

    pub fn set_fixed_dt(&mut self, dt: f32) -> Result<(), String> {
        settings::set_fixed_dt(self, dt)
    }

    pub fn set_correction(&mut self, percent: f32, slop: f32) -> Result<(), String> {
        settings::set_correction(self, percent, slop)
    }

    pub fn set_cell_size(&mut self, cell_size: f32) -> Result<(), String> {
        settings::set_cell_size(self, cell_size)
    }

    // === BODY API ===

    /// Spawn a circle body. `mass == 0` makes it static. Returns the body ID.
    pub fn spawn_circle(&mut self, x: f32, y: f32, radius: f32, mass: f32) -> Result<u32, String> {
        commands::spawn_circle(self, x, y, radius, mass)
    }

    /// Spawn an axis-aligned box body (rotates freely afterwards).
    pub fn spawn_box(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        mass: f32,
    ) -> Result<u32, String> {
        commands::spawn_box(self, x, y, width, height, mass)
    }

    /// Spawn a convex polygon body from `[x0, y0, x1, y1, ...]` local
    /// vertices (relative to the body center).
    pub fn spawn_polygon(
        &mut self,
        x: f32,
        y: f32,
        vertices: &[f32],
        mass: f32,
    ) -> Result<u32, String> {
        commands::spawn_polygon(self, x, y, vertices, mass)
    }

    /// Remove a body by ID. Returns false for unknown IDs.
    pub fn remove_body(&mut self, id: u32) -> bool {
        commands::remove_body(self, id)
    }

    /// Remove all bodies and reset the driver backlog.
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    pub fn set_body_velocity(&mut self, id: u32, vx: f32, vy: f32) -> Result<(), String> {
        commands::set_body_velocity(self, id, vx, vy)
    }

    /// Accumulate a force on a body for the next step.
    pub fn apply_force(&mut self, id: u32, fx: f32, fy: f32) -> Result<(), String> {
        commands::apply_force(self, id, fx, fy)
    }

    /// Instantly change a body's momentum.
    pub fn apply_impulse(&mut self, id: u32, ix: f32, iy: f32) -> Result<(), String> {
        commands::apply_impulse(self, id, ix, iy)
    }

    pub fn set_restitution(&mut self, id: u32, restitution: f32) -> Result<(), String> {
        commands::set_restitution(self, id, restitution)
    }

    pub fn set_friction(
        &mut self,
        id: u32,
        static_friction: f32,
        dynamic_friction: f32,
    ) -> Result<(), String> {
        commands::set_friction(self, id, static_friction, dynamic_friction)
    }

    pub fn body_position(&self, id: u32) -> Option<(f32, f32)> {
        commands::body_position(self, id)
    }

    pub fn body_velocity(&self, id: u32) -> Option<(f32, f32)> {
        commands::body_velocity(self, id)
    }

    pub fn body_angle(&self, id: u32) -> Option<f32> {
        commands::body_angle(self, id)
    }

    pub fn body_angular_velocity(&self, id: u32) -> Option<f32> {
        commands::body_angular_velocity(self, id)
    }

    // === STEPPING ===

    /// Advance exactly one fixed step.
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Advance by wall-clock time: runs as many whole fixed steps as fit,
    /// banks the remainder. Returns the number of steps run.
    pub fn tick(&mut self, elapsed_s: f32) -> u32 {
        driver::tick(self, elapsed_s)
    }

    // === STATE READBACK ===

    /// Pointer to the packed state buffer (for JS rendering).
    pub fn state_ptr(&self) -> *const f32 {
        self.state.as_ptr()
    }

    /// Length of the state buffer in f32 elements.
    pub fn state_len(&self) -> usize {
        self.state.len()
    }
}

impl Default for WorldCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
