use wasm_bindgen::prelude::*;

use super::perf_stats::PerfStats;
use super::{WorldCore, STATE_STRIDE};

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a world with default parameters.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: WorldCore::new(),
        }
    }

    /// Create a world from a JSON config document.
    pub fn with_config(json: String) -> Result<World, JsValue> {
        let mut core = WorldCore::new();
        core.load_config_json(&json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    /// Replace the config from JSON. Bodies are kept.
    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_config_json(&json)
            .map_err(|e| JsValue::from_str(&e))
    }

    pub fn config_json(&self) -> String {
        self.core.config_json()
    }

    /// Replace config and bodies from a scene document. All-or-nothing.
    pub fn load_scene(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_scene_json(&json)
            .map_err(|e| JsValue::from_str(&e))
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize {
        self.core.body_count()
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.frame()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.core.set_gravity(x, y);
    }

    pub fn set_fixed_dt(&mut self, dt: f32) -> Result<(), JsValue> {
        self.core.set_fixed_dt(dt).map_err(|e| JsValue::from_str(&e))
    }

    pub fn set_correction(&mut self, percent: f32, slop: f32) -> Result<(), JsValue> {
        self.core
            .set_correction(percent, slop)
            .map_err(|e| JsValue::from_str(&e))
    }

    pub fn set_cell_size(&mut self, cell_size: f32) -> Result<(), JsValue> {
        self.core
            .set_cell_size(cell_size)
            .map_err(|e| JsValue::from_str(&e))
    }

    // === BODY API ===

    /// Spawn a circle body. `mass == 0` makes it static. Returns the body ID.
    pub fn spawn_circle(&mut self, x: f32, y: f32, radius: f32, mass: f32) -> Result<u32, JsValue> {
        self.core
            .spawn_circle(x, y, radius, mass)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Spawn a box body. Returns the body ID.
    pub fn spawn_box(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        mass: f32,
    ) -> Result<u32, JsValue> {
        self.core
            .spawn_box(x, y, width, height, mass)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Spawn a convex polygon body from flat `[x0, y0, x1, y1, ...]` local
    /// vertices. Returns the body ID.
    pub fn spawn_polygon(
        &mut self,
        x: f32,
        y: f32,
        vertices: &[f32],
        mass: f32,
    ) -> Result<u32, JsValue> {
        self.core
            .spawn_polygon(x, y, vertices, mass)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Remove a body by ID. Returns false for unknown IDs.
    pub fn remove_body(&mut self, id: u32) -> bool {
        self.core.remove_body(id)
    }

    /// Remove all bodies
    pub fn clear(&mut self) {
        self.core.clear();
    }

    pub fn set_body_velocity(&mut self, id: u32, vx: f32, vy: f32) -> Result<(), JsValue> {
        self.core
            .set_body_velocity(id, vx, vy)
            .map_err(|e| JsValue::from_str(&e))
    }

    pub fn apply_force(&mut self, id: u32, fx: f32, fy: f32) -> Result<(), JsValue> {
        self.core
            .apply_force(id, fx, fy)
            .map_err(|e| JsValue::from_str(&e))
    }

    pub fn apply_impulse(&mut self, id: u32, ix: f32, iy: f32) -> Result<(), JsValue> {
        self.core
            .apply_impulse(id, ix, iy)
            .map_err(|e| JsValue::from_str(&e))
    }

    pub fn set_restitution(&mut self, id: u32, restitution: f32) -> Result<(), JsValue> {
        self.core
            .set_restitution(id, restitution)
            .map_err(|e| JsValue::from_str(&e))
    }

    pub fn set_friction(
        &mut self,
        id: u32,
        static_friction: f32,
        dynamic_friction: f32,
    ) -> Result<(), JsValue> {
        self.core
            .set_friction(id, static_friction, dynamic_friction)
            .map_err(|e| JsValue::from_str(&e))
    }

    pub fn body_position_x(&self, id: u32) -> Option<f32> {
        self.core.body_position(id).map(|p| p.0)
    }

    pub fn body_position_y(&self, id: u32) -> Option<f32> {
        self.core.body_position(id).map(|p| p.1)
    }

    pub fn body_velocity_x(&self, id: u32) -> Option<f32> {
        self.core.body_velocity(id).map(|v| v.0)
    }

    pub fn body_velocity_y(&self, id: u32) -> Option<f32> {
        self.core.body_velocity(id).map(|v| v.1)
    }

    pub fn body_angle(&self, id: u32) -> Option<f32> {
        self.core.body_angle(id)
    }

    pub fn body_angular_velocity(&self, id: u32) -> Option<f32> {
        self.core.body_angular_velocity(id)
    }

    // === STEPPING ===

    /// Advance exactly one fixed step.
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Advance by elapsed wall-clock seconds. Returns the number of fixed
    /// steps actually run.
    pub fn tick(&mut self, elapsed_s: f32) -> u32 {
        self.core.tick(elapsed_s)
    }

    // === STATE READBACK ===

    /// Pointer to the packed state buffer (for JS rendering).
    ///
    /// Layout per body: x, y, angle, vx, vy, angular_velocity. The pointer
    /// is only valid until the next world mutation.
    pub fn state_ptr(&self) -> *const f32 {
        self.core.state_ptr()
    }

    /// Length of the state buffer in f32 elements.
    pub fn state_len(&self) -> usize {
        self.core.state_len()
    }

    /// f32 lanes per body in the state buffer.
    pub fn state_stride(&self) -> usize {
        STATE_STRIDE
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
