use wasm_bindgen::prelude::*;

/// Per-step timing and workload snapshot. All zeros while perf metrics are
/// disabled; fields cover one step, not a running average.
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) broadphase_ms: f64,
    pub(super) narrowphase_ms: f64,
    pub(super) resolve_ms: f64,
    pub(super) correction_ms: f64,
    pub(super) body_count: u32,
    pub(super) candidate_pairs: u32,
    pub(super) manifold_count: u32,
    pub(super) occupied_cells: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn broadphase_ms(&self) -> f64 { self.broadphase_ms }
    #[wasm_bindgen(getter)]
    pub fn narrowphase_ms(&self) -> f64 { self.narrowphase_ms }
    #[wasm_bindgen(getter)]
    pub fn resolve_ms(&self) -> f64 { self.resolve_ms }
    #[wasm_bindgen(getter)]
    pub fn correction_ms(&self) -> f64 { self.correction_ms }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn candidate_pairs(&self) -> u32 { self.candidate_pairs }
    #[wasm_bindgen(getter)]
    pub fn manifold_count(&self) -> u32 { self.manifold_count }
    #[wasm_bindgen(getter)]
    pub fn occupied_cells(&self) -> u32 { self.occupied_cells }
}
