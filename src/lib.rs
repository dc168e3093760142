//! Impulse2D - 2D rigid body physics engine in WASM
//!
//! Architecture:
//! - core/          - Vector math and bounding boxes
//! - domain/        - Bodies, shapes, config, scene documents
//! - systems/       - Step pipeline stages (integrate, collide, resolve)
//! - simulation/    - Orchestration and the wasm facade

pub mod core;
pub mod domain;
pub mod simulation;
pub mod systems;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Impulse2D WASM engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{Aabb, Vec2};
pub use domain::{RigidBody, Shape, WorldConfig};
pub use simulation::{PerfStats, World, STATE_STRIDE};
