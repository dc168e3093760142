//! Physics systems: the step pipeline stages.
//!
//! `simulation` only sequences these; all actual work lives here.

pub mod broadphase;
pub mod integrator;
pub mod narrowphase;
pub mod resolver;

pub use broadphase::BroadPhase;
pub use narrowphase::Manifold;
