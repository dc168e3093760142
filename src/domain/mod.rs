//! Domain model: shapes, bodies, configuration, scene documents.

pub mod body;
pub mod config;
pub mod scene;
pub mod shape;

pub use body::RigidBody;
pub use config::WorldConfig;
pub use shape::Shape;
