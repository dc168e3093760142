//! Core math primitives shared by every system.

pub mod aabb;
pub mod vec2;

pub use aabb::Aabb;
pub use vec2::Vec2;
