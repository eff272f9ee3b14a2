//! Math utilities module
//!
//! Scalar mappings used to turn landmark geometry into control signals,
//! plus re-exports from glam.

mod mapping;

pub use mapping::{deadzone, mirror_x, normalize_clamped, unit_to_world};

// Re-export commonly used glam types
pub use glam::{Mat4, Vec2, Vec3, Vec4};
