//! Signal shaping for per-frame inputs
//!
//! First-order filters and edge/delta trackers shared by the gesture
//! interpreter and the scene.

mod smoothing;

pub use smoothing::{ease_toward, FrameDelta, LowPass, RisingEdge};

use std::ops::{Add, Mul, Sub};

/// Anything that can be blended linearly: `f32` and the glam vectors.
pub trait Blend: Copy + Add<Output = Self> + Sub<Output = Self> + Mul<f32, Output = Self> {}

impl<T> Blend for T where T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T> {}
