use glam::{Vec2, Vec3};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureKind {
    Open,
    Pinch,
}

impl GestureKind {
    pub fn as_str(self) -> &'static str {
        match self {
            GestureKind::Open => "Open",
            GestureKind::Pinch => "Pinch",
        }
    }
}

impl fmt::Display for GestureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the interpreted gesture for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureEvent {
    /// Primary index tip in normalized image space, mirrored if configured.
    pub cursor: Vec2,
    /// Camera rotation control in `[-0.8, 0.8]` with the default config.
    pub rotation_speed: f32,
    /// Low-pass filtered zoom delta.
    pub zoom: f32,
    /// Thumb-to-pinky aperture in `[0, 1]`.
    pub openness: f32,
    pub pinching: bool,
    /// Set only on the frame the pinch starts.
    pub pinch_triggered: bool,
    pub kind: GestureKind,
    /// Wrist to palm-center distance, a proxy for distance to the camera.
    pub hand_span: f32,
    pub hand_count: usize,
    /// Rough world-space hand position derived from cursor and span.
    pub position: Vec3,
}
