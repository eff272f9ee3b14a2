use crate::dynamics::{FrameDelta, LowPass, RisingEdge};

/// Smoothing memory carried between frames for one tracking session.
///
/// Only frames that contain at least one hand touch it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureState {
    pub(crate) zoom: LowPass<f32>,
    pub(crate) pinch: RisingEdge,
    pub(crate) two_hands_distance: FrameDelta,
}

impl GestureState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn smoothed_zoom(&self) -> f32 {
        self.zoom.value()
    }

    pub fn last_pinch_state(&self) -> bool {
        self.pinch.last()
    }

    pub fn last_two_hands_distance(&self) -> Option<f32> {
        self.two_hands_distance.previous()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
