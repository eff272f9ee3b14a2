/// Thresholds and gains of the gesture interpreter. Distances are in
/// normalized image units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// Thumb-tip to index-tip distance below which the hand is pinching.
    pub pinch_threshold: f32,
    /// Multiplier on the frame-to-frame change of the two-palm distance.
    pub two_hand_zoom_gain: f32,
    /// Thumb-to-pinky distance mapped to openness 0.
    pub openness_min: f32,
    /// Distance span from `openness_min` to openness 1.
    pub openness_span: f32,
    /// Single-hand zoom is `(openness - 0.5) * openness_zoom_gain`.
    pub openness_zoom_gain: f32,
    pub deadzone_low: f32,
    pub deadzone_high: f32,
    pub rotation_gain: f32,
    /// Per-frame coefficient of the zoom low-pass filter.
    pub zoom_smoothing: f32,
    /// Mirror the cursor horizontally (selfie view).
    pub mirror: bool,
    pub world_scale: f32,
    pub depth_gain: f32,
    pub depth_offset: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            pinch_threshold: 0.05,
            two_hand_zoom_gain: 10.0,
            openness_min: 0.05,
            openness_span: 0.45,
            openness_zoom_gain: 0.3,
            deadzone_low: 0.4,
            deadzone_high: 0.6,
            rotation_gain: 2.0,
            zoom_smoothing: 0.1,
            mirror: true,
            world_scale: 10.0,
            depth_gain: 20.0,
            depth_offset: 5.0,
        }
    }
}

impl GestureConfig {
    pub fn with_pinch_threshold(mut self, threshold: f32) -> Self {
        self.pinch_threshold = threshold;
        self
    }

    pub fn with_deadzone(mut self, low: f32, high: f32) -> Self {
        self.deadzone_low = low;
        self.deadzone_high = high;
        self
    }

    pub fn with_mirror(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }
}
