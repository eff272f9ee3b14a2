use glam::{Vec2, Vec3};

/// Maps `x` to zero inside `[low, high]` and ramps linearly with slope
/// `gain` from the nearest edge outside it.
pub fn deadzone(x: f32, low: f32, high: f32, gain: f32) -> f32 {
    if x < low {
        (x - low) * gain
    } else if x > high {
        (x - high) * gain
    } else {
        0.0
    }
}

/// `(value - min) / span`, clamped to `[0, 1]`.
pub fn normalize_clamped(value: f32, min: f32, span: f32) -> f32 {
    ((value - min) / span).clamp(0.0, 1.0)
}

/// Flips normalized image x so the cursor moves like a mirror image.
pub fn mirror_x(point: Vec2) -> Vec2 {
    Vec2::new(1.0 - point.x, point.y)
}

/// Affine remap from a normalized cursor plus a depth proxy into world
/// units centered on the origin, y up.
pub fn unit_to_world(cursor: Vec2, depth_proxy: f32, scale: f32, depth_gain: f32, depth_offset: f32) -> Vec3 {
    Vec3::new(
        (cursor.x - 0.5) * scale,
        (0.5 - cursor.y) * scale,
        depth_proxy * depth_gain - depth_offset,
    )
}
