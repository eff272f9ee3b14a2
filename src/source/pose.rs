use glam::Vec2;

use crate::hand::{HandLandmarks, Landmark, LandmarkId, LANDMARK_COUNT};

// Knuckle offsets from the palm center, in units of hand span.
const INDEX_MCP: Vec2 = Vec2::new(-0.3, 0.0);
const RING_MCP: Vec2 = Vec2::new(0.28, 0.02);
const PINKY_MCP: Vec2 = Vec2::new(0.52, 0.1);

// (length, fan angle at full openness) per finger, index to pinky.
const FINGERS: [(f32, f32); 4] = [(0.95, -0.15), (1.05, 0.0), (0.98, 0.12), (0.8, 0.3)];

const THUMB_TUCKED: Vec2 = Vec2::new(-0.2, 0.1);
const THUMB_SPREAD: Vec2 = Vec2::new(-1.4, -0.15);

/// Offset of the thumb tip from the index tip while pinching, in image units.
const PINCH_GAP: Vec2 = Vec2::new(-0.01, 0.01);

/// Compact description of a hand from which a full 21-point hand is
/// synthesized. Coordinates are raw (unmirrored) image space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandPose {
    /// Where the index fingertip lands; the whole hand is placed around it.
    pub index_tip: Vec2,
    /// Wrist to palm-center distance.
    pub span: f32,
    /// 0 is a loose fist, 1 fingers and thumb fully spread.
    pub openness: f32,
    pub pinch: bool,
}

impl Default for HandPose {
    fn default() -> Self {
        Self {
            index_tip: Vec2::new(0.5, 0.4),
            span: 0.18,
            openness: 0.6,
            pinch: false,
        }
    }
}

impl HandPose {
    /// Pose whose mirrored cursor reads `cursor`.
    pub fn at_cursor(cursor: Vec2) -> Self {
        Self {
            index_tip: Vec2::new(1.0 - cursor.x, cursor.y),
            ..Default::default()
        }
    }

    pub fn with_span(mut self, span: f32) -> Self {
        self.span = span;
        self
    }

    pub fn with_openness(mut self, openness: f32) -> Self {
        self.openness = openness.clamp(0.0, 1.0);
        self
    }

    pub fn pinching(mut self) -> Self {
        self.pinch = true;
        self
    }

    /// Interpolates position, span and openness; the pinch flag switches at
    /// the midpoint.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            index_tip: self.index_tip.lerp(other.index_tip, t),
            span: self.span + (other.span - self.span) * t,
            openness: self.openness + (other.openness - self.openness) * t,
            pinch: if t < 0.5 { self.pinch } else { other.pinch },
        }
    }

    pub fn landmarks(&self) -> HandLandmarks {
        let s = self.span;
        let o = self.openness;
        let extension = 0.35 + 0.65 * o;
        let mut local = [Vec2::ZERO; LANDMARK_COUNT];

        local[LandmarkId::Wrist.index()] = Vec2::new(0.0, s);
        local[LandmarkId::ThumbCmc.index()] = Vec2::new(-0.35, 0.75) * s;
        local[LandmarkId::ThumbMcp.index()] = Vec2::new(-0.6, 0.5) * s;
        local[LandmarkId::ThumbIp.index()] = Vec2::new(-0.8, 0.25) * s;
        local[LandmarkId::ThumbTip.index()] = THUMB_TUCKED.lerp(THUMB_SPREAD, o) * s;

        let knuckles = [INDEX_MCP, Vec2::ZERO, RING_MCP, PINKY_MCP];
        for (finger, (knuckle, (length, fan))) in knuckles.iter().zip(FINGERS).enumerate() {
            let mcp = LandmarkId::IndexMcp.index() + finger * 4;
            let angle = fan * o;
            let dir = Vec2::new(angle.sin(), -angle.cos()) * length * extension;
            local[mcp] = *knuckle * s;
            for (joint, reach) in [0.45, 0.75, 1.0].into_iter().enumerate() {
                local[mcp + 1 + joint] = local[mcp] + dir * reach * s;
            }
        }

        let offset = self.index_tip - local[LandmarkId::IndexTip.index()];
        let mut points = local.map(|p| Landmark::from(p + offset));
        if self.pinch {
            points[LandmarkId::ThumbTip.index()] = Landmark::from(self.index_tip + PINCH_GAP);
        }
        HandLandmarks::new(points)
    }
}
