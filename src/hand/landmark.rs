use glam::Vec2;
use std::ops::Index;

use crate::error::{Error, Result};

/// Points per hand in the MediaPipe hand model.
pub const LANDMARK_COUNT: usize = 21;

/// A tracked point in normalized image space. `z` is the model's relative
/// depth and stays 0 when the source does not provide one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    pub const fn with_depth(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Distance in the image plane; depth is ignored.
    pub fn planar_distance(&self, other: &Landmark) -> f32 {
        self.xy().distance(other.xy())
    }
}

impl From<Vec2> for Landmark {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LandmarkId {
    Wrist = 0,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexMcp,
    IndexPip,
    IndexDip,
    IndexTip,
    MiddleMcp,
    MiddlePip,
    MiddleDip,
    MiddleTip,
    RingMcp,
    RingPip,
    RingDip,
    RingTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

impl LandmarkId {
    /// The middle-finger knuckle, used as the palm center.
    pub const PALM_CENTER: LandmarkId = LandmarkId::MiddleMcp;

    pub fn index(self) -> usize {
        self as usize
    }
}

/// One detected hand: exactly [`LANDMARK_COUNT`] landmarks in model order.
#[derive(Debug, Clone, PartialEq)]
pub struct HandLandmarks {
    points: [Landmark; LANDMARK_COUNT],
}

impl HandLandmarks {
    pub fn new(points: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    pub fn from_slice(points: &[Landmark]) -> Result<Self> {
        let points: [Landmark; LANDMARK_COUNT] =
            points.try_into().map_err(|_| Error::LandmarkCount {
                expected: LANDMARK_COUNT,
                found: points.len(),
            })?;
        Ok(Self { points })
    }

    /// Builds a hand from `x, y, z` triples.
    pub fn from_xyz(flat: &[f32]) -> Result<Self> {
        if flat.len() != LANDMARK_COUNT * 3 {
            return Err(Error::LandmarkCount {
                expected: LANDMARK_COUNT,
                found: flat.len() / 3,
            });
        }
        let mut points = [Landmark::default(); LANDMARK_COUNT];
        for (point, xyz) in points.iter_mut().zip(flat.chunks_exact(3)) {
            *point = Landmark::with_depth(xyz[0], xyz[1], xyz[2]);
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Landmark] {
        &self.points
    }

    pub fn get(&self, id: LandmarkId) -> Landmark {
        self.points[id.index()]
    }

    pub fn distance(&self, a: LandmarkId, b: LandmarkId) -> f32 {
        self.get(a).planar_distance(&self.get(b))
    }

    pub fn palm_center(&self) -> Landmark {
        self.get(LandmarkId::PALM_CENTER)
    }

    pub fn map_points(&self, mut f: impl FnMut(Landmark) -> Landmark) -> Self {
        let mut points = self.points;
        for p in points.iter_mut() {
            *p = f(*p);
        }
        Self { points }
    }
}

impl Index<LandmarkId> for HandLandmarks {
    type Output = Landmark;

    fn index(&self, id: LandmarkId) -> &Landmark {
        &self.points[id.index()]
    }
}
