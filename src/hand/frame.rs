use super::landmark::{HandLandmarks, LANDMARK_COUNT};
use crate::error::{Error, Result};

/// Hands the tracker is configured to report per frame.
pub const MAX_HANDS: usize = 2;

/// Everything the hand tracker reported for one video frame.
///
/// Hands are kept in tracker order; the first one is the primary hand.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HandFrame {
    hands: Vec<HandLandmarks>,
}

impl HandFrame {
    pub fn empty() -> Self {
        Self { hands: Vec::new() }
    }

    pub fn new(hands: Vec<HandLandmarks>) -> Result<Self> {
        if hands.len() > MAX_HANDS {
            return Err(Error::TooManyHands {
                max: MAX_HANDS,
                found: hands.len(),
            });
        }
        Ok(Self { hands })
    }

    pub fn single(hand: HandLandmarks) -> Self {
        Self { hands: vec![hand] }
    }

    pub fn pair(primary: HandLandmarks, secondary: HandLandmarks) -> Self {
        Self {
            hands: vec![primary, secondary],
        }
    }

    /// Parses `x, y, z` triples for every landmark of every hand, hands back
    /// to back.
    pub fn from_flat(flat: &[f32]) -> Result<Self> {
        let stride = LANDMARK_COUNT * 3;
        if flat.len() % stride != 0 {
            return Err(Error::FlatBufferLength {
                len: flat.len(),
                stride,
            });
        }
        let hands = flat
            .chunks_exact(stride)
            .map(HandLandmarks::from_xyz)
            .collect::<Result<Vec<_>>>()?;
        Self::new(hands)
    }

    pub fn hands(&self) -> &[HandLandmarks] {
        &self.hands
    }

    pub fn hand_count(&self) -> usize {
        self.hands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    pub fn primary(&self) -> Option<&HandLandmarks> {
        self.hands.first()
    }

    /// Both hands, only when exactly two are present.
    pub fn both(&self) -> Option<(&HandLandmarks, &HandLandmarks)> {
        match self.hands.as_slice() {
            [a, b] => Some((a, b)),
            _ => None,
        }
    }
}
