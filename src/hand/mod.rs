//! Hand tracker input types
//!
//! Landmarks follow the MediaPipe hand model: 21 points per hand in
//! normalized image coordinates, origin top-left.

mod frame;
mod landmark;

pub use frame::{HandFrame, MAX_HANDS};
pub use landmark::{HandLandmarks, Landmark, LandmarkId, LANDMARK_COUNT};
