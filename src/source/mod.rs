//! Synthetic hand-tracking input
//!
//! Stands in for the camera and pose estimator: [`HandPose`] synthesizes a
//! 21-point hand from a handful of parameters and [`Script`] plays timed
//! sequences of poses as [`HandFrame`](crate::hand::HandFrame)s.

mod pose;
mod script;

pub use pose::HandPose;
pub use script::{Script, ScriptFrames};
