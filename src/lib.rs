//! # gesture-orbit
//!
//! Hand-landmark gesture interpretation driving an orbit camera and a
//! particle "tree" scene.
//!
//! ## Features
//! - Gesture interpreter over 21-point hand landmarks: mirrored cursor,
//!   deadzone rotation, openness and two-hand zoom, pinch edge detection
//! - Explicit, testable smoothing state and a pull-based event stream
//! - Scene state: orbit rig, breathing particle tree, hand cursor, star,
//!   pinch-triggered firework bursts, GPU-ready instance export
//! - Synthetic hand source for camera-free runs
//! - Cross-platform: Native + WASM support
//!
//! ## Example
//! ```rust,ignore
//! use gesture_orbit::gesture::{GestureFrames, GestureInterpreter};
//! use gesture_orbit::scene::{Scene, SceneConfig};
//! use gesture_orbit::source::Script;
//!
//! let mut scene = Scene::new(SceneConfig::default());
//! for event in Script::demo().into_iter().gestures(GestureInterpreter::default()) {
//!     scene.push(event);
//!     scene.tick(1.0 / 60.0);
//! }
//! println!("camera at {:?}", scene.camera().position);
//! ```

pub mod dynamics;
pub mod error;
pub mod gesture;
pub mod hand;
pub mod math;
pub mod scene;
pub mod source;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use dynamics::Blend;
pub use error::{Error, Result};
pub use gesture::{GestureConfig, GestureEvent, GestureInterpreter, GestureKind, GestureState, GestureStream};
pub use hand::{HandFrame, HandLandmarks, Landmark, LandmarkId};
pub use scene::{Scene, SceneConfig};
