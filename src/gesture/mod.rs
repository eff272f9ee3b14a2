//! Gesture interpretation
//!
//! Per frame, the primary hand drives a mirrored cursor, a rotation speed
//! with a central deadzone, an openness-based zoom and pinch detection. A
//! second hand switches zoom to the change in distance between the palms.
//! Smoothing memory lives in an explicit [`GestureState`].

pub mod config;
pub mod event;
pub mod interpreter;
pub mod state;
pub mod stream;

pub use config::GestureConfig;
pub use event::{GestureEvent, GestureKind};
pub use interpreter::GestureInterpreter;
pub use state::GestureState;
pub use stream::{GestureFrames, GestureStream};
