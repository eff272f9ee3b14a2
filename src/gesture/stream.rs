use super::event::GestureEvent;
use super::interpreter::GestureInterpreter;
use super::state::GestureState;
use crate::hand::HandFrame;

/// Lazily interprets a sequence of frames, yielding one event per frame
/// that contains hands.
///
/// The stream owns its frame source and state; it ends when the source
/// ends and cannot be restarted.
pub struct GestureStream<I> {
    frames: I,
    interpreter: GestureInterpreter,
    state: GestureState,
    frames_seen: u64,
}

impl<I> GestureStream<I>
where
    I: Iterator<Item = HandFrame>,
{
    pub fn new(frames: I, interpreter: GestureInterpreter) -> Self {
        Self::with_state(frames, interpreter, GestureState::default())
    }

    /// Resumes from previously accumulated state.
    pub fn with_state(frames: I, interpreter: GestureInterpreter, state: GestureState) -> Self {
        Self {
            frames,
            interpreter,
            state,
            frames_seen: 0,
        }
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Frames pulled from the source so far, including empty ones.
    pub fn frames_seen(&self) -> u64 {
        self.frames_seen
    }

    pub fn into_state(self) -> GestureState {
        self.state
    }
}

impl<I> Iterator for GestureStream<I>
where
    I: Iterator<Item = HandFrame>,
{
    type Item = GestureEvent;

    fn next(&mut self) -> Option<GestureEvent> {
        for frame in self.frames.by_ref() {
            self.frames_seen += 1;
            if let Some(event) = self.interpreter.process(&frame, &mut self.state) {
                return Some(event);
            }
        }
        None
    }
}

/// `frames.gestures(interpreter)` for any frame iterator.
pub trait GestureFrames: Iterator<Item = HandFrame> + Sized {
    fn gestures(self, interpreter: GestureInterpreter) -> GestureStream<Self> {
        GestureStream::new(self, interpreter)
    }
}

impl<I: Iterator<Item = HandFrame>> GestureFrames for I {}
