use glam::Vec3;

use crate::gesture::GestureEvent;

/// Latest-value mailbox between gesture delivery and the render tick.
///
/// Continuous controls are read from the most recent event; pinch triggers
/// are latched so a trigger is seen exactly once no matter how delivery and
/// render rates line up.
#[derive(Debug, Clone, Default)]
pub struct GestureInbox {
    latest: Option<GestureEvent>,
    age: f32,
    hold: f32,
    pending_burst: Option<Vec3>,
    received: u64,
}

impl GestureInbox {
    /// `hold` is how long, in seconds, an event keeps driving the scene
    /// after it arrived.
    pub fn new(hold: f32) -> Self {
        Self {
            hold,
            ..Default::default()
        }
    }

    pub fn push(&mut self, event: GestureEvent) {
        if event.pinch_triggered {
            self.pending_burst = Some(event.position);
        }
        self.latest = Some(event);
        self.age = 0.0;
        self.received += 1;
    }

    pub fn fresh(&self) -> Option<&GestureEvent> {
        self.latest.as_ref().filter(|_| self.age <= self.hold)
    }

    pub fn latest(&self) -> Option<&GestureEvent> {
        self.latest.as_ref()
    }

    pub fn take_trigger(&mut self) -> Option<Vec3> {
        self.pending_burst.take()
    }

    pub fn advance(&mut self, dt: f32) {
        self.age += dt;
    }

    pub fn received(&self) -> u64 {
        self.received
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::{GestureInterpreter, GestureState};
    use crate::hand::HandFrame;
    use crate::source::HandPose;

    fn event(pose: HandPose, state: &mut GestureState) -> GestureEvent {
        GestureInterpreter::default()
            .process(&HandFrame::single(pose.landmarks()), state)
            .unwrap()
    }

    #[test]
    fn events_go_stale_after_hold() {
        let mut state = GestureState::default();
        let mut inbox = GestureInbox::new(0.2);
        inbox.push(event(HandPose::default(), &mut state));
        inbox.advance(0.1);
        assert!(inbox.fresh().is_some());
        inbox.advance(0.15);
        assert!(inbox.fresh().is_none());
        assert!(inbox.latest().is_some());
    }

    #[test]
    fn trigger_survives_later_events_until_taken() {
        let mut state = GestureState::default();
        let mut inbox = GestureInbox::new(0.2);
        inbox.push(event(HandPose::default().pinching(), &mut state));
        inbox.push(event(HandPose::default().pinching(), &mut state));
        assert_eq!(inbox.received(), 2);
        assert!(inbox.take_trigger().is_some());
        assert!(inbox.take_trigger().is_none());
    }
}
