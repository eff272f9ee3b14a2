use super::config::GestureConfig;
use super::event::{GestureEvent, GestureKind};
use super::state::GestureState;
use crate::hand::{HandFrame, LandmarkId};
use crate::math::{deadzone, mirror_x, normalize_clamped, unit_to_world};

/// Turns hand landmark frames into [`GestureEvent`]s.
///
/// The interpreter itself is immutable; everything that carries over
/// between frames lives in the [`GestureState`] handed to [`process`].
///
/// [`process`]: GestureInterpreter::process
#[derive(Debug, Clone, Copy, Default)]
pub struct GestureInterpreter {
    config: GestureConfig,
}

impl GestureInterpreter {
    pub fn new(config: GestureConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Interprets one frame. Returns `None` and leaves `state` untouched
    /// when the frame has no hands.
    pub fn process(&self, frame: &HandFrame, state: &mut GestureState) -> Option<GestureEvent> {
        let hand = frame.primary()?;
        let cfg = &self.config;

        let hand_span = hand.distance(LandmarkId::Wrist, LandmarkId::PALM_CENTER);

        let pinch_distance = hand.distance(LandmarkId::IndexTip, LandmarkId::ThumbTip);
        let pinching = pinch_distance < cfg.pinch_threshold;

        let two_hands_zoom = match frame.both() {
            Some((first, second)) => {
                let distance = first.palm_center().planar_distance(&second.palm_center());
                state
                    .two_hands_distance
                    .update(distance)
                    .map(|change| change * cfg.two_hand_zoom_gain)
            }
            None => {
                state.two_hands_distance.clear();
                None
            }
        };

        let openness = normalize_clamped(
            hand.distance(LandmarkId::ThumbTip, LandmarkId::PinkyTip),
            cfg.openness_min,
            cfg.openness_span,
        );

        let tip = hand[LandmarkId::IndexTip].xy();
        let cursor = if cfg.mirror { mirror_x(tip) } else { tip };

        let rotation_speed = deadzone(cursor.x, cfg.deadzone_low, cfg.deadzone_high, cfg.rotation_gain);

        let zoom_delta = two_hands_zoom.unwrap_or((openness - 0.5) * cfg.openness_zoom_gain);
        let zoom = state.zoom.update(zoom_delta, cfg.zoom_smoothing);

        let pinch_triggered = state.pinch.update(pinching);
        if pinch_triggered {
            log::debug!("pinch at ({:.3}, {:.3})", cursor.x, cursor.y);
        }

        let event = GestureEvent {
            cursor,
            rotation_speed,
            zoom,
            openness,
            pinching,
            pinch_triggered,
            kind: if pinching { GestureKind::Pinch } else { GestureKind::Open },
            hand_span,
            hand_count: frame.hand_count(),
            position: unit_to_world(cursor, hand_span, cfg.world_scale, cfg.depth_gain, cfg.depth_offset),
        };
        log::trace!("{:?}", event);
        Some(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::{HandLandmarks, Landmark, LANDMARK_COUNT};

    /// A hand with every point at the image center except the overrides.
    fn hand(overrides: &[(LandmarkId, (f32, f32))]) -> HandLandmarks {
        let mut points = [Landmark::new(0.5, 0.5); LANDMARK_COUNT];
        for &(id, (x, y)) in overrides {
            points[id.index()] = Landmark::new(x, y);
        }
        HandLandmarks::new(points)
    }

    /// Open hand with the index tip at `(x, y)`; thumb far from index and
    /// pinky so it never pinches and openness is 1.
    fn open_hand_at(x: f32, y: f32) -> HandLandmarks {
        hand(&[
            (LandmarkId::Wrist, (0.5, 0.8)),
            (LandmarkId::MiddleMcp, (0.5, 0.6)),
            (LandmarkId::IndexTip, (x, y)),
            (LandmarkId::ThumbTip, (0.05, 0.95)),
            (LandmarkId::PinkyTip, (0.95, 0.95)),
        ])
    }

    fn pinched_hand() -> HandLandmarks {
        hand(&[
            (LandmarkId::IndexTip, (0.3, 0.5)),
            (LandmarkId::ThumbTip, (0.32, 0.52)),
            (LandmarkId::PinkyTip, (0.4, 0.6)),
        ])
    }

    fn two_hands(spread: f32) -> HandFrame {
        let left = hand(&[(LandmarkId::MiddleMcp, (0.5 - spread / 2.0, 0.5))]);
        let right = hand(&[(LandmarkId::MiddleMcp, (0.5 + spread / 2.0, 0.5))]);
        HandFrame::pair(left, right)
    }

    #[test]
    fn empty_frame_leaves_state_untouched() {
        let interpreter = GestureInterpreter::default();
        let mut state = GestureState::new();
        interpreter.process(&HandFrame::pair(pinched_hand(), pinched_hand()), &mut state);
        interpreter.process(&HandFrame::pair(pinched_hand(), pinched_hand()), &mut state);
        let before = state;

        assert!(interpreter.process(&HandFrame::empty(), &mut state).is_none());
        assert_eq!(state, before);
        assert_eq!(state.smoothed_zoom().to_bits(), before.smoothed_zoom().to_bits());
    }

    #[test]
    fn pinch_scenario() {
        let interpreter = GestureInterpreter::default();
        let mut state = GestureState::new();
        let event = interpreter
            .process(&HandFrame::single(pinched_hand()), &mut state)
            .unwrap();
        assert!(event.pinching);
        assert!(event.pinch_triggered);
        assert_eq!(event.kind, GestureKind::Pinch);
        assert_eq!(event.kind.to_string(), "Pinch");
        assert_eq!(event.hand_count, 1);
    }

    #[test]
    fn mirrored_cursor_left_of_deadzone() {
        let interpreter = GestureInterpreter::default();
        let mut state = GestureState::new();
        // Raw tip x 0.8 mirrors to cursor x 0.2.
        let event = interpreter
            .process(&HandFrame::single(open_hand_at(0.8, 0.5)), &mut state)
            .unwrap();
        assert!((event.cursor.x - 0.2).abs() < 1e-6);
        assert!((event.rotation_speed + 0.4).abs() < 1e-5);
    }

    #[test]
    fn unmirrored_cursor_uses_raw_x() {
        let interpreter = GestureInterpreter::new(GestureConfig::default().with_mirror(false));
        let mut state = GestureState::new();
        let event = interpreter
            .process(&HandFrame::single(open_hand_at(0.2, 0.5)), &mut state)
            .unwrap();
        assert!((event.rotation_speed + 0.4).abs() < 1e-5);
    }

    #[test]
    fn deadzone_holds_camera_still() {
        let interpreter = GestureInterpreter::default();
        let mut state = GestureState::new();
        for raw_x in [0.41, 0.45, 0.5, 0.55, 0.59] {
            let event = interpreter
                .process(&HandFrame::single(open_hand_at(raw_x, 0.5)), &mut state)
                .unwrap();
            assert_eq!(event.rotation_speed, 0.0, "raw x {}", raw_x);
        }
    }

    #[test]
    fn wider_deadzone_from_config() {
        let interpreter = GestureInterpreter::new(GestureConfig::default().with_deadzone(0.3, 0.7));
        let mut state = GestureState::new();
        // Cursor x 0.35 sits inside the widened band.
        let event = interpreter
            .process(&HandFrame::single(open_hand_at(0.65, 0.5)), &mut state)
            .unwrap();
        assert_eq!(event.rotation_speed, 0.0);

        let event = interpreter
            .process(&HandFrame::single(open_hand_at(0.8, 0.5)), &mut state)
            .unwrap();
        assert!((event.rotation_speed + 0.2).abs() < 1e-5);
    }

    #[test]
    fn tighter_pinch_threshold_from_config() {
        let interpreter =
            GestureInterpreter::new(GestureConfig::default().with_pinch_threshold(0.02));
        let mut state = GestureState::new();
        let event = interpreter
            .process(&HandFrame::single(pinched_hand()), &mut state)
            .unwrap();
        assert!(!event.pinching);
        assert!(!event.pinch_triggered);
        assert_eq!(event.kind, GestureKind::Open);
    }

    #[test]
    fn pinch_edge_fires_once_per_engagement() {
        let interpreter = GestureInterpreter::default();
        let mut state = GestureState::new();
        let pattern = [false, true, true, true, false, false, true, false, true, true];
        let triggered: Vec<bool> = pattern
            .iter()
            .map(|&pinch| {
                let hand = if pinch { pinched_hand() } else { open_hand_at(0.5, 0.5) };
                let event = interpreter.process(&HandFrame::single(hand), &mut state).unwrap();
                assert_eq!(event.pinching, pinch);
                event.pinch_triggered
            })
            .collect();
        let expected: Vec<bool> = pattern
            .iter()
            .enumerate()
            .map(|(i, &p)| p && (i == 0 || !pattern[i - 1]))
            .collect();
        assert_eq!(triggered, expected);
    }

    #[test]
    fn constant_openness_zoom_converges() {
        let interpreter = GestureInterpreter::default();
        let mut state = GestureState::new();
        // Fully open hand: openness 1, zoom delta (1 - 0.5) * 0.3.
        let d = 0.15_f32;
        for n in 1..=30 {
            let event = interpreter
                .process(&HandFrame::single(open_hand_at(0.5, 0.5)), &mut state)
                .unwrap();
            assert_eq!(event.openness, 1.0);
            let expected = d * (1.0 - 0.9_f32.powi(n));
            assert!((event.zoom - expected).abs() < 1e-5, "frame {}", n);
        }
    }

    #[test]
    fn two_hand_delta_needs_two_consecutive_frames() {
        let interpreter = GestureInterpreter::default();
        let mut state = GestureState::new();

        interpreter.process(&two_hands(0.2), &mut state).unwrap();
        assert!((state.last_two_hands_distance().unwrap() - 0.2).abs() < 1e-6);
        // First two-hand frame: no delta, zoom comes from openness (closed
        // hands, openness 0, delta -0.15).
        assert!((state.smoothed_zoom() + 0.015).abs() < 1e-6);

        let before = state.smoothed_zoom();
        let event = interpreter.process(&two_hands(0.3), &mut state).unwrap();
        // delta = (0.3 - 0.2) * 10 = 1.0
        let expected = before + (1.0 - before) * 0.1;
        assert!((event.zoom - expected).abs() < 1e-5);
        assert_eq!(event.hand_count, 2);
    }

    #[test]
    fn two_hand_delta_resets_when_second_hand_leaves() {
        let interpreter = GestureInterpreter::default();
        let mut state = GestureState::new();
        interpreter.process(&two_hands(0.2), &mut state);
        interpreter.process(&two_hands(0.3), &mut state);

        interpreter.process(&HandFrame::single(open_hand_at(0.5, 0.5)), &mut state);
        assert_eq!(state.last_two_hands_distance(), None);

        // Re-acquisition only re-seeds.
        let before = state.smoothed_zoom();
        interpreter.process(&two_hands(0.6), &mut state);
        let openness_delta = -0.15;
        let expected = before + (openness_delta - before) * 0.1;
        assert!((state.smoothed_zoom() - expected).abs() < 1e-5);
        assert!((state.last_two_hands_distance().unwrap() - 0.6).abs() < 1e-6);
    }

    #[test]
    fn empty_frame_keeps_two_hand_distance() {
        let interpreter = GestureInterpreter::default();
        let mut state = GestureState::new();
        interpreter.process(&two_hands(0.2), &mut state);
        interpreter.process(&HandFrame::empty(), &mut state);
        assert!(state.last_two_hands_distance().is_some());
    }

    #[test]
    fn position_estimate() {
        let interpreter = GestureInterpreter::default();
        let mut state = GestureState::new();
        // span = 0.2 -> z = 0.2 * 20 - 5 = -1
        let event = interpreter
            .process(&HandFrame::single(open_hand_at(0.5, 0.3)), &mut state)
            .unwrap();
        assert!((event.hand_span - 0.2).abs() < 1e-6);
        assert!(event.position.x.abs() < 1e-5);
        assert!((event.position.y - 2.0).abs() < 1e-5);
        assert!((event.position.z + 1.0).abs() < 1e-4);
    }
}
