use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::pose::HandPose;
use crate::hand::{HandFrame, HandLandmarks, Landmark};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Track {
    from: HandPose,
    to: HandPose,
}

impl Track {
    fn at(&self, t: f32) -> HandPose {
        self.from.lerp(&self.to, t)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Segment {
    frames: u32,
    primary: Option<Track>,
    secondary: Option<Track>,
}

/// A scripted hand-tracking session: a list of segments, each a number of
/// frames over which zero, one or two hands move linearly between poses.
#[derive(Debug, Clone, Default)]
pub struct Script {
    segments: Vec<Segment>,
    jitter: Option<(f32, u64)>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames where no hand is visible.
    pub fn absent(mut self, frames: u32) -> Self {
        self.segments.push(Segment {
            frames,
            primary: None,
            secondary: None,
        });
        self
    }

    pub fn hold(self, pose: HandPose, frames: u32) -> Self {
        self.sweep(pose, pose, frames)
    }

    pub fn sweep(mut self, from: HandPose, to: HandPose, frames: u32) -> Self {
        self.segments.push(Segment {
            frames,
            primary: Some(Track { from, to }),
            secondary: None,
        });
        self
    }

    /// Two hands, each moving between its own pair of poses.
    pub fn both(mut self, primary: (HandPose, HandPose), secondary: (HandPose, HandPose), frames: u32) -> Self {
        self.segments.push(Segment {
            frames,
            primary: Some(Track {
                from: primary.0,
                to: primary.1,
            }),
            secondary: Some(Track {
                from: secondary.0,
                to: secondary.1,
            }),
        });
        self
    }

    /// Adds uniform noise of `amplitude` to every landmark coordinate,
    /// reproducible for a given `seed`.
    pub fn with_jitter(mut self, amplitude: f32, seed: u64) -> Self {
        self.jitter = Some((amplitude, seed));
        self
    }

    pub fn frame_count(&self) -> u64 {
        self.segments.iter().map(|s| s.frames as u64).sum()
    }

    /// Canned session exercising every gesture: idle, rotate both ways,
    /// open and close, two pinches, a two-hand spread, then losing the hand.
    pub fn demo() -> Self {
        let center = HandPose::at_cursor(Vec2::new(0.5, 0.45));
        let left = HandPose::at_cursor(Vec2::new(0.15, 0.45));
        let right = HandPose::at_cursor(Vec2::new(0.85, 0.45));
        let closed = center.with_openness(0.0);
        let open = center.with_openness(1.0);

        let palm = |x: f32| HandPose::at_cursor(Vec2::new(x, 0.5)).with_openness(0.2);

        Self::new()
            .absent(30)
            .sweep(center, left, 60)
            .hold(left, 60)
            .sweep(left, right, 90)
            .hold(right, 60)
            .sweep(right, center, 45)
            .sweep(closed, open, 90)
            .sweep(open, closed, 90)
            .hold(center, 20)
            .hold(center.pinching(), 15)
            .hold(center, 20)
            .hold(center.pinching(), 15)
            .hold(center, 20)
            .both((palm(0.4), palm(0.15)), (palm(0.6), palm(0.85)), 60)
            .both((palm(0.15), palm(0.4)), (palm(0.85), palm(0.6)), 60)
            .hold(center, 30)
            .absent(30)
    }

    pub fn frames(&self) -> ScriptFrames {
        ScriptFrames {
            segments: self.segments.clone(),
            segment: 0,
            step: 0,
            jitter: self
                .jitter
                .map(|(amplitude, seed)| (amplitude, SmallRng::seed_from_u64(seed))),
        }
    }
}

impl IntoIterator for Script {
    type Item = HandFrame;
    type IntoIter = ScriptFrames;

    fn into_iter(self) -> ScriptFrames {
        self.frames()
    }
}

/// Frame iterator over a [`Script`].
pub struct ScriptFrames {
    segments: Vec<Segment>,
    segment: usize,
    step: u32,
    jitter: Option<(f32, SmallRng)>,
}

impl ScriptFrames {
    fn render(&mut self, track: Option<Track>, t: f32) -> Option<HandLandmarks> {
        let hand = track?.at(t).landmarks();
        Some(match &mut self.jitter {
            Some((amplitude, rng)) if *amplitude > 0.0 => {
                let a = *amplitude;
                hand.map_points(|p| {
                    Landmark::with_depth(p.x + rng.gen_range(-a..a), p.y + rng.gen_range(-a..a), p.z)
                })
            }
            _ => hand,
        })
    }
}

impl Iterator for ScriptFrames {
    type Item = HandFrame;

    fn next(&mut self) -> Option<HandFrame> {
        loop {
            let segment = *self.segments.get(self.segment)?;
            if self.step >= segment.frames {
                self.segment += 1;
                self.step = 0;
                continue;
            }

            let t = if segment.frames > 1 {
                self.step as f32 / (segment.frames - 1) as f32
            } else {
                0.0
            };
            self.step += 1;

            let hands: Vec<HandLandmarks> = [segment.primary, segment.secondary]
                .into_iter()
                .filter_map(|track| self.render(track, t))
                .collect();
            // At most two tracks per segment, so this cannot fail.
            return Some(HandFrame::new(hands).unwrap_or_default());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_every_scripted_frame() {
        let script = Script::new()
            .absent(3)
            .hold(HandPose::default(), 4)
            .both((HandPose::default(), HandPose::default()), (HandPose::default(), HandPose::default()), 2);
        assert_eq!(script.frame_count(), 9);
        let counts: Vec<usize> = script.frames().map(|f| f.hand_count()).collect();
        assert_eq!(counts, vec![0, 0, 0, 1, 1, 1, 1, 2, 2]);
    }

    #[test]
    fn sweep_hits_both_ends() {
        let from = HandPose::at_cursor(Vec2::new(0.1, 0.5));
        let to = HandPose::at_cursor(Vec2::new(0.9, 0.5));
        let frames: Vec<HandFrame> = Script::new().sweep(from, to, 5).into_iter().collect();
        let first = frames[0].primary().unwrap().get(crate::hand::LandmarkId::IndexTip);
        let last = frames[4].primary().unwrap().get(crate::hand::LandmarkId::IndexTip);
        assert!((first.x - 0.9).abs() < 1e-5);
        assert!((last.x - 0.1).abs() < 1e-5);
    }

    #[test]
    fn jitter_is_reproducible() {
        let script = Script::new().hold(HandPose::default(), 3).with_jitter(0.004, 7);
        let a: Vec<HandFrame> = script.frames().collect();
        let b: Vec<HandFrame> = script.frames().collect();
        assert_eq!(a, b);
        assert_ne!(a[0], a[1]);
    }

    #[test]
    fn zero_length_segments_are_skipped() {
        let script = Script::new().absent(0).hold(HandPose::default(), 1).absent(0);
        assert_eq!(script.frames().count(), 1);
    }
}
