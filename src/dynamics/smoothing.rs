use super::Blend;

/// Moves `current` a fraction `factor` of the way toward `target`.
pub fn ease_toward<T: Blend>(current: T, target: T, factor: f32) -> T {
    current + (target - current) * factor
}

/// Exponential moving average with a fixed per-sample coefficient.
///
/// Holding the input at `d` for `n` samples from zero yields
/// `d * (1 - (1 - alpha)^n)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LowPass<T: Blend> {
    value: T,
}

impl<T: Blend> LowPass<T> {
    pub fn new(initial: T) -> Self {
        Self { value: initial }
    }

    pub fn update(&mut self, sample: T, alpha: f32) -> T {
        self.value = ease_toward(self.value, sample, alpha);
        self.value
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn reset(&mut self, value: T) {
        self.value = value;
    }
}

impl<T: Blend + Default> Default for LowPass<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Reports `true` only on the sample where the input goes from low to high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RisingEdge {
    last: bool,
}

impl RisingEdge {
    pub fn update(&mut self, level: bool) -> bool {
        let rose = level && !self.last;
        self.last = level;
        rose
    }

    pub fn last(&self) -> bool {
        self.last
    }
}

/// Difference between consecutive samples of a signal that may drop out.
///
/// After [`FrameDelta::clear`] the next sample produces no delta, it only
/// re-seeds the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameDelta {
    previous: Option<f32>,
}

impl FrameDelta {
    pub fn update(&mut self, sample: f32) -> Option<f32> {
        let delta = self.previous.map(|prev| sample - prev);
        self.previous = Some(sample);
        delta
    }

    pub fn clear(&mut self) {
        self.previous = None;
    }

    pub fn previous(&self) -> Option<f32> {
        self.previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn low_pass_converges_geometrically() {
        let mut filter = LowPass::new(0.0_f32);
        let d = 0.7;
        for n in 1..=40 {
            let v = filter.update(d, 0.1);
            let expected = d * (1.0 - 0.9_f32.powi(n));
            assert!((v - expected).abs() < 1e-5, "n={} got {} want {}", n, v, expected);
        }
    }

    #[test]
    fn ease_toward_vec3() {
        let v = ease_toward(Vec3::ZERO, Vec3::new(10.0, -10.0, 4.0), 0.25);
        assert_eq!(v, Vec3::new(2.5, -2.5, 1.0));
    }

    #[test]
    fn rising_edge_ignores_sustained_level() {
        let mut edge = RisingEdge::default();
        let levels = [false, true, true, true, false, true, false, false, true];
        let fired: Vec<bool> = levels.iter().map(|&l| edge.update(l)).collect();
        assert_eq!(
            fired,
            vec![false, true, false, false, false, true, false, false, true]
        );
    }

    #[test]
    fn frame_delta_reseeds_after_clear() {
        let mut delta = FrameDelta::default();
        assert_eq!(delta.update(0.2), None);
        assert!((delta.update(0.5).unwrap() - 0.3).abs() < 1e-6);
        delta.clear();
        assert_eq!(delta.previous(), None);
        assert_eq!(delta.update(0.9), None);
        assert_eq!(delta.previous(), Some(0.9));
    }
}
