//! Gesture-driven scene state
//!
//! The scene reads the most recent [`GestureEvent`] on its own tick and
//! applies it to an orbit camera, a breathing particle tree, a hand cursor,
//! the tree-top star and pinch-triggered firework bursts. It produces
//! instance data for a renderer but does no rendering itself.

pub mod burst;
pub mod camera;
pub mod inbox;
pub mod instance;
pub mod particles;

pub use burst::{Burst, BurstConfig};
pub use camera::{Camera, OrbitRig};
pub use inbox::GestureInbox;
pub use instance::{as_bytes, ParticleInstance};
pub use particles::{Particle, ParticleConfig, ParticleField};

use glam::{Vec3, Vec4};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::dynamics::ease_toward;
use crate::gesture::GestureEvent;

const STAR_POSITION: Vec3 = Vec3::new(0.0, 8.0, 0.0);
const STAR_SIZE: f32 = 0.5;
const STAR_IDLE: Vec4 = Vec4::new(1.0, 1.0, 0.0, 1.0);
const STAR_PINCH: Vec4 = Vec4::new(1.0, 0.0, 1.0, 1.0);
const CURSOR_SIZE: f32 = 0.3;
const CURSOR_COLOR: Vec4 = Vec4::new(0.0, 1.0, 1.0, 1.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    /// Azimuth change per tick per unit of rotation speed, radians.
    pub rotate_gain: f32,
    pub zoom_gain: f32,
    /// Fraction of the way the radius moves toward its target per tick.
    pub zoom_ease: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub breathing_gain: f32,
    pub breathing_ease: f32,
    pub min_breathing: f32,
    pub max_breathing: f32,
    /// Fraction of the way the cursor moves toward the hand per tick.
    pub cursor_ease: f32,
    /// Seconds an event keeps driving the scene without a newer one.
    pub event_hold: f32,
    /// Ticks that must pass between two bursts.
    pub burst_cooldown_ticks: u64,
    pub seed: u64,
    pub particles: ParticleConfig,
    pub bursts: BurstConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            rotate_gain: 0.02,
            zoom_gain: 10.0,
            zoom_ease: 0.1,
            min_radius: 5.0,
            max_radius: 30.0,
            breathing_gain: 0.6,
            breathing_ease: 0.05,
            min_breathing: 0.6,
            max_breathing: 1.4,
            cursor_ease: 0.35,
            event_hold: 0.2,
            burst_cooldown_ticks: 30,
            seed: 0x5eed,
            particles: ParticleConfig::default(),
            bursts: BurstConfig::default(),
        }
    }
}

impl SceneConfig {
    pub fn with_radius_limits(mut self, min: f32, max: f32) -> Self {
        self.min_radius = min;
        self.max_radius = max;
        self
    }

    pub fn with_burst_cooldown(mut self, ticks: u64) -> Self {
        self.burst_cooldown_ticks = ticks;
        self
    }

    pub fn with_event_hold(mut self, seconds: f32) -> Self {
        self.event_hold = seconds;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_particles(mut self, particles: ParticleConfig) -> Self {
        self.particles = particles;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SceneStats {
    pub ticks: u64,
    pub bursts_spawned: u64,
    pub bursts_suppressed: u64,
}

pub struct Scene {
    config: SceneConfig,
    camera: Camera,
    rig: OrbitRig,
    inbox: GestureInbox,
    field: ParticleField,
    bursts: Vec<Burst>,
    burst_rng: SmallRng,
    breathing: f32,
    cursor: Vec3,
    cursor_visible: bool,
    star_color: Vec4,
    last_burst_tick: Option<u64>,
    stats: SceneStats,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Self {
        let rig = OrbitRig::default().with_radius_limits(config.min_radius, config.max_radius);
        let mut camera = Camera::default();
        rig.update_camera(&mut camera);

        Self {
            camera,
            rig,
            inbox: GestureInbox::new(config.event_hold),
            field: ParticleField::new(config.particles, config.seed),
            bursts: Vec::new(),
            burst_rng: SmallRng::seed_from_u64(config.seed.wrapping_add(1)),
            breathing: 1.0,
            cursor: Vec3::ZERO,
            cursor_visible: false,
            star_color: STAR_IDLE,
            last_burst_tick: None,
            stats: SceneStats::default(),
            config,
        }
    }

    /// Hands the scene a new gesture snapshot; it takes effect on the next
    /// [`tick`](Scene::tick).
    pub fn push(&mut self, event: GestureEvent) {
        self.inbox.push(event);
    }

    pub fn tick(&mut self, dt: f32) {
        self.stats.ticks += 1;

        match self.inbox.fresh().copied() {
            Some(event) => self.apply(&event),
            None => {
                self.cursor_visible = false;
                self.star_color = STAR_IDLE;
            }
        }
        if let Some(origin) = self.inbox.take_trigger() {
            self.try_burst(origin);
        }
        self.inbox.advance(dt);

        self.field.tick(dt, self.breathing);
        for burst in &mut self.bursts {
            burst.tick(dt);
        }
        self.bursts.retain(|b| !b.is_finished());

        self.rig.update_camera(&mut self.camera);
    }

    fn apply(&mut self, event: &GestureEvent) {
        let cfg = &self.config;

        self.rig.rotate(event.rotation_speed * cfg.rotate_gain);
        self.rig
            .ease_radius(self.rig.radius - event.zoom * cfg.zoom_gain, cfg.zoom_ease);

        let target = 1.0 + (event.openness - 0.5) * cfg.breathing_gain;
        self.breathing = ease_toward(self.breathing, target, cfg.breathing_ease)
            .clamp(cfg.min_breathing, cfg.max_breathing);

        // A hand that just appeared places the cursor directly.
        self.cursor = if self.cursor_visible {
            ease_toward(self.cursor, event.position, cfg.cursor_ease)
        } else {
            event.position
        };
        self.cursor_visible = true;

        self.star_color = if event.pinching { STAR_PINCH } else { STAR_IDLE };
    }

    fn try_burst(&mut self, origin: Vec3) {
        let now = self.stats.ticks;
        let cooled = self
            .last_burst_tick
            .map_or(true, |last| now - last >= self.config.burst_cooldown_ticks);
        if !cooled {
            self.stats.bursts_suppressed += 1;
            log::trace!("burst at {:?} suppressed by cooldown", origin);
            return;
        }

        let serial = self.stats.bursts_spawned as usize;
        let burst = Burst::new(origin, serial, &self.config.bursts, &mut self.burst_rng);
        log::debug!("burst #{} at {:?}", serial, origin);
        self.bursts.push(burst);
        self.last_burst_tick = Some(now);
        self.stats.bursts_spawned += 1;
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.camera.set_aspect(aspect);
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn rig(&self) -> &OrbitRig {
        &self.rig
    }

    pub fn breathing(&self) -> f32 {
        self.breathing
    }

    pub fn cursor(&self) -> Option<Vec3> {
        self.cursor_visible.then_some(self.cursor)
    }

    pub fn star_color(&self) -> Vec4 {
        self.star_color
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn bursts(&self) -> &[Burst] {
        &self.bursts
    }

    pub fn inbox(&self) -> &GestureInbox {
        &self.inbox
    }

    pub fn stats(&self) -> SceneStats {
        self.stats
    }

    /// Replaces `out` with every drawable billboard: tree particles, burst
    /// particles, the star and, while a hand is tracked, the cursor.
    pub fn write_instances(&self, out: &mut Vec<ParticleInstance>) {
        out.clear();
        self.field.write_instances(out);
        for burst in &self.bursts {
            burst.write_instances(out);
        }
        out.push(ParticleInstance::new(STAR_POSITION, STAR_SIZE, self.star_color));
        if let Some(cursor) = self.cursor() {
            out.push(ParticleInstance::new(cursor, CURSOR_SIZE, CURSOR_COLOR));
        }
    }
}
