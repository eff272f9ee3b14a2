use glam::{Quat, Vec3, Vec4};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

use super::instance::ParticleInstance;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub age: f32,
    pub lifetime: f32,
    pub size: f32,
    pub color: Vec4,
}

/// Uniform sample between two bounds given in either order.
pub(crate) fn sample_between<R: Rng>(rng: &mut R, a: f32, b: f32) -> f32 {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    rng.gen_range(low..=high)
}

impl Particle {
    pub fn is_alive(&self) -> bool {
        self.age < self.lifetime
    }

    /// Color faded toward `dead` by the fraction of life used up.
    pub fn faded_color(&self, dead: Vec4) -> Vec4 {
        let t = (self.age / self.lifetime.max(f32::EPSILON)).clamp(0.0, 1.0);
        self.color.lerp(dead, t)
    }

    pub fn instance(&self, dead: Vec4) -> ParticleInstance {
        ParticleInstance::new(self.position, self.size, self.faded_color(dead))
    }
}

/// Emitter settings for the cone-shaped tree of particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleConfig {
    pub capacity: usize,
    /// Particles per second.
    pub emit_rate: f32,
    pub min_lifetime: f32,
    pub max_lifetime: f32,
    pub min_size: f32,
    pub max_size: f32,
    pub height: f32,
    /// Cone radius at the base, before breathing is applied.
    pub base_radius: f32,
    /// Rotation around Y applied to every live particle each tick.
    pub swirl_per_tick: f32,
    pub color_a: Vec4,
    pub color_b: Vec4,
    pub color_dead: Vec4,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            capacity: 2000,
            emit_rate: 300.0,
            min_lifetime: 2.0,
            max_lifetime: 5.0,
            min_size: 0.1,
            max_size: 0.3,
            height: 8.0,
            base_radius: 3.0,
            swirl_per_tick: 0.01,
            color_a: Vec4::new(0.1, 0.8, 0.1, 1.0),
            color_b: Vec4::new(0.8, 0.1, 0.1, 1.0),
            color_dead: Vec4::new(0.0, 0.0, 0.2, 0.0),
        }
    }
}

impl ParticleConfig {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_emit_rate(mut self, rate: f32) -> Self {
        self.emit_rate = rate.max(0.0);
        self
    }
}

/// Continuously emitting particle cone that swirls around the Y axis.
pub struct ParticleField {
    config: ParticleConfig,
    particles: Vec<Particle>,
    pending: f32,
    rng: SmallRng,
}

impl ParticleField {
    pub fn new(config: ParticleConfig, seed: u64) -> Self {
        Self {
            particles: Vec::with_capacity(config.capacity),
            config,
            pending: 0.0,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Spawn point inside the cone: radius shrinks linearly to zero at the
    /// top and is scaled by `breathing`.
    fn spawn_position(&mut self, breathing: f32) -> Vec3 {
        let cfg = &self.config;
        let height = self.rng.gen::<f32>() * cfg.height;
        let max_radius = cfg.base_radius * (1.0 - height / cfg.height);
        let radius = self.rng.gen::<f32>() * max_radius * breathing;
        let angle = self.rng.gen::<f32>() * TAU;
        Vec3::new(radius * angle.cos(), height, radius * angle.sin())
    }

    fn spawn(&mut self, breathing: f32) -> Particle {
        let position = self.spawn_position(breathing);
        let cfg = self.config;
        Particle {
            position,
            velocity: Vec3::ZERO,
            age: 0.0,
            lifetime: sample_between(&mut self.rng, cfg.min_lifetime, cfg.max_lifetime),
            size: sample_between(&mut self.rng, cfg.min_size, cfg.max_size),
            color: cfg.color_a.lerp(cfg.color_b, self.rng.gen::<f32>()),
        }
    }

    pub fn tick(&mut self, dt: f32, breathing: f32) {
        let swirl = Quat::from_rotation_y(self.config.swirl_per_tick);
        for particle in &mut self.particles {
            particle.age += dt;
            particle.position = swirl * particle.position;
        }
        self.particles.retain(Particle::is_alive);

        self.pending += self.config.emit_rate * dt;
        let room = self.config.capacity - self.particles.len();
        let count = (self.pending.floor() as usize).min(room);
        self.pending -= self.pending.floor();
        for _ in 0..count {
            let particle = self.spawn(breathing);
            self.particles.push(particle);
        }
    }

    pub fn write_instances(&self, out: &mut Vec<ParticleInstance>) {
        let dead = self.config.color_dead;
        out.extend(self.particles.iter().map(|p| p.instance(dead)));
    }
}
