use glam::{Vec3, Vec4};
use rand::Rng;
use std::f32::consts::TAU;

use super::instance::ParticleInstance;
use super::particles::{sample_between, Particle};

const PALETTE: [Vec4; 5] = [
    Vec4::new(1.0, 0.84, 0.0, 1.0),
    Vec4::new(1.0, 0.2, 0.2, 1.0),
    Vec4::new(0.0, 1.0, 1.0, 1.0),
    Vec4::new(1.0, 0.0, 1.0, 1.0),
    Vec4::new(0.2, 1.0, 0.3, 1.0),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstConfig {
    pub particles: usize,
    pub min_power: f32,
    pub max_power: f32,
    pub min_lifetime: f32,
    pub max_lifetime: f32,
    pub min_size: f32,
    pub max_size: f32,
    /// Scene seconds after which the whole burst is dropped.
    pub dispose_after: f32,
    pub color_end: Vec4,
    pub color_dead: Vec4,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            particles: 100,
            min_power: 5.0,
            max_power: 10.0,
            min_lifetime: 0.5,
            max_lifetime: 1.0,
            min_size: 0.2,
            max_size: 0.5,
            dispose_after: 1.5,
            color_end: Vec4::ONE,
            color_dead: Vec4::ZERO,
        }
    }
}

/// One-shot firework: every particle is emitted at once from `origin`.
#[derive(Debug, Clone)]
pub struct Burst {
    pub origin: Vec3,
    pub color: Vec4,
    age: f32,
    dispose_after: f32,
    color_dead: Vec4,
    particles: Vec<Particle>,
}

impl Burst {
    pub fn new<R: Rng>(origin: Vec3, serial: usize, config: &BurstConfig, rng: &mut R) -> Self {
        let color = PALETTE[serial % PALETTE.len()];
        let particles = (0..config.particles)
            .map(|_| {
                let direction = random_direction(rng);
                Particle {
                    position: origin,
                    velocity: direction * sample_between(rng, config.min_power, config.max_power),
                    age: 0.0,
                    lifetime: sample_between(rng, config.min_lifetime, config.max_lifetime),
                    size: sample_between(rng, config.min_size, config.max_size),
                    color: color.lerp(config.color_end, rng.gen::<f32>()),
                }
            })
            .collect();
        Self {
            origin,
            color,
            age: 0.0,
            dispose_after: config.dispose_after,
            color_dead: config.color_dead,
            particles,
        }
    }

    pub fn age(&self) -> f32 {
        self.age
    }

    pub fn is_finished(&self) -> bool {
        self.age >= self.dispose_after
    }

    pub fn live_particles(&self) -> impl Iterator<Item = &Particle> + '_ {
        self.particles.iter().filter(|p| p.is_alive())
    }

    pub fn tick(&mut self, dt: f32) {
        self.age += dt;
        for particle in &mut self.particles {
            particle.age += dt;
            particle.position += particle.velocity * dt;
        }
    }

    pub fn write_instances(&self, out: &mut Vec<ParticleInstance>) {
        out.extend(self.live_particles().map(|p| p.instance(self.color_dead)));
    }
}

/// Uniform direction on the unit sphere.
fn random_direction<R: Rng>(rng: &mut R) -> Vec3 {
    let z: f32 = rng.gen_range(-1.0..=1.0);
    let angle = rng.gen::<f32>() * TAU;
    let r = (1.0 - z * z).max(0.0).sqrt();
    Vec3::new(r * angle.cos(), r * angle.sin(), z)
}
