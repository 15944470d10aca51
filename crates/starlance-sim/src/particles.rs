//! Particle store — thruster exhaust and explosion flashes.
//!
//! Plain contiguous storage with an explicit compaction pass after
//! integration; nothing is removed mid-iteration.

use glam::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starlance_core::components::Particle;
use starlance_core::constants::*;
use starlance_core::types::Color;

use crate::world_setup::random_direction;

#[derive(Debug, Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
}

impl ParticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Two exhaust particles, symmetric about the ship's tail.
    pub fn emit_thruster_pair(&mut self, ship_pos: Vec3, color: Color, rng: &mut ChaCha8Rng) {
        for side in [-1.0, 1.0] {
            self.particles.push(Particle {
                position: ship_pos + Vec3::new(side * THRUSTER_OFFSET_X, 0.0, -2.2),
                velocity: Vec3::new(
                    rng.gen_range(-0.15..0.15),
                    rng.gen_range(-0.05..0.1),
                    -0.9,
                ),
                life: THRUSTER_LIFE_MS,
                max_life: THRUSTER_LIFE_MS,
                color,
            });
        }
    }

    /// Radial burst at an impact or kill site.
    pub fn emit_explosion(&mut self, origin: Vec3, color: Color, rng: &mut ChaCha8Rng) {
        for _ in 0..EXPLOSION_PARTICLES {
            let speed = rng.gen_range(0.2..EXPLOSION_SPEED_MAX);
            let life = rng.gen_range(EXPLOSION_LIFE_MIN_MS..EXPLOSION_LIFE_MAX_MS);
            let heat = rng.gen_range(0.0..0.6);
            self.particles.push(Particle {
                position: origin,
                velocity: random_direction(rng) * speed,
                life,
                max_life: life,
                color: color.lerp(Color::rgb(1.0, 1.0, 1.0), heat),
            });
        }
    }

    /// Integrate positions, age lifetimes, then compact.
    pub fn integrate(&mut self, dt_ms: f32, dtf: f32) {
        for p in &mut self.particles {
            p.position += p.velocity * dtf;
            p.life -= dt_ms;
        }
        self.particles.retain(|p| p.life > 0.0);
    }
}
