//! A single animated point: kinematic state, color, age, and size envelope.

use glam::Vec2;
use rand::Rng;

use crate::config::ParticleConfig;
use crate::constants::*;
use crate::surface::{Hsla, Surface};

/// One particle of the field. Replaced in place when its age runs out; the
/// slot (identity) survives the reset.
#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Force accumulator, consumed and cleared by [`Particle::update`].
    pub acceleration: Vec2,
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub alpha: f32,
    pub size: f32,
    pub max_size: f32,
    /// Age in frame ticks.
    pub age: f32,
    pub max_age: f32,
    /// Phase angle driving the slow orbital drift.
    pub angle: f32,
    pub angle_velocity: f32,
}

impl Particle {
    pub fn new(x: f32, y: f32, config: &ParticleConfig, rng: &mut impl Rng) -> Self {
        let size = config.particle_size * rng.gen_range(SIZE_FACTOR_MIN..SIZE_FACTOR_MIN + SIZE_FACTOR_SPAN);
        Self {
            position: Vec2::new(x, y),
            velocity: random_velocity(config.speed, rng),
            acceleration: Vec2::ZERO,
            hue: theme_hue(config, rng),
            saturation: rng.gen_range(SATURATION_MIN..SATURATION_MIN + SATURATION_SPAN),
            lightness: rng.gen_range(LIGHTNESS_MIN..LIGHTNESS_MIN + LIGHTNESS_SPAN),
            alpha: rng.gen_range(ALPHA_MIN..ALPHA_MIN + ALPHA_SPAN),
            size,
            max_size: size * rng.gen_range(MAX_SIZE_FACTOR_MIN..MAX_SIZE_FACTOR_MIN + MAX_SIZE_FACTOR_SPAN),
            age: 0.0,
            max_age: rng.gen_range(MAX_AGE_MIN..MAX_AGE_MIN + MAX_AGE_SPAN),
            angle: rng.gen_range(0.0..std::f32::consts::TAU),
            angle_velocity: rng.gen_range(-ANGLE_VELOCITY_MAX..ANGLE_VELOCITY_MAX),
        }
    }

    /// Per-tick physics step. Consumes the accumulated acceleration, so all
    /// force application for the tick must happen before the next call:
    /// accumulate, integrate, clear is one atomic per-particle sequence.
    ///
    /// Integration is frame-tick based on purpose: frame-rate variance
    /// changes perceived speed, never the update law.
    pub fn update(&mut self, width: f32, height: f32) {
        self.age += 1.0;

        // Ambient orbital drift, independent of external forces.
        self.angle += self.angle_velocity;
        self.acceleration.x += self.angle.cos() * ORBIT_ACCEL;
        self.acceleration.y += self.angle.sin() * ORBIT_ACCEL;

        self.velocity += self.acceleration;
        self.velocity *= VELOCITY_DAMPING;
        self.position += self.velocity;

        // Toroidal wrap: re-enter from the opposite edge at the boundary
        // value, never reflected or clamped.
        if self.position.x < 0.0 {
            self.position.x = width;
        }
        if self.position.x > width {
            self.position.x = 0.0;
        }
        if self.position.y < 0.0 {
            self.position.y = height;
        }
        if self.position.y > height {
            self.position.y = 0.0;
        }

        self.acceleration = Vec2::ZERO;

        let pulse_phase = (self.age * SIZE_PULSE_RATE) % std::f32::consts::TAU;
        self.size = self.max_size * (SIZE_PULSE_BASE + SIZE_PULSE_SPAN * pulse_phase.sin());
    }

    /// Accumulate a force for the current tick. May be called any number of
    /// times before [`Particle::update`] consumes the sum.
    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration += force;
    }

    /// Continuous pointer force: an inverse-square field that is attractive
    /// inside a close-range core and repulsive in the wider halo. No effect
    /// at zero distance (singularity) or outside the influence radius.
    pub fn apply_pointer_influence(&mut self, px: f32, py: f32, config: &ParticleConfig) {
        let delta = Vec2::new(px, py) - self.position;
        let distance = delta.length();
        if distance <= 0.0 || distance >= config.pointer_influence_radius {
            return;
        }
        let magnitude = config.pointer_influence_strength / (distance * distance);
        let toward = delta / distance;
        if distance < config.pointer_influence_radius * ATTRACT_RADIUS_FRACTION {
            // vortex core: pull toward the pointer
            self.apply_force(toward * magnitude);
        } else {
            // wider halo: push away
            self.apply_force(-toward * magnitude);
        }
    }

    pub fn should_reset(&self) -> bool {
        self.age >= self.max_age
    }

    /// Reinitialize position, velocity, hue, and age in place. Saturation,
    /// lightness, alpha, and the size envelope deliberately persist across
    /// resets.
    pub fn reset(&mut self, width: f32, height: f32, config: &ParticleConfig, rng: &mut impl Rng) {
        // Degenerate bounds must not stall the frame loop.
        self.position = Vec2::new(
            rng.gen_range(0.0..width.max(f32::MIN_POSITIVE)),
            rng.gen_range(0.0..height.max(f32::MIN_POSITIVE)),
        );
        self.velocity = random_velocity(config.speed, rng);
        self.hue = theme_hue(config, rng);
        self.age = 0.0;
        self.max_age = rng.gen_range(MAX_AGE_MIN..MAX_AGE_MIN + MAX_AGE_SPAN);
    }

    pub fn distance_to(&self, other: &Particle) -> f32 {
        self.position.distance(other.position)
    }

    /// Render as a filled circle with a glow halo. No state mutation.
    pub fn draw<S: Surface>(&self, surface: &mut S) {
        let color = Hsla::new(self.hue, self.saturation, self.lightness, self.alpha);
        surface.fill_circle(self.position, self.size, color, self.size * GLOW_RADIUS_SCALE);
    }
}

fn random_velocity(speed: f32, rng: &mut impl Rng) -> Vec2 {
    Vec2::new(
        (rng.gen::<f32>() - 0.5) * speed,
        (rng.gen::<f32>() - 0.5) * speed,
    )
}

fn theme_hue(config: &ParticleConfig, rng: &mut impl Rng) -> f32 {
    let (min, max) = config.color_theme.hue_range();
    rng.gen_range(min..max)
}
