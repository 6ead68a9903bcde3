//! Transient radial impulse created by a discrete pointer activation.

use glam::Vec2;
use rand::Rng;

use crate::constants::*;

/// An expanding ring that pushes particles outward as its front passes
/// through them. Removed from the active set once `age >= max_age`.
#[derive(Clone, Debug)]
pub struct Ripple {
    pub origin: Vec2,
    /// Current front radius; a non-decreasing function of age while alive.
    pub radius: f32,
    pub max_radius: f32,
    /// Force scale, decaying multiplicatively every tick.
    pub strength: f32,
    /// Age in frame ticks.
    pub age: f32,
    pub max_age: f32,
}

impl Ripple {
    pub fn new(x: f32, y: f32, rng: &mut impl Rng) -> Self {
        Self {
            origin: Vec2::new(x, y),
            radius: 0.0,
            max_radius: rng.gen_range(RIPPLE_MAX_RADIUS_MIN..RIPPLE_MAX_RADIUS_MIN + RIPPLE_MAX_RADIUS_SPAN),
            strength: rng.gen_range(RIPPLE_STRENGTH_MIN..RIPPLE_STRENGTH_MIN + RIPPLE_STRENGTH_SPAN),
            age: 0.0,
            max_age: rng.gen_range(RIPPLE_MAX_AGE_MIN..RIPPLE_MAX_AGE_MIN + RIPPLE_MAX_AGE_SPAN),
        }
    }

    /// Advance one tick: age, recompute the front radius, decay the
    /// strength. Returns false once the ripple has expired.
    pub fn advance(&mut self) -> bool {
        self.age += 1.0;
        self.radius = (self.age / self.max_age) * self.max_radius;
        self.strength *= RIPPLE_STRENGTH_DECAY;
        self.age < self.max_age
    }

    /// Outward force on a particle at `position`, if it lies inside the
    /// thin annulus just behind the front.
    pub fn force_at(&self, position: Vec2) -> Option<Vec2> {
        let delta = position - self.origin;
        let distance = delta.length();
        if distance > 0.0 && distance < self.radius && distance > self.radius - RIPPLE_SHELL_WIDTH {
            let magnitude = self.strength / (distance + 1.0);
            Some(delta / distance * magnitude)
        } else {
            None
        }
    }

    /// Ring opacity for rendering: fades out linearly over the lifetime.
    pub fn fade(&self) -> f32 {
        1.0 - self.age / self.max_age
    }
}
