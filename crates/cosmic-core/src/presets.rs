//! Quick configuration presets a front-end can offer without re-stating
//! the numbers.

use crate::config::{ColorTheme, ParticleConfig};

/// Sparse, slow, default palette. Same as `ParticleConfig::default()`.
pub fn calm() -> ParticleConfig {
    ParticleConfig::default()
}

pub fn active() -> ParticleConfig {
    ParticleConfig {
        max_particles: 400,
        connection_distance: 80.0,
        pointer_influence_radius: 200.0,
        pointer_influence_strength: 1.5,
        color_theme: ColorTheme::Nebula,
        particle_size: 3.0,
        speed: 1.2,
    }
}

pub fn zen() -> ParticleConfig {
    ParticleConfig {
        max_particles: 100,
        connection_distance: 150.0,
        pointer_influence_radius: 100.0,
        pointer_influence_strength: 0.5,
        color_theme: ColorTheme::Aurora,
        particle_size: 4.0,
        speed: 0.3,
    }
}

pub fn intense() -> ParticleConfig {
    ParticleConfig {
        max_particles: 500,
        connection_distance: 60.0,
        pointer_influence_radius: 250.0,
        pointer_influence_strength: 2.0,
        color_theme: ColorTheme::Sunset,
        particle_size: 2.5,
        speed: 2.0,
    }
}
