//! The particle system: owns the population and active ripples, advances
//! them once per scheduled frame, and issues the fixed-order render pass.

use glam::Vec2;
use rand::prelude::*;

use crate::config::{ConfigUpdate, ParticleConfig};
use crate::constants::*;
use crate::particle::Particle;
use crate::ripple::Ripple;
use crate::surface::{Hsla, Surface};

/// Connection line opacity for a pair at `distance`, before the global
/// 0.3 scale factor. `None` when the pair is out of range.
pub fn connection_alpha(distance: f32, threshold: f32) -> Option<f32> {
    if threshold > 0.0 && distance < threshold {
        Some(1.0 - distance / threshold)
    } else {
        None
    }
}

/// Simulation orchestrator.
///
/// There is exactly one mutator of this state: [`ParticleSystem::tick`],
/// invoked sequentially by the host's frame scheduler. Input handlers only
/// write the small pieces of shared state (`set_pointer`, `create_ripple`,
/// the playback toggles) that the next tick reads.
pub struct ParticleSystem {
    pub particles: Vec<Particle>,
    pub ripples: Vec<Ripple>,
    config: ParticleConfig,
    width: f32,
    height: f32,
    pointer: Vec2,
    pointer_active: bool,
    /// Rolling hue for the decorative background gradient.
    background_hue: f32,
    last_time_ms: f64,
    fps: f32,
    frame_count: u64,
    running: bool,
    show_diagnostics: bool,
    rng: StdRng,
}

impl ParticleSystem {
    pub fn new(width: f32, height: f32, config: ParticleConfig, seed: u64) -> Self {
        let mut system = Self {
            particles: Vec::new(),
            ripples: Vec::new(),
            config: config.sanitized(),
            width,
            height,
            pointer: Vec2::ZERO,
            pointer_active: false,
            background_hue: 0.0,
            last_time_ms: 0.0,
            fps: 0.0,
            frame_count: 0,
            running: false,
            show_diagnostics: false,
            rng: StdRng::seed_from_u64(seed),
        };
        system.initialize_particles();
        log::info!(
            "[system] initialized: particles={} bounds={}x{} theme={}",
            system.particles.len(),
            width,
            height,
            system.config.color_theme.name()
        );
        system
    }

    fn initialize_particles(&mut self) {
        self.particles.clear();
        for _ in 0..self.config.max_particles {
            let x = self.rng.gen_range(0.0..self.width.max(f32::MIN_POSITIVE));
            let y = self.rng.gen_range(0.0..self.height.max(f32::MIN_POSITIVE));
            self.particles.push(Particle::new(x, y, &self.config, &mut self.rng));
        }
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn bounds(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn background_hue(&self) -> f32 {
        self.background_hue
    }

    /// Merge a partial configuration, then grow or truncate the population
    /// to the new target. Retained particles keep their ages and positions;
    /// truncation drops from the tail.
    pub fn update_config(&mut self, update: ConfigUpdate) {
        self.config.apply(update);
        while self.particles.len() < self.config.max_particles {
            let x = self.rng.gen_range(0.0..self.width.max(f32::MIN_POSITIVE));
            let y = self.rng.gen_range(0.0..self.height.max(f32::MIN_POSITIVE));
            self.particles.push(Particle::new(x, y, &self.config, &mut self.rng));
        }
        self.particles.truncate(self.config.max_particles);
        log::debug!("[system] reconfigured: particles={}", self.particles.len());
    }

    // ---- input state, written by event handlers, read at the next tick ----

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
        self.pointer_active = true;
    }

    pub fn clear_pointer(&mut self) {
        self.pointer_active = false;
    }

    pub fn pointer_active(&self) -> bool {
        self.pointer_active
    }

    /// Queue a ripple impulse at (x, y), typically from a click or tap.
    pub fn create_ripple(&mut self, x: f32, y: f32) {
        self.ripples.push(Ripple::new(x, y, &mut self.rng));
    }

    // ---- lifecycle state machine: {stopped, running} ----

    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            log::info!("[system] started");
        }
    }

    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            log::info!("[system] stopped");
        }
    }

    pub fn toggle(&mut self) {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Tear down: cease running for good. Hosts cancel their scheduler and
    /// disarm their input bindings alongside this, then drop the system.
    pub fn destroy(&mut self) {
        self.stop();
        log::info!("[system] destroyed");
    }

    pub fn toggle_diagnostics(&mut self) {
        self.show_diagnostics = !self.show_diagnostics;
    }

    pub fn diagnostics_visible(&self) -> bool {
        self.show_diagnostics
    }

    /// Rebuild the population from the current config, clear all ripples,
    /// and rewind the background hue. Does not stop the frame loop.
    pub fn reset(&mut self) {
        self.initialize_particles();
        self.ripples.clear();
        self.background_hue = 0.0;
        log::info!("[system] reset: particles={}", self.particles.len());
    }

    /// Update the addressable surface bounds. Existing positions are not
    /// rescaled; subsequent wraps and connections use the new bounds.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Advance the whole simulation by one frame tick. `now_ms` is the
    /// scheduler timestamp, used for the fps diagnostic only; the physics
    /// itself is frame-tick based.
    pub fn tick(&mut self, now_ms: f64) {
        let delta = now_ms - self.last_time_ms;
        self.last_time_ms = now_ms;
        self.frame_count += 1;
        if self.frame_count % FPS_SAMPLE_FRAMES == 0 {
            let delta = if delta > 0.0 { delta } else { FALLBACK_FRAME_MS };
            self.fps = (1000.0 / delta).round() as f32;
        }

        self.background_hue += BACKGROUND_HUE_STEP;
        if self.background_hue >= 360.0 {
            self.background_hue = 0.0;
        }

        for particle in &mut self.particles {
            particle.update(self.width, self.height);
            if self.pointer_active {
                particle.apply_pointer_influence(self.pointer.x, self.pointer.y, &self.config);
            }
            for ripple in &self.ripples {
                if let Some(force) = ripple.force_at(particle.position) {
                    particle.apply_force(force);
                }
            }
            if particle.should_reset() {
                particle.reset(self.width, self.height, &self.config, &mut self.rng);
            }
        }

        self.ripples.retain_mut(Ripple::advance);
    }

    /// Fixed-order drawing pass: background, connections, particles,
    /// ripples, then the optional diagnostics overlay. No state mutation.
    pub fn render<S: Surface>(&self, surface: &mut S) {
        self.draw_background(surface);
        self.draw_connections(surface);
        for particle in &self.particles {
            particle.draw(surface);
        }
        self.draw_ripples(surface);
        if self.show_diagnostics {
            self.draw_diagnostics(surface);
        }
    }

    fn draw_background<S: Surface>(&self, surface: &mut S) {
        let center = Vec2::new(self.width / 2.0, self.height / 2.0);
        let radius = self.width.max(self.height);
        let hue = self.background_hue;
        surface.fill_radial_gradient(
            center,
            radius,
            &[
                (0.0, Hsla::new(hue, 20.0, 5.0, 1.0)),
                (0.5, Hsla::new((hue + 30.0) % 360.0, 30.0, 3.0, 1.0)),
                (1.0, Hsla::new((hue + 60.0) % 360.0, 40.0, 1.0, 1.0)),
            ],
        );
    }

    /// Reference O(n^2) pair enumeration. Fine for the supported particle
    /// counts (<= 500); a uniform spatial grid could bound this to near
    /// neighbors without changing the drawn set.
    fn draw_connections<S: Surface>(&self, surface: &mut S) {
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let a = &self.particles[i];
                let b = &self.particles[j];
                let distance = a.distance_to(b);
                if let Some(alpha) = connection_alpha(distance, self.config.connection_distance) {
                    let hue = (a.hue + b.hue) / 2.0;
                    let color = Hsla::new(
                        hue,
                        CONNECTION_SATURATION,
                        CONNECTION_LIGHTNESS,
                        alpha * CONNECTION_ALPHA_SCALE,
                    );
                    surface.stroke_line(a.position, b.position, color, alpha * CONNECTION_WIDTH_SCALE);
                }
            }
        }
    }

    fn draw_ripples<S: Surface>(&self, surface: &mut S) {
        for ripple in &self.ripples {
            let color = Hsla::new(
                (self.background_hue + 180.0) % 360.0,
                80.0,
                70.0,
                ripple.fade() * RIPPLE_ALPHA_SCALE,
            );
            surface.stroke_circle(ripple.origin, ripple.radius, color, RIPPLE_LINE_WIDTH);
        }
    }

    fn draw_diagnostics<S: Surface>(&self, surface: &mut S) {
        let color = Hsla::new(0.0, 0.0, 100.0, 0.8);
        surface.fill_text(&format!("FPS: {}", self.fps as i32), 10.0, 20.0, color);
        surface.fill_text(&format!("Particles: {}", self.particles.len()), 10.0, 40.0, color);
        surface.fill_text(&format!("Ripples: {}", self.ripples.len()), 10.0, 60.0, color);
        let pointer = if self.pointer_active { "Active" } else { "Inactive" };
        surface.fill_text(&format!("Pointer: {pointer}"), 10.0, 80.0, color);
    }
}
