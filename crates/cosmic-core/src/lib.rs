//! Simulation core for the cosmic particle field.
//!
//! Everything here is platform-free and suitable for host-side testing: the
//! frame scheduler and the drawing surface are injected by the front-end
//! (see the [`Surface`] trait), so a test can single-step `tick`/`render`
//! without a live display loop.

pub mod config;
pub mod constants;
pub mod particle;
pub mod presets;
pub mod ripple;
pub mod surface;
pub mod system;

pub use config::{ColorTheme, ConfigUpdate, ParticleConfig};
pub use particle::Particle;
pub use ripple::Ripple;
pub use surface::{Hsla, Surface};
pub use system::ParticleSystem;
