//! The drawing seam between the engine and its host.
//!
//! The engine never talks to a canvas directly; it issues draw calls through
//! this trait so the render pass can be exercised in host tests with a
//! recording double, and backed by `CanvasRenderingContext2d` on the web.

use glam::Vec2;

/// HSL color with transparency, matching CSS `hsla()` notation. Hue in
/// degrees, saturation/lightness in percent, alpha in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub alpha: f32,
}

impl Hsla {
    pub fn new(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }
}

/// A 2-D rendering surface.
///
/// Implementations draw in surface pixel coordinates; the engine tracks the
/// addressable bounds itself (see [`crate::ParticleSystem::resize`]).
pub trait Surface {
    /// Fill the whole surface with a radial gradient centered at `center`
    /// with outer radius `radius`. `stops` are (offset in [0, 1], color)
    /// pairs in increasing offset order.
    fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, stops: &[(f32, Hsla)]);

    /// Filled circle with a glow halo of `glow_radius` around it.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Hsla, glow_radius: f32);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Hsla, width: f32);

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Hsla, width: f32);

    /// Draw a line of diagnostic text with its baseline at (x, y).
    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: Hsla);
}
