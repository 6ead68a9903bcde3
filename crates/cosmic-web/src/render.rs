//! Canvas2D implementation of the engine's drawing surface.

use cosmic_core::{Hsla, Surface};
use glam::Vec2;
use web_sys as web;

pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn canvas_size(&self) -> (f64, f64) {
        match self.ctx.canvas() {
            Some(c) => (c.width() as f64, c.height() as f64),
            None => (0.0, 0.0),
        }
    }
}

fn css(color: Hsla) -> String {
    format!(
        "hsla({}, {}%, {}%, {})",
        color.hue, color.saturation, color.lightness, color.alpha
    )
}

impl Surface for CanvasSurface {
    fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, stops: &[(f32, Hsla)]) {
        let (w, h) = self.canvas_size();
        let gradient = match self.ctx.create_radial_gradient(
            center.x as f64,
            center.y as f64,
            0.0,
            center.x as f64,
            center.y as f64,
            radius as f64,
        ) {
            Ok(g) => g,
            Err(_) => return,
        };
        for (offset, color) in stops {
            _ = gradient.add_color_stop(*offset, &css(*color));
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, w, h);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Hsla, glow_radius: f32) {
        let style = css(color);
        self.ctx.save();
        self.ctx.set_shadow_color(&style);
        self.ctx.set_shadow_blur(glow_radius as f64);
        self.ctx.set_fill_style_str(&style);
        self.ctx.begin_path();
        _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.fill();
        self.ctx.restore();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Hsla, width: f32) {
        self.ctx.set_stroke_style_str(&css(color));
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Hsla, width: f32) {
        self.ctx.set_stroke_style_str(&css(color));
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.stroke();
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: Hsla) {
        self.ctx.set_fill_style_str(&css(color));
        self.ctx.set_font("14px monospace");
        _ = self.ctx.fill_text(text, x as f64, y as f64);
    }
}
