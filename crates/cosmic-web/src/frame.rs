//! The requestAnimationFrame loop. One tick runs to completion, the render
//! pass follows synchronously, and only then is the next frame scheduled.
//! When the shared `live` flag is cleared the closure stops rescheduling
//! itself, which is how the app tears the loop down.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use cosmic_core::ParticleSystem;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::render::CanvasSurface;

pub struct FrameContext {
    pub system: Rc<RefCell<ParticleSystem>>,
    pub canvas: web::HtmlCanvasElement,
    pub surface: CanvasSurface,
}

impl FrameContext {
    /// One scheduled frame. While stopped, the last rendered frame stays on
    /// screen untouched.
    pub fn frame(&mut self, now_ms: f64) {
        let mut system = self.system.borrow_mut();
        let (w, h) = system.bounds();
        let cw = self.canvas.width() as f32;
        let ch = self.canvas.height() as f32;
        if (cw, ch) != (w, h) {
            system.resize(cw, ch);
        }
        if system.is_running() {
            system.tick(now_ms);
            system.render(&mut self.surface);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, live: Rc<Cell<bool>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        if !live.get() {
            // Torn down: let the closure chain end here.
            return;
        }
        frame_ctx_tick.borrow_mut().frame(now_ms);
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
