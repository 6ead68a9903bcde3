#![cfg(target_arch = "wasm32")]
//! WASM front-end: binds the particle engine to an HTML canvas, a
//! requestAnimationFrame loop, and pointer/keyboard input.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use cosmic_core::{ParticleConfig, ParticleSystem};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod render;

/// Live handle for the running app. `live` is shared with every forgotten
/// closure (frame loop, listeners); clearing it is what actually tears the
/// app down.
struct App {
    system: Rc<RefCell<ParticleSystem>>,
    live: Rc<Cell<bool>>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cosmic-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Stop the engine and retire the frame loop and input listeners. Safe to
/// call more than once.
#[wasm_bindgen]
pub fn destroy() {
    APP.with(|slot| {
        if let Some(app) = slot.borrow_mut().take() {
            app.live.set(false);
            app.system.borrow_mut().destroy();
        }
    });
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("cosmic-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #cosmic-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Size the backing store before the engine reads its bounds.
    let (width, height) = dom::sync_canvas_backing_size(&canvas);

    let ctx = dom::context_2d(&canvas)?;

    let system = Rc::new(RefCell::new(ParticleSystem::new(
        width as f32,
        height as f32,
        ParticleConfig::default(),
        js_sys::Date::now() as u64,
    )));
    system.borrow_mut().start();

    let live = Rc::new(Cell::new(true));
    APP.with(|slot| {
        *slot.borrow_mut() = Some(App {
            system: system.clone(),
            live: live.clone(),
        });
    });

    wire_canvas_resize(&canvas, system.clone(), live.clone());
    events::wire_pointer_handlers(&canvas, system.clone(), live.clone());
    events::wire_global_keydown(canvas.clone(), system.clone(), live.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        system,
        canvas: canvas.clone(),
        surface: render::CanvasSurface::new(ctx),
    }));
    frame::start_loop(frame_ctx, live);

    Ok(())
}

fn wire_canvas_resize(
    canvas: &web::HtmlCanvasElement,
    system: Rc<RefCell<ParticleSystem>>,
    live: Rc<Cell<bool>>,
) {
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        if !live.get() {
            return;
        }
        let (width, height) = dom::sync_canvas_backing_size(&canvas_resize);
        system.borrow_mut().resize(width as f32, height as f32);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
