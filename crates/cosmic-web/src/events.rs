//! Input wiring. Handlers only write small pieces of engine state (pointer
//! position, ripple creation, playback toggles); all physics happens in the
//! next tick. Control keys call engine methods directly rather than going
//! through synthetic events.
//!
//! Listener closures are forgotten, so each one carries the shared `live`
//! flag and goes inert once the app is destroyed.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use cosmic_core::ParticleSystem;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

pub fn wire_pointer_handlers(
    canvas: &web::HtmlCanvasElement,
    system: Rc<RefCell<ParticleSystem>>,
    live: Rc<Cell<bool>>,
) {
    wire_pointermove(canvas, system.clone(), live.clone());
    wire_pointerdown(canvas, system.clone(), live.clone());
    wire_pointerleave(canvas, system, live);
}

fn wire_pointermove(
    canvas: &web::HtmlCanvasElement,
    system: Rc<RefCell<ParticleSystem>>,
    live: Rc<Cell<bool>>,
) {
    let canvas_for_pos = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !live.get() {
            return;
        }
        let (x, y) = dom::pointer_canvas_px(&ev, &canvas_for_pos);
        system.borrow_mut().set_pointer(x, y);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

// pointerdown covers both click and touch-start: either creates a ripple
// and marks the pointer active at that spot.
fn wire_pointerdown(
    canvas: &web::HtmlCanvasElement,
    system: Rc<RefCell<ParticleSystem>>,
    live: Rc<Cell<bool>>,
) {
    let canvas_for_pos = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !live.get() {
            return;
        }
        let (x, y) = dom::pointer_canvas_px(&ev, &canvas_for_pos);
        let mut sys = system.borrow_mut();
        sys.create_ripple(x, y);
        sys.set_pointer(x, y);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerleave(
    canvas: &web::HtmlCanvasElement,
    system: Rc<RefCell<ParticleSystem>>,
    live: Rc<Cell<bool>>,
) {
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        if !live.get() {
            return;
        }
        system.borrow_mut().clear_pointer();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    canvas: &web::HtmlCanvasElement,
    system: &Rc<RefCell<ParticleSystem>>,
) {
    match ev.key().as_str() {
        " " => {
            system.borrow_mut().toggle();
            log::info!("[keys] running={}", system.borrow().is_running());
            ev.prevent_default();
        }
        "r" | "R" => {
            system.borrow_mut().reset();
        }
        "s" | "S" => {
            system.borrow_mut().toggle_diagnostics();
        }
        "f" | "F" => {
            if let Some(win) = web::window() {
                if let Some(doc) = win.document() {
                    if doc.fullscreen_element().is_some() {
                        _ = doc.exit_fullscreen();
                    } else {
                        _ = canvas.request_fullscreen();
                    }
                }
            }
            ev.prevent_default();
        }
        "Escape" => {
            if let Some(win) = web::window() {
                if let Some(doc) = win.document() {
                    _ = doc.exit_fullscreen();
                }
            }
        }
        _ => {}
    }
}

pub fn wire_global_keydown(
    canvas: web::HtmlCanvasElement,
    system: Rc<RefCell<ParticleSystem>>,
    live: Rc<Cell<bool>>,
) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            if !live.get() {
                return;
            }
            handle_global_keydown(&ev, &canvas, &system);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
