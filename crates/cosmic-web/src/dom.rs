use wasm_bindgen::JsCast;
use web_sys as web;

/// Resize the canvas backing store to CSS size * devicePixelRatio so drawing
/// stays crisp on high-density displays. Returns the new backing size in
/// device pixels, clamped to at least 1x1.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let dpr = web::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0);
    let rect = canvas.get_bounding_client_rect();
    let width = ((rect.width() * dpr) as u32).max(1);
    let height = ((rect.height() * dpr) as u32).max(1);
    canvas.set_width(width);
    canvas.set_height(height);
    (width, height)
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Scale event client coordinates into canvas backing pixels.
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    let scale_x = if rect.width() > 0.0 {
        canvas.width() as f64 / rect.width()
    } else {
        1.0
    };
    let scale_y = if rect.height() > 0.0 {
        canvas.height() as f64 / rect.height()
    } else {
        1.0
    };
    (
        ((ev.client_x() as f64 - rect.left()) * scale_x) as f32,
        ((ev.client_y() as f64 - rect.top()) * scale_y) as f32,
    )
}
