use crate::scene::SceneParams;
use crate::viewport::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Locate the render target declared in the page markup.
pub fn find_canvas(document: &web::Document, selector: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .query_selector(selector)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", selector))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

pub fn read_viewport(window: &web::Window) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    Viewport::new(width as f32, height as f32, window.device_pixel_ratio() as f32)
}

#[inline]
pub fn read_scroll_y(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: &Viewport) {
    let (w_px, h_px) = viewport.backing_size();
    canvas.set_width(w_px);
    canvas.set_height(h_px);
}

/// Scene parameters, with overrides from `data-*` attributes on the canvas.
pub fn scene_params_from_canvas(canvas: &web::HtmlCanvasElement, seed: u64) -> SceneParams {
    let color = canvas.get_attribute("data-material-color");
    let count = canvas.get_attribute("data-particle-count");
    SceneParams {
        seed,
        ..SceneParams::default()
    }
    .with_overrides(color.as_deref(), count.as_deref())
}
