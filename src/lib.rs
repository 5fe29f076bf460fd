#![cfg(target_arch = "wasm32")]
use crate::clock::Clock;
use crate::frame_loop::FrameLoop;
use crate::input::InputState;
use crate::scene::Scene;
use crate::tween::TweenQueue;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod clock;
mod constants;
mod dom;
mod error;
mod events;
mod frame;
mod frame_loop;
mod geometry;
mod input;
mod render;
mod scene;
mod sections;
mod tween;
mod viewport;

const CANVAS_SELECTOR: &str = "canvas.webgl";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scroll-scene starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::find_canvas(&document, CANVAS_SELECTOR)?;

    // Canvas backing store follows the window size at a capped pixel ratio
    let viewport = dom::read_viewport(&window);
    dom::sync_canvas_backing_size(&canvas, &viewport);

    let params = dom::scene_params_from_canvas(&canvas, rand::random::<u64>());
    let scene = Scene::landing(&params);
    log::info!(
        "[init] {} sections, {} particles, viewport {}x{} @{}",
        scene.section_count(),
        scene.particles.positions.len(),
        viewport.width,
        viewport.height,
        viewport.pixel_ratio
    );

    // The page may load already scrolled
    let input = Rc::new(RefCell::new(InputState::default()));
    input.borrow_mut().on_scroll(dom::read_scroll_y(&window));
    let viewport = Rc::new(RefCell::new(viewport));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        input: input.clone(),
        viewport: viewport.clone(),
    });

    // Initialize WebGPU; without it the loop still runs and draws nothing
    let gpu: Option<render::GpuState> = frame::init_gpu(&canvas, &scene).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        clock: Clock::new(),
        frame_loop: FrameLoop::new(params.object_spacing),
        scene,
        tweens: TweenQueue::new(),
        input,
        viewport,
        gpu,
    }));
    // Start RAF loop
    frame::start_loop(frame_ctx);

    Ok(())
}
