use crate::clock::Clock;
use crate::frame_loop::{FrameInput, FrameLoop};
use crate::input::InputState;
use crate::render;
use crate::scene::Scene;
use crate::tween::TweenQueue;
use crate::viewport::Viewport;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub clock: Clock,
    pub frame_loop: FrameLoop,
    pub scene: Scene,
    pub tweens: TweenQueue,

    pub input: Rc<RefCell<InputState>>,
    pub viewport: Rc<RefCell<Viewport>>,

    pub gpu: Option<render::GpuState<'a>>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let elapsed_sec = self.clock.elapsed();
        let input = self.input.borrow().snapshot();
        let viewport = *self.viewport.borrow();

        // Tweens progress on wall-clock time, ahead of and apart from the tick.
        let scene = &mut self.scene;
        self.tweens
            .advance(elapsed_sec, |target, delta| scene.rotate_section(target, delta));

        if let Some(g) = &mut self.gpu {
            let (w, h) = viewport.backing_size();
            g.resize_if_needed(w, h);
        }

        self.frame_loop.tick(
            FrameInput {
                elapsed_sec,
                input,
                viewport,
            },
            &mut self.scene,
            &mut self.tweens,
            &mut self.gpu,
        );
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &Scene,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, scene).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
