use crate::dom;
use crate::input::InputState;
use crate::viewport::Viewport;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Shared handles the listeners write into.
#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub input: Rc<RefCell<InputState>>,
    pub viewport: Rc<RefCell<Viewport>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_scroll(&w);
    wire_resize(&w);
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let viewport = *w.viewport.borrow();
        w.input
            .borrow_mut()
            .on_pointer_move(ev.client_x() as f32, ev.client_y() as f32, &viewport);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_scroll(w: &InputWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move || {
        if let Some(wnd) = web::window() {
            w.input.borrow_mut().on_scroll(dom::read_scroll_y(&wnd));
        }
    }) as Box<dyn FnMut()>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_resize(w: &InputWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move || {
        if let Some(wnd) = web::window() {
            let viewport = dom::read_viewport(&wnd);
            dom::sync_canvas_backing_size(&w.canvas, &viewport);
            *w.viewport.borrow_mut() = viewport;
            log::debug!(
                "[resize] {}x{} @{}",
                viewport.width,
                viewport.height,
                viewport.pixel_ratio
            );
        }
    }) as Box<dyn FnMut()>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
