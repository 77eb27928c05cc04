use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Viewport size in CSS pixels; (0, 0) when the window is unavailable.
pub fn viewport_size() -> (f64, f64) {
    match web::window() {
        Some(w) => {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = w
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            (width, height)
        }
        None => (0.0, 0.0),
    }
}

pub fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// First element matching `selector`, or `None` with a warning. Lookups are
/// done once at wiring time; a missing element skips that feature only.
pub fn query(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    match document.query_selector(selector) {
        Ok(Some(el)) => el.dyn_into::<web::HtmlElement>().ok(),
        _ => {
            log::warn!("missing element: {}", selector);
            None
        }
    }
}

/// Run `f` for every element matching `selector`.
pub fn for_each(document: &web::Document, selector: &str, mut f: impl FnMut(web::HtmlElement)) {
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list
                .item(i)
                .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
            {
                f(el);
            }
        }
    }
}

/// Set one inline style property, logging on failure instead of bailing.
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    if el.style().set_property(property, value).is_err() {
        log::warn!("failed to set style {}", property);
    }
}

pub fn add_listener(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn set_timeout(ms: i32, handler: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let closure = Closure::once_into_js(handler);
        let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms,
        );
    }
}

pub fn set_interval(ms: i32, mut handler: impl FnMut() + 'static) {
    if let Some(w) = web::window() {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = w.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms,
        );
        closure.forget();
    }
}

/// Drive `tick` once per display frame until it returns `false`. The frame
/// loop and cursor loop never stop; the one-shot tweens (loader fade, hero
/// timeline, ambient particles) stop rescheduling when done, and their
/// closure is released by clearing the slot (wasm-bindgen defers the
/// deallocation until the invocation returns).
pub fn start_raf_loop(tick: impl FnMut() -> bool + 'static) {
    let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let slot_inner = slot.clone();
    let mut tick = tick;
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if tick() {
            if let Some(w) = web::window() {
                let _ = w.request_animation_frame(
                    slot_inner
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                );
            }
        } else {
            // break the Rc cycle so finished one-shot loops are freed
            let _ = slot_inner.borrow_mut().take();
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(slot.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
