use crate::core::{CursorFollower, PointerState};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Record every pointer move into the shared state, last write wins.
/// The cursor follower is flagged so its loop resumes easing.
pub fn wire_pointer_tracking(
    pointer: Rc<RefCell<PointerState>>,
    follower: Rc<RefCell<CursorFollower>>,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (vw, vh) = dom::viewport_size();
        pointer.borrow_mut().record(
            ev.client_x() as f32,
            ev.client_y() as f32,
            vw as f32,
            vh as f32,
        );
        follower.borrow_mut().notify_moved();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        let _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
