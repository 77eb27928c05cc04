use crate::core::{CursorFollower, PointerState};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Start the cursor follower loop: a rAF chain independent of the render
/// loop that eases the `.cursor` element toward the latest pointer
/// position. Runs for the lifetime of the page; while the follower is
/// settled it skips the DOM write entirely.
pub fn start_follower_loop(
    document: &web::Document,
    pointer: Rc<RefCell<PointerState>>,
    follower: Rc<RefCell<CursorFollower>>,
) {
    let Some(cursor) = dom::query(document, ".cursor") else {
        return;
    };
    dom::start_raf_loop(move || {
        let (target_x, target_y) = {
            let p = pointer.borrow();
            (p.x, p.y)
        };
        if let Some((x, y)) = follower.borrow_mut().step(target_x, target_y) {
            dom::set_style(&cursor, "transform", &format!("translate3d({}px, {}px, 0)", x, y));
        }
        true
    });
}
