use crate::constants::NAV_SCROLL_THRESHOLD;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Keep the `.scroll-progress` bar width in sync with the scroll position.
/// Updates are coalesced to one per frame via a ticking flag.
pub fn wire_scroll_progress(document: &web::Document) {
    let Some(bar) = dom::query(document, ".scroll-progress") else {
        return;
    };
    let root = document.document_element();
    let ticking = Rc::new(RefCell::new(false));

    if let Some(wnd) = web::window() {
        let wnd_inner = wnd.clone();
        dom::add_listener(&wnd, "scroll", move || {
            if *ticking.borrow() {
                return;
            }
            *ticking.borrow_mut() = true;
            let bar = bar.clone();
            let root = root.clone();
            let wnd = wnd_inner.clone();
            let ticking = ticking.clone();
            dom::start_raf_loop(move || {
                let scroll_height = root.as_ref().map(|r| r.scroll_height()).unwrap_or(0) as f64;
                let (_, vh) = dom::viewport_size();
                let track = scroll_height - vh;
                if track > 0.0 {
                    let scrolled = wnd.page_y_offset().unwrap_or(0.0) / track * 100.0;
                    dom::set_style(&bar, "width", &format!("{}%", scrolled));
                }
                *ticking.borrow_mut() = false;
                false
            });
        });
    }
}

/// Swap the nav bar between its glass and solid treatments as the page
/// scrolls past the threshold.
pub fn wire_nav_background(document: &web::Document) {
    let Some(nav) = dom::query(document, ".nav") else {
        return;
    };
    if let Some(wnd) = web::window() {
        let wnd_inner = wnd.clone();
        dom::add_listener(&wnd, "scroll", move || {
            let current = wnd_inner.page_y_offset().unwrap_or(0.0);
            if current > NAV_SCROLL_THRESHOLD {
                dom::set_style(&nav, "background", "rgba(10, 10, 10, 0.95)");
                dom::set_style(&nav, "backdrop-filter", "blur(30px)");
            } else {
                dom::set_style(&nav, "background", "rgba(255, 255, 255, 0.05)");
                dom::set_style(&nav, "backdrop-filter", "blur(20px)");
            }
        });
    }
}
