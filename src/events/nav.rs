use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// In-page anchors scroll smoothly to their target section instead of
/// jumping.
pub fn wire_smooth_scroll(document: &web::Document) {
    let doc = document.clone();
    dom::for_each(document, ".nav-links a, .hero-cta", move |link| {
        let doc = doc.clone();
        let link_inner = link.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
            let Some(href) = link_inner.get_attribute("href") else {
                return;
            };
            if let Ok(Some(target)) = doc.query_selector(&href) {
                let options = web::ScrollIntoViewOptions::new();
                options.set_behavior(web::ScrollBehavior::Smooth);
                options.set_block(web::ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    });
}

/// Toggle the slide-out menu on narrow viewports.
pub fn toggle_mobile_menu(document: &web::Document) {
    if let Some(links) = dom::query(document, ".nav-links") {
        let _ = links.class_list().toggle("mobile-open");
    }
}

/// Any nav link click closes the mobile menu.
pub fn wire_mobile_menu_close(document: &web::Document) {
    let doc = document.clone();
    dom::for_each(document, ".nav-links a", move |link| {
        let doc = doc.clone();
        dom::add_listener(&link, "click", move || {
            if let Some(links) = dom::query(&doc, ".nav-links") {
                let _ = links.class_list().remove_1("mobile-open");
            }
        });
    });
}
