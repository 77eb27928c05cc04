use crate::constants::{REVEAL_DELAY_MS, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Observe every `.animate-on-scroll` element and mark it `animate` the
/// first time enough of it scrolls into view. Unobserving on reveal makes
/// each element animate at most once, no matter how often it re-enters.
pub fn observe_tagged(document: &web::Document) -> anyhow::Result<()> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                // small delay smooths the CSS transition kick-off
                dom::set_timeout(REVEAL_DELAY_MS, move || {
                    let _ = target.class_list().add_1("animate");
                });
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer = web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    )
    .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();

    dom::for_each(document, ".animate-on-scroll", |el| {
        observer.observe(&el);
    });
    Ok(())
}
