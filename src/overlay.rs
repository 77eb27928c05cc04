use crate::constants::LOADER_DELAY_MS;
use crate::core::timeline::{loader_fade_done, loader_opacity};
use crate::dom;
use instant::Instant;
use web_sys as web;

/// Schedule the loading overlay dismissal: after a fixed delay, fade the
/// `.loader` out with a cubic-out tween, hide it, then hand off to
/// `on_dismissed`, which starts the hero timeline and the 3D background,
/// deferred so they never compete with the initial paint.
pub fn schedule_dismiss(document: &web::Document, on_dismissed: impl FnOnce() + 'static) {
    let document = document.clone();
    dom::set_timeout(LOADER_DELAY_MS, move || {
        let Some(loader) = dom::query(&document, ".loader") else {
            // no overlay to dismiss; start the page anyway
            on_dismissed();
            return;
        };
        let start = Instant::now();
        let mut on_dismissed = Some(on_dismissed);
        dom::start_raf_loop(move || {
            let t_ms = start.elapsed().as_secs_f32() * 1000.0;
            dom::set_style(&loader, "opacity", &format!("{}", loader_opacity(t_ms)));
            if loader_fade_done(t_ms) {
                dom::set_style(&loader, "display", "none");
                if let Some(f) = on_dismissed.take() {
                    f();
                }
                return false;
            }
            true
        });
    });
}
