use crate::constants::AMBIENT_SPAWN_INTERVAL_MS;
use crate::core::spawn::{sample, AmbientSpawn};
use crate::dom;
use instant::Instant;
use rand::thread_rng;
use wasm_bindgen::JsCast;
use web_sys as web;

const STAR_CLIP_PATH: &str = "polygon(50% 0%, 61% 35%, 98% 35%, 68% 57%, 79% 91%, 50% 70%, 21% 91%, 32% 57%, 2% 35%, 39% 35%)";

/// Spawn one drifting star particle every fixed interval, indefinitely.
/// The caller applies the desktop and reduced-motion gates before wiring.
pub fn start_spawner(document: &web::Document) {
    let document = document.clone();
    dom::set_interval(AMBIENT_SPAWN_INTERVAL_MS, move || {
        spawn_particle(&document);
    });
}

fn spawn_particle(document: &web::Document) {
    let Some(body) = document.body() else {
        return;
    };
    let Some(el) = document
        .create_element("div")
        .ok()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };

    let (vw, vh) = dom::viewport_size();
    let spawn = AmbientSpawn::random(&mut thread_rng(), vw as f32, vh as f32);

    dom::set_style(&el, "position", "fixed");
    dom::set_style(&el, "width", "8px");
    dom::set_style(&el, "height", "8px");
    dom::set_style(&el, "background", "linear-gradient(45deg, #00d4ff, #8b5cf6)");
    dom::set_style(&el, "clip-path", STAR_CLIP_PATH);
    dom::set_style(&el, "pointer-events", "none");
    dom::set_style(&el, "z-index", "1");
    dom::set_style(&el, "box-shadow", "0 0 15px rgba(0, 212, 255, 0.7)");
    dom::set_style(&el, "left", &format!("{}px", spawn.start_x));
    dom::set_style(&el, "top", &format!("{}px", spawn.start_y));

    if body.append_child(&el).is_err() {
        return;
    }

    let viewport_h = vh as f32;
    let start = Instant::now();
    dom::start_raf_loop(move || {
        let t_ms = start.elapsed().as_secs_f32() * 1000.0;
        let s = sample(&spawn, viewport_h, t_ms);
        dom::set_style(
            &el,
            "transform",
            &format!(
                "translate3d({}px, {}px, 0) rotate({}deg) scale({})",
                s.translate_x, s.translate_y, s.rotate_deg, s.scale
            ),
        );
        dom::set_style(&el, "opacity", &format!("{}", s.opacity));
        if spawn.finished(t_ms) {
            el.remove();
            return false;
        }
        true
    });
}
