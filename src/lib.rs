#![cfg(target_arch = "wasm32")]
use crate::core::{CursorFollower, PointerState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod ambient;
mod constants;
mod core;
mod cursor;
mod dom;
mod events;
mod frame;
mod intro;
mod overlay;
mod render;
mod reveal;

use constants::DESKTOP_MIN_WIDTH;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    if let Some(window) = web::window() {
        dom::add_listener(&window, "resize", move || {
            dom::sync_canvas_backing_size(&canvas_resize);
        });
    }
}

/// Called from HTML on the hamburger button.
#[wasm_bindgen]
pub fn toggle_mobile_menu() {
    if let Some(document) = dom::window_document() {
        events::nav::toggle_mobile_menu(&document);
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Background canvas is optional: without it the page still gets the
    // cursor, reveals and scroll polish.
    let canvas: Option<web::HtmlCanvasElement> = document
        .get_element_by_id("bg-canvas")
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok());
    if let Some(c) = &canvas {
        wire_canvas_resize(c);
    } else {
        log::warn!("missing #bg-canvas, skipping 3D background");
    }

    // Shared pointer state: written by the input tracker, read by the
    // cursor follower loop and the render loop.
    let pointer = Rc::new(RefCell::new(PointerState::default()));
    let follower = Rc::new(RefCell::new(CursorFollower::default()));
    events::pointer::wire_pointer_tracking(pointer.clone(), follower.clone());

    // Capability gates, checked once at load.
    let (viewport_w, _) = dom::viewport_size();
    let desktop = viewport_w > DESKTOP_MIN_WIDTH;
    let reduced_motion = dom::prefers_reduced_motion();

    if desktop {
        cursor::start_follower_loop(&document, pointer.clone(), follower.clone());
        events::hover::wire_cursor_hover(&document);
    }
    events::hover::wire_card_hover(&document);
    events::hover::wire_form_focus(&document);
    events::nav::wire_smooth_scroll(&document);
    events::nav::wire_mobile_menu_close(&document);
    events::scroll::wire_scroll_progress(&document);
    events::scroll::wire_nav_background(&document);
    reveal::observe_tagged(&document)?;

    if desktop && !reduced_motion {
        ambient::start_spawner(&document);
    }

    // Loader dismissal hands off to the hero timeline, then the 3D
    // background (built only after the overlay starts going away).
    let doc_for_intro = document.clone();
    let pointer_for_frame = pointer.clone();
    overlay::schedule_dismiss(&document, move || {
        intro::play(&doc_for_intro);

        let Some(canvas) = canvas else { return };
        spawn_local(async move {
            let mut rng = rand::thread_rng();
            let particles = crate::core::field::generate(&mut rng);
            let gpu = frame::init_gpu(&canvas, &particles).await;
            let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
                pointer: pointer_for_frame,
                rotation: Default::default(),
                camera: Default::default(),
                canvas,
                gpu,
            }));
            frame::start_loop(frame_ctx);
        });
    });

    Ok(())
}
