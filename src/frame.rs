use crate::core::{CameraRig, FieldRotation, Particle, PointerState};
use crate::dom;
use crate::render;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// State threaded through the render loop. The pointer handle is shared
/// with the input tracker; everything else is owned here.
pub struct FrameContext<'a> {
    pub pointer: Rc<RefCell<PointerState>>,
    pub rotation: FieldRotation,
    pub camera: CameraRig,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
}

impl<'a> FrameContext<'a> {
    /// One display frame: advance the field rotation, ease the camera
    /// toward the pointer-derived parallax target, then draw. The camera
    /// easing reads the position written by the previous frame, which is
    /// what produces the lagged parallax instead of an instant snap.
    pub fn frame(&mut self) {
        self.rotation.advance();

        let (cx, cy) = {
            let p = self.pointer.borrow();
            (p.centered_x, p.centered_y)
        };
        self.camera.step(cx, cy);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(&self.rotation, &self.camera) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    particles: &[Particle],
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, particles).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Start the render loop. Never terminates; page teardown is the only
/// cancellation.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    dom::start_raf_loop(move || {
        frame_ctx.borrow_mut().frame();
        true
    });
}
