use crate::core::timeline::{hero_timeline, Timeline};
use crate::dom;
use instant::Instant;
use web_sys as web;

/// Hero elements, in timeline order.
const HERO_SELECTORS: [&str; 4] = [
    ".hero-subtitle",
    ".hero-title",
    ".hero-description",
    ".hero-cta",
];

/// Play the staggered hero reveal: one rAF chain samples every segment per
/// frame and writes opacity/transform, stopping once the timeline ends.
pub fn play(document: &web::Document) {
    let timeline: Timeline = hero_timeline();
    let targets: Vec<Option<web::HtmlElement>> = HERO_SELECTORS
        .iter()
        .map(|sel| dom::query(document, sel))
        .collect();

    // start from the hidden pose so the first painted frame matches t=0
    apply(&timeline, &targets, 0.0);

    let start = Instant::now();
    dom::start_raf_loop(move || {
        let t_ms = start.elapsed().as_secs_f32() * 1000.0;
        apply(&timeline, &targets, t_ms);
        !timeline.finished(t_ms)
    });
}

fn apply(timeline: &Timeline, targets: &[Option<web::HtmlElement>], t_ms: f32) {
    for (segment, target) in timeline.segments.iter().zip(targets) {
        let Some(el) = target else { continue };
        let s = segment.sample(t_ms);
        dom::set_style(el, "opacity", &format!("{}", s.opacity));
        dom::set_style(
            el,
            "transform",
            &format!(
                "translateZ({}px) rotateX({}deg)",
                s.translate_z, s.rotate_x_deg
            ),
        );
    }
}
