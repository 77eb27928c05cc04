use crate::dom;
use web_sys as web;

/// Selectors that grow the cursor indicator while hovered.
const INTERACTIVE: &str = "a, button, .project-card, .contribution-card, .skill-category";

/// Scale/rotate the inner cursor over interactive elements. Desktop only;
/// the caller applies the viewport gate.
pub fn wire_cursor_hover(document: &web::Document) {
    let Some(inner) = dom::query(document, ".cursor-inner") else {
        return;
    };
    dom::for_each(document, INTERACTIVE, |el| {
        let enter_target = inner.clone();
        dom::add_listener(&el, "mouseenter", move || {
            dom::set_style(&enter_target, "transform", "scale(1.5) rotate(45deg)");
        });
        let leave_target = inner.clone();
        dom::add_listener(&el, "mouseleave", move || {
            dom::set_style(&leave_target, "transform", "scale(1) rotate(0deg)");
        });
    });
}

/// Plain style-swap hover lift on cards, no tween involved.
pub fn wire_card_hover(document: &web::Document) {
    dom::for_each(document, ".contribution-card, .skill-category", |card| {
        wire_transform_swap(&card, "mouseenter", "mouseleave", "translateZ(10px)", "translateZ(0)");
    });
    dom::for_each(document, ".project-card", |card| {
        wire_transform_swap(
            &card,
            "mouseenter",
            "mouseleave",
            "translateZ(20px) scale(1.02)",
            "translateZ(0) scale(1)",
        );
    });
}

/// Focus lift on form fields.
pub fn wire_form_focus(document: &web::Document) {
    dom::for_each(document, ".form-input, .form-textarea", |input| {
        wire_transform_swap(&input, "focus", "blur", "translateZ(10px)", "translateZ(0)");
    });
}

fn wire_transform_swap(
    el: &web::HtmlElement,
    on_event: &str,
    off_event: &str,
    on_transform: &'static str,
    off_transform: &'static str,
) {
    let on_target = el.clone();
    dom::add_listener(el, on_event, move || {
        dom::set_style(&on_target, "transform", on_transform);
    });
    let off_target = el.clone();
    dom::add_listener(el, off_event, move || {
        dom::set_style(&off_target, "transform", off_transform);
    });
}
