use crate::constants::*;
use crate::dom;
use crate::frame::FrameLoop;
use folio_core::constants::SCROLL_THROTTLE;
use folio_core::frame::Throttle;
use folio_core::interaction::{magnetic_transform, ripple_geometry, MAGNETIC_REST};
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const RIPPLE_STYLE_ID: &str = "ripple-style";

fn ripple_css() -> String {
    format!(
        "{RIPPLE_SELECTOR} {{ position: relative; overflow: hidden; }}
.{RIPPLE_CLASS} {{
  position: absolute;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.3);
  transform: scale(0);
  animation: ripple-animation {secs}s linear;
  pointer-events: none;
}}
@keyframes ripple-animation {{ to {{ transform: scale(4); opacity: 0; }} }}",
        secs = RIPPLE_LIFETIME_MS as f32 / 1000.0,
    )
}

/// Cards lean toward the pointer while hovered.
pub fn mount_magnetic(document: &web::Document, frame_loop: &FrameLoop) {
    for card in dom::query_document(document, MAGNETIC_SELECTOR) {
        let mut throttle = Throttle::new(SCROLL_THROTTLE);
        let el = card.clone();
        let clock = frame_loop.clone();
        dom::listen(&card, "mousemove", move |ev: web::MouseEvent| {
            if !throttle.ready(clock.now()) {
                return;
            }
            let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            dom::set_style(&el, "transform", &magnetic_transform(dom::rect_of(&el), pointer));
        });
        let el = card.clone();
        dom::listen(&card, "mouseleave", move |_: web::Event| {
            dom::set_style(&el, "transform", MAGNETIC_REST);
        });
    }
}

fn inject_ripple_style(document: &web::Document) {
    if document.get_element_by_id(RIPPLE_STYLE_ID).is_some() {
        return;
    }
    let Some(head) = document.head() else {
        return;
    };
    if let Ok(style) = document.create_element("style") {
        style.set_id(RIPPLE_STYLE_ID);
        style.set_text_content(Some(&ripple_css()));
        let _ = head.append_child(&style);
    }
}

fn spawn_ripple(document: &web::Document, button: &web::Element, click: Vec2) {
    let Ok(ripple) = document.create_element("span") else {
        return;
    };
    let g = ripple_geometry(dom::rect_of(button), click);
    dom::set_style(&ripple, "width", &format!("{}px", g.size));
    dom::set_style(&ripple, "height", &format!("{}px", g.size));
    dom::set_style(&ripple, "left", &format!("{}px", g.left));
    dom::set_style(&ripple, "top", &format!("{}px", g.top));
    let _ = ripple.class_list().add_1(RIPPLE_CLASS);
    let _ = button.append_child(&ripple);

    if let Some(window) = web::window() {
        let cleanup = Closure::once_into_js(move || ripple.remove());
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            cleanup.unchecked_ref(),
            RIPPLE_LIFETIME_MS,
        );
    }
}

/// Click ripples on link buttons.
pub fn mount_ripples(document: &web::Document) {
    let buttons = dom::query_document(document, RIPPLE_SELECTOR);
    if buttons.is_empty() {
        return;
    }
    inject_ripple_style(document);
    for button in buttons {
        let (doc, el) = (document.clone(), button.clone());
        dom::listen(&button, "click", move |ev: web::MouseEvent| {
            spawn_ripple(&doc, &el, Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
        });
    }
}
