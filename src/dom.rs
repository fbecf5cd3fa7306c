use folio_core::interaction::Rect;
use folio_core::particles::CanvasSize;
use folio_core::frame::timer_millis;
use folio_core::MotionPreferences;
use std::str::FromStr;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

use crate::constants::{MEDIA_COARSE_POINTER, MEDIA_REDUCED_MOTION};

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Turn a `JsValue` error into something `anyhow` can carry.
#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = root.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

pub fn query_document(document: &web::Document, selector: &str) -> Vec<web::Element> {
    match document.document_element() {
        Some(root) => query_all(&root, selector),
        None => Vec::new(),
    }
}

/// Parse a `data-*` attribute; unparsable values are logged and ignored.
pub fn attr_parse<T: FromStr>(el: &web::Element, name: &str) -> Option<T> {
    let raw = el.get_attribute(name)?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("[dom] ignoring {}={:?}", name, raw);
            None
        }
    }
}

#[inline]
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

pub fn rect_of(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

pub fn viewport_height() -> f32 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

/// Attach a page-lifetime listener. The closure is leaked on purpose.
pub fn listen<E, F>(target: &web::EventTarget, event: &str, handler: F)
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let mut handler = handler;
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn media_matches(query: &str) -> bool {
    web::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false)
}

pub fn motion_preferences() -> MotionPreferences {
    MotionPreferences {
        reduced_motion: media_matches(MEDIA_REDUCED_MOTION),
        coarse_pointer: media_matches(MEDIA_COARSE_POINTER),
    }
}

/// CSS size of `el` plus the device pixel ratio.
pub fn measure_canvas(el: &web::Element) -> CanvasSize {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let rect = el.get_bounding_client_rect();
    CanvasSize::new(rect.width() as f32, rect.height() as f32, dpr as f32)
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, size: CanvasSize) {
    let (w_px, h_px) = size.backing_px();
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    set_style(canvas, "width", &format!("{}px", size.width));
    set_style(canvas, "height", &format!("{}px", size.height));
}

/// Resolve after `duration`.
pub async fn sleep(duration: Duration) {
    let ms = timer_millis(duration);
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        if let Some(w) = web::window() {
            let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    let _ = JsFuture::from(promise).await;
}
