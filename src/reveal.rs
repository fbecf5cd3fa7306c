use crate::constants::*;
use crate::dom;
use crate::frame::FrameLoop;
use folio_core::constants::{STAGGER_STEP, TYPEWRITER_DELAY, TYPEWRITER_START_DELAY};
use folio_core::reveal::{
    ring_layout, stagger_delay, ScrambleText, SegmentReveal, SplitMode, Typewriter,
};
use folio_core::scroll::element_progress;
use folio_core::{FrameTask, FrameTime, TaskStatus};
use std::time::Duration;
use web_sys as web;

// ---------------- Typewriter ----------------

/// Type `text` into `el` one character at a time. Resolves to `false` when
/// the element is already being typed into.
pub async fn type_text(
    el: web::Element,
    text: String,
    delay: Duration,
    start_delay: Duration,
    clock: FrameLoop,
) -> bool {
    if el.get_attribute(ATTR_TYPING_STATE).as_deref() == Some("active") {
        log::warn!("[typewriter] element busy, ignoring restart");
        return false;
    }
    let _ = el.set_attribute(ATTR_TYPING_STATE, "active");
    el.set_text_content(Some(""));
    dom::sleep(start_delay).await;

    let mut tw = Typewriter::new(&text, delay);
    loop {
        let now = clock.now();
        if let Some(visible) = tw.advance(now) {
            el.set_text_content(Some(visible));
        }
        match tw.next_due(clock.now()) {
            Some(wait) => dom::sleep(wait.max(Duration::from_millis(1))).await,
            None => break,
        }
    }
    let _ = el.set_attribute(ATTR_TYPING_STATE, "done");
    true
}

pub fn start_typewriters(document: &web::Document, clock: &FrameLoop) {
    for el in dom::query_document(document, TYPEWRITER_SELECTOR) {
        let text = match el.get_attribute(ATTR_TYPEWRITER).filter(|t| !t.is_empty()) {
            Some(t) => t,
            None => el.text_content().unwrap_or_default(),
        };
        let delay = dom::attr_parse::<u64>(&el, ATTR_DELAY)
            .map(Duration::from_millis)
            .unwrap_or(TYPEWRITER_DELAY);
        let start_delay = dom::attr_parse::<u64>(&el, ATTR_START_DELAY)
            .map(Duration::from_millis)
            .unwrap_or(TYPEWRITER_START_DELAY);
        let clock = clock.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let chars = text.chars().count();
            if type_text(el, text, delay, start_delay, clock).await {
                log::debug!("[typewriter] typed {} chars", chars);
            }
        });
    }
}

// ---------------- Scroll-linked reveal ----------------

pub struct ScrollRevealBinding {
    element: web::Element,
    reveal: SegmentReveal,
    spans: Vec<web::Element>,
}

impl ScrollRevealBinding {
    pub fn update(&self, viewport_height: f32) {
        let rect = dom::rect_of(&self.element);
        let p = element_progress(rect.top, rect.height, viewport_height);
        for (span, style) in self.spans.iter().zip(self.reveal.apply(p)) {
            dom::set_style(span, "opacity", &format!("{:.3}", style.opacity));
            dom::set_style(span, "font-weight", &format!("{}", style.weight));
        }
    }
}

fn split_into_spans(
    document: &web::Document,
    el: &web::Element,
    reveal: &SegmentReveal,
    mode: SplitMode,
) -> Vec<web::Element> {
    el.set_text_content(Some(""));
    let mut spans = Vec::with_capacity(reveal.len());
    for (i, seg) in reveal.segments().iter().enumerate() {
        if mode == SplitMode::Words && i > 0 {
            let _ = el.append_with_str_1(" ");
        }
        if let Ok(span) = document.create_element("span") {
            span.set_text_content(Some(&seg.source));
            dom::set_style(&span, "transition", "opacity 120ms linear");
            let _ = el.append_child(&span);
            spans.push(span);
        }
    }
    spans
}

pub fn mount_scroll_reveals(document: &web::Document) -> Vec<ScrollRevealBinding> {
    let mut out = Vec::new();
    for el in dom::query_document(document, SCROLL_REVEAL_SELECTOR) {
        let text = el.text_content().unwrap_or_default();
        let mode = el
            .get_attribute(ATTR_SPLIT)
            .and_then(|s| SplitMode::parse(&s))
            .unwrap_or_default();
        let mut reveal = SegmentReveal::new(&text, mode);
        let start = dom::attr_parse::<f32>(&el, ATTR_WINDOW_START);
        let end = dom::attr_parse::<f32>(&el, ATTR_WINDOW_END);
        if start.is_some() || end.is_some() {
            match reveal
                .clone()
                .with_window(start.unwrap_or(0.0), end.unwrap_or(1.0))
            {
                Ok(r) => reveal = r,
                Err(e) => log::warn!("[reveal] {}", e),
            }
        }
        let _ = el.set_attribute("aria-label", text.trim());
        let spans = split_into_spans(document, &el, &reveal, mode);
        out.push(ScrollRevealBinding {
            element: el,
            reveal,
            spans,
        });
    }
    log::debug!("[reveal] {} scroll reveals", out.len());
    out
}

// ---------------- Spinning ring ----------------

pub fn mount_spinning_text(document: &web::Document) {
    for el in dom::query_document(document, SPINNING_SELECTOR) {
        let text = el.text_content().unwrap_or_default();
        let radius = dom::attr_parse::<f32>(&el, ATTR_RADIUS).unwrap_or(DEFAULT_RING_RADIUS_CH);
        el.set_text_content(Some(""));
        let _ = el.set_attribute("aria-label", &text);
        for glyph in ring_layout(&text) {
            let Ok(span) = document.create_element("span") else {
                continue;
            };
            span.set_text_content(Some(&glyph.ch.to_string()));
            let _ = span.set_attribute("aria-hidden", "true");
            dom::set_style(&span, "position", "absolute");
            dom::set_style(&span, "left", "50%");
            dom::set_style(&span, "top", "50%");
            dom::set_style(&span, "transform", &glyph.css_transform(radius));
            dom::set_style(&span, "transform-origin", "center");
            let _ = el.append_child(&span);
        }
    }
}

// ---------------- Scramble ----------------

struct ScrambleTask {
    element: web::Element,
    text: ScrambleText,
}

impl FrameTask for ScrambleTask {
    fn tick(&mut self, time: FrameTime) -> TaskStatus {
        let status = self.text.update(time.now);
        self.element.set_text_content(Some(&self.text.text()));
        status
    }

    fn label(&self) -> &'static str {
        "scramble"
    }
}

pub fn start_scrambles(document: &web::Document, frame_loop: &FrameLoop) {
    let animate = dom::motion_preferences().allows_motion();
    for el in dom::query_document(document, SCRAMBLE_SELECTOR) {
        let source = match el.get_attribute(ATTR_SCRAMBLE).filter(|t| !t.is_empty()) {
            Some(t) => t,
            None => el.text_content().unwrap_or_default(),
        };
        let _ = el.set_attribute("aria-label", &source);
        if !animate {
            el.set_text_content(Some(&source));
            continue;
        }
        frame_loop.register(ScrambleTask {
            element: el,
            text: ScrambleText::new(&source, rand::random()),
        });
    }
}

// ---------------- Staggered entrance ----------------

/// Per-character entrance with a staggered transition delay; triggered once by
/// the scroll effects when the heading enters the viewport.
pub struct StaggerBinding {
    pub element: web::Element,
    spans: Vec<web::Element>,
    revealed: bool,
}

impl StaggerBinding {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn reveal(&mut self) {
        if std::mem::replace(&mut self.revealed, true) {
            return;
        }
        for span in &self.spans {
            dom::set_style(span, "opacity", "1");
            dom::set_style(span, "transform", "translateY(0) rotateX(0deg)");
        }
    }
}

pub fn mount_staggered(document: &web::Document) -> Vec<StaggerBinding> {
    let mut out = Vec::new();
    for el in dom::query_document(document, STAGGER_SELECTOR) {
        // typewriter elements own their text content
        if el.has_attribute(ATTR_TYPEWRITER) {
            continue;
        }
        let text = el.text_content().unwrap_or_default();
        el.set_text_content(Some(""));
        let mut spans = Vec::new();
        for (i, ch) in text.chars().enumerate() {
            let Ok(span) = document.create_element("span") else {
                continue;
            };
            span.set_text_content(Some(&ch.to_string()));
            let delay = stagger_delay(i, STAGGER_STEP).as_secs_f32();
            dom::set_style(&span, "display", "inline-block");
            dom::set_style(&span, "opacity", "0");
            dom::set_style(&span, "transform", "translateY(20px) rotateX(90deg)");
            dom::set_style(
                &span,
                "transition",
                &format!("opacity 0.6s ease {delay:.2}s, transform 0.6s ease {delay:.2}s"),
            );
            let _ = el.append_child(&span);
            spans.push(span);
        }
        out.push(StaggerBinding {
            element: el,
            spans,
            revealed: false,
        });
    }
    out
}
