use crate::constants::*;
use crate::dom;
use crate::frame::FrameLoop;
use folio_core::carousel::{Axis, MarqueeConfig, MarqueeTrack, Pager};
use folio_core::constants::RESIZE_DEBOUNCE;
use folio_core::frame::Debounce;
use folio_core::{FrameTask, FrameTime, TaskStatus};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedTrack = Rc<RefCell<MarqueeTrack>>;

// ---------------- Marquee ----------------

struct MarqueeView {
    container: web::Element,
    slides: Vec<web::Element>,
    // slots[i] shows slide i % slides.len()
    slots: Vec<web::Element>,
    gap: f32,
}

impl MarqueeView {
    fn measure(&mut self, track: &mut MarqueeTrack) {
        let axis = track.config().axis;
        let extent = |el: &web::Element| {
            let r = el.get_bounding_client_rect();
            match axis {
                Axis::Horizontal => r.width() as f32,
                Axis::Vertical => r.height() as f32,
            }
        };
        let extents: Vec<f32> = self.slides.iter().map(|s| extent(s)).collect();
        let viewport = extent(&self.container);
        track.measure(&extents, self.gap, viewport);

        if axis == Axis::Horizontal {
            let tallest = self
                .slides
                .iter()
                .map(|s| s.get_bounding_client_rect().height())
                .fold(0.0_f64, f64::max);
            dom::set_style(&self.container, "height", &format!("{}px", tallest));
        }
        self.ensure_slots(track.slots_needed());
    }

    fn ensure_slots(&mut self, needed: usize) {
        let n = self.slides.len();
        while self.slots.len() < needed && n > 0 {
            let i = self.slots.len();
            let template = &self.slides[i % n];
            let slot = if i < n {
                template.clone()
            } else {
                match template
                    .clone_node_with_deep(true)
                    .ok()
                    .and_then(|node| node.dyn_into::<web::Element>().ok())
                {
                    Some(el) => {
                        let _ = el.set_attribute("aria-hidden", "true");
                        let _ = self.container.append_child(&el);
                        el
                    }
                    None => break,
                }
            };
            dom::set_style(&slot, "position", "absolute");
            dom::set_style(&slot, "top", "0");
            dom::set_style(&slot, "left", "0");
            dom::set_style(&slot, "will-change", "transform");
            self.slots.push(slot);
        }
    }

    fn render(&self, track: &MarqueeTrack) {
        let axis = track.config().axis;
        for p in track.placements() {
            if let Some(slot) = self.slots.get(p.slot) {
                dom::set_style(slot, "transform", &axis.css_translate(p.offset));
            }
        }
    }
}

struct MarqueeTask {
    track: SharedTrack,
    view: MarqueeView,
    remeasure: Rc<RefCell<Debounce>>,
}

impl FrameTask for MarqueeTask {
    fn tick(&mut self, time: FrameTime) -> TaskStatus {
        let mut track = self.track.borrow_mut();
        if self.remeasure.borrow_mut().poll(time.now) {
            self.view.measure(&mut track);
        }
        track.update(time.dt);
        self.view.render(&track);
        TaskStatus::Continue
    }

    fn label(&self) -> &'static str {
        "marquee"
    }
}

fn marquee_config(el: &web::Element) -> MarqueeConfig {
    let mut config = MarqueeConfig::default();
    if let Some(axis) = el.get_attribute(ATTR_DIRECTION).and_then(|s| Axis::parse(&s)) {
        config.axis = axis;
    }
    config.reverse = el.has_attribute(ATTR_REVERSE);
    if let Some(speed) = dom::attr_parse::<f32>(el, ATTR_SPEED).filter(|s| *s >= 0.0) {
        config.speed = speed;
    }
    config
}

fn hold_on_hover(target: &web::Element, hold: impl Fn(bool) + Clone + 'static) {
    for (event, held) in [
        ("mouseenter", true),
        ("mouseleave", false),
        ("touchstart", true),
        ("touchend", false),
        ("touchcancel", false),
    ] {
        let hold = hold.clone();
        dom::listen(target, event, move |_: web::Event| hold(held));
    }
}

pub fn mount_marquees(document: &web::Document, frame_loop: &FrameLoop) -> Vec<SharedTrack> {
    let mut tracks = Vec::new();
    for container in dom::query_document(document, MARQUEE_SELECTOR) {
        let slides = dom::query_all(&container, ":scope > *");
        if slides.is_empty() {
            log::warn!("[marquee] no slides, skipping");
            continue;
        }
        dom::set_style(&container, "position", "relative");
        dom::set_style(&container, "overflow", "hidden");

        let gap = dom::attr_parse::<f32>(&container, ATTR_GAP).unwrap_or(DEFAULT_MARQUEE_GAP);
        let track: SharedTrack = Rc::new(RefCell::new(MarqueeTrack::new(marquee_config(&container))));
        let mut view = MarqueeView {
            container: container.clone(),
            slides,
            slots: Vec::new(),
            gap,
        };
        view.measure(&mut track.borrow_mut());

        let t = track.clone();
        hold_on_hover(&container, move |held| t.borrow_mut().set_held(held));

        let remeasure = Rc::new(RefCell::new(Debounce::new(RESIZE_DEBOUNCE)));
        if let Some(window) = web::window() {
            let r = remeasure.clone();
            let clock = frame_loop.clone();
            dom::listen(&window, "resize", move |_: web::Event| {
                r.borrow_mut().trigger(clock.now());
            });
            let r = remeasure.clone();
            let clock = frame_loop.clone();
            dom::listen(&window, LOADING_COMPLETE_EVENT, move |_: web::Event| {
                r.borrow_mut().trigger(clock.now());
            });
        }

        frame_loop.register(MarqueeTask {
            track: track.clone(),
            view,
            remeasure,
        });
        tracks.push(track);
    }
    log::debug!("[marquee] {} tracks", tracks.len());
    tracks
}

// ---------------- Pager ----------------

#[derive(Clone)]
struct PagerView {
    pager: Rc<RefCell<Pager>>,
    frame_loop: FrameLoop,
    armed: Rc<Cell<bool>>,
    track: Option<web::Element>,
    prev: Option<web::Element>,
    next: Option<web::Element>,
    counter: Option<web::Element>,
}

fn set_enabled(el: &Option<web::Element>, enabled: bool) {
    if let Some(el) = el {
        if enabled {
            let _ = el.remove_attribute("disabled");
            let _ = el.set_attribute("aria-disabled", "false");
        } else {
            let _ = el.set_attribute("disabled", "");
            let _ = el.set_attribute("aria-disabled", "true");
        }
    }
}

impl PagerView {
    fn render(&self) {
        let pager = self.pager.borrow();
        if let Some(track) = &self.track {
            dom::set_style(
                track,
                "transform",
                &format!("translateX(-{}%)", pager.index() * 100),
            );
        }
        let controls = pager.controls();
        set_enabled(&self.prev, controls.prev_enabled);
        set_enabled(&self.next, controls.next_enabled);
        if let Some(counter) = &self.counter {
            counter.set_text_content(Some(&pager.counter()));
        }
    }

    /// Keep one autoplay task running while there is a slide left to reach.
    fn arm(&self) {
        if self.pager.borrow().autoplay_active() && !self.armed.replace(true) {
            self.frame_loop.register(PagerTask { view: self.clone() });
        }
    }
}

struct PagerTask {
    view: PagerView,
}

impl FrameTask for PagerTask {
    fn tick(&mut self, time: FrameTime) -> TaskStatus {
        let moved = self.view.pager.borrow_mut().update(time.dt);
        if moved {
            self.view.render();
        }
        if self.view.pager.borrow().autoplay_active() {
            TaskStatus::Continue
        } else {
            self.view.armed.set(false);
            TaskStatus::Idle
        }
    }

    fn label(&self) -> &'static str {
        "pager"
    }
}

fn first(root: &web::Element, selector: &str) -> Option<web::Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn mount_pagers(document: &web::Document, frame_loop: &FrameLoop) {
    for root in dom::query_document(document, PAGER_SELECTOR) {
        let slides = dom::query_all(&root, PAGER_SLIDE_SELECTOR);
        let mut pager = Pager::new(slides.len());
        if let Some(ms) = dom::attr_parse::<u64>(&root, ATTR_AUTOPLAY) {
            pager = pager.with_autoplay(Duration::from_millis(ms));
        }
        let view = PagerView {
            pager: Rc::new(RefCell::new(pager)),
            frame_loop: frame_loop.clone(),
            armed: Rc::new(Cell::new(false)),
            track: first(&root, PAGER_TRACK_SELECTOR),
            prev: first(&root, PAGER_PREV_SELECTOR),
            next: first(&root, PAGER_NEXT_SELECTOR),
            counter: first(&root, PAGER_COUNTER_SELECTOR),
        };
        view.render();

        if let Some(prev) = &view.prev {
            let v = view.clone();
            dom::listen(prev, "click", move |_: web::MouseEvent| {
                let moved = v.pager.borrow_mut().prev();
                if moved {
                    v.render();
                    v.arm();
                }
            });
        }
        if let Some(next) = &view.next {
            let v = view.clone();
            dom::listen(next, "click", move |_: web::MouseEvent| {
                let moved = v.pager.borrow_mut().next();
                if moved {
                    v.render();
                    v.arm();
                }
            });
        }
        let p = view.pager.clone();
        hold_on_hover(&root, move |held| p.borrow_mut().set_held(held));

        view.arm();
    }
}
