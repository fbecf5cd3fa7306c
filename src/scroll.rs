use crate::carousel::SharedTrack;
use crate::constants::*;
use crate::dom;
use crate::frame::FrameLoop;
use crate::reveal::{ScrollRevealBinding, StaggerBinding};
use folio_core::scroll::{scroll_progress, should_reveal, GradientTheme, ScrollVelocity};
use folio_core::{FrameTime, TaskStatus};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

struct Section {
    element: web::Element,
    revealed: bool,
}

impl Section {
    fn hide(element: web::Element) -> Self {
        dom::set_style(&element, "opacity", "0");
        dom::set_style(&element, "transform", "translateY(50px) scale(0.95)");
        dom::set_style(
            &element,
            "transition",
            "opacity 0.8s cubic-bezier(0.4, 0, 0.2, 1), transform 0.8s cubic-bezier(0.4, 0, 0.2, 1)",
        );
        Self {
            element,
            revealed: false,
        }
    }

    fn reveal(&mut self) {
        self.revealed = true;
        dom::set_style(&self.element, "opacity", "1");
        dom::set_style(&self.element, "transform", "translateY(0) scale(1)");
        let _ = self.element.class_list().add_1(REVEALED_CLASS);
    }
}

/// Everything that reacts to the scroll position. Work is coalesced into at
/// most one update per animation frame.
pub struct ScrollEffects {
    progress_bar: Option<web::Element>,
    reveals: Vec<ScrollRevealBinding>,
    staggers: Vec<StaggerBinding>,
    sections: Vec<Section>,
    marquees: Vec<SharedTrack>,
    velocity: ScrollVelocity,
    theme: Option<GradientTheme>,
}

impl ScrollEffects {
    pub fn new(
        document: &web::Document,
        reveals: Vec<ScrollRevealBinding>,
        staggers: Vec<StaggerBinding>,
        marquees: Vec<SharedTrack>,
    ) -> Self {
        let sections = dom::query_document(document, SECTION_SELECTOR)
            .into_iter()
            .map(Section::hide)
            .collect();
        Self {
            progress_bar: document.query_selector(PROGRESS_BAR_SELECTOR).ok().flatten(),
            reveals,
            staggers,
            sections,
            marquees,
            velocity: ScrollVelocity::new(),
            theme: None,
        }
    }

    fn update(&mut self, now: std::time::Duration) {
        let Some(window) = web::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let scroll_y = window.scroll_y().unwrap_or(0.0) as f32;
        let vh = dom::viewport_height();
        let doc_h = document
            .document_element()
            .map(|e| e.scroll_height() as f32)
            .unwrap_or(vh);
        let progress = scroll_progress(scroll_y, doc_h, vh);

        let theme = GradientTheme::for_progress(progress);
        if self.theme != Some(theme) {
            if let Some(body) = document.body() {
                let cl = body.class_list();
                for t in GradientTheme::ALL {
                    let _ = cl.remove_1(t.class_name());
                }
                let _ = cl.add_1(theme.class_name());
            }
            self.theme = Some(theme);
        }
        if let Some(bar) = &self.progress_bar {
            dom::set_style(bar, "width", &format!("{:.2}%", progress * 100.0));
        }

        for reveal in &self.reveals {
            reveal.update(vh);
        }
        for stagger in self.staggers.iter_mut().filter(|s| !s.is_revealed()) {
            let r = dom::rect_of(&stagger.element);
            if should_reveal(r.top, r.height, vh) {
                stagger.reveal();
            }
        }
        for section in self.sections.iter_mut().filter(|s| !s.revealed) {
            let r = dom::rect_of(&section.element);
            if should_reveal(r.top, r.height, vh) {
                section.reveal();
            }
        }

        let v = self.velocity.sample(scroll_y, now);
        for track in &self.marquees {
            track.borrow_mut().nudge(v);
        }
    }
}

/// Wire the window scroll listener and run the first update immediately.
pub fn mount(effects: ScrollEffects, frame_loop: &FrameLoop) {
    let effects = Rc::new(RefCell::new(effects));
    effects.borrow_mut().update(frame_loop.now());
    let queued = Rc::new(Cell::new(false));

    let schedule = {
        let effects = effects.clone();
        let frame_loop = frame_loop.clone();
        move || {
            if queued.replace(true) {
                return;
            }
            let effects = effects.clone();
            let queued = queued.clone();
            frame_loop.register(move |time: FrameTime| {
                queued.set(false);
                effects.borrow_mut().update(time.now);
                TaskStatus::Idle
            });
        }
    };
    let schedule = Rc::new(schedule);

    if let Some(window) = web::window() {
        let s = schedule.clone();
        dom::listen(&window, "scroll", move |_: web::Event| s());
        let s = schedule.clone();
        dom::listen(&window, "resize", move |_: web::Event| s());
        dom::listen(&window, LOADING_COMPLETE_EVENT, move |_: web::Event| schedule());
    }
    log::debug!(
        "[scroll] {} sections tracked",
        effects.borrow().sections.len()
    );
}
