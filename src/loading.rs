use crate::constants::*;
use crate::dom;
use crate::frame::FrameLoop;
use folio_core::loading::{LoadingEvent, LoadingSequence, LoadingTimings};
use folio_core::{FrameTask, FrameTime, TaskStatus};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type EventSink = Box<dyn FnMut(LoadingEvent)>;

struct LoadingScreen {
    overlay: Option<web::Element>,
    counter: Option<web::Element>,
    heroes: Vec<web::Element>,
}

impl LoadingScreen {
    fn apply(&mut self, event: LoadingEvent) {
        match event {
            LoadingEvent::Counter(v) => {
                if let Some(counter) = &self.counter {
                    counter.set_text_content(Some(&format!("{}%", v)));
                }
            }
            LoadingEvent::FadeStarted => {
                if let Some(overlay) = &self.overlay {
                    let _ = overlay.class_list().add_1(LOADING_FADING_CLASS);
                    dom::set_style(overlay, "opacity", "0");
                }
            }
            LoadingEvent::HeroRevealed(i) => {
                if let Some(hero) = self.heroes.get(i) {
                    let _ = hero.class_list().add_1(HERO_REVEALED_CLASS);
                }
            }
            LoadingEvent::OverlayRemoved => {
                if let Some(overlay) = self.overlay.take() {
                    overlay.remove();
                }
            }
            LoadingEvent::DockRevealed => {}
            LoadingEvent::Completed => announce_complete(),
        }
    }
}

/// Let the rest of the page know the intro is over.
fn announce_complete() {
    let Some(window) = web::window() else {
        return;
    };
    if let Ok(ev) = web::CustomEvent::new(LOADING_COMPLETE_EVENT) {
        let _ = window.dispatch_event(&ev);
    }
    // optional third-party scroll library
    let Ok(scroll_trigger) = js_sys::Reflect::get(&window, &JsValue::from_str(SCROLL_TRIGGER_GLOBAL))
    else {
        return;
    };
    if !scroll_trigger.is_object() {
        return;
    }
    if let Ok(refresh) = js_sys::Reflect::get(&scroll_trigger, &JsValue::from_str("refresh")) {
        if let Some(f) = refresh.dyn_ref::<js_sys::Function>() {
            let _ = f.call0(&scroll_trigger);
            log::debug!("[loading] refreshed {}", SCROLL_TRIGGER_GLOBAL);
        }
    }
}

struct LoadingTask {
    sequence: LoadingSequence,
    screen: LoadingScreen,
    events: Vec<LoadingEvent>,
    sink: EventSink,
}

impl LoadingTask {
    fn flush(&mut self) {
        for event in std::mem::take(&mut self.events) {
            self.screen.apply(event);
            (self.sink)(event);
        }
    }
}

impl FrameTask for LoadingTask {
    fn tick(&mut self, time: FrameTime) -> TaskStatus {
        let status = self.sequence.tick(time, &mut self.events);
        self.flush();
        status
    }

    fn label(&self) -> &'static str {
        "loading"
    }
}

/// Play the intro. Every event is applied to the page and then handed to
/// `sink`. Without an overlay the whole sequence is replayed at once.
pub fn start(
    document: &web::Document,
    frame_loop: &FrameLoop,
    sink: impl FnMut(LoadingEvent) + 'static,
) {
    let overlay = document.get_element_by_id(LOADING_ID);
    let heroes = dom::query_document(document, HERO_BLOCK_SELECTOR);
    let timings = LoadingTimings {
        hero_blocks: heroes.len(),
        ..LoadingTimings::default()
    };
    let skip = overlay.is_none();
    let mut task = LoadingTask {
        sequence: LoadingSequence::new(timings),
        screen: LoadingScreen {
            counter: document.get_element_by_id(LOADING_COUNTER_ID),
            overlay,
            heroes,
        },
        events: Vec::new(),
        sink: Box::new(sink),
    };

    if skip {
        log::warn!("[loading] no #{}, skipping intro", LOADING_ID);
        task.sequence.skip(&mut task.events);
        task.flush();
        return;
    }
    log::info!(
        "[loading] intro with {} hero blocks",
        task.sequence.timings().hero_blocks
    );
    frame_loop.register(task);
}
