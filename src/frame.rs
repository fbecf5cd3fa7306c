use folio_core::{FrameScheduler, FrameTask};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The page's only `requestAnimationFrame` loop. Runs while at least one
/// task is registered and parks itself otherwise.
#[derive(Clone)]
pub struct FrameLoop {
    inner: Rc<Inner>,
}

struct Inner {
    scheduler: RefCell<FrameScheduler>,
    // Tasks registered while a frame is running land here first.
    pending: RefCell<Vec<Box<dyn FrameTask>>>,
    running: Cell<bool>,
    clock: Instant,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl FrameLoop {
    pub fn new() -> Self {
        let inner = Rc::new(Inner {
            scheduler: RefCell::new(FrameScheduler::new()),
            pending: RefCell::new(Vec::new()),
            running: Cell::new(false),
            clock: Instant::now(),
            callback: RefCell::new(None),
        });
        let weak: Weak<Inner> = Rc::downgrade(&inner);
        let tick = Closure::wrap(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                FrameLoop { inner }.frame();
            }
        }) as Box<dyn FnMut()>);
        *inner.callback.borrow_mut() = Some(tick);
        Self { inner }
    }

    /// Page clock.
    pub fn now(&self) -> Duration {
        self.inner.clock.elapsed()
    }

    pub fn register(&self, task: impl FrameTask + 'static) {
        log::debug!("[frame] queue {}", task.label());
        self.inner.pending.borrow_mut().push(Box::new(task));
        if !self.inner.running.replace(true) {
            self.request();
        }
    }

    pub fn task_count(&self) -> usize {
        self.inner.scheduler.borrow().len() + self.inner.pending.borrow().len()
    }

    fn request(&self) {
        let Some(window) = web::window() else {
            self.inner.running.set(false);
            return;
        };
        if let Some(cb) = self.inner.callback.borrow().as_ref() {
            let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }

    fn frame(&self) {
        let pending = std::mem::take(&mut *self.inner.pending.borrow_mut());
        let more = {
            let mut scheduler = self.inner.scheduler.borrow_mut();
            for task in pending {
                scheduler.register(task);
            }
            scheduler.run_frame(self.now())
        };
        if more || !self.inner.pending.borrow().is_empty() {
            self.request();
        } else {
            log::debug!("[frame] loop parked");
            self.inner.running.set(false);
        }
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}
