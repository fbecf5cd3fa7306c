use crate::constants::*;
use crate::dom;
use crate::frame::FrameLoop;
use crate::particles::ParticleMount;
use folio_core::cursor::SmoothCursor;
use folio_core::{EffectError, FrameTask, FrameTime, TaskStatus};
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// Shared handle to the custom cursor. Pointer input is ignored until
/// [`CursorBinding::enable`] is called after the loading screen is gone.
#[derive(Clone)]
pub struct CursorBinding {
    cursor: Rc<RefCell<SmoothCursor>>,
    element: web::Element,
    armed: Rc<Cell<bool>>,
    enabled: Rc<Cell<bool>>,
    frame_loop: FrameLoop,
}

struct CursorTask {
    binding: CursorBinding,
}

impl FrameTask for CursorTask {
    fn tick(&mut self, time: FrameTime) -> TaskStatus {
        let status = self.binding.cursor.borrow_mut().update(time);
        self.binding.render();
        if status == TaskStatus::Idle {
            self.binding.armed.set(false);
        }
        status
    }

    fn label(&self) -> &'static str {
        "cursor"
    }
}

impl CursorBinding {
    fn render(&self) {
        let cursor = self.cursor.borrow();
        if cursor.is_visible() {
            dom::set_style(&self.element, "display", "block");
            dom::set_style(&self.element, "transform", &cursor.transform());
        } else {
            dom::set_style(&self.element, "display", "none");
        }
    }

    fn arm(&self) {
        if !self.armed.replace(true) {
            self.frame_loop.register(CursorTask {
                binding: self.clone(),
            });
        }
    }

    pub fn enable(&self) {
        if !self.cursor.borrow().is_enabled() {
            return;
        }
        self.enabled.set(true);
        if let Some(body) = dom::window_document().and_then(|d| d.body()) {
            let _ = body.class_list().add_1(CURSOR_ACTIVE_CLASS);
        }
        log::info!("[cursor] enabled");
    }

    fn pointer_moved(&self, client: Vec2) {
        if !self.enabled.get() {
            return;
        }
        let now = self.frame_loop.now();
        let wake = self.cursor.borrow_mut().pointer_moved(client, now);
        if wake {
            self.arm();
        }
    }

    fn pointer_left(&self) {
        self.cursor.borrow_mut().pointer_left();
        self.render();
        self.arm();
    }

    /// Flag the glyph while it sits on top of a particle.
    pub fn track_particles(&self, particles: &ParticleMount) {
        let cursor = self.cursor.clone();
        let element = self.element.clone();
        let container = particles.container.clone();
        particles.field.borrow_mut().subscribe(move |field| {
            let c = cursor.borrow();
            if !c.is_visible() {
                return;
            }
            let local = dom::rect_of(&container).to_local(c.position());
            let cl = element.class_list();
            if field.contains(local) {
                let _ = cl.add_1(CURSOR_ON_PARTICLE_CLASS);
            } else {
                let _ = cl.remove_1(CURSOR_ON_PARTICLE_CLASS);
            }
        });
    }
}

pub fn mount(document: &web::Document, frame_loop: &FrameLoop) -> anyhow::Result<CursorBinding> {
    let element = document
        .get_element_by_id(CURSOR_ID)
        .ok_or_else(|| EffectError::MissingElement(format!("#{}", CURSOR_ID)))?;
    let cursor = SmoothCursor::new(dom::motion_preferences());
    dom::set_style(&element, "display", "none");
    dom::set_style(&element, "pointer-events", "none");

    let binding = CursorBinding {
        cursor: Rc::new(RefCell::new(cursor)),
        element,
        armed: Rc::new(Cell::new(false)),
        enabled: Rc::new(Cell::new(false)),
        frame_loop: frame_loop.clone(),
    };
    if !binding.cursor.borrow().is_enabled() {
        // unsupported environment: keep the system pointer, wire nothing
        return Ok(binding);
    }

    if let Some(window) = web::window() {
        let b = binding.clone();
        dom::listen(&window, "pointermove", move |ev: web::PointerEvent| {
            b.pointer_moved(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
        });
    }
    let b = binding.clone();
    dom::listen(document, "mouseout", move |ev: web::MouseEvent| {
        // no related target means the pointer left the viewport
        if ev.related_target().is_none() {
            b.pointer_left();
        }
    });
    Ok(binding)
}
