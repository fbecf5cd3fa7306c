use crate::constants::*;
use crate::dom;
use crate::frame::FrameLoop;
use folio_core::constants::RESIZE_DEBOUNCE;
use folio_core::frame::Debounce;
use folio_core::particles::{ParticleConfig, ParticleField, Rgb};
use folio_core::{EffectError, FrameTask, FrameTime, TaskStatus};
use glam::Vec2;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedField = Rc<RefCell<ParticleField>>;

/// Host element plus the canvas it draws on.
pub struct ParticleMount {
    pub field: SharedField,
    pub container: web::Element,
}

struct ParticleCanvas {
    field: SharedField,
    container: web::Element,
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    resize: Rc<RefCell<Debounce>>,
}

impl ParticleCanvas {
    fn refit(&self) {
        let size = dom::measure_canvas(&self.container);
        dom::sync_canvas_backing_size(&self.canvas, size);
        let dpr = size.dpr as f64;
        let _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        self.field.borrow_mut().resize(size);
    }

    fn draw(&self) {
        let field = self.field.borrow();
        let size = field.canvas();
        let color = field.config().color;
        self.ctx
            .clear_rect(0.0, 0.0, size.width as f64, size.height as f64);
        for p in field.particles() {
            let c = p.center();
            self.ctx.begin_path();
            let _ = self
                .ctx
                .arc(c.x as f64, c.y as f64, p.size as f64, 0.0, TAU);
            self.ctx.set_fill_style_str(&color.css_rgba(p.alpha));
            self.ctx.fill();
        }
    }
}

impl FrameTask for ParticleCanvas {
    fn tick(&mut self, time: FrameTime) -> TaskStatus {
        if self.resize.borrow_mut().poll(time.now) {
            self.refit();
        }
        self.field.borrow_mut().step();
        self.draw();
        TaskStatus::Continue
    }

    fn label(&self) -> &'static str {
        "particles"
    }
}

fn config_from(el: &web::Element) -> ParticleConfig {
    let mut config = ParticleConfig::default();
    if let Some(q) = dom::attr_parse::<usize>(el, ATTR_QUANTITY) {
        config.quantity = q;
    }
    if let Some(s) = dom::attr_parse::<f32>(el, ATTR_STATICITY) {
        config.staticity = s;
    }
    if let Some(e) = dom::attr_parse::<f32>(el, ATTR_EASE) {
        config.ease = e;
    }
    if let Some(s) = dom::attr_parse::<f32>(el, ATTR_SIZE) {
        config.size = s;
    }
    if let Some(raw) = el.get_attribute(ATTR_COLOR) {
        match Rgb::from_hex(&raw) {
            Ok(c) => config.color = c,
            Err(e) => log::warn!("[particles] {}", e),
        }
    }
    if let Err(e) = config.validate() {
        log::warn!("[particles] {}; using defaults", e);
        return ParticleConfig::default();
    }
    config
}

fn canvas_in(document: &web::Document, container: &web::Element) -> anyhow::Result<web::HtmlCanvasElement> {
    if let Some(c) = container.dyn_ref::<web::HtmlCanvasElement>() {
        return Ok(c.clone());
    }
    if let Ok(Some(existing)) = container.query_selector("canvas") {
        if let Ok(c) = existing.dyn_into::<web::HtmlCanvasElement>() {
            return Ok(c);
        }
    }
    let canvas = document
        .create_element("canvas")
        .map_err(dom::js_err)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow::anyhow!("created element is not a canvas"))?;
    let _ = canvas.set_attribute("aria-hidden", "true");
    container.append_child(&canvas).map_err(dom::js_err)?;
    Ok(canvas)
}

pub fn mount(document: &web::Document, frame_loop: &FrameLoop) -> anyhow::Result<ParticleMount> {
    let container = document
        .get_element_by_id(PARTICLES_ID)
        .ok_or_else(|| EffectError::MissingElement(format!("#{}", PARTICLES_ID)))?;
    let canvas = canvas_in(document, &container)?;
    let ctx = canvas
        .get_context("2d")
        .map_err(dom::js_err)?
        .and_then(|o| o.dyn_into::<web::CanvasRenderingContext2d>().ok())
        .ok_or_else(|| EffectError::NoContext(format!("#{}", PARTICLES_ID)))?;

    let config = config_from(&container);
    log::info!("[particles] {} particles", config.quantity);
    let field: SharedField = Rc::new(RefCell::new(ParticleField::new(config, rand::random())));
    let resize = Rc::new(RefCell::new(Debounce::new(RESIZE_DEBOUNCE)));

    let task = ParticleCanvas {
        field: field.clone(),
        container: container.clone(),
        canvas,
        ctx,
        resize: resize.clone(),
    };
    task.refit();

    if let Some(window) = web::window() {
        let field_move = field.clone();
        let container_move = container.clone();
        dom::listen(&window, "pointermove", move |ev: web::PointerEvent| {
            let rect = dom::rect_of(&container_move);
            let local = rect.to_local(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
            field_move.borrow_mut().set_pointer(local);
        });

        let clock = frame_loop.clone();
        dom::listen(&window, "resize", move |_: web::Event| {
            resize.borrow_mut().trigger(clock.now());
        });
    }

    frame_loop.register(task);
    Ok(ParticleMount { field, container })
}
