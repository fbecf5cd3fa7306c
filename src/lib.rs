#![cfg(target_arch = "wasm32")]
use folio_core::loading::LoadingEvent;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod carousel;
mod constants;
mod cursor;
mod dock;
mod dom;
mod effects;
mod frame;
mod loading;
mod particles;
mod reveal;
mod scroll;

use frame::FrameLoop;

/// Log and drop a failed optional mount; the page keeps working without it.
fn optional<T>(what: &str, result: anyhow::Result<T>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("[init] {} disabled: {}", what, e);
            None
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let frame_loop = FrameLoop::new();

    // Particles start behind the loading overlay and fade in afterwards.
    let particles = optional("particles", particles::mount(&document, &frame_loop));
    if let Some(p) = &particles {
        dom::set_style(&p.container, "opacity", "0");
        dom::set_style(&p.container, "transition", "opacity 600ms ease-out");
    }
    let cursor = optional("cursor", cursor::mount(&document, &frame_loop));
    if let (Some(c), Some(p)) = (&cursor, &particles) {
        c.track_particles(p);
    }

    reveal::mount_spinning_text(&document);
    let reveals = reveal::mount_scroll_reveals(&document);
    let staggers = reveal::mount_staggered(&document);
    let marquees = carousel::mount_marquees(&document, &frame_loop);
    carousel::mount_pagers(&document, &frame_loop);

    let dock = Rc::new(RefCell::new(dock::DockController::new()));
    optional("dock", dock.borrow_mut().mount(&document));

    scroll::mount(
        scroll::ScrollEffects::new(&document, reveals, staggers, marquees),
        &frame_loop,
    );
    effects::mount_magnetic(&document, &frame_loop);
    effects::mount_ripples(&document);

    let particles_container = particles.map(|p| p.container);
    let fl = frame_loop.clone();
    loading::start(&document, &frame_loop, move |event| match event {
        LoadingEvent::DockRevealed => {
            let Some(doc) = dom::window_document() else {
                return;
            };
            let mut d = dock.borrow_mut();
            // the dock may have been swapped out while the overlay was up
            optional("dock", d.mount(&doc));
            d.set_interactive(true);
        }
        LoadingEvent::Completed => {
            if let Some(container) = &particles_container {
                dom::set_style(container, "opacity", "1");
            }
            if let Some(c) = &cursor {
                c.enable();
            }
            if let Some(doc) = dom::window_document() {
                reveal::start_typewriters(&doc, &fl);
                reveal::start_scrambles(&doc, &fl);
            }
        }
        _ => {}
    });

    log::info!("[init] {} frame tasks", frame_loop.task_count());
    Ok(())
}
