use crate::constants::*;
use crate::dom;
use folio_core::dock::{Dock, DockEntry, DockTarget, SetupGuard};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Bottom navigation dock. Mounting is guarded per instance so a second
/// `mount` on the same controller never doubles the listeners.
#[derive(Default)]
pub struct DockController {
    guard: SetupGuard,
    dock: Rc<RefCell<Dock>>,
    root: Option<web::Element>,
    items: Rc<Vec<web::Element>>,
}

fn entry_of(item: &web::Element) -> DockEntry {
    let label = item
        .get_attribute("aria-label")
        .filter(|l| !l.is_empty())
        .or_else(|| item.text_content())
        .unwrap_or_default();
    let href = item.get_attribute("href").unwrap_or_default();
    DockEntry {
        label: label.trim().to_string(),
        href,
    }
}

fn render_scales(dock: &Dock, items: &[web::Element]) {
    for (i, item) in items.iter().enumerate() {
        dom::set_style(item, "transform", &format!("scale({})", dock.scale_of(i)));
    }
}

fn follow(target: DockTarget) {
    let Some(window) = web::window() else {
        return;
    };
    match target {
        DockTarget::Anchor(id) => {
            let el = window.document().and_then(|d| d.get_element_by_id(&id));
            match el {
                Some(el) => {
                    let opts = web::ScrollIntoViewOptions::new();
                    opts.set_behavior(web::ScrollBehavior::Smooth);
                    el.scroll_into_view_with_scroll_into_view_options(&opts);
                }
                None => log::warn!("[dock] no section #{}", id),
            }
        }
        DockTarget::External(url) => {
            let _ = window.location().set_href(&url);
        }
    }
}

impl DockController {
    pub fn new() -> Self {
        Self::default()
    }

    /// The bound `#dock` was detached or another node now carries the id.
    fn is_stale(&self, found: Option<&web::Element>) -> bool {
        let Some(bound) = &self.root else {
            return false;
        };
        !bound.is_connected() || found.is_some_and(|el| el != bound)
    }

    /// Wire hover and click handling. Returns `false` when the current
    /// `#dock` is already bound.
    pub fn mount(&mut self, document: &web::Document) -> anyhow::Result<bool> {
        let found = document.get_element_by_id(DOCK_ID);
        let stale = self.is_stale(found.as_ref());
        if !self.guard.claim_if_stale(stale) {
            log::debug!("[dock] already mounted");
            return Ok(false);
        }
        if stale {
            log::info!("[dock] element replaced, rebinding");
        }
        let Some(root) = found else {
            self.guard.reset();
            return Err(folio_core::EffectError::MissingElement(format!("#{}", DOCK_ID)).into());
        };
        let items = dom::query_all(&root, DOCK_ITEM_SELECTOR);
        *self.dock.borrow_mut() = Dock::new(items.iter().map(entry_of).collect());
        let items = Rc::new(items);

        for (i, item) in items.iter().enumerate() {
            dom::set_style(item, "transition", DOCK_TRANSITION);
            dom::set_style(item, "transform-origin", "bottom center");

            let (dock, all) = (self.dock.clone(), items.clone());
            dom::listen(item, "mouseenter", move |_: web::Event| {
                let mut d = dock.borrow_mut();
                d.hover(Some(i));
                render_scales(&d, &all);
            });
            let (dock, all) = (self.dock.clone(), items.clone());
            dom::listen(item, "mouseleave", move |_: web::Event| {
                let mut d = dock.borrow_mut();
                if d.hovered() == Some(i) {
                    d.hover(None);
                }
                render_scales(&d, &all);
            });
            let dock = self.dock.clone();
            dom::listen(item, "click", move |ev: web::MouseEvent| {
                ev.prevent_default();
                let target = dock.borrow().click(i);
                if let Some(target) = target {
                    follow(target);
                }
            });
        }

        log::info!("[dock] {} items", items.len());
        self.root = Some(root);
        self.items = items;
        self.set_interactive(false);
        Ok(true)
    }

    pub fn set_interactive(&self, interactive: bool) {
        let mut dock = self.dock.borrow_mut();
        dock.set_interactive(interactive);
        render_scales(&dock, &self.items);
        if let Some(root) = &self.root {
            let cl = root.class_list();
            let _ = if interactive {
                cl.remove_1(DOCK_HIDDEN_CLASS)
            } else {
                cl.add_1(DOCK_HIDDEN_CLASS)
            };
        }
    }
}
