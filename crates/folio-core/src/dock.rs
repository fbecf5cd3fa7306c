use crate::constants::{DOCK_HOVER_SCALE, DOCK_NEIGHBOR_SCALE};

/// Per-instance one-time setup flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SetupGuard {
    claimed: bool,
}

impl SetupGuard {
    /// `true` the first time only.
    pub fn claim(&mut self) -> bool {
        !std::mem::replace(&mut self.claimed, true)
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed
    }

    pub fn reset(&mut self) {
        self.claimed = false;
    }

    /// Release first when the previous setup no longer applies, then claim.
    pub fn claim_if_stale(&mut self, stale: bool) -> bool {
        if stale {
            self.reset();
        }
        self.claim()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DockTarget {
    /// In-page anchor id, without the leading '#'.
    Anchor(String),
    External(String),
}

impl DockTarget {
    pub fn from_href(href: &str) -> Option<Self> {
        let href = href.trim();
        if href.is_empty() || href == "#" {
            return None;
        }
        match href.strip_prefix('#') {
            Some(id) => Some(DockTarget::Anchor(id.to_string())),
            None => Some(DockTarget::External(href.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DockEntry {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, Default)]
pub struct Dock {
    entries: Vec<DockEntry>,
    hovered: Option<usize>,
    interactive: bool,
}

impl Dock {
    pub fn new(entries: Vec<DockEntry>) -> Self {
        Self {
            entries,
            hovered: None,
            interactive: false,
        }
    }

    pub fn entries(&self) -> &[DockEntry] {
        &self.entries
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
        if !interactive {
            self.hovered = None;
        }
    }

    pub fn hover(&mut self, index: Option<usize>) {
        self.hovered = index.filter(|i| *i < self.entries.len() && self.interactive);
    }

    /// Hovered icon grows; its direct neighbours grow a little.
    pub fn scale_of(&self, index: usize) -> f32 {
        match self.hovered {
            Some(h) if h == index => DOCK_HOVER_SCALE,
            Some(h) if h.abs_diff(index) == 1 => DOCK_NEIGHBOR_SCALE,
            _ => 1.0,
        }
    }

    pub fn click(&self, index: usize) -> Option<DockTarget> {
        if !self.interactive {
            log::debug!("[dock] click on {} ignored before reveal", index);
            return None;
        }
        self.entries
            .get(index)
            .and_then(|e| DockTarget::from_href(&e.href))
    }
}
