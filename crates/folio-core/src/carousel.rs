//! Infinite marquee and paged carousel.
//!
//! The marquee never clones anything itself: it works over a fixed list of
//! measured slides and hands out `(slot, slide, offset)` placements. A slot is
//! a stable index the shell can bind one element to for the life of the page.

use crate::constants::*;
use crate::frame::{FrameTask, FrameTime, TaskStatus};
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "horizontal" | "x" => Some(Axis::Horizontal),
            "vertical" | "y" => Some(Axis::Vertical),
            _ => None,
        }
    }

    pub fn css_translate(&self, px: f32) -> String {
        match self {
            Axis::Horizontal => format!("translate3d({:.2}px, 0, 0)", px),
            Axis::Vertical => format!("translate3d(0, {:.2}px, 0)", px),
        }
    }
}

#[derive(Clone, Debug)]
pub struct MarqueeConfig {
    pub axis: Axis,
    /// Nominal speed in px per second.
    pub speed: f32,
    pub reverse: bool,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Horizontal,
            speed: MARQUEE_SPEED,
            reverse: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub slot: usize,
    pub slide: usize,
    /// Leading edge along the axis, relative to the viewport start.
    pub offset: f32,
}

#[derive(Clone, Debug)]
pub struct MarqueeTrack {
    config: MarqueeConfig,
    /// Leading edge of each slide within one set, gap included.
    starts: Vec<f32>,
    set_extent: f32,
    viewport: f32,
    offset: f32,
    speed: f32,
    held: bool,
    nudge: f32,
}

const NUDGE_DECAY_TAU_SEC: f32 = 0.5;
const STOP_SPEED: f32 = 0.5;

impl MarqueeTrack {
    pub fn new(config: MarqueeConfig) -> Self {
        let speed = config.speed;
        Self {
            config,
            starts: Vec::new(),
            set_extent: 0.0,
            viewport: 0.0,
            offset: 0.0,
            speed,
            held: false,
            nudge: 0.0,
        }
    }

    pub fn config(&self) -> &MarqueeConfig {
        &self.config
    }

    /// Feed post-layout measurements. Each slide is followed by `gap`.
    pub fn measure(&mut self, extents: &[f32], gap: f32, viewport: f32) {
        let mut acc = 0.0;
        self.starts.clear();
        for e in extents {
            self.starts.push(acc);
            acc += e.max(0.0) + gap.max(0.0);
        }
        self.set_extent = acc;
        self.viewport = viewport.max(0.0);
        if self.is_measured() {
            self.offset = self.offset.rem_euclid(self.set_extent);
        } else {
            self.offset = 0.0;
        }
        log::debug!(
            "[marquee] measured {} slides, set={:.1}px viewport={:.1}px",
            extents.len(),
            self.set_extent,
            self.viewport
        );
    }

    pub fn is_measured(&self) -> bool {
        !self.starts.is_empty() && self.set_extent > 0.0
    }

    pub fn set_extent(&self) -> f32 {
        self.set_extent
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Copies of the whole set needed so the viewport never shows a seam.
    pub fn copies_needed(&self) -> usize {
        if !self.is_measured() {
            return 0;
        }
        (self.viewport / self.set_extent).ceil() as usize + 1
    }

    pub fn slots_needed(&self) -> usize {
        self.copies_needed() * self.starts.len()
    }

    /// Slot `s` always shows slide `s % slides`.
    pub fn placements(&self) -> Vec<Placement> {
        let n = self.starts.len();
        let mut out = Vec::with_capacity(self.slots_needed());
        for copy in 0..self.copies_needed() {
            let base = copy as f32 * self.set_extent - self.offset;
            for (slide, start) in self.starts.iter().enumerate() {
                out.push(Placement {
                    slot: copy * n + slide,
                    slide,
                    offset: base + start,
                });
            }
        }
        out
    }

    /// Pointer hover or touch on the track.
    pub fn set_held(&mut self, held: bool) {
        self.held = held;
    }

    /// Scroll velocity in px/s temporarily speeds the track up.
    pub fn nudge(&mut self, scroll_velocity: f32) {
        let boost = (scroll_velocity.abs() * MARQUEE_NUDGE_PER_PX_S).min(MARQUEE_NUDGE_MAX);
        self.nudge = self.nudge.max(boost);
    }

    fn target_speed(&self) -> f32 {
        if self.held {
            0.0
        } else {
            self.config.speed * (1.0 + self.nudge)
        }
    }

    pub fn update(&mut self, dt: Duration) {
        let dt = dt.as_secs_f32();
        if dt <= 0.0 {
            return;
        }
        let alpha = 1.0 - (-dt / MARQUEE_SPEED_TAU_SEC).exp();
        self.speed += (self.target_speed() - self.speed) * alpha;
        if self.held && self.speed < STOP_SPEED {
            self.speed = 0.0;
        }
        self.nudge *= (-dt / NUDGE_DECAY_TAU_SEC).exp();

        if !self.is_measured() {
            return;
        }
        let dir = if self.config.reverse { -1.0 } else { 1.0 };
        self.offset = (self.offset + dir * self.speed * dt).rem_euclid(self.set_extent);
    }
}

impl FrameTask for MarqueeTrack {
    fn tick(&mut self, time: FrameTime) -> TaskStatus {
        self.update(time.dt);
        TaskStatus::Continue
    }

    fn label(&self) -> &'static str {
        "marquee"
    }
}

// ---------------- Paged carousel ----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PagerControls {
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

#[derive(Clone, Debug)]
struct Autoplay {
    interval: Duration,
    elapsed: Duration,
}

#[derive(Clone, Debug)]
pub struct Pager {
    index: usize,
    len: usize,
    held: bool,
    autoplay: Option<Autoplay>,
}

impl Pager {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            held: false,
            autoplay: None,
        }
    }

    pub fn with_autoplay(mut self, interval: Duration) -> Self {
        if !interval.is_zero() {
            self.autoplay = Some(Autoplay {
                interval,
                elapsed: Duration::ZERO,
            });
        }
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn can_prev(&self) -> bool {
        self.index > 0
    }

    pub fn can_next(&self) -> bool {
        self.index + 1 < self.len
    }

    pub fn controls(&self) -> PagerControls {
        PagerControls {
            prev_enabled: self.can_prev(),
            next_enabled: self.can_next(),
        }
    }

    pub fn next(&mut self) -> bool {
        if self.can_next() {
            self.index += 1;
            self.restart_autoplay();
            true
        } else {
            false
        }
    }

    pub fn prev(&mut self) -> bool {
        if self.can_prev() {
            self.index -= 1;
            self.restart_autoplay();
            true
        } else {
            false
        }
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        if self.len == 0 {
            return false;
        }
        let index = index.min(self.len - 1);
        let changed = index != self.index;
        self.index = index;
        self.restart_autoplay();
        changed
    }

    /// "current / total", 1-based.
    pub fn counter(&self) -> String {
        if self.len == 0 {
            return "0 / 0".to_string();
        }
        format!("{} / {}", self.index + 1, self.len)
    }

    pub fn set_held(&mut self, held: bool) {
        self.held = held;
    }

    fn restart_autoplay(&mut self) {
        if let Some(a) = self.autoplay.as_mut() {
            a.elapsed = Duration::ZERO;
        }
    }

    /// Returns `true` when autoplay moved to another slide.
    pub fn update(&mut self, dt: Duration) -> bool {
        if self.held {
            return false;
        }
        let due = match self.autoplay.as_mut() {
            Some(a) => {
                a.elapsed += dt;
                a.elapsed >= a.interval
            }
            None => return false,
        };
        due && self.next()
    }

    pub fn autoplay_active(&self) -> bool {
        self.autoplay.is_some() && self.can_next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmeasured_track_has_no_slots() {
        let t = MarqueeTrack::new(MarqueeConfig::default());
        assert_eq!(t.slots_needed(), 0);
        assert!(t.placements().is_empty());
    }

    #[test]
    fn axis_parse_accepts_aliases() {
        assert_eq!(Axis::parse("y"), Some(Axis::Vertical));
        assert_eq!(Axis::parse(" horizontal "), Some(Axis::Horizontal));
        assert_eq!(Axis::parse("diagonal"), None);
    }
}
