//! One-shot loading screen choreography.
//!
//! Timeline, relative to the first tick:
//!
//! ```text
//! 0 ........ ticker          counter 0 -> 100 (ease-out)
//! ticker                     overlay fade starts
//! ticker + i*stagger         hero block i revealed
//! ticker + fade + final      overlay removed, dock revealed, completed
//! ```

use crate::constants::*;
use crate::frame::{FrameTime, TaskStatus};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct LoadingTimings {
    pub ticker: Duration,
    pub fade: Duration,
    pub stagger: Duration,
    pub final_delay: Duration,
    pub hero_blocks: usize,
}

impl Default for LoadingTimings {
    fn default() -> Self {
        Self {
            ticker: LOADING_TICKER,
            fade: LOADING_FADE,
            stagger: LOADING_STAGGER,
            final_delay: LOADING_FINAL_DELAY,
            hero_blocks: 0,
        }
    }
}

impl LoadingTimings {
    pub fn hero_at(&self, index: usize) -> Duration {
        self.ticker
            .saturating_add(self.stagger.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX)))
    }

    pub fn removal_at(&self) -> Duration {
        self.ticker + self.fade + self.final_delay
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadingEvent {
    Counter(u8),
    FadeStarted,
    HeroRevealed(usize),
    OverlayRemoved,
    DockRevealed,
    Completed,
}

#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[derive(Clone, Debug)]
pub struct LoadingSequence {
    timings: LoadingTimings,
    started: Option<Duration>,
    counter: Option<u8>,
    fade_started: bool,
    heroes: usize,
    removed: bool,
    completed: bool,
}

impl LoadingSequence {
    pub fn new(timings: LoadingTimings) -> Self {
        Self {
            timings,
            started: None,
            counter: None,
            fade_started: false,
            heroes: 0,
            removed: false,
            completed: false,
        }
    }

    pub fn timings(&self) -> &LoadingTimings {
        &self.timings
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    fn counter_at(&self, elapsed: Duration) -> u8 {
        if self.timings.ticker.is_zero() {
            return 100;
        }
        let t = elapsed.as_secs_f32() / self.timings.ticker.as_secs_f32();
        (ease_out_cubic(t) * 100.0).round() as u8
    }

    pub fn tick(&mut self, time: FrameTime, out: &mut Vec<LoadingEvent>) -> TaskStatus {
        if self.completed {
            return TaskStatus::Idle;
        }
        let start = *self.started.get_or_insert(time.now);
        let elapsed = time.now.saturating_sub(start);

        let value = self.counter_at(elapsed);
        if self.counter.map_or(true, |c| value > c) {
            self.counter = Some(value);
            out.push(LoadingEvent::Counter(value));
        }
        if elapsed < self.timings.ticker {
            return TaskStatus::Continue;
        }

        if !self.fade_started {
            self.fade_started = true;
            log::debug!("[loading] fade out");
            out.push(LoadingEvent::FadeStarted);
        }
        while self.heroes < self.timings.hero_blocks && elapsed >= self.timings.hero_at(self.heroes)
        {
            out.push(LoadingEvent::HeroRevealed(self.heroes));
            self.heroes += 1;
        }
        if !self.removed && elapsed >= self.timings.removal_at() {
            self.removed = true;
            out.push(LoadingEvent::OverlayRemoved);
            out.push(LoadingEvent::DockRevealed);
        }
        if self.removed && self.heroes == self.timings.hero_blocks {
            self.completed = true;
            log::info!("[loading] complete after {:?}", elapsed);
            out.push(LoadingEvent::Completed);
            return TaskStatus::Idle;
        }
        TaskStatus::Continue
    }

    /// Jump to the end, emitting whatever has not happened yet.
    pub fn skip(&mut self, out: &mut Vec<LoadingEvent>) {
        if self.completed {
            return;
        }
        if self.counter != Some(100) {
            self.counter = Some(100);
            out.push(LoadingEvent::Counter(100));
        }
        if !self.fade_started {
            self.fade_started = true;
            out.push(LoadingEvent::FadeStarted);
        }
        while self.heroes < self.timings.hero_blocks {
            out.push(LoadingEvent::HeroRevealed(self.heroes));
            self.heroes += 1;
        }
        if !self.removed {
            self.removed = true;
            out.push(LoadingEvent::OverlayRemoved);
            out.push(LoadingEvent::DockRevealed);
        }
        self.completed = true;
        out.push(LoadingEvent::Completed);
    }
}
