//! Text reveal effects: typewriter, scroll-linked segment reveal, ring layout
//! and the scramble ("hyper text") variant that settles one glyph at a time.

use crate::constants::*;
use crate::error::ConfigError;
use crate::frame::{FrameTask, FrameTime, TaskStatus};
use rand::prelude::*;
use std::time::Duration;

/// One character or word of an effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub source: String,
    /// What is currently shown; equals `source` once settled.
    pub display: String,
    /// Settled for good. A locked segment is never written again.
    pub locked: bool,
}

impl Segment {
    fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        Self {
            display: source.clone(),
            source,
            locked: false,
        }
    }

    fn lock(&mut self) {
        if !self.locked {
            self.display.clone_from(&self.source);
            self.locked = true;
        }
    }
}

// ---------------- Typewriter ----------------

/// Appends one character per `delay`. The first character shows on the first
/// `advance` call.
#[derive(Clone, Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
    visible: String,
    delay: Duration,
    started: Option<Duration>,
}

impl Typewriter {
    pub fn new(text: &str, delay: Duration) -> Self {
        let chars: Vec<char> = text.chars().collect();
        Self {
            visible: String::with_capacity(text.len()),
            chars,
            shown: 0,
            delay,
            started: None,
        }
    }

    pub fn visible(&self) -> &str {
        &self.visible
    }

    pub fn is_complete(&self) -> bool {
        self.shown >= self.chars.len()
    }

    /// Catch up to `now`; returns the new visible text if anything changed.
    pub fn advance(&mut self, now: Duration) -> Option<&str> {
        if self.is_complete() {
            return None;
        }
        let start = *self.started.get_or_insert(now);
        let elapsed = now.saturating_sub(start);
        let due = if self.delay.is_zero() {
            self.chars.len()
        } else {
            usize::try_from(elapsed.as_nanos() / self.delay.as_nanos())
                .unwrap_or(usize::MAX)
                .saturating_add(1)
        }
        .min(self.chars.len());
        if due <= self.shown {
            return None;
        }
        self.visible.extend(&self.chars[self.shown..due]);
        self.shown = due;
        Some(&self.visible)
    }

    /// Time until the next character is due, `None` once complete.
    pub fn next_due(&self, now: Duration) -> Option<Duration> {
        if self.is_complete() {
            return None;
        }
        let Some(start) = self.started else {
            return Some(Duration::ZERO);
        };
        let at = start.saturating_add(self.delay.saturating_mul(saturating_u32(self.shown)));
        Some(at.saturating_sub(now))
    }
}

// ---------------- Scroll-linked segment reveal ----------------

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SplitMode {
    #[default]
    Chars,
    Words,
}

impl SplitMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "chars" | "char" | "characters" => Some(SplitMode::Chars),
            "words" | "word" => Some(SplitMode::Words),
            _ => None,
        }
    }
}

pub fn split_segments(text: &str, mode: SplitMode) -> Vec<Segment> {
    match mode {
        SplitMode::Chars => text.chars().map(|c| Segment::new(c.to_string())).collect(),
        SplitMode::Words => text.split_whitespace().map(Segment::new).collect(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentStyle {
    pub opacity: f32,
    pub weight: f32,
}

impl SegmentStyle {
    pub fn at(local: f32) -> Self {
        let t = local.clamp(0.0, 1.0);
        Self {
            opacity: REVEAL_MIN_OPACITY + (1.0 - REVEAL_MIN_OPACITY) * t,
            weight: (REVEAL_WEIGHT_FROM + (REVEAL_WEIGHT_TO - REVEAL_WEIGHT_FROM) * t).round(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SegmentReveal {
    segments: Vec<Segment>,
    start: f32,
    end: f32,
}

impl SegmentReveal {
    pub fn new(text: &str, mode: SplitMode) -> Self {
        Self {
            segments: split_segments(text, mode),
            start: 0.0,
            end: 1.0,
        }
    }

    /// Only the `start..end` slice of global progress drives the reveal.
    pub fn with_window(mut self, start: f32, end: f32) -> Result<Self, ConfigError> {
        if !(0.0..1.0).contains(&start) || end <= start || end > 1.0 {
            return Err(ConfigError::BadWindow { start, end });
        }
        self.start = start;
        self.end = end;
        Ok(self)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    fn remap(&self, progress: f32) -> f32 {
        ((progress - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }

    /// Progress of segment `index` for a global progress value.
    pub fn local_progress(&self, index: usize, progress: f32) -> f32 {
        let n = self.segments.len();
        if n == 0 || index >= n {
            return 0.0;
        }
        let p = self.remap(progress);
        let lo = index as f32 / n as f32;
        let hi = (index + 1) as f32 / n as f32;
        if p >= hi {
            1.0
        } else if p <= lo {
            0.0
        } else {
            ((p - lo) / (hi - lo)).clamp(0.0, 1.0)
        }
    }

    /// Styles for every segment. Pure in `progress`.
    pub fn apply(&self, progress: f32) -> Vec<SegmentStyle> {
        (0..self.segments.len())
            .map(|i| SegmentStyle::at(self.local_progress(i, progress)))
            .collect()
    }
}

// ---------------- Spinning ring ----------------

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphPlacement {
    pub ch: char,
    pub angle_deg: f32,
}

impl GlyphPlacement {
    /// Rotate first, then push outward along the rotated axis.
    pub fn css_transform(&self, radius_ch: f32) -> String {
        format!(
            "rotate({:.3}deg) translateY(-{}ch)",
            self.angle_deg, radius_ch
        )
    }
}

pub fn ring_layout(text: &str) -> Vec<GlyphPlacement> {
    let chars: Vec<char> = text.chars().collect();
    let total = chars.len();
    chars
        .into_iter()
        .enumerate()
        .map(|(i, ch)| GlyphPlacement {
            ch,
            angle_deg: 360.0 * i as f32 / total as f32,
        })
        .collect()
}

// ---------------- Staggered entrance ----------------

#[inline]
pub fn stagger_delay(index: usize, step: Duration) -> Duration {
    step.saturating_mul(saturating_u32(index))
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

// ---------------- Scramble ----------------

/// Shows random glyphs that settle left to right into the source text.
pub struct ScrambleText {
    segments: Vec<Segment>,
    glyphs: Vec<char>,
    rng: StdRng,
    started: Option<Duration>,
    last_shuffle: Option<Duration>,
    settle_step: Duration,
}

impl ScrambleText {
    pub fn new(text: &str, seed: u64) -> Self {
        let mut segments = split_segments(text, SplitMode::Chars);
        for s in segments.iter_mut() {
            if s.source.trim().is_empty() {
                s.lock();
            }
        }
        Self {
            segments,
            glyphs: SCRAMBLE_GLYPHS.chars().collect(),
            rng: StdRng::seed_from_u64(seed),
            started: None,
            last_shuffle: None,
            settle_step: SCRAMBLE_SETTLE_STEP,
        }
    }

    pub fn with_settle_step(mut self, step: Duration) -> Self {
        self.settle_step = step;
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.display.as_str()).collect()
    }

    pub fn is_settled(&self) -> bool {
        self.segments.iter().all(|s| s.locked)
    }

    pub fn update(&mut self, now: Duration) -> TaskStatus {
        let start = *self.started.get_or_insert(now);
        let elapsed = now.saturating_sub(start);
        let shuffle = self
            .last_shuffle
            .map_or(true, |t| now.saturating_sub(t) >= SCRAMBLE_FRAME);
        if shuffle {
            self.last_shuffle = Some(now);
        }
        for (i, seg) in self.segments.iter_mut().enumerate() {
            if seg.locked {
                continue;
            }
            if elapsed >= self.settle_step.saturating_mul(saturating_u32(i.saturating_add(1))) {
                seg.lock();
            } else if shuffle {
                if let Some(g) = self.glyphs.choose(&mut self.rng) {
                    seg.display = g.to_string();
                }
            }
        }
        if self.is_settled() {
            TaskStatus::Idle
        } else {
            TaskStatus::Continue
        }
    }
}

impl FrameTask for ScrambleText {
    fn tick(&mut self, time: FrameTime) -> TaskStatus {
        self.update(time.now)
    }

    fn label(&self) -> &'static str {
        "scramble"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_split_on_whitespace() {
        let segs = split_segments("  hello   there world ", SplitMode::Words);
        let words: Vec<&str> = segs.iter().map(|s| s.source.as_str()).collect();
        assert_eq!(words, ["hello", "there", "world"]);
    }

    #[test]
    fn segment_style_endpoints() {
        let lo = SegmentStyle::at(0.0);
        let hi = SegmentStyle::at(1.0);
        assert!((lo.opacity - REVEAL_MIN_OPACITY).abs() < 1e-6);
        assert!((hi.opacity - 1.0).abs() < 1e-6);
        assert_eq!(lo.weight, REVEAL_WEIGHT_FROM);
        assert_eq!(hi.weight, REVEAL_WEIGHT_TO);
    }
}
