//! Scroll-position driven page effects.

use crate::constants::*;
use std::time::Duration;

/// Fraction of the scrollable distance already scrolled.
pub fn scroll_progress(scroll_y: f32, document_height: f32, viewport_height: f32) -> f32 {
    let range = document_height - viewport_height;
    if range <= 0.0 {
        return 0.0;
    }
    (scroll_y / range).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradientTheme {
    Warm,
    Cool,
}

impl GradientTheme {
    pub const ALL: [GradientTheme; 2] = [GradientTheme::Warm, GradientTheme::Cool];

    pub fn for_progress(p: f32) -> Self {
        if !(GRADIENT_WARM_BELOW..=GRADIENT_WARM_ABOVE).contains(&p) {
            GradientTheme::Warm
        } else {
            GradientTheme::Cool
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            GradientTheme::Warm => "gradient-warm",
            GradientTheme::Cool => "gradient-cool",
        }
    }
}

/// How far an element has travelled through the viewport: 0 while its top is
/// still below the fold, 1 once its bottom has left through the top.
pub fn element_progress(top: f32, height: f32, viewport_height: f32) -> f32 {
    let travel = height + viewport_height;
    if travel <= 0.0 {
        return 0.0;
    }
    ((viewport_height - top) / travel).clamp(0.0, 1.0)
}

/// Entrance trigger for page sections: at least 10% of the element must be
/// visible above a 50px bottom margin.
pub fn should_reveal(top: f32, height: f32, viewport_height: f32) -> bool {
    let visible_bottom = viewport_height - SECTION_REVEAL_MARGIN_PX;
    let overlap = (visible_bottom.min(top + height) - top.max(0.0)).max(0.0);
    if height <= 0.0 {
        return top >= 0.0 && top <= visible_bottom;
    }
    overlap / height >= SECTION_REVEAL_THRESHOLD
}

/// Scroll velocity in px/s from successive samples.
#[derive(Clone, Debug, Default)]
pub struct ScrollVelocity {
    last: Option<(f32, Duration)>,
    velocity: f32,
}

const VELOCITY_SMOOTHING: f32 = 0.3;

impl ScrollVelocity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample(&mut self, scroll_y: f32, now: Duration) -> f32 {
        if let Some((y, at)) = self.last {
            let dt = now.saturating_sub(at).as_secs_f32();
            if dt > 0.0 {
                let raw = (scroll_y - y) / dt;
                self.velocity += (raw - self.velocity) * VELOCITY_SMOOTHING;
            }
        }
        self.last = Some((scroll_y, now));
        self.velocity
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }
}
