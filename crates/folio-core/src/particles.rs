//! Drifting, pointer-reactive particle field.
//!
//! Positions are in CSS pixels relative to the canvas' top-left corner. The
//! shell scales its drawing context by the device pixel ratio, so nothing in
//! here needs to know about backing-store pixels beyond [`CanvasSize`].

use crate::constants::*;
use crate::error::{ColorError, ConfigError};
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Parse `#rgb` or `#rrggbb`.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let digits = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(s.to_string()))?;
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => return Err(ColorError::BadLength(s.to_string())),
        };
        let channel = |i: usize| {
            expanded
                .get(i..i + 2)
                .and_then(|h| u8::from_str_radix(h, 16).ok())
                .ok_or_else(|| ColorError::BadDigit(s.to_string()))
        };
        Ok(Rgb {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    pub fn css_rgba(&self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, alpha)
    }
}

#[derive(Clone, Debug)]
pub struct ParticleConfig {
    pub quantity: usize,
    /// Higher values make particles less responsive to the pointer.
    pub staticity: f32,
    /// Divisor applied when easing translation toward the pointer target.
    pub ease: f32,
    pub size: f32,
    pub size_variance: f32,
    pub color: Rgb,
    /// Global wind added to every particle each frame.
    pub vx: f32,
    pub vy: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            quantity: PARTICLE_QUANTITY,
            staticity: PARTICLE_STATICITY,
            ease: PARTICLE_EASE,
            size: PARTICLE_SIZE,
            size_variance: PARTICLE_SIZE_VARIANCE,
            color: Rgb::WHITE,
            vx: 0.0,
            vy: 0.0,
        }
    }
}

impl ParticleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.staticity.is_finite() || self.staticity <= 0.0 {
            return Err(ConfigError::NotPositive {
                field: "staticity",
                value: self.staticity,
            });
        }
        if !self.ease.is_finite() || self.ease <= 0.0 {
            return Err(ConfigError::NotPositive {
                field: "ease",
                value: self.ease,
            });
        }
        if !self.size.is_finite() || self.size < 0.0 {
            return Err(ConfigError::Negative {
                field: "size",
                value: self.size,
            });
        }
        if !self.size_variance.is_finite() || self.size_variance < 0.0 {
            return Err(ConfigError::Negative {
                field: "size_variance",
                value: self.size_variance,
            });
        }
        for (field, value) in [("vx", self.vx), ("vy", self.vy)] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
    pub dpr: f32,
}

impl CanvasSize {
    pub fn new(width: f32, height: f32, dpr: f32) -> Self {
        Self { width, height, dpr }
    }

    /// Backing-store dimensions in device pixels.
    pub fn backing_px(&self) -> (u32, u32) {
        let dpr = if self.dpr > 0.0 { self.dpr } else { 1.0 };
        let w = (self.width * dpr).round().max(1.0) as u32;
        let h = (self.height * dpr).round().max(1.0) as u32;
        (w, h)
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x <= self.width && p.y <= self.height
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// Accumulated pointer-attraction offset.
    pub translate: Vec2,
    pub drift: Vec2,
    pub size: f32,
    pub alpha: f32,
    pub target_alpha: f32,
    pub magnetism: f32,
}

impl Particle {
    /// Where the particle is drawn.
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.translate
    }

    fn closest_edge(&self, canvas: &CanvasSize) -> f32 {
        let c = self.center();
        let edges = [
            c.x - self.size,
            canvas.width - c.x - self.size,
            c.y - self.size,
            canvas.height - c.y - self.size,
        ];
        edges.into_iter().fold(f32::MAX, f32::min)
    }

    fn is_outside(&self, canvas: &CanvasSize) -> bool {
        let c = self.center();
        c.x < -self.size
            || c.x > canvas.width + self.size
            || c.y < -self.size
            || c.y > canvas.height + self.size
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

type FrameHook = Box<dyn FnMut(&ParticleField)>;

pub struct ParticleField {
    config: ParticleConfig,
    canvas: CanvasSize,
    particles: Vec<Particle>,
    /// Pointer offset from the canvas centre; zero when the pointer is away.
    pointer: Vec2,
    rng: StdRng,
    hooks: Vec<(SubscriptionId, FrameHook)>,
    next_hook: u32,
    respawned: u64,
}

impl ParticleField {
    pub fn new(config: ParticleConfig, seed: u64) -> Self {
        Self {
            config,
            canvas: CanvasSize::default(),
            particles: Vec::new(),
            pointer: Vec2::ZERO,
            rng: StdRng::seed_from_u64(seed),
            hooks: Vec::new(),
            next_hook: 0,
            respawned: 0,
        }
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Total number of particles replaced after leaving the canvas.
    pub fn respawned(&self) -> u64 {
        self.respawned
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Adopt new canvas dimensions and repopulate from scratch.
    pub fn resize(&mut self, canvas: CanvasSize) {
        self.canvas = canvas;
        self.particles.clear();
        for _ in 0..self.config.quantity {
            let p = self.spawn();
            self.particles.push(p);
        }
        log::debug!(
            "[particles] resized to {:.0}x{:.0}@{:.2}, {} particles",
            canvas.width,
            canvas.height,
            canvas.dpr,
            self.particles.len()
        );
    }

    /// Track the pointer, given in canvas-local CSS pixels. Positions outside
    /// the canvas are ignored so the field keeps its last attraction point.
    pub fn set_pointer(&mut self, local: Vec2) {
        if self.canvas.contains(local) {
            self.pointer = local - Vec2::new(self.canvas.width, self.canvas.height) * 0.5;
        }
    }

    pub fn clear_pointer(&mut self) {
        self.pointer = Vec2::ZERO;
    }

    fn spawn(&mut self) -> Particle {
        let w = self.canvas.width.max(0.0);
        let h = self.canvas.height.max(0.0);
        let pos = Vec2::new(
            (self.rng.gen::<f32>() * w).floor(),
            (self.rng.gen::<f32>() * h).floor(),
        );
        let size = self.config.size + self.rng.gen::<f32>() * self.config.size_variance;
        let target_alpha =
            ((self.rng.gen::<f32>() * PARTICLE_ALPHA_SPAN + PARTICLE_ALPHA_MIN) * 10.0).round()
                / 10.0;
        let drift = Vec2::new(
            self.rng.gen_range(-PARTICLE_DRIFT_MAX..=PARTICLE_DRIFT_MAX),
            self.rng.gen_range(-PARTICLE_DRIFT_MAX..=PARTICLE_DRIFT_MAX),
        );
        let magnetism = PARTICLE_MAGNETISM_MIN + self.rng.gen::<f32>() * PARTICLE_MAGNETISM_SPAN;
        Particle {
            pos,
            translate: Vec2::ZERO,
            drift,
            size,
            alpha: 0.0,
            target_alpha,
            magnetism,
        }
    }

    /// Advance every particle by one frame, replacing any that left the canvas.
    pub fn step(&mut self) {
        let canvas = self.canvas;
        let wind = Vec2::new(self.config.vx, self.config.vy);
        let staticity = self.config.staticity;
        let ease = self.config.ease;
        let pointer = self.pointer;

        for i in 0..self.particles.len() {
            let p = &mut self.particles[i];

            let remap = (p.closest_edge(&canvas) / PARTICLE_EDGE_FADE_PX).max(0.0);
            if remap > 1.0 {
                p.alpha = (p.alpha + PARTICLE_ALPHA_STEP).min(p.target_alpha);
            } else {
                p.alpha = p.target_alpha * remap;
            }

            p.pos += p.drift + wind;
            let target = pointer / (staticity / p.magnetism);
            p.translate += (target - p.translate) / ease;

            if p.is_outside(&canvas) {
                self.particles[i] = self.spawn();
                self.respawned += 1;
            }
        }

        self.notify();
    }

    /// Is `point` (canvas-local CSS pixels) inside any particle's disc?
    pub fn contains(&self, point: Vec2) -> bool {
        self.particles
            .iter()
            .any(|p| p.center().distance_squared(point) <= p.size * p.size)
    }

    pub fn subscribe(&mut self, hook: impl FnMut(&ParticleField) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_hook);
        self.next_hook += 1;
        self.hooks.push((id, Box::new(hook)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.hooks.len();
        self.hooks.retain(|(h, _)| *h != id);
        self.hooks.len() != before
    }

    fn notify(&mut self) {
        if self.hooks.is_empty() {
            return;
        }
        let mut hooks = std::mem::take(&mut self.hooks);
        for (_, hook) in hooks.iter_mut() {
            hook(self);
        }
        // hooks registered from inside a callback land after the existing ones
        hooks.append(&mut self.hooks);
        self.hooks = hooks;
    }
}
