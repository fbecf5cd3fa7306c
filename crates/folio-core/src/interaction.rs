//! Card and button micro-interactions.

use crate::constants::MAGNETIC_STRENGTH;
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    pub fn to_local(&self, client: Vec2) -> Vec2 {
        client - Vec2::new(self.left, self.top)
    }
}

/// Translation that pulls a hovered card toward the pointer.
pub fn magnetic_offset(rect: Rect, pointer: Vec2) -> Vec2 {
    (pointer - rect.center()) * MAGNETIC_STRENGTH
}

pub fn magnetic_transform(rect: Rect, pointer: Vec2) -> String {
    let o = magnetic_offset(rect, pointer);
    format!(
        "translateY(-8px) scale(1.02) translate({:.2}px, {:.2}px)",
        o.x, o.y
    )
}

pub const MAGNETIC_REST: &str = "translateY(0) scale(1) translate(0px, 0px)";

/// Circle covering the element, centred on the click point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub size: f32,
    pub left: f32,
    pub top: f32,
}

pub fn ripple_geometry(rect: Rect, click: Vec2) -> Ripple {
    let size = rect.width.max(rect.height);
    let local = rect.to_local(click);
    Ripple {
        size,
        left: local.x - size / 2.0,
        top: local.y - size / 2.0,
    }
}
