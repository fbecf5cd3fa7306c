//! Spring-damped replacement for the system pointer.

use crate::constants::*;
use crate::frame::{FrameTask, FrameTime, TaskStatus};
use crate::prefs::MotionPreferences;
use glam::Vec2;
use std::time::Duration;

/// Damped harmonic spring: k = ω², c = 2ωζ, unit mass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub omega: f32,
    pub damping_ratio: f32,
}

impl Spring {
    pub const fn new(omega: f32, damping_ratio: f32) -> Self {
        Self {
            omega,
            damping_ratio,
        }
    }

    /// Semi-implicit Euler step of a scalar toward `target`. Long frames are
    /// split into substeps no longer than [`SPRING_MAX_SUBSTEP_SEC`].
    #[inline]
    pub fn step(&self, value: &mut f32, velocity: &mut f32, target: f32, dt_sec: f32) {
        let k = self.omega * self.omega;
        let c = 2.0 * self.omega * self.damping_ratio;
        let steps = (dt_sec / SPRING_MAX_SUBSTEP_SEC).ceil().max(1.0) as u32;
        let h = dt_sec / steps as f32;
        for _ in 0..steps {
            let accel = k * (target - *value) - c * *velocity;
            *velocity += accel * h;
            *value += *velocity * h;
        }
    }

    #[inline]
    pub fn step_vec2(&self, value: &mut Vec2, velocity: &mut Vec2, target: Vec2, dt_sec: f32) {
        self.step(&mut value.x, &mut velocity.x, target.x, dt_sec);
        self.step(&mut value.y, &mut velocity.y, target.y, dt_sec);
    }
}

pub const POSITION_SPRING: Spring = Spring::new(CURSOR_POSITION_OMEGA, CURSOR_POSITION_DAMPING);
pub const ROTATION_SPRING: Spring = Spring::new(CURSOR_ROTATION_OMEGA, CURSOR_ROTATION_DAMPING);
pub const SCALE_SPRING: Spring = Spring::new(CURSOR_SCALE_OMEGA, CURSOR_SCALE_DAMPING);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorPhase {
    Hidden,
    Visible,
    /// Coarse pointer or reduced motion; never leaves this phase.
    Disabled,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CursorState {
    pub position: Vec2,
    pub target: Vec2,
    pub velocity: Vec2,
    pub rotation: f32,
    pub rotation_target: f32,
    pub rotation_velocity: f32,
    pub scale: f32,
    pub scale_velocity: f32,
    pub phase: CursorPhase,
    pub last_move: Option<Duration>,
}

impl Default for CursorState {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            target: Vec2::ZERO,
            velocity: Vec2::ZERO,
            rotation: 0.0,
            rotation_target: 0.0,
            rotation_velocity: 0.0,
            scale: 1.0,
            scale_velocity: 0.0,
            phase: CursorPhase::Hidden,
            last_move: None,
        }
    }
}

/// Snap a heading in degrees to the nearest quarter turn.
#[inline]
pub fn snap_quarter(deg: f32) -> f32 {
    (deg / 90.0).round() * 90.0
}

/// Shortest signed difference `to - from`, in (-180, 180].
#[inline]
pub fn shortest_delta(from: f32, to: f32) -> f32 {
    let d = (to - from).rem_euclid(360.0);
    if d > 180.0 {
        d - 360.0
    } else {
        d
    }
}

pub struct SmoothCursor {
    state: CursorState,
    last_pointer: Option<(Vec2, Duration)>,
}

impl SmoothCursor {
    pub fn new(prefs: MotionPreferences) -> Self {
        let mut state = CursorState::default();
        if !prefs.allows_cursor() {
            log::info!("[cursor] disabled by environment: {:?}", prefs);
            state.phase = CursorPhase::Disabled;
        }
        Self {
            state,
            last_pointer: None,
        }
    }

    pub fn state(&self) -> &CursorState {
        &self.state
    }

    pub fn phase(&self) -> CursorPhase {
        self.state.phase
    }

    pub fn is_enabled(&self) -> bool {
        self.state.phase != CursorPhase::Disabled
    }

    pub fn is_visible(&self) -> bool {
        self.state.phase == CursorPhase::Visible
    }

    pub fn position(&self) -> Vec2 {
        self.state.position
    }

    /// Returns `true` when the update loop needs (re)scheduling.
    pub fn pointer_moved(&mut self, pos: Vec2, now: Duration) -> bool {
        if self.state.phase == CursorPhase::Disabled {
            return false;
        }
        if self.state.phase == CursorPhase::Hidden {
            // first sighting: appear where the pointer is instead of flying in
            self.state.phase = CursorPhase::Visible;
            self.state.position = pos;
            self.state.velocity = Vec2::ZERO;
            self.last_pointer = None;
        }

        if let Some((prev, at)) = self.last_pointer {
            let elapsed_ms = now.saturating_sub(at).as_secs_f32() * 1000.0;
            let delta = pos - prev;
            if elapsed_ms > 0.0 {
                let speed = delta.length() / elapsed_ms;
                if speed > CURSOR_HEADING_MIN_SPEED {
                    let heading = delta.y.atan2(delta.x).to_degrees() + 90.0;
                    let snapped = snap_quarter(heading);
                    self.state.rotation_target +=
                        shortest_delta(self.state.rotation_target, snapped);
                }
            }
        }

        self.last_pointer = Some((pos, now));
        self.state.target = pos;
        self.state.last_move = Some(now);
        true
    }

    pub fn pointer_left(&mut self) {
        if self.state.phase == CursorPhase::Visible {
            self.state.phase = CursorPhase::Hidden;
            self.last_pointer = None;
        }
    }

    fn scale_target(&self, now: Duration) -> f32 {
        match self.state.last_move {
            Some(t) if now.saturating_sub(t) < CURSOR_IDLE_WINDOW => CURSOR_MOVING_SCALE,
            _ => 1.0,
        }
    }

    pub fn is_converged(&self) -> bool {
        let s = &self.state;
        s.position.distance(s.target) < CURSOR_EPSILON
            && s.velocity.length() < CURSOR_EPSILON
            && (s.rotation - s.rotation_target).abs() < CURSOR_EPSILON
            && s.rotation_velocity.abs() < CURSOR_EPSILON
            && (s.scale - 1.0).abs() < CURSOR_EPSILON
            && s.scale_velocity.abs() < CURSOR_EPSILON
    }

    fn idle_window_elapsed(&self, now: Duration) -> bool {
        self.state
            .last_move
            .map_or(true, |t| now.saturating_sub(t) >= CURSOR_IDLE_WINDOW)
    }

    pub fn update(&mut self, time: FrameTime) -> TaskStatus {
        if self.state.phase == CursorPhase::Disabled {
            return TaskStatus::Idle;
        }
        let dt = time.dt_sec();
        let scale_target = self.scale_target(time.now);
        let s = &mut self.state;
        POSITION_SPRING.step_vec2(&mut s.position, &mut s.velocity, s.target, dt);
        ROTATION_SPRING.step(
            &mut s.rotation,
            &mut s.rotation_velocity,
            s.rotation_target,
            dt,
        );
        SCALE_SPRING.step(&mut s.scale, &mut s.scale_velocity, scale_target, dt);

        if self.is_converged() && (!self.is_visible() || self.idle_window_elapsed(time.now)) {
            // land exactly on target so the next frame starts clean
            let s = &mut self.state;
            s.position = s.target;
            s.velocity = Vec2::ZERO;
            s.rotation = s.rotation_target;
            s.rotation_velocity = 0.0;
            s.scale = 1.0;
            s.scale_velocity = 0.0;
            return TaskStatus::Idle;
        }
        TaskStatus::Continue
    }

    /// CSS transform placing the glyph's centre on the current position.
    pub fn transform(&self) -> String {
        let s = &self.state;
        format!(
            "translate3d({:.2}px, {:.2}px, 0) translate(-50%, -50%) rotate({:.2}deg) scale({:.3})",
            s.position.x, s.position.y, s.rotation, s.scale
        )
    }
}

impl FrameTask for SmoothCursor {
    fn tick(&mut self, time: FrameTime) -> TaskStatus {
        self.update(time)
    }

    fn label(&self) -> &'static str {
        "cursor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortest_delta_wraps() {
        assert_eq!(shortest_delta(0.0, 270.0), -90.0);
        assert_eq!(shortest_delta(350.0, 10.0), 20.0);
        assert_eq!(shortest_delta(90.0, 90.0), 0.0);
    }

    #[test]
    fn snap_quarter_rounds_to_nearest() {
        assert_eq!(snap_quarter(44.0), 0.0);
        assert_eq!(snap_quarter(46.0), 90.0);
        assert_eq!(snap_quarter(-100.0), -90.0);
    }
}
