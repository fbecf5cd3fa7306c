//! Frame scheduling shared by every animated effect.
//!
//! The browser shell owns exactly one repaint loop and feeds its timestamps to
//! a [`FrameScheduler`]. Effects register a [`FrameTask`] and return
//! [`TaskStatus::Idle`] once they have converged, at which point they drop out
//! of the scheduler. When the scheduler is empty the shell stops requesting
//! frames until something registers again.

use crate::constants::MAX_FRAME_DT;
use fnv::FnvHashMap;
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    /// Time since the page clock started.
    pub now: Duration,
    /// Gap since the previous frame, clamped to [`MAX_FRAME_DT`].
    pub dt: Duration,
}

impl FrameTime {
    pub fn new(now: Duration, dt: Duration) -> Self {
        Self { now, dt }
    }

    #[inline]
    pub fn dt_sec(&self) -> f32 {
        self.dt.as_secs_f32()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskStatus {
    Continue,
    /// Converged; remove from the scheduler after this frame.
    Idle,
}

pub trait FrameTask {
    fn tick(&mut self, time: FrameTime) -> TaskStatus;

    fn label(&self) -> &'static str {
        "task"
    }
}

impl<F> FrameTask for F
where
    F: FnMut(FrameTime) -> TaskStatus,
{
    fn tick(&mut self, time: FrameTime) -> TaskStatus {
        self(time)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u32);

#[derive(Default)]
pub struct FrameScheduler {
    next_id: u32,
    order: SmallVec<[TaskId; 8]>,
    tasks: FnvHashMap<TaskId, Box<dyn FrameTask>>,
    last_frame: Option<Duration>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, task: Box<dyn FrameTask>) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        log::debug!("[frame] register {} as {:?}", task.label(), id);
        self.order.push(id);
        self.tasks.insert(id, task);
        id
    }

    pub fn unregister(&mut self, id: TaskId) -> Option<Box<dyn FrameTask>> {
        self.order.retain(|o| *o != id);
        let task = self.tasks.remove(&id);
        if self.tasks.is_empty() {
            self.last_frame = None;
        }
        task
    }

    pub fn is_registered(&self, id: TaskId) -> bool {
        self.tasks.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Run every registered task once. Returns `true` when another repaint
    /// should be requested.
    pub fn run_frame(&mut self, now: Duration) -> bool {
        let dt = match self.last_frame {
            Some(prev) => now.saturating_sub(prev).min(MAX_FRAME_DT),
            None => Duration::ZERO,
        };
        self.last_frame = Some(now);
        let time = FrameTime::new(now, dt);

        let mut finished: SmallVec<[TaskId; 4]> = SmallVec::new();
        for id in self.order.clone() {
            if let Some(task) = self.tasks.get_mut(&id) {
                if task.tick(time) == TaskStatus::Idle {
                    log::debug!("[frame] {} went idle", task.label());
                    finished.push(id);
                }
            }
        }
        for id in finished {
            self.unregister(id);
        }
        !self.is_empty()
    }
}

/// Trailing-edge debounce: fires once `delay` after the last trigger.
#[derive(Clone, Debug)]
pub struct Debounce {
    delay: Duration,
    pending_since: Option<Duration>,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending_since: None,
        }
    }

    pub fn trigger(&mut self, now: Duration) {
        self.pending_since = Some(now);
    }

    pub fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }

    /// Returns `true` exactly once per burst of triggers.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.pending_since {
            Some(t) if now.saturating_sub(t) >= self.delay => {
                self.pending_since = None;
                true
            }
            _ => false,
        }
    }
}

/// Leading-edge throttle: lets one call through per `interval`.
#[derive(Clone, Debug)]
pub struct Throttle {
    interval: Duration,
    last: Option<Duration>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub fn ready(&mut self, now: Duration) -> bool {
        match self.last {
            Some(t) if now.saturating_sub(t) < self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}

/// Milliseconds for a browser timer, saturating at `i32::MAX`.
pub fn timer_millis(duration: Duration) -> i32 {
    i32::try_from(duration.as_millis()).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_has_zero_dt_and_gaps_are_clamped() {
        let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let log = seen.clone();
        let mut s = FrameScheduler::new();
        s.register(Box::new(move |t: FrameTime| {
            log.borrow_mut().push(t.dt);
            TaskStatus::Continue
        }));
        s.run_frame(Duration::from_millis(1000));
        s.run_frame(Duration::from_millis(1016));
        s.run_frame(Duration::from_millis(5000));
        let seen = seen.borrow();
        assert_eq!(seen[0], Duration::ZERO);
        assert_eq!(seen[1], Duration::from_millis(16));
        assert_eq!(seen[2], MAX_FRAME_DT);
    }
}
