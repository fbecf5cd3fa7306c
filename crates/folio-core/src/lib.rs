pub mod carousel;
pub mod constants;
pub mod cursor;
pub mod dock;
pub mod error;
pub mod frame;
pub mod interaction;
pub mod loading;
pub mod particles;
pub mod prefs;
pub mod reveal;
pub mod scroll;

pub use error::*;
pub use frame::{FrameScheduler, FrameTask, FrameTime, TaskId, TaskStatus};
pub use prefs::MotionPreferences;
