/// User-agent preferences that switch effects off on purpose.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MotionPreferences {
    pub reduced_motion: bool,
    pub coarse_pointer: bool,
}

impl MotionPreferences {
    #[inline]
    pub fn allows_cursor(&self) -> bool {
        !self.reduced_motion && !self.coarse_pointer
    }

    #[inline]
    pub fn allows_motion(&self) -> bool {
        !self.reduced_motion
    }
}
