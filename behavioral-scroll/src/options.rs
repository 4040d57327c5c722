/// Configuration for [`crate::Coordinator`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordinatorOptions {
    /// Distance (along the axis) a finger must travel before the coordinator starts
    /// dragging itself. Movement below it is swallowed.
    ///
    /// Defaults to `0`: platforms usually apply their own slop before delivering moves.
    pub touch_slop: u32,
}

impl CoordinatorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_touch_slop(mut self, touch_slop: u32) -> Self {
        self.touch_slop = touch_slop;
        self
    }
}
