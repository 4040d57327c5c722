use crate::{Axis, InteractionState};

/// A lightweight, serializable snapshot of a coordinator's scroll surface.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceSnapshot {
    pub axis: Axis,
    pub offset: i32,
    pub min_offset: i32,
    pub max_offset: i32,
    /// `-1`, `0` or `1`.
    pub last_direction: i32,
    pub is_flinging: bool,
    pub state: InteractionState,
}

impl SurfaceSnapshot {
    /// Whether the offset lies within `[min_offset, max_offset]`.
    pub fn in_bounds(&self) -> bool {
        self.min_offset <= self.offset && self.offset <= self.max_offset
    }
}
