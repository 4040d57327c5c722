use crate::ScrollOrigin;

/// An independently scrollable child hosted inside a region (a list, a web view, ...).
///
/// The coordinator only consumes this contract: when it arbitrates a delta, it offers the
/// target its share and expects back how much of it the target used.
pub trait NestedScrollTarget {
    /// Whether the target can scroll any further in `direction` (`< 0` backward, `> 0` forward).
    fn can_scroll(&self, direction: i32) -> bool;

    /// Scrolls by up to `delta` and returns the consumed part.
    ///
    /// The result must have the same sign as `delta` and must not exceed it in magnitude;
    /// the coordinator clamps anything else.
    fn scroll_by(&mut self, delta: i32, origin: ScrollOrigin) -> i32;
}
