use crate::{Axis, Decision, Regions, ScrollOrigin, ScrollSurface, TouchEvent};

/// A scroll/drag policy attached to a [`crate::Coordinator`].
///
/// A behavior declares the axis and the previous/middle/next regions, then answers the
/// coordinator's questions through its hooks. Every hook may answer
/// [`Decision::Unspecified`] to keep the coordinator's default for that decision.
///
/// Hooks must be functions of the observable surface state plus their input. Derived values
/// (e.g. a snap offset computed from the bounds) belong in the behavior and are recomputed in
/// [`Behavior::after_layout`].
pub trait Behavior {
    fn axis(&self) -> Axis;

    /// Region declarations. Read once when the behavior is attached.
    fn regions(&self) -> Regions;

    /// Called after every layout pass, once bounds are up to date.
    fn after_layout(&mut self, _surface: &mut dyn ScrollSurface) {}

    /// First look at every touch event. A definite answer is the final dispatch result.
    fn handle_dispatch_touch_event(
        &self,
        _surface: &mut dyn ScrollSurface,
        _event: &TouchEvent,
    ) -> Decision {
        Decision::Unspecified
    }

    /// Whether the coordinator steals the gesture from the child region under the finger.
    fn handle_intercept_touch_event(
        &self,
        _surface: &mut dyn ScrollSurface,
        _event: &TouchEvent,
    ) -> Decision {
        Decision::Unspecified
    }

    /// Whether the coordinator consumes an event that reached it.
    fn handle_touch_event(&self, _surface: &mut dyn ScrollSurface, _event: &TouchEvent) -> Decision {
        Decision::Unspecified
    }

    /// `true`: self consumes `delta` before the nested target; `false`: the target goes first.
    fn scroll_self_first(
        &self,
        _surface: &mut dyn ScrollSurface,
        _delta: i32,
        _origin: ScrollOrigin,
    ) -> bool {
        false
    }

    /// How self consumes a delta it was offered.
    ///
    /// - `Yes`: the whole delta counts as consumed; movement applied inside the hook stands.
    /// - `No`: nothing is consumed and the delta passes on unchanged.
    /// - `Unspecified`: the coordinator scrolls by the delta, clamped to the bounds.
    fn handle_scroll_self(
        &self,
        _surface: &mut dyn ScrollSurface,
        _delta: i32,
        _origin: ScrollOrigin,
    ) -> Decision {
        Decision::Unspecified
    }
}
