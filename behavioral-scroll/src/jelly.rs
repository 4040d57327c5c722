use crate::{
    Axis, Behavior, Decision, RegionDecl, Regions, ScrollOrigin, ScrollSurface, TouchEvent,
    ViewHandle,
};

/// An elastic rubber band on either axis.
///
/// Offset `0` is the only resting position. The previous/next regions (left/right, or
/// above/below) are the room the middle region can be pulled into; pulling away from rest
/// moves at half speed, and any release springs back to `0`. Flings never move it.
#[derive(Clone, Debug)]
pub struct JellyBehavior {
    axis: Axis,
    mid: ViewHandle,
    mid_scrollable: bool,
    prev: Option<ViewHandle>,
    next: Option<ViewHandle>,
}

impl JellyBehavior {
    pub fn new(axis: Axis, mid: ViewHandle) -> Self {
        Self {
            axis,
            mid,
            mid_scrollable: false,
            prev: None,
            next: None,
        }
    }

    pub fn with_prev(mut self, prev: ViewHandle) -> Self {
        self.prev = Some(prev);
        self
    }

    pub fn with_next(mut self, next: ViewHandle) -> Self {
        self.next = Some(next);
        self
    }

    pub fn with_scrollable_mid(mut self) -> Self {
        self.mid_scrollable = true;
        self
    }
}

fn displaced(surface: &dyn ScrollSurface) -> bool {
    surface.offset() != 0
}

impl Behavior for JellyBehavior {
    fn axis(&self) -> Axis {
        self.axis
    }

    fn regions(&self) -> Regions {
        Regions {
            prev: self.prev.map_or(RegionDecl::Absent, RegionDecl::view),
            mid: RegionDecl::View {
                view: self.mid,
                scrollable: self.mid_scrollable,
            },
            next: self.next.map_or(RegionDecl::Absent, RegionDecl::view),
        }
    }

    fn handle_dispatch_touch_event(
        &self,
        surface: &mut dyn ScrollSurface,
        event: &TouchEvent,
    ) -> Decision {
        if displaced(surface) && event.is_release() {
            surface.smooth_scroll_to(0);
            return Decision::Yes;
        }
        Decision::Unspecified
    }

    fn scroll_self_first(
        &self,
        surface: &mut dyn ScrollSurface,
        _delta: i32,
        _origin: ScrollOrigin,
    ) -> bool {
        displaced(surface)
    }

    fn handle_scroll_self(
        &self,
        surface: &mut dyn ScrollSurface,
        delta: i32,
        origin: ScrollOrigin,
    ) -> Decision {
        match origin {
            ScrollOrigin::Programmatic if !surface.is_animating() => Decision::No,
            ScrollOrigin::Touch => {
                let offset = surface.offset();
                let away_from_rest = (offset < 0 && delta < 0) || (offset > 0 && delta > 0);
                let applied = if away_from_rest { delta / 2 } else { delta };
                surface.scroll_by(applied);
                Decision::Yes
            }
            ScrollOrigin::Programmatic => Decision::Unspecified,
        }
    }
}
