use crate::{
    Axis, Behavior, Decision, Region, RegionDecl, Regions, ScrollOrigin, ScrollSurface,
    TouchEvent, ViewHandle,
};

/// A header that collapses as the content below it scrolls up.
///
/// Regions: an empty spacer as large as the viewport (room to pull the header down), the
/// header, then the content. Pulling past the resting position is damped and springs back to
/// `0` on release.
#[derive(Clone, Debug)]
pub struct CollapsingHeaderBehavior {
    content: ViewHandle,
    header: ViewHandle,
    content_scrollable: bool,
    over_scroll: bool,
}

impl CollapsingHeaderBehavior {
    pub fn new(content: ViewHandle, header: ViewHandle) -> Self {
        Self {
            content,
            header,
            content_scrollable: false,
            over_scroll: true,
        }
    }

    /// Enables (default) or disables pulling the header past its resting position.
    pub fn with_over_scroll(mut self, enabled: bool) -> Self {
        self.over_scroll = enabled;
        self
    }

    pub fn with_scrollable_content(mut self) -> Self {
        self.content_scrollable = true;
        self
    }

    pub fn over_scroll_enabled(&self) -> bool {
        self.over_scroll
    }

    pub fn header(&self) -> ViewHandle {
        self.header
    }

    pub fn content(&self) -> ViewHandle {
        self.content
    }
}

impl Behavior for CollapsingHeaderBehavior {
    fn axis(&self) -> Axis {
        Axis::Vertical
    }

    fn regions(&self) -> Regions {
        Regions {
            prev: RegionDecl::Spacer { inset: 0 },
            mid: RegionDecl::view(self.header),
            next: RegionDecl::View {
                view: self.content,
                scrollable: self.content_scrollable,
            },
        }
    }

    fn handle_dispatch_touch_event(
        &self,
        surface: &mut dyn ScrollSurface,
        event: &TouchEvent,
    ) -> Decision {
        if event.is_release() && surface.offset() < 0 {
            surface.smooth_scroll_to(0);
            return Decision::Yes;
        }
        Decision::Unspecified
    }

    /// Collapsing goes to self first; pulling down lets the content scroll back first.
    fn scroll_self_first(
        &self,
        _surface: &mut dyn ScrollSurface,
        delta: i32,
        _origin: ScrollOrigin,
    ) -> bool {
        delta > 0
    }

    fn handle_scroll_self(
        &self,
        surface: &mut dyn ScrollSurface,
        delta: i32,
        origin: ScrollOrigin,
    ) -> Decision {
        let offset = surface.offset();
        match origin {
            ScrollOrigin::Programmatic if !surface.is_animating() => {
                // A fling never opens the over-scroll.
                if offset <= 0 && delta < 0 {
                    Decision::No
                } else {
                    Decision::Unspecified
                }
            }
            ScrollOrigin::Touch if offset < 0 => {
                if !self.over_scroll {
                    return Decision::No;
                }
                let height = surface.region_size(Region::Mid) as i64;
                if height > 0 {
                    // Resistance grows as the header is pulled further down.
                    let damped = delta as i64 * (offset as i64 + height) / height;
                    surface.scroll_by(damped.clamp(i32::MIN as i64, i32::MAX as i64) as i32);
                }
                Decision::Yes
            }
            _ => Decision::Unspecified,
        }
    }
}
