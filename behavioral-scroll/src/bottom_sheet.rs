use crate::{
    Axis, Behavior, Decision, Region, RegionDecl, Regions, ScrollOrigin, ScrollSurface,
    TouchEvent, ViewHandle,
};

/// A resting position of a [`BottomSheetBehavior`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SheetPosition {
    /// Only `min_height` of the sheet is visible (`min_offset`).
    Min,
    /// `mid_height` of the sheet is visible.
    Mid,
    /// The sheet is fully expanded (`max_offset`).
    Max,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Init {
    Uninitialized,
    Initialized,
}

/// A vertical sheet that snaps between three positions.
///
/// The previous region is an empty spacer covering the viewport minus `min_height`. It gives
/// the sheet room to slide down and masks touches above the sheet: those are neither
/// intercepted nor handled, so they reach whatever lies behind the coordinator.
///
/// On release the sheet settles on the next snap position in the direction of the last
/// movement.
#[derive(Clone, Debug)]
pub struct BottomSheetBehavior {
    content: ViewHandle,
    content_scrollable: bool,
    initial: SheetPosition,
    min_height: u32,
    mid_height: u32,
    mid_offset: i32,
    init: Init,
}

impl BottomSheetBehavior {
    /// `mid_height` defaults to `min_height`.
    pub fn new(content: ViewHandle, initial: SheetPosition, min_height: u32) -> Self {
        Self {
            content,
            content_scrollable: false,
            initial,
            min_height,
            mid_height: min_height,
            mid_offset: 0,
            init: Init::Uninitialized,
        }
    }

    pub fn with_mid_height(mut self, mid_height: u32) -> Self {
        self.mid_height = mid_height;
        self
    }

    /// Declares the content as an independently scrollable nested target.
    pub fn with_scrollable_content(mut self) -> Self {
        self.content_scrollable = true;
        self
    }

    pub fn initial_position(&self) -> SheetPosition {
        self.initial
    }

    pub fn min_height(&self) -> u32 {
        self.min_height
    }

    pub fn mid_height(&self) -> u32 {
        self.mid_height
    }

    /// The offset of the middle snap position, as of the last layout pass.
    pub fn mid_offset(&self) -> i32 {
        self.mid_offset
    }

    /// Whether the one-time initial positioning already happened.
    pub fn is_initialized(&self) -> bool {
        self.init == Init::Initialized
    }

    pub fn position_offset(&self, surface: &dyn ScrollSurface, position: SheetPosition) -> i32 {
        match position {
            SheetPosition::Min => surface.min_offset(),
            SheetPosition::Mid => self.mid_offset,
            SheetPosition::Max => surface.max_offset(),
        }
    }

    /// Where a release at the current offset settles.
    fn settle_target(&self, surface: &dyn ScrollSurface) -> i32 {
        let forward = surface.last_direction() > 0;
        if surface.offset() > self.mid_offset {
            if forward {
                surface.max_offset()
            } else {
                self.mid_offset
            }
        } else if forward {
            self.mid_offset
        } else {
            surface.min_offset()
        }
    }

    fn mask(&self, surface: &dyn ScrollSurface, event: &TouchEvent) -> Decision {
        if surface.region_contains(Region::Prev, event.x, event.y) {
            Decision::No
        } else {
            Decision::Unspecified
        }
    }
}

impl Behavior for BottomSheetBehavior {
    fn axis(&self) -> Axis {
        Axis::Vertical
    }

    fn regions(&self) -> Regions {
        Regions {
            prev: RegionDecl::Spacer {
                inset: self.min_height,
            },
            mid: RegionDecl::View {
                view: self.content,
                scrollable: self.content_scrollable,
            },
            next: RegionDecl::Absent,
        }
    }

    fn after_layout(&mut self, surface: &mut dyn ScrollSurface) {
        let mid = surface.min_offset() as i64 + self.mid_height as i64 - self.min_height as i64;
        self.mid_offset = mid.clamp(i32::MIN as i64, i32::MAX as i64) as i32;

        if self.init == Init::Uninitialized {
            self.init = Init::Initialized;
            let target = self.position_offset(surface, self.initial);
            bdebug!(position = ?self.initial, target, "bottom sheet initial position");
            surface.scroll_to(target);
        }
    }

    fn handle_dispatch_touch_event(
        &self,
        surface: &mut dyn ScrollSurface,
        event: &TouchEvent,
    ) -> Decision {
        if event.is_release() && surface.offset() != 0 && surface.last_direction() != 0 {
            let target = self.settle_target(surface);
            btrace!(
                offset = surface.offset(),
                direction = surface.last_direction(),
                target,
                "bottom sheet settle"
            );
            surface.smooth_scroll_to(target);
            return Decision::Yes;
        }
        Decision::Unspecified
    }

    fn handle_intercept_touch_event(
        &self,
        surface: &mut dyn ScrollSurface,
        event: &TouchEvent,
    ) -> Decision {
        self.mask(surface, event)
    }

    fn handle_touch_event(&self, surface: &mut dyn ScrollSurface, event: &TouchEvent) -> Decision {
        self.mask(surface, event)
    }

    fn scroll_self_first(
        &self,
        surface: &mut dyn ScrollSurface,
        _delta: i32,
        _origin: ScrollOrigin,
    ) -> bool {
        surface.offset() != 0
    }

    fn handle_scroll_self(
        &self,
        surface: &mut dyn ScrollSurface,
        delta: i32,
        _origin: ScrollOrigin,
    ) -> Decision {
        if surface.is_flinging() {
            // A fling moves the sheet the way a drag would, and never leaks past it.
            surface.scroll_by(delta);
            Decision::Yes
        } else {
            Decision::Unspecified
        }
    }
}
