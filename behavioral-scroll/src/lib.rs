//! A headless nested-scroll coordinator with pluggable drag/scroll behaviors.
//!
//! For adapter-level utilities (tween-driven settling, flings), see the
//! `behavioral-scroll-adapter` crate.
//!
//! A [`Coordinator`] owns one scroll offset along one axis and three regions laid out in a row:
//! a previous region, the middle (primary content) region and a next region. It receives the
//! touch stream and nested-scroll deltas from the host and delegates every decision to the
//! attached [`Behavior`]:
//!
//! 1. `handle_dispatch_touch_event` may settle a touch event outright (e.g. snap on release).
//! 2. `handle_intercept_touch_event` / `handle_touch_event` decide whether the coordinator
//!    steals and consumes the gesture.
//! 3. `scroll_self_first` decides whether self or the nested child gets first claim on a delta.
//! 4. `handle_scroll_self` decides how self consumes its share.
//!
//! Three reference behaviors are included: [`BottomSheetBehavior`],
//! [`CollapsingHeaderBehavior`] and [`JellyBehavior`].
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - measured region sizes and the viewport geometry after each layout pass
//! - touch events in global coordinates
//! - nested-scroll deltas from independently scrollable children
//! - a way to execute animation requests (or use the adapter crate)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod behavior;
mod bottom_sheet;
mod collapsing_header;
mod coordinator;
mod jelly;
mod options;
mod state;
mod surface;
mod target;
mod types;


pub use behavior::Behavior;
pub use bottom_sheet::{BottomSheetBehavior, SheetPosition};
pub use collapsing_header::CollapsingHeaderBehavior;
pub use coordinator::Coordinator;
pub use hit_test::{HitTest, RectHitTest};
pub use jelly::JellyBehavior;
pub use options::CoordinatorOptions;
pub use state::SurfaceSnapshot;
pub use surface::{ScrollSurface, Surface};
pub use target::NestedScrollTarget;
pub use types::{
    Axis, Decision, Frame, InteractionState, LayoutPass, Point, Rect, Region, RegionDecl,
    RegionSizes, Regions, ScrollAnimation, ScrollOrigin, Span, TouchAction, TouchEvent,
    ViewHandle,
};
