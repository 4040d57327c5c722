use alloc::boxed::Box;
use core::fmt;

use crate::{
    Axis, Frame, HitTest, InteractionState, Point, Rect, RectHitTest, Region, ScrollAnimation,
    Span, SurfaceSnapshot,
};

/// The coordinator's scrollable state, as seen by a [`crate::Behavior`].
///
/// Every mutation is clamped to `[min_offset, max_offset]`: behaviors that want an over-scroll
/// effect get room for it from their previous/next regions, never from escaping the bounds.
pub trait ScrollSurface {
    fn axis(&self) -> Axis;

    /// The current offset along the axis.
    fn offset(&self) -> i32;

    fn min_offset(&self) -> i32;

    fn max_offset(&self) -> i32;

    /// Sign (`-1`, `0`, `1`) of the most recent nonzero delta. Survives pauses and releases.
    fn last_direction(&self) -> i32;

    fn is_flinging(&self) -> bool;

    fn state(&self) -> InteractionState;

    fn is_animating(&self) -> bool {
        self.state() == InteractionState::Animating
    }

    /// Main-axis size of a region from the last layout pass (`0` when absent).
    fn region_size(&self, region: Region) -> u32;

    /// Whether the global point lies within the region's current bounds.
    fn region_contains(&self, region: Region, x: f32, y: f32) -> bool;

    /// Jumps to `offset` (clamped).
    fn scroll_to(&mut self, offset: i32);

    /// Moves by `delta` (clamped) and returns the applied movement.
    fn scroll_by(&mut self, delta: i32) -> i32;

    /// Requests an animated transition to `offset` (clamped).
    ///
    /// Returns immediately; the offset changes on later animation frames.
    fn smooth_scroll_to(&mut self, offset: i32);
}

/// The coordinator-owned implementation of [`ScrollSurface`].
pub struct Surface {
    axis: Axis,
    offset: i32,
    min_offset: i32,
    max_offset: i32,
    last_direction: i32,
    flinging: bool,
    state: InteractionState,

    origin: Point,
    viewport: Rect,
    spans: [Option<Span>; 3],
    hit_test: Box<dyn HitTest>,

    animation: Option<ScrollAnimation>,
    animation_pending: bool,
}

impl Surface {
    pub(crate) fn new(axis: Axis) -> Self {
        Self {
            axis,
            offset: 0,
            min_offset: 0,
            max_offset: 0,
            last_direction: 0,
            flinging: false,
            state: InteractionState::Idle,
            origin: Point::default(),
            viewport: Rect::default(),
            spans: [None; 3],
            hit_test: Box::new(RectHitTest),
            animation: None,
            animation_pending: false,
        }
    }

    pub(crate) fn set_axis(&mut self, axis: Axis) {
        self.axis = axis;
    }

    pub(crate) fn set_hit_test(&mut self, hit_test: Box<dyn HitTest>) {
        self.hit_test = hit_test;
    }

    /// Installs the geometry of a layout pass and clamps the offset into the new bounds.
    ///
    /// `sizes` are the resolved main-axis sizes, `None` for absent regions.
    pub(crate) fn apply_layout(&mut self, origin: Point, viewport: Rect, sizes: [Option<u32>; 3]) {
        self.origin = origin;
        self.viewport = viewport;

        let prev = sizes[0].map_or(0, clamp_size);
        let mid = sizes[1].map_or(0, clamp_size);
        let next = sizes[2].map_or(0, clamp_size);

        self.spans = [
            sizes[0].map(|_| Span {
                start: -prev,
                end: 0,
            }),
            sizes[1].map(|_| Span { start: 0, end: mid }),
            sizes[2].map(|_| Span {
                start: mid,
                end: mid.saturating_add(next),
            }),
        ];

        self.min_offset = -prev;
        let content_end = mid.saturating_add(next);
        self.max_offset = content_end
            .saturating_sub(clamp_size(viewport.main))
            .max(0);
        self.offset = self.clamp(self.offset);

        if let Some(anim) = self.animation.as_mut() {
            anim.to = anim.to.clamp(self.min_offset, self.max_offset);
        }
    }

    pub fn clamp(&self, offset: i32) -> i32 {
        offset.clamp(self.min_offset, self.max_offset)
    }

    pub fn in_bounds(&self) -> bool {
        self.min_offset <= self.offset && self.offset <= self.max_offset
    }

    /// The region's extent along the axis in content coordinates.
    pub fn span(&self, region: Region) -> Option<Span> {
        self.spans[region.index()]
    }

    /// The region's current bounds in global coordinates.
    pub fn frame(&self, region: Region) -> Option<Frame> {
        let span = self.span(region)?;
        let start = (span.start as i64 - self.offset as i64) as f32;
        let len = span.len() as f32;
        let cross = self.viewport.cross as f32;
        Some(match self.axis {
            Axis::Vertical => Frame {
                x: self.origin.x,
                y: self.origin.y + start,
                width: cross,
                height: len,
            },
            Axis::Horizontal => Frame {
                x: self.origin.x + start,
                y: self.origin.y,
                width: len,
                height: cross,
            },
        })
    }

    /// The first present region whose frame contains the point.
    pub fn region_at(&self, x: f32, y: f32) -> Option<Region> {
        Region::ALL
            .into_iter()
            .find(|&region| self.region_contains(region, x, y))
    }

    pub(crate) fn note_direction(&mut self, delta: i32) {
        if delta != 0 {
            self.last_direction = delta.signum();
        }
    }

    pub(crate) fn set_state(&mut self, state: InteractionState) {
        if self.state != state {
            btrace!(from = ?self.state, to = ?state, "interaction state");
            self.state = state;
        }
    }

    pub(crate) fn set_flinging(&mut self, flinging: bool) {
        self.flinging = flinging;
    }

    /// Offset-only update used by animation frames: no direction bookkeeping.
    pub(crate) fn set_offset_clamped(&mut self, offset: i32) {
        self.offset = self.clamp(offset);
    }

    pub(crate) fn animation(&self) -> Option<ScrollAnimation> {
        self.animation
    }

    pub(crate) fn take_animation_request(&mut self) -> Option<ScrollAnimation> {
        if !self.animation_pending {
            return None;
        }
        self.animation_pending = false;
        self.animation
    }

    pub(crate) fn clear_animation(&mut self) -> Option<ScrollAnimation> {
        self.animation_pending = false;
        let anim = self.animation.take();
        if self.state == InteractionState::Animating {
            self.set_state(InteractionState::Idle);
        }
        anim
    }

    pub fn snapshot(&self) -> SurfaceSnapshot {
        SurfaceSnapshot {
            axis: self.axis,
            offset: self.offset,
            min_offset: self.min_offset,
            max_offset: self.max_offset,
            last_direction: self.last_direction,
            is_flinging: self.flinging,
            state: self.state,
        }
    }
}

impl ScrollSurface for Surface {
    fn axis(&self) -> Axis {
        self.axis
    }

    fn offset(&self) -> i32 {
        self.offset
    }

    fn min_offset(&self) -> i32 {
        self.min_offset
    }

    fn max_offset(&self) -> i32 {
        self.max_offset
    }

    fn last_direction(&self) -> i32 {
        self.last_direction
    }

    fn is_flinging(&self) -> bool {
        self.flinging
    }

    fn state(&self) -> InteractionState {
        self.state
    }

    fn region_size(&self, region: Region) -> u32 {
        self.span(region).map_or(0, |s| s.len())
    }

    fn region_contains(&self, region: Region, x: f32, y: f32) -> bool {
        match self.frame(region) {
            Some(frame) if !frame.is_empty() => self.hit_test.contains(region, frame, x, y),
            _ => false,
        }
    }

    fn scroll_to(&mut self, offset: i32) {
        self.offset = self.clamp(offset);
    }

    fn scroll_by(&mut self, delta: i32) -> i32 {
        let before = self.offset;
        self.offset = self.clamp(before.saturating_add(delta));
        self.offset.saturating_sub(before)
    }

    fn smooth_scroll_to(&mut self, offset: i32) {
        let to = self.clamp(offset);
        if to == self.offset {
            if self.animation.is_some() {
                self.clear_animation();
            }
            return;
        }
        bdebug!(from = self.offset, to, "smooth_scroll_to");
        self.animation = Some(ScrollAnimation {
            from: self.offset,
            to,
        });
        self.animation_pending = true;
        self.set_state(InteractionState::Animating);
    }
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("axis", &self.axis)
            .field("offset", &self.offset)
            .field("min_offset", &self.min_offset)
            .field("max_offset", &self.max_offset)
            .field("last_direction", &self.last_direction)
            .field("flinging", &self.flinging)
            .field("state", &self.state)
            .field("spans", &self.spans)
            .field("animation", &self.animation)
            .finish_non_exhaustive()
    }
}

fn clamp_size(size: u32) -> i32 {
    size.min(i32::MAX as u32) as i32
}
