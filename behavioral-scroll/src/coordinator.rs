use alloc::boxed::Box;
use core::fmt;

use crate::{
    Behavior, CoordinatorOptions, Decision, Frame, HitTest, InteractionState, LayoutPass,
    NestedScrollTarget, Region, RegionDecl, Regions, ScrollAnimation, ScrollOrigin,
    ScrollSurface, Span, Surface, SurfaceSnapshot, TouchAction, TouchEvent,
};

/// Who owns the current gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Owner {
    Undecided,
    Child,
    Coordinator,
}

#[derive(Clone, Copy, Debug)]
struct Gesture {
    /// Region under the finger at `Down`.
    region: Option<Region>,
    owner: Owner,
    /// Main-axis position at `Down`.
    start: f32,
    /// Main-axis position already turned into deltas.
    last: f32,
    dragging: bool,
}

/// A headless nested-scroll coordinator for a previous/middle/next region stack.
///
/// The coordinator owns the scroll surface and routes everything through exactly one
/// [`Behavior`]. It never branches on which behavior is attached. Adapters drive it by calling:
/// - `layout` after every layout pass
/// - `dispatch_touch_event` for every touch event
/// - `on_nested_pre_scroll` / `on_nested_scroll` when a nested child scrolls
/// - `dispatch_scroll` for deltas the coordinator produces itself (fling frames)
/// - the animation protocol (`take_animation_request`, `apply_animation_frame`,
///   `finish_animation`) to execute `smooth_scroll_to` requests
///
/// See the `behavioral-scroll-adapter` crate for a tween/fling driver.
pub struct Coordinator {
    behavior: Box<dyn Behavior>,
    regions: Regions,
    surface: Surface,
    targets: [Option<Box<dyn NestedScrollTarget>>; 3],
    options: CoordinatorOptions,
    gesture: Option<Gesture>,
    /// Region whose nested target takes part in coordinator-driven scrolling.
    scroll_region: Option<Region>,
}

impl Coordinator {
    pub fn new(behavior: impl Behavior + 'static) -> Self {
        Self::with_options(behavior, CoordinatorOptions::default())
    }

    pub fn with_options(behavior: impl Behavior + 'static, options: CoordinatorOptions) -> Self {
        Self::from_boxed(Box::new(behavior), options)
    }

    pub fn from_boxed(behavior: Box<dyn Behavior>, options: CoordinatorOptions) -> Self {
        let regions = behavior.regions();
        check_regions(&regions);
        bdebug!(
            axis = ?behavior.axis(),
            touch_slop = options.touch_slop,
            "Coordinator::new"
        );
        Self {
            surface: Surface::new(behavior.axis()),
            behavior,
            regions,
            targets: [None, None, None],
            options,
            gesture: None,
            scroll_region: None,
        }
    }

    /// Replaces the default rectangle hit test.
    pub fn with_hit_test(mut self, hit_test: impl HitTest + 'static) -> Self {
        self.surface.set_hit_test(Box::new(hit_test));
        self
    }

    pub fn options(&self) -> &CoordinatorOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: CoordinatorOptions) {
        self.options = options;
    }

    pub fn behavior(&self) -> &dyn Behavior {
        self.behavior.as_ref()
    }

    pub fn regions(&self) -> &Regions {
        &self.regions
    }

    /// Swaps the attached behavior and returns the previous one.
    ///
    /// Any animation, fling or gesture in progress is dropped. The new behavior sees its first
    /// `after_layout` on the next layout pass.
    pub fn set_behavior(&mut self, behavior: impl Behavior + 'static) -> Box<dyn Behavior> {
        let regions = behavior.regions();
        check_regions(&regions);
        bdebug!(axis = ?behavior.axis(), "Coordinator::set_behavior");

        self.surface.clear_animation();
        self.surface.set_flinging(false);
        self.surface.set_state(InteractionState::Idle);
        self.surface.set_axis(behavior.axis());
        self.gesture = None;
        self.scroll_region = None;
        self.regions = regions;
        core::mem::replace(&mut self.behavior, Box::new(behavior))
    }

    /// Attaches the nested scroll target of a region declared `scrollable`.
    pub fn set_scroll_target(
        &mut self,
        region: Region,
        target: impl NestedScrollTarget + 'static,
    ) {
        if !self.regions.get(region).is_scrollable() {
            bwarn!(
                ?region,
                "scroll target attached to a region not declared scrollable; it will be ignored"
            );
        }
        self.targets[region.index()] = Some(Box::new(target));
    }

    pub fn clear_scroll_target(&mut self, region: Region) -> Option<Box<dyn NestedScrollTarget>> {
        self.targets[region.index()].take()
    }

    fn has_target(&self, region: Region) -> bool {
        self.regions.get(region).is_scrollable() && self.targets[region.index()].is_some()
    }

    // ---------------------------------------------------------------------
    // Layout
    // ---------------------------------------------------------------------

    /// Recomputes the bounds from the measured region sizes, then runs `after_layout`.
    ///
    /// Regions are stacked along the axis: the previous region ends at content position `0`,
    /// the middle region starts there and the next region follows it. The resulting bounds are
    /// `min_offset = -prev` and `max_offset = max(mid + next - viewport, 0)`.
    pub fn layout(&mut self, pass: LayoutPass) {
        let viewport = pass.viewport.main;
        let resolve = |decl: RegionDecl, measured: u32| match decl {
            RegionDecl::Absent => None,
            RegionDecl::View { .. } => Some(measured),
            RegionDecl::Spacer { inset } => Some(viewport.saturating_sub(inset)),
        };
        let sizes = [
            resolve(self.regions.prev, pass.sizes.prev),
            resolve(self.regions.mid, pass.sizes.mid),
            resolve(self.regions.next, pass.sizes.next),
        ];

        self.surface.apply_layout(pass.origin, pass.viewport, sizes);
        btrace!(
            min_offset = self.surface.min_offset(),
            max_offset = self.surface.max_offset(),
            offset = self.surface.offset(),
            "layout"
        );

        self.behavior.after_layout(&mut self.surface);
        self.check_bounds("layout");
    }

    // ---------------------------------------------------------------------
    // Touch dispatch
    // ---------------------------------------------------------------------

    /// Routes one touch event. Returns whether it was handled.
    ///
    /// The behavior's `handle_dispatch_touch_event` is asked first; a definite answer ends the
    /// dispatch. Otherwise the event goes to the child region under the finger unless the
    /// coordinator intercepts it, in which case the coordinator drags itself.
    pub fn dispatch_touch_event(&mut self, event: TouchEvent) -> bool {
        if event.action == TouchAction::Down {
            self.on_down(&event);
        }

        let handled = match self
            .behavior
            .handle_dispatch_touch_event(&mut self.surface, &event)
            .as_bool()
        {
            Some(handled) => {
                btrace!(action = ?event.action, handled, "touch dispatch decided by behavior");
                handled
            }
            None => self.route_touch_event(&event),
        };

        if event.is_release() {
            self.gesture = None;
            if self.surface.state() == InteractionState::Dragging {
                self.surface.set_state(InteractionState::Idle);
            }
        }

        self.check_bounds("dispatch_touch_event");
        handled
    }

    fn on_down(&mut self, event: &TouchEvent) {
        if self.surface.is_flinging() {
            self.end_fling();
        }
        if self.surface.state() == InteractionState::Animating {
            bdebug!(offset = self.surface.offset(), "animation interrupted by touch");
            self.surface.clear_animation();
            self.surface.set_state(InteractionState::Dragging);
        }
        let gesture = self.begin_gesture(event);
        self.scroll_region = gesture.region;
        self.gesture = Some(gesture);
    }

    fn begin_gesture(&self, event: &TouchEvent) -> Gesture {
        let pos = self.surface.axis().main(event.x, event.y);
        Gesture {
            region: self.surface.region_at(event.x, event.y),
            owner: Owner::Undecided,
            start: pos,
            last: pos,
            dragging: false,
        }
    }

    fn route_touch_event(&mut self, event: &TouchEvent) -> bool {
        let mut gesture = match self.gesture {
            Some(gesture) => gesture,
            // A move without a down, e.g. the behavior was swapped mid-gesture.
            None => self.begin_gesture(event),
        };
        let target_region = gesture.region.filter(|&r| self.has_target(r));

        if gesture.owner != Owner::Coordinator {
            let intercept = self
                .behavior
                .handle_intercept_touch_event(&mut self.surface, event)
                .resolve(target_region.is_none());

            match (intercept, target_region) {
                (false, Some(_)) => {
                    gesture.owner = Owner::Child;
                    self.gesture = Some(gesture);
                    btrace!(action = ?event.action, region = ?gesture.region, "touch routed to child");
                    return true;
                }
                (true, _) if gesture.owner == Owner::Child => {
                    // Stolen from the child: drag from here on.
                    let pos = self.surface.axis().main(event.x, event.y);
                    gesture.start = pos;
                    gesture.last = pos;
                    gesture.dragging = true;
                    if self.surface.state() != InteractionState::Animating {
                        self.surface.set_state(InteractionState::Dragging);
                    }
                    btrace!(action = ?event.action, "gesture intercepted from child");
                }
                _ => {}
            }
        }

        let handle = self
            .behavior
            .handle_touch_event(&mut self.surface, event)
            .resolve(true);
        if !handle {
            self.gesture = Some(gesture);
            btrace!(action = ?event.action, "touch refused");
            return false;
        }

        gesture.owner = Owner::Coordinator;
        self.on_self_touch(&mut gesture, event);
        self.gesture = Some(gesture);
        true
    }

    fn on_self_touch(&mut self, gesture: &mut Gesture, event: &TouchEvent) {
        let pos = self.surface.axis().main(event.x, event.y);
        match event.action {
            TouchAction::Down => {
                gesture.start = pos;
                gesture.last = pos;
            }
            TouchAction::Move => {
                if !gesture.dragging {
                    let moved = pos - gesture.start;
                    let slop = self.options.touch_slop as f32;
                    if abs(moved) < slop {
                        return;
                    }
                    gesture.dragging = true;
                    gesture.last = if moved < 0.0 {
                        gesture.start - slop
                    } else {
                        gesture.start + slop
                    };
                    if self.surface.state() != InteractionState::Animating {
                        self.surface.set_state(InteractionState::Dragging);
                    }
                }

                // Moving the finger toward the start of the axis scrolls forward.
                let delta = (gesture.last - pos) as i32;
                gesture.last -= delta as f32;
                self.dispatch_scroll(delta, ScrollOrigin::Touch);
            }
            TouchAction::Up | TouchAction::Cancel => {}
        }
    }

    // ---------------------------------------------------------------------
    // Scroll arbitration
    // ---------------------------------------------------------------------

    /// Dispatches a delta produced by the coordinator itself (own drag, fling frames).
    ///
    /// Self and the nested target of the gesture's region share the delta in the order chosen
    /// by `scroll_self_first`. Returns the consumed amount.
    pub fn dispatch_scroll(&mut self, delta: i32, origin: ScrollOrigin) -> i32 {
        if delta == 0 {
            return 0;
        }
        self.surface.note_direction(delta);

        let region = self.scroll_region;
        let consumed = if self
            .behavior
            .scroll_self_first(&mut self.surface, delta, origin)
        {
            let own = self.scroll_self(delta, origin);
            own + self.scroll_target(region, delta - own, origin)
        } else {
            let child = self.scroll_target(region, delta, origin);
            child + self.scroll_self(delta - child, origin)
        };

        self.check_bounds("dispatch_scroll");
        consumed
    }

    /// A nested child is about to scroll by `delta`. Returns the part self consumes first.
    pub fn on_nested_pre_scroll(&mut self, delta: i32, origin: ScrollOrigin) -> i32 {
        if delta == 0 {
            return 0;
        }
        self.begin_nested(origin);
        self.surface.note_direction(delta);

        let consumed = if self
            .behavior
            .scroll_self_first(&mut self.surface, delta, origin)
        {
            self.scroll_self(delta, origin)
        } else {
            0
        };

        self.check_bounds("on_nested_pre_scroll");
        consumed
    }

    /// A nested child scrolled and left `unconsumed`. Returns the part self takes.
    pub fn on_nested_scroll(&mut self, unconsumed: i32, origin: ScrollOrigin) -> i32 {
        if unconsumed == 0 {
            return 0;
        }
        self.begin_nested(origin);
        self.surface.note_direction(unconsumed);

        let consumed = if self
            .behavior
            .scroll_self_first(&mut self.surface, unconsumed, origin)
        {
            0
        } else {
            self.scroll_self(unconsumed, origin)
        };

        self.check_bounds("on_nested_scroll");
        consumed
    }

    fn begin_nested(&mut self, origin: ScrollOrigin) {
        if origin == ScrollOrigin::Touch && self.surface.state() == InteractionState::Idle {
            self.surface.set_state(InteractionState::Dragging);
        }
    }

    fn scroll_self(&mut self, delta: i32, origin: ScrollOrigin) -> i32 {
        if delta == 0 {
            return 0;
        }
        let decision = self
            .behavior
            .handle_scroll_self(&mut self.surface, delta, origin);
        let consumed = match decision {
            Decision::Yes => delta,
            Decision::No => 0,
            Decision::Unspecified => self.surface.scroll_by(delta),
        };
        btrace!(
            delta,
            consumed,
            ?origin,
            ?decision,
            offset = self.surface.offset(),
            "scroll_self"
        );
        consumed
    }

    fn scroll_target(&mut self, region: Option<Region>, delta: i32, origin: ScrollOrigin) -> i32 {
        if delta == 0 {
            return 0;
        }
        let Some(region) = region else {
            return 0;
        };
        if !self.regions.get(region).is_scrollable() {
            return 0;
        }
        let Some(target) = self.targets[region.index()].as_mut() else {
            return 0;
        };
        if !target.can_scroll(delta.signum()) {
            return 0;
        }
        let reported = target.scroll_by(delta, origin);
        let consumed = clamp_consumed(delta, reported);
        if consumed != reported {
            bwarn!(
                ?region,
                delta,
                reported,
                "nested scroll target reported more than it was offered"
            );
        }
        consumed
    }

    // ---------------------------------------------------------------------
    // Offset mutation
    // ---------------------------------------------------------------------

    /// Jumps to `offset` (clamped). Cancels any animation.
    pub fn scroll_to(&mut self, offset: i32) {
        self.cancel_animation();
        self.surface.scroll_to(offset);
        self.check_bounds("scroll_to");
    }

    /// Moves by `delta` (clamped) and returns the applied movement. Cancels any animation.
    pub fn scroll_by(&mut self, delta: i32) -> i32 {
        self.cancel_animation();
        let applied = self.surface.scroll_by(delta);
        self.check_bounds("scroll_by");
        applied
    }

    /// Requests an animated transition to `offset` (clamped).
    pub fn smooth_scroll_to(&mut self, offset: i32) {
        self.surface.smooth_scroll_to(offset);
    }

    /// Takes the most recent, not yet taken, animation request.
    ///
    /// The coordinator stays `Animating` until `finish_animation` or an interruption.
    pub fn take_animation_request(&mut self) -> Option<ScrollAnimation> {
        self.surface.take_animation_request()
    }

    /// The animation in progress, if any.
    pub fn animation(&self) -> Option<ScrollAnimation> {
        self.surface.animation()
    }

    pub fn is_animating(&self) -> bool {
        self.surface.is_animating()
    }

    /// Applies one interpolated animation frame. Ignored when no animation is running.
    pub fn apply_animation_frame(&mut self, offset: i32) {
        if self.surface.animation().is_none() {
            return;
        }
        self.surface.set_offset_clamped(offset);
        self.check_bounds("apply_animation_frame");
    }

    /// Lands the running animation on its target and returns to `Idle`.
    pub fn finish_animation(&mut self) {
        if let Some(anim) = self.surface.clear_animation() {
            bdebug!(to = anim.to, "animation finished");
            self.surface.set_offset_clamped(anim.to);
        }
        self.check_bounds("finish_animation");
    }

    /// Stops the running animation where it is.
    pub fn cancel_animation(&mut self) {
        if self.surface.clear_animation().is_some() {
            bdebug!(offset = self.surface.offset(), "animation cancelled");
        }
    }

    /// Marks the start of a coordinator-driven fling.
    ///
    /// Fling frames are then fed through `dispatch_scroll(delta, ScrollOrigin::Programmatic)`.
    pub fn begin_fling(&mut self) {
        self.cancel_animation();
        self.surface.set_flinging(true);
        bdebug!(offset = self.surface.offset(), "fling started");
    }

    pub fn end_fling(&mut self) {
        if self.surface.is_flinging() {
            self.surface.set_flinging(false);
            bdebug!(offset = self.surface.offset(), "fling ended");
        }
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn offset(&self) -> i32 {
        self.surface.offset()
    }

    pub fn min_offset(&self) -> i32 {
        self.surface.min_offset()
    }

    pub fn max_offset(&self) -> i32 {
        self.surface.max_offset()
    }

    pub fn last_direction(&self) -> i32 {
        self.surface.last_direction()
    }

    pub fn state(&self) -> InteractionState {
        self.surface.state()
    }

    pub fn is_flinging(&self) -> bool {
        self.surface.is_flinging()
    }

    /// A region's extent along the axis in content coordinates.
    pub fn region_bounds(&self, region: Region) -> Option<Span> {
        self.surface.span(region)
    }

    /// A region's current bounds in global coordinates.
    pub fn region_frame(&self, region: Region) -> Option<Frame> {
        self.surface.frame(region)
    }

    pub fn snapshot(&self) -> SurfaceSnapshot {
        self.surface.snapshot()
    }

    fn check_bounds(&self, op: &'static str) {
        debug_assert!(
            self.surface.in_bounds(),
            "{op}: offset {} outside [{}, {}]",
            self.surface.offset(),
            self.surface.min_offset(),
            self.surface.max_offset()
        );
    }
}

impl fmt::Debug for Coordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Coordinator")
            .field("regions", &self.regions)
            .field("surface", &self.surface)
            .field("options", &self.options)
            .field("gesture", &self.gesture)
            .field("scroll_region", &self.scroll_region)
            .finish_non_exhaustive()
    }
}

fn check_regions(regions: &Regions) {
    let mid_is_view = matches!(regions.mid, RegionDecl::View { .. });
    if !mid_is_view {
        bwarn!(mid = ?regions.mid, "the middle region must be a view");
    }
    debug_assert!(mid_is_view, "the middle region must be a view");
}

fn clamp_consumed(delta: i32, consumed: i32) -> i32 {
    if delta > 0 {
        consumed.clamp(0, delta)
    } else {
        consumed.clamp(delta, 0)
    }
}

fn abs(v: f32) -> f32 {
    if v < 0.0 { -v } else { v }
}
