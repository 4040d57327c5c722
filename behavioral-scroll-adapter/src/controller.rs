use behavioral_scroll::{
    Behavior, Coordinator, CoordinatorOptions, InteractionState, LayoutPass, ScrollOrigin,
    TouchAction, TouchEvent,
};

use crate::{ControllerOptions, Fling, Tween};

/// A framework-neutral controller that wraps a `behavioral_scroll::Coordinator` and executes
/// what the coordinator only requests: animations (with a [`Tween`]) and flings (with a
/// [`Fling`]).
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_layout` after every layout pass
/// - `on_touch_event` / `on_nested_pre_scroll` / `on_nested_scroll` when UI events occur
/// - `fling(velocity, now_ms)` when a drag ends with a velocity
/// - `tick(now_ms)` each frame/timer tick
///
/// `tick()` returns the offset to render while something is moving.
#[derive(Debug)]
pub struct Controller {
    c: Coordinator,
    options: ControllerOptions,
    tween: Option<Tween>,
    fling: Option<Fling>,
}

impl Controller {
    pub fn new(behavior: impl Behavior + 'static) -> Self {
        Self::from_coordinator(Coordinator::new(behavior), ControllerOptions::default())
    }

    pub fn with_options(
        behavior: impl Behavior + 'static,
        coordinator_options: CoordinatorOptions,
        options: ControllerOptions,
    ) -> Self {
        Self::from_coordinator(
            Coordinator::with_options(behavior, coordinator_options),
            options,
        )
    }

    pub fn from_coordinator(c: Coordinator, options: ControllerOptions) -> Self {
        Self {
            c,
            options,
            tween: None,
            fling: None,
        }
    }

    pub fn coordinator(&self) -> &Coordinator {
        &self.c
    }

    /// Direct access to the coordinator. Requests made through it are picked up by the next
    /// `tick`.
    pub fn coordinator_mut(&mut self) -> &mut Coordinator {
        &mut self.c
    }

    pub fn into_coordinator(self) -> Coordinator {
        self.c
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ControllerOptions) {
        self.options = options;
    }

    pub fn offset(&self) -> i32 {
        self.c.offset()
    }

    pub fn tween(&self) -> Option<Tween> {
        self.tween
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn is_flinging(&self) -> bool {
        self.fling.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
        self.c.cancel_animation();
    }

    pub fn on_layout(&mut self, pass: LayoutPass, now_ms: u64) {
        self.c.layout(pass);
        self.sync(now_ms);
    }

    /// Forwards a touch event. Returns whether it was handled.
    ///
    /// A `Down` stops any fling or animation in progress; a release may start a settle
    /// animation.
    pub fn on_touch_event(&mut self, event: TouchEvent, now_ms: u64) -> bool {
        if event.action == TouchAction::Down {
            self.stop_fling();
        }
        let handled = self.c.dispatch_touch_event(event);
        self.sync(now_ms);
        handled
    }

    pub fn on_nested_pre_scroll(&mut self, delta: i32, origin: ScrollOrigin, now_ms: u64) -> i32 {
        let consumed = self.c.on_nested_pre_scroll(delta, origin);
        self.sync(now_ms);
        consumed
    }

    pub fn on_nested_scroll(&mut self, unconsumed: i32, origin: ScrollOrigin, now_ms: u64) -> i32 {
        let consumed = self.c.on_nested_scroll(unconsumed, origin);
        self.sync(now_ms);
        consumed
    }

    /// Jumps to `offset` (clamped), dropping any animation or fling.
    pub fn scroll_to(&mut self, offset: i32) -> i32 {
        self.stop_fling();
        self.tween = None;
        self.c.scroll_to(offset);
        self.c.offset()
    }

    /// Starts an animation to `offset` (clamped). Returns the target.
    pub fn smooth_scroll_to(&mut self, offset: i32, now_ms: u64) -> i32 {
        self.c.smooth_scroll_to(offset);
        self.sync(now_ms);
        self.tween.map_or(self.c.offset(), |tween| tween.to)
    }

    /// Starts a fling with `velocity` px/s (positive toward larger offsets).
    ///
    /// Returns `false` when the velocity is below `min_fling_velocity`.
    pub fn fling(&mut self, velocity: f32, now_ms: u64) -> bool {
        let speed = if velocity < 0.0 { -velocity } else { velocity };
        if speed < self.options.min_fling_velocity {
            atrace!(velocity, "fling below minimum velocity");
            return false;
        }
        self.tween = None;
        self.c.begin_fling();
        let fling = Fling::new(velocity, self.options.fling_deceleration, now_ms);
        adebug!(
            velocity,
            distance = fling.distance(),
            duration_ms = fling.duration_ms(),
            "fling"
        );
        self.fling = Some(fling);
        true
    }

    pub fn stop_fling(&mut self) {
        if self.fling.take().is_some() {
            self.c.end_fling();
        }
    }

    /// Advances the controller.
    ///
    /// - If a fling is active, dispatches its next delta. The fling stops once it runs out or
    ///   the coordinator stops consuming its deltas.
    /// - If an animation is active, applies its next frame.
    ///
    /// Returns the new offset, or `None` when nothing is moving.
    pub fn tick(&mut self, now_ms: u64) -> Option<i32> {
        self.sync(now_ms);

        if let Some(mut fling) = self.fling {
            let delta = fling.step(now_ms);
            let consumed = self.c.dispatch_scroll(delta, ScrollOrigin::Programmatic);
            if fling.is_done(now_ms) || consumed != delta {
                atrace!(delta, consumed, "fling stopped");
                self.fling = None;
                self.c.end_fling();
            } else {
                self.fling = Some(fling);
            }
            self.sync(now_ms);
            return Some(self.c.offset());
        }

        let tween = self.tween?;
        self.c.apply_animation_frame(tween.sample(now_ms));
        if tween.is_done(now_ms) {
            self.tween = None;
            self.c.finish_animation();
        }
        Some(self.c.offset())
    }

    /// Mirrors the coordinator's animation state into the tween.
    fn sync(&mut self, now_ms: u64) {
        if self.fling.is_some() && !self.c.is_flinging() {
            self.fling = None;
        }

        if let Some(anim) = self.c.take_animation_request() {
            self.stop_fling();
            adebug!(from = anim.from, to = anim.to, "animation started");
            self.tween = Some(Tween::new(
                anim.from,
                anim.to,
                now_ms,
                self.options.animation_duration_ms,
                self.options.easing,
            ));
            return;
        }

        let Some(mut tween) = self.tween else {
            return;
        };
        match self.c.animation() {
            Some(anim) if anim.to != tween.to => {
                // A layout pass moved the bounds under the target.
                tween.retarget(now_ms, anim.to, self.options.animation_duration_ms);
                self.tween = Some(tween);
            }
            Some(_) => {}
            None => {
                debug_assert_ne!(self.c.state(), InteractionState::Animating);
                self.tween = None;
            }
        }
    }
}
