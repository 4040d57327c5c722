use crate::Easing;

/// Configuration for [`crate::Controller`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControllerOptions {
    /// Duration of every animation request executed by the controller.
    pub animation_duration_ms: u64,
    pub easing: Easing,
    /// Constant fling deceleration in px/s².
    pub fling_deceleration: f32,
    /// Flings slower than this (px/s) are not started.
    pub min_fling_velocity: f32,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            animation_duration_ms: 250,
            easing: Easing::SmoothStep,
            fling_deceleration: 4000.0,
            min_fling_velocity: 50.0,
        }
    }
}

impl ControllerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_animation_duration_ms(mut self, animation_duration_ms: u64) -> Self {
        self.animation_duration_ms = animation_duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_fling_deceleration(mut self, fling_deceleration: f32) -> Self {
        self.fling_deceleration = fling_deceleration;
        self
    }

    pub fn with_min_fling_velocity(mut self, min_fling_velocity: f32) -> Self {
        self.min_fling_velocity = min_fling_velocity;
        self
    }
}
