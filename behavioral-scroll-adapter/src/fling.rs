/// A constant-deceleration fling.
///
/// `velocity` is in px/s along the coordinator's axis, positive toward larger offsets. The
/// fling slows down by `deceleration` px/s² until it stops, so it travels
/// `velocity² / (2 * deceleration)` pixels in `|velocity| / deceleration` seconds.
///
/// [`Fling::step`] turns elapsed time into integer deltas; the fractional part of the travelled
/// distance is carried over, so the deltas of a complete fling sum to [`Fling::distance`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fling {
    velocity: f32,
    deceleration: f32,
    start_ms: u64,
    duration_ms: u64,
    emitted: i32,
}

impl Fling {
    pub fn new(velocity: f32, deceleration: f32, start_ms: u64) -> Self {
        debug_assert!(deceleration > 0.0, "fling deceleration must be positive");
        let deceleration = if deceleration > 0.0 { deceleration } else { 1.0 };
        let duration_ms = (abs(velocity) / deceleration * 1000.0) as u64;
        Self {
            velocity,
            deceleration,
            start_ms,
            duration_ms,
            emitted: 0,
        }
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Total signed travel of the fling, truncated to whole pixels.
    pub fn distance(&self) -> i32 {
        self.position_at(self.start_ms.saturating_add(self.duration_ms))
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    /// Remaining velocity at `now_ms` (px/s, signed).
    pub fn velocity_at(&self, now_ms: u64) -> f32 {
        let t = self.elapsed_secs(now_ms);
        let speed = abs(self.velocity) - self.deceleration * t;
        if speed <= 0.0 {
            0.0
        } else if self.velocity < 0.0 {
            -speed
        } else {
            speed
        }
    }

    /// Signed travel since the start, truncated to whole pixels.
    pub fn position_at(&self, now_ms: u64) -> i32 {
        let t = self.elapsed_secs(now_ms);
        let travelled = abs(self.velocity) * t - 0.5 * self.deceleration * t * t;
        let travelled = if self.velocity < 0.0 {
            -travelled
        } else {
            travelled
        };
        travelled as i32
    }

    /// The delta to dispatch for the time elapsed since the previous step.
    pub fn step(&mut self, now_ms: u64) -> i32 {
        let pos = self.position_at(now_ms);
        let delta = pos.saturating_sub(self.emitted);
        self.emitted = pos;
        delta
    }

    fn elapsed_secs(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.start_ms).min(self.duration_ms);
        elapsed as f32 / 1000.0
    }
}

fn abs(v: f32) -> f32 {
    if v < 0.0 { -v } else { v }
}
