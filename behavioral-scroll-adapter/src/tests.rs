use crate::*;

use alloc::vec::Vec;
use behavioral_scroll::{
    Axis, BottomSheetBehavior, CollapsingHeaderBehavior, InteractionState, JellyBehavior,
    LayoutPass, Rect, RegionSizes, SheetPosition, TouchEvent, ViewHandle,
};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_i32(&mut self, start: i32, end_exclusive: i32) -> i32 {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive as i64 - start as i64) as u64;
        (start as i64 + (self.next_u64() % span) as i64) as i32
    }
}

fn pass(viewport: u32, prev: u32, mid: u32, next: u32) -> LayoutPass {
    LayoutPass::new(
        Rect {
            main: viewport,
            cross: 400,
        },
        RegionSizes { prev, mid, next },
    )
}

fn sheet_controller() -> Controller {
    let sheet =
        BottomSheetBehavior::new(ViewHandle(1), SheetPosition::Mid, 100).with_mid_height(300);
    let mut c = Controller::new(sheet);
    c.on_layout(pass(100, 0, 600, 0), 0);
    assert_eq!(c.offset(), 200);
    c
}

fn header_controller() -> Controller {
    let mut c = Controller::new(CollapsingHeaderBehavior::new(ViewHandle(2), ViewHandle(1)));
    c.on_layout(pass(500, 0, 100, 1000), 0);
    assert_eq!(c.coordinator().max_offset(), 600);
    c
}

/// Ticks every 16ms from `start_ms` until nothing moves. Returns the offsets produced.
fn run(c: &mut Controller, start_ms: u64) -> Vec<i32> {
    let mut offsets = Vec::new();
    let mut now_ms = start_ms;
    while let Some(off) = c.tick(now_ms) {
        offsets.push(off);
        now_ms += 16;
        assert!(now_ms < start_ms + 10_000, "controller never settled");
    }
    offsets
}

#[test]
fn tween_samples_linear_and_lands_on_target() {
    let t = Tween::new(0, 100, 0, 100, Easing::Linear);
    assert_eq!(t.sample(0), 0);
    assert_eq!(t.sample(50), 50);
    assert_eq!(t.sample(100), 100);
    assert_eq!(t.sample(500), 100);
    assert!(!t.is_done(99));
    assert!(t.is_done(100));

    let back = Tween::new(0, -100, 0, 100, Easing::Linear);
    assert_eq!(back.sample(50), -50);

    let mut t = t;
    t.retarget(50, 200, 100);
    assert_eq!(t.from, 50);
    assert_eq!(t.sample(100), 125);
    assert_eq!(t.sample(150), 200);

    assert_eq!(Tween::new(3, 7, 10, 0, Easing::Linear).duration_ms, 1);
}

#[test]
fn easings_span_zero_to_one_monotonically() {
    for easing in [
        Easing::Linear,
        Easing::SmoothStep,
        Easing::EaseInOutCubic,
        Easing::EaseOutCubic,
    ] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
        let mut prev = 0.0f32;
        for i in 0..=100 {
            let v = easing.sample(i as f32 / 100.0);
            assert!(v + 1e-6 >= prev, "{easing:?} not monotonic at {i}");
            prev = v;
        }
    }
}

#[test]
fn fling_decelerates_to_its_distance() {
    let mut f = Fling::new(2000.0, 4000.0, 0);
    assert_eq!(f.duration_ms(), 500);
    assert_eq!(f.distance(), 500);
    assert_eq!(f.velocity_at(250), 1000.0);
    assert_eq!(f.velocity_at(600), 0.0);
    assert!(!f.is_done(499));
    assert!(f.is_done(500));

    let mut total = 0;
    let mut now_ms = 0;
    while now_ms <= 512 {
        let d = f.step(now_ms);
        assert!(d >= 0);
        total += d;
        now_ms += 16;
    }
    assert_eq!(total, 500);
    assert_eq!(f.step(1000), 0);

    let back = Fling::new(-2000.0, 4000.0, 0);
    assert_eq!(back.distance(), -500);
    assert_eq!(back.velocity_at(250), -1000.0);
}

#[test]
fn controller_executes_bottom_sheet_settle() {
    let mut c = sheet_controller();

    assert!(c.on_touch_event(TouchEvent::down(10.0, 50.0), 0));
    assert!(c.on_touch_event(TouchEvent::moved(10.0, 0.0), 16));
    assert_eq!(c.offset(), 250);
    assert!(c.on_touch_event(TouchEvent::up(10.0, 0.0), 100));

    assert!(c.is_animating());
    assert_eq!(
        c.tween(),
        Some(Tween::new(250, 500, 100, 250, Easing::SmoothStep))
    );

    let offsets = run(&mut c, 100);
    assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(offsets.last().copied(), Some(500));
    assert_eq!(c.offset(), 500);
    assert!(!c.is_animating());
    assert_eq!(c.coordinator().state(), InteractionState::Idle);
}

#[test]
fn down_interrupts_running_tween() {
    let mut c = sheet_controller();
    c.on_touch_event(TouchEvent::down(10.0, 50.0), 0);
    c.on_touch_event(TouchEvent::moved(10.0, 0.0), 16);
    c.on_touch_event(TouchEvent::up(10.0, 0.0), 100);

    let mid = c.tick(200);
    assert!(mid.is_some_and(|off| off > 250 && off < 500));

    assert!(c.on_touch_event(TouchEvent::down(10.0, 50.0), 210));
    assert!(!c.is_animating());
    assert_eq!(c.coordinator().state(), InteractionState::Dragging);
    assert_eq!(c.tick(226), None);
    assert_eq!(Some(c.offset()), mid);
}

#[test]
fn layout_during_animation_retargets_tween() {
    let mut c = sheet_controller();
    c.on_touch_event(TouchEvent::down(10.0, 50.0), 0);
    c.on_touch_event(TouchEvent::moved(10.0, 0.0), 16);
    c.on_touch_event(TouchEvent::up(10.0, 0.0), 100);

    c.on_layout(pass(100, 0, 400, 0), 100);
    assert_eq!(c.coordinator().max_offset(), 300);
    assert_eq!(c.tween().map(|t| t.to), Some(300));

    run(&mut c, 100);
    assert_eq!(c.offset(), 300);
}

#[test]
fn fling_scrolls_content_until_it_runs_out() {
    let mut c = header_controller();
    assert!(c.fling(2000.0, 0));
    assert!(c.coordinator().is_flinging());

    let offsets = run(&mut c, 0);
    assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(c.offset(), 500);
    assert!(!c.is_flinging());
    assert!(!c.coordinator().is_flinging());
}

#[test]
fn fling_stops_when_coordinator_refuses_it() {
    let mut c = header_controller();
    assert!(c.fling(-2000.0, 0));
    assert_eq!(c.tick(0), Some(0));
    assert!(c.is_flinging());
    assert_eq!(c.tick(16), Some(0));
    assert!(!c.is_flinging());
    assert_eq!(c.tick(32), None);
}

#[test]
fn slow_flings_are_ignored() {
    let mut c = header_controller();
    assert!(!c.fling(10.0, 0));
    assert!(!c.fling(-49.0, 0));
    assert!(!c.is_flinging());
    assert!(!c.coordinator().is_flinging());
}

#[test]
fn bottom_sheet_fling_runs_to_completion_at_the_edge() {
    let mut c = sheet_controller();
    assert!(c.fling(3000.0, 0));
    run(&mut c, 0);
    assert_eq!(c.offset(), 500);
    assert!(!c.is_animating());
}

#[test]
fn jelly_springs_back_after_pull() {
    let jelly = JellyBehavior::new(Axis::Vertical, ViewHandle(1)).with_prev(ViewHandle(0));
    let mut c = Controller::new(jelly);
    c.on_layout(pass(400, 200, 400, 0), 0);

    c.on_touch_event(TouchEvent::down(10.0, 100.0), 0);
    c.on_touch_event(TouchEvent::moved(10.0, 140.0), 16);
    assert_eq!(c.offset(), -40);
    c.on_touch_event(TouchEvent::up(10.0, 140.0), 32);
    assert!(c.is_animating());

    let offsets = run(&mut c, 32);
    assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(c.offset(), 0);
}

#[test]
fn smooth_scroll_to_clamps_and_completes() {
    let mut c = header_controller();
    assert_eq!(c.smooth_scroll_to(1000, 0), 600);
    run(&mut c, 0);
    assert_eq!(c.offset(), 600);

    assert_eq!(c.smooth_scroll_to(600, 0), 600);
    assert!(!c.is_animating());
}

#[test]
fn scroll_to_drops_motion() {
    let mut c = header_controller();
    c.fling(2000.0, 0);
    c.tick(0);
    assert_eq!(c.scroll_to(-50), -50);
    assert!(!c.is_flinging());
    assert_eq!(c.tick(16), None);
}

#[test]
fn random_input_keeps_controller_in_bounds() {
    let mut rng = Lcg::new(0xada9_7e55);
    let mut c = sheet_controller();
    let mut now_ms = 0u64;

    for _ in 0..2000 {
        now_ms += rng.gen_range_i32(1, 40) as u64;
        let y = rng.gen_range_i32(-100, 600) as f32;
        match rng.gen_range_i32(0, 8) {
            0 => {
                c.on_touch_event(TouchEvent::down(10.0, y), now_ms);
            }
            1 | 2 => {
                c.on_touch_event(TouchEvent::moved(10.0, y), now_ms);
            }
            3 => {
                c.on_touch_event(TouchEvent::up(10.0, y), now_ms);
            }
            4 => {
                c.fling(rng.gen_range_i32(-5000, 5000) as f32, now_ms);
            }
            5 => c.on_layout(
                pass(
                    rng.gen_range_i32(0, 400) as u32,
                    0,
                    rng.gen_range_i32(0, 900) as u32,
                    0,
                ),
                now_ms,
            ),
            _ => {
                c.tick(now_ms);
            }
        }

        let snap = c.coordinator().snapshot();
        assert!(snap.in_bounds(), "{snap:?}");
        assert_eq!(c.is_flinging(), snap.is_flinging);
        if c.is_animating() {
            assert_eq!(snap.state, InteractionState::Animating);
        }
    }
}
