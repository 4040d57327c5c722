use behavioral_scroll::{
    BottomSheetBehavior, LayoutPass, Rect, RegionSizes, SheetPosition, TouchEvent, ViewHandle,
};
use behavioral_scroll_adapter::{Controller, ControllerOptions, Easing};

fn main() {
    // Example: a frame loop driving a bottom sheet through the controller.
    //
    // An adapter would:
    // - forward touch events and layout passes as they happen
    // - call tick(now_ms) in a frame loop / timer
    // - apply the returned offset to the real sheet view
    let sheet =
        BottomSheetBehavior::new(ViewHandle(1), SheetPosition::Min, 120).with_mid_height(400);
    let mut c = Controller::with_options(
        sheet,
        Default::default(),
        ControllerOptions::new()
            .with_animation_duration_ms(240)
            .with_easing(Easing::EaseOutCubic),
    );

    let mut now_ms = 0u64;
    c.on_layout(
        LayoutPass::new(
            Rect {
                main: 800,
                cross: 360,
            },
            RegionSizes {
                prev: 0,
                mid: 1200,
                next: 0,
            },
        ),
        now_ms,
    );
    println!("collapsed offset={}", c.offset());

    // Drag the visible strip up a little, then release.
    c.on_touch_event(TouchEvent::down(40.0, 700.0), now_ms);
    for y in [680.0, 660.0, 640.0] {
        now_ms += 16;
        c.on_touch_event(TouchEvent::moved(40.0, y), now_ms);
    }
    now_ms += 16;
    c.on_touch_event(TouchEvent::up(40.0, 640.0), now_ms);
    println!("released offset={} target={:?}", c.offset(), c.tween().map(|t| t.to));

    while let Some(off) = c.tick(now_ms) {
        if now_ms.is_multiple_of(48) {
            println!("t={now_ms} off={off}");
        }
        now_ms += 16;
    }
    println!("settled offset={}", c.offset());

    // A fling from the middle position expands the sheet the rest of the way.
    c.fling(3_000.0, now_ms);
    while let Some(off) = c.tick(now_ms) {
        if now_ms.is_multiple_of(96) {
            println!("fling t={now_ms} off={off}");
        }
        now_ms += 16;
    }
    println!("done: offset={}", c.offset());
}
