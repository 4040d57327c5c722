// Example: a bottom sheet driven by hand, without the adapter crate.
use behavioral_scroll::{
    BottomSheetBehavior, Coordinator, LayoutPass, Rect, Region, RegionSizes, SheetPosition,
    TouchEvent, ViewHandle,
};

fn main() {
    let sheet =
        BottomSheetBehavior::new(ViewHandle(1), SheetPosition::Mid, 120).with_mid_height(400);
    let mut c = Coordinator::new(sheet);

    // The host measured the sheet content at 1200px in an 800px tall window.
    c.layout(LayoutPass::new(
        Rect {
            main: 800,
            cross: 360,
        },
        RegionSizes {
            prev: 0,
            mid: 1200,
            next: 0,
        },
    ));
    println!(
        "bounds=[{}, {}] offset={} sheet_frame={:?}",
        c.min_offset(),
        c.max_offset(),
        c.offset(),
        c.region_frame(Region::Mid)
    );

    // A tap above the sheet is not handled: the host delivers it to whatever is behind.
    let handled = c.dispatch_touch_event(TouchEvent::down(40.0, 100.0));
    c.dispatch_touch_event(TouchEvent::up(40.0, 100.0));
    println!("tap above sheet handled={handled}");

    // Drag the sheet up by 200px and let go.
    c.dispatch_touch_event(TouchEvent::down(40.0, 500.0));
    for y in [450.0, 400.0, 350.0, 300.0] {
        c.dispatch_touch_event(TouchEvent::moved(40.0, y));
    }
    println!("after drag offset={} state={:?}", c.offset(), c.state());
    c.dispatch_touch_event(TouchEvent::up(40.0, 300.0));

    // Execute the settle request with ten linear frames.
    if let Some(anim) = c.take_animation_request() {
        println!("settle {} -> {}", anim.from, anim.to);
        for i in 1..10 {
            c.apply_animation_frame(anim.from + (anim.to - anim.from) * i / 10);
        }
        c.finish_animation();
    }
    println!("settled offset={} state={:?}", c.offset(), c.state());
}
