// Example: a collapsing header above an independently scrollable list.
use behavioral_scroll::{
    CollapsingHeaderBehavior, Coordinator, LayoutPass, NestedScrollTarget, Rect, Region,
    RegionSizes, ScrollOrigin, TouchEvent, ViewHandle,
};

/// A list that scrolls through `len` pixels of rows.
struct List {
    position: i32,
    len: i32,
}

impl NestedScrollTarget for List {
    fn can_scroll(&self, direction: i32) -> bool {
        if direction > 0 {
            self.position < self.len
        } else {
            self.position > 0
        }
    }

    fn scroll_by(&mut self, delta: i32, _origin: ScrollOrigin) -> i32 {
        let before = self.position;
        self.position = (before + delta).clamp(0, self.len);
        self.position - before
    }
}

fn main() {
    let behavior =
        CollapsingHeaderBehavior::new(ViewHandle(2), ViewHandle(1)).with_scrollable_content();
    let mut c = Coordinator::new(behavior);
    c.set_scroll_target(
        Region::Next,
        List {
            position: 0,
            len: 2_000,
        },
    );
    c.layout(LayoutPass::new(
        Rect {
            main: 600,
            cross: 360,
        },
        RegionSizes {
            prev: 0,
            mid: 180,
            next: 600,
        },
    ));
    println!("bounds=[{}, {}]", c.min_offset(), c.max_offset());

    // The finger lands on the list, so the list owns the gesture and reports its scrolling.
    c.dispatch_touch_event(TouchEvent::down(20.0, 400.0));
    for delta in [60, 60, 60, 60] {
        let pre = c.on_nested_pre_scroll(delta, ScrollOrigin::Touch);
        println!("list wants {delta}: header took {pre}, offset={}", c.offset());
    }

    // Scrolling back down: the list goes first, the header only gets what is left.
    for delta in [-100, -100] {
        let pre = c.on_nested_pre_scroll(delta, ScrollOrigin::Touch);
        let post = c.on_nested_scroll(delta - pre, ScrollOrigin::Touch);
        println!("list wants {delta}: header took {pre}+{post}, offset={}", c.offset());
    }
    c.dispatch_touch_event(TouchEvent::up(20.0, 400.0));
    println!("final offset={} state={:?}", c.offset(), c.state());
}
