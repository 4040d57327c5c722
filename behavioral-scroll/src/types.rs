/// The scroll axis of a coordinator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

impl Axis {
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Vertical)
    }

    /// Picks the coordinate that lies on this axis.
    pub fn main(self, x: f32, y: f32) -> f32 {
        match self {
            Self::Vertical => y,
            Self::Horizontal => x,
        }
    }
}

/// One of the three sequentially laid-out regions of a coordinator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Region {
    Prev,
    Mid,
    Next,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Prev, Region::Mid, Region::Next];

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Prev => 0,
            Self::Mid => 1,
            Self::Next => 2,
        }
    }
}

/// An opaque handle to a host-owned view.
///
/// The coordinator never dereferences it; hosts map handles back to their own widgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewHandle(pub u64);

/// How a behavior declares one region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RegionDecl {
    /// No region on this side. Disables scrolling into it.
    Absent,
    /// A host view. `scrollable` declares that the region hosts an independently
    /// scrollable nested target (see [`crate::NestedScrollTarget`]).
    View { view: ViewHandle, scrollable: bool },
    /// An empty region owned by the behavior. Its main-axis size is the viewport size
    /// minus `inset`.
    Spacer { inset: u32 },
}

impl RegionDecl {
    pub fn view(view: ViewHandle) -> Self {
        Self::View {
            view,
            scrollable: false,
        }
    }

    pub fn scrollable_view(view: ViewHandle) -> Self {
        Self::View {
            view,
            scrollable: true,
        }
    }

    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Absent)
    }

    pub fn is_scrollable(&self) -> bool {
        matches!(
            self,
            Self::View {
                scrollable: true,
                ..
            }
        )
    }

    pub fn view_handle(&self) -> Option<ViewHandle> {
        match self {
            Self::View { view, .. } => Some(*view),
            _ => None,
        }
    }
}

/// The previous/middle/next declarations of a behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Regions {
    pub prev: RegionDecl,
    pub mid: RegionDecl,
    pub next: RegionDecl,
}

impl Regions {
    pub fn new(mid: ViewHandle) -> Self {
        Self {
            prev: RegionDecl::Absent,
            mid: RegionDecl::view(mid),
            next: RegionDecl::Absent,
        }
    }

    pub fn get(&self, region: Region) -> RegionDecl {
        match region {
            Region::Prev => self.prev,
            Region::Mid => self.mid,
            Region::Next => self.next,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TouchAction {
    Down,
    Move,
    Up,
    Cancel,
}

/// A touch event in global coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TouchEvent {
    pub action: TouchAction,
    pub x: f32,
    pub y: f32,
}

impl TouchEvent {
    pub fn new(action: TouchAction, x: f32, y: f32) -> Self {
        Self { action, x, y }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(TouchAction::Down, x, y)
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(TouchAction::Move, x, y)
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(TouchAction::Up, x, y)
    }

    pub fn cancel(x: f32, y: f32) -> Self {
        Self::new(TouchAction::Cancel, x, y)
    }

    /// `true` for `Up` and `Cancel`.
    pub fn is_release(&self) -> bool {
        matches!(self.action, TouchAction::Up | TouchAction::Cancel)
    }
}

/// Where a scroll delta comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollOrigin {
    /// Driven by a finger on the screen.
    Touch,
    /// Driven by a fling or an animation.
    Programmatic,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging,
    Animating,
}

/// A three-valued hook result: a definite answer, or no opinion.
///
/// `Unspecified` always defers to the coordinator's default for that decision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Decision {
    Yes,
    No,
    #[default]
    Unspecified,
}

impl Decision {
    pub fn from_bool(value: bool) -> Self {
        if value { Self::Yes } else { Self::No }
    }

    pub fn is_specified(self) -> bool {
        !matches!(self, Self::Unspecified)
    }

    pub fn as_bool(self) -> Option<bool> {
        match self {
            Self::Yes => Some(true),
            Self::No => Some(false),
            Self::Unspecified => None,
        }
    }

    /// Resolves to the definite value, or `default` when unspecified.
    pub fn resolve(self, default: bool) -> bool {
        self.as_bool().unwrap_or(default)
    }

    pub fn resolve_with(self, default: impl FnOnce() -> bool) -> bool {
        self.as_bool().unwrap_or_else(default)
    }
}

impl From<bool> for Decision {
    fn from(value: bool) -> Self {
        Self::from_bool(value)
    }
}

impl From<Option<bool>> for Decision {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::Unspecified, Self::from_bool)
    }
}

/// A platform-agnostic size where `main` lies on the scroll axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub main: u32,
    pub cross: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A region's current bounds in global coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Frame {
    /// Half-open containment: the left/top edges are inside, the right/bottom edges are not.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A region's extent along the axis, in content coordinates.
///
/// The middle region always starts at `0`; the previous region ends there.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: i32,
    pub end: i32, // exclusive
}

impl Span {
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start).max(0) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Main-axis sizes measured by the host for each region.
///
/// Sizes of spacer and absent regions are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionSizes {
    pub prev: u32,
    pub mid: u32,
    pub next: u32,
}

/// The input of one layout pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutPass {
    /// Global position of the viewport's top-left corner.
    pub origin: Point,
    pub viewport: Rect,
    pub sizes: RegionSizes,
}

impl LayoutPass {
    pub fn new(viewport: Rect, sizes: RegionSizes) -> Self {
        Self {
            origin: Point::default(),
            viewport,
            sizes,
        }
    }

    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }
}

/// An "animate the offset from `from` to `to`" request.
///
/// The coordinator never interpolates; an adapter (or the host) executes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollAnimation {
    pub from: i32,
    pub to: i32,
}
