use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    apps::{self, WindowContent},
    frame::{FrameGate, HoverThrottle},
    icon_layout::{IconGesture, IconLayout},
    recycle::RecycleStore,
    window_manager::WindowManager,
};

pub const DEFAULT_TASKBAR_HEIGHT: i32 = 30;
pub const ICON_WIDTH: i32 = 80;
pub const ICON_HEIGHT: i32 = 90;
pub const DEFAULT_WINDOW_WIDTH: i32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 600;
pub const MIN_WINDOW_WIDTH: i32 = 220;
pub const MIN_WINDOW_HEIGHT: i32 = 140;
pub const CASCADE_STEP: i32 = 30;
pub const RECYCLE_HIT_RADIUS: f64 = 100.0;
pub const DRAG_HOVER_THROTTLE_MS: f64 = 150.0;

/// Identifier shared by a desktop icon and the window it opens.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AppId(pub String);

impl AppId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AppId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Euclidean distance in pixels.
    pub fn distance(self, other: Point) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Normalizes two arbitrary corners (e.g. a rubber-band anchor and the pointer).
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    pub fn origin(self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(self) -> i32 {
        self.y + self.height
    }

    pub fn center(self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn with_origin(self, origin: Point) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            ..self
        }
    }

    /// Open intersection: rectangles that only share an edge do not intersect.
    pub fn intersects(self, other: Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// Visible desktop area; the bottom `taskbar_height` pixels are reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
    pub taskbar_height: i32,
}

impl Viewport {
    pub fn usable_bounds(self) -> Rect {
        Rect {
            x: 0,
            y: 0,
            width: self.width.max(0),
            height: (self.height - self.taskbar_height).max(0),
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            taskbar_height: DEFAULT_TASKBAR_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
    Pen,
}

/// A pointer or touch sample delivered to the reducer by the shell's input port.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerInput {
    pub position: Point,
    pub kind: PointerKind,
    /// Ctrl/Meta held: toggle selection membership instead of replacing it.
    pub additive: bool,
    /// Event timestamp in milliseconds.
    pub time_ms: f64,
}

impl PointerInput {
    pub fn at(x: i32, y: i32) -> Self {
        Self {
            position: Point::new(x, y),
            kind: PointerKind::Mouse,
            additive: false,
            time_ms: 0.0,
        }
    }

    pub fn with_time(self, time_ms: f64) -> Self {
        Self { time_ms, ..self }
    }

    pub fn with_additive(self, additive: bool) -> Self {
        Self { additive, ..self }
    }

    pub fn with_kind(self, kind: PointerKind) -> Self {
        Self { kind, ..self }
    }
}

/// Tunable desktop geometry and timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    pub taskbar_height: i32,
    pub icon_size: Size,
    pub default_window_size: Size,
    pub min_window_size: Size,
    pub cascade_origin: Point,
    pub cascade_step: i32,
    pub recycle_hit_radius: f64,
    pub drag_hover_throttle_ms: f64,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            taskbar_height: DEFAULT_TASKBAR_HEIGHT,
            icon_size: Size::new(ICON_WIDTH, ICON_HEIGHT),
            default_window_size: Size::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
            min_window_size: Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT),
            cascade_origin: Point::new(50, 50),
            cascade_step: CASCADE_STEP,
            recycle_hit_radius: RECYCLE_HIT_RADIUS,
            drag_hover_throttle_ms: DRAG_HOVER_THROTTLE_MS,
        }
    }
}

impl DesktopConfig {
    /// Parses a partial JSON override; missing keys keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDialog {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopState {
    pub windows: WindowManager<WindowContent>,
    pub icons: IconLayout,
    pub recycle: RecycleStore,
    pub viewport: Viewport,
    pub config: DesktopConfig,
    pub start_menu_open: bool,
    pub run_dialog_open: bool,
    pub error: Option<ErrorDialog>,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::new(DesktopConfig::default(), Viewport::default())
    }
}

impl DesktopState {
    /// Builds the first-load desktop; icon coordinates captured here become the restore targets.
    pub fn new(config: DesktopConfig, viewport: Viewport) -> Self {
        let viewport = Viewport {
            taskbar_height: config.taskbar_height,
            ..viewport
        };
        Self {
            windows: WindowManager::new(
                config.default_window_size,
                config.cascade_origin,
                config.cascade_step,
            ),
            icons: IconLayout::new(apps::desktop_icon_positions(), config.icon_size),
            recycle: RecycleStore::default(),
            viewport,
            config,
            start_menu_open: false,
            run_dialog_open: false,
            error: None,
        }
    }

    /// The topmost window that is not minimized.
    pub fn focused_window_id(&self) -> Option<&AppId> {
        self.windows
            .topmost()
            .filter(|w| !w.is_minimized)
            .map(|w| &w.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowDragSession {
    pub window_id: AppId,
    pub pointer_start: Point,
    pub origin_start: Point,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowResizeSession {
    pub window_id: AppId,
    pub edge: ResizeEdge,
    pub pointer_start: Point,
    pub rect_start: Rect,
    /// Latest pointer sample not yet applied by an animation frame.
    pub pending: Option<Point>,
}

/// Transient per-gesture state. Nothing here survives the end of a gesture.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionState {
    pub window_drag: Option<WindowDragSession>,
    pub window_resize: Option<WindowResizeSession>,
    pub icon_gesture: Option<IconGesture>,
    pub recycle_hover: bool,
    pub frame: FrameGate,
    pub hover_throttle: HoverThrottle,
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        self.window_drag.is_none() && self.window_resize.is_none() && self.icon_gesture.is_none()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn rect_intersection_is_open() {
        let a = Rect::new(Point::new(0, 0), Size::new(10, 10));
        let touching = Rect::new(Point::new(10, 0), Size::new(10, 10));
        let overlapping = Rect::new(Point::new(9, 9), Size::new(10, 10));

        assert!(!a.intersects(touching));
        assert!(a.intersects(overlapping));
    }

    #[test]
    fn from_corners_normalizes_any_drag_direction() {
        let rect = Rect::from_corners(Point::new(200, 50), Point::new(10, 300));
        assert_eq!(
            rect,
            Rect {
                x: 10,
                y: 50,
                width: 190,
                height: 250,
            }
        );
    }

    #[test]
    fn usable_bounds_reserve_taskbar_strip() {
        let viewport = Viewport {
            width: 800,
            height: 600,
            taskbar_height: 30,
        };
        assert_eq!(viewport.usable_bounds().bottom(), 570);
        assert_eq!(viewport.usable_bounds().right(), 800);
    }

    #[test]
    fn config_override_keeps_unspecified_defaults() {
        let config = DesktopConfig::from_json(r#"{ "taskbar_height": 40 }"#).expect("config");
        assert_eq!(config.taskbar_height, 40);
        assert_eq!(config.icon_size, Size::new(ICON_WIDTH, ICON_HEIGHT));
    }

    #[test]
    fn state_uses_configured_taskbar_height() {
        let config = DesktopConfig {
            taskbar_height: 48,
            ..DesktopConfig::default()
        };
        let state = DesktopState::new(config, Viewport::default());
        assert_eq!(state.viewport.taskbar_height, 48);
    }
}
