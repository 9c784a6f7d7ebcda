//! Pure geometry helpers that keep icons and windows inside the usable desktop area.
//!
//! The usable area is the viewport minus the taskbar strip at the bottom. None of these functions
//! touch desktop state; the reducer calls them before committing positions.

use crate::model::{Point, Rect, ResizeEdge, Size, Viewport};

/// Returns the origin closest to `rect`'s origin that keeps the whole rectangle inside the usable
/// bounds. Rectangles larger than the bounds are pinned to the top/left edge.
pub fn clamp_rect_origin(rect: Rect, viewport: Viewport) -> Point {
    let bounds = viewport.usable_bounds();
    let max_x = (bounds.right() - rect.width).max(bounds.x);
    let max_y = (bounds.bottom() - rect.height).max(bounds.y);
    Point::new(rect.x.clamp(bounds.x, max_x), rect.y.clamp(bounds.y, max_y))
}

/// Reduces `(dx, dy)` so `bounds` moved by the result stays inside the usable area.
///
/// The reduction is applied once to the whole group, so every member moves by the same amount.
pub fn clamp_group_delta(bounds: Rect, dx: i32, dy: i32, viewport: Viewport) -> (i32, i32) {
    let target = clamp_rect_origin(bounds.offset(dx, dy), viewport);
    (target.x - bounds.x, target.y - bounds.y)
}

/// Smallest rectangle containing every input rectangle.
pub fn union_bounds(rects: impl IntoIterator<Item = Rect>) -> Option<Rect> {
    rects.into_iter().reduce(|acc, rect| {
        let x = acc.x.min(rect.x);
        let y = acc.y.min(rect.y);
        Rect {
            x,
            y,
            width: acc.right().max(rect.right()) - x,
            height: acc.bottom().max(rect.bottom()) - y,
        }
    })
}

/// Enforces the minimum window size and keeps the far edges inside the usable area.
pub fn clamp_window_size(rect: Rect, min: Size, viewport: Viewport) -> Size {
    let bounds = viewport.usable_bounds();
    let max_w = (bounds.right() - rect.x).max(min.width);
    let max_h = (bounds.bottom() - rect.y).max(min.height);
    Size::new(
        rect.width.clamp(min.width, max_w),
        rect.height.clamp(min.height, max_h),
    )
}

/// Trims a resized rectangle whose near edges crossed the top/left of the usable area, then
/// applies [`clamp_window_size`].
pub fn clamp_resized_rect(rect: Rect, min: Size, viewport: Viewport) -> Rect {
    let bounds = viewport.usable_bounds();
    let mut rect = rect;
    if rect.x < bounds.x {
        rect.width -= bounds.x - rect.x;
        rect.x = bounds.x;
    }
    if rect.y < bounds.y {
        rect.height -= bounds.y - rect.y;
        rect.y = bounds.y;
    }
    let size = clamp_window_size(rect, min, viewport);
    Rect::new(rect.origin(), size)
}

/// Applies a pointer delta to the dragged edge or corner of `start`.
///
/// The edge opposite the dragged one stays anchored, including when the minimum size kicks in.
pub fn resize_rect(start: Rect, edge: ResizeEdge, dx: i32, dy: i32, min: Size) -> Rect {
    let (left, right) = match edge {
        ResizeEdge::West | ResizeEdge::NorthWest | ResizeEdge::SouthWest => (dx, 0),
        ResizeEdge::East | ResizeEdge::NorthEast | ResizeEdge::SouthEast => (0, dx),
        ResizeEdge::North | ResizeEdge::South => (0, 0),
    };
    let (top, bottom) = match edge {
        ResizeEdge::North | ResizeEdge::NorthEast | ResizeEdge::NorthWest => (dy, 0),
        ResizeEdge::South | ResizeEdge::SouthEast | ResizeEdge::SouthWest => (0, dy),
        ResizeEdge::East | ResizeEdge::West => (0, 0),
    };

    let width = (start.width - left + right).max(min.width);
    let height = (start.height - top + bottom).max(min.height);
    let x = if left != 0 {
        start.right() - width
    } else {
        start.x
    };
    let y = if top != 0 {
        start.bottom() - height
    } else {
        start.y
    };

    Rect {
        x,
        y,
        width,
        height,
    }
}
