//! Desktop icon positions, selection, and the drag / rubber-band gesture state machine.
//!
//! Committed positions change only when a gesture ends. While a gesture is active the view draws
//! [`IconLayout::preview_position`], which layers the gesture's uncommitted offset on top.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{
    model::{AppId, Point, Rect, Size, Viewport},
    spatial::{clamp_group_delta, clamp_rect_origin, union_bounds},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconPosition {
    pub id: AppId,
    pub x: i32,
    pub y: i32,
}

impl IconPosition {
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Single-icon drag started on a previously unselected icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconDrag {
    pub icon_id: AppId,
    pub pointer_start: Point,
    pub origin: Point,
    /// Clamped position the icon is drawn at; committed on release.
    pub preview: Point,
}

/// Selection rectangle anchored where the pointer went down on empty desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RubberBand {
    pub anchor: Point,
    pub corner: Point,
}

impl RubberBand {
    pub fn rect(&self) -> Rect {
        Rect::from_corners(self.anchor, self.corner)
    }
}

/// Rigid move of every selected icon, advanced once per animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupDrag {
    /// Pointer position consumed by the last committed frame.
    pub last_pointer: Point,
    /// Latest pointer sample waiting for the next frame.
    pub pending_pointer: Option<Point>,
    pub dx: i32,
    pub dy: i32,
}

impl GroupDrag {
    pub fn new(pointer: Point) -> Self {
        Self {
            last_pointer: pointer,
            pending_pointer: None,
            dx: 0,
            dy: 0,
        }
    }

    /// Whether any frame has shifted the group away from its committed positions.
    pub fn has_moved(&self) -> bool {
        self.dx != 0 || self.dy != 0
    }

    /// Most recent pointer position seen by the gesture.
    pub fn pointer(&self) -> Point {
        self.pending_pointer.unwrap_or(self.last_pointer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconGesture {
    Drag(IconDrag),
    RubberBand(RubberBand),
    GroupDrag(GroupDrag),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconLayout {
    originals: Vec<IconPosition>,
    positions: Vec<IconPosition>,
    selection: BTreeSet<AppId>,
    icon_size: Size,
}

impl IconLayout {
    /// Captures `icons` as both the current and the original (restore) coordinates.
    pub fn new(icons: Vec<IconPosition>, icon_size: Size) -> Self {
        Self {
            originals: icons.clone(),
            positions: icons,
            selection: BTreeSet::new(),
            icon_size,
        }
    }

    pub fn icon_size(&self) -> Size {
        self.icon_size
    }

    pub fn positions(&self) -> &[IconPosition] {
        &self.positions
    }

    pub fn position(&self, id: &AppId) -> Option<Point> {
        self.positions
            .iter()
            .find(|p| p.id == *id)
            .map(IconPosition::point)
    }

    pub fn original(&self, id: &AppId) -> Option<Point> {
        self.originals
            .iter()
            .find(|p| p.id == *id)
            .map(IconPosition::point)
    }

    pub fn contains(&self, id: &AppId) -> bool {
        self.position(id).is_some()
    }

    pub fn rect_at(&self, origin: Point) -> Rect {
        Rect::new(origin, self.icon_size)
    }

    pub fn rect(&self, id: &AppId) -> Option<Rect> {
        self.position(id).map(|p| self.rect_at(p))
    }

    pub fn selection(&self) -> &BTreeSet<AppId> {
        &self.selection
    }

    pub fn is_selected(&self, id: &AppId) -> bool {
        self.selection.contains(id)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Inserts or overwrites the committed position for `id`.
    pub fn upsert(&mut self, id: AppId, point: Point) {
        match self.positions.iter_mut().find(|p| p.id == id) {
            Some(existing) => {
                existing.x = point.x;
                existing.y = point.y;
            }
            None => self.positions.push(IconPosition {
                id,
                x: point.x,
                y: point.y,
            }),
        }
    }

    /// Drops the icon's position and selection entry.
    pub fn remove(&mut self, id: &AppId) -> bool {
        self.selection.remove(id);
        let before = self.positions.len();
        self.positions.retain(|p| p.id != *id);
        self.positions.len() != before
    }

    /// Moves each listed icon that is still on the desktop back to its first-load coordinates.
    pub fn reset_to_original(&mut self, ids: &[AppId]) {
        for id in ids {
            if let Some(original) = self.original(id) {
                if self.contains(id) {
                    self.upsert(id.clone(), original);
                }
            }
        }
    }

    /// Pulls every committed position back inside a (possibly smaller) viewport.
    pub fn reclamp(&mut self, viewport: Viewport) {
        let size = self.icon_size;
        for position in &mut self.positions {
            let clamped = clamp_rect_origin(Rect::new(position.point(), size), viewport);
            position.x = clamped.x;
            position.y = clamped.y;
        }
    }

    /// Icons whose bounding box intersects `area`.
    pub fn icons_intersecting(&self, area: Rect) -> BTreeSet<AppId> {
        self.positions
            .iter()
            .filter(|p| self.rect_at(p.point()).intersects(area))
            .map(|p| p.id.clone())
            .collect()
    }

    /// Union of the committed rectangles of all selected icons.
    pub fn selected_bounds(&self) -> Option<Rect> {
        union_bounds(
            self.positions
                .iter()
                .filter(|p| self.selection.contains(&p.id))
                .map(|p| self.rect_at(p.point())),
        )
    }

    /// Handles pointer-down on an icon and returns the gesture it starts, if any.
    ///
    /// - unselected icon: becomes the only selection and starts a single-icon drag;
    /// - unselected icon with `additive`: joins the selection and starts a group drag;
    /// - selected icon: starts a group drag of the whole selection;
    /// - selected icon with `additive`: leaves the selection, no gesture.
    pub fn pointer_down(
        &mut self,
        id: &AppId,
        pointer: Point,
        additive: bool,
    ) -> Option<IconGesture> {
        let origin = self.position(id)?;

        if self.is_selected(id) {
            if additive {
                self.selection.remove(id);
                return None;
            }
            return Some(IconGesture::GroupDrag(GroupDrag::new(pointer)));
        }

        if additive {
            self.selection.insert(id.clone());
            return Some(IconGesture::GroupDrag(GroupDrag::new(pointer)));
        }

        self.selection.clear();
        self.selection.insert(id.clone());
        Some(IconGesture::Drag(IconDrag {
            icon_id: id.clone(),
            pointer_start: pointer,
            origin,
            preview: origin,
        }))
    }

    /// Starts a rubber-band selection, discarding the previous selection.
    pub fn begin_rubber_band(&mut self, pointer: Point) -> IconGesture {
        self.selection.clear();
        IconGesture::RubberBand(RubberBand {
            anchor: pointer,
            corner: pointer,
        })
    }

    /// Moves the drag preview to follow `pointer`, clamped to the usable area.
    pub fn drag_to(&self, drag: &mut IconDrag, pointer: Point, viewport: Viewport) {
        let candidate = drag.origin.offset(
            pointer.x - drag.pointer_start.x,
            pointer.y - drag.pointer_start.y,
        );
        drag.preview = clamp_rect_origin(self.rect_at(candidate), viewport);
    }

    /// Grows the band to `pointer` and recomputes the selection from it.
    pub fn extend_rubber_band(&mut self, band: &mut RubberBand, pointer: Point) {
        band.corner = pointer;
        self.selection = self.icons_intersecting(band.rect());
    }

    /// Applies the pending pointer sample of a group drag. Returns `false` when nothing was
    /// pending.
    ///
    /// The delta since the last frame is reduced once for the whole selection so the group keeps
    /// its shape at the viewport edges.
    pub fn step_group_drag(&self, group: &mut GroupDrag, viewport: Viewport) -> bool {
        let Some(pointer) = group.pending_pointer.take() else {
            return false;
        };
        let dx = pointer.x - group.last_pointer.x;
        let dy = pointer.y - group.last_pointer.y;
        group.last_pointer = pointer;

        if let Some(bounds) = self.selected_bounds() {
            let (dx, dy) = clamp_group_delta(bounds.offset(group.dx, group.dy), dx, dy, viewport);
            group.dx += dx;
            group.dy += dy;
        }
        true
    }

    pub fn commit_drag(&mut self, drag: &IconDrag) -> bool {
        if !self.contains(&drag.icon_id) {
            return false;
        }
        self.upsert(drag.icon_id.clone(), drag.preview);
        true
    }

    pub fn commit_group(&mut self, group: &GroupDrag) {
        for position in &mut self.positions {
            if self.selection.contains(&position.id) {
                position.x += group.dx;
                position.y += group.dy;
            }
        }
    }

    /// Where the view should draw `id` right now. `None` for ids without a position.
    pub fn preview_position(&self, id: &AppId, gesture: Option<&IconGesture>) -> Option<Point> {
        let committed = self.position(id)?;
        let preview = match gesture {
            Some(IconGesture::Drag(drag)) if drag.icon_id == *id => drag.preview,
            Some(IconGesture::GroupDrag(group)) if self.is_selected(id) => {
                committed.offset(group.dx, group.dy)
            }
            _ => committed,
        };
        Some(preview)
    }

    /// Whether `rect` overlaps the committed rectangle of `target`.
    pub fn overlaps_icon(&self, rect: Rect, target: &AppId) -> bool {
        self.rect(target)
            .map(|target_rect| target_rect.intersects(rect))
            .unwrap_or(false)
    }

    /// Whether `pointer` lies within `radius` of the centre of `target`.
    pub fn pointer_near_icon(&self, pointer: Point, target: &AppId, radius: f64) -> bool {
        self.rect(target)
            .map(|target_rect| pointer.distance(target_rect.center()) < radius)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn id(value: &str) -> AppId {
        AppId::from(value)
    }

    fn layout(icons: &[(&str, i32, i32)]) -> IconLayout {
        IconLayout::new(
            icons
                .iter()
                .map(|(icon, x, y)| IconPosition {
                    id: id(icon),
                    x: *x,
                    y: *y,
                })
                .collect(),
            Size::new(80, 90),
        )
    }

    fn viewport() -> Viewport {
        Viewport {
            width: 800,
            height: 600,
            taskbar_height: 30,
        }
    }

    fn selected(layout: &IconLayout) -> Vec<&str> {
        layout.selection().iter().map(AppId::as_str).collect()
    }

    #[test]
    fn rubber_band_selects_intersecting_icons() {
        let mut icons = layout(&[("a", 20, 20), ("b", 20, 140)]);

        let IconGesture::RubberBand(mut band) = icons.begin_rubber_band(Point::new(0, 0)) else {
            panic!("expected rubber band");
        };
        icons.extend_rubber_band(&mut band, Point::new(200, 300));
        assert_eq!(selected(&icons), vec!["a", "b"]);

        let IconGesture::RubberBand(mut band) = icons.begin_rubber_band(Point::new(0, 0)) else {
            panic!("expected rubber band");
        };
        icons.extend_rubber_band(&mut band, Point::new(200, 50));
        assert_eq!(selected(&icons), vec!["a"]);
    }

    #[test]
    fn rubber_band_selection_is_monotonic_while_growing() {
        let mut icons = layout(&[("a", 20, 20), ("b", 20, 140), ("c", 300, 260), ("d", 500, 20)]);
        let IconGesture::RubberBand(mut band) = icons.begin_rubber_band(Point::new(10, 10)) else {
            panic!("expected rubber band");
        };

        let mut previous: BTreeSet<AppId> = BTreeSet::new();
        for step in 0..40 {
            icons.extend_rubber_band(&mut band, Point::new(10 + step * 15, 10 + step * 12));
            assert!(previous.is_subset(icons.selection()));
            previous = icons.selection().clone();
        }
        assert_eq!(previous.len(), 4);
    }

    #[test]
    fn rubber_band_works_in_reverse_direction() {
        let mut icons = layout(&[("a", 20, 20), ("b", 20, 140)]);
        let IconGesture::RubberBand(mut band) = icons.begin_rubber_band(Point::new(200, 300)) else {
            panic!("expected rubber band");
        };
        icons.extend_rubber_band(&mut band, Point::new(90, 200));
        assert_eq!(selected(&icons), vec!["b"]);
    }

    #[test]
    fn pointer_down_on_unselected_icon_replaces_selection() {
        let mut icons = layout(&[("a", 20, 20), ("b", 20, 140)]);
        icons.pointer_down(&id("a"), Point::new(30, 30), false);
        let gesture = icons.pointer_down(&id("b"), Point::new(30, 150), false);

        assert!(matches!(gesture, Some(IconGesture::Drag(_))));
        assert_eq!(selected(&icons), vec!["b"]);
    }

    #[test]
    fn additive_pointer_down_toggles_membership() {
        let mut icons = layout(&[("a", 20, 20), ("b", 20, 140)]);
        icons.pointer_down(&id("a"), Point::new(30, 30), false);

        let gesture = icons.pointer_down(&id("b"), Point::new(30, 150), true);
        assert!(matches!(gesture, Some(IconGesture::GroupDrag(_))));
        assert_eq!(selected(&icons), vec!["a", "b"]);

        let gesture = icons.pointer_down(&id("a"), Point::new(30, 30), true);
        assert!(gesture.is_none());
        assert_eq!(selected(&icons), vec!["b"]);
    }

    #[test]
    fn pointer_down_on_selected_icon_starts_group_drag() {
        let mut icons = layout(&[("a", 20, 20), ("b", 20, 140)]);
        icons.pointer_down(&id("a"), Point::new(30, 30), false);
        icons.pointer_down(&id("b"), Point::new(30, 150), true);

        let gesture = icons.pointer_down(&id("a"), Point::new(30, 30), false);
        assert!(matches!(gesture, Some(IconGesture::GroupDrag(_))));
        assert_eq!(selected(&icons), vec!["a", "b"]);
    }

    #[test]
    fn pointer_down_on_unknown_icon_is_ignored() {
        let mut icons = layout(&[("a", 20, 20)]);
        assert!(icons.pointer_down(&id("ghost"), Point::new(0, 0), false).is_none());
        assert!(icons.selection().is_empty());
    }

    #[test]
    fn single_drag_is_clamped_and_committed_only_on_commit() {
        let mut icons = layout(&[("a", 20, 20)]);
        let Some(IconGesture::Drag(mut drag)) =
            icons.pointer_down(&id("a"), Point::new(30, 30), false)
        else {
            panic!("expected drag");
        };

        icons.drag_to(&mut drag, Point::new(2_000, 2_000), viewport());
        assert_eq!(drag.preview, Point::new(720, 480));
        assert_eq!(icons.position(&id("a")), Some(Point::new(20, 20)));
        let gesture = IconGesture::Drag(drag.clone());
        assert_eq!(
            icons.preview_position(&id("a"), Some(&gesture)),
            Some(Point::new(720, 480))
        );

        assert!(icons.commit_drag(&drag));
        assert_eq!(icons.position(&id("a")), Some(Point::new(720, 480)));
        let rect = icons.rect(&id("a")).unwrap();
        assert!(rect.right() <= 800 && rect.bottom() <= 570);
    }

    #[test]
    fn group_drag_moves_rigidly_at_viewport_edge() {
        let mut icons = layout(&[("a", 20, 20), ("b", 120, 140)]);
        icons.pointer_down(&id("a"), Point::new(30, 30), false);
        icons.pointer_down(&id("b"), Point::new(130, 150), true);
        let Some(IconGesture::GroupDrag(mut group)) =
            icons.pointer_down(&id("a"), Point::new(30, 30), false)
        else {
            panic!("expected group drag");
        };

        group.pending_pointer = Some(Point::new(-70, 60));
        assert!(icons.step_group_drag(&mut group, viewport()));
        assert_eq!((group.dx, group.dy), (-20, 30));
        assert!(!icons.step_group_drag(&mut group, viewport()));

        icons.commit_group(&group);
        assert_eq!(icons.position(&id("a")), Some(Point::new(0, 50)));
        assert_eq!(icons.position(&id("b")), Some(Point::new(100, 170)));
    }

    #[test]
    fn group_delta_accounts_for_uncommitted_offset() {
        let mut icons = layout(&[("a", 20, 20)]);
        icons.pointer_down(&id("a"), Point::new(0, 0), true);
        let mut group = GroupDrag::new(Point::new(0, 0));

        group.pending_pointer = Some(Point::new(700, 0));
        icons.step_group_drag(&mut group, viewport());
        group.pending_pointer = Some(Point::new(800, 0));
        icons.step_group_drag(&mut group, viewport());

        assert_eq!(group.dx, 700);
        assert_eq!(
            icons.preview_position(&id("a"), Some(&IconGesture::GroupDrag(group))),
            Some(Point::new(720, 20))
        );
    }

    #[test]
    fn remove_and_upsert_never_duplicate_entries() {
        let mut icons = layout(&[("a", 20, 20)]);
        icons.upsert(id("a"), Point::new(5, 5));
        icons.upsert(id("a"), Point::new(6, 6));
        assert_eq!(icons.positions().len(), 1);

        assert!(icons.remove(&id("a")));
        assert!(!icons.remove(&id("a")));
        assert_eq!(icons.original(&id("a")), Some(Point::new(20, 20)));
    }

    #[test]
    fn reset_to_original_skips_icons_not_on_desktop() {
        let mut icons = layout(&[("a", 20, 20), ("b", 20, 140)]);
        icons.upsert(id("a"), Point::new(400, 400));
        icons.remove(&id("b"));

        icons.reset_to_original(&[id("a"), id("b")]);
        assert_eq!(icons.position(&id("a")), Some(Point::new(20, 20)));
        assert!(!icons.contains(&id("b")));
    }

    #[test]
    fn reclamp_pulls_icons_into_smaller_viewport() {
        let mut icons = layout(&[("a", 700, 480)]);
        icons.reclamp(Viewport {
            width: 400,
            height: 300,
            taskbar_height: 30,
        });
        assert_eq!(icons.position(&id("a")), Some(Point::new(320, 180)));
        assert_eq!(icons.original(&id("a")), Some(Point::new(700, 480)));
    }

    #[test]
    fn recycle_target_hit_tests() {
        let icons = layout(&[("bin", 400, 300)]);
        let bin = id("bin");
        assert!(icons.pointer_near_icon(Point::new(500, 345), &bin, 100.0));
        assert!(!icons.pointer_near_icon(Point::new(600, 345), &bin, 100.0));
        assert!(icons.overlaps_icon(Rect::new(Point::new(350, 250), Size::new(80, 90)), &bin));
        assert!(!icons.overlaps_icon(Rect::new(Point::new(320, 300), Size::new(80, 90)), &bin));
    }
}
