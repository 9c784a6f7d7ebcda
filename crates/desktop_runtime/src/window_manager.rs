//! Ordered collection of open windows with z-order allocation.
//!
//! Collection order is the taskbar button order and is independent of stacking; stacking is
//! driven only by [`Window::z_index`].

use serde::{Deserialize, Serialize};

use crate::model::{AppId, Point, Rect, Size};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window<C> {
    pub id: AppId,
    pub title: String,
    pub icon: String,
    /// Payload owned by the caller; the manager only stores and replaces it.
    pub content: C,
    pub hide_chrome: bool,
    pub is_minimized: bool,
    pub is_maximized: bool,
    /// Kept while maximized so un-maximizing returns to it.
    pub position: Point,
    pub size: Size,
    pub z_index: u32,
}

impl<C> Window<C> {
    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }
}

/// Arguments for [`WindowManager::open`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenWindowRequest<C> {
    pub id: AppId,
    pub title: String,
    pub icon: String,
    pub content: C,
    pub hide_chrome: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// A new window was allocated.
    Created,
    /// A window with the same id existed; its content was replaced and it was raised.
    Refreshed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowManager<C> {
    windows: Vec<Window<C>>,
    highest_z_index: u32,
    default_size: Size,
    cascade_origin: Point,
    cascade_step: i32,
}

impl<C> WindowManager<C> {
    pub fn new(default_size: Size, cascade_origin: Point, cascade_step: i32) -> Self {
        Self {
            windows: Vec::new(),
            highest_z_index: 0,
            default_size,
            cascade_origin,
            cascade_step,
        }
    }

    /// Opens `request.id`, or refreshes the existing window with that id.
    ///
    /// Refreshing replaces the title and content, un-minimizes and focuses; position and size are
    /// kept.
    pub fn open(&mut self, request: OpenWindowRequest<C>) -> OpenOutcome {
        if let Some(window) = self.windows.iter_mut().find(|w| w.id == request.id) {
            window.title = request.title;
            window.content = request.content;
            window.is_minimized = false;
            self.focus(&request.id);
            return OpenOutcome::Refreshed;
        }

        let step = self.cascade_step * self.windows.len() as i32;
        self.highest_z_index += 1;
        self.windows.push(Window {
            id: request.id,
            title: request.title,
            icon: request.icon,
            content: request.content,
            hide_chrome: request.hide_chrome,
            is_minimized: false,
            is_maximized: true,
            position: self.cascade_origin.offset(step, step),
            size: self.default_size,
            z_index: self.highest_z_index,
        });
        OpenOutcome::Created
    }

    /// Removes the window. Nothing about it is retained.
    pub fn close(&mut self, id: &AppId) -> Option<Window<C>> {
        let index = self.index_of(id)?;
        Some(self.windows.remove(index))
    }

    /// Raises the window above every other window. Other z-indices are left untouched.
    pub fn focus(&mut self, id: &AppId) -> bool {
        let next = self.highest_z_index + 1;
        let Some(window) = self.get_mut(id) else {
            return false;
        };
        window.z_index = next;
        self.highest_z_index = next;
        true
    }

    pub fn toggle_minimize(&mut self, id: &AppId) -> bool {
        self.update(id, |w| w.is_minimized = !w.is_minimized)
    }

    pub fn toggle_maximize(&mut self, id: &AppId) -> bool {
        self.update(id, |w| w.is_maximized = !w.is_maximized)
    }

    /// Overwrites the position; callers clamp beforehand.
    pub fn move_to(&mut self, id: &AppId, position: Point) -> bool {
        self.update(id, |w| w.position = position)
    }

    /// Overwrites the size; callers clamp beforehand.
    pub fn resize(&mut self, id: &AppId, size: Size) -> bool {
        self.update(id, |w| w.size = size)
    }

    /// Moves the window to `new_index` in collection order (clamped to the end).
    pub fn reorder(&mut self, id: &AppId, new_index: usize) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let window = self.windows.remove(index);
        let new_index = new_index.min(self.windows.len());
        self.windows.insert(new_index, window);
        true
    }

    pub fn get(&self, id: &AppId) -> Option<&Window<C>> {
        self.windows.iter().find(|w| w.id == *id)
    }

    pub fn contains(&self, id: &AppId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Window<C>> {
        self.windows.iter()
    }

    pub fn windows(&self) -> &[Window<C>] {
        &self.windows
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn highest_z_index(&self) -> u32 {
        self.highest_z_index
    }

    /// Window with the highest z-index, minimized or not.
    pub fn topmost(&self) -> Option<&Window<C>> {
        self.windows.iter().max_by_key(|w| w.z_index)
    }

    fn index_of(&self, id: &AppId) -> Option<usize> {
        self.windows.iter().position(|w| w.id == *id)
    }

    fn get_mut(&mut self, id: &AppId) -> Option<&mut Window<C>> {
        self.windows.iter_mut().find(|w| w.id == *id)
    }

    fn update(&mut self, id: &AppId, apply: impl FnOnce(&mut Window<C>)) -> bool {
        match self.get_mut(id) {
            Some(window) => {
                apply(window);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn manager() -> WindowManager<&'static str> {
        WindowManager::new(Size::new(800, 600), Point::new(50, 50), 30)
    }

    fn request(id: &str, content: &'static str) -> OpenWindowRequest<&'static str> {
        OpenWindowRequest {
            id: AppId::from(id),
            title: id.to_uppercase(),
            icon: format!("{id}-icon"),
            content,
            hide_chrome: false,
        }
    }

    fn z(wm: &WindowManager<&'static str>, id: &str) -> u32 {
        wm.get(&AppId::from(id)).expect("window").z_index
    }

    #[test]
    fn new_windows_cascade_and_start_maximized() {
        let mut wm = manager();
        assert_eq!(wm.open(request("a", "one")), OpenOutcome::Created);
        assert_eq!(wm.open(request("b", "two")), OpenOutcome::Created);

        let a = wm.get(&AppId::from("a")).unwrap();
        let b = wm.get(&AppId::from("b")).unwrap();
        assert!(a.is_maximized);
        assert_eq!(a.position, Point::new(50, 50));
        assert_eq!(b.position, Point::new(80, 80));
        assert_eq!(b.size, Size::new(800, 600));
    }

    #[test]
    fn reopening_an_id_refreshes_instead_of_duplicating() {
        let mut wm = manager();
        wm.open(request("a", "one"));
        wm.open(request("b", "two"));
        wm.toggle_minimize(&AppId::from("a"));
        wm.move_to(&AppId::from("a"), Point::new(300, 200));

        for _ in 0..3 {
            assert_eq!(wm.open(request("a", "fresh")), OpenOutcome::Refreshed);
        }

        assert_eq!(wm.iter().filter(|w| w.id.as_str() == "a").count(), 1);
        let a = wm.get(&AppId::from("a")).unwrap();
        assert_eq!(a.content, "fresh");
        assert!(!a.is_minimized);
        assert_eq!(a.position, Point::new(300, 200));
        assert_eq!(wm.topmost().unwrap().id.as_str(), "a");
    }

    #[test]
    fn focus_allocates_strictly_highest_z_index() {
        let mut wm = manager();
        wm.open(request("a", ""));
        wm.open(request("b", ""));
        assert!(z(&wm, "b") > z(&wm, "a"));

        let b_before = z(&wm, "b");
        assert!(wm.focus(&AppId::from("a")));
        assert!(z(&wm, "a") > z(&wm, "b"));
        assert_eq!(z(&wm, "b"), b_before);
        assert_eq!(wm.highest_z_index(), z(&wm, "a"));
    }

    #[test]
    fn toggles_do_not_touch_z_order() {
        let mut wm = manager();
        wm.open(request("a", ""));
        let before = z(&wm, "a");
        wm.toggle_maximize(&AppId::from("a"));
        wm.toggle_minimize(&AppId::from("a"));
        let a = wm.get(&AppId::from("a")).unwrap();
        assert!(!a.is_maximized);
        assert!(a.is_minimized);
        assert_eq!(a.z_index, before);
    }

    #[test]
    fn reorder_changes_collection_order_only() {
        let mut wm = manager();
        wm.open(request("a", ""));
        wm.open(request("b", ""));
        wm.open(request("c", ""));
        let c_z = z(&wm, "c");

        assert!(wm.reorder(&AppId::from("c"), 0));
        let order: Vec<&str> = wm.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
        assert_eq!(z(&wm, "c"), c_z);

        assert!(wm.reorder(&AppId::from("c"), 99));
        let order: Vec<&str> = wm.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn close_discards_state_and_reopen_starts_fresh() {
        let mut wm = manager();
        wm.open(request("a", ""));
        wm.toggle_maximize(&AppId::from("a"));
        assert!(wm.close(&AppId::from("a")).is_some());
        assert!(wm.close(&AppId::from("a")).is_none());
        assert!(wm.is_empty());

        wm.open(request("a", ""));
        assert!(wm.get(&AppId::from("a")).unwrap().is_maximized);
    }

    #[test]
    fn unknown_ids_are_noops() {
        let mut wm = manager();
        let ghost = AppId::from("ghost");
        assert!(!wm.focus(&ghost));
        assert!(!wm.move_to(&ghost, Point::new(1, 1)));
        assert!(!wm.resize(&ghost, Size::new(1, 1)));
        assert!(!wm.reorder(&ghost, 0));
        assert_eq!(wm.highest_z_index(), 0);
    }
}
