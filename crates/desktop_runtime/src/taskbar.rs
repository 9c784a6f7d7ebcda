//! Taskbar, start menu and tray helpers derived from window-manager state.

use crate::{
    apps::{self, AppDescriptor},
    model::{AppId, DesktopState},
};

/// What clicking a taskbar button does to its window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskbarClick {
    /// Window is minimized: show it and raise it.
    Restore,
    /// Window is already in front: hide it.
    Minimize,
    /// Window is visible but behind another one: raise it.
    Focus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarButton {
    pub id: AppId,
    pub title: String,
    pub icon: String,
    pub active: bool,
    pub minimized: bool,
}

/// Taskbar buttons in window-manager collection order.
pub fn taskbar_buttons(state: &DesktopState) -> Vec<TaskbarButton> {
    let focused = state.focused_window_id();
    state
        .windows
        .iter()
        .map(|w| TaskbarButton {
            id: w.id.clone(),
            title: w.title.clone(),
            icon: w.icon.clone(),
            active: focused == Some(&w.id),
            minimized: w.is_minimized,
        })
        .collect()
}

pub fn taskbar_click(state: &DesktopState, id: &AppId) -> Option<TaskbarClick> {
    let window = state.windows.get(id)?;
    let click = if window.is_minimized {
        TaskbarClick::Restore
    } else if state.focused_window_id() == Some(id) {
        TaskbarClick::Minimize
    } else {
        TaskbarClick::Focus
    };
    Some(click)
}

pub fn taskbar_button_aria_label(button: &TaskbarButton) -> String {
    match (button.active, button.minimized) {
        (_, true) => format!("{}, minimized", button.title),
        (true, false) => format!("{}, active", button.title),
        (false, false) => button.title.clone(),
    }
}

/// Start menu entries: every catalogue app.
pub fn start_menu_entries() -> &'static [AppDescriptor] {
    apps::catalogue()
}

/// Tray clock text, e.g. `9:05 PM`.
pub fn format_tray_clock(hour: u32, minute: u32) -> String {
    let suffix = if hour >= 12 { "PM" } else { "AM" };
    let hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour}:{minute:02} {suffix}")
}
