//! Global keyboard shortcuts for the shell.

use leptos::*;

use super::{focus_element_by_id, DesktopAction, DesktopRuntimeContext};
use crate::taskbar::taskbar_buttons;

fn shortcut_digit_index(ev: &web_sys::KeyboardEvent) -> Option<usize> {
    let digit = ev.key().parse::<usize>().ok()?;
    (1..=9).contains(&digit).then(|| digit - 1)
}

/// Handles shell-wide shortcuts. Returns whether the event was consumed.
///
/// - `Ctrl+Esc` toggles the start menu;
/// - `Alt+1`..`Alt+9` activate the matching taskbar button;
/// - `Meta+R` opens the Run dialog;
/// - `Esc` closes whichever overlay is open.
pub(super) fn try_handle_desktop_shortcuts(
    runtime: DesktopRuntimeContext,
    ev: &web_sys::KeyboardEvent,
) -> bool {
    let consume = || {
        ev.prevent_default();
        ev.stop_propagation();
        true
    };

    if ev.ctrl_key() && !ev.alt_key() && !ev.meta_key() && ev.key() == "Escape" {
        runtime.dispatch_action(DesktopAction::ToggleStartMenu);
        return consume();
    }

    if ev.meta_key() && ev.key().eq_ignore_ascii_case("r") {
        runtime.dispatch_action(DesktopAction::ToggleRunDialog);
        return consume();
    }

    if ev.alt_key() && !ev.ctrl_key() && !ev.meta_key() {
        if let Some(index) = shortcut_digit_index(ev) {
            let target = runtime
                .state
                .with_untracked(|desktop| taskbar_buttons(desktop).into_iter().nth(index));
            if let Some(button) = target {
                runtime.dispatch_action(DesktopAction::ActivateTaskbarButton {
                    window_id: button.id,
                });
                return consume();
            }
            return false;
        }
    }

    if ev.key() == "Escape" {
        let (start_menu_open, run_dialog_open, has_error) = runtime.state.with_untracked(|desktop| {
            (
                desktop.start_menu_open,
                desktop.run_dialog_open,
                desktop.error.is_some(),
            )
        });
        if has_error {
            runtime.dispatch_action(DesktopAction::DismissError);
        } else if run_dialog_open {
            runtime.dispatch_action(DesktopAction::CloseRunDialog);
        } else if start_menu_open {
            runtime.dispatch_action(DesktopAction::CloseStartMenu);
            let _ = focus_element_by_id("start-button");
        } else {
            return false;
        }
        return consume();
    }

    false
}
