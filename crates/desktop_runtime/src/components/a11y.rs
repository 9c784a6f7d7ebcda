//! DOM focus and menu-keyboard helpers for shell widgets.

use wasm_bindgen::JsCast;

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|window| window.document())
}

fn active_element_id() -> String {
    document()
        .and_then(|document| document.active_element())
        .map(|element| element.id())
        .unwrap_or_default()
}

/// Focuses an element by ID and reports whether a focusable HTML element was found.
pub(super) fn focus_element_by_id(id: &str) -> bool {
    let Some(element) = document().and_then(|document| document.get_element_by_id(id)) else {
        return false;
    };
    let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
        return false;
    };
    let _ = element.focus();
    true
}

fn menu_items(menu_id: &str) -> Vec<web_sys::HtmlElement> {
    let Some(menu) = document().and_then(|document| document.get_element_by_id(menu_id)) else {
        return Vec::new();
    };
    let Ok(nodes) = menu.query_selector_all(r#"[role="menuitem"]:not([disabled])"#) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect()
}

/// Focuses the first enabled menu item inside a menu container.
pub(super) fn focus_first_menu_item(menu_id: &str) -> bool {
    match menu_items(menu_id).first() {
        Some(first) => {
            let _ = first.focus();
            true
        }
        None => false,
    }
}

fn focus_menu_item(menu_id: &str, pick: impl FnOnce(usize, Option<usize>) -> usize) -> bool {
    let items = menu_items(menu_id);
    if items.is_empty() {
        return false;
    }
    let active_id = active_element_id();
    let current = items
        .iter()
        .position(|item| !active_id.is_empty() && item.id() == active_id);
    let index = pick(items.len(), current).min(items.len() - 1);
    let _ = items[index].focus();
    true
}

/// Arrow/Home/End navigation between menu items. Prevents the default action when handled.
pub(super) fn handle_menu_roving_keydown(ev: &web_sys::KeyboardEvent, menu_id: &str) -> bool {
    let handled = match ev.key().as_str() {
        "ArrowDown" => focus_menu_item(menu_id, |len, current| {
            current.map_or(0, |index| (index + 1) % len)
        }),
        "ArrowUp" => focus_menu_item(menu_id, |len, current| {
            current.map_or(len - 1, |index| (index + len - 1) % len)
        }),
        "Home" => focus_menu_item(menu_id, |_, _| 0),
        "End" => focus_menu_item(menu_id, |len, _| len - 1),
        _ => false,
    };

    if handled {
        ev.prevent_default();
        ev.stop_propagation();
    }
    handled
}
