//! Reducer actions, side-effect intents, and transition logic for the desktop shell.

use thiserror::Error;

use crate::{
    apps::{self, DesktopApp, WindowContent},
    commands,
    icon_layout::IconGesture,
    model::{
        AppId, DesktopState, ErrorDialog, InteractionState, Point, PointerInput, ResizeEdge,
        Viewport, WindowDragSession, WindowResizeSession,
    },
    recycle::{RecycleError, RecycleItem},
    spatial::{clamp_rect_origin, clamp_resized_rect, resize_rect},
    taskbar::{self, TaskbarClick},
    window_manager::OpenWindowRequest,
};

const RECYCLE_ERROR_TITLE: &str = "Recycle Bin";

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a window, or refresh and raise the window that already uses the id.
    OpenWindow(OpenWindowRequest<WindowContent>),
    /// Open a catalogue app with its default content.
    OpenApp {
        app: DesktopApp,
    },
    CloseWindow {
        window_id: AppId,
    },
    FocusWindow {
        window_id: AppId,
    },
    ToggleMinimize {
        window_id: AppId,
    },
    ToggleMaximize {
        window_id: AppId,
    },
    /// Taskbar button click: restore, minimize or raise depending on window state.
    ActivateTaskbarButton {
        window_id: AppId,
    },
    /// Move a taskbar button to a new slot.
    ReorderTaskbarButton {
        window_id: AppId,
        index: usize,
    },
    /// Pointer down on a window title bar.
    BeginMove {
        window_id: AppId,
        pointer: Point,
    },
    /// Pointer down on a window resize handle.
    BeginResize {
        window_id: AppId,
        edge: ResizeEdge,
        pointer: Point,
    },
    /// Pointer down on a desktop icon.
    IconPointerDown {
        icon_id: AppId,
        input: PointerInput,
    },
    /// Pointer down on empty desktop background.
    DesktopPointerDown {
        input: PointerInput,
    },
    PointerMove {
        input: PointerInput,
    },
    PointerUp {
        input: PointerInput,
    },
    /// The animation-frame callback requested via [`RuntimeEffect::RequestAnimationFrame`] fired.
    AnimationFrame,
    /// Input listeners were torn down mid-gesture; drop all uncommitted state.
    CancelGesture,
    /// Double-click on a desktop icon.
    ActivateIcon {
        icon_id: AppId,
    },
    RestoreRecycled {
        icon_id: AppId,
    },
    DeleteRecycled {
        icon_id: AppId,
    },
    EmptyRecycleBin,
    /// Free text from the Run dialog or the command prompt.
    RunCommand {
        command: String,
    },
    Search {
        query: String,
    },
    ToggleStartMenu,
    CloseStartMenu,
    ToggleRunDialog,
    CloseRunDialog,
    DismissError,
    SetViewport {
        viewport: Viewport,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Schedule one animation-frame callback that dispatches [`DesktopAction::AnimationFrame`].
    RequestAnimationFrame,
    /// Cancel the scheduled animation-frame callback.
    CancelAnimationFrame,
    /// Move keyboard focus into the window's content.
    FocusWindowInput(AppId),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that reference ids the desktop does not know.
pub enum ReducerError {
    #[error("window `{0}` not found")]
    WindowNotFound(AppId),
    #[error("icon `{0}` not found")]
    IconNotFound(AppId),
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError`] when an action references an unknown window or icon. State is left
/// untouched in that case.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow(req) => open_window(state, req, &mut effects),
        DesktopAction::OpenApp { app } => open_window(state, apps::open_request(app), &mut effects),
        DesktopAction::CloseWindow { window_id } => {
            state
                .windows
                .close(&window_id)
                .ok_or_else(|| ReducerError::WindowNotFound(window_id.clone()))?;
            let dragged = interaction
                .window_drag
                .as_ref()
                .is_some_and(|s| s.window_id == window_id);
            let resized = interaction
                .window_resize
                .as_ref()
                .is_some_and(|s| s.window_id == window_id);
            if dragged {
                interaction.window_drag = None;
            }
            if resized {
                interaction.window_resize = None;
                cancel_frame(interaction, &mut effects);
            }
        }
        DesktopAction::FocusWindow { window_id } => {
            focus(state, &window_id)?;
            state.start_menu_open = false;
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
        DesktopAction::ToggleMinimize { window_id } => {
            if !state.windows.toggle_minimize(&window_id) {
                return Err(ReducerError::WindowNotFound(window_id));
            }
        }
        DesktopAction::ToggleMaximize { window_id } => {
            if !state.windows.toggle_maximize(&window_id) {
                return Err(ReducerError::WindowNotFound(window_id));
            }
        }
        DesktopAction::ActivateTaskbarButton { window_id } => {
            let click = taskbar::taskbar_click(state, &window_id)
                .ok_or_else(|| ReducerError::WindowNotFound(window_id.clone()))?;
            match click {
                TaskbarClick::Restore => {
                    state.windows.toggle_minimize(&window_id);
                    state.windows.focus(&window_id);
                    effects.push(RuntimeEffect::FocusWindowInput(window_id));
                }
                TaskbarClick::Minimize => {
                    state.windows.toggle_minimize(&window_id);
                }
                TaskbarClick::Focus => {
                    state.windows.focus(&window_id);
                    effects.push(RuntimeEffect::FocusWindowInput(window_id));
                }
            }
            state.start_menu_open = false;
        }
        DesktopAction::ReorderTaskbarButton { window_id, index } => {
            if !state.windows.reorder(&window_id, index) {
                return Err(ReducerError::WindowNotFound(window_id));
            }
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            let window = state
                .windows
                .get(&window_id)
                .ok_or_else(|| ReducerError::WindowNotFound(window_id.clone()))?;
            let maximized = window.is_maximized;
            let origin_start = window.position;
            focus(state, &window_id)?;
            state.start_menu_open = false;
            if !maximized {
                interaction.window_drag = Some(WindowDragSession {
                    window_id,
                    pointer_start: pointer,
                    origin_start,
                });
            }
        }
        DesktopAction::BeginResize {
            window_id,
            edge,
            pointer,
        } => {
            let window = state
                .windows
                .get(&window_id)
                .ok_or_else(|| ReducerError::WindowNotFound(window_id.clone()))?;
            let maximized = window.is_maximized;
            let rect_start = window.rect();
            focus(state, &window_id)?;
            state.start_menu_open = false;
            if !maximized {
                interaction.window_resize = Some(WindowResizeSession {
                    window_id,
                    edge,
                    pointer_start: pointer,
                    rect_start,
                    pending: None,
                });
            }
        }
        DesktopAction::IconPointerDown { icon_id, input } => {
            if !state.icons.contains(&icon_id) {
                return Err(ReducerError::IconNotFound(icon_id));
            }
            state.start_menu_open = false;
            reset_hover(interaction);
            interaction.icon_gesture =
                state
                    .icons
                    .pointer_down(&icon_id, input.position, input.additive);
        }
        DesktopAction::DesktopPointerDown { input } => {
            state.start_menu_open = false;
            reset_hover(interaction);
            interaction.icon_gesture = Some(state.icons.begin_rubber_band(input.position));
        }
        DesktopAction::PointerMove { input } => {
            pointer_move(state, interaction, input, &mut effects)
        }
        DesktopAction::PointerUp { input } => pointer_up(state, interaction, input, &mut effects),
        DesktopAction::AnimationFrame => {
            if interaction.frame.take() {
                apply_frame(state, interaction);
            }
        }
        DesktopAction::CancelGesture => cancel_gesture(state, interaction, &mut effects),
        DesktopAction::ActivateIcon { icon_id } => {
            let descriptor = apps::descriptor_by_id(&icon_id)
                .filter(|_| state.icons.contains(&icon_id))
                .ok_or_else(|| ReducerError::IconNotFound(icon_id.clone()))?;
            open_window(state, apps::open_request(descriptor.app), &mut effects);
        }
        DesktopAction::RestoreRecycled { icon_id } => {
            let item = state
                .recycle
                .restore(&icon_id)
                .ok_or_else(|| ReducerError::IconNotFound(icon_id.clone()))?;
            state.icons.upsert(item.id, item.original_position);
        }
        DesktopAction::DeleteRecycled { icon_id } => {
            if !state.recycle.delete(&icon_id) {
                return Err(ReducerError::IconNotFound(icon_id));
            }
            state.icons.remove(&icon_id);
        }
        DesktopAction::EmptyRecycleBin => {
            for id in state.recycle.empty() {
                state.icons.remove(&id);
            }
        }
        DesktopAction::RunCommand { command } => {
            if let Some(app) = commands::parse_run_command(&command) {
                state.run_dialog_open = false;
                open_window(state, apps::open_request(app), &mut effects);
            }
        }
        DesktopAction::Search { query } => {
            let query = query.trim();
            if !query.is_empty() {
                let request = search_request(query);
                open_window(state, request, &mut effects);
            }
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::ToggleRunDialog => {
            state.run_dialog_open = !state.run_dialog_open;
            state.start_menu_open = false;
        }
        DesktopAction::CloseRunDialog => {
            state.run_dialog_open = false;
        }
        DesktopAction::DismissError => {
            state.error = None;
        }
        DesktopAction::SetViewport { viewport } => {
            state.viewport = Viewport {
                taskbar_height: state.config.taskbar_height,
                ..viewport
            };
            state.icons.reclamp(state.viewport);
        }
    }

    Ok(effects)
}

fn open_window(
    state: &mut DesktopState,
    request: OpenWindowRequest<WindowContent>,
    effects: &mut Vec<RuntimeEffect>,
) {
    let window_id = request.id.clone();
    state.windows.open(request);
    state.start_menu_open = false;
    effects.push(RuntimeEffect::FocusWindowInput(window_id));
}

fn focus(state: &mut DesktopState, window_id: &AppId) -> Result<(), ReducerError> {
    if state.windows.focus(window_id) {
        Ok(())
    } else {
        Err(ReducerError::WindowNotFound(window_id.clone()))
    }
}

/// A single catalogue hit opens that app (projects highlight the query); anything else lists
/// results in the shared search window.
fn search_request(query: &str) -> OpenWindowRequest<WindowContent> {
    match commands::search(query).as_slice() {
        [single] if single.app == DesktopApp::Projects => apps::open_request_with(
            DesktopApp::Projects,
            WindowContent::Projects {
                highlight: Some(query.to_string()),
            },
        ),
        [single] => apps::open_request(single.app),
        _ => apps::search_results_request(query),
    }
}

fn pointer_move(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    input: PointerInput,
    effects: &mut Vec<RuntimeEffect>,
) {
    let pointer = input.position;

    if let Some(session) = interaction.window_drag.as_ref() {
        if let Some(window) = state.windows.get(&session.window_id) {
            let candidate = session.origin_start.offset(
                pointer.x - session.pointer_start.x,
                pointer.y - session.pointer_start.y,
            );
            let clamped = clamp_rect_origin(window.rect().with_origin(candidate), state.viewport);
            state.windows.move_to(&session.window_id, clamped);
        }
        return;
    }

    if let Some(session) = interaction.window_resize.as_mut() {
        session.pending = Some(pointer);
        request_frame(interaction, effects);
        return;
    }

    let recycle_id = apps::recycle_bin_id();
    match interaction.icon_gesture.as_mut() {
        Some(IconGesture::Drag(drag)) => {
            state.icons.drag_to(drag, pointer, state.viewport);
            let interval = state.config.drag_hover_throttle_ms;
            let due = interaction.hover_throttle.ready(input.time_ms, interval);
            if drag.icon_id != recycle_id && due {
                let rect = state.icons.rect_at(drag.preview);
                interaction.recycle_hover = state.icons.overlaps_icon(rect, &recycle_id);
            }
        }
        Some(IconGesture::RubberBand(band)) => {
            state.icons.extend_rubber_band(band, pointer);
        }
        Some(IconGesture::GroupDrag(group)) => {
            group.pending_pointer = Some(pointer);
            request_frame(interaction, effects);
        }
        None => {}
    }
}

fn apply_frame(state: &mut DesktopState, interaction: &mut InteractionState) {
    if let Some(session) = interaction.window_resize.as_mut() {
        if let Some(pointer) = session.pending.take() {
            apply_resize(state, session, pointer);
        }
        return;
    }

    if let Some(IconGesture::GroupDrag(group)) = interaction.icon_gesture.as_mut() {
        state.icons.step_group_drag(group, state.viewport);
        interaction.recycle_hover =
            group.has_moved() && group_over_recycle_bin(state, group.last_pointer);
    }
}

fn apply_resize(state: &mut DesktopState, session: &WindowResizeSession, pointer: Point) {
    let min = state.config.min_window_size;
    let resized = resize_rect(
        session.rect_start,
        session.edge,
        pointer.x - session.pointer_start.x,
        pointer.y - session.pointer_start.y,
        min,
    );
    let rect = clamp_resized_rect(resized, min, state.viewport);
    state.windows.move_to(&session.window_id, rect.origin());
    state.windows.resize(&session.window_id, rect.size());
}

fn pointer_up(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    input: PointerInput,
    effects: &mut Vec<RuntimeEffect>,
) {
    let pointer = input.position;

    if interaction.window_drag.take().is_some() {
        return;
    }

    if let Some(session) = interaction.window_resize.take() {
        apply_resize(state, &session, pointer);
        cancel_frame(interaction, effects);
        return;
    }

    let recycle_id = apps::recycle_bin_id();
    match interaction.icon_gesture.take() {
        Some(IconGesture::Drag(mut drag)) => {
            state.icons.drag_to(&mut drag, pointer, state.viewport);
            state.icons.commit_drag(&drag);
            let rect = state.icons.rect_at(drag.preview);
            let moved = drag.preview != drag.origin;
            if moved
                && drag.icon_id != recycle_id
                && state.icons.overlaps_icon(rect, &recycle_id)
            {
                drop_on_recycle_bin(state, vec![drag.icon_id]);
            }
        }
        Some(IconGesture::RubberBand(mut band)) => {
            state.icons.extend_rubber_band(&mut band, pointer);
        }
        Some(IconGesture::GroupDrag(mut group)) => {
            group.pending_pointer = Some(pointer);
            state.icons.step_group_drag(&mut group, state.viewport);
            cancel_frame(interaction, effects);
            state.icons.commit_group(&group);
            // A click on a selected icon is a group drag that never moved; it must not drop.
            if group.has_moved() && group_over_recycle_bin(state, pointer) {
                let candidates: Vec<AppId> = state
                    .icons
                    .selection()
                    .iter()
                    .filter(|id| **id != recycle_id)
                    .cloned()
                    .collect();
                if !candidates.is_empty() {
                    drop_on_recycle_bin(state, candidates);
                }
            }
        }
        None => {}
    }
    reset_hover(interaction);
}

/// A group drag counts as over the bin when the pointer is near it, unless the bin itself is part
/// of the moving selection.
fn group_over_recycle_bin(state: &DesktopState, pointer: Point) -> bool {
    let recycle_id = apps::recycle_bin_id();
    !state.icons.is_selected(&recycle_id)
        && state
            .icons
            .pointer_near_icon(pointer, &recycle_id, state.config.recycle_hit_radius)
}

/// Runs the all-or-nothing recycle protocol and presents the rejection, if any.
fn drop_on_recycle_bin(state: &mut DesktopState, candidates: Vec<AppId>) {
    if let Err(err) = recycle_icons(state, &candidates) {
        state.icons.reset_to_original(&candidates);
        state.error = Some(ErrorDialog {
            title: RECYCLE_ERROR_TITLE.to_string(),
            message: err.to_string(),
        });
    }
    state.icons.clear_selection();
}

fn recycle_icons(state: &mut DesktopState, candidates: &[AppId]) -> Result<(), RecycleError> {
    let open: Vec<String> = candidates
        .iter()
        .filter_map(|id| state.windows.get(id))
        .map(|w| w.title.clone())
        .collect();
    if !open.is_empty() {
        return Err(RecycleError::ApplicationsOpen(open));
    }

    for id in candidates {
        let Some(current) = state.icons.position(id) else {
            continue;
        };
        let descriptor = apps::descriptor_by_id(id);
        state.recycle.insert(RecycleItem {
            id: id.clone(),
            title: apps::title_for(id),
            icon: descriptor.map(|d| d.icon).unwrap_or("file").to_string(),
            original_position: state.icons.original(id).unwrap_or(current),
        });
        state.icons.remove(id);
    }
    Ok(())
}

fn cancel_gesture(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    effects: &mut Vec<RuntimeEffect>,
) {
    if let Some(session) = interaction.window_drag.take() {
        state
            .windows
            .move_to(&session.window_id, session.origin_start);
    }
    if let Some(session) = interaction.window_resize.take() {
        state
            .windows
            .move_to(&session.window_id, session.rect_start.origin());
        state
            .windows
            .resize(&session.window_id, session.rect_start.size());
    }
    interaction.icon_gesture = None;
    cancel_frame(interaction, effects);
    reset_hover(interaction);
}

fn request_frame(interaction: &mut InteractionState, effects: &mut Vec<RuntimeEffect>) {
    if interaction.frame.request() {
        effects.push(RuntimeEffect::RequestAnimationFrame);
    }
}

fn cancel_frame(interaction: &mut InteractionState, effects: &mut Vec<RuntimeEffect>) {
    if interaction.frame.cancel() {
        effects.push(RuntimeEffect::CancelAnimationFrame);
    }
}

fn reset_hover(interaction: &mut InteractionState) {
    interaction.recycle_hover = false;
    interaction.hover_throttle.reset();
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{PointerKind, Size};

    fn id(value: &str) -> AppId {
        AppId::from(value)
    }

    fn dispatch(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        action: DesktopAction,
    ) -> Vec<RuntimeEffect> {
        reduce_desktop(state, interaction, action).expect("reduce")
    }

    fn open(state: &mut DesktopState, interaction: &mut InteractionState, app: DesktopApp) {
        dispatch(state, interaction, DesktopAction::OpenApp { app });
    }

    /// Opens `app` and takes it out of the maximized state so it can be dragged.
    fn open_floating(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        app: DesktopApp,
    ) -> AppId {
        open(state, interaction, app);
        let window_id = app.id();
        dispatch(
            state,
            interaction,
            DesktopAction::ToggleMaximize {
                window_id: window_id.clone(),
            },
        );
        window_id
    }

    /// Selects `ids` with ctrl-clicks, leaving a group drag gesture active on the last one.
    fn ctrl_select(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        ids: &[(&str, Point)],
    ) {
        for (icon, pointer) in ids {
            dispatch(
                state,
                interaction,
                DesktopAction::IconPointerDown {
                    icon_id: id(icon),
                    input: PointerInput::at(pointer.x, pointer.y).with_additive(true),
                },
            );
        }
    }

    fn release(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        x: i32,
        y: i32,
    ) -> Vec<RuntimeEffect> {
        dispatch(
            state,
            interaction,
            DesktopAction::PointerUp {
                input: PointerInput::at(x, y),
            },
        )
    }

    fn single_drag(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        icon: &str,
        from: Point,
        to: Point,
    ) {
        dispatch(
            state,
            interaction,
            DesktopAction::IconPointerDown {
                icon_id: id(icon),
                input: PointerInput::at(from.x, from.y),
            },
        );
        dispatch(
            state,
            interaction,
            DesktopAction::PointerMove {
                input: PointerInput::at(to.x, to.y),
            },
        );
        release(state, interaction, to.x, to.y);
    }

    #[test]
    fn focus_raises_window_above_every_other() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, DesktopApp::Projects);
        open(&mut state, &mut interaction, DesktopApp::Resume);
        assert_eq!(state.focused_window_id(), Some(&id("resume")));

        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow {
                window_id: id("projects"),
            },
        );

        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(id("projects"))]);
        let projects = state.windows.get(&id("projects")).expect("projects");
        let resume = state.windows.get(&id("resume")).expect("resume");
        assert!(projects.z_index > resume.z_index);
        assert_eq!(state.focused_window_id(), Some(&id("projects")));
    }

    #[test]
    fn opening_twice_keeps_a_single_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, DesktopApp::Projects);
        open(&mut state, &mut interaction, DesktopApp::Resume);
        open(&mut state, &mut interaction, DesktopApp::Projects);

        assert_eq!(state.windows.len(), 2);
        assert_eq!(state.focused_window_id(), Some(&id("projects")));
    }

    #[test]
    fn unknown_window_is_reported_and_state_untouched() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let before = state.clone();

        let err = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow {
                window_id: id("ghost"),
            },
        )
        .expect_err("missing window");

        assert_eq!(err, ReducerError::WindowNotFound(id("ghost")));
        assert_eq!(state, before);
    }

    #[test]
    fn taskbar_button_minimizes_restores_and_raises() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, DesktopApp::Projects);
        open(&mut state, &mut interaction, DesktopApp::Resume);
        let activate = |window_id: &str| DesktopAction::ActivateTaskbarButton {
            window_id: id(window_id),
        };

        dispatch(&mut state, &mut interaction, activate("resume"));
        assert!(state.windows.get(&id("resume")).expect("resume").is_minimized);

        dispatch(&mut state, &mut interaction, activate("resume"));
        assert!(!state.windows.get(&id("resume")).expect("resume").is_minimized);
        assert_eq!(state.focused_window_id(), Some(&id("resume")));

        dispatch(&mut state, &mut interaction, activate("projects"));
        assert_eq!(state.focused_window_id(), Some(&id("projects")));
    }

    #[test]
    fn taskbar_reorder_leaves_stacking_alone() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, DesktopApp::Projects);
        open(&mut state, &mut interaction, DesktopApp::Resume);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ReorderTaskbarButton {
                window_id: id("resume"),
                index: 0,
            },
        );

        let order: Vec<&str> = state.windows.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(order, vec!["resume", "projects"]);
        assert_eq!(state.focused_window_id(), Some(&id("resume")));
    }

    #[test]
    fn window_drag_is_clamped_to_usable_area() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let window_id = open_floating(&mut state, &mut interaction, DesktopApp::Projects);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: window_id.clone(),
                pointer: Point::new(100, 60),
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::PointerMove {
                input: PointerInput::at(5_000, 5_000),
            },
        );
        release(&mut state, &mut interaction, 5_000, 5_000);

        let window = state.windows.get(&window_id).expect("window");
        assert_eq!(window.position, Point::new(224, 138));
        assert!(interaction.is_idle());
    }

    #[test]
    fn maximized_window_does_not_start_a_drag() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, DesktopApp::Projects);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: id("projects"),
                pointer: Point::new(100, 60),
            },
        );

        assert!(interaction.window_drag.is_none());
    }

    #[test]
    fn resize_is_applied_once_per_frame() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let window_id = open_floating(&mut state, &mut interaction, DesktopApp::Projects);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: window_id.clone(),
                edge: ResizeEdge::SouthEast,
                pointer: Point::new(850, 650),
            },
        );
        let first = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::PointerMove {
                input: PointerInput::at(860, 655),
            },
        );
        let second = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::PointerMove {
                input: PointerInput::at(870, 660),
            },
        );
        assert_eq!(first, vec![RuntimeEffect::RequestAnimationFrame]);
        assert!(second.is_empty());
        assert_eq!(
            state.windows.get(&window_id).expect("window").size,
            Size::new(800, 600)
        );

        dispatch(&mut state, &mut interaction, DesktopAction::AnimationFrame);
        assert_eq!(
            state.windows.get(&window_id).expect("window").size,
            Size::new(820, 610)
        );

        let effects = release(&mut state, &mut interaction, 880, 670);
        assert!(effects.is_empty());
        assert_eq!(
            state.windows.get(&window_id).expect("window").size,
            Size::new(830, 620)
        );
    }

    #[test]
    fn cancel_restores_window_and_clears_gesture() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let window_id = open_floating(&mut state, &mut interaction, DesktopApp::Projects);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: window_id.clone(),
                pointer: Point::new(100, 60),
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::PointerMove {
                input: PointerInput::at(200, 120),
            },
        );
        assert_eq!(
            state.windows.get(&window_id).expect("window").position,
            Point::new(150, 110)
        );

        dispatch(&mut state, &mut interaction, DesktopAction::CancelGesture);
        assert_eq!(
            state.windows.get(&window_id).expect("window").position,
            Point::new(50, 50)
        );
        assert!(interaction.is_idle());
    }

    #[test]
    fn cancel_drops_pending_group_frame() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        ctrl_select(
            &mut state,
            &mut interaction,
            &[("about-me", Point::new(30, 30)), ("cmd", Point::new(130, 30))],
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::PointerMove {
                input: PointerInput::at(300, 300),
            },
        );

        let effects = dispatch(&mut state, &mut interaction, DesktopAction::CancelGesture);
        assert_eq!(effects, vec![RuntimeEffect::CancelAnimationFrame]);
        assert!(interaction.is_idle());
        assert_eq!(state.icons.position(&id("about-me")), Some(Point::new(20, 20)));
    }

    #[test]
    fn group_dropped_on_recycle_bin_is_recycled() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        ctrl_select(
            &mut state,
            &mut interaction,
            &[
                ("projects", Point::new(30, 150)),
                ("experiences", Point::new(30, 270)),
            ],
        );
        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::PointerMove {
                input: PointerInput::at(160, 185),
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::RequestAnimationFrame]);

        let effects = release(&mut state, &mut interaction, 160, 185);

        assert_eq!(effects, vec![RuntimeEffect::CancelAnimationFrame]);
        assert_eq!(state.recycle.len(), 2);
        assert!(!state.icons.contains(&id("projects")));
        assert!(!state.icons.contains(&id("experiences")));
        assert!(state.icons.selection().is_empty());
        assert_eq!(
            state.recycle.get(&id("projects")).expect("item").original_position,
            Point::new(20, 140)
        );
        assert!(state.error.is_none());
    }

    #[test]
    fn group_with_open_application_is_rejected_as_a_whole() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, DesktopApp::Projects);
        ctrl_select(
            &mut state,
            &mut interaction,
            &[
                ("projects", Point::new(30, 150)),
                ("experiences", Point::new(30, 270)),
            ],
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::PointerMove {
                input: PointerInput::at(160, 185),
            },
        );
        release(&mut state, &mut interaction, 160, 185);

        let error = state.error.clone().expect("error dialog");
        assert!(error.message.contains("My Projects"));
        assert!(!error.message.contains("My Experiences"));
        assert!(state.recycle.is_empty());
        assert_eq!(state.icons.position(&id("projects")), Some(Point::new(20, 140)));
        assert_eq!(
            state.icons.position(&id("experiences")),
            Some(Point::new(20, 260))
        );
        assert!(state.windows.contains(&id("projects")));
        assert!(state.icons.selection().is_empty());

        dispatch(&mut state, &mut interaction, DesktopAction::DismissError);
        assert!(state.error.is_none());
    }

    #[test]
    fn group_drag_that_includes_recycle_bin_never_drops() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        ctrl_select(
            &mut state,
            &mut interaction,
            &[
                ("cmd", Point::new(130, 30)),
                ("recycle-bin", Point::new(130, 150)),
            ],
        );
        release(&mut state, &mut interaction, 130, 150);

        assert!(state.recycle.is_empty());
        assert!(state.icons.contains(&id("cmd")));
    }

    #[test]
    fn restore_returns_icon_to_first_load_position() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        single_drag(
            &mut state,
            &mut interaction,
            "contact",
            Point::new(30, 510),
            Point::new(510, 510),
        );
        assert_eq!(state.icons.position(&id("contact")), Some(Point::new(500, 500)));

        single_drag(
            &mut state,
            &mut interaction,
            "contact",
            Point::new(510, 510),
            Point::new(140, 160),
        );
        assert!(state.recycle.contains(&id("contact")));
        assert!(!state.icons.contains(&id("contact")));

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::RestoreRecycled {
                icon_id: id("contact"),
            },
        );
        assert!(state.recycle.is_empty());
        assert_eq!(state.icons.position(&id("contact")), Some(Point::new(20, 500)));
    }

    #[test]
    fn single_open_icon_dropped_on_bin_snaps_back() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, DesktopApp::Contact);
        single_drag(
            &mut state,
            &mut interaction,
            "contact",
            Point::new(30, 510),
            Point::new(140, 160),
        );

        assert!(state.recycle.is_empty());
        assert_eq!(state.icons.position(&id("contact")), Some(Point::new(20, 500)));
        let error = state.error.expect("error dialog");
        assert_eq!(error.title, "Recycle Bin");
        assert!(error.message.starts_with("Cannot move Contact Me"));
    }

    #[test]
    fn delete_discards_item_for_good() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        single_drag(
            &mut state,
            &mut interaction,
            "resume",
            Point::new(30, 390),
            Point::new(140, 160),
        );
        assert!(state.recycle.contains(&id("resume")));

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::DeleteRecycled {
                icon_id: id("resume"),
            },
        );
        assert!(state.recycle.is_empty());
        assert!(!state.icons.contains(&id("resume")));

        let err = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::RestoreRecycled {
                icon_id: id("resume"),
            },
        )
        .expect_err("already deleted");
        assert_eq!(err, ReducerError::IconNotFound(id("resume")));
    }

    #[test]
    fn delete_drops_a_leftover_desktop_position() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        single_drag(
            &mut state,
            &mut interaction,
            "contact",
            Point::new(30, 510),
            Point::new(140, 160),
        );
        assert!(state.recycle.contains(&id("contact")));
        state.icons.upsert(id("contact"), Point::new(300, 300));

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::DeleteRecycled {
                icon_id: id("contact"),
            },
        );

        assert!(state.recycle.is_empty());
        assert!(!state.icons.contains(&id("contact")));
    }

    #[test]
    fn double_click_beside_recycle_bin_opens_instead_of_recycling() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let pointer = Point::new(95, 200);

        for _ in 0..2 {
            dispatch(
                &mut state,
                &mut interaction,
                DesktopAction::IconPointerDown {
                    icon_id: id("projects"),
                    input: PointerInput::at(pointer.x, pointer.y),
                },
            );
            release(&mut state, &mut interaction, pointer.x, pointer.y);
        }

        assert!(state.recycle.is_empty());
        assert_eq!(
            state.icons.position(&id("projects")),
            Some(Point::new(20, 140))
        );
        assert!(state.error.is_none());

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateIcon {
                icon_id: id("projects"),
            },
        );
        assert_eq!(state.focused_window_id(), Some(&id("projects")));
    }

    #[test]
    fn group_hover_follows_the_applied_frame() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        ctrl_select(
            &mut state,
            &mut interaction,
            &[
                ("projects", Point::new(30, 150)),
                ("experiences", Point::new(30, 270)),
            ],
        );

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::PointerMove {
                input: PointerInput::at(160, 185).with_kind(PointerKind::Touch),
            },
        );
        assert!(!interaction.recycle_hover);

        dispatch(&mut state, &mut interaction, DesktopAction::AnimationFrame);
        assert!(interaction.recycle_hover);

        release(&mut state, &mut interaction, 160, 185);
        assert!(!interaction.recycle_hover);
        assert!(state.recycle.contains(&id("projects")));
        assert!(state.recycle.contains(&id("experiences")));
    }

    #[test]
    fn single_drag_hover_is_throttled() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::IconPointerDown {
                icon_id: id("contact"),
                input: PointerInput::at(30, 510),
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::PointerMove {
                input: PointerInput::at(400, 400).with_time(1_000.0),
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::PointerMove {
                input: PointerInput::at(140, 160).with_time(1_050.0),
            },
        );
        assert!(!interaction.recycle_hover);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::PointerMove {
                input: PointerInput::at(140, 160).with_time(1_200.0),
            },
        );
        assert!(interaction.recycle_hover);
    }

    #[test]
    fn rubber_band_selects_icons_in_first_column() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::DesktopPointerDown {
                input: PointerInput::at(5, 5),
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::PointerMove {
                input: PointerInput::at(60, 300),
            },
        );
        release(&mut state, &mut interaction, 60, 300);

        let selected: Vec<&str> = state.icons.selection().iter().map(AppId::as_str).collect();
        assert_eq!(selected, vec!["about-me", "experiences", "projects"]);
        assert!(interaction.is_idle());
    }

    #[test]
    fn run_command_opens_known_apps_only() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        dispatch(&mut state, &mut interaction, DesktopAction::ToggleRunDialog);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::RunCommand {
                command: "notepad".to_string(),
            },
        );
        assert!(state.windows.is_empty());
        assert!(state.run_dialog_open);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::RunCommand {
                command: "cmd".to_string(),
            },
        );
        assert!(state.windows.contains(&id("cmd")));
        assert!(!state.run_dialog_open);
    }

    #[test]
    fn search_reuses_one_results_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let search = |query: &str| DesktopAction::Search {
            query: query.to_string(),
        };

        dispatch(&mut state, &mut interaction, search("rust"));
        let projects = state.windows.get(&id("projects")).expect("projects");
        assert_eq!(
            projects.content,
            WindowContent::Projects {
                highlight: Some("rust".to_string())
            }
        );

        dispatch(&mut state, &mut interaction, search("my"));
        dispatch(&mut state, &mut interaction, search("zzz"));
        assert_eq!(state.windows.len(), 2);
        let results = state
            .windows
            .get(&AppId::from(apps::SEARCH_WINDOW_ID))
            .expect("search window");
        assert_eq!(results.title, "Search Results - zzz");
        assert_eq!(
            results.content,
            WindowContent::SearchResults {
                query: "zzz".to_string()
            }
        );
    }

    #[test]
    fn start_menu_closes_when_an_app_opens() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        dispatch(&mut state, &mut interaction, DesktopAction::ToggleStartMenu);
        assert!(state.start_menu_open);

        open(&mut state, &mut interaction, DesktopApp::AboutMe);
        assert!(!state.start_menu_open);
    }

    #[test]
    fn shrinking_viewport_reclamps_icons_but_keeps_taskbar_height() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::SetViewport {
                viewport: Viewport {
                    width: 150,
                    height: 400,
                    taskbar_height: 0,
                },
            },
        );

        assert_eq!(state.viewport.taskbar_height, 30);
        assert_eq!(state.icons.position(&id("contact")), Some(Point::new(20, 280)));
        assert_eq!(state.icons.original(&id("contact")), Some(Point::new(20, 500)));
    }
}
