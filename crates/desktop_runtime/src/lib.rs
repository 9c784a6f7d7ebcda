//! Spatial interaction core and Leptos shell for a Windows XP style portfolio desktop.
//!
//! The headless modules ([`spatial`], [`icon_layout`], [`window_manager`], [`recycle`],
//! [`reducer`]) hold every rule about where things may go; [`components`] only renders state and
//! forwards input.

pub mod apps;
pub mod commands;
pub mod components;
pub mod effect_executor;
pub mod frame;
pub mod host;
pub mod icon_layout;
pub mod model;
pub mod recycle;
pub mod reducer;
pub mod runtime_context;
pub mod spatial;
pub mod taskbar;
pub mod volume;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
