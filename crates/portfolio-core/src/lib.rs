//! portfolio-core — Pure page logic, no DOM.
//!
//! Profile data, view state, the render model, the tween engine and the
//! effect runner that schedules the mount and reveal sequences. Everything
//! here is UI-agnostic: the Dioxus frontend renders `PageView` and hands the
//! effect runner a `StyleHost` backed by real elements.

pub mod config;
pub mod effects;
pub mod error;
pub mod motion;
pub mod profile;
pub mod types;
pub mod view;
