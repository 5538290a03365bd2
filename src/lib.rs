//! StudyBuddy web frontend.
//!
//! The crate renders the page chrome shared by every StudyBuddy screen: toast
//! notifications, modal dialogs, password fields with a visibility toggle, and
//! the session logout action. UI state lives in explicit stores provided
//! through Leptos context; the stores, timers and the logout flow are plain
//! Rust so they run (and are tested) on any target. Components and browser
//! bindings only exist on `wasm32`.

#[path = "lib/mod.rs"]
pub mod app_lib;
pub mod features;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod components;
#[cfg(target_arch = "wasm32")]
pub mod routes;
