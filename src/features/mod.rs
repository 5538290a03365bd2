//! Page-level features and the state behind them. Each feature keeps its
//! state object and flow logic free of DOM access; the wasm-only `state`
//! submodules wire them into Leptos context for the components.

pub mod auth;
pub mod modal;
pub mod password;
pub mod toast;
