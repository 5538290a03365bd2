//! Shared frontend utilities: API access, configuration, errors, logging,
//! timers, shared UI state cells and build metadata.
//!
//! ## Session Logout
//!
//! 1. **Request:** The client POSTs to `/api/logout` with a JSON content type,
//!    no body, and cookies included so the server can drop the session.
//! 2. **Success:** A success toast is shown and, one second later, the page
//!    navigates to `/`.
//! 3. **Failure:** Network errors, timeouts and non-ok statuses all surface an
//!    error toast; the page stays where it is.
//!
//! Helpers here never store session material. Cookies remain `HttpOnly` and are
//! only attached by the browser.

pub mod api;
pub mod build_info;
pub mod config;
pub mod errors;
pub mod scheduler;
pub mod state;
pub mod telemetry;

pub use errors::AppError;
pub use scheduler::{ManualScheduler, Scheduler};
pub use state::SharedState;

#[cfg(target_arch = "wasm32")]
pub use scheduler::BrowserScheduler;
