//! Toast notifications: short messages that appear in the toast container and
//! remove themselves after a while.
//!
//! Lifecycle: `show` inserts a visible toast; after its duration it switches
//! to the exiting phase (the stylesheet plays the slide-out animation), and
//! [`EXIT_ANIMATION`] later it is removed. A toast can also be dismissed early.
//! Removal is idempotent, so timers that fire for a dismissed toast do nothing.

mod presenter;
mod store;

#[cfg(target_arch = "wasm32")]
pub mod state;

pub use presenter::Toaster;
pub use store::{Severity, Toast, ToastId, ToastPhase, ToastStore};

use std::time::Duration;

/// How long a toast stays visible unless told otherwise.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(5_000);
/// Length of the slide-out animation before the toast is removed.
pub const EXIT_ANIMATION: Duration = Duration::from_millis(300);
