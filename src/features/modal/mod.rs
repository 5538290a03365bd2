//! Modal dialogs. Open modals are tracked as a set so page scroll stays
//! locked while at least one of them is showing, and a click on a modal's
//! backdrop closes that modal.

mod controller;
mod registry;

#[cfg(target_arch = "wasm32")]
pub mod state;

pub use controller::ModalController;
pub use registry::{BodyOverflow, ModalRegistry, backdrop_target};

/// Marker class carried by every modal backdrop element.
pub const MODAL_CLASS: &str = "modal";
/// Class toggled on a modal element while it is open.
pub const ACTIVE_CLASS: &str = "active";
