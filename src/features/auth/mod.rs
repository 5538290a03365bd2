//! Session feature: ending the current session. The server owns the session
//! cookie; the client only asks for it to be dropped and tells the user how
//! that went. Nothing here reads or logs cookie values.

#[cfg(target_arch = "wasm32")]
pub mod client;
pub mod logout;

pub use logout::{LogoutOutcome, Navigator, SessionClient, run_logout};
