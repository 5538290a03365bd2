//! Browser bindings for the session feature: the logout API call and page
//! navigation through `window.location`.

use super::logout::{LOGOUT_PATH, Navigator, SessionClient};
use crate::app_lib::{AppError, api::post_empty_json_with_credentials};
use tracing::warn;

/// Clears the current session on the server.
/// Cookie-based; the browser attaches the session cookie.
pub async fn end_session() -> Result<(), AppError> {
    post_empty_json_with_credentials(LOGOUT_PATH).await
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ApiSessionClient;

impl SessionClient for ApiSessionClient {
    async fn logout(&self) -> Result<(), AppError> {
        end_session().await
    }
}

/// Full page navigation, so the next page loads without client state.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn navigate(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            warn!(path, "window unavailable; navigation skipped");
            return;
        };
        if window.location().set_href(path).is_err() {
            warn!(path, "navigation failed");
        }
    }
}
