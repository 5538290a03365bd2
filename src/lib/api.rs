//! HTTP helpers for the StudyBuddy JSON API with a fixed timeout and uniform
//! error mapping. Feature clients call these instead of building requests by
//! hand. Cookies are attached by the browser; nothing here reads or stores
//! them.

use super::errors::AppError;
use serde::Deserialize;

/// Request timeout (milliseconds) applied to every helper.
pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Error envelope returned by the StudyBuddy backend.
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Builds a URL from an explicit base URL and the provided path.
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Turns a failed response body into a short user-facing message. Prefers the
/// backend's `message` field and falls back to the raw text.
pub fn error_message_from_body(body: &str) -> String {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|envelope| envelope.message);
    match message {
        Some(message) => sanitize_body(&message),
        None => sanitize_body(body),
    }
}

/// Trims and truncates error bodies for display.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

/// Decides the outcome of a request whose success carries no payload. Any
/// non-ok status is an error carrying the server's message.
pub fn empty_response_result(ok: bool, status: u16, body: &str) -> Result<(), AppError> {
    if ok {
        Ok(())
    } else {
        Err(AppError::Http {
            status,
            message: error_message_from_body(body),
        })
    }
}

/// Maps a transport failure description into a timeout or network error.
pub fn classify_request_failure(message: &str) -> AppError {
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::post_empty_json_with_credentials;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{DEFAULT_TIMEOUT_MS, build_url_with_base, classify_request_failure};
    use crate::app_lib::{config::AppConfig, errors::AppError};
    use gloo_net::http::{Request, Response};
    use gloo_timers::callback::Timeout;
    use web_sys::{AbortController, AbortSignal, RequestCredentials};

    /// Posts a JSON-typed request without a body, with cookies, and expects
    /// any ok status. Used to end the current session.
    pub async fn post_empty_json_with_credentials(path: &str) -> Result<(), AppError> {
        let url = build_url(path);
        let response = send_with_timeout(move |signal| {
            Request::post(&url)
                .header("Content-Type", "application/json")
                .credentials(RequestCredentials::Include)
                .abort_signal(Some(signal))
                .build()
                .map_err(|err| AppError::Config(format!("Failed to build request: {err}")))
        })
        .await?;

        handle_empty_response(response).await
    }

    fn build_url(path: &str) -> String {
        let config = AppConfig::load();
        build_url_with_base(&config.api_base_url, path)
    }

    /// Sends a request that is aborted after [`DEFAULT_TIMEOUT_MS`].
    async fn send_with_timeout(
        build_request: impl FnOnce(&AbortSignal) -> Result<Request, AppError>,
    ) -> Result<Response, AppError> {
        let controller = AbortController::new()
            .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
        let signal = controller.signal();
        let timeout_controller = controller.clone();
        let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

        let request = build_request(&signal)?;
        request
            .send()
            .await
            .map_err(|err| classify_request_failure(&err.to_string()))
    }

    async fn handle_empty_response(response: Response) -> Result<(), AppError> {
        if response.ok() {
            return super::empty_response_result(true, response.status(), "");
        }
        let body = response.text().await.unwrap_or_default();
        super::empty_response_result(false, response.status(), &body)
    }
}
