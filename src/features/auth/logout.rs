use crate::app_lib::{AppError, Scheduler, SharedState};
use crate::features::toast::{ToastStore, Toaster};
use std::time::Duration;
use tracing::{info, warn};

/// Endpoint that drops the server-side session.
pub const LOGOUT_PATH: &str = "/api/logout";
/// Pause between the success toast and the redirect.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1_000);
/// Where the page goes once logged out.
pub const REDIRECT_TARGET: &str = "/";

pub const SUCCESS_MESSAGE: &str = "Logged out successfully";
pub const FAILURE_MESSAGE: &str = "Logout failed";

/// Ends the session on the server.
#[allow(async_fn_in_trait)]
pub trait SessionClient {
    async fn logout(&self) -> Result<(), AppError>;
}

/// Sends the page to another location.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogoutOutcome {
    LoggedOut,
    /// Carries the message shown to the user.
    Failed(String),
}

impl LogoutOutcome {
    pub fn from_result(result: &Result<(), AppError>) -> Self {
        match result {
            Ok(()) => LogoutOutcome::LoggedOut,
            Err(AppError::Http { message, .. }) => {
                LogoutOutcome::Failed(format!("{FAILURE_MESSAGE}: {message}"))
            }
            Err(_) => LogoutOutcome::Failed(FAILURE_MESSAGE.to_string()),
        }
    }
}

/// Logs the user out and reports the result with a toast.
///
/// On success a success toast is shown and navigation to [`REDIRECT_TARGET`]
/// is scheduled after [`REDIRECT_DELAY`]. Any failure, including a non-ok
/// status, shows an error toast and leaves the page in place. No retries.
pub async fn run_logout<Cl, C, S, N>(
    client: &Cl,
    toaster: &Toaster<C, S>,
    navigator: N,
) -> LogoutOutcome
where
    Cl: SessionClient,
    C: SharedState<ToastStore> + Clone + 'static,
    S: Scheduler + Clone + 'static,
    N: Navigator + 'static,
{
    let result = client.logout().await;
    if let Err(err) = &result {
        warn!(error = %err, status = ?err.status(), "logout request failed");
    }

    let outcome = LogoutOutcome::from_result(&result);
    match &outcome {
        LogoutOutcome::LoggedOut => {
            info!("session ended; redirecting");
            toaster.success(SUCCESS_MESSAGE);
            toaster.scheduler().schedule(
                REDIRECT_DELAY,
                Box::new(move || navigator.navigate(REDIRECT_TARGET)),
            );
        }
        LogoutOutcome::Failed(message) => {
            toaster.error(message.clone());
        }
    }

    outcome
}
