use crate::app_lib::{build_info, config::AppConfig, telemetry};
use crate::components::AppShell;
use crate::features::{modal::state::ModalProvider, toast::state::ToastProvider};
use crate::routes::DashboardPage;
use leptos::prelude::*;
use tracing::info;

#[component]
pub fn App() -> impl IntoView {
    // Startup hook: runs once after the first render.
    Effect::new(move |_| {
        info!(
            version = build_info::version(),
            commit = build_info::git_commit_hash(),
            "StudyBuddy web initialized"
        );
    });

    view! {
        <ToastProvider>
            <ModalProvider>
                <AppShell>
                    <DashboardPage />
                </AppShell>
            </ModalProvider>
        </ToastProvider>
    }
}

/// Entry point: logging first, then mount.
pub fn start() {
    let config = AppConfig::load();
    if let Err(err) = telemetry::init(&config.log_level) {
        web_sys::console::error_1(&err.to_string().into());
    }

    mount_to_body(App);
}
