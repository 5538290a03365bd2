//! Page wrapper: header with the sign-out action, main content container and
//! the toast container. Logout is UX only; the server decides whether a
//! session still exists.

use crate::components::ui::ToastContainer;
use crate::features::auth::{
    client::{ApiSessionClient, LocationNavigator},
    run_logout,
};
use crate::features::toast::state::use_toaster;
use leptos::{prelude::*, task::spawn_local};

#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let toaster = use_toaster();
    let (logging_out, set_logging_out) = signal(false);

    let on_logout = move |_| {
        if logging_out.get_untracked() {
            return;
        }
        set_logging_out.set(true);
        spawn_local(async move {
            run_logout(&ApiSessionClient, &toaster, LocationNavigator).await;
            set_logging_out.set(false);
        });
    };

    view! {
        <div class="app">
            <header class="navbar">
                <a href="/" class="navbar-brand">
                    <i class="fas fa-graduation-cap"></i>
                    <span>"VIT StudyBuddy"</span>
                </a>
                <button
                    type="button"
                    class="btn btn-secondary navbar-logout"
                    disabled=move || logging_out.get()
                    on:click=on_logout
                >
                    <i class="fas fa-sign-out-alt"></i>
                    " Logout"
                </button>
            </header>
            <main class="container">{children()}</main>
            <ToastContainer />
        </div>
    }
}
