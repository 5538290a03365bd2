//! Toast container. Messages render as text nodes, never as HTML.

use crate::features::toast::{Toast, state::use_toaster};
use leptos::prelude::*;

#[component]
pub fn ToastContainer() -> impl IntoView {
    let toaster = use_toaster();
    let store = *toaster.store();

    view! {
        <div id="toast-container" class="toast-container" aria-live="polite">
            <For
                each=move || store.with(|toasts| toasts.toasts().to_vec())
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = move || {
                        store
                            .with(|toasts| toasts.get(id).map(Toast::class_name))
                            .unwrap_or_else(|| "toast".to_string())
                    };
                    view! {
                        <div class=class role="status">
                            <div class="toast-content">
                                <div class="toast-message">{toast.message}</div>
                                <button
                                    type="button"
                                    class="toast-close"
                                    aria-label="Dismiss"
                                    on:click=move |_| {
                                        toaster.dismiss(id);
                                    }
                                >
                                    <i class="fas fa-times"></i>
                                </button>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
