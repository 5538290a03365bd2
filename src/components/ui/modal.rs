//! Modal dialog markup. The outer element is the backdrop: it carries the
//! `modal` marker class and the modal id, which is what the page-wide click
//! listener looks for. Inner content never carries the marker.

use crate::features::modal::state::use_modals;
use leptos::prelude::*;

/// Renders a modal that is shown while its id is open in the registry.
#[component]
pub fn Modal(
    #[prop(into)] id: String,
    #[prop(into)] title: String,
    children: Children,
) -> impl IntoView {
    let modals = use_modals();
    let active_id = id.clone();
    let close_id = id.clone();
    let title_id = format!("{id}-title");

    view! {
        <div
            id=id
            class="modal"
            class:active=move || modals.is_open(&active_id)
            role="dialog"
            aria-modal="true"
            aria-labelledby=title_id.clone()
        >
            <div class="modal-content">
                <div class="modal-header">
                    <h2 id=title_id>{title}</h2>
                    <button
                        type="button"
                        class="modal-close"
                        aria-label="Close"
                        on:click=move |_| modals.close(&close_id)
                    >
                        <i class="fas fa-times"></i>
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}

/// Button that opens the modal with the given id.
#[component]
pub fn ModalButton(
    #[prop(into)] target: String,
    #[prop(optional)] class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let modals = use_modals();

    view! {
        <button
            type="button"
            class=class.unwrap_or("btn btn-secondary")
            on:click=move |_| modals.open(&target)
        >
            {children()}
        </button>
    }
}
