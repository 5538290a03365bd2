//! Toast context for the browser. One provider owns the store; every
//! component reaches it through [`use_toaster`].

use super::{ToastStore, Toaster};
use crate::app_lib::BrowserScheduler;
use leptos::prelude::*;

pub type BrowserToaster = Toaster<RwSignal<ToastStore>, BrowserScheduler>;

/// Provides the toast store to its children.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let store = RwSignal::new(ToastStore::default());
    provide_context(Toaster::new(store, BrowserScheduler));

    view! { {children()} }
}

/// Returns the page toaster, or a detached one when no provider is mounted.
pub fn use_toaster() -> BrowserToaster {
    use_context::<BrowserToaster>()
        .unwrap_or_else(|| Toaster::new(RwSignal::new(ToastStore::default()), BrowserScheduler))
}
