//! Modal context for the browser. The provider owns the registry, mirrors its
//! scroll lock onto `document.body`, and installs the page-wide click listener
//! that closes a modal when its backdrop is clicked.

use super::{BodyOverflow, ModalController, ModalRegistry, backdrop_target};
use leptos::{ev, prelude::*};
use leptos_dom::helpers::window_event_listener;
use tracing::warn;
use wasm_bindgen::JsCast;

pub type BrowserModals = ModalController<RwSignal<ModalRegistry>>;

/// Provides the modal registry to its children.
#[component]
pub fn ModalProvider(children: Children) -> impl IntoView {
    let registry = RwSignal::new(ModalRegistry::default());
    let modals = ModalController::new(registry);
    provide_context(modals);

    Effect::new(move |_| {
        let overflow = registry.with(ModalRegistry::body_overflow);
        apply_body_overflow(overflow);
    });

    // Lives as long as the page; the provider wraps the whole app.
    let _backdrop_listener = window_event_listener(ev::click, move |event| {
        if let Some(id) = clicked_backdrop(&event) {
            modals.close(&id);
        }
    });

    view! { {children()} }
}

/// Returns the page modal controller, or a detached one when no provider is mounted.
pub fn use_modals() -> BrowserModals {
    use_context::<BrowserModals>()
        .unwrap_or_else(|| ModalController::new(RwSignal::new(ModalRegistry::default())))
}

fn clicked_backdrop(event: &web_sys::MouseEvent) -> Option<String> {
    let element = event.target()?.dyn_into::<web_sys::Element>().ok()?;
    backdrop_target(&element.class_name(), &element.id()).map(str::to_string)
}

fn apply_body_overflow(overflow: BodyOverflow) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        warn!("document body unavailable; scroll lock not applied");
        return;
    };
    if body
        .style()
        .set_property("overflow", overflow.as_str())
        .is_err()
    {
        warn!(overflow = overflow.as_str(), "failed to set body overflow");
    }
}
