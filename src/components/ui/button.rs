use leptos::prelude::*;

#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    children: Children,
) -> impl IntoView {
    let button_type = button_type.unwrap_or("button");
    view! {
        <button
            type=button_type
            class="btn btn-primary"
            class:disabled=move || disabled.get()
            disabled=move || disabled.get()
        >
            {children()}
        </button>
    }
}
