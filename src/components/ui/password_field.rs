use crate::features::password::PasswordVisibility;
use leptos::prelude::*;

/// Password input followed by its visibility toggle button and icon.
#[component]
pub fn PasswordField(
    #[prop(into)] id: String,
    #[prop(into)] name: String,
    #[prop(into)] label: String,
    #[prop(optional)] autocomplete: Option<&'static str>,
) -> impl IntoView {
    let (visibility, set_visibility) = signal(PasswordVisibility::default());
    let toggle = move |_| set_visibility.update(|current| *current = current.toggled());

    view! {
        <div class="form-group">
            <label for=id.clone()>{label}</label>
            <div class="password-input">
                <input
                    id=id
                    name=name
                    type=move || visibility.get().input_type()
                    autocomplete=autocomplete.unwrap_or("current-password")
                    required
                />
                <button
                    type="button"
                    class="password-toggle"
                    aria-label=move || visibility.get().toggle_label()
                    on:click=toggle
                >
                    <i class=move || visibility.get().icon_class()></i>
                </button>
            </div>
        </div>
    }
}
