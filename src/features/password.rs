//! Password visibility toggle. The field's current visibility is its only
//! state; the input `type`, the icon and the button label all derive from it.

/// Whether a password field shows its value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PasswordVisibility {
    #[default]
    Masked,
    Plain,
}

impl PasswordVisibility {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            PasswordVisibility::Masked => PasswordVisibility::Plain,
            PasswordVisibility::Plain => PasswordVisibility::Masked,
        }
    }

    /// Value for the input's `type` attribute.
    pub fn input_type(self) -> &'static str {
        match self {
            PasswordVisibility::Masked => "password",
            PasswordVisibility::Plain => "text",
        }
    }

    /// Font Awesome class for the toggle icon.
    pub fn icon_class(self) -> &'static str {
        match self {
            PasswordVisibility::Masked => "fas fa-eye",
            PasswordVisibility::Plain => "fas fa-eye-slash",
        }
    }

    /// Accessible label describing what the toggle button will do.
    pub fn toggle_label(self) -> &'static str {
        match self {
            PasswordVisibility::Masked => "Show password",
            PasswordVisibility::Plain => "Hide password",
        }
    }
}
