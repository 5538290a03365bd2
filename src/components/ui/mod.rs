mod button;
mod modal;
mod password_field;
mod toast_container;

pub use button::Button;
pub use modal::{Modal, ModalButton};
pub use password_field::PasswordField;
pub use toast_container::ToastContainer;
