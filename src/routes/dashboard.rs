use crate::app_lib::build_info;
use crate::components::{Button, Modal, ModalButton, PasswordField};
use leptos::prelude::*;

pub const ABOUT_MODAL: &str = "about-modal";
pub const PASSWORD_MODAL: &str = "password-modal";

#[component]
pub fn DashboardPage() -> impl IntoView {
    let commit = build_info::git_commit_hash();
    let version = build_info::version();

    view! {
        <section class="dashboard">
            <div class="card">
                <h1>"Dashboard"</h1>
                <p class="text-muted">
                    "Find study partners, share notes and keep your timetable in one place."
                </p>
                <div class="card-actions">
                    <ModalButton target=PASSWORD_MODAL>
                        <i class="fas fa-key"></i>
                        " Change password"
                    </ModalButton>
                    <ModalButton target=ABOUT_MODAL>
                        <i class="fas fa-info-circle"></i>
                        " About"
                    </ModalButton>
                </div>
            </div>

            <Modal id=PASSWORD_MODAL title="Change password">
                <form method="post" action="/account/password">
                    <PasswordField
                        id="current-password"
                        name="current_password"
                        label="Current password"
                    />
                    <PasswordField
                        id="new-password"
                        name="new_password"
                        label="New password"
                        autocomplete="new-password"
                    />
                    <Button button_type="submit">"Update password"</Button>
                </form>
            </Modal>

            <Modal id=ABOUT_MODAL title="About StudyBuddy">
                <dl class="build-info">
                    <dt>"Version"</dt>
                    <dd>{version}</dd>
                    <dt>"Build"</dt>
                    <dd>
                        <code>{commit}</code>
                    </dd>
                </dl>
            </Modal>
        </section>
    }
}
