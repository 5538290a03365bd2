//! End-to-end flows over the public state API, driven by a virtual clock:
//! a user opens a modal, reveals a password, dismisses it by clicking the
//! backdrop, then logs out.

use std::{cell::RefCell, rc::Rc, time::Duration};
use studybuddy_web::app_lib::{AppError, ManualScheduler};
use studybuddy_web::features::auth::{LogoutOutcome, Navigator, SessionClient, run_logout};
use studybuddy_web::features::modal::{BodyOverflow, ModalController, ModalRegistry, backdrop_target};
use studybuddy_web::features::password::PasswordVisibility;
use studybuddy_web::features::toast::{
    DEFAULT_DURATION, EXIT_ANIMATION, Severity, ToastStore, Toaster,
};

type Store = Rc<RefCell<ToastStore>>;

struct StubSession(Result<(), AppError>);

impl SessionClient for StubSession {
    async fn logout(&self) -> Result<(), AppError> {
        self.0.clone()
    }
}

#[derive(Clone, Default)]
struct History(Rc<RefCell<Vec<String>>>);

impl Navigator for History {
    fn navigate(&self, path: &str) {
        self.0.borrow_mut().push(path.to_string());
    }
}

fn page() -> (Toaster<Store, ManualScheduler>, ManualScheduler, ModalController<Rc<RefCell<ModalRegistry>>>) {
    let scheduler = ManualScheduler::new();
    let toaster = Toaster::new(Rc::new(RefCell::new(ToastStore::default())), scheduler.clone());
    let modals = ModalController::new(Rc::new(RefCell::new(ModalRegistry::default())));
    (toaster, scheduler, modals)
}

#[test]
fn modal_password_and_backdrop_flow() {
    let (_, _, modals) = page();

    modals.open("password-modal");
    assert!(modals.is_open("password-modal"));
    assert_eq!(modals.body_overflow(), BodyOverflow::Hidden);

    let visibility = PasswordVisibility::default().toggled();
    assert_eq!(visibility.input_type(), "text");

    // Click inside the dialog: nothing happens.
    assert_eq!(backdrop_target("modal-body", "password-modal"), None);
    assert!(modals.is_open("password-modal"));

    // Click on the backdrop: the modal closes and scrolling comes back.
    if let Some(id) = backdrop_target("modal active", "password-modal") {
        modals.close(id);
    }
    assert!(!modals.is_open("password-modal"));
    assert_eq!(modals.body_overflow(), BodyOverflow::Auto);
}

#[tokio::test]
async fn successful_logout_toasts_redirects_and_cleans_up() {
    let (toaster, scheduler, _) = page();
    let history = History::default();

    let outcome = run_logout(&StubSession(Ok(())), &toaster, history.clone()).await;
    assert_eq!(outcome, LogoutOutcome::LoggedOut);

    {
        let store = toaster.store().borrow();
        assert_eq!(store.len(), 1);
        assert_eq!(store.toasts()[0].severity, Severity::Success);
        assert_eq!(store.toasts()[0].message, "Logged out successfully");
    }

    scheduler.advance(Duration::from_millis(1_000));
    assert_eq!(*history.0.borrow(), vec!["/".to_string()]);

    scheduler.advance(DEFAULT_DURATION + EXIT_ANIMATION);
    assert!(toaster.store().borrow().is_empty());
    assert_eq!(history.0.borrow().len(), 1);
}

#[tokio::test]
async fn rejected_logout_keeps_user_on_page() {
    let (toaster, scheduler, _) = page();
    let history = History::default();
    let session = StubSession(Err(AppError::Network("offline".to_string())));

    let outcome = run_logout(&session, &toaster, history.clone()).await;

    assert_eq!(outcome, LogoutOutcome::Failed("Logout failed".to_string()));
    assert_eq!(
        toaster.store().borrow().toasts()[0].severity,
        Severity::Error
    );
    scheduler.advance(Duration::from_secs(30));
    assert!(history.0.borrow().is_empty());
}

#[tokio::test]
async fn logout_with_server_error_reports_failure() {
    let (toaster, _, _) = page();
    let history = History::default();
    let session = StubSession(Err(AppError::Http {
        status: 500,
        message: "Database unavailable".to_string(),
    }));

    let outcome = run_logout(&session, &toaster, history.clone()).await;

    assert_eq!(
        outcome,
        LogoutOutcome::Failed("Logout failed: Database unavailable".to_string())
    );
    assert_eq!(toaster.store().borrow().len(), 1);
}
