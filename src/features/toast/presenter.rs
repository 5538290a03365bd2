use super::{DEFAULT_DURATION, EXIT_ANIMATION, Severity, ToastId, ToastStore};
use crate::app_lib::{Scheduler, SharedState};
use std::time::Duration;
use tracing::debug;

/// Shows toasts and drives their lifetime timers.
///
/// `C` holds the [`ToastStore`] the container renders from; `S` runs the
/// deferred exit and removal steps.
#[derive(Clone, Copy, Debug)]
pub struct Toaster<C, S> {
    store: C,
    scheduler: S,
}

impl<C, S> Toaster<C, S>
where
    C: SharedState<ToastStore> + Clone + 'static,
    S: Scheduler + Clone + 'static,
{
    pub fn new(store: C, scheduler: S) -> Self {
        Self { store, scheduler }
    }

    pub fn store(&self) -> &C {
        &self.store
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Adds a toast and schedules its exit after `duration` and its removal
    /// [`EXIT_ANIMATION`] later. Returns `None` if the store is gone.
    pub fn show(
        &self,
        message: impl Into<String>,
        severity: Severity,
        duration: Duration,
    ) -> Option<ToastId> {
        let message = message.into();
        let id = self
            .store
            .update_state(|store| store.push(message, severity, duration))?;
        debug!(%id, %severity, ?duration, "toast shown");

        let store = self.store.clone();
        let scheduler = self.scheduler.clone();
        self.scheduler.schedule(
            duration,
            Box::new(move || {
                let exiting = store
                    .update_state(|toasts| toasts.begin_exit(id))
                    .unwrap_or(false);
                if !exiting {
                    return;
                }
                scheduler.schedule(
                    EXIT_ANIMATION,
                    Box::new(move || {
                        if store.update_state(|toasts| toasts.remove(id)) == Some(true) {
                            debug!(%id, "toast removed");
                        }
                    }),
                );
            }),
        );

        Some(id)
    }

    pub fn info(&self, message: impl Into<String>) -> Option<ToastId> {
        self.show(message, Severity::Info, DEFAULT_DURATION)
    }

    pub fn success(&self, message: impl Into<String>) -> Option<ToastId> {
        self.show(message, Severity::Success, DEFAULT_DURATION)
    }

    pub fn error(&self, message: impl Into<String>) -> Option<ToastId> {
        self.show(message, Severity::Error, DEFAULT_DURATION)
    }

    /// Removes a toast right away (close button). Pending timers for it no-op.
    pub fn dismiss(&self, id: ToastId) -> bool {
        let removed = self
            .store
            .update_state(|store| store.remove(id))
            .unwrap_or(false);
        if removed {
            debug!(%id, "toast dismissed");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_lib::ManualScheduler;
    use crate::features::toast::ToastPhase;
    use std::{cell::RefCell, rc::Rc};

    type TestToaster = Toaster<Rc<RefCell<ToastStore>>, ManualScheduler>;

    fn toaster() -> (TestToaster, ManualScheduler) {
        let scheduler = ManualScheduler::new();
        let toaster = Toaster::new(Rc::new(RefCell::new(ToastStore::default())), scheduler.clone());
        (toaster, scheduler)
    }

    fn count(toaster: &TestToaster) -> usize {
        toaster.store().borrow().len()
    }

    fn phase(toaster: &TestToaster, id: ToastId) -> Option<ToastPhase> {
        toaster.store().borrow().get(id).map(|toast| toast.phase)
    }

    #[test]
    fn show_adds_exactly_one_toast() {
        let (toaster, _) = toaster();
        let id = toaster.show("Saved", Severity::Success, DEFAULT_DURATION);

        assert!(id.is_some());
        assert_eq!(count(&toaster), 1);
        let store = toaster.store().borrow();
        assert_eq!(store.toasts()[0].message, "Saved");
        assert_eq!(store.toasts()[0].severity, Severity::Success);
    }

    #[test]
    fn toast_exits_after_duration_and_is_removed_after_animation() {
        let (toaster, scheduler) = toaster();
        let Some(id) = toaster.info("Hello") else {
            panic!("store should accept toasts");
        };

        scheduler.advance(DEFAULT_DURATION - Duration::from_millis(1));
        assert_eq!(phase(&toaster, id), Some(ToastPhase::Visible));

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(phase(&toaster, id), Some(ToastPhase::Exiting));

        scheduler.advance(EXIT_ANIMATION - Duration::from_millis(1));
        assert_eq!(count(&toaster), 1);

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(count(&toaster), 0);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn custom_duration_is_honoured() {
        let (toaster, scheduler) = toaster();
        toaster.show("Quick", Severity::Warning, Duration::from_millis(1_000));

        scheduler.advance(Duration::from_millis(1_300));
        assert_eq!(count(&toaster), 0);
    }

    #[test]
    fn every_toast_is_removed_exactly_once() {
        let (toaster, scheduler) = toaster();
        for severity in [Severity::Info, Severity::Success, Severity::Warning, Severity::Error] {
            toaster.show(format!("{severity} message"), severity, DEFAULT_DURATION);
        }
        assert_eq!(count(&toaster), 4);

        scheduler.advance(DEFAULT_DURATION + EXIT_ANIMATION);
        assert_eq!(count(&toaster), 0);

        scheduler.advance(Duration::from_secs(60));
        assert_eq!(count(&toaster), 0);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn staggered_toasts_leave_independently() {
        let (toaster, scheduler) = toaster();
        let first = toaster.info("first");
        scheduler.advance(Duration::from_secs(2));
        let second = toaster.info("second");

        scheduler.advance(Duration::from_millis(3_300));
        let store = toaster.store().borrow();
        assert!(first.is_some_and(|id| !store.contains(id)));
        assert!(second.is_some_and(|id| store.contains(id)));
    }

    #[test]
    fn dismissed_toast_timers_do_nothing() {
        let (toaster, scheduler) = toaster();
        let Some(id) = toaster.error("Oops") else {
            panic!("store should accept toasts");
        };
        let other = toaster.info("still here");

        assert!(toaster.dismiss(id));
        assert!(!toaster.dismiss(id));
        assert_eq!(count(&toaster), 1);

        scheduler.advance(DEFAULT_DURATION);
        assert_eq!(phase(&toaster, id), None);
        assert!(other.is_some_and(|other| phase(&toaster, other) == Some(ToastPhase::Exiting)));
    }
}
