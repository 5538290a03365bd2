//! Deferred work for toast lifetimes and the post-logout redirect.
//!
//! The browser implementation hands tasks to `setTimeout` through
//! `gloo-timers`; [`ManualScheduler`] keeps a virtual clock so the same flows
//! run deterministically off the browser. Scheduled tasks cannot be cancelled:
//! a task whose subject is gone must no-op on its own.

use std::{cell::RefCell, rc::Rc, time::Duration};

/// Runs a task once after a delay on the UI thread.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// Largest delay `setTimeout` honours; longer ones fire immediately.
const MAX_TIMER_MILLIS: u32 = i32::MAX as u32;

/// Converts a delay to timer milliseconds, saturating at [`MAX_TIMER_MILLIS`].
pub fn timer_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis())
        .unwrap_or(u32::MAX)
        .min(MAX_TIMER_MILLIS)
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserScheduler;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{Scheduler, timer_millis};
    use gloo_timers::callback::Timeout;
    use std::time::Duration;

    /// `setTimeout`-backed scheduler. Timers are leaked with `forget()`, so
    /// they fire even after the scheduling component is gone.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct BrowserScheduler;

    impl Scheduler for BrowserScheduler {
        fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
            Timeout::new(timer_millis(delay), task).forget();
        }
    }
}

struct PendingTask {
    due: Duration,
    seq: u64,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct VirtualClock {
    now: Duration,
    seq: u64,
    pending: Vec<PendingTask>,
}

/// Scheduler driven by an explicit virtual clock.
///
/// Tasks run only inside [`ManualScheduler::advance`], in due order, ties
/// broken by scheduling order. Tasks may schedule further tasks; those run in
/// the same call if they fall due before the advance target.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<VirtualClock>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Number of tasks waiting to run.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    /// Moves the clock forward by `by`, running every task that falls due.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        while let Some(task) = self.pop_due(target) {
            task();
        }
        self.clock.borrow_mut().now = target;
    }

    fn pop_due(&self, target: Duration) -> Option<Box<dyn FnOnce()>> {
        let mut clock = self.clock.borrow_mut();
        let index = clock
            .pending
            .iter()
            .enumerate()
            .filter(|(_, pending)| pending.due <= target)
            .min_by_key(|(_, pending)| (pending.due, pending.seq))
            .map(|(index, _)| index)?;
        let pending = clock.pending.swap_remove(index);
        clock.now = pending.due;
        Some(pending.task)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let mut clock = self.clock.borrow_mut();
        let due = clock.now + delay;
        clock.seq += 1;
        let seq = clock.seq;
        clock.pending.push(PendingTask { due, seq, task });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, ManualScheduler) {
        (Rc::new(RefCell::new(Vec::new())), ManualScheduler::new())
    }

    #[test]
    fn tasks_run_only_when_due() {
        let (log, scheduler) = recorder();
        let task_log = log.clone();
        scheduler.schedule(
            Duration::from_millis(100),
            Box::new(move || task_log.borrow_mut().push("fired")),
        );

        scheduler.advance(Duration::from_millis(99));
        assert!(log.borrow().is_empty());
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(*log.borrow(), vec!["fired"]);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.now(), Duration::from_millis(100));
    }

    #[test]
    fn tasks_run_in_due_order_then_fifo() {
        let (log, scheduler) = recorder();
        for (delay, label) in [(20, "late"), (10, "first"), (10, "second")] {
            let task_log = log.clone();
            scheduler.schedule(
                Duration::from_millis(delay),
                Box::new(move || task_log.borrow_mut().push(label)),
            );
        }

        scheduler.advance(Duration::from_millis(50));

        assert_eq!(*log.borrow(), vec!["first", "second", "late"]);
    }

    #[test]
    fn nested_tasks_are_relative_to_their_parent() {
        let (log, scheduler) = recorder();
        let nested = scheduler.clone();
        let task_log = log.clone();
        scheduler.schedule(
            Duration::from_millis(100),
            Box::new(move || {
                task_log.borrow_mut().push("outer");
                let inner_log = task_log.clone();
                nested.schedule(
                    Duration::from_millis(30),
                    Box::new(move || inner_log.borrow_mut().push("inner")),
                );
            }),
        );

        scheduler.advance(Duration::from_millis(120));
        assert_eq!(*log.borrow(), vec!["outer"]);

        scheduler.advance(Duration::from_millis(10));
        assert_eq!(*log.borrow(), vec!["outer", "inner"]);
    }

    #[test]
    fn timer_millis_saturates_at_the_signed_limit() {
        assert_eq!(timer_millis(Duration::from_millis(5_000)), 5_000);
        let just_over = Duration::from_millis(u64::from(MAX_TIMER_MILLIS) + 1);
        assert_eq!(timer_millis(just_over), MAX_TIMER_MILLIS);
        assert_eq!(timer_millis(Duration::from_secs(u64::MAX)), 2_147_483_647);
    }
}
