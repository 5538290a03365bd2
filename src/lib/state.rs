//! Access to a UI state object that several handles share.
//!
//! In the browser the state sits in a Leptos `RwSignal`, so writes re-render
//! whatever reads it. Off the browser an `Rc<RefCell<_>>` does the same job.
//! Both return `None` once the state is gone (a disposed signal), which lets
//! late timers no-op.

use std::{cell::RefCell, rc::Rc};

pub trait SharedState<T> {
    /// Reads the state, returning `None` if it no longer exists.
    fn with_state<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;

    /// Mutates the state, returning `None` if it no longer exists.
    fn update_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T> SharedState<T> for Rc<RefCell<T>> {
    fn with_state<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

#[cfg(target_arch = "wasm32")]
impl<T> SharedState<T> for leptos::prelude::RwSignal<T>
where
    T: Send + Sync + 'static,
{
    fn with_state<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        use leptos::prelude::With;
        self.try_with(f)
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        use leptos::prelude::Update;
        self.try_update(f)
    }
}
