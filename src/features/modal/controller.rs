use super::{BodyOverflow, ModalRegistry};
use crate::app_lib::SharedState;
use tracing::debug;

/// Opens and closes modals against a shared [`ModalRegistry`].
#[derive(Clone, Copy, Debug)]
pub struct ModalController<C> {
    registry: C,
}

impl<C> ModalController<C>
where
    C: SharedState<ModalRegistry>,
{
    pub fn new(registry: C) -> Self {
        Self { registry }
    }

    pub fn open(&self, id: &str) {
        if self.registry.update_state(|registry| registry.open(id)) == Some(true) {
            debug!(modal = id, "modal opened");
        }
    }

    pub fn close(&self, id: &str) {
        if self.registry.update_state(|registry| registry.close(id)) == Some(true) {
            debug!(modal = id, "modal closed");
        }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.registry
            .with_state(|registry| registry.is_open(id))
            .unwrap_or(false)
    }

    pub fn body_overflow(&self) -> BodyOverflow {
        self.registry
            .with_state(ModalRegistry::body_overflow)
            .unwrap_or(BodyOverflow::Auto)
    }
}
