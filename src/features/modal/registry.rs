use super::MODAL_CLASS;
use std::collections::BTreeSet;

/// `overflow` value for the page body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyOverflow {
    /// Scrolling locked behind an open modal.
    Hidden,
    Auto,
}

impl BodyOverflow {
    pub fn as_str(self) -> &'static str {
        match self {
            BodyOverflow::Hidden => "hidden",
            BodyOverflow::Auto => "auto",
        }
    }
}

/// Ids of the modals currently open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalRegistry {
    open: BTreeSet<String>,
}

impl ModalRegistry {
    /// Marks the modal open. Returns `false` if it already was.
    pub fn open(&mut self, id: &str) -> bool {
        self.open.insert(id.to_string())
    }

    /// Marks the modal closed. Returns `false` if it was not open.
    pub fn close(&mut self, id: &str) -> bool {
        self.open.remove(id)
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    pub fn is_scroll_locked(&self) -> bool {
        !self.open.is_empty()
    }

    pub fn body_overflow(&self) -> BodyOverflow {
        if self.is_scroll_locked() {
            BodyOverflow::Hidden
        } else {
            BodyOverflow::Auto
        }
    }
}

/// Decides whether a click closes a modal.
///
/// Only a click whose target is the backdrop itself counts: the element must
/// carry the [`MODAL_CLASS`] marker and a non-empty id. Clicks on content
/// inside the dialog land on descendants without the marker and are ignored.
pub fn backdrop_target<'a>(class_name: &str, id: &'a str) -> Option<&'a str> {
    let is_backdrop = class_name
        .split_ascii_whitespace()
        .any(|class| class == MODAL_CLASS);
    let id = id.trim();
    (is_backdrop && !id.is_empty()).then_some(id)
}
