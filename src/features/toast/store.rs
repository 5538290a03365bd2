use std::{fmt, time::Duration};

/// Identifies a toast within its store. Ids are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl fmt::Display for ToastId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "toast-{}", self.0)
    }
}

/// Visual category of a toast; also its CSS modifier class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    /// Slide-out animation is playing; removal follows.
    Exiting,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
    pub duration: Duration,
    pub phase: ToastPhase,
}

impl Toast {
    /// Class list for the toast element, e.g. `toast success exiting`.
    pub fn class_name(&self) -> String {
        match self.phase {
            ToastPhase::Visible => format!("toast {}", self.severity),
            ToastPhase::Exiting => format!("toast {} exiting", self.severity),
        }
    }
}

/// Toasts currently in the container, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastStore {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastStore {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|toast| toast.id == id)
    }

    pub fn contains(&self, id: ToastId) -> bool {
        self.get(id).is_some()
    }

    /// Appends a visible toast and returns its id.
    pub fn push(&mut self, message: String, severity: Severity, duration: Duration) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        self.toasts.push(Toast {
            id,
            message,
            severity,
            duration,
            phase: ToastPhase::Visible,
        });
        id
    }

    /// Starts the exit animation. Returns `false` if the toast is gone or
    /// already exiting.
    pub fn begin_exit(&mut self, id: ToastId) -> bool {
        match self.toasts.iter_mut().find(|toast| toast.id == id) {
            Some(toast) if toast.phase == ToastPhase::Visible => {
                toast.phase = ToastPhase::Exiting;
                true
            }
            _ => false,
        }
    }

    /// Removes the toast if still present.
    pub fn remove(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }
}
