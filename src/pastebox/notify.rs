//! User-facing notifications emitted by the store.
//!
//! The store never talks to a terminal (or any other UI) directly. It reports
//! the outcome of each mutation through the [`Notifier`] port, injected at
//! construction time, so the core stays testable without a UI. The CLI's
//! notifier prints colored one-liners; tests use [`RecordingNotifier`].

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Success,
    Error,
}

/// A transient success/failure message shown to the user after a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotifyLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotifyLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotifyLevel::Error,
            message: message.into(),
        }
    }
}

/// Outlet for notifications. Implementations decide how messages reach the
/// user (terminal, test buffer, nothing at all).
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Discards every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&mut self, _notification: Notification) {}
}

/// Buffers notifications for later inspection.
///
/// Clones share the same buffer, so a test can keep a handle while the store
/// owns the other. Single-threaded by design, like the store itself.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    sink: Rc<RefCell<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.sink.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notification: Notification) {
        self.sink.borrow_mut().push(notification);
    }
}
