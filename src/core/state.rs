//! Upload widget state and its transitions.
//!
//! [`WidgetState`] is plain data mutated only through the methods below.
//! Where it lives is abstracted by [`StateHandle`]: a `Rc<RefCell<_>>` for
//! native code and tests, a Leptos `RwSignal` in the view layer.

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{DragState, Notification, NotificationId, NotificationKind, SelectedFile};

/// Everything the upload widget remembers while mounted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WidgetState {
    /// The file waiting to be uploaded.
    pub selected: Option<SelectedFile>,
    /// Drop target hover state.
    pub drag: DragState,
    /// Currently visible notification.
    pub notification: Option<Notification>,
    /// Number of upload requests awaiting a response.
    pub uploads_in_flight: usize,
    last_notification_id: u64,
}

impl WidgetState {
    /// Replace the selection with `file`.
    pub fn select(&mut self, file: SelectedFile) {
        self.selected = Some(file);
    }

    /// Drop the current selection, returning it.
    pub fn clear_selection(&mut self) -> Option<SelectedFile> {
        self.selected.take()
    }

    pub fn set_drag(&mut self, drag: DragState) {
        self.drag = drag;
    }

    /// Show a notification, replacing any visible one.
    pub fn show_notification(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> NotificationId {
        self.last_notification_id += 1;
        let id = NotificationId(self.last_notification_id);
        self.notification = Some(Notification {
            id,
            message: message.into(),
            kind,
        });
        id
    }

    /// Hide the notification `id` if it is still the visible one.
    ///
    /// Returns `true` if something was hidden.
    pub fn expire_notification(&mut self, id: NotificationId) -> bool {
        if self.notification.as_ref().is_some_and(|n| n.id == id) {
            self.notification = None;
            true
        } else {
            false
        }
    }

    /// Hide whatever notification is visible.
    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    pub fn begin_upload(&mut self) {
        self.uploads_in_flight += 1;
    }

    pub fn finish_upload(&mut self) {
        self.uploads_in_flight = self.uploads_in_flight.saturating_sub(1);
    }

    pub fn is_uploading(&self) -> bool {
        self.uploads_in_flight > 0
    }
}

/// Shared access to a [`WidgetState`].
///
/// Both methods return `None` when the underlying storage is gone (e.g. a
/// disposed signal after the widget unmounted).
pub trait StateHandle: Clone + 'static {
    fn update_state<R>(&self, f: impl FnOnce(&mut WidgetState) -> R) -> Option<R>;

    fn with_state<R>(&self, f: impl FnOnce(&WidgetState) -> R) -> Option<R>;
}

impl StateHandle for Rc<RefCell<WidgetState>> {
    fn update_state<R>(&self, f: impl FnOnce(&mut WidgetState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn with_state<R>(&self, f: impl FnOnce(&WidgetState) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}
