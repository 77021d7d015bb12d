//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`SelectedFile`] - The file held by the upload widget
//! - [`Notification`], [`NotificationKind`], [`NotificationId`] - Transient toasts
//! - [`DragState`] - Drop target hover state
//! - [`UploadReceipt`] - Parsed success response

mod upload;

pub use upload::{
    DragState, Notification, NotificationId, NotificationKind, SelectedFile, UploadReceipt,
};
