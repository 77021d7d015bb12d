//! Upload widget data types.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

/// A file chosen by the user, held in memory until it is uploaded or cleared.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// File name as reported by the browser (no path).
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// MIME type reported by the browser, if any.
    pub content_type: Option<String>,
    /// Raw file content.
    pub content: Arc<[u8]>,
}

impl SelectedFile {
    /// Build a file from its name and content; size is taken from the content.
    pub fn new(name: impl Into<String>, content: impl Into<Arc<[u8]>>) -> Self {
        let content = content.into();
        Self {
            name: name.into(),
            size: content.len() as u64,
            content_type: None,
            content,
        }
    }

    /// Attach a MIME type. Empty strings are treated as unknown.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        let content_type = content_type.into();
        self.content_type = (!content_type.is_empty()).then_some(content_type);
        self
    }
}

// Content is elided: files can be large.
impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("size", &self.size)
            .field("content_type", &self.content_type)
            .finish_non_exhaustive()
    }
}

/// Identifier of a shown notification, unique per widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(pub u64);

/// Notification severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient user-facing message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

/// Whether a drag gesture is hovering the drop target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    DragOver,
}

impl DragState {
    pub fn is_active(self) -> bool {
        self == DragState::DragOver
    }
}

/// What the server told us about a successful upload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct UploadReceipt {
    /// Public URL of the stored file.
    #[serde(default)]
    pub url: Option<String>,
    /// Free-form status message.
    #[serde(default)]
    pub message: Option<String>,
}

/// Success body shape returned by the router variant of the backend:
/// `{"success": true, "file": {"public_url": ...}}`.
#[derive(Deserialize)]
struct StoredFileBody {
    #[serde(default)]
    file: Option<StoredFile>,
}

#[derive(Deserialize)]
struct StoredFile {
    #[serde(default)]
    public_url: Option<String>,
}

impl UploadReceipt {
    /// Extract a receipt from a JSON success body.
    ///
    /// Prefers a top-level `url`, falling back to `file.public_url`.
    /// Unknown shapes yield an empty receipt.
    pub fn from_json(body: &serde_json::Value) -> Self {
        let mut receipt: UploadReceipt =
            serde_json::from_value(body.clone()).unwrap_or_default();

        if receipt.url.is_none() {
            receipt.url = serde_json::from_value::<StoredFileBody>(body.clone())
                .ok()
                .and_then(|b| b.file)
                .and_then(|f| f.public_url);
        }

        receipt
    }
}
