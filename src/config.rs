//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Nothing here is read from the environment or persisted; runtime overrides
//! go through [`crate::core::UploadConfig`].

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the header.
pub const APP_NAME: &str = "AI-RAG";

/// Tagline displayed under the upload card title.
pub const APP_TAGLINE: &str = "Select files to train your AI model";

// =============================================================================
// Network Configuration
// =============================================================================

/// Ingestion endpoint receiving the multipart upload.
pub const UPLOAD_ENDPOINT: &str = "http://127.0.0.1:8000/api/files/upload";

/// Multipart field name carrying the file.
pub const UPLOAD_FIELD: &str = "file";

/// Part content type used when the browser reports none.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

// =============================================================================
// Upload Widget Configuration
// =============================================================================

/// How long a notification stays visible, in milliseconds.
pub const NOTIFICATION_TTL_MS: u64 = 3000;

/// Extensions suggested by the file picker.
///
/// Advisory only: files with other extensions are still accepted.
pub const ACCEPTED_EXTENSIONS: &[&str] = &[".pdf", ".doc", ".docx", ".txt", ".csv", ".json"];

/// Value for the file input's `accept` attribute.
pub fn accept_attribute() -> String {
    ACCEPTED_EXTENSIONS.join(",")
}

/// Human-readable list of supported types (e.g. "PDF, DOC, TXT").
pub fn supported_types_label() -> String {
    ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| ext.trim_start_matches('.').to_ascii_uppercase())
        .collect::<Vec<_>>()
        .join(", ")
}

/// User-facing notification texts.
pub mod messages {
    pub const FILE_READY: &str = "File ready to upload";
    pub const UPLOAD_SUCCEEDED: &str = "File uploaded successfully!";
    pub const NO_FILE_SELECTED: &str = "Please select a file first";
    pub const UPLOAD_ERRORED: &str = "An error occurred while uploading";
    pub const UPLOAD_IN_PROGRESS: &str = "An upload is already in progress";
    /// Shown in place of a missing server `detail` field.
    pub const UNKNOWN_DETAIL: &str = "unknown error";
}

// =============================================================================
// Logging
// =============================================================================

/// Most verbose level forwarded to the browser console.
pub const LOG_LEVEL: tracing::Level = tracing::Level::DEBUG;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default)
/// - `Bootstrap` - Familiar, slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    Bootstrap,
    #[default]
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_attribute() {
        assert_eq!(accept_attribute(), ".pdf,.doc,.docx,.txt,.csv,.json");
    }

    #[test]
    fn test_supported_types_label() {
        assert_eq!(supported_types_label(), "PDF, DOC, DOCX, TXT, CSV, JSON");
    }
}
