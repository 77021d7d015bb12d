//! Custom error types for the application.
//!
//! - [`UploadError`] - Why a submission did not succeed; `Display` is the
//!   exact text shown to the user
//! - [`TransportError`] - The request never produced a readable response
//! - [`FileReadError`] - Reading a browser `File` into memory failed

use thiserror::Error;

use crate::config::messages;

/// Network-level failures of the upload request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Building the multipart body failed.
    #[error("failed to build form data: {0}")]
    FormData(String),
    /// The request could not be sent (unreachable host, CORS, ...).
    #[error("request failed: {0}")]
    Request(String),
    /// The response body could not be read.
    #[error("failed to read response: {0}")]
    ResponseRead(String),
}

/// Outcome of a failed submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("{}", messages::NO_FILE_SELECTED)]
    NoFileSelected,
    /// Rejected locally because another upload is pending.
    #[error("{}", messages::UPLOAD_IN_PROGRESS)]
    AlreadyInFlight,
    /// The server answered with a non-success status.
    #[error("Upload failed: {detail}")]
    Rejected { status: u16, detail: String },
    #[error("{}", messages::UPLOAD_ERRORED)]
    Transport(#[source] TransportError),
    /// The response body was not JSON.
    #[error("{}", messages::UPLOAD_ERRORED)]
    MalformedResponse(String),
}

/// Failure to load a dropped or browsed file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not read {name}: {reason}")]
pub struct FileReadError {
    pub name: String,
    pub reason: String,
}
