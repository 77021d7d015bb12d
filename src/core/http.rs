//! HTTP capability used by the upload widget.
//!
//! The widget never touches the browser's fetch API directly; it talks to an
//! [`HttpClient`] so tests can script responses. The browser implementation
//! lives in [`crate::utils::FetchClient`].

use std::sync::Arc;

use async_trait::async_trait;

use super::error::TransportError;
use crate::config::DEFAULT_CONTENT_TYPE;
use crate::models::SelectedFile;

/// One part of a `multipart/form-data` body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormPart {
    /// Form field name.
    pub name: String,
    /// File name reported to the server.
    pub filename: String,
    pub content_type: String,
    pub content: Arc<[u8]>,
}

/// A `multipart/form-data` body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MultipartForm {
    pub parts: Vec<FormPart>,
}

impl MultipartForm {
    /// Body carrying a single file under `field`.
    pub fn single_file(field: &str, file: &SelectedFile) -> Self {
        Self {
            parts: vec![FormPart {
                name: field.to_string(),
                filename: file.name.clone(),
                content_type: file
                    .content_type
                    .clone()
                    .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
                content: Arc::clone(&file.content),
            }],
        }
    }

    pub fn part(&self, name: &str) -> Option<&FormPart> {
        self.parts.iter().find(|p| p.name == name)
    }
}

/// Status and body of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something able to POST a multipart body.
///
/// Futures are not `Send`: everything runs on the browser's main thread.
#[async_trait(?Send)]
pub trait HttpClient {
    async fn post_multipart(
        &self,
        url: &str,
        form: MultipartForm,
    ) -> Result<HttpResponse, TransportError>;
}
