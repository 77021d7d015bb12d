//! Core logic of the upload widget, independent of the browser.
//!
//! This module provides:
//! - [`UploadWidget`] and [`UploadConfig`] - the widget's operations
//! - [`WidgetState`] and the [`StateHandle`] seam
//! - [`HttpClient`] and [`Timer`] - injected capabilities

pub mod error;
mod http;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
mod state;
mod timer;
mod upload;

pub use error::{FileReadError, TransportError, UploadError};
pub use http::{FormPart, HttpClient, HttpResponse, MultipartForm};
pub use state::{StateHandle, WidgetState};
pub use timer::{Task, Timer};
pub use upload::{LoadTicket, UploadConfig, UploadWidget, interpret_response};
