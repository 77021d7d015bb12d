//! Browser glue and display helpers.
//!
//! Provides:
//! - [`FetchClient`] - [`crate::core::HttpClient`] over the Fetch API
//! - [`BrowserTimer`] - [`crate::core::Timer`] over `setTimeout`
//! - [`format_file_size`] - Human-readable byte counts
//! - [`dom`] - Reading dropped/browsed files
//! - [`logging`] - `tracing` to the browser console

pub mod dom;
mod fetch;
mod format;
pub mod logging;
mod timer;

pub use fetch::{FetchClient, to_form_data};
pub use format::format_file_size;
pub use timer::BrowserTimer;
