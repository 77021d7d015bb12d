//! UI components built with Leptos.
//!
//! - [`upload`] - File upload card and its parts
//! - [`toast`] - Transient notification display
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod toast;
pub mod upload;

pub use upload::FileUpload;
