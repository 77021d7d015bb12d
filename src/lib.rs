//! Browser front end for the AI-RAG document ingestion service.
//!
//! - [`app`] - Root component and service wiring
//! - [`components`] - Leptos UI (upload card, drop zone, toast)
//! - [`core`] - Upload widget logic, independent of the browser
//! - [`models`] - Data types shared by core and UI
//! - [`utils`] - Browser capabilities (fetch, timers, files, logging)

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use app::App;
