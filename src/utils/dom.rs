//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser files with proper error handling.

use js_sys::Uint8Array;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{DragEvent, Event, File, FileList, HtmlInputElement};

use crate::core::FileReadError;
use crate::models::SelectedFile;

/// First file of a `FileList`, if any.
#[inline]
pub fn first_file(files: Option<FileList>) -> Option<File> {
    files?.get(0)
}

/// First file dropped by a drag gesture.
pub fn dropped_file(ev: &DragEvent) -> Option<File> {
    first_file(ev.data_transfer()?.files())
}

/// First file chosen in an `<input type="file">` change event.
pub fn input_file(ev: &Event) -> Option<File> {
    let input = ev.target()?.dyn_into::<HtmlInputElement>().ok()?;
    first_file(input.files())
}

/// Read a browser file fully into memory.
pub async fn read_file(file: File) -> Result<SelectedFile, FileReadError> {
    let name = file.name();
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| FileReadError {
            name: name.clone(),
            reason: e.as_string().unwrap_or_else(|| format!("{:?}", e)),
        })?;

    let content = Uint8Array::new(&buffer).to_vec();
    Ok(SelectedFile::new(name, content).with_content_type(file.type_()))
}
