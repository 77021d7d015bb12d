//! Browser HTTP client.
//!
//! Implements [`HttpClient`] on top of the Fetch API through `gloo-net`,
//! turning a [`MultipartForm`] into a `FormData` body.

use async_trait::async_trait;
use gloo_net::http::Request;
use js_sys::{Array, Uint8Array};
use web_sys::{Blob, BlobPropertyBag, FormData};

use crate::core::{FormPart, HttpClient, HttpResponse, MultipartForm, TransportError};

/// [`HttpClient`] backed by `window.fetch`.
///
/// No timeout and no retry: a request runs until the browser gives up.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchClient;

impl FetchClient {
    pub fn new() -> Self {
        Self
    }
}

/// Build a `FormData` with one named file entry per part.
pub fn to_form_data(form: &MultipartForm) -> Result<FormData, TransportError> {
    let data = FormData::new().map_err(|e| TransportError::FormData(format!("{:?}", e)))?;

    for part in &form.parts {
        let blob = part_to_blob(part)?;
        data.append_with_blob_and_filename(&part.name, &blob, &part.filename)
            .map_err(|e| TransportError::FormData(format!("{:?}", e)))?;
    }

    Ok(data)
}

fn part_to_blob(part: &FormPart) -> Result<Blob, TransportError> {
    let bytes = Uint8Array::from(&part.content[..]);
    let chunks = Array::of1(&bytes);

    let options = BlobPropertyBag::new();
    options.set_type(&part.content_type);

    Blob::new_with_u8_array_sequence_and_options(&chunks, &options)
        .map_err(|e| TransportError::FormData(format!("{:?}", e)))
}

#[async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn post_multipart(
        &self,
        url: &str,
        form: MultipartForm,
    ) -> Result<HttpResponse, TransportError> {
        let body = to_form_data(&form)?;

        // The browser sets the multipart Content-Type and boundary itself.
        let response = Request::post(url)
            .body(body)
            .map_err(|e| TransportError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::ResponseRead(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
