//! File upload UI components.
//!
//! Components:
//! - [`FileUpload`] - Upload card (drop zone, selected file, submit button, toast)
//! - [`DropZone`] - Drag-and-drop target / file browser
//! - [`SelectedFileCard`] - Name and size of the selected file
//!
//! All of them talk to the widget through the [`UploadHandle`] context.

mod drop_zone;
mod hooks;
mod selected_file;

use leptos::prelude::*;
use leptos_icons::Icon;

pub use drop_zone::DropZone;
pub use hooks::{SignalWidget, UploadHandle};
pub use selected_file::SelectedFileCard;

use crate::components::icons as ic;
use crate::components::toast::Toast;
use crate::config::APP_TAGLINE;

stylance::import_crate_style!(css, "src/components/upload/upload.module.css");

/// The upload card.
///
/// The submit button stays enabled during an upload: repeated clicks start
/// independent requests unless the widget is configured as single-flight.
#[component]
pub fn FileUpload() -> impl IntoView {
    let handle = use_context::<UploadHandle>().expect("UploadHandle must be provided at root");

    let uploading = handle.is_uploading();
    let on_close = Callback::new(move |_: ()| handle.dismiss());

    view! {
        <section class=css::card>
            <Toast notification=handle.notification() on_close=on_close />

            <header class=css::header>
                <h2 class=css::title>
                    <Icon icon=ic::CLOUD_UPLOAD />
                    <span>"Upload Files for Training"</span>
                </h2>
                <p class=css::subtitle>{APP_TAGLINE}</p>
            </header>

            <div class=css::body>
                <DropZone />
                <SelectedFileCard />

                <button class=css::submit on:click=move |_| handle.submit()>
                    <Icon icon=ic::CLOUD_UPLOAD />
                    <span>
                        {move || if uploading.get() { "Uploading…" } else { "Upload File" }}
                    </span>
                </button>
            </div>
        </section>
    }
}
