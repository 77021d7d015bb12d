//! Drag-and-drop target with a hidden file input overlay.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use super::hooks::UploadHandle;
use crate::components::icons as ic;
use crate::config;

stylance::import_crate_style!(css, "src/components/upload/drop_zone.module.css");

/// Drop target. Clicking anywhere on it opens the file browser.
///
/// The `accept` filter only guides the browser dialog; dropped files of any
/// type are accepted.
#[component]
pub fn DropZone() -> impl IntoView {
    let handle = use_context::<UploadHandle>().expect("UploadHandle must be provided at root");
    let is_over = handle.is_drag_over();

    let on_drag_over = move |ev: ev::DragEvent| {
        ev.prevent_default();
        handle.drag_over();
    };
    let on_drag_leave = move |ev: ev::DragEvent| {
        ev.prevent_default();
        handle.drag_leave();
    };
    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        handle.drop_event(&ev);
    };
    let on_change = move |ev: ev::Event| handle.input_event(&ev);

    let zone_class = move || {
        if is_over.get() {
            format!("{} {}", css::zone, css::zoneActive)
        } else {
            css::zone.to_string()
        }
    };

    view! {
        <div
            class=zone_class
            on:dragenter=on_drag_over
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            <input
                type="file"
                class=css::input
                accept=config::accept_attribute()
                on:change=on_change
            />

            <div class=css::content>
                <div class=css::iconRing>
                    <Icon icon=ic::UPLOAD />
                </div>
                <p class=css::headline>
                    {move || {
                        if is_over.get() { "Drop your file here" } else { "Drag & drop your file here" }
                    }}
                </p>
                <p class=css::hint>"or click to browse"</p>
                <p class=css::supports>
                    {format!("Supports: {}", config::supported_types_label())}
                </p>
            </div>
        </div>
    }
}
