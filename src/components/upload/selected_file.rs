//! Card describing the selected file, with a remove button.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::hooks::UploadHandle;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/upload/selected_file.module.css");

#[component]
pub fn SelectedFileCard() -> impl IntoView {
    let handle = use_context::<UploadHandle>().expect("UploadHandle must be provided at root");
    let summary = handle.selected_summary();

    move || {
        summary.get().map(|(name, size)| {
            view! {
                <div class=css::card>
                    <div class=css::icon>
                        <Icon icon=ic::FILE />
                    </div>
                    <div class=css::info>
                        <p class=css::name>{name}</p>
                        <p class=css::size>{size}</p>
                    </div>
                    <button
                        class=css::remove
                        title="Remove file"
                        on:click=move |_| handle.clear()
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </div>
            }
        })
    }
}
