//! Root application module.
//!
//! Contains the main App component and application-level setup: the
//! upload widget is created here with its browser capabilities and
//! provided to the component tree as context.

use leptos::prelude::*;

use crate::components::upload::{FileUpload, UploadHandle};
use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/app.module.css");

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the [`UploadHandle`] (fetch client, browser timer)
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the upload card
#[component]
pub fn App() -> impl IntoView {
    provide_context(UploadHandle::browser());

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::fallback>
                    <h1 class=css::fallbackTitle>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul class=css::fallbackList>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        class=css::reload
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <main class=css::app>
                <h1 class=css::brand>{APP_NAME}</h1>
                <FileUpload />
            </main>
        </ErrorBoundary>
    }
}
