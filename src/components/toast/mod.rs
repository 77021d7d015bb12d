//! Toast notification component.
//!
//! Renders the widget's current notification, if any, with a close button.
//! Expiry is handled by the widget; this component only displays.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::{Notification, NotificationKind};

stylance::import_crate_style!(css, "src/components/toast/toast.module.css");

#[component]
pub fn Toast(
    #[prop(into)] notification: Signal<Option<Notification>>,
    on_close: Callback<()>,
) -> impl IntoView {
    move || {
        notification.get().map(|n| {
            let (variant, icon) = match n.kind {
                NotificationKind::Success => (css::success, ic::SUCCESS),
                NotificationKind::Error => (css::error, ic::ERROR),
            };

            view! {
                <div class=format!("{} {}", css::toast, variant) role="status">
                    <span class=css::icon><Icon icon=icon /></span>
                    <span class=css::message>{n.message}</span>
                    <button
                        class=css::close
                        title="Dismiss"
                        on:click=move |_| on_close.run(())
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </div>
            }
        })
    }
}
