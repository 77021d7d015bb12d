//! Reactive bridge between the Leptos view and [`UploadWidget`].
//!
//! The widget's state lives in an `RwSignal`, so every transition made by
//! the widget (including timer-driven notification expiry) re-renders the
//! components reading it.

use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::core::{HttpClient, StateHandle, Timer, UploadConfig, UploadWidget, WidgetState};
use crate::models::Notification;
use crate::utils::{BrowserTimer, FetchClient, dom, format_file_size};

impl StateHandle for RwSignal<WidgetState> {
    fn update_state<R>(&self, f: impl FnOnce(&mut WidgetState) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn with_state<R>(&self, f: impl FnOnce(&WidgetState) -> R) -> Option<R> {
        self.try_with(f)
    }
}

/// Widget whose state is a Leptos signal.
pub type SignalWidget = UploadWidget<RwSignal<WidgetState>>;

/// Handle shared by the upload components through context.
///
/// # Note
///
/// This struct is `Copy`: the signal and the stored widget are arena
/// handles. The widget holds `Rc`s, so it is kept in local storage and only
/// touched from the main thread.
#[derive(Clone, Copy)]
pub struct UploadHandle {
    /// Widget state; read it with `.with(..)` to avoid cloning file content.
    pub state: RwSignal<WidgetState>,
    widget: StoredValue<SignalWidget, LocalStorage>,
}

impl UploadHandle {
    /// Create a handle with explicit capabilities.
    pub fn new(client: Rc<dyn HttpClient>, timer: Rc<dyn Timer>, config: UploadConfig) -> Self {
        let state = RwSignal::new(WidgetState::default());
        let widget = UploadWidget::new(state, client, timer, config);
        Self {
            state,
            widget: StoredValue::new_local(widget),
        }
    }

    /// Handle wired to `fetch` and `setTimeout` with the default config.
    pub fn browser() -> Self {
        Self::new(
            Rc::new(FetchClient::new()),
            Rc::new(BrowserTimer),
            UploadConfig::default(),
        )
    }

    fn with_widget(&self, f: impl FnOnce(&SignalWidget)) {
        let _ = self.widget.try_with_value(f);
    }

    // ------------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------------

    pub fn drag_over(&self) {
        self.with_widget(|w| w.drag_over());
    }

    pub fn drag_leave(&self) {
        self.with_widget(|w| w.drag_leave());
    }

    /// Handle a drop event: the hover state resets immediately, the first
    /// dropped file is selected once it has been read.
    pub fn drop_event(&self, ev: &web_sys::DragEvent) {
        self.drag_leave();
        if let Some(file) = dom::dropped_file(ev) {
            self.load_file(file);
        }
    }

    /// Handle a file input change event.
    pub fn input_event(&self, ev: &web_sys::Event) {
        if let Some(file) = dom::input_file(ev) {
            self.load_file(file);
        }
    }

    /// Read `file` in the background. A read that finishes after the user
    /// has chosen another file is discarded.
    fn load_file(&self, file: web_sys::File) {
        let Some(widget) = self.widget.try_get_value() else {
            return;
        };
        let ticket = widget.begin_load();
        spawn_local(async move {
            match dom::read_file(file).await {
                Ok(selected) => {
                    widget.finish_load(ticket, selected);
                }
                Err(e) => tracing::warn!(error = %e, "failed to read file"),
            }
        });
    }

    pub fn clear(&self) {
        self.with_widget(|w| w.clear_selection());
    }

    pub fn dismiss(&self) {
        self.with_widget(|w| w.dismiss_notification());
    }

    /// Start an upload. The outcome is reported through the notification.
    pub fn submit(&self) {
        let Some(widget) = self.widget.try_get_value() else {
            return;
        };
        spawn_local(async move {
            let _ = widget.submit_upload().await;
        });
    }

    // ------------------------------------------------------------------------
    // Derived signals
    // ------------------------------------------------------------------------

    pub fn is_drag_over(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.drag.is_active()))
    }

    pub fn is_uploading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_uploading()))
    }

    pub fn notification(&self) -> Signal<Option<Notification>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.notification.clone()))
    }

    /// Name and formatted size of the selected file.
    pub fn selected_summary(&self) -> Signal<Option<(String, String)>> {
        let state = self.state;
        Signal::derive(move || {
            state.with(|s| {
                s.selected
                    .as_ref()
                    .map(|f| (f.name.clone(), format_file_size(f.size)))
            })
        })
    }
}
