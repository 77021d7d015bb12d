//! The file upload widget.
//!
//! [`UploadWidget`] implements every user-visible operation of the uploader
//! (select, clear, drag, drop, submit, dismiss) over three injected
//! capabilities:
//!
//! - a [`StateHandle`] holding the [`WidgetState`]
//! - an [`HttpClient`] performing the multipart POST
//! - a [`Timer`] expiring notifications
//!
//! The widget itself is cheap to clone; clones share all three.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use super::error::UploadError;
use super::http::{HttpClient, HttpResponse, MultipartForm};
use super::state::{StateHandle, WidgetState};
use super::timer::Timer;
use crate::config::{NOTIFICATION_TTL_MS, UPLOAD_ENDPOINT, UPLOAD_FIELD, messages};
use crate::models::{DragState, NotificationKind, SelectedFile, UploadReceipt};

/// Runtime settings of an [`UploadWidget`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadConfig {
    /// URL receiving the multipart POST.
    pub endpoint: String,
    /// How long each notification stays visible.
    pub notification_ttl: Duration,
    /// Reject a submission while another is still pending.
    pub single_flight: bool,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: UPLOAD_ENDPOINT.to_string(),
            notification_ttl: Duration::from_millis(NOTIFICATION_TTL_MS),
            single_flight: false,
        }
    }
}

/// A file read started by [`UploadWidget::begin_load`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Single-file uploader with transient notifications.
pub struct UploadWidget<S: StateHandle> {
    state: S,
    client: Rc<dyn HttpClient>,
    timer: Rc<dyn Timer>,
    config: UploadConfig,
    /// Generation of the most recent selection, shared by clones.
    loads: Rc<Cell<u64>>,
}

impl<S: StateHandle> Clone for UploadWidget<S> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            client: Rc::clone(&self.client),
            timer: Rc::clone(&self.timer),
            config: self.config.clone(),
            loads: Rc::clone(&self.loads),
        }
    }
}

impl<S: StateHandle> UploadWidget<S> {
    pub fn new(
        state: S,
        client: Rc<dyn HttpClient>,
        timer: Rc<dyn Timer>,
        config: UploadConfig,
    ) -> Self {
        Self {
            state,
            client,
            timer,
            config,
            loads: Rc::default(),
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    // ------------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------------

    /// Make `file` the selected file, replacing any previous one.
    ///
    /// The accepted-extension list is only a picker hint; nothing is
    /// validated here.
    pub fn select_file(&self, file: SelectedFile) {
        self.next_load();
        self.apply_selection(file);
    }

    /// Note that the user chose a file whose content is still being read.
    ///
    /// Loads still in progress become stale: only the most recent choice
    /// can complete into a selection.
    pub fn begin_load(&self) -> LoadTicket {
        LoadTicket(self.next_load())
    }

    /// Select a file once its read has finished, unless the user has chosen
    /// another file since. Returns whether the file was selected.
    ///
    /// The drag state is left alone: a drop has already reset it.
    pub fn finish_load(&self, ticket: LoadTicket, file: SelectedFile) -> bool {
        if ticket.0 != self.loads.get() {
            tracing::debug!(name = %file.name, "discarding stale file read");
            return false;
        }
        self.apply_selection(file);
        true
    }

    fn next_load(&self) -> u64 {
        let next = self.loads.get().wrapping_add(1);
        self.loads.set(next);
        next
    }

    fn apply_selection(&self, file: SelectedFile) {
        tracing::debug!(name = %file.name, size = file.size, "file selected");
        self.state.update_state(|s| s.select(file));
        self.notify(messages::FILE_READY, NotificationKind::Success);
    }

    pub fn clear_selection(&self) {
        if let Some(Some(file)) = self.state.update_state(WidgetState::clear_selection) {
            tracing::debug!(name = %file.name, "selection cleared");
        }
    }

    // ------------------------------------------------------------------------
    // Drag and drop
    // ------------------------------------------------------------------------

    pub fn drag_over(&self) {
        self.state.update_state(|s| s.set_drag(DragState::DragOver));
    }

    pub fn drag_leave(&self) {
        self.state.update_state(|s| s.set_drag(DragState::Idle));
    }

    /// Handle a drop: reset the hover state and select the first file.
    ///
    /// Any further files are ignored. An empty drop only resets the hover
    /// state.
    pub fn drop_files(&self, files: impl IntoIterator<Item = SelectedFile>) {
        self.drag_leave();
        if let Some(file) = files.into_iter().next() {
            self.select_file(file);
        }
    }

    // ------------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------------

    /// Hide the visible notification before its timer fires.
    pub fn dismiss_notification(&self) {
        self.state.update_state(WidgetState::dismiss_notification);
    }

    fn notify(&self, message: impl Into<String>, kind: NotificationKind) {
        let Some(id) = self
            .state
            .update_state(|s| s.show_notification(message, kind))
        else {
            return;
        };

        let state = self.state.clone();
        self.timer.schedule(
            self.config.notification_ttl,
            Box::new(move || {
                state.update_state(|s| s.expire_notification(id));
            }),
        );
    }

    // ------------------------------------------------------------------------
    // Upload
    // ------------------------------------------------------------------------

    /// Upload the selected file.
    ///
    /// Every outcome is also reported through a notification. The selection
    /// is kept whether the upload succeeds or fails.
    pub async fn submit_upload(&self) -> Result<UploadReceipt, UploadError> {
        let result = self.try_upload().await;

        match &result {
            Ok(receipt) => {
                tracing::info!(url = ?receipt.url, "uploaded file");
                self.notify(messages::UPLOAD_SUCCEEDED, NotificationKind::Success);
            }
            Err(err) => {
                match err {
                    UploadError::Transport(source) => {
                        tracing::error!(error = %source, "upload request failed")
                    }
                    UploadError::MalformedResponse(reason) => {
                        tracing::error!(%reason, "upload response was not JSON")
                    }
                    UploadError::Rejected { status, detail } => {
                        tracing::warn!(status, %detail, "upload rejected")
                    }
                    UploadError::NoFileSelected | UploadError::AlreadyInFlight => {
                        tracing::debug!(error = %err, "upload not attempted")
                    }
                }
                self.notify(err.to_string(), NotificationKind::Error);
            }
        }

        result
    }

    async fn try_upload(&self) -> Result<UploadReceipt, UploadError> {
        let (file, busy) = self
            .state
            .with_state(|s| (s.selected.clone(), s.is_uploading()))
            .unwrap_or((None, false));

        let file = file.ok_or(UploadError::NoFileSelected)?;
        if self.config.single_flight && busy {
            return Err(UploadError::AlreadyInFlight);
        }

        let form = MultipartForm::single_file(UPLOAD_FIELD, &file);
        tracing::debug!(name = %file.name, endpoint = %self.config.endpoint, "uploading");

        let in_flight = InFlight::begin(&self.state);
        let response = self.client.post_multipart(&self.config.endpoint, form).await;
        drop(in_flight);

        interpret_response(&response.map_err(UploadError::Transport)?)
    }
}

/// Counts one upload as in flight until dropped, including when the
/// submitting future is cancelled mid-request.
struct InFlight<S: StateHandle>(S);

impl<S: StateHandle> InFlight<S> {
    fn begin(state: &S) -> Self {
        state.update_state(WidgetState::begin_upload);
        Self(state.clone())
    }
}

impl<S: StateHandle> Drop for InFlight<S> {
    fn drop(&mut self) {
        self.0.update_state(WidgetState::finish_upload);
    }
}

/// Turn a server response into a receipt or an error.
///
/// The body must be JSON whatever the status. Error statuses surface the
/// server's `detail` field as opaque text.
pub fn interpret_response(response: &HttpResponse) -> Result<UploadReceipt, UploadError> {
    let body: serde_json::Value = serde_json::from_str(&response.body)
        .map_err(|e| UploadError::MalformedResponse(e.to_string()))?;

    if response.is_success() {
        Ok(UploadReceipt::from_json(&body))
    } else {
        Err(UploadError::Rejected {
            status: response.status,
            detail: error_detail(&body),
        })
    }
}

fn error_detail(body: &serde_json::Value) -> String {
    match body.get("detail") {
        Some(serde_json::Value::String(detail)) => detail.clone(),
        Some(serde_json::Value::Null) | None => messages::UNKNOWN_DETAIL.to_string(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::TransportError;
    use crate::core::mock::{ManualTimer, MockHttpClient};
    use std::cell::RefCell;

    type Handle = Rc<RefCell<WidgetState>>;

    struct Harness {
        widget: UploadWidget<Handle>,
        state: Handle,
        client: MockHttpClient,
        timer: ManualTimer,
    }

    fn harness(config: UploadConfig) -> Harness {
        let state: Handle = Rc::default();
        let client = MockHttpClient::new();
        let timer = ManualTimer::new();
        let widget = UploadWidget::new(
            Rc::clone(&state),
            Rc::new(client.clone()),
            Rc::new(timer.clone()),
            config,
        );
        Harness {
            widget,
            state,
            client,
            timer,
        }
    }

    fn file(name: &str, content: &[u8]) -> SelectedFile {
        SelectedFile::new(name, content.to_vec())
    }

    fn message(state: &Handle) -> Option<String> {
        state.borrow().notification.as_ref().map(|n| n.message.clone())
    }

    #[test]
    fn test_select_file_notifies() {
        let h = harness(UploadConfig::default());
        h.widget.select_file(file("a.txt", b"abc"));

        let state = h.state.borrow();
        assert_eq!(state.selected.as_ref().map(|f| f.name.as_str()), Some("a.txt"));
        let notification = state.notification.as_ref().unwrap();
        assert_eq!(notification.message, "File ready to upload");
        assert_eq!(notification.kind, NotificationKind::Success);
    }

    #[test]
    fn test_select_accepts_any_extension() {
        let h = harness(UploadConfig::default());
        h.widget.select_file(file("photo.exe", b"MZ"));
        assert!(h.state.borrow().selected.is_some());
    }

    #[test]
    fn test_clear_selection_has_no_side_effects() {
        let h = harness(UploadConfig::default());
        h.widget.select_file(file("a.txt", b"abc"));
        h.widget.dismiss_notification();

        h.widget.clear_selection();
        assert!(h.state.borrow().selected.is_none());
        assert!(h.state.borrow().notification.is_none());
        assert_eq!(h.client.request_count(), 0);
    }

    #[test]
    fn test_drop_selects_first_only() {
        let h = harness(UploadConfig::default());
        h.widget.drag_over();
        h.widget
            .drop_files(vec![file("first.pdf", b"1"), file("second.pdf", b"22")]);

        let state = h.state.borrow();
        assert_eq!(state.drag, DragState::Idle);
        assert_eq!(state.selected.as_ref().unwrap().name, "first.pdf");
    }

    #[test]
    fn test_empty_drop_only_resets_drag() {
        let h = harness(UploadConfig::default());
        h.widget.drag_over();
        h.widget.drop_files(Vec::new());

        let state = h.state.borrow();
        assert_eq!(state.drag, DragState::Idle);
        assert!(state.selected.is_none());
        assert!(state.notification.is_none());
    }

    #[test]
    fn test_stale_load_is_discarded() {
        let h = harness(UploadConfig::default());
        let large = h.widget.begin_load();
        let small = h.widget.begin_load();

        // The later choice finishes reading first.
        assert!(h.widget.finish_load(small, file("notes.txt", b"hi")));
        assert!(!h.widget.finish_load(large, file("book.pdf", b"%PDF")));

        let state = h.state.borrow();
        assert_eq!(state.selected.as_ref().unwrap().name, "notes.txt");
    }

    #[test]
    fn test_finished_load_keeps_new_hover() {
        let h = harness(UploadConfig::default());
        h.widget.drag_over();
        h.widget.drag_leave();
        let ticket = h.widget.begin_load();

        h.widget.drag_over();
        assert!(h.widget.finish_load(ticket, file("a.txt", b"abc")));

        let state = h.state.borrow();
        assert_eq!(state.drag, DragState::DragOver);
        assert!(state.selected.is_some());
        assert_eq!(message(&h.state).as_deref(), Some("File ready to upload"));
    }

    #[test]
    fn test_direct_selection_supersedes_pending_load() {
        let h = harness(UploadConfig::default());
        let pending = h.widget.begin_load();
        h.widget.select_file(file("chosen.txt", b"abc"));

        assert!(!h.widget.finish_load(pending, file("late.txt", b"abc")));
        assert_eq!(h.state.borrow().selected.as_ref().unwrap().name, "chosen.txt");
    }

    #[test]
    fn test_drag_leave_always_resets() {
        let h = harness(UploadConfig::default());
        h.widget.drag_leave();
        assert_eq!(h.state.borrow().drag, DragState::Idle);

        h.widget.drag_over();
        h.widget.drag_over();
        assert_eq!(h.state.borrow().drag, DragState::DragOver);
        h.widget.drag_leave();
        assert_eq!(h.state.borrow().drag, DragState::Idle);
    }

    #[test]
    fn test_notification_expires_after_ttl() {
        let h = harness(UploadConfig::default());
        h.widget.select_file(file("a.txt", b"abc"));

        h.timer.advance(Duration::from_millis(2999));
        assert!(message(&h.state).is_some());

        h.timer.advance(Duration::from_millis(1));
        assert!(message(&h.state).is_none());
    }

    #[test]
    fn test_replacement_keeps_full_lifetime() {
        let h = harness(UploadConfig::default());
        h.widget.select_file(file("a.txt", b"abc"));
        h.timer.advance(Duration::from_millis(2000));
        h.widget.select_file(file("b.txt", b"abc"));

        // First timer fires at 3000 but must not clear the replacement.
        h.timer.advance(Duration::from_millis(1000));
        assert_eq!(message(&h.state).as_deref(), Some("File ready to upload"));

        h.timer.advance(Duration::from_millis(2000));
        assert!(message(&h.state).is_none());
    }

    #[test]
    fn test_dismiss_notification() {
        let h = harness(UploadConfig::default());
        h.widget.select_file(file("a.txt", b"abc"));
        h.widget.dismiss_notification();
        assert!(message(&h.state).is_none());

        // The pending expiry is harmless afterwards.
        h.timer.advance(Duration::from_secs(3));
        assert!(message(&h.state).is_none());
    }

    #[tokio::test]
    async fn test_submit_without_file() {
        let h = harness(UploadConfig::default());
        let result = h.widget.submit_upload().await;

        assert_eq!(result, Err(UploadError::NoFileSelected));
        assert_eq!(h.client.request_count(), 0);
        assert_eq!(message(&h.state).as_deref(), Some("Please select a file first"));
        assert!(h.state.borrow().notification.as_ref().unwrap().is_error());
    }

    #[tokio::test]
    async fn test_submit_success_keeps_selection() {
        let h = harness(UploadConfig::default());
        h.client
            .respond(200, r#"{"message":"ok","url":"https://cdn.example/a.txt"}"#);
        h.widget.select_file(
            SelectedFile::new("a.txt", b"abc".to_vec()).with_content_type("text/plain"),
        );

        let receipt = h.widget.submit_upload().await.unwrap();
        assert_eq!(receipt.url.as_deref(), Some("https://cdn.example/a.txt"));

        let requests = h.client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "http://127.0.0.1:8000/api/files/upload");
        let part = requests[0].form.part("file").unwrap();
        assert_eq!(part.filename, "a.txt");
        assert_eq!(part.content_type, "text/plain");
        assert_eq!(&part.content[..], b"abc");

        let state = h.state.borrow();
        assert!(state.selected.is_some());
        assert_eq!(state.uploads_in_flight, 0);
        assert_eq!(
            state.notification.as_ref().map(|n| n.message.as_str()),
            Some("File uploaded successfully!")
        );
    }

    #[tokio::test]
    async fn test_submit_rejected_shows_detail() {
        let h = harness(UploadConfig::default());
        h.client.respond(500, r#"{"detail":"Bucket not found"}"#);
        h.widget.select_file(file("a.txt", b"abc"));

        let result = h.widget.submit_upload().await;
        assert_eq!(
            result,
            Err(UploadError::Rejected {
                status: 500,
                detail: "Bucket not found".into()
            })
        );
        assert_eq!(message(&h.state).as_deref(), Some("Upload failed: Bucket not found"));
        assert!(h.state.borrow().selected.is_some());
    }

    #[tokio::test]
    async fn test_submit_transport_failure_is_generic() {
        let h = harness(UploadConfig::default());
        h.client
            .fail(TransportError::Request("connection refused".into()));
        h.widget.select_file(file("a.txt", b"abc"));

        let result = h.widget.submit_upload().await;
        assert!(matches!(result, Err(UploadError::Transport(_))));
        assert_eq!(
            message(&h.state).as_deref(),
            Some("An error occurred while uploading")
        );
        assert!(h.state.borrow().selected.is_some());
        assert_eq!(h.state.borrow().uploads_in_flight, 0);
    }

    #[tokio::test]
    async fn test_submit_malformed_success_body() {
        let h = harness(UploadConfig::default());
        h.client.respond(200, "<html>ok</html>");
        h.widget.select_file(file("a.txt", b"abc"));

        let result = h.widget.submit_upload().await;
        assert!(matches!(result, Err(UploadError::MalformedResponse(_))));
        assert_eq!(
            message(&h.state).as_deref(),
            Some("An error occurred while uploading")
        );
    }

    #[tokio::test]
    async fn test_overlapping_submissions_are_independent() {
        let h = harness(UploadConfig::default());
        h.client.respond(200, "{}").respond(200, "{}");
        h.client.hold();
        h.widget.select_file(file("a.txt", b"abc"));

        let first = h.widget.submit_upload();
        let second = h.widget.submit_upload();
        let control = async {
            while h.client.request_count() < 2 {
                tokio::task::yield_now().await;
            }
            assert_eq!(h.state.borrow().uploads_in_flight, 2);
            h.client.release();
        };
        let (a, b, ()) = tokio::join!(first, second, control);

        assert!(a.is_ok());
        assert!(b.is_ok());
        assert_eq!(h.client.request_count(), 2);
        assert_eq!(h.state.borrow().uploads_in_flight, 0);
    }

    #[tokio::test]
    async fn test_cancelled_submission_releases_in_flight() {
        let h = harness(UploadConfig {
            single_flight: true,
            ..UploadConfig::default()
        });
        h.client.respond(200, "{}").respond(200, "{}");
        h.client.hold();
        h.widget.select_file(file("a.txt", b"abc"));

        tokio::select! {
            _ = h.widget.submit_upload() => panic!("request should still be held"),
            _ = async {
                while h.client.request_count() < 1 {
                    tokio::task::yield_now().await;
                }
                assert_eq!(h.state.borrow().uploads_in_flight, 1);
            } => {}
        }
        assert_eq!(h.state.borrow().uploads_in_flight, 0);

        h.client.release();
        let result = h.widget.submit_upload().await;
        assert!(result.is_ok());
        assert_eq!(h.state.borrow().uploads_in_flight, 0);
    }

    #[tokio::test]
    async fn test_single_flight_rejects_second_submission() {
        let h = harness(UploadConfig {
            single_flight: true,
            ..UploadConfig::default()
        });
        h.client.respond(200, "{}");
        h.client.hold();
        h.widget.select_file(file("a.txt", b"abc"));

        let first = h.widget.submit_upload();
        let second = async {
            tokio::task::yield_now().await;
            let result = h.widget.submit_upload().await;
            assert_eq!(
                message(&h.state).as_deref(),
                Some("An upload is already in progress")
            );
            h.client.release();
            result
        };
        let (a, b) = tokio::join!(first, second);

        assert!(a.is_ok());
        assert_eq!(b, Err(UploadError::AlreadyInFlight));
        assert_eq!(h.client.request_count(), 1);
    }

    #[test]
    fn test_interpret_detail_shapes() {
        let rejected = |body: &str| match interpret_response(&HttpResponse::new(422, body)) {
            Err(UploadError::Rejected { detail, .. }) => detail,
            other => panic!("unexpected {:?}", other),
        };

        assert_eq!(rejected(r#"{"detail":"too big"}"#), "too big");
        assert_eq!(rejected(r#"{"detail":null}"#), "unknown error");
        assert_eq!(rejected(r#"{"error":"x"}"#), "unknown error");
        assert_eq!(
            rejected(r#"{"detail":[{"msg":"field required"}]}"#),
            r#"[{"msg":"field required"}]"#
        );
    }

    #[test]
    fn test_interpret_error_status_with_bad_body() {
        let result = interpret_response(&HttpResponse::new(502, "Bad Gateway"));
        assert!(matches!(result, Err(UploadError::MalformedResponse(_))));
    }
}
