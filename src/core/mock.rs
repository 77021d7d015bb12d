//! Test doubles for the injected capabilities.
//!
//! Available under `cfg(test)` or the `mock` feature.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::poll_fn;
use std::rc::Rc;
use std::task::{Poll, Waker};
use std::time::Duration;

use async_trait::async_trait;

use super::error::TransportError;
use super::http::{HttpClient, HttpResponse, MultipartForm};
use super::timer::{Task, Timer};

// =============================================================================
// ManualTimer
// =============================================================================

struct PendingTask {
    due: Duration,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct TimerInner {
    now: Duration,
    next_seq: u64,
    pending: Vec<PendingTask>,
}

/// A timer whose clock only moves when [`ManualTimer::advance`] is called.
///
/// Clones share the same clock and queue.
#[derive(Clone, Default)]
pub struct ManualTimer {
    inner: Rc<RefCell<TimerInner>>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    /// Number of tasks not yet run.
    pub fn pending(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    /// Move the clock forward, running every task that falls due in order.
    ///
    /// Tasks scheduled by running tasks are honoured if they fall due within
    /// the same window.
    pub fn advance(&self, by: Duration) {
        let target = self.inner.borrow().now + by;

        loop {
            let next = {
                let mut inner = self.inner.borrow_mut();
                let due_index = inner
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.seq))
                    .map(|(i, _)| i);

                match due_index {
                    Some(i) => {
                        let pending = inner.pending.swap_remove(i);
                        inner.now = pending.due;
                        Some(pending.task)
                    }
                    None => {
                        inner.now = target;
                        None
                    }
                }
            };

            // Borrow released: the task may schedule more work.
            match next {
                Some(task) => task(),
                None => break,
            }
        }
    }
}

impl Timer for ManualTimer {
    fn schedule(&self, delay: Duration, task: Task) {
        let mut inner = self.inner.borrow_mut();
        let due = inner.now + delay;
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.pending.push(PendingTask { due, seq, task });
    }
}

// =============================================================================
// MockHttpClient
// =============================================================================

/// A request seen by [`MockHttpClient`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub form: MultipartForm,
}

#[derive(Default)]
struct ClientInner {
    responses: VecDeque<Result<HttpResponse, TransportError>>,
    requests: Vec<RecordedRequest>,
    held: bool,
    waiting: Vec<Waker>,
}

/// An [`HttpClient`] answering from a script.
///
/// Responses are consumed in order; once the script runs out every request
/// fails with [`TransportError::Request`]. [`MockHttpClient::hold`] parks
/// requests until [`MockHttpClient::release`], to simulate slow servers.
#[derive(Clone, Default)]
pub struct MockHttpClient {
    inner: Rc<RefCell<ClientInner>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and body.
    pub fn respond(&self, status: u16, body: impl Into<String>) -> &Self {
        self.inner
            .borrow_mut()
            .responses
            .push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    /// Queue a transport failure.
    pub fn fail(&self, error: TransportError) -> &Self {
        self.inner.borrow_mut().responses.push_back(Err(error));
        self
    }

    /// Requests seen so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.borrow().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.inner.borrow().requests.len()
    }

    /// Park subsequent requests until [`MockHttpClient::release`].
    pub fn hold(&self) {
        self.inner.borrow_mut().held = true;
    }

    /// Let parked requests proceed.
    pub fn release(&self) {
        let waiting = {
            let mut inner = self.inner.borrow_mut();
            inner.held = false;
            std::mem::take(&mut inner.waiting)
        };
        for waker in waiting {
            waker.wake();
        }
    }

    async fn wait_for_release(&self) {
        poll_fn(|cx| {
            let mut inner = self.inner.borrow_mut();
            if inner.held {
                inner.waiting.push(cx.waker().clone());
                Poll::Pending
            } else {
                Poll::Ready(())
            }
        })
        .await
    }
}

#[async_trait(?Send)]
impl HttpClient for MockHttpClient {
    async fn post_multipart(
        &self,
        url: &str,
        form: MultipartForm,
    ) -> Result<HttpResponse, TransportError> {
        self.inner.borrow_mut().requests.push(RecordedRequest {
            url: url.to_string(),
            form,
        });

        self.wait_for_release().await;

        self.inner
            .borrow_mut()
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Request("no scripted response".into())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_manual_timer_runs_due_tasks_in_order() {
        let timer = ManualTimer::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for (delay, label) in [(300, "c"), (100, "a"), (200, "b")] {
            let log = Rc::clone(&log);
            timer.schedule(
                Duration::from_millis(delay),
                Box::new(move || log.borrow_mut().push(label)),
            );
        }

        timer.advance(Duration::from_millis(250));
        assert_eq!(*log.borrow(), vec!["a", "b"]);
        assert_eq!(timer.pending(), 1);
        assert_eq!(timer.now(), Duration::from_millis(250));

        timer.advance(Duration::from_millis(50));
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
        assert_eq!(timer.pending(), 0);
    }

    #[test]
    fn test_manual_timer_nested_schedule() {
        let timer = ManualTimer::new();
        let fired = Rc::new(Cell::new(0));

        let inner_timer = timer.clone();
        let inner_fired = Rc::clone(&fired);
        timer.schedule(
            Duration::from_millis(10),
            Box::new(move || {
                inner_fired.set(inner_fired.get() + 1);
                let again = Rc::clone(&inner_fired);
                inner_timer.schedule(
                    Duration::from_millis(10),
                    Box::new(move || again.set(again.get() + 1)),
                );
            }),
        );

        timer.advance(Duration::from_millis(20));
        assert_eq!(fired.get(), 2);
    }

    #[tokio::test]
    async fn test_mock_client_script() {
        let client = MockHttpClient::new();
        client.respond(200, "{}").fail(TransportError::Request("down".into()));

        let first = client
            .post_multipart("http://x/upload", MultipartForm::default())
            .await;
        assert_eq!(first, Ok(HttpResponse::new(200, "{}")));

        let second = client
            .post_multipart("http://x/upload", MultipartForm::default())
            .await;
        assert_eq!(second, Err(TransportError::Request("down".into())));

        let third = client
            .post_multipart("http://x/upload", MultipartForm::default())
            .await;
        assert!(third.is_err());
        assert_eq!(client.request_count(), 3);
        assert_eq!(client.requests()[0].url, "http://x/upload");
    }
}
