//! Browser timer backed by `setTimeout`.

use std::time::Duration;

use gloo_timers::callback::Timeout;

use crate::core::{Task, Timer};

/// [`Timer`] that schedules tasks on the browser event loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn schedule(&self, delay: Duration, task: Task) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        // Detached: the task only touches state that tolerates being disposed.
        Timeout::new(millis, task).forget();
    }
}
