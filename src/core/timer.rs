//! Timer capability.
//!
//! Notifications expire through an injected [`Timer`] rather than the
//! browser's `setTimeout`, so expiry can be driven by hand in tests
//! (see [`crate::core::mock::ManualTimer`]).

use std::time::Duration;

/// A deferred task.
pub type Task = Box<dyn FnOnce()>;

/// Runs a task once after a delay.
pub trait Timer {
    fn schedule(&self, delay: Duration, task: Task);
}
