//! # Mock Sink
//!
//! In-memory [`Sink`] for testing notification flows without touching stdout.
//!
//! Clones share state, so a test can hand one clone to a [`Notifier`](super::Notifier)
//! and keep another to inspect what was emitted:
//!
//! ```
//! use user_notify::notifier::{mock::MockSink, Notifier};
//!
//! let sink = MockSink::new();
//! sink.expect_emits(1);
//!
//! let notifier = Notifier::new(sink.clone());
//! let user = user_notify::directory::lookup(1);
//! assert!(notifier.notify(user.as_ref(), "Hello!"));
//!
//! assert_eq!(sink.lines(), vec!["Sending 'Hello!' to alice@example.com"]);
//! sink.verify();
//! ```
//!
//! This lives in the library rather than behind `#[cfg(test)]` so integration
//! tests under `tests/` can use it too.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::{Sink, SinkError};

#[derive(Default)]
struct MockState {
    lines: Vec<String>,
    failures: VecDeque<SinkError>,
    expected: Option<usize>,
}

/// A capturing sink with optional failure injection and expectation tracking.
#[derive(Clone, Default)]
pub struct MockSink {
    state: Arc<Mutex<MockState>>,
}

impl MockSink {
    /// Creates a mock with no captured lines and no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next `emit` fail with `error` instead of capturing the line.
    ///
    /// Failures queue up in order; each one is consumed by a single call.
    pub fn fail_next(&self, error: SinkError) {
        self.state.lock().unwrap().failures.push_back(error);
    }

    /// Expects exactly `count` successful emissions by the time [`verify`](Self::verify) runs.
    pub fn expect_emits(&self, count: usize) {
        self.state.lock().unwrap().expected = Some(count);
    }

    /// Lines captured so far, in emission order.
    pub fn lines(&self) -> Vec<String> {
        self.state.lock().unwrap().lines.clone()
    }

    pub fn count(&self) -> usize {
        self.state.lock().unwrap().lines.len()
    }

    /// Panics if the expectation set by [`expect_emits`](Self::expect_emits)
    /// was not met or if queued failures were never consumed.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if let Some(expected) = state.expected {
            assert_eq!(
                state.lines.len(),
                expected,
                "Expected {} emissions, got {}: {:?}",
                expected,
                state.lines.len(),
                state.lines
            );
        }
        assert!(
            state.failures.is_empty(),
            "Unconsumed sink failures: {}",
            state.failures.len()
        );
    }
}

impl Sink for MockSink {
    fn emit(&self, line: &str) -> Result<(), SinkError> {
        let mut state = self.state.lock().unwrap();
        if let Some(error) = state.failures.pop_front() {
            return Err(error);
        }
        state.lines.push(line.to_owned());
        Ok(())
    }
}
