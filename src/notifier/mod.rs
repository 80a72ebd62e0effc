//! Guarded delivery of a message to an optional user.
//!
//! [`Notifier::notify`] takes `Option<&User>` on purpose: a failed lookup flows
//! straight in, and the absent branch is handled here by returning `false`
//! without touching the sink.

pub mod error;
pub mod mock;
pub mod sink;

pub use error::*;
pub use sink::*;

use tracing::{debug, info, instrument, warn};

use crate::model::User;

/// Sends messages to users through a [`Sink`].
#[derive(Debug, Clone, Default)]
pub struct Notifier<S: Sink = StdoutSink> {
    sink: S,
}

impl<S: Sink> Notifier<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Delivers `message` to `user`.
    ///
    /// Returns `true` after exactly one emission when `user` is present.
    /// Returns `false` with no emission when `user` is `None`, and `false`
    /// when the sink rejects the line. Never panics.
    #[instrument(skip(self, user), fields(user_id = user.map(User::id)))]
    pub fn notify(&self, user: Option<&User>, message: &str) -> bool {
        let Some(user) = user else {
            debug!("No user to notify, skipping");
            return false;
        };

        debug!(email = %user.email(), "Emitting notification");
        match self.sink.emit(&render(user.email(), message)) {
            Ok(()) => {
                info!("Notification sent");
                true
            }
            Err(e) => {
                warn!(error = %e, "Notification failed");
                false
            }
        }
    }
}

/// The exact line emitted for one delivery.
pub fn render(email: &str, message: &str) -> String {
    format!("Sending '{message}' to {email}")
}

/// Delivers `message` to `user` on standard output.
pub fn notify(user: Option<&User>, message: &str) -> bool {
    Notifier::new(StdoutSink).notify(user, message)
}
