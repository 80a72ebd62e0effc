//! Error types for notification sinks.

use thiserror::Error;

/// Errors a [`Sink`](super::Sink) can report while emitting a line.
///
/// These never escape [`Notifier::notify`](super::Notifier::notify); the
/// notifier logs them and reports the delivery as failed.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Writing to the underlying stream failed.
    #[error("Sink write error: {0}")]
    Io(#[from] std::io::Error),

    /// The sink no longer accepts output.
    #[error("Sink closed")]
    Closed,
}
