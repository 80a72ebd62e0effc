//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber::fmt` subscriber
//! filtered through the `RUST_LOG` environment variable.
//!
//! ```bash
//! # Deliveries only
//! RUST_LOG=info cargo run
//!
//! # Include lookups and the email each notification targets
//! RUST_LOG=debug cargo run
//!
//! # Only the notifier
//! RUST_LOG=user_notify::notifier=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` the demo shows the request flow as nested spans:
//!
//! ```text
//! DEBUG notify_by_id:lookup: Lookup id=1 found=true
//! DEBUG notify_by_id:notify: Emitting notification id=1 message="Welcome!" user_id=1 email=alice@example.com
//! INFO notify_by_id:notify: Notification sent id=1 message="Welcome!" user_id=1
//! DEBUG notify_by_id:lookup: Lookup id=999 found=false
//! DEBUG notify_by_id:notify: No user to notify, skipping id=999 message="Hello?"
//! ```
//!
//! Tracing output is diagnostics. The notification line itself goes to the
//! notifier's [`Sink`](crate::notifier::Sink), stdout by default.

/// Initializes the global tracing subscriber.
///
/// Call once at startup. Without `RUST_LOG` set, only errors are shown.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
