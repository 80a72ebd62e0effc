//! # User Notify
//!
//! > **Null-safe user notification in three small pieces.**
//!
//! Look a user up by id, send them a message, and report whether it went out.
//! An unknown id is an ordinary outcome: the lookup yields `None`, the notifier
//! sees `None`, and the whole call returns `false` without emitting anything.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! - **Key items**: [`User`](model::User), [`UserId`](model::UserId).
//!
//! ### 2. The Lookup ([`directory`])
//! A read-only [`UserDirectory`](directory::UserDirectory) mapping ids to users.
//! The built-in seed holds Alice (1) and Bob (2).
//!
//! ### 3. The Delivery ([`notifier`])
//! [`Notifier`](notifier::Notifier) writes one line per delivery to a
//! [`Sink`](notifier::Sink). Tests swap in [`MockSink`](notifier::mock::MockSink).
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`NotificationService`](lifecycle::NotificationService) wires a directory
//! to a notifier, plus [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ## 🚀 Quick Start
//!
//! ```
//! use user_notify::{lookup, notify, notify_by_id};
//!
//! assert!(notify_by_id(1, "Welcome!"));
//! assert!(!notify_by_id(999, "Hello?"));
//!
//! let bob = lookup(2);
//! assert!(notify(bob.as_ref(), "Hi Bob"));
//! assert!(!notify(None, "Hello!"));
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod directory;
pub mod lifecycle;
pub mod model;
pub mod notifier;

pub use directory::lookup;
pub use lifecycle::notify_by_id;
pub use notifier::notify;
