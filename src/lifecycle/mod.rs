//! Wiring and runtime setup.
//!
//! - [`NotificationService`] - composes a [`UserDirectory`](crate::directory::UserDirectory)
//!   with a [`Notifier`](crate::notifier::Notifier) to notify users by id
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod notification_service;
pub mod tracing;

pub use notification_service::*;
pub use self::tracing::*;
