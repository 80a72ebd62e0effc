//! Pure data structures shared by the directory and the notifier.

pub mod user;

pub use user::*;
