use tracing::{debug, instrument};

use crate::directory::{self, UserDirectory};
use crate::model::UserId;
use crate::notifier::{self, Notifier, Sink, StdoutSink};

/// Notifies users by id.
///
/// `NotificationService` owns its dependencies instead of reaching for
/// globals:
/// - **Directory**: the read-only [`UserDirectory`] ids are resolved against
/// - **Notifier**: the [`Notifier`] (and through it the [`Sink`]) that performs delivery
///
/// # Example
///
/// ```
/// use user_notify::lifecycle::NotificationService;
/// use user_notify::notifier::mock::MockSink;
///
/// let sink = MockSink::new();
/// let service = NotificationService::with_sink(sink.clone());
///
/// assert!(service.notify_by_id(1, "Welcome!"));
/// assert!(!service.notify_by_id(999, "Hello?"));
/// assert_eq!(sink.lines(), vec!["Sending 'Welcome!' to alice@example.com"]);
/// ```
#[derive(Debug)]
pub struct NotificationService<S: Sink = StdoutSink> {
    directory: UserDirectory,
    notifier: Notifier<S>,
}

impl NotificationService<StdoutSink> {
    /// Seeded directory, notifications printed to stdout.
    pub fn new() -> Self {
        Self::with_sink(StdoutSink)
    }
}

impl Default for NotificationService<StdoutSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Sink> NotificationService<S> {
    /// Seeded directory, notifications sent to `sink`.
    pub fn with_sink(sink: S) -> Self {
        Self::from_parts(UserDirectory::seeded(), Notifier::new(sink))
    }

    pub fn from_parts(directory: UserDirectory, notifier: Notifier<S>) -> Self {
        Self {
            directory,
            notifier,
        }
    }

    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    pub fn notifier(&self) -> &Notifier<S> {
        &self.notifier
    }

    /// Looks `id` up and hands the result, present or not, to the notifier.
    ///
    /// Returns the notifier's result unchanged: `false` for unknown ids.
    #[instrument(skip(self))]
    pub fn notify_by_id(&self, id: UserId, message: &str) -> bool {
        debug!("Resolving user");
        let user = self.directory.lookup(id);
        self.notifier.notify(user, message)
    }
}

/// Notifies `id` from the process-wide seeded directory on standard output.
#[instrument]
pub fn notify_by_id(id: UserId, message: &str) -> bool {
    debug!("Resolving user");
    notifier::notify(directory::seed().lookup(id), message)
}
