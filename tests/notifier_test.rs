mod common;

use std::io;

use tracing::Level;

use user_notify::directory::lookup;
use user_notify::model::User;
use user_notify::notifier::{mock::MockSink, Notifier, Sink, SinkError, TracingSink};

#[test]
fn test_notify_present_user_emits_once() {
    let sink = MockSink::new();
    sink.expect_emits(1);
    let notifier = Notifier::new(sink.clone());
    let user = User::new(1, "Test", "test@example.com").unwrap();

    assert!(notifier.notify(Some(&user), "Hello!"));

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("test@example.com"));
    assert!(lines[0].contains("Hello!"));
    sink.verify();
}

/// The case that used to crash: notifying nobody must be a quiet `false`.
#[test]
fn test_notify_absent_user_returns_false() {
    let sink = MockSink::new();
    sink.expect_emits(0);
    let notifier = Notifier::new(sink.clone());

    assert!(!notifier.notify(None, "Hello!"));
    sink.verify();
}

#[test]
fn test_notify_failed_lookup_flows_through() {
    let sink = MockSink::new();
    let notifier = Notifier::new(sink.clone());

    let missing = lookup(999);
    assert!(!notifier.notify(missing.as_ref(), "Hello?"));

    let alice = lookup(1);
    assert!(notifier.notify(alice.as_ref(), "Welcome!"));
    assert_eq!(sink.lines(), vec!["Sending 'Welcome!' to alice@example.com"]);
}

#[test]
fn test_notify_io_failure_returns_false() {
    let sink = MockSink::new();
    sink.fail_next(SinkError::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed")));
    let notifier = Notifier::new(sink.clone());
    let user = lookup(2).unwrap();

    assert!(!notifier.notify(Some(&user), "Hi"));
    assert_eq!(sink.count(), 0);
    sink.verify();
}

#[test]
fn test_notifier_accepts_borrowed_and_boxed_sinks() {
    let sink = MockSink::new();
    let user = lookup(1).unwrap();

    let borrowed = Notifier::new(&sink);
    assert!(borrowed.notify(Some(&user), "one"));

    let boxed_sink: Box<dyn Sink> = Box::new(sink.clone());
    let boxed = Notifier::new(boxed_sink);
    assert!(boxed.notify(Some(&user), "two"));

    assert_eq!(
        sink.lines(),
        vec![
            "Sending 'one' to alice@example.com",
            "Sending 'two' to alice@example.com",
        ]
    );
}

#[test]
fn test_tracing_sink_always_succeeds() {
    let notifier = Notifier::new(TracingSink);
    let user = lookup(1).unwrap();

    assert!(notifier.notify(Some(&user), "Hello!"));
    assert!(!notifier.notify(None, "Hello!"));
}

/// With tracing as the emission channel, an absent user leaves nothing at INFO.
#[test]
fn test_absent_user_is_silent_at_info() {
    let user = lookup(1).unwrap();
    let logs = common::capture_logs(Level::INFO, || {
        let notifier = Notifier::new(TracingSink);
        assert!(!notifier.notify(None, "Hello!"));
        assert!(notifier.notify(Some(&user), "Hello!"));
    });

    assert_eq!(logs.matches("Sending 'Hello!' to alice@example.com").count(), 1);
    assert!(!logs.contains("No user to notify"), "unexpected log: {logs}");
}
