//! Output channels for notification lines.

use std::io::Write;

use tracing::info;

use super::SinkError;

/// Destination for emitted notification lines.
///
/// One call to [`Sink::emit`] is one observable delivery.
pub trait Sink {
    fn emit(&self, line: &str) -> Result<(), SinkError>;
}

impl<S: Sink + ?Sized> Sink for &S {
    fn emit(&self, line: &str) -> Result<(), SinkError> {
        (**self).emit(line)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn emit(&self, line: &str) -> Result<(), SinkError> {
        (**self).emit(line)
    }
}

/// Writes each line to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn emit(&self, line: &str) -> Result<(), SinkError> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{line}")?;
        out.flush()?;
        Ok(())
    }
}

/// Routes each line into the tracing subscriber at `INFO`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn emit(&self, line: &str) -> Result<(), SinkError> {
        info!(target: "notification", "{line}");
        Ok(())
    }
}
