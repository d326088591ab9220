//! Side channel for recovered lookup failures.

use std::fmt;

/// Receives the message of every non-silenced invalid-key lookup.
pub trait DiagnosticSink {
    fn warn(&self, message: &str);
}

/// Default sink: forwards messages to `tracing` at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }
}

impl<F> DiagnosticSink for F
where
    F: Fn(&str),
{
    fn warn(&self, message: &str) {
        self(message);
    }
}

impl fmt::Debug for dyn DiagnosticSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DiagnosticSink")
    }
}
