//! Telemetry utilities for command timing.

use std::time::Instant;
use tracing::trace;

/// Guard for timing command execution.
///
/// Emits a trace event with the elapsed time when dropped.
pub struct CommandTimer {
    command: String,
    start: Instant,
}

impl CommandTimer {
    /// Start timing a command.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            start: Instant::now(),
        }
    }
}

impl Drop for CommandTimer {
    fn drop(&mut self) {
        let elapsed_us = self.start.elapsed().as_micros() as u64;
        trace!(command = %self.command, elapsed_us, "command finished");
    }
}

/// Standardized span constructors.
pub mod spans {
    use tracing::{Span, debug_span};

    /// Span for one dispatched command.
    pub fn command(name: &str, context: &str, params: usize) -> Span {
        debug_span!("command", name = %name, context = %context, params)
    }
}
