//! Output sinks.
//!
//! # Responsibilities
//! - Define the capability a logger forwards accepted calls to
//! - Provide the console sink used by default
//! - Bridge into `tracing` for servers that already run a subscriber
//!
//! # Design Decisions
//! - One required entry point; per-level methods are provided on top of it
//! - Sinks are shared (`Arc<dyn Sink>`) and never mutated by the logger
//! - Writing is synchronous; write errors are swallowed

use std::io::{self, Write};

use serde_json::Value;

use crate::logging::level::Level;

/// Destination for log calls that passed the level filter.
///
/// Loggers call the per-level method matching each call's level. Those
/// methods fall back to [`Sink::emit`], so a sink may implement `emit` alone
/// or override individual levels.
pub trait Sink: Send + Sync {
    /// Write one call: a message plus any extra arguments.
    fn emit(&self, level: Level, message: &Value, args: &[Value]);

    fn trace(&self, message: &Value, args: &[Value]) {
        self.emit(Level::Trace, message, args);
    }

    fn debug(&self, message: &Value, args: &[Value]) {
        self.emit(Level::Debug, message, args);
    }

    fn log(&self, message: &Value, args: &[Value]) {
        self.emit(Level::Log, message, args);
    }

    fn info(&self, message: &Value, args: &[Value]) {
        self.emit(Level::Info, message, args);
    }

    fn warn(&self, message: &Value, args: &[Value]) {
        self.emit(Level::Warn, message, args);
    }

    fn error(&self, message: &Value, args: &[Value]) {
        self.emit(Level::Error, message, args);
    }
}

/// Call the method of `sink` named after `level`.
pub(crate) fn dispatch(sink: &dyn Sink, level: Level, message: &Value, args: &[Value]) {
    match level {
        Level::Trace => sink.trace(message, args),
        Level::Debug => sink.debug(message, args),
        Level::Log => sink.log(message, args),
        Level::Info => sink.info(message, args),
        Level::Warn => sink.warn(message, args),
        Level::Error => sink.error(message, args),
    }
}

/// Join a message and its arguments into one line.
///
/// Strings are written as-is; every other value is written as JSON.
pub fn render_line(message: &Value, args: &[Value]) -> String {
    let mut line = render_value(message);
    for arg in args {
        line.push(' ');
        line.push_str(&render_value(arg));
    }
    line
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Process console: stdout for trace through info, stderr for warn and error.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl Sink for ConsoleSink {
    fn emit(&self, level: Level, message: &Value, args: &[Value]) {
        let line = render_line(message, args);
        let _ = match level {
            Level::Warn | Level::Error => writeln!(io::stderr().lock(), "{}", line),
            _ => writeln!(io::stdout().lock(), "{}", line),
        };
    }
}

/// Forwards calls as `tracing` events under the `reqlog` target.
///
/// `log` has no tracing counterpart and is recorded at INFO with
/// `console = "log"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn emit(&self, level: Level, message: &Value, args: &[Value]) {
        let line = render_line(message, args);
        match level {
            Level::Trace => tracing::trace!(target: "reqlog", "{}", line),
            Level::Debug => tracing::debug!(target: "reqlog", "{}", line),
            Level::Log => tracing::info!(target: "reqlog", console = "log", "{}", line),
            Level::Info => tracing::info!(target: "reqlog", "{}", line),
            Level::Warn => tracing::warn!(target: "reqlog", "{}", line),
            Level::Error => tracing::error!(target: "reqlog", "{}", line),
        }
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl Sink for NoopSink {
    #[inline]
    fn emit(&self, _level: Level, _message: &Value, _args: &[Value]) {}
}
