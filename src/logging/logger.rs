//! Logger construction and eager logging.
//!
//! # Responsibilities
//! - Resolve the minimum level and bind every level once, at construction
//! - Forward active calls to the sink unchanged
//! - Derive the lazy logger from the same bindings
//! - Provide the disabled fallback logger
//!
//! # Design Decisions
//! - Each level is either `Active` or `Suppressed`; nothing is re-checked per call
//! - Trace is gated by its own flag, never by the threshold
//! - A logger is immutable and `Send + Sync`, shared through `Arc`

use std::fmt;
use std::sync::{Arc, LazyLock};

use serde_json::Value;

use crate::logging::env::LoggerEnv;
use crate::logging::lazy::LazyLogger;
use crate::logging::level::{Level, LogLevels, MinimumLevel, Threshold};
use crate::logging::sink::{self, ConsoleSink, NoopSink, Sink};

/// Whether a level reaches the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Active,
    Suppressed,
}

/// One binding per [`Level`], indexed by [`Level::index`].
pub(crate) type Bindings = [Binding; 6];

/// Logger that every level is suppressed on, trace included.
///
/// Returned wherever no logger has been attached.
pub static NONE_LOGGER: LazyLock<Logger> = LazyLock::new(|| {
    LoggerBuilder::new()
        .level(LogLevels::NONE)
        .trace(false)
        .announce(false)
        .sink(Arc::new(NoopSink))
        .build()
});

/// Severity-filtered logger.
pub struct Logger {
    sink: Arc<dyn Sink>,
    threshold: Threshold,
    bindings: Bindings,
    lazy: LazyLogger,
}

impl Logger {
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// The shared disabled logger.
    pub fn disabled() -> &'static Logger {
        &NONE_LOGGER
    }

    fn assemble(sink: Arc<dyn Sink>, threshold: Threshold, trace: bool) -> Self {
        let mut bindings = [Binding::Suppressed; 6];
        for level in Level::RANKED {
            if threshold.admits(level) {
                bindings[level.index()] = Binding::Active;
            }
        }
        if trace {
            bindings[Level::Trace.index()] = Binding::Active;
        }

        let lazy = LazyLogger::derive(sink.clone(), &bindings);
        Self {
            sink,
            threshold,
            bindings,
            lazy,
        }
    }

    /// The resolved minimum level.
    pub fn threshold(&self) -> &Threshold {
        &self.threshold
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        self.bindings[level.index()] == Binding::Active
    }

    /// Deferred-evaluation methods sharing this logger's bindings.
    pub fn lazy(&self) -> &LazyLogger {
        &self.lazy
    }

    /// Forward `message` and `args` to the sink's method for `level`, if
    /// `level` is active.
    pub fn emit(&self, level: Level, message: impl Into<Value>, args: &[Value]) {
        if self.bindings[level.index()] == Binding::Suppressed {
            return;
        }
        sink::dispatch(self.sink.as_ref(), level, &message.into(), args);
    }

    pub fn trace(&self, message: impl Into<Value>, args: &[Value]) {
        self.emit(Level::Trace, message, args);
    }

    pub fn debug(&self, message: impl Into<Value>, args: &[Value]) {
        self.emit(Level::Debug, message, args);
    }

    pub fn log(&self, message: impl Into<Value>, args: &[Value]) {
        self.emit(Level::Log, message, args);
    }

    pub fn info(&self, message: impl Into<Value>, args: &[Value]) {
        self.emit(Level::Info, message, args);
    }

    pub fn warn(&self, message: impl Into<Value>, args: &[Value]) {
        self.emit(Level::Warn, message, args);
    }

    pub fn error(&self, message: impl Into<Value>, args: &[Value]) {
        self.emit(Level::Error, message, args);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold)
            .field("bindings", &self.bindings)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Logger`].
///
/// Unset options fall back to the environment (`LOG_LEVEL`, `TRACE`) and to
/// the console sink. The announcement is on by default.
pub struct LoggerBuilder {
    level: Option<MinimumLevel>,
    sink: Option<Arc<dyn Sink>>,
    announce: bool,
    trace: Option<bool>,
    env: Option<LoggerEnv>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            level: None,
            sink: None,
            announce: true,
            trace: None,
            env: None,
        }
    }

    pub fn level(mut self, level: impl Into<MinimumLevel>) -> Self {
        self.level = Some(level.into());
        self
    }

    pub fn sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Whether to log the resolved level at info once built.
    pub fn announce(mut self, announce: bool) -> Self {
        self.announce = announce;
        self
    }

    /// Override the `TRACE` environment flag.
    pub fn trace(mut self, enabled: bool) -> Self {
        self.trace = Some(enabled);
        self
    }

    /// Use this snapshot instead of reading the process environment.
    pub fn environment(mut self, env: LoggerEnv) -> Self {
        self.env = Some(env);
        self
    }

    pub fn build(self) -> Logger {
        let env = match (&self.level, self.trace, self.env) {
            (Some(_), Some(_), _) => LoggerEnv::default(),
            (_, _, Some(env)) => env,
            _ => LoggerEnv::from_env(),
        };
        let minimum = self.level.unwrap_or_else(|| env.default_level());
        let trace = self.trace.unwrap_or(env.trace);
        let sink = self
            .sink
            .unwrap_or_else(|| Arc::new(ConsoleSink) as Arc<dyn Sink>);

        let threshold = minimum.resolve();
        if let Threshold::Unresolved(raw) = &threshold {
            tracing::debug!(level = %raw, "Unknown level name, comparing raw value");
        }

        let logger = Logger::assemble(sink, threshold, trace);
        if self.announce {
            logger.info(format!("[logger] level set at: {}", logger.threshold), &[]);
        }
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a logger.
///
/// `minimum_level` defaults to the `LOG_LEVEL` environment variable (info
/// when unset or unknown) and `sink` to the console.
pub fn create_logger(
    minimum_level: Option<MinimumLevel>,
    sink: Option<Arc<dyn Sink>>,
    announce: bool,
) -> Logger {
    let mut builder = LoggerBuilder::new().announce(announce);
    if let Some(level) = minimum_level {
        builder = builder.level(level);
    }
    if let Some(sink) = sink {
        builder = builder.sink(sink);
    }
    builder.build()
}
