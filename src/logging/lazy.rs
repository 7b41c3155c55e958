//! Deferred-evaluation logging.
//!
//! Each method takes a producer closure instead of the message. The producer
//! runs only when the level is active, so building an expensive message costs
//! nothing when it would be discarded.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::logging::level::Level;
use crate::logging::logger::{Binding, Bindings};
use crate::logging::sink::{self, Sink};

/// Lazy counterpart of [`Logger`](crate::logging::Logger).
#[derive(Clone)]
pub struct LazyLogger {
    sink: Arc<dyn Sink>,
    bindings: Bindings,
}

impl LazyLogger {
    /// Mirror the eager bindings: suppressed stays suppressed.
    pub(crate) fn derive(sink: Arc<dyn Sink>, eager: &Bindings) -> Self {
        Self {
            sink,
            bindings: *eager,
        }
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        self.bindings[level.index()] == Binding::Active
    }

    /// Run `producer` and forward its result, if `level` is active.
    ///
    /// An array result is split: the first element becomes the message and
    /// the rest become extra arguments. Any other value is the whole message.
    pub fn emit<F, R>(&self, level: Level, producer: F)
    where
        F: FnOnce() -> R,
        R: Into<Value>,
    {
        if self.bindings[level.index()] == Binding::Suppressed {
            return;
        }
        let (message, args) = unwrap_resolved(producer().into());
        sink::dispatch(self.sink.as_ref(), level, &message, &args);
    }

    pub fn trace<F, R>(&self, producer: F)
    where
        F: FnOnce() -> R,
        R: Into<Value>,
    {
        self.emit(Level::Trace, producer);
    }

    pub fn debug<F, R>(&self, producer: F)
    where
        F: FnOnce() -> R,
        R: Into<Value>,
    {
        self.emit(Level::Debug, producer);
    }

    pub fn log<F, R>(&self, producer: F)
    where
        F: FnOnce() -> R,
        R: Into<Value>,
    {
        self.emit(Level::Log, producer);
    }

    pub fn info<F, R>(&self, producer: F)
    where
        F: FnOnce() -> R,
        R: Into<Value>,
    {
        self.emit(Level::Info, producer);
    }

    pub fn warn<F, R>(&self, producer: F)
    where
        F: FnOnce() -> R,
        R: Into<Value>,
    {
        self.emit(Level::Warn, producer);
    }

    pub fn error<F, R>(&self, producer: F)
    where
        F: FnOnce() -> R,
        R: Into<Value>,
    {
        self.emit(Level::Error, producer);
    }
}

impl fmt::Debug for LazyLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyLogger")
            .field("bindings", &self.bindings)
            .finish_non_exhaustive()
    }
}

/// Split a produced value into message and extra arguments.
fn unwrap_resolved(resolved: Value) -> (Value, Vec<Value>) {
    match resolved {
        Value::Array(values) => {
            let mut values = values.into_iter();
            let message = values.next().unwrap_or(Value::Null);
            (message, values.collect())
        }
        single => (single, Vec::new()),
    }
}
