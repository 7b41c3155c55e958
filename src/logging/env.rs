//! Environment inputs of logger construction.

use crate::logging::level::{rank_of, LogLevels, MinimumLevel};

/// Selects the default minimum level by name.
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Enables the trace level when set to any non-empty value.
pub const TRACE_VAR: &str = "TRACE";

/// Snapshot of the environment variables the logger reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggerEnv {
    pub log_level: Option<String>,
    pub trace: bool,
}

impl LoggerEnv {
    /// Read the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            log_level: lookup(LOG_LEVEL_VAR),
            trace: lookup(TRACE_VAR).map(|v| !v.is_empty()).unwrap_or(false),
        }
    }

    /// Minimum level used when the caller does not pick one.
    ///
    /// Unlike an explicit name, an unknown `LOG_LEVEL` falls back to info.
    pub fn default_level(&self) -> MinimumLevel {
        let rank = self
            .log_level
            .as_deref()
            .and_then(rank_of)
            .unwrap_or(LogLevels::INFO);
        MinimumLevel::Rank(rank)
    }
}
