//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files and
//! every field has a default, so an empty file is a valid configuration.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::http::request::{HeaderPolicy, DEFAULT_HEADERS_TO_LOG, DEFAULT_HEADERS_TO_SCRUB};
use crate::logging::{ConsoleSink, LoggerBuilder, MinimumLevel, Sink, TracingSink};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Logger construction settings.
    pub logger: LoggerConfig,

    /// Request header allow and scrub lists.
    pub headers: HeadersConfig,

    /// Demo server settings.
    pub server: ServerConfig,
}

/// Logger configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Minimum level, name or rank. Falls back to `LOG_LEVEL`.
    pub level: Option<MinimumLevel>,

    /// Enable trace output. Falls back to `TRACE`.
    pub trace: Option<bool>,

    /// Log the resolved level once at startup.
    pub announce: bool,

    /// Where accepted calls are written.
    pub sink: SinkKind,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: None,
            trace: None,
            announce: true,
            sink: SinkKind::Console,
        }
    }
}

impl LoggerConfig {
    /// Builder with every configured option applied.
    ///
    /// Options left unset are resolved from the environment by the builder.
    pub fn builder(&self) -> LoggerBuilder {
        let mut builder = LoggerBuilder::new()
            .announce(self.announce)
            .sink(self.sink.to_sink());
        if let Some(level) = &self.level {
            builder = builder.level(level.clone());
        }
        if let Some(trace) = self.trace {
            builder = builder.trace(trace);
        }
        builder
    }
}

/// Available sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Process stdout/stderr.
    #[default]
    Console,
    /// Events on the `tracing` subscriber.
    Tracing,
}

impl SinkKind {
    pub fn to_sink(self) -> Arc<dyn Sink> {
        match self {
            SinkKind::Console => Arc::new(ConsoleSink),
            SinkKind::Tracing => Arc::new(TracingSink),
        }
    }
}

/// Header lists for request logs.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HeadersConfig {
    /// Headers included in request logs.
    pub log: Vec<String>,

    /// Included headers whose values are replaced by `<present>`/`<empty>`.
    pub scrub: Vec<String>,
}

impl Default for HeadersConfig {
    fn default() -> Self {
        Self {
            log: DEFAULT_HEADERS_TO_LOG.iter().map(|h| h.to_string()).collect(),
            scrub: DEFAULT_HEADERS_TO_SCRUB.iter().map(|h| h.to_string()).collect(),
        }
    }
}

impl HeadersConfig {
    pub fn to_policy(&self) -> HeaderPolicy {
        HeaderPolicy::new(&self.log, &self.scrub)
    }
}

/// Demo server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
        }
    }
}
