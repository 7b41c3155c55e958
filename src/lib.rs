//! Leveled request logging for HTTP servers.
//!
//! A [`Logger`] filters calls by severity once, at construction, and forwards
//! the rest to a [`Sink`]. Its lazy variant takes closures that only run for
//! active levels. The [`http`] module renders requests into scrubbed,
//! loggable lines and threads a per-request logger through axum.

pub mod config;
pub mod http;
pub mod logging;
pub mod observability;

pub use config::AppConfig;
pub use http::{logger, RequestContext};
pub use logging::{
    create_logger, LazyLogger, Level, LogLevels, Logger, LoggerBuilder, MinimumLevel, Sink,
    NONE_LOGGER,
};
