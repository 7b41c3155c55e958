//! Leveled logging subsystem.
//!
//! # Data Flow
//! ```text
//! minimum level (rank, name, or LOG_LEVEL)
//!     → level.rs (resolve against the level table)
//!     → logger.rs (bind each level Active/Suppressed once)
//!     → lazy.rs (same bindings, producer closures)
//!     → sink.rs (console, tracing bridge, no-op)
//! ```
//!
//! # Design Decisions
//! - Filtering is decided at construction, never per call
//! - Lazy producers for suppressed levels are never invoked
//! - Unknown level names degrade instead of failing

pub mod env;
pub mod lazy;
pub mod level;
pub mod logger;
pub mod sink;

pub use env::LoggerEnv;
pub use lazy::LazyLogger;
pub use level::{Level, LogLevels, MinimumLevel, Threshold};
pub use logger::{create_logger, Binding, Logger, LoggerBuilder, NONE_LOGGER};
pub use sink::{ConsoleSink, NoopSink, Sink, TracingSink};
