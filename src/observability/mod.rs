//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! crate diagnostics (config warnings, server lifecycle)
//!     → tracing macros
//!     → logging.rs subscriber (stdout, EnvFilter)
//! ```

pub mod logging;

pub use logging::init_tracing;
