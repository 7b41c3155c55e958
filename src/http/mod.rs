//! HTTP request logging subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request
//!     → SetRequestIdLayer (x-request-id, UUID v4)
//!     → middleware/request_logging.rs (RequestContext into extensions,
//!       tagged request line)
//!     → handler (RequestContext extractor → context.rs logger lookup)
//!     → response line with response.rs timing
//! ```
//!
//! # Design Decisions
//! - The context is an explicit value in request extensions, never global
//! - A request without a context logs through the disabled fallback
//! - Sensitive header values are replaced before formatting

pub mod context;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

/// Header carrying the request correlation tag.
pub const X_REQUEST_ID: &str = "x-request-id";

pub use context::{logger, RequestContext};
pub use request::{request_to_log, tagged_request_to_log, tagged_request_to_log_with, HeaderPolicy};
pub use response::response_time;
pub use server::HttpServer;
