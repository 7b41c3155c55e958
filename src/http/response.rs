//! Response timing.

use std::time::Duration;

use crate::http::context::RequestContext;

/// Elapsed time since the request started, as `[+<ms>ms]`.
///
/// `None` when the context carries no start instant.
pub fn response_time(ctx: &RequestContext) -> Option<String> {
    let started_at = ctx.started_at()?;
    Some(format_elapsed(started_at.elapsed()))
}

/// Milliseconds with two decimals, from nanosecond precision.
pub fn format_elapsed(elapsed: Duration) -> String {
    let millis = elapsed.as_nanos() as f64 / 1e6;
    format!("[+{:.2}ms]", millis)
}
