//! Request Logging Middleware.
//! Attaches a [`RequestContext`] and logs one line per request and response.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::http::context::RequestContext;
use crate::http::request::{tagged_request_to_log_with, HeaderPolicy};
use crate::http::response::response_time;
use crate::http::X_REQUEST_ID;
use crate::logging::{Level, Logger};

/// Shared state of the logging middleware.
#[derive(Clone)]
pub struct RequestLogging {
    logger: Arc<Logger>,
    headers: Arc<HeaderPolicy>,
}

impl RequestLogging {
    pub fn new(logger: Arc<Logger>, headers: HeaderPolicy) -> Self {
        Self {
            logger,
            headers: Arc::new(headers),
        }
    }

    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }
}

/// UUID v4 request tags for `SetRequestIdLayer`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestTag;

impl MakeRequestId for MakeRequestTag {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        id.parse().ok().map(RequestId::new)
    }
}

pub async fn request_logging_middleware(
    State(state): State<RequestLogging>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let mut ctx = RequestContext::new()
        .with_logger(state.logger.clone())
        .started_now();
    if let Some(tag) = req
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
    {
        ctx = ctx.with_request_tag(tag);
    }

    ctx.logger()
        .lazy()
        .info(|| tagged_request_to_log_with(&req, &ctx, &state.headers));

    req.extensions_mut().insert(ctx.clone());
    let response = next.run(req).await;

    let status = response.status();
    let level = if status.is_server_error() {
        Level::Warn
    } else {
        Level::Info
    };
    ctx.logger().lazy().emit(level, || {
        format!(
            "{}: {} {}",
            ctx.tag_or_unknown(),
            status,
            response_time(&ctx).unwrap_or_default()
        )
    });

    response
}
