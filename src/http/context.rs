//! Per-request logging context.
//!
//! The context is created by the request logging middleware and travels in the
//! request extensions. Handlers receive it as an extractor; nothing here is
//! global.

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::Extensions;

use crate::logging::{Logger, NONE_LOGGER};

/// Logger, start instant and correlation tag of one request.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    logger: Option<Arc<Logger>>,
    started_at: Option<Instant>,
    request_tag: Option<String>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_logger(mut self, logger: Arc<Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn with_start(mut self, started_at: Instant) -> Self {
        self.started_at = Some(started_at);
        self
    }

    /// Mark the request as starting now.
    pub fn started_now(self) -> Self {
        self.with_start(Instant::now())
    }

    pub fn with_request_tag(mut self, tag: impl Into<String>) -> Self {
        self.request_tag = Some(tag.into());
        self
    }

    /// The attached logger, or the disabled fallback.
    pub fn logger(&self) -> &Logger {
        self.logger.as_deref().unwrap_or(&*NONE_LOGGER)
    }

    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    pub fn request_tag(&self) -> Option<&str> {
        self.request_tag.as_deref()
    }

    pub(crate) fn tag_or_unknown(&self) -> &str {
        self.request_tag().unwrap_or("unknown")
    }

    /// The context stored in `extensions`, or an empty one.
    pub fn from_extensions(extensions: &Extensions) -> Self {
        extensions.get::<RequestContext>().cloned().unwrap_or_default()
    }
}

/// Logger attached to `ctx`, or [`NONE_LOGGER`] when there is none.
pub fn logger(ctx: &RequestContext) -> &Logger {
    ctx.logger()
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_extensions(&parts.extensions))
    }
}
