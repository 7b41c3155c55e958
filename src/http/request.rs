//! Loggable request summaries.
//!
//! # Responsibilities
//! - Reconstruct the request URL (scheme, host, original path and query)
//! - Keep only allow-listed headers
//! - Replace sensitive header values with a presence marker
//!
//! # Design Decisions
//! - Raw values of scrubbed headers never reach the output
//! - Output is a single JSON line with keys `headers`, `method`, `url`
//! - Header names are compared lowercase, as `http` stores them

use std::collections::HashSet;

use axum::extract::OriginalUri;
use axum::http::{header, Request};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::http::context::RequestContext;

/// Headers included in request logs by default.
pub const DEFAULT_HEADERS_TO_LOG: [&str; 13] = [
    "accept",
    "accept-encoding",
    "accept-language",
    "authorization",
    "cache-control",
    "content-type",
    "if-match",
    "if-modified-since",
    "if-none-match",
    "if-range",
    "if-unmodified-since",
    "user-agent",
    "warning",
];

/// Included headers whose values are scrubbed by default.
pub const DEFAULT_HEADERS_TO_SCRUB: [&str; 1] = ["authorization"];

const PRESENT: &str = "<present>";
const EMPTY: &str = "<empty>";

/// Which headers are logged and which of those are scrubbed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderPolicy {
    log: HashSet<String>,
    scrub: HashSet<String>,
}

impl HeaderPolicy {
    pub fn new<L, S, T, U>(log: L, scrub: S) -> Self
    where
        L: IntoIterator<Item = T>,
        S: IntoIterator<Item = U>,
        T: AsRef<str>,
        U: AsRef<str>,
    {
        Self {
            log: log.into_iter().map(|h| h.as_ref().to_ascii_lowercase()).collect(),
            scrub: scrub.into_iter().map(|h| h.as_ref().to_ascii_lowercase()).collect(),
        }
    }

    pub fn includes(&self, name: &str) -> bool {
        self.log.contains(name)
    }

    pub fn scrubs(&self, name: &str) -> bool {
        self.scrub.contains(name)
    }
}

impl Default for HeaderPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_HEADERS_TO_LOG, DEFAULT_HEADERS_TO_SCRUB)
    }
}

#[derive(Serialize)]
struct RequestLog<'a> {
    headers: Map<String, Value>,
    method: &'a str,
    url: String,
}

/// Render a request as a JSON line safe to log.
pub fn request_to_log<B>(req: &Request<B>, policy: &HeaderPolicy) -> String {
    let mut headers = Map::new();
    for name in req.headers().keys() {
        let name = name.as_str();
        if !policy.includes(name) {
            continue;
        }
        let value = req
            .headers()
            .get_all(name)
            .iter()
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .collect::<Vec<_>>()
            .join(", ");
        let value = if !policy.scrubs(name) {
            value
        } else if value.is_empty() {
            EMPTY.to_string()
        } else {
            PRESENT.to_string()
        };
        headers.insert(name.to_string(), Value::String(value));
    }

    let log = RequestLog {
        headers,
        method: req.method().as_str(),
        url: request_url(req),
    };
    serde_json::to_string(&log).unwrap_or_default()
}

/// [`request_to_log`] with the default policy, prefixed by the request tag.
pub fn tagged_request_to_log<B>(req: &Request<B>, ctx: &RequestContext) -> String {
    tagged_request_to_log_with(req, ctx, &HeaderPolicy::default())
}

/// [`request_to_log`] prefixed by the request tag (`unknown` when missing).
pub fn tagged_request_to_log_with<B>(
    req: &Request<B>,
    ctx: &RequestContext,
    policy: &HeaderPolicy,
) -> String {
    format!("{}: {}", ctx.tag_or_unknown(), request_to_log(req, policy))
}

fn request_url<B>(req: &Request<B>) -> String {
    // Nested routers strip their prefix; prefer the URI as received.
    let uri = req
        .extensions()
        .get::<OriginalUri>()
        .map(|original| &original.0)
        .unwrap_or_else(|| req.uri());

    let scheme = uri
        .scheme_str()
        .map(str::to_string)
        .or_else(|| {
            req.headers()
                .get("x-forwarded-proto")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.split(',').next())
                .map(|v| v.trim().to_string())
        })
        .unwrap_or_else(|| "http".to_string());

    let host = req
        .headers()
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| uri.authority().map(|a| a.as_str()))
        .unwrap_or_default();

    let path = uri.path_and_query().map(|p| p.as_str()).unwrap_or("/");

    format!("{}://{}{}", scheme, host, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Uri;

    fn parse(line: &str) -> Value {
        serde_json::from_str(line).unwrap()
    }

    #[test]
    fn test_scrubs_and_filters_headers() {
        let req = Request::builder()
            .uri("/items?page=2")
            .header("Host", "api.example.com")
            .header("Authorization", "secret")
            .header("User-Agent", "X")
            .header("X-Custom", "Y")
            .body(Body::empty())
            .unwrap();

        let log = parse(&request_to_log(&req, &HeaderPolicy::default()));
        let headers = log["headers"].as_object().unwrap();

        assert_eq!(headers["user-agent"], "X");
        assert_eq!(headers["authorization"], "<present>");
        assert!(!headers.contains_key("x-custom"));
        assert!(!headers.contains_key("host"));
        assert_eq!(log["method"], "GET");
        assert_eq!(log["url"], "http://api.example.com/items?page=2");
    }

    #[test]
    fn test_secret_never_in_output() {
        let req = Request::builder()
            .header("authorization", "Bearer hunter2")
            .body(Body::empty())
            .unwrap();
        let line = request_to_log(&req, &HeaderPolicy::default());
        assert!(!line.contains("hunter2"));
    }

    #[test]
    fn test_empty_scrubbed_header() {
        let req = Request::builder()
            .header("authorization", "")
            .body(Body::empty())
            .unwrap();
        let log = parse(&request_to_log(&req, &HeaderPolicy::default()));
        assert_eq!(log["headers"]["authorization"], "<empty>");
    }

    #[test]
    fn test_repeated_headers_are_joined() {
        let req = Request::builder()
            .header("accept", "text/html")
            .header("accept", "application/json")
            .body(Body::empty())
            .unwrap();
        let log = parse(&request_to_log(&req, &HeaderPolicy::default()));
        assert_eq!(log["headers"]["accept"], "text/html, application/json");
    }

    #[test]
    fn test_custom_policy() {
        let policy = HeaderPolicy::new(["X-Api-Key", "accept"], ["x-api-key"]);
        let req = Request::builder()
            .header("x-api-key", "k")
            .header("accept", "*/*")
            .header("user-agent", "curl")
            .body(Body::empty())
            .unwrap();
        let log = parse(&request_to_log(&req, &policy));
        let headers = log["headers"].as_object().unwrap();
        assert_eq!(headers["x-api-key"], "<present>");
        assert_eq!(headers["accept"], "*/*");
        assert!(!headers.contains_key("user-agent"));
    }

    #[test]
    fn test_url_from_forwarded_proto_and_original_uri() {
        let mut req = Request::builder()
            .method("POST")
            .uri("/inner")
            .header("host", "example.com")
            .header("x-forwarded-proto", "https, http")
            .body(Body::empty())
            .unwrap();
        req.extensions_mut()
            .insert(OriginalUri(Uri::from_static("/outer/inner?q=1")));

        let log = parse(&request_to_log(&req, &HeaderPolicy::default()));
        assert_eq!(log["url"], "https://example.com/outer/inner?q=1");
        assert_eq!(log["method"], "POST");
    }

    #[test]
    fn test_url_from_absolute_uri() {
        let req = Request::builder()
            .uri("https://example.org:8443/a")
            .body(Body::empty())
            .unwrap();
        let log = parse(&request_to_log(&req, &HeaderPolicy::default()));
        assert_eq!(log["url"], "https://example.org:8443/a");
    }

    #[test]
    fn test_tagged_prefix() {
        let req = Request::builder().uri("/").body(Body::empty()).unwrap();

        let tagged = RequestContext::new().with_request_tag("req-42");
        assert!(tagged_request_to_log(&req, &tagged).starts_with("req-42: {"));

        let untagged = RequestContext::new();
        assert!(tagged_request_to_log(&req, &untagged).starts_with("unknown: {"));
    }
}
