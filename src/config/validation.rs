//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Header names must be valid HTTP header names
//! - Bind address must be a socket address
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - An unknown level name is not an error: the logger compares its raw value,
//!   so it is only reported
//! - Validation is pure apart from that report

use std::net::SocketAddr;

use axum::http::HeaderName;
use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::logging::level::rank_of;
use crate::logging::MinimumLevel;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid header name {name:?} in headers.{list}")]
    InvalidHeaderName { list: &'static str, name: String },

    #[error("invalid bind address {0:?}")]
    InvalidBindAddress(String),
}

/// Check `config`, collecting every problem.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (list, names) in [("log", &config.headers.log), ("scrub", &config.headers.scrub)] {
        for name in names {
            if HeaderName::from_bytes(name.as_bytes()).is_err() {
                errors.push(ValidationError::InvalidHeaderName {
                    list,
                    name: name.clone(),
                });
            }
        }
    }

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.server.bind_address.clone(),
        ));
    }

    if let Some(MinimumLevel::Name(name)) = &config.logger.level {
        if rank_of(name).is_none() {
            tracing::warn!(level = %name, "Unknown log level name, its raw value is used as the rank");
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
