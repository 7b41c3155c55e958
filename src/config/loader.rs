//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_valid() {
        let config = parse_config("[server]\nbind_address = \"0.0.0.0:9000\"").unwrap();
        assert_eq!(config.server.bind_address, "0.0.0.0:9000");
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("[logger\nlevel = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_error_message() {
        let err = parse_config("[server]\nbind_address = \"nowhere\"").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: invalid bind address \"nowhere\""
        );
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/reqlog.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("reqlog-{}.toml", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[logger]\nlevel = \"debug\"\nsink = \"tracing\"").unwrap();
        drop(file);

        let config = load_config(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(
            config.logger.level,
            Some(crate::logging::MinimumLevel::Name("debug".into()))
        );
    }
}
