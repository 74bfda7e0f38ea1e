//! Config validation.

use crate::config::AppConfig;
use crate::error::ConfigError;

/// PostgreSQL truncates identifiers longer than this.
const MAX_IDENTIFIER_LEN: usize = 63;

pub fn is_plain_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    s.len() <= MAX_IDENTIFIER_LEN
        && (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::Validation("PORT must be non-zero".into()));
    }
    if config.server.body_limit_bytes == 0 {
        return Err(ConfigError::Validation("BODY_LIMIT_BYTES must be at least 1".into()));
    }
    if !is_plain_identifier(&config.database.schema) {
        return Err(ConfigError::Validation(format!(
            "DB_SCHEMA '{}' is not a valid identifier",
            config.database.schema
        )));
    }
    if config.database.max_connections == 0 {
        return Err(ConfigError::Validation("DB_MAX_CONNECTIONS must be at least 1".into()));
    }
    Ok(())
}
