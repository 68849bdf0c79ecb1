//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check backend names are unique and addresses are usable
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: Config → Result<(), Vec<ValidationError>>
//! - Unrecognized extra-config content is NOT an error; components fall back
//!   to their default behavior instead

use std::collections::HashSet;
use std::str::FromStr;

use axum::http::uri::Authority;
use thiserror::Error;

use crate::config::schema::Config;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("duplicate backend name: {0}")]
    DuplicateBackendName(String),

    #[error("backend '{0}' has an empty address")]
    EmptyAddress(String),

    #[error("backend '{name}' has an invalid address: {address}")]
    InvalidAddress { name: String, address: String },
}

/// Validate a parsed configuration, collecting every error found.
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for backend in &config.backends {
        if !backend.name.is_empty() && !seen.insert(backend.name.as_str()) {
            errors.push(ValidationError::DuplicateBackendName(backend.name.clone()));
        }

        if backend.address.is_empty() {
            errors.push(ValidationError::EmptyAddress(backend.name.clone()));
        } else if Authority::from_str(&backend.address).is_err() {
            errors.push(ValidationError::InvalidAddress {
                name: backend.name.clone(),
                address: backend.address.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::BackendConfig;

    fn backend(name: &str, address: &str) -> BackendConfig {
        BackendConfig {
            name: name.to_string(),
            address: address.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_config_passes() {
        let config = Config {
            backends: vec![
                backend("users", "127.0.0.1:3000"),
                backend("orders", "127.0.0.1:3001"),
            ],
            ..Default::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let config = Config {
            backends: vec![
                backend("users", "127.0.0.1:3000"),
                backend("users", ""),
                backend("orders", "not a host"),
            ],
            ..Default::default()
        };

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::DuplicateBackendName("users".into())));
        assert!(errors.contains(&ValidationError::EmptyAddress("users".into())));
    }

    #[test]
    fn test_unnamed_backends_never_collide() {
        let config = Config {
            backends: vec![backend("", "127.0.0.1:3000"), backend("", "127.0.0.1:3001")],
            ..Default::default()
        };
        assert!(validate_config(&config).is_ok());
    }
}
