//! Typed error handling for payment facts
//!
//! Errors are grouped by category so that callers can match on the
//! specific failure instead of dealing with a generic `anyhow::Error`.
//!
//! # Error Categories
//!
//! - [`RequestError`]: Errors raised while populating a validation request
//! - [`ConfigError`]: Errors related to rule configuration parsing and validation
//!
//! Note that a rule *rejecting* a request is not an error: rejections are
//! recorded on the request itself (see [`crate::core::request`]).
//!
//! # Example
//!
//! ```rust
//! use payment_facts::prelude::*;
//!
//! let mut request = BicValidationRequest::new();
//! match request.set_bic(None) {
//!     Err(RequestError::MissingValue { attribute }) => {
//!         assert_eq!(attribute, PaymentAttribute::Bic);
//!     }
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use crate::core::attribute::PaymentAttribute;
use thiserror::Error;

/// The main error type for the crate
///
/// Each variant wraps a more specific error type for that category.
#[derive(Debug, Error)]
pub enum FactsError {
    /// Request population errors
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Internal errors (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FactsError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            FactsError::Request(e) => e.error_code(),
            FactsError::Config(e) => e.error_code(),
            FactsError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors raised while populating a validation request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// An absent value was supplied where the attribute requires one
    #[error("A value is required for payment attribute '{attribute}'")]
    MissingValue { attribute: PaymentAttribute },

    /// A payment attribute name did not match any known attribute
    #[error("Unknown payment attribute: '{value}'")]
    UnknownAttribute { value: String },
}

impl RequestError {
    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::MissingValue { .. } => "MISSING_VALUE",
            RequestError::UnknownAttribute { .. } => "UNKNOWN_ATTRIBUTE",
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to rule configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration
    #[error("Failed to parse config{location}: {message}", location = file_suffix(.file))]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    #[error("Invalid value for field '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// IO error while reading configuration
    #[error("IO error: {message}")]
    IoError { message: String },
}

fn file_suffix(file: &Option<String>) -> String {
    file.as_ref()
        .map(|f| format!(" file '{}'", f))
        .unwrap_or_default()
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::InvalidValue { .. } => "CONFIG_INVALID_VALUE",
            ConfigError::FileNotFound { .. } => "CONFIG_FILE_NOT_FOUND",
            ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<std::io::Error> for FactsError {
    fn from(err: std::io::Error) -> Self {
        FactsError::Config(ConfigError::IoError {
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for FactsError {
    fn from(err: serde_yaml::Error) -> Self {
        FactsError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

impl From<validator::ValidationErrors> for FactsError {
    fn from(errors: validator::ValidationErrors) -> Self {
        // Report the first offending field; the full set is in the message
        let field = first_invalid_path(&errors, "")
            .filter(|path| !path.is_empty())
            .unwrap_or_else(|| "config".to_string());
        FactsError::Config(ConfigError::InvalidValue {
            field,
            message: errors.to_string(),
        })
    }
}

/// Dotted path of the first invalid field, in key order
///
/// Struct-level (schema) errors are reported against the struct's own path.
fn first_invalid_path(errors: &validator::ValidationErrors, prefix: &str) -> Option<String> {
    use validator::ValidationErrorsKind;

    let mut entries: Vec<_> = errors.errors().iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    for (key, kind) in entries {
        let path = match (prefix, &**key) {
            (_, "__all__") => prefix.to_string(),
            ("", key) => key.to_string(),
            (prefix, key) => format!("{}.{}", prefix, key),
        };
        let found = match kind {
            ValidationErrorsKind::Field(_) => Some(path),
            ValidationErrorsKind::Struct(inner) => first_invalid_path(inner, &path),
            ValidationErrorsKind::List(items) => items.iter().find_map(|(index, inner)| {
                first_invalid_path(inner, &format!("{}[{}]", path, index))
            }),
        };
        if found.is_some() {
            return found;
        }
    }
    None
}

/// Convert from anyhow::Error for callers mixing both styles
impl From<anyhow::Error> for FactsError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<FactsError>() {
            Ok(facts_err) => facts_err,
            Err(err) => FactsError::Internal(err.to_string()),
        }
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for payment facts operations
pub type FactsResult<T> = Result<T, FactsError>;

// =============================================================================
// Tests
// =============================================================================
