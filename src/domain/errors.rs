// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! Failures that happen while resolving a single variable are *values*
//! ([`FieldError`](crate::domain::FieldError)) and never show up here. This
//! module holds the errors returned through `Result`: the aggregated report
//! produced by [`validate`](crate::service::validate), conversion failures when
//! reading typed values back out of a [`ConfigValue`](crate::domain::ConfigValue),
//! and deserialization failures when mapping a frozen tree onto a user type.

use crate::domain::field_error::FieldError;
use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// The main error type for configuration operations.
///
/// It is marked as `#[non_exhaustive]` to allow for future additions without
/// breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use hexenv::domain::errors::ConfigError;
///
/// let error = ConfigError::InvalidConfiguration {
///     errors: vec!["port (PORT): This value is required".to_string()],
/// };
/// assert!(error.to_string().contains("* port (PORT)"));
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// One or more fields of a configuration tree failed to resolve.
    ///
    /// Each entry is one formatted report line (or block, for fields with
    /// several messages), in tree order.
    #[error("Invalid configuration: \n\n  * {}", .errors.join("\n  * "))]
    InvalidConfiguration {
        /// Formatted report entries, one per failing field
        errors: Vec<String>,
    },

    /// A single resolved value carried an error.
    #[error(transparent)]
    Field(#[from] FieldError),

    /// Failed to convert a configuration value to the requested type.
    #[error(
        "Failed to convert configuration value for key '{key}' to type {target_type}: {source}"
    )]
    TypeConversionError {
        /// The key being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The value at a key does not have the requested shape.
    #[error("Configuration value for key '{key}' is not {expected}")]
    UnexpectedType {
        /// The key being read
        key: String,
        /// A short description of the expected shape
        expected: String,
    },

    /// A pattern given to the `matches` validator is not a valid regex.
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The rejected pattern
        pattern: String,
        /// The underlying regex error
        source: regex::Error,
    },

    /// A frozen configuration could not be mapped onto the requested type.
    #[error("Failed to deserialize configuration: {0}")]
    Deserialize(#[from] serde_json::Error),
}

impl ConfigError {
    /// Creates a TypeConversionError from a ParseIntError.
    pub fn from_parse_int_error(key: String, err: ParseIntError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "integer".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from a ParseFloatError.
    pub fn from_parse_float_error(key: String, err: ParseFloatError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "float".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates an UnexpectedType error.
    pub fn unexpected_type(key: impl Into<String>, expected: impl Into<String>) -> Self {
        ConfigError::UnexpectedType {
            key: key.into(),
            expected: expected.into(),
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_configuration_single() {
        let error = ConfigError::InvalidConfiguration {
            errors: vec!["a.b (MY_VAR): bad".to_string()],
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration: \n\n  * a.b (MY_VAR): bad"
        );
    }

    #[test]
    fn test_invalid_configuration_multiple() {
        let error = ConfigError::InvalidConfiguration {
            errors: vec!["a: bad".to_string(), "b: worse".to_string()],
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration: \n\n  * a: bad\n  * b: worse"
        );
    }

    #[test]
    fn test_field_error_conversion() {
        let field = FieldError::new("PORT", "This value is required");
        let error = ConfigError::from(field);
        assert!(matches!(error, ConfigError::Field(_)));
        assert!(error.to_string().contains("PORT"));
    }

    #[test]
    fn test_type_conversion_error() {
        let source_error = "invalid value".parse::<i32>().unwrap_err();
        let error = ConfigError::TypeConversionError {
            key: "test.key".to_string(),
            target_type: "i32".to_string(),
            source: Box::new(source_error),
        };
        assert!(error.to_string().contains("test.key"));
        assert!(error.to_string().contains("i32"));
    }

    #[test]
    fn test_from_parse_int_error() {
        let parse_err = "not_a_number".parse::<i32>().unwrap_err();
        let error = ConfigError::from_parse_int_error("test.key".to_string(), parse_err);
        assert!(matches!(error, ConfigError::TypeConversionError { .. }));
        assert!(error.to_string().contains("integer"));
    }

    #[test]
    fn test_from_parse_float_error() {
        let parse_err = "not_a_float".parse::<f64>().unwrap_err();
        let error = ConfigError::from_parse_float_error("test.key".to_string(), parse_err);
        assert!(error.to_string().contains("float"));
    }

    #[test]
    fn test_unexpected_type() {
        let error = ConfigError::unexpected_type("db.port", "a number");
        assert_eq!(
            error.to_string(),
            "Configuration value for key 'db.port' is not a number"
        );
    }

    #[test]
    fn test_deserialize_error_conversion() {
        let json_err = serde_json::from_str::<u8>("\"x\"").unwrap_err();
        let error = ConfigError::from(json_err);
        assert!(matches!(error, ConfigError::Deserialize(_)));
    }
}
