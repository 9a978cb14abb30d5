// SPDX-License-Identifier: MIT OR Apache-2.0

//! The per-field error value and the `Resolved` result alias.
//!
//! Resolution failures are not raised; they travel as ordinary values so that a
//! whole tree of results can be assembled before anything is reported. A
//! [`FieldError`] carries the name of the variable that produced it (when
//! known) and every message collected for it, in order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The outcome of resolving one configuration value.
///
/// - `Ok(Some(value))`: the variable resolved to a value (possibly a default)
/// - `Ok(None)`: the variable is absent, has no default and is not required
/// - `Err(FieldError)`: transformation or validation failed
///
/// # Examples
///
/// ```
/// use hexenv::domain::{FieldError, Resolved};
///
/// let ok: Resolved<u32> = Ok(Some(3));
/// let missing: Resolved<u32> = Ok(None);
/// let bad: Resolved<u32> = Err(FieldError::new("PORT", "This value is required"));
///
/// assert!(ok.is_ok() && missing.is_ok() && bad.is_err());
/// ```
pub type Resolved<T> = std::result::Result<Option<T>, FieldError>;

/// An error attached to a single configuration field.
///
/// # Examples
///
/// ```
/// use hexenv::domain::FieldError;
///
/// let error = FieldError::with_messages(
///     "API_KEY",
///     vec!["Value must be exactly 32 characters long".to_string()],
/// );
/// assert_eq!(error.var_name(), Some("API_KEY"));
/// assert_eq!(error.messages().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    var_name: Option<String>,
    messages: Vec<String>,
}

impl FieldError {
    /// Creates an error for `var_name` with a single message.
    pub fn new(var_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            var_name: Some(var_name.into()),
            messages: vec![message.into()],
        }
    }

    /// Creates an error for `var_name` carrying several messages.
    pub fn with_messages(var_name: impl Into<String>, messages: Vec<String>) -> Self {
        Self {
            var_name: Some(var_name.into()),
            messages,
        }
    }

    /// Creates an error that is not tied to any environment variable.
    ///
    /// Useful for values computed by the caller rather than read from the
    /// environment.
    pub fn anonymous(message: impl Into<String>) -> Self {
        Self {
            var_name: None,
            messages: vec![message.into()],
        }
    }

    /// The originating environment variable, if known.
    pub fn var_name(&self) -> Option<&str> {
        self.var_name.as_deref()
    }

    /// The collected messages, in the order they were produced.
    ///
    /// Messages are stored individually, so a message containing `|` or any
    /// other delimiter is never split.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Consumes the error and returns its messages.
    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.var_name {
            write!(f, "{}: ", name)?;
        }
        if self.messages.is_empty() {
            write!(f, "Invalid value (unknown error)")
        } else {
            write!(f, "{}", self.messages.join("; "))
        }
    }
}

impl std::error::Error for FieldError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let error = FieldError::new("PORT", "bad");
        assert_eq!(error.var_name(), Some("PORT"));
        assert_eq!(error.messages(), &["bad".to_string()]);
    }

    #[test]
    fn test_anonymous() {
        let error = FieldError::anonymous("bad");
        assert_eq!(error.var_name(), None);
        assert_eq!(error.to_string(), "bad");
    }

    #[test]
    fn test_display_joins_messages() {
        let error =
            FieldError::with_messages("MY_VAR", vec!["bad".to_string(), "worse".to_string()]);
        assert_eq!(error.to_string(), "MY_VAR: bad; worse");
    }

    #[test]
    fn test_display_without_messages() {
        let error = FieldError::with_messages("MY_VAR", vec![]);
        assert_eq!(error.to_string(), "MY_VAR: Invalid value (unknown error)");
    }

    #[test]
    fn test_pipe_in_message_is_not_split() {
        let error = FieldError::new("MY_VAR", "expected a|b");
        assert_eq!(error.messages().len(), 1);
        assert_eq!(error.messages()[0], "expected a|b");
    }

    #[test]
    fn test_into_messages() {
        let error = FieldError::with_messages("X", vec!["one".to_string(), "two".to_string()]);
        assert_eq!(error.into_messages(), vec!["one", "two"]);
    }
}
