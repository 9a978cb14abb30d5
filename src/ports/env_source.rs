// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment source trait definition.
//!
//! This module defines the `EnvSource` trait, the port through which the
//! resolver reads raw variable values. The process environment is one
//! implementation; an in-memory map is another.

/// A read-only, flat key-value store of raw environment strings.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a resolver can be shared.
///
/// # Examples
///
/// ```rust
/// use hexenv::ports::EnvSource;
///
/// struct Fixed;
///
/// impl EnvSource for Fixed {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn get_raw(&self, name: &str) -> Option<String> {
///         (name == "PORT").then(|| "8080".to_string())
///     }
/// }
///
/// let source = Fixed;
/// assert_eq!(source.get_raw("PORT").as_deref(), Some("8080"));
/// assert!(!source.is_defined("HOST"));
/// ```
pub trait EnvSource: Send + Sync {
    /// Returns the name of this source.
    ///
    /// This name is used for logging and debugging. It should be a short
    /// identifier like "env" or "map".
    fn name(&self) -> &str;

    /// Returns the raw value of a variable, or `None` if it is not set.
    ///
    /// An empty string is a defined value and must be returned as
    /// `Some(String::new())`.
    fn get_raw(&self, name: &str) -> Option<String>;

    /// Returns true if the variable is set, even to an empty string.
    fn is_defined(&self, name: &str) -> bool {
        self.get_raw(name).is_some()
    }
}
