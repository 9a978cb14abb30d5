// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transformer trait definition.
//!
//! A transformer turns the raw string read from the environment (or its
//! absence) into a [`ConfigValue`]. It may report a failure by returning a
//! [`FieldError`](crate::domain::FieldError); that error is final and is
//! neither replaced by a default nor passed to validators.

use crate::domain::{ConfigValue, Resolved};
use std::fmt;
use std::sync::Arc;

/// A parser from raw environment strings to configuration values.
///
/// Returning `Ok(None)` means "absent", which lets a default apply. Bundled
/// transformers treat an empty string as absent.
///
/// # Examples
///
/// ```rust
/// use hexenv::domain::{ConfigValue, FieldError, Resolved};
/// use hexenv::ports::Transformer;
///
/// struct Upper;
///
/// impl Transformer for Upper {
///     fn transform(&self, raw: Option<&str>, var_name: &str) -> Resolved<ConfigValue> {
///         match raw {
///             None | Some("") => Ok(None),
///             Some(s) if s.is_ascii() => Ok(Some(ConfigValue::from(s.to_ascii_uppercase()))),
///             Some(_) => Err(FieldError::new(var_name, "Only ASCII is supported")),
///         }
///     }
/// }
///
/// assert_eq!(Upper.transform(Some("abc"), "X").unwrap(), Some(ConfigValue::from("ABC")));
/// ```
pub trait Transformer: Send + Sync {
    /// Transforms a raw value read from `var_name`.
    fn transform(&self, raw: Option<&str>, var_name: &str) -> Resolved<ConfigValue>;
}

/// A transformer that can be shared between value specs.
pub type SharedTransformer = Arc<dyn Transformer>;

struct FnTransformer<F>(F);

impl<F> Transformer for FnTransformer<F>
where
    F: Fn(Option<&str>, &str) -> Resolved<ConfigValue> + Send + Sync,
{
    fn transform(&self, raw: Option<&str>, var_name: &str) -> Resolved<ConfigValue> {
        (self.0)(raw, var_name)
    }
}

impl<F> fmt::Debug for FnTransformer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnTransformer")
    }
}

/// Wraps a closure as a shared transformer.
///
/// # Examples
///
/// ```rust
/// use hexenv::domain::ConfigValue;
/// use hexenv::ports::transformer_fn;
///
/// let length = transformer_fn(|raw, _name| Ok(raw.map(|s| ConfigValue::from(s.len() as u64))));
/// assert_eq!(length.transform(Some("abcd"), "X").unwrap(), Some(ConfigValue::from(4)));
/// ```
pub fn transformer_fn<F>(f: F) -> SharedTransformer
where
    F: Fn(Option<&str>, &str) -> Resolved<ConfigValue> + Send + Sync + 'static,
{
    Arc::new(FnTransformer(f))
}
