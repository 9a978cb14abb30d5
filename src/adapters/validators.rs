// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bundled validators.
//!
//! The string validators only look at non-empty [`ConfigValue::String`]
//! values. An absent value, an empty string, or a value of another type always
//! passes them; combine with `required` to reject absence.

use crate::domain::{ConfigError, ConfigValue, Result};
use crate::ports::{validator_fn, SharedValidator};
use regex::Regex;

const REQUIRED_MESSAGE: &str = "This value is required";

fn non_empty_str(value: Option<&ConfigValue>) -> Option<&str> {
    value.and_then(ConfigValue::as_str).filter(|s| !s.is_empty())
}

/// Rejects strings whose length is not exactly `len` characters.
///
/// # Examples
///
/// ```rust
/// use hexenv::adapters::validators::exact_len;
/// use hexenv::domain::ConfigValue;
///
/// let check = exact_len(3);
/// assert!(check.check(Some(&ConfigValue::from("abc"))).is_empty());
/// assert_eq!(
///     check.check(Some(&ConfigValue::from("ab"))).into_vec(),
///     vec!["Value must be exactly 3 characters long"]
/// );
/// ```
pub fn exact_len(len: usize) -> SharedValidator {
    validator_fn(move |value: Option<&ConfigValue>| {
        non_empty_str(value)
            .filter(|s| s.chars().count() != len)
            .map(|_| format!("Value must be exactly {} characters long", len))
    })
}

/// Rejects strings shorter than `min` characters.
pub fn min_len(min: usize) -> SharedValidator {
    validator_fn(move |value: Option<&ConfigValue>| {
        non_empty_str(value)
            .filter(|s| s.chars().count() < min)
            .map(|_| format!("Value must be at least {} characters long", min))
    })
}

/// Rejects strings longer than `max` characters.
pub fn max_len(max: usize) -> SharedValidator {
    validator_fn(move |value: Option<&ConfigValue>| {
        non_empty_str(value)
            .filter(|s| s.chars().count() > max)
            .map(|_| format!("Value must be at most {} characters long", max))
    })
}

/// Rejects strings in which `pattern` does not match.
///
/// The pattern is unanchored; use `^` and `$` to match the whole value.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidPattern`] if `pattern` is not a valid regex.
///
/// # Examples
///
/// ```rust
/// use hexenv::adapters::validators::matches;
/// use hexenv::domain::ConfigValue;
///
/// # fn main() -> hexenv::domain::Result<()> {
/// let check = matches("^[a-z]+$")?;
/// assert!(check.check(Some(&ConfigValue::from("abc"))).is_empty());
/// assert_eq!(
///     check.check(Some(&ConfigValue::from("ABC"))).into_vec(),
///     vec!["Value must match pattern '^[a-z]+$'"]
/// );
/// # Ok(())
/// # }
/// ```
pub fn matches(pattern: &str) -> Result<SharedValidator> {
    let regex = Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;
    Ok(matches_regex(regex))
}

/// Rejects strings in which an already compiled `regex` does not match.
pub fn matches_regex(regex: Regex) -> SharedValidator {
    validator_fn(move |value: Option<&ConfigValue>| {
        non_empty_str(value)
            .filter(|s| !regex.is_match(s))
            .map(|_| format!("Value must match pattern '{}'", regex.as_str()))
    })
}

/// Rejects strings that are not one of `options`.
///
/// # Examples
///
/// ```rust
/// use hexenv::adapters::validators::one_of;
/// use hexenv::domain::ConfigValue;
///
/// let check = one_of(["dev", "prod"]);
/// assert!(check.check(Some(&ConfigValue::from("dev"))).is_empty());
/// assert_eq!(
///     check.check(Some(&ConfigValue::from("qa"))).into_vec(),
///     vec!["Value must be one of 'dev', 'prod'"]
/// );
/// ```
pub fn one_of<I, S>(options: I) -> SharedValidator
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let options: Vec<String> = options.into_iter().map(Into::into).collect();
    let message = format!("Value must be one of '{}'", options.join("', '"));
    validator_fn(move |value: Option<&ConfigValue>| {
        non_empty_str(value)
            .filter(|s| !options.iter().any(|o| o == *s))
            .map(|_| message.clone())
    })
}

/// Rejects strings that do not start with `http://` or `https://`.
pub fn http_host() -> SharedValidator {
    validator_fn(|value: Option<&ConfigValue>| {
        non_empty_str(value)
            .filter(|s| !(s.starts_with("http://") || s.starts_with("https://")))
            .map(|_| "Value must start with http:// or https://")
    })
}

/// Rejects an absent value.
///
/// This is the check a value spec marked as required runs first. It is not
/// exported; use [`required_if`] or mark the spec as required.
pub(crate) fn required() -> SharedValidator {
    validator_fn(|value: Option<&ConfigValue>| value.is_none().then_some(REQUIRED_MESSAGE))
}

/// Rejects an absent value when `condition` holds.
///
/// # Examples
///
/// ```rust
/// use hexenv::adapters::validators::required_if;
///
/// let use_tls = true;
/// let check = required_if(use_tls);
/// assert_eq!(check.check(None).into_vec(), vec!["This value is required"]);
/// assert!(required_if(false).check(None).is_empty());
/// ```
pub fn required_if(condition: bool) -> SharedValidator {
    validator_fn(move |value: Option<&ConfigValue>| {
        (condition && value.is_none()).then_some(REQUIRED_MESSAGE)
    })
}

/// Rejects an absent value when `env` is one of `required_envs`.
///
/// # Examples
///
/// ```rust
/// use hexenv::adapters::validators::required_for_envs;
///
/// let check = required_for_envs("prod", ["staging", "prod"]);
/// assert_eq!(check.check(None).len(), 1);
/// assert!(required_for_envs("dev", ["staging", "prod"]).check(None).is_empty());
/// ```
pub fn required_for_envs<I, S>(env: &str, required_envs: I) -> SharedValidator
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let applies = required_envs.into_iter().any(|e| e.as_ref() == env);
    required_if(applies)
}
