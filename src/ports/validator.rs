// SPDX-License-Identifier: MIT OR Apache-2.0

//! Validator trait definition.
//!
//! A validator inspects a transformed value and returns zero or more error
//! messages. An empty [`Messages`] means the value passed.

use crate::domain::ConfigValue;
use std::fmt;
use std::sync::Arc;

/// The messages a validator produced for one value.
///
/// Conversions exist from every shape a check naturally returns: `()` or
/// `None` for success, a single message, or a list of messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Messages(Vec<String>);

impl Messages {
    /// No messages; the value passed.
    pub fn none() -> Self {
        Messages(Vec::new())
    }

    /// Returns true if the value passed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of messages.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the messages.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Consumes this value, returning the messages.
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl IntoIterator for Messages {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<()> for Messages {
    fn from(_: ()) -> Self {
        Messages::none()
    }
}

impl From<String> for Messages {
    fn from(message: String) -> Self {
        Messages(vec![message])
    }
}

impl From<&str> for Messages {
    fn from(message: &str) -> Self {
        Messages(vec![message.to_string()])
    }
}

impl From<Option<String>> for Messages {
    fn from(message: Option<String>) -> Self {
        Messages(message.into_iter().collect())
    }
}

impl From<Option<&str>> for Messages {
    fn from(message: Option<&str>) -> Self {
        Messages(message.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for Messages {
    fn from(messages: Vec<String>) -> Self {
        Messages(messages)
    }
}

impl From<Vec<&str>> for Messages {
    fn from(messages: Vec<&str>) -> Self {
        Messages(messages.into_iter().map(str::to_string).collect())
    }
}

/// A check applied to a transformed value.
///
/// Validators receive `None` when the value is absent, so "required"-style
/// rules can be expressed as validators too.
///
/// # Examples
///
/// ```rust
/// use hexenv::domain::ConfigValue;
/// use hexenv::ports::{Messages, Validator};
///
/// struct Positive;
///
/// impl Validator for Positive {
///     fn check(&self, value: Option<&ConfigValue>) -> Messages {
///         match value.and_then(ConfigValue::as_f64) {
///             Some(n) if n <= 0.0 => "Value must be positive".into(),
///             _ => Messages::none(),
///         }
///     }
/// }
///
/// assert!(Positive.check(Some(&ConfigValue::from(3))).is_empty());
/// assert_eq!(Positive.check(Some(&ConfigValue::from(-1))).len(), 1);
/// ```
pub trait Validator: Send + Sync {
    /// Checks a value and returns the messages describing what is wrong.
    fn check(&self, value: Option<&ConfigValue>) -> Messages;
}

/// A validator that can be shared between value specs.
pub type SharedValidator = Arc<dyn Validator>;

struct FnValidator<F>(F);

impl<F, M> Validator for FnValidator<F>
where
    F: Fn(Option<&ConfigValue>) -> M + Send + Sync,
    M: Into<Messages>,
{
    fn check(&self, value: Option<&ConfigValue>) -> Messages {
        (self.0)(value).into()
    }
}

impl<F> fmt::Debug for FnValidator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnValidator")
    }
}

/// Wraps a closure as a shared validator.
///
/// # Examples
///
/// ```rust
/// use hexenv::domain::ConfigValue;
/// use hexenv::ports::validator_fn;
///
/// let even = validator_fn(|value: Option<&ConfigValue>| match value.and_then(|v| v.as_f64()) {
///     Some(n) if n % 2.0 != 0.0 => Some(format!("{n} is odd")),
///     _ => None,
/// });
/// assert_eq!(even.check(Some(&ConfigValue::from(3))).into_vec(), vec!["3 is odd"]);
/// ```
pub fn validator_fn<F, M>(f: F) -> SharedValidator
where
    F: Fn(Option<&ConfigValue>) -> M + Send + Sync + 'static,
    M: Into<Messages> + 'static,
{
    Arc::new(FnValidator(f))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_from_shapes() {
        assert!(Messages::from(()).is_empty());
        assert!(Messages::from(None::<String>).is_empty());
        assert_eq!(Messages::from("a").into_vec(), vec!["a"]);
        assert_eq!(Messages::from(Some("a".to_string())).len(), 1);
        assert_eq!(Messages::from(vec!["a", "b"]).into_vec(), vec!["a", "b"]);
    }

    #[test]
    fn test_validator_fn_unit_return() {
        let v = validator_fn(|_: Option<&ConfigValue>| ());
        assert!(v.check(None).is_empty());
    }

    #[test]
    fn test_validator_fn_sees_absent() {
        let v = validator_fn(|value: Option<&ConfigValue>| {
            if value.is_none() {
                vec!["missing", "really missing"]
            } else {
                vec![]
            }
        });
        assert_eq!(v.check(None).len(), 2);
        assert!(v.check(Some(&ConfigValue::from("x"))).is_empty());
    }

    #[test]
    fn test_messages_iter() {
        let messages = Messages::from(vec!["a|b".to_string()]);
        assert_eq!(messages.iter().collect::<Vec<_>>(), vec!["a|b"]);
    }
}
