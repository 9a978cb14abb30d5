// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration value type with type-safe conversions.
//!
//! This module provides the `ConfigValue` type, the dynamic value held at the
//! leaves of a configuration tree. Transformers produce it, validators inspect
//! it, and typed accessors convert it back into ordinary Rust types.

use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A transformed configuration value.
///
/// The variant is decided by the transformer that produced it: the string
/// transformer yields [`ConfigValue::String`], the number transformer
/// [`ConfigValue::Number`], and so on. Defaults supplied by the caller can be
/// any variant.
///
/// # Examples
///
/// ```
/// use hexenv::domain::ConfigValue;
///
/// let value = ConfigValue::from(42);
/// assert_eq!(value.as_f64(), Some(42.0));
/// assert_eq!(value.as_i64("port").unwrap(), 42);
///
/// let value = ConfigValue::from("postgres://localhost");
/// assert_eq!(value.as_str(), Some("postgres://localhost"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// A boolean flag.
    Bool(bool),
    /// A number. All numbers are stored as `f64`.
    Number(f64),
    /// A string.
    String(String),
    /// A list of strings, as produced by the CSV transformer.
    List(Vec<String>),
    /// Arbitrary structured data, as produced by the JSON transformer.
    Json(serde_json::Value),
}

impl ConfigValue {
    /// Returns the value as a string slice, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as a number, if it is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ConfigValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the value as a boolean, if it is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the value as a list of strings, if it is a list.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            ConfigValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the value as structured JSON data, if it is JSON.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            ConfigValue::Json(v) => Some(v),
            _ => None,
        }
    }

    /// Returns a short name for the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConfigValue::Bool(_) => "boolean",
            ConfigValue::Number(_) => "number",
            ConfigValue::String(_) => "string",
            ConfigValue::List(_) => "list",
            ConfigValue::Json(_) => "json",
        }
    }

    /// Converts the value to an `f64`.
    ///
    /// Numbers convert directly and strings are parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexenv::domain::ConfigValue;
    ///
    /// let value = ConfigValue::from("3.14");
    /// assert_eq!(value.to_f64("ratio").unwrap(), 3.14);
    /// ```
    pub fn to_f64(&self, key: &str) -> Result<f64> {
        match self {
            ConfigValue::Number(n) => Ok(*n),
            ConfigValue::String(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|e| ConfigError::from_parse_float_error(key.to_string(), e)),
            _ => Err(ConfigError::unexpected_type(key, "a number")),
        }
    }

    /// Converts the value to an `i64`.
    ///
    /// Numbers must be integral and in range; strings are parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexenv::domain::ConfigValue;
    ///
    /// assert_eq!(ConfigValue::from(-7).as_i64("offset").unwrap(), -7);
    /// assert!(ConfigValue::from(1.5).as_i64("offset").is_err());
    /// ```
    pub fn as_i64(&self, key: &str) -> Result<i64> {
        match self {
            ConfigValue::Number(n)
                if n.fract() == 0.0 && *n >= i64::MIN as f64 && *n < i64::MAX as f64 =>
            {
                Ok(*n as i64)
            }
            ConfigValue::String(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e)),
            _ => Err(ConfigError::unexpected_type(key, "an integer")),
        }
    }

    /// Converts the value to a `u64`.
    pub fn as_u64(&self, key: &str) -> Result<u64> {
        let n = self.as_i64(key)?;
        u64::try_from(n).map_err(|e| ConfigError::TypeConversionError {
            key: key.to_string(),
            target_type: "u64".to_string(),
            source: Box::new(e),
        })
    }

    /// Converts the value to a `u16`, which is handy for ports.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexenv::domain::ConfigValue;
    ///
    /// assert_eq!(ConfigValue::from(8080).as_u16("port").unwrap(), 8080);
    /// assert!(ConfigValue::from(70000).as_u16("port").is_err());
    /// ```
    pub fn as_u16(&self, key: &str) -> Result<u16> {
        let n = self.as_i64(key)?;
        u16::try_from(n).map_err(|e| ConfigError::TypeConversionError {
            key: key.to_string(),
            target_type: "u16".to_string(),
            source: Box::new(e),
        })
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<f64> for ConfigValue {
    fn from(n: f64) -> Self {
        ConfigValue::Number(n)
    }
}

impl From<f32> for ConfigValue {
    fn from(n: f32) -> Self {
        ConfigValue::Number(f64::from(n))
    }
}

impl From<i32> for ConfigValue {
    fn from(n: i32) -> Self {
        ConfigValue::Number(f64::from(n))
    }
}

impl From<i64> for ConfigValue {
    fn from(n: i64) -> Self {
        ConfigValue::Number(n as f64)
    }
}

impl From<u16> for ConfigValue {
    fn from(n: u16) -> Self {
        ConfigValue::Number(f64::from(n))
    }
}

impl From<u32> for ConfigValue {
    fn from(n: u32) -> Self {
        ConfigValue::Number(f64::from(n))
    }
}

impl From<u64> for ConfigValue {
    fn from(n: u64) -> Self {
        ConfigValue::Number(n as f64)
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl From<Vec<String>> for ConfigValue {
    fn from(items: Vec<String>) -> Self {
        ConfigValue::List(items)
    }
}

impl From<Vec<&str>> for ConfigValue {
    fn from(items: Vec<&str>) -> Self {
        ConfigValue::List(items.into_iter().map(String::from).collect())
    }
}

impl From<serde_json::Value> for ConfigValue {
    fn from(v: serde_json::Value) -> Self {
        ConfigValue::Json(v)
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Number(n) => write!(f, "{}", n),
            ConfigValue::String(s) => write!(f, "{}", s),
            ConfigValue::List(items) => write!(f, "{}", items.join(",")),
            ConfigValue::Json(v) => write!(f, "{}", v),
        }
    }
}
