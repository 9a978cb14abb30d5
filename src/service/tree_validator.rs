// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tree validation.
//!
//! [`report`] walks a [`ConfigNode`] tree once, top-down, collects a formatted
//! line for every error leaf, and freezes the tree on the way back up.
//! [`validate`] does the same but turns any collected error into
//! [`ConfigError::InvalidConfiguration`].

use crate::domain::{ConfigError, ConfigNode, ConfigValue, FieldError, FrozenConfig, Result};
use serde_json::Value;

const UNKNOWN_ERROR: &str = "Invalid value (unknown error)";

/// The outcome of [`report`].
///
/// Both variants carry the frozen tree. In the error variant the failing
/// leaves still hold their [`FieldError`]s, so code that reads the tree anyway
/// must check [`FrozenConfig::is_error`] on the values it uses.
#[derive(Clone, Debug, PartialEq)]
pub enum ValidationResult {
    /// No leaf held an error.
    Success(FrozenConfig),
    /// At least one leaf held an error.
    Error {
        /// One formatted entry per failing leaf, in tree order
        errors: Vec<String>,
        /// The frozen tree, errors included
        value: FrozenConfig,
    },
}

impl ValidationResult {
    /// Returns true for the success variant.
    pub fn is_success(&self) -> bool {
        matches!(self, ValidationResult::Success(_))
    }

    /// The collected error entries; empty on success.
    pub fn errors(&self) -> &[String] {
        match self {
            ValidationResult::Success(_) => &[],
            ValidationResult::Error { errors, .. } => errors,
        }
    }

    /// The frozen tree.
    pub fn value(&self) -> &FrozenConfig {
        match self {
            ValidationResult::Success(value) | ValidationResult::Error { value, .. } => value,
        }
    }

    /// Consumes the result and returns the frozen tree, errors and all.
    pub fn into_value(self) -> FrozenConfig {
        match self {
            ValidationResult::Success(value) | ValidationResult::Error { value, .. } => value,
        }
    }

    /// Converts into the fail-fast form returned by [`validate`].
    pub fn into_result(self) -> Result<FrozenConfig> {
        match self {
            ValidationResult::Success(value) => Ok(value),
            ValidationResult::Error { errors, .. } => {
                Err(ConfigError::InvalidConfiguration { errors })
            }
        }
    }
}

/// Walks a tree, collecting errors and freezing it. Never fails.
///
/// # Examples
///
/// ```rust
/// use hexenv::config_tree;
/// use hexenv::domain::FieldError;
/// use hexenv::service::report;
///
/// let result = report(config_tree!({
///     port: 3000,
///     db: { url: FieldError::new("DB_URL", "This value is required") },
/// }));
///
/// assert!(!result.is_success());
/// assert_eq!(result.errors(), ["db.url (DB_URL): This value is required"]);
/// assert_eq!(result.value().get_f64("port"), Some(3000.0));
/// ```
pub fn report(tree: ConfigNode) -> ValidationResult {
    let mut path = Vec::new();
    let mut errors = Vec::new();
    let value = freeze(tree, &mut path, &mut errors);

    tracing::debug!("Validated configuration tree: {} error(s)", errors.len());

    if errors.is_empty() {
        ValidationResult::Success(value)
    } else {
        ValidationResult::Error { errors, value }
    }
}

/// Walks a tree and returns the frozen result, or every error at once.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidConfiguration`] listing every failing leaf if
/// any leaf holds an error.
///
/// # Examples
///
/// ```rust
/// use hexenv::config_tree;
/// use hexenv::domain::{ConfigError, FieldError};
/// use hexenv::service::validate;
///
/// let config = validate(config_tree!({ port: 3000 })).unwrap();
/// assert_eq!(config.get_f64("port"), Some(3000.0));
///
/// let err = validate(config_tree!({ a: FieldError::new("A", "bad") })).unwrap_err();
/// assert_eq!(err.to_string(), "Invalid configuration: \n\n  * a (A): bad");
/// ```
pub fn validate(tree: ConfigNode) -> Result<FrozenConfig> {
    report(tree).into_result()
}

fn freeze(node: ConfigNode, path: &mut Vec<String>, errors: &mut Vec<String>) -> FrozenConfig {
    match node {
        ConfigNode::Leaf(Ok(Some(value))) => freeze_value(value),
        ConfigNode::Leaf(Ok(None)) => FrozenConfig::new_absent(),
        ConfigNode::Leaf(Err(error)) => {
            errors.push(format_error(&path.join("."), &error));
            FrozenConfig::new_error(error)
        }
        ConfigNode::Map(entries) => {
            let mut frozen = Vec::with_capacity(entries.len());
            for (key, child) in entries {
                path.push(key.clone());
                let child = freeze(child, path, errors);
                path.pop();
                frozen.push((key, child));
            }
            FrozenConfig::new_map(frozen)
        }
        ConfigNode::List(items) => {
            let mut frozen = Vec::with_capacity(items.len());
            for (index, child) in items.into_iter().enumerate() {
                path.push(index.to_string());
                frozen.push(freeze(child, path, errors));
                path.pop();
            }
            FrozenConfig::new_list(frozen)
        }
    }
}

// Lists and JSON containers become list and map nodes, like literal ones.
fn freeze_value(value: ConfigValue) -> FrozenConfig {
    match value {
        ConfigValue::List(items) => FrozenConfig::new_list(
            items
                .into_iter()
                .map(|item| FrozenConfig::new_value(ConfigValue::String(item)))
                .collect(),
        ),
        ConfigValue::Json(json @ (Value::Array(_) | Value::Object(_))) => freeze_json(json),
        other => FrozenConfig::new_value(other),
    }
}

fn freeze_json(json: Value) -> FrozenConfig {
    match json {
        Value::Null => FrozenConfig::new_absent(),
        Value::Bool(b) => FrozenConfig::new_value(ConfigValue::Bool(b)),
        Value::String(s) => FrozenConfig::new_value(ConfigValue::String(s)),
        Value::Number(n) => match n.as_f64() {
            Some(f) => FrozenConfig::new_value(ConfigValue::Number(f)),
            None => FrozenConfig::new_value(ConfigValue::Json(Value::Number(n))),
        },
        Value::Array(items) => FrozenConfig::new_list(items.into_iter().map(freeze_json).collect()),
        Value::Object(entries) => FrozenConfig::new_map(
            entries
                .into_iter()
                .map(|(key, child)| (key, freeze_json(child)))
                .collect(),
        ),
    }
}

fn format_error(path: &str, error: &FieldError) -> String {
    let var_name = match (path.is_empty(), error.var_name()) {
        (_, None) => String::new(),
        (true, Some(name)) => format!("({})", name),
        (false, Some(name)) => format!(" ({})", name),
    };

    match error.messages() {
        [] => format!("{}{}: {}", path, var_name, UNKNOWN_ERROR),
        [message] => format!("{}{}: {}", path, var_name, message),
        messages => format!("{}{}:\n    * {}", path, var_name, messages.join("\n    * ")),
    }
}
