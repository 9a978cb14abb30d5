// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory environment source adapter.
//!
//! `MapEnv` serves raw values from a map instead of the process environment.
//! It is how tests exercise resolution without touching global state, and how
//! embedding applications feed values they obtained elsewhere.

use crate::ports::EnvSource;
use std::collections::HashMap;

/// Environment source backed by an in-memory map.
///
/// # Examples
///
/// ```rust
/// use hexenv::adapters::MapEnv;
/// use hexenv::ports::EnvSource;
///
/// let source = MapEnv::new().with("PORT", "8080").with("EMPTY", "");
///
/// assert_eq!(source.get_raw("PORT").as_deref(), Some("8080"));
/// assert!(source.is_defined("EMPTY"));
/// assert!(!source.is_defined("HOST"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    values: HashMap<String, String>,
}

impl MapEnv {
    /// Creates an empty source where every variable is unset.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Creates a source with pre-populated values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hexenv::adapters::MapEnv;
    /// use std::collections::HashMap;
    ///
    /// let mut values = HashMap::new();
    /// values.insert("DB_URL".to_string(), "postgres://localhost".to_string());
    ///
    /// let source = MapEnv::with_values(values);
    /// assert_eq!(source.len(), 1);
    /// ```
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Returns this source with one more variable set.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets a variable, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Unsets a variable, returning its previous value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }

    /// The number of variables set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no variable is set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn name(&self) -> &str {
        "map"
    }

    fn get_raw(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}
