// SPDX-License-Identifier: MIT OR Apache-2.0

//! The immutable configuration produced by validation.
//!
//! A [`FrozenConfig`] mirrors the shape of the [`ConfigNode`](crate::domain::ConfigNode)
//! it was built from: maps stay maps, lists stay lists, and leaves keep their
//! value, their absence, or their error. CSV lists and JSON arrays or objects
//! held by a leaf become list and map nodes too. Every interior node is shared behind
//! an `Arc` and the type exposes no way to mutate it, so cloning a subtree is
//! cheap and no holder can change what another holder sees.

use crate::domain::config_value::ConfigValue;
use crate::domain::errors::{ConfigError, Result};
use crate::domain::field_error::FieldError;
use serde::de::DeserializeOwned;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::sync::Arc;

/// A deeply immutable configuration tree.
///
/// # Examples
///
/// ```
/// use hexenv::config_tree;
/// use hexenv::service::validate;
///
/// let config = validate(config_tree!({ db: { port: 5432 }, hosts: ["a", "b"] })).unwrap();
///
/// assert_eq!(config.lookup("db.port").and_then(|v| v.value()).and_then(|v| v.as_f64()), Some(5432.0));
/// assert!(config.get("hosts").unwrap().is_list());
/// assert_eq!(config.get_str("hosts.1"), Some("b"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FrozenConfig(Node);

#[derive(Clone, Debug, PartialEq)]
enum Node {
    Absent,
    Value(ConfigValue),
    Error(FieldError),
    Map(Arc<[(String, FrozenConfig)]>),
    List(Arc<[FrozenConfig]>),
}

impl FrozenConfig {
    pub(crate) fn new_absent() -> Self {
        FrozenConfig(Node::Absent)
    }

    pub(crate) fn new_value(value: ConfigValue) -> Self {
        FrozenConfig(Node::Value(value))
    }

    pub(crate) fn new_error(error: FieldError) -> Self {
        FrozenConfig(Node::Error(error))
    }

    pub(crate) fn new_map(entries: Vec<(String, FrozenConfig)>) -> Self {
        FrozenConfig(Node::Map(entries.into()))
    }

    pub(crate) fn new_list(items: Vec<FrozenConfig>) -> Self {
        FrozenConfig(Node::List(items.into()))
    }

    /// Returns true if this node is a map.
    pub fn is_map(&self) -> bool {
        matches!(self.0, Node::Map(_))
    }

    /// Returns true if this node is a list.
    pub fn is_list(&self) -> bool {
        matches!(self.0, Node::List(_))
    }

    /// Returns true if this node is an optional value that was not set.
    pub fn is_absent(&self) -> bool {
        matches!(self.0, Node::Absent)
    }

    /// Returns true if this node is a leaf holding an error.
    pub fn is_error(&self) -> bool {
        matches!(self.0, Node::Error(_))
    }

    /// The value at this leaf, if it holds one.
    pub fn value(&self) -> Option<&ConfigValue> {
        match &self.0 {
            Node::Value(v) => Some(v),
            _ => None,
        }
    }

    /// The error at this leaf, if it holds one.
    pub fn error(&self) -> Option<&FieldError> {
        match &self.0 {
            Node::Error(e) => Some(e),
            _ => None,
        }
    }

    /// The child of a map node.
    pub fn get(&self, key: &str) -> Option<&FrozenConfig> {
        match &self.0 {
            Node::Map(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// The child of a list node.
    pub fn at(&self, index: usize) -> Option<&FrozenConfig> {
        match &self.0 {
            Node::List(items) => items.get(index),
            _ => None,
        }
    }

    /// Follows a dotted path such as `db.hosts.0.name`.
    ///
    /// Path segments select map keys, or list indices when the current node is
    /// a list. An empty path returns `self`.
    pub fn lookup(&self, path: &str) -> Option<&FrozenConfig> {
        if path.is_empty() {
            return Some(self);
        }
        path.split('.').try_fold(self, |node, segment| match &node.0 {
            Node::Map(_) => node.get(segment),
            Node::List(_) => segment.parse::<usize>().ok().and_then(|i| node.at(i)),
            _ => None,
        })
    }

    /// The string at `path`, if present and a string.
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.lookup(path)?.value()?.as_str()
    }

    /// The number at `path`, if present and a number.
    pub fn get_f64(&self, path: &str) -> Option<f64> {
        self.lookup(path)?.value()?.as_f64()
    }

    /// The boolean at `path`, if present and a boolean.
    pub fn get_bool(&self, path: &str) -> Option<bool> {
        self.lookup(path)?.value()?.as_bool()
    }

    /// Iterates over the keys of a map node, in order. Empty for other nodes.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries().into_iter().flatten().map(|(k, _)| k)
    }

    /// Iterates over the entries of a map node, if this is one.
    pub fn entries(&self) -> Option<impl Iterator<Item = (&str, &FrozenConfig)>> {
        match &self.0 {
            Node::Map(entries) => Some(entries.iter().map(|(k, v)| (k.as_str(), v))),
            _ => None,
        }
    }

    /// Iterates over the items of a list node, if this is one.
    pub fn items(&self) -> Option<impl Iterator<Item = &FrozenConfig>> {
        match &self.0 {
            Node::List(items) => Some(items.iter()),
            _ => None,
        }
    }

    /// The number of children of a map or list node; zero for leaves.
    pub fn len(&self) -> usize {
        match &self.0 {
            Node::Map(entries) => entries.len(),
            Node::List(items) => items.len(),
            _ => 0,
        }
    }

    /// Returns true if this node has no children.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the first error found in a depth-first walk of this subtree.
    pub fn first_error(&self) -> Option<&FieldError> {
        match &self.0 {
            Node::Error(e) => Some(e),
            Node::Map(entries) => entries.iter().find_map(|(_, v)| v.first_error()),
            Node::List(items) => items.iter().find_map(FrozenConfig::first_error),
            _ => None,
        }
    }

    /// Returns true if any leaf in this subtree holds an error.
    pub fn has_errors(&self) -> bool {
        self.first_error().is_some()
    }

    /// Maps this configuration onto a user-defined type.
    ///
    /// Absent values deserialize as `null`, so optional fields should be
    /// `Option<T>`. A tree that still holds errors is refused with the first
    /// of them.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexenv::config_tree;
    /// use hexenv::service::validate;
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Db { url: String, port: u16 }
    ///
    /// let config = validate(config_tree!({ url: "postgres://db", port: 5432 })).unwrap();
    /// let db: Db = config.deserialize().unwrap();
    /// assert_eq!(db.port, 5432);
    /// ```
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        if let Some(error) = self.first_error() {
            return Err(ConfigError::Field(error.clone()));
        }
        let json = serde_json::to_value(self)?;
        Ok(serde_json::from_value(json)?)
    }
}

impl Serialize for FrozenConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match &self.0 {
            Node::Absent | Node::Error(_) => serializer.serialize_none(),
            Node::Value(value) => serialize_value(value, serializer),
            Node::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries.iter() {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Node::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

// Integral numbers serialize as integers so they deserialize into integer fields.
fn serialize_value<S: Serializer>(
    value: &ConfigValue,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match value {
        ConfigValue::Number(n) if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 => {
            serializer.serialize_i64(*n as i64)
        }
        other => other.serialize(serializer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn sample() -> FrozenConfig {
        FrozenConfig::new_map(vec![
            ("port".to_string(), FrozenConfig::new_value(ConfigValue::from(8080))),
            (
                "db".to_string(),
                FrozenConfig::new_map(vec![(
                    "hosts".to_string(),
                    FrozenConfig::new_list(vec![
                        FrozenConfig::new_value(ConfigValue::from("a")),
                        FrozenConfig::new_value(ConfigValue::from("b")),
                    ]),
                )]),
            ),
            ("token".to_string(), FrozenConfig::new_absent()),
        ])
    }

    #[test]
    fn test_get_and_at() {
        let config = sample();
        assert!(config.is_map());
        let hosts = config.get("db").and_then(|db| db.get("hosts")).unwrap();
        assert!(hosts.is_list());
        assert_eq!(hosts.at(1).and_then(|v| v.value()), Some(&ConfigValue::from("b")));
        assert!(hosts.at(2).is_none());
    }

    #[test]
    fn test_lookup() {
        let config = sample();
        assert_eq!(config.get_str("db.hosts.0"), Some("a"));
        assert_eq!(config.get_f64("port"), Some(8080.0));
        assert!(config.lookup("db.hosts.x").is_none());
        assert!(config.lookup("port.deeper").is_none());
        assert!(config.lookup("token").unwrap().is_absent());
        assert_eq!(config.lookup(""), Some(&config));
    }

    #[test]
    fn test_keys_and_len() {
        let config = sample();
        assert_eq!(config.keys().collect::<Vec<_>>(), vec!["port", "db", "token"]);
        assert_eq!(config.len(), 3);
        assert!(config.get("port").unwrap().is_empty());
    }

    #[test]
    fn test_clone_shares_structure() {
        let config = sample();
        let copy = config.clone();
        assert_eq!(config, copy);
    }

    #[test]
    fn test_first_error() {
        let config = FrozenConfig::new_map(vec![
            ("a".to_string(), FrozenConfig::new_value(ConfigValue::from(1))),
            (
                "b".to_string(),
                FrozenConfig::new_list(vec![FrozenConfig::new_error(FieldError::new("B", "bad"))]),
            ),
        ]);
        assert!(config.has_errors());
        assert_eq!(config.first_error().and_then(|e| e.var_name()), Some("B"));
        assert!(config.lookup("b.0").unwrap().is_error());
        assert!(config.lookup("b.0").unwrap().error().is_some());
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(json, r#"{"port":8080,"db":{"hosts":["a","b"]},"token":null}"#);
    }

    #[test]
    fn test_deserialize_into_struct() {
        #[derive(Deserialize)]
        struct Db {
            hosts: Vec<String>,
        }
        #[derive(Deserialize)]
        struct App {
            port: u16,
            db: Db,
            token: Option<String>,
        }

        let app: App = sample().deserialize().unwrap();
        assert_eq!(app.port, 8080);
        assert_eq!(app.db.hosts, vec!["a", "b"]);
        assert!(app.token.is_none());
    }

    #[test]
    fn test_deserialize_refuses_errors() {
        let config = FrozenConfig::new_map(vec![(
            "a".to_string(),
            FrozenConfig::new_error(FieldError::new("A", "bad")),
        )]);
        let result: Result<serde_json::Value> = config.deserialize();
        assert!(matches!(result, Err(ConfigError::Field(_))));
    }
}
