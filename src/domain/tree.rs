// SPDX-License-Identifier: MIT OR Apache-2.0

//! The configuration tree built by callers before validation.
//!
//! A [`ConfigNode`] is either a leaf holding one resolved value, an ordered map
//! of named children, or a list of children. Trees are usually written with
//! the [`config_tree!`](crate::config_tree) macro and handed straight to
//! [`validate`](crate::service::validate).

use crate::domain::config_value::ConfigValue;
use crate::domain::field_error::{FieldError, Resolved};
use crate::domain::frozen::FrozenConfig;

/// A node of an unvalidated configuration tree.
///
/// Map children keep their insertion order, which is also the order in which
/// errors are reported.
///
/// # Examples
///
/// ```
/// use hexenv::domain::{ConfigNode, ConfigValue};
///
/// let tree = ConfigNode::map([
///     ("port", ConfigNode::from(8080)),
///     ("hosts", ConfigNode::list(["a", "b"])),
/// ]);
/// assert!(!tree.has_errors());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigNode {
    /// A single resolved value.
    Leaf(Resolved<ConfigValue>),
    /// Named children, in insertion order.
    Map(Vec<(String, ConfigNode)>),
    /// Indexed children.
    List(Vec<ConfigNode>),
}

impl ConfigNode {
    /// Builds a map node. A repeated key replaces the earlier value in place.
    pub fn map<I, K, N>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, N)>,
        K: Into<String>,
        N: Into<ConfigNode>,
    {
        let mut node = ConfigNode::Map(Vec::new());
        for (key, value) in entries {
            node.insert(key, value);
        }
        node
    }

    /// Builds a list node.
    pub fn list<I, N>(items: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<ConfigNode>,
    {
        ConfigNode::List(items.into_iter().map(Into::into).collect())
    }

    /// Builds a leaf holding a present value.
    pub fn value(value: impl Into<ConfigValue>) -> Self {
        ConfigNode::Leaf(Ok(Some(value.into())))
    }

    /// Builds a leaf for an optional value that is not set.
    pub fn absent() -> Self {
        ConfigNode::Leaf(Ok(None))
    }

    /// Builds a leaf holding an error.
    pub fn error(error: FieldError) -> Self {
        ConfigNode::Leaf(Err(error))
    }

    /// Inserts a child into a map node.
    ///
    /// Returns `false` (and does nothing) when called on a leaf or a list.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ConfigNode>) -> bool {
        let ConfigNode::Map(entries) = self else {
            return false;
        };
        let key = key.into();
        let value = value.into();
        match entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => entries.push((key, value)),
        }
        true
    }

    /// Returns true if this node is a leaf holding an error.
    pub fn is_error(&self) -> bool {
        matches!(self, ConfigNode::Leaf(Err(_)))
    }

    /// Returns true if any leaf in this subtree holds an error.
    pub fn has_errors(&self) -> bool {
        match self {
            ConfigNode::Leaf(resolved) => resolved.is_err(),
            ConfigNode::Map(entries) => entries.iter().any(|(_, node)| node.has_errors()),
            ConfigNode::List(items) => items.iter().any(ConfigNode::has_errors),
        }
    }
}

impl From<Resolved<ConfigValue>> for ConfigNode {
    fn from(resolved: Resolved<ConfigValue>) -> Self {
        ConfigNode::Leaf(resolved)
    }
}

impl From<Option<ConfigValue>> for ConfigNode {
    fn from(value: Option<ConfigValue>) -> Self {
        ConfigNode::Leaf(Ok(value))
    }
}

impl From<ConfigValue> for ConfigNode {
    fn from(value: ConfigValue) -> Self {
        ConfigNode::Leaf(Ok(Some(value)))
    }
}

impl From<FieldError> for ConfigNode {
    fn from(error: FieldError) -> Self {
        ConfigNode::Leaf(Err(error))
    }
}

impl From<Vec<ConfigNode>> for ConfigNode {
    fn from(items: Vec<ConfigNode>) -> Self {
        ConfigNode::List(items)
    }
}

macro_rules! leaf_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ConfigNode {
                fn from(value: $ty) -> Self {
                    ConfigNode::value(value)
                }
            }
        )*
    };
}

leaf_from!(bool, f64, i32, i64, u16, u32, u64, String, &str);

impl From<&FrozenConfig> for ConfigNode {
    fn from(frozen: &FrozenConfig) -> Self {
        if let Some(entries) = frozen.entries() {
            ConfigNode::Map(
                entries
                    .map(|(key, child)| (key.to_string(), ConfigNode::from(child)))
                    .collect(),
            )
        } else if let Some(items) = frozen.items() {
            ConfigNode::List(items.map(ConfigNode::from).collect())
        } else if let Some(error) = frozen.error() {
            ConfigNode::Leaf(Err(error.clone()))
        } else {
            ConfigNode::Leaf(Ok(frozen.value().cloned()))
        }
    }
}

impl From<FrozenConfig> for ConfigNode {
    fn from(frozen: FrozenConfig) -> Self {
        ConfigNode::from(&frozen)
    }
}

/// Builds a [`ConfigNode`] tree with object-literal syntax.
///
/// Braces build maps, brackets build lists, and any other expression becomes
/// a node through `ConfigNode::from`, so resolver results, plain values and
/// errors can all be used as leaves. Keys are identifiers or string literals.
///
/// # Examples
///
/// ```
/// use hexenv::config_tree;
/// use hexenv::domain::ConfigNode;
///
/// let tree = config_tree!({
///     port: 3000,
///     db: {
///         url: "postgres://localhost:5432",
///         "migrate-on-start": false,
///     },
///     hosts: ["a", "b"],
/// });
/// assert!(matches!(tree, ConfigNode::Map(_)));
/// ```
#[macro_export]
macro_rules! config_tree {
    (@key $key:ident) => { stringify!($key) };
    (@key $key:literal) => { $key };

    (@entries [$($out:tt)*]) => { ::std::vec![$($out)*] };
    (@entries [$($out:tt)*] $key:tt : { $($inner:tt)* } $(, $($rest:tt)*)?) => {
        $crate::config_tree!(@entries
            [$($out)* ($crate::config_tree!(@key $key), $crate::config_tree!({ $($inner)* })),]
            $($($rest)*)?)
    };
    (@entries [$($out:tt)*] $key:tt : [ $($inner:tt)* ] $(, $($rest:tt)*)?) => {
        $crate::config_tree!(@entries
            [$($out)* ($crate::config_tree!(@key $key), $crate::config_tree!([ $($inner)* ])),]
            $($($rest)*)?)
    };
    (@entries [$($out:tt)*] $key:tt : $value:expr $(, $($rest:tt)*)?) => {
        $crate::config_tree!(@entries
            [$($out)* ($crate::config_tree!(@key $key), $crate::domain::ConfigNode::from($value)),]
            $($($rest)*)?)
    };

    (@items [$($out:tt)*]) => { ::std::vec![$($out)*] };
    (@items [$($out:tt)*] { $($inner:tt)* } $(, $($rest:tt)*)?) => {
        $crate::config_tree!(@items [$($out)* $crate::config_tree!({ $($inner)* }),] $($($rest)*)?)
    };
    (@items [$($out:tt)*] [ $($inner:tt)* ] $(, $($rest:tt)*)?) => {
        $crate::config_tree!(@items [$($out)* $crate::config_tree!([ $($inner)* ]),] $($($rest)*)?)
    };
    (@items [$($out:tt)*] $value:expr $(, $($rest:tt)*)?) => {
        $crate::config_tree!(@items [$($out)* $crate::domain::ConfigNode::from($value),] $($($rest)*)?)
    };

    ({ $($tt:tt)* }) => {
        $crate::domain::ConfigNode::map::<_, &str, $crate::domain::ConfigNode>(
            $crate::config_tree!(@entries [] $($tt)*)
        )
    };
    ([ $($tt:tt)* ]) => {
        $crate::domain::ConfigNode::List($crate::config_tree!(@items [] $($tt)*))
    };
    ($other:expr) => { $crate::domain::ConfigNode::from($other) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_preserves_insertion_order() {
        let node = ConfigNode::map([("b", 1), ("a", 2)]);
        let ConfigNode::Map(entries) = node else {
            panic!("expected a map");
        };
        assert_eq!(entries[0].0, "b");
        assert_eq!(entries[1].0, "a");
    }

    #[test]
    fn test_map_duplicate_key_replaces() {
        let node = ConfigNode::map([("a", 1), ("b", 2), ("a", 3)]);
        let ConfigNode::Map(entries) = node else {
            panic!("expected a map");
        };
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], ("a".to_string(), ConfigNode::from(3)));
    }

    #[test]
    fn test_insert_on_leaf_is_rejected() {
        let mut node = ConfigNode::from(1);
        assert!(!node.insert("a", 2));
    }

    #[test]
    fn test_has_errors_nested() {
        let node = ConfigNode::map([(
            "c",
            ConfigNode::map([("d", ConfigNode::error(FieldError::anonymous("bad")))]),
        )]);
        assert!(node.has_errors());
        assert!(!node.is_error());
    }

    #[test]
    fn test_from_resolved() {
        let resolved: Resolved<ConfigValue> = Ok(None);
        assert_eq!(ConfigNode::from(resolved), ConfigNode::absent());
    }

    #[test]
    fn test_config_tree_macro() {
        let tree = config_tree!({
            a: 1,
            b: "2",
            c: { d: 3 },
            e: [1, { f: true }, [2]],
            "g-h": ConfigNode::absent(),
        });
        let expected = ConfigNode::map([
            ("a", ConfigNode::from(1)),
            ("b", ConfigNode::from("2")),
            ("c", ConfigNode::map([("d", 3)])),
            (
                "e",
                ConfigNode::list([
                    ConfigNode::from(1),
                    ConfigNode::map([("f", true)]),
                    ConfigNode::list([2]),
                ]),
            ),
            ("g-h", ConfigNode::absent()),
        ]);
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_config_tree_macro_empty() {
        assert_eq!(config_tree!({}), ConfigNode::Map(Vec::new()));
        assert_eq!(config_tree!([]), ConfigNode::List(Vec::new()));
    }
}
