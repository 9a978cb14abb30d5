// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable references.
//!
//! This module provides the `VarRef` type, which names the environment
//! variable a value is read from. A reference holds either a single name or an
//! ordered list of candidate names, which lets an application accept a new
//! variable name while still honouring a legacy one.

use std::fmt;

/// One or more candidate environment variable names, in order of preference.
///
/// # Examples
///
/// ```
/// use hexenv::domain::VarRef;
///
/// let single = VarRef::from("DATABASE_URL");
/// let candidates = VarRef::from(["DATABASE_URL", "DB_URL"]);
///
/// assert_eq!(single.names(), &["DATABASE_URL".to_string()]);
/// assert_eq!(candidates.primary(), "DATABASE_URL");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VarRef(Vec<String>);

impl VarRef {
    /// Creates a reference to a single variable.
    pub fn new(name: impl Into<String>) -> Self {
        VarRef(vec![name.into()])
    }

    /// Creates a reference from an ordered list of candidate names.
    ///
    /// An empty list is allowed; it selects the empty name, which no
    /// environment defines.
    pub fn candidates<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        VarRef(names.into_iter().map(Into::into).collect())
    }

    /// Returns the candidate names in order.
    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Returns the first candidate, used when none of them is defined.
    pub fn primary(&self) -> &str {
        self.0.first().map(String::as_str).unwrap_or("")
    }

    /// Picks the name to resolve.
    ///
    /// The first candidate for which `is_defined` returns true wins. If none is
    /// defined, the first candidate is returned so that defaults and errors
    /// are still attributed to a sensible name.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexenv::domain::VarRef;
    ///
    /// let vars = VarRef::from(["ONE", "TWO", "THREE"]);
    /// assert_eq!(vars.select(|name| name == "THREE"), "THREE");
    /// assert_eq!(vars.select(|_| false), "ONE");
    /// ```
    pub fn select(&self, mut is_defined: impl FnMut(&str) -> bool) -> &str {
        self.0
            .iter()
            .map(String::as_str)
            .find(|name| is_defined(name))
            .unwrap_or_else(|| self.primary())
    }
}

impl From<&str> for VarRef {
    fn from(s: &str) -> Self {
        VarRef::new(s)
    }
}

impl From<String> for VarRef {
    fn from(s: String) -> Self {
        VarRef::new(s)
    }
}

impl From<&String> for VarRef {
    fn from(s: &String) -> Self {
        VarRef::new(s.as_str())
    }
}

impl From<Vec<String>> for VarRef {
    fn from(names: Vec<String>) -> Self {
        VarRef(names)
    }
}

impl From<Vec<&str>> for VarRef {
    fn from(names: Vec<&str>) -> Self {
        VarRef::candidates(names)
    }
}

impl From<&[&str]> for VarRef {
    fn from(names: &[&str]) -> Self {
        VarRef::candidates(names.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for VarRef {
    fn from(names: [&str; N]) -> Self {
        VarRef::candidates(names)
    }
}

impl fmt::Display for VarRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("|"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_ref_single() {
        let vars = VarRef::from("PORT");
        assert_eq!(vars.names().len(), 1);
        assert_eq!(vars.primary(), "PORT");
    }

    #[test]
    fn test_var_ref_from_array() {
        let vars = VarRef::from(["A", "B"]);
        assert_eq!(vars.names(), &["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_select_first_defined() {
        let vars = VarRef::from(["FOUR", "THREE", "TWO", "ONE"]);
        let selected = vars.select(|name| name == "FOUR" || name == "THREE");
        assert_eq!(selected, "FOUR");
    }

    #[test]
    fn test_select_falls_back_to_first() {
        let vars = VarRef::from(["TWO", "ONE"]);
        assert_eq!(vars.select(|_| false), "TWO");
    }

    #[test]
    fn test_select_empty() {
        let vars = VarRef::candidates(Vec::<String>::new());
        assert_eq!(vars.select(|_| true), "");
        assert_eq!(vars.primary(), "");
    }

    #[test]
    fn test_display() {
        assert_eq!(VarRef::from(["A", "B"]).to_string(), "A|B");
    }

    #[test]
    fn test_equality() {
        assert_eq!(VarRef::from("A"), VarRef::from("A".to_string()));
        assert_ne!(VarRef::from("A"), VarRef::from(["A", "B"]));
    }
}
