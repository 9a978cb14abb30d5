// SPDX-License-Identifier: MIT OR Apache-2.0

//! Value resolution.
//!
//! This module provides the [`Resolver`], which runs the resolution pipeline
//! for one [`ValueSpec`] against its environment sources:
//!
//! 1. pick the first candidate variable that is defined (else the first one)
//! 2. transform the raw value; a transform error is returned as is
//! 3. substitute the default when the transformed value is absent
//! 4. run the required check and then every validator, collecting all messages
//! 5. on any message, replace the value with a [`FieldError`]

use crate::adapters::{validators, MapEnv};
use crate::domain::{ConfigValue, FieldError, Resolved, Result, VarRef};
use crate::ports::EnvSource;
use crate::service::normalizer::Arg;
use crate::service::value_spec::ValueSpec;
use std::collections::HashMap;

#[cfg(feature = "env")]
use once_cell::sync::Lazy;

#[cfg(feature = "env")]
static PROCESS_RESOLVER: Lazy<Resolver> = Lazy::new(Resolver::from_env);

/// Resolves value specs against one or more environment sources.
///
/// Sources are consulted in the order they were added; the first one that
/// defines a variable supplies its value. Nothing is cached, so every call
/// sees the current contents of its sources.
///
/// # Examples
///
/// ```rust
/// use hexenv::adapters::MapEnv;
/// use hexenv::domain::ConfigValue;
/// use hexenv::service::{Resolver, ValueSpec};
///
/// let resolver = Resolver::from_source(MapEnv::new().with("PORT", "8080"));
///
/// let port = resolver.resolve(&ValueSpec::new("PORT").num().default(3000));
/// assert_eq!(port.unwrap(), Some(ConfigValue::from(8080)));
///
/// let host = resolver.resolve(&ValueSpec::new("HOST").default("localhost"));
/// assert_eq!(host.unwrap(), Some(ConfigValue::from("localhost")));
/// ```
pub struct Resolver {
    /// Environment sources, in lookup order
    sources: Vec<Box<dyn EnvSource>>,
}

impl Resolver {
    /// Creates a resolver with no sources, for which every variable is unset.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Creates a new resolver builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hexenv::service::Resolver;
    ///
    /// # fn main() -> hexenv::domain::Result<()> {
    /// let resolver = Resolver::builder()
    ///     .with_env_prefix("MYAPP_")
    ///     .with_env_vars()
    ///     .build()?;
    /// assert_eq!(resolver.source_names(), vec!["env", "env"]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::new()
    }

    /// Creates a resolver reading a single source.
    pub fn from_source(source: impl EnvSource + 'static) -> Self {
        let mut resolver = Self::new();
        resolver.add_source(Box::new(source));
        resolver
    }

    /// Creates a resolver reading the process environment.
    #[cfg(feature = "env")]
    pub fn from_env() -> Self {
        use crate::adapters::ProcessEnv;
        Self::from_source(ProcessEnv::new())
    }

    /// Adds a source after the existing ones.
    pub fn add_source(&mut self, source: Box<dyn EnvSource>) {
        tracing::debug!("Adding environment source '{}'", source.name());
        self.sources.push(source);
    }

    /// The names of the sources, in lookup order.
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Returns the raw value of a variable from the first source defining it.
    pub fn get_raw(&self, name: &str) -> Option<String> {
        self.sources.iter().find_map(|source| source.get_raw(name))
    }

    /// Returns true if any source defines the variable.
    pub fn is_defined(&self, name: &str) -> bool {
        self.get_raw(name).is_some()
    }

    /// Picks the variable a reference resolves to.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hexenv::adapters::MapEnv;
    /// use hexenv::service::Resolver;
    ///
    /// let resolver = Resolver::from_source(MapEnv::new().with("TWO", ""));
    /// assert_eq!(resolver.select(&["ONE", "TWO"].into()), "TWO");
    /// assert_eq!(resolver.select(&["ONE", "THREE"].into()), "ONE");
    /// ```
    pub fn select<'a>(&self, vars: &'a VarRef) -> &'a str {
        vars.select(|name| self.is_defined(name))
    }

    /// Resolves one value.
    ///
    /// Never panics and never returns a Rust error: failures are reported as
    /// a [`FieldError`] in the `Err` arm, tagged with the selected variable.
    pub fn resolve(&self, spec: &ValueSpec) -> Resolved<ConfigValue> {
        let mut raw = None;
        let name = spec.vars().select(|candidate| {
            raw = self.get_raw(candidate);
            raw.is_some()
        });
        tracing::debug!("Resolving '{}' from candidates [{}]", name, spec.vars());

        let transformed = match spec.transform(raw.as_deref(), name) {
            Ok(value) => value,
            Err(error) => {
                tracing::debug!("Transform failed for '{}': {}", name, error);
                return Err(error);
            }
        };
        let value = transformed.or_else(|| spec.default_value().cloned());

        let mut messages = Vec::new();
        if spec.is_required() {
            messages.extend(validators::required().check(value.as_ref()));
        }
        for validator in spec.validators() {
            messages.extend(validator.check(value.as_ref()));
        }

        if messages.is_empty() {
            Ok(value)
        } else {
            tracing::debug!(
                "Validation failed for '{}' with {} message(s)",
                name,
                messages.len()
            );
            Err(FieldError::with_messages(name, messages))
        }
    }

    /// Resolves one value from a positional argument list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hexenv::adapters::MapEnv;
    /// use hexenv::domain::ConfigValue;
    /// use hexenv::service::{Arg, Resolver};
    ///
    /// let resolver = Resolver::from_source(MapEnv::new());
    /// let value = resolver.value("PORT", vec![Arg::from("num"), Arg::from(3000)]);
    /// assert_eq!(value.unwrap(), Some(ConfigValue::from(3000)));
    /// ```
    pub fn value(
        &self,
        vars: impl Into<VarRef>,
        args: impl IntoIterator<Item = Arg>,
    ) -> Resolved<ConfigValue> {
        self.resolve(&ValueSpec::from_args(vars, args))
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the shared resolver that reads the process environment.
///
/// It is built on first use and holds no state besides its source.
#[cfg(feature = "env")]
pub fn process_resolver() -> &'static Resolver {
    &PROCESS_RESOLVER
}

/// Builder for constructing a [`Resolver`].
///
/// This builder provides a fluent interface for choosing the sources a
/// resolver reads, in lookup order.
///
/// # Examples
///
/// ```rust
/// use hexenv::service::ResolverBuilder;
/// use std::collections::HashMap;
///
/// # fn main() -> hexenv::domain::Result<()> {
/// let mut overrides = HashMap::new();
/// overrides.insert("PORT".to_string(), "9000".to_string());
///
/// let resolver = ResolverBuilder::new()
///     .with_values(overrides)
///     .with_env_vars()
///     .build()?;
/// assert_eq!(resolver.get_raw("PORT").as_deref(), Some("9000"));
/// # Ok(())
/// # }
/// ```
pub struct ResolverBuilder {
    sources: Vec<Box<dyn EnvSource>>,
}

impl ResolverBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Adds an environment source to the builder.
    pub fn with_source(mut self, source: Box<dyn EnvSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Adds in-memory values as a source.
    pub fn with_values(self, values: HashMap<String, String>) -> Self {
        self.with_source(Box::new(MapEnv::with_values(values)))
    }

    /// Adds the process environment as a source.
    #[cfg(feature = "env")]
    pub fn with_env_vars(self) -> Self {
        use crate::adapters::ProcessEnv;
        self.with_source(Box::new(ProcessEnv::new()))
    }

    /// Adds the process environment, with a name prefix, as a source.
    #[cfg(feature = "env")]
    pub fn with_env_prefix(self, prefix: impl Into<String>) -> Self {
        use crate::adapters::ProcessEnv;
        self.with_source(Box::new(ProcessEnv::with_prefix(prefix)))
    }

    /// Builds the resolver.
    pub fn build(self) -> Result<Resolver> {
        let mut resolver = Resolver::new();

        for source in self.sources {
            resolver.add_source(source);
        }

        Ok(resolver)
    }
}

impl Default for ResolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}
