// SPDX-License-Identifier: MIT OR Apache-2.0

//! The description of one configuration value.
//!
//! A [`ValueSpec`] names the variable (or candidate variables) to read, the
//! transformer that parses it, an optional default, whether it is required,
//! and the validators that check it. Build one with the fluent methods, or
//! from a positional argument list with [`ValueSpec::from_args`].

use crate::adapters::Kind;
use crate::domain::{ConfigValue, Resolved, VarRef};
use crate::ports::{SharedTransformer, SharedValidator, Transformer};
use crate::service::normalizer::{self, Arg};
use std::fmt;

#[derive(Clone)]
enum TransformerChoice {
    Bundled(Kind),
    Custom(SharedTransformer),
}

/// What to read, how to parse it, and how to check it.
///
/// # Examples
///
/// ```rust
/// use hexenv::adapters::validators::http_host;
/// use hexenv::service::ValueSpec;
///
/// let port = ValueSpec::new("PORT").num().default(3000);
/// let host = ValueSpec::new(["API_HOST", "HOST"])
///     .default("http://localhost")
///     .validate(http_host());
/// let secret = ValueSpec::new("SIGNATURE_SECRET").required();
///
/// assert!(secret.is_required());
/// assert_eq!(host.vars().names().len(), 2);
/// # let _ = port;
/// ```
#[derive(Clone)]
pub struct ValueSpec {
    vars: VarRef,
    transformer: TransformerChoice,
    default: Option<ConfigValue>,
    required: bool,
    validators: Vec<SharedValidator>,
}

impl ValueSpec {
    /// Creates a spec for an optional string with no default and no validators.
    pub fn new(vars: impl Into<VarRef>) -> Self {
        Self {
            vars: vars.into(),
            transformer: TransformerChoice::Bundled(Kind::Str),
            default: None,
            required: false,
            validators: Vec::new(),
        }
    }

    /// Creates a spec from a positional argument list.
    ///
    /// See [`normalize`](crate::service::normalize) for how arguments are
    /// interpreted.
    pub fn from_args(vars: impl Into<VarRef>, args: impl IntoIterator<Item = Arg>) -> Self {
        normalizer::normalize(vars.into(), args)
    }

    /// Parses the value as a string. This is the default.
    pub fn str(self) -> Self {
        self.with_kind(Kind::Str)
    }

    /// Parses the value as a number.
    pub fn num(self) -> Self {
        self.with_kind(Kind::Num)
    }

    /// Parses the value as a boolean.
    pub fn bool(self) -> Self {
        self.with_kind(Kind::Bool)
    }

    /// Parses the value as a comma-separated list.
    pub fn csv(self) -> Self {
        self.with_kind(Kind::Csv)
    }

    /// Parses the value as JSON.
    pub fn json(self) -> Self {
        self.with_kind(Kind::Json)
    }

    /// Parses the value with a bundled transformer.
    pub fn with_kind(mut self, kind: Kind) -> Self {
        self.transformer = TransformerChoice::Bundled(kind);
        self
    }

    /// Parses the value with a custom transformer.
    pub fn with_transformer(mut self, transformer: SharedTransformer) -> Self {
        self.transformer = TransformerChoice::Custom(transformer);
        self
    }

    /// Sets the value used when the transformer yields nothing.
    pub fn default(mut self, value: impl Into<ConfigValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Makes absence an error.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Appends a validator.
    pub fn validate(mut self, validator: SharedValidator) -> Self {
        self.validators.push(validator);
        self
    }

    /// Appends several validators, in order.
    pub fn with_validators(mut self, validators: impl IntoIterator<Item = SharedValidator>) -> Self {
        self.validators.extend(validators);
        self
    }

    /// The variable reference.
    pub fn vars(&self) -> &VarRef {
        &self.vars
    }

    /// The bundled transformer in use, or `None` for a custom one.
    pub fn transformer_kind(&self) -> Option<Kind> {
        match &self.transformer {
            TransformerChoice::Bundled(kind) => Some(*kind),
            TransformerChoice::Custom(_) => None,
        }
    }

    /// The default value, if any.
    pub fn default_value(&self) -> Option<&ConfigValue> {
        self.default.as_ref()
    }

    /// Returns true if absence is an error.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The validators, in the order they run (after the required check).
    pub fn validators(&self) -> &[SharedValidator] {
        &self.validators
    }

    pub(crate) fn transform(&self, raw: Option<&str>, var_name: &str) -> Resolved<ConfigValue> {
        match &self.transformer {
            TransformerChoice::Bundled(kind) => kind.transform(raw, var_name),
            TransformerChoice::Custom(transformer) => transformer.transform(raw, var_name),
        }
    }
}

impl fmt::Debug for ValueSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let transformer = match &self.transformer {
            TransformerChoice::Bundled(kind) => kind.name(),
            TransformerChoice::Custom(_) => "custom",
        };
        f.debug_struct("ValueSpec")
            .field("vars", &self.vars)
            .field("transformer", &transformer)
            .field("default", &self.default)
            .field("required", &self.required)
            .field("validators", &self.validators.len())
            .finish()
    }
}

impl From<&str> for ValueSpec {
    fn from(name: &str) -> Self {
        ValueSpec::new(name)
    }
}

impl From<VarRef> for ValueSpec {
    fn from(vars: VarRef) -> Self {
        ValueSpec::new(vars)
    }
}
