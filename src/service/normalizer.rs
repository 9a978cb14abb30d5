// SPDX-License-Identifier: MIT OR Apache-2.0

//! Positional argument normalization.
//!
//! The positional form takes a variable reference plus up to three arguments
//! whose meaning depends on their shape and position:
//!
//! ```text
//! (vars)
//! (vars, default | REQUIRED | validators)
//! (vars, REQUIRED | default, validators)
//! (vars, "str" | "num" | "bool" | Kind | transformer)
//! (vars, <type>, default | REQUIRED | validators)
//! (vars, <type>, default | REQUIRED, validators)
//! ```
//!
//! [`normalize`] turns such a list into a [`ValueSpec`]. It never fails:
//! arguments that fit no slot are dropped and logged at `debug`.

use crate::adapters::Kind;
use crate::domain::{ConfigValue, VarRef};
use crate::ports::{SharedTransformer, SharedValidator};
use crate::service::value_spec::ValueSpec;
use std::fmt;

/// Marks a value as required.
///
/// A required value that resolves to nothing becomes an error carrying
/// `This value is required`, reported before any other validator message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Required;

/// One positional argument.
///
/// Every variant has a `From` conversion, so positional lists are usually
/// written with plain values through the [`config_value!`](crate::config_value!)
/// macro.
#[derive(Clone)]
pub enum Arg {
    /// The required marker.
    Required,
    /// Text: a transformer alias in second position, otherwise a default.
    Text(String),
    /// A bundled transformer.
    Type(Kind),
    /// A custom transformer.
    Transformer(SharedTransformer),
    /// One or more validators.
    Validators(Vec<SharedValidator>),
    /// A default value.
    Value(ConfigValue),
}

impl Arg {
    fn shape(&self) -> &'static str {
        match self {
            Arg::Required => "required marker",
            Arg::Text(_) => "text",
            Arg::Type(_) => "transformer alias",
            Arg::Transformer(_) => "custom transformer",
            Arg::Validators(_) => "validators",
            Arg::Value(_) => "value",
        }
    }

    fn is_plain(&self) -> bool {
        matches!(self, Arg::Text(_) | Arg::Value(_))
    }

    // In second position, text naming a bundled transformer selects it.
    fn in_second_position(self) -> Self {
        match self {
            Arg::Text(text) => match Kind::from_alias(&text) {
                Some(kind) => Arg::Type(kind),
                None => Arg::Text(text),
            },
            other => other,
        }
    }

    fn into_default(self) -> Option<ConfigValue> {
        match self {
            Arg::Text(text) => Some(ConfigValue::String(text)),
            Arg::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Debug for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Required => f.write_str("Required"),
            Arg::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Arg::Type(kind) => f.debug_tuple("Type").field(kind).finish(),
            Arg::Transformer(_) => f.write_str("Transformer(..)"),
            Arg::Validators(v) => write!(f, "Validators([{} validator(s)])", v.len()),
            Arg::Value(value) => f.debug_tuple("Value").field(value).finish(),
        }
    }
}

impl From<Required> for Arg {
    fn from(_: Required) -> Self {
        Arg::Required
    }
}

impl From<Kind> for Arg {
    fn from(kind: Kind) -> Self {
        Arg::Type(kind)
    }
}

impl From<&str> for Arg {
    fn from(text: &str) -> Self {
        Arg::Text(text.to_string())
    }
}

impl From<String> for Arg {
    fn from(text: String) -> Self {
        Arg::Text(text)
    }
}

impl From<SharedTransformer> for Arg {
    fn from(transformer: SharedTransformer) -> Self {
        Arg::Transformer(transformer)
    }
}

impl From<SharedValidator> for Arg {
    fn from(validator: SharedValidator) -> Self {
        Arg::Validators(vec![validator])
    }
}

impl From<Vec<SharedValidator>> for Arg {
    fn from(validators: Vec<SharedValidator>) -> Self {
        Arg::Validators(validators)
    }
}

impl From<ConfigValue> for Arg {
    fn from(value: ConfigValue) -> Self {
        Arg::Value(value)
    }
}

macro_rules! value_arg_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Arg::Value(ConfigValue::from(value))
                }
            }
        )*
    };
}

value_arg_from!(bool, f64, i32, i64, u16, u32, u64, Vec<String>, serde_json::Value);

/// Normalizes a positional argument list into a [`ValueSpec`].
///
/// Rules, in priority order:
///
/// 1. `Required` in second or third position makes the value required.
/// 2. The second argument selects the transformer when it is an alias, a
///    [`Kind`], or a custom transformer. Otherwise the string transformer is
///    used.
/// 3. Validators come from the fourth argument, else the third, else the
///    second.
/// 4. The default is the second argument when it is plain text or a value.
///    When the second argument is a marker, transformer or validator list,
///    the third argument supplies the default if it is plain text or a value.
///
/// # Examples
///
/// ```rust
/// use hexenv::adapters::validators::min_len;
/// use hexenv::domain::ConfigValue;
/// use hexenv::service::{normalize, Arg};
/// use hexenv::REQUIRED;
///
/// let spec = normalize("PORT".into(), vec![Arg::from("num"), Arg::from(3000)]);
/// assert_eq!(spec.default_value(), Some(&ConfigValue::from(3000)));
///
/// let spec = normalize("TOKEN".into(), vec![Arg::from(REQUIRED), Arg::from(min_len(8))]);
/// assert!(spec.is_required());
/// assert_eq!(spec.validators().len(), 1);
/// ```
pub fn normalize(vars: VarRef, args: impl IntoIterator<Item = Arg>) -> ValueSpec {
    let mut args = args.into_iter();
    let second = args.next().map(Arg::in_second_position);
    let third = args.next();
    let fourth = args.next();
    let extra = args.count();
    if extra > 0 {
        tracing::debug!(
            "Ignoring {} extra argument(s) for '{}'; at most three are used",
            extra,
            vars
        );
    }

    let required = matches!(second, Some(Arg::Required)) || matches!(third, Some(Arg::Required));
    let second_is_default = second.as_ref().map_or(true, Arg::is_plain);

    let mut spec = ValueSpec::new(vars);
    let mut default = None;
    let mut second_validators = None;
    let mut third_validators = None;

    match second {
        Some(Arg::Type(kind)) => spec = spec.with_kind(kind),
        Some(Arg::Transformer(transformer)) => spec = spec.with_transformer(transformer),
        Some(Arg::Validators(validators)) => second_validators = Some(validators),
        Some(arg) if arg.is_plain() => default = arg.into_default(),
        _ => {}
    }

    match third {
        Some(Arg::Validators(validators)) => third_validators = Some(validators),
        Some(arg) if arg.is_plain() => {
            if !second_is_default {
                default = arg.into_default();
            }
        }
        Some(Arg::Required) | None => {}
        Some(arg) => tracing::debug!(
            "Ignoring {} in third position for '{}'",
            arg.shape(),
            spec.vars()
        ),
    }

    let fourth_validators = match fourth {
        Some(Arg::Validators(validators)) => Some(validators),
        Some(arg) => {
            tracing::debug!(
                "Ignoring {} in fourth position for '{}'; only validators are accepted",
                arg.shape(),
                spec.vars()
            );
            None
        }
        None => None,
    };

    if let Some(default) = default {
        spec = spec.default(default);
    }
    if required {
        spec = spec.required();
    }
    let validators = fourth_validators
        .or(third_validators)
        .or(second_validators)
        .unwrap_or_default();
    spec.with_validators(validators)
}
