// SPDX-License-Identifier: MIT OR Apache-2.0

//! A hexagonal architecture crate for typed configuration from environment variables.
//!
//! This crate reads environment variables, transforms them into typed values,
//! validates them, and aggregates every per-field error into a single report.
//! You declare a tree of expected values; the crate gives back either a deeply
//! immutable configuration or a list of human-readable errors naming each
//! failing path and variable.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`ConfigValue`, `FieldError`, `ConfigNode`, `FrozenConfig`, errors)
//! - **Ports**: Trait definitions that define interfaces (`EnvSource`, `Transformer`, `Validator`)
//! - **Adapters**: Environment sources plus the bundled transformers and validators
//! - **Service**: Argument normalization, value resolution and tree validation
//!
//! # Features
//!
//! - **Candidate names**: read the first of several variables that is set
//! - **Typed parsing**: strings, numbers, booleans, CSV lists, JSON, or your own transformer
//! - **Defaults and required values**: absence is either filled in or reported
//! - **Validators**: bundled string checks or your own, all messages collected
//! - **Aggregated reports**: every error in the tree, each with its dotted path
//!
//! # Feature Flags
//!
//! - `env`: Enable the process environment source and the process-wide
//!   [`config_value()`] helpers (default)
//!
//! # Quick Start
//!
//! ```rust
//! use hexenv::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let resolver = Resolver::from_source(MapEnv::new().with("PORT", "8080"));
//!
//! let config = validate(config_tree!({
//!     port: resolver.resolve(&ValueSpec::new("PORT").num().default(3000)),
//!     host: config_value!(in resolver; "HOST", "http://localhost", validators::http_host()),
//!     db: {
//!         migrate_on_start: config_value!(in resolver; "DB_MIGRATE_ON_START", "bool", false),
//!     },
//! }))?;
//!
//! assert_eq!(config.get_f64("port"), Some(8080.0));
//! assert_eq!(config.get_str("host"), Some("http://localhost"));
//! assert_eq!(config.get_bool("db.migrate_on_start"), Some(false));
//! # Ok(())
//! # }
//! ```
//!
//! # Error Reports
//!
//! ```rust
//! use hexenv::prelude::*;
//!
//! let resolver = Resolver::from_source(MapEnv::new().with("PORT", "eighty"));
//!
//! let result = report(config_tree!({
//!     port: config_value!(in resolver; "PORT", "num"),
//!     secret: config_value!(in resolver; "SECRET", REQUIRED),
//! }));
//!
//! assert_eq!(
//!     result.errors(),
//!     [
//!         "port (PORT): This value must be a number. You passed eighty",
//!         "secret (SECRET): This value is required",
//!     ]
//! );
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

use crate::service::Required;

#[cfg(feature = "env")]
use crate::domain::{ConfigValue, Resolved};
#[cfg(feature = "env")]
use crate::service::ValueSpec;

/// The required marker, for use in positional argument lists.
pub const REQUIRED: Required = Required;

/// Resolves one value against the process environment.
///
/// # Examples
///
/// ```rust
/// use hexenv::config_value;
/// use hexenv::domain::ConfigValue;
/// use hexenv::service::ValueSpec;
///
/// let workers = config_value(ValueSpec::new("HEXENV_DOC_WORKERS").num().default(4));
/// assert_eq!(workers.unwrap(), Some(ConfigValue::from(4)));
/// ```
#[cfg(feature = "env")]
pub fn config_value(spec: impl Into<ValueSpec>) -> Resolved<ConfigValue> {
    service::process_resolver().resolve(&spec.into())
}

/// Resolves one value from a positional argument list.
///
/// The first argument is a variable name or an array of candidate names; the
/// rest follow the rules of [`normalize`](crate::service::normalize). Without
/// a resolver the process environment is read; `in resolver;` selects another
/// one.
///
/// # Examples
///
/// ```rust
/// use hexenv::adapters::{validators, MapEnv};
/// use hexenv::domain::ConfigValue;
/// use hexenv::service::Resolver;
/// use hexenv::{config_value, REQUIRED};
///
/// let resolver = Resolver::from_source(MapEnv::new().with("TWO", "2"));
///
/// let n = config_value!(in resolver; ["ONE", "TWO"], "num", 0);
/// assert_eq!(n.unwrap(), Some(ConfigValue::from(2)));
///
/// let token = config_value!(in resolver; "TOKEN", REQUIRED, vec![validators::min_len(16)]);
/// assert!(token.is_err());
///
/// let from_process = config_value!("HEXENV_DOC_MACRO_UNSET", "fallback");
/// assert_eq!(from_process.unwrap(), Some(ConfigValue::from("fallback")));
/// ```
#[macro_export]
macro_rules! config_value {
    (in $resolver:expr; $vars:expr $(, $arg:expr)* $(,)?) => {{
        let args: ::std::vec::Vec<$crate::service::Arg> =
            ::std::vec![$($crate::service::Arg::from($arg)),*];
        $resolver.value($vars, args)
    }};
    ($vars:expr $(, $arg:expr)* $(,)?) => {{
        let args: ::std::vec::Vec<$crate::service::Arg> =
            ::std::vec![$($crate::service::Arg::from($arg)),*];
        $crate::service::process_resolver().value($vars, args)
    }};
}

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        ConfigError, ConfigNode, ConfigValue, FieldError, FrozenConfig, Resolved, Result, VarRef,
    };
    pub use crate::ports::{
        transformer_fn, validator_fn, EnvSource, Messages, SharedTransformer, SharedValidator,
        Transformer, Validator,
    };
    pub use crate::service::{
        report, validate, Arg, Required, Resolver, ValidationResult, ValueSpec,
    };
    pub use crate::{config_tree, config_value, REQUIRED};

    // Re-export adapters based on feature flags
    pub use crate::adapters::{validators, Kind, MapEnv};
    #[cfg(feature = "env")]
    pub use crate::adapters::ProcessEnv;
}
