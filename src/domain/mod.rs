// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module contains the values that flow through the resolution pipeline:
//! variable references, transformed values, per-field errors, the tree callers
//! build, and the frozen tree validation returns. It is independent of any
//! environment access.

pub mod config_value;
pub mod errors;
pub mod field_error;
pub mod frozen;
pub mod tree;
pub mod var_ref;

// Re-export commonly used types
pub use config_value::ConfigValue;
pub use errors::{ConfigError, Result};
pub use field_error::{FieldError, Resolved};
pub use frozen::FrozenConfig;
pub use tree::ConfigNode;
pub use var_ref::VarRef;
