// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the resolution pipeline.
//!
//! This module turns value specs into resolved values ([`Resolver`]) and trees
//! of resolved values into validated, frozen configuration ([`report`],
//! [`validate`]).

pub mod normalizer;
pub mod resolver;
pub mod tree_validator;
pub mod value_spec;

// Re-export commonly used types
pub use normalizer::{normalize, Arg, Required};
#[cfg(feature = "env")]
pub use resolver::process_resolver;
pub use resolver::{Resolver, ResolverBuilder};
pub use tree_validator::{report, validate, ValidationResult};
pub use value_spec::ValueSpec;
