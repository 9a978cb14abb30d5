// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that define the interfaces
//! for the pluggable parts of resolution: where raw values come from, how they
//! are parsed, and how they are checked. These traits are implemented by
//! adapters in the adapters layer and by user code.

pub mod env_source;
pub mod transformer;
pub mod validator;

// Re-export commonly used types
pub use env_source::EnvSource;
pub use transformer::{transformer_fn, SharedTransformer, Transformer};
pub use validator::{validator_fn, Messages, SharedValidator, Validator};
