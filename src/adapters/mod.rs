// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing implementations of the ports.
//!
//! This module contains concrete environment sources plus the bundled
//! transformers and validators. Each environment adapter implements the
//! `EnvSource` trait to provide raw values from a specific place.

pub mod map_env;
#[cfg(feature = "env")]
pub mod process_env;
pub mod transformers;
pub mod validators;

// Re-export adapters based on feature flags
pub use map_env::MapEnv;
#[cfg(feature = "env")]
pub use process_env::ProcessEnv;
pub use transformers::Kind;
