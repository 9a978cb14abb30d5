// SPDX-License-Identifier: MIT OR Apache-2.0

//! Helper utilities shared by the integration tests.

use hexenv::adapters::MapEnv;
use hexenv::service::Resolver;
use std::env;

/// Builds a resolver over an in-memory environment.
#[allow(dead_code)]
pub fn resolver_with(pairs: &[(&str, &str)]) -> Resolver {
    Resolver::from_source(pairs.iter().copied().collect::<MapEnv>())
}

/// Sets process environment variables and removes them again on drop.
///
/// Tests using it must pick variable names no other test touches.
#[allow(dead_code)]
pub struct EnvGuard {
    keys: Vec<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Creates a guard that has set nothing yet.
    pub fn new() -> Self {
        EnvGuard { keys: Vec::new() }
    }

    /// Sets a variable for the lifetime of the guard.
    pub fn set(&mut self, key: &str, value: &str) {
        env::set_var(key, value);
        self.keys.push(key.to_string());
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in &self.keys {
            env::remove_var(key);
        }
    }
}
