// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process environment source adapter.
//!
//! This module provides an adapter that reads raw values from the environment
//! of the running process. Values are read on every lookup; nothing is cached,
//! so changes made with `std::env::set_var` are seen immediately.

use crate::ports::EnvSource;
use std::env;

/// Maximum length for environment variable names (prevents DoS)
const MAX_ENV_KEY_LEN: usize = 512;

/// Environment source adapter for the process environment.
///
/// An optional prefix is prepended to every requested name, so a resolver
/// asking for `PORT` through `ProcessEnv::with_prefix("MYAPP_")` reads
/// `MYAPP_PORT`.
///
/// Values that are not valid UTF-8 are treated as unset and logged at `warn`.
///
/// # Examples
///
/// ```rust
/// use hexenv::adapters::ProcessEnv;
/// use hexenv::ports::EnvSource;
///
/// let source = ProcessEnv::new();
/// assert!(source.get_raw("HEXENV_DOC_SURELY_UNSET").is_none());
///
/// let prefixed = ProcessEnv::with_prefix("MYAPP_");
/// assert_eq!(prefixed.prefix(), Some("MYAPP_"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProcessEnv {
    prefix: Option<String>,
}

impl ProcessEnv {
    /// Creates an adapter that reads names as given.
    pub fn new() -> Self {
        Self { prefix: None }
    }

    /// Creates an adapter that prepends `prefix` to every name it reads.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    /// The prefix prepended to every name, if any.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    fn full_name(&self, name: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}{}", prefix, name),
            None => name.to_string(),
        }
    }
}

impl EnvSource for ProcessEnv {
    fn name(&self) -> &str {
        "env"
    }

    fn get_raw(&self, name: &str) -> Option<String> {
        let full_name = self.full_name(name);

        // Names `std::env` cannot represent are never defined.
        if full_name.is_empty() || full_name.contains(|c: char| c == '=' || c == '\0') {
            return None;
        }
        if full_name.len() > MAX_ENV_KEY_LEN {
            tracing::debug!(
                "Skipping oversized environment variable name: len={} (max={})",
                full_name.len(),
                MAX_ENV_KEY_LEN
            );
            return None;
        }

        match env::var_os(&full_name)?.into_string() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(
                    "Environment variable '{}' is not valid UTF-8; treating it as unset",
                    full_name
                );
                None
            }
        }
    }
}
