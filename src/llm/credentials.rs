//! API credential, read once at startup.

use crate::error::{QaError, Result};
use std::fmt;

/// Bearer token for the completion service.
///
/// `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredential(String);

impl ApiCredential {
    /// Read the key from the environment variable `var`.
    pub fn from_env(var: &str) -> Result<Self> {
        Self::from_lookup(var, |name| std::env::var(name).ok())
    }

    /// Resolve the key through `lookup`; missing or blank values are errors.
    pub fn from_lookup<F>(var: &str, lookup: F) -> Result<Self>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        match lookup(var) {
            Some(value) if !value.trim().is_empty() => Ok(Self(value.trim().to_string())),
            Some(_) => Err(QaError::ConfigurationError(format!(
                "{} is set but empty. Export a valid API key.",
                var
            ))),
            None => Err(QaError::ConfigurationError(format!(
                "{} is not set. Export your API key, e.g. `export {}=sk-...`.",
                var, var
            ))),
        }
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiCredential(***)")
    }
}
