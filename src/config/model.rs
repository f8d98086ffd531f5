//! Config struct definition and default implementation.

use super::types::*;
use crate::prompt::{Example, default_examples};
use serde::{Deserialize, Serialize};

/// Configuration for interview-qa.
///
/// This struct represents the contents of `interview-qa.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Completion service
    // =========================================================================
    /// Completion model name.
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature used when `--temperature` is not given.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Upper bound on generated tokens per reply.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Base URL of the OpenAI-compatible API (no trailing `/completions`).
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// HTTP request timeout.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    // =========================================================================
    // Prompt data
    // =========================================================================
    /// Roles offered for selection.
    #[serde(default = "default_roles")]
    pub roles: Vec<RoleOption>,

    /// Few-shot exemplars, in prompt order.
    #[serde(default = "default_examples")]
    pub examples: Vec<Example>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            api_base_url: default_api_base_url(),
            api_key_env: default_api_key_env(),
            timeout_seconds: default_timeout_seconds(),
            roles: default_roles(),
            examples: default_examples(),
        }
    }
}
