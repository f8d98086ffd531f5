//! Configuration types and defaults for interview-qa.

use serde::{Deserialize, Serialize};

/// A role the user may select, with the color used for its question block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleOption {
    /// Label shown to the user and interpolated into the prompt.
    pub label: String,

    /// Background color of the rendered question block (`#RRGGBB`).
    #[serde(default = "default_role_color")]
    pub color: String,
}

impl RoleOption {
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }
}

/// Default selectable roles: developer, UX designer, planner.
pub fn default_roles() -> Vec<RoleOption> {
    vec![
        RoleOption::new("개발자", "#2196F3"),
        RoleOption::new("UX 디자이너", "#9C27B0"),
        RoleOption::new("기획자", "#4CAF50"),
    ]
}

// Default value functions for serde
pub(crate) fn default_model() -> String {
    "gpt-3.5-turbo-instruct".to_string()
}
pub(crate) fn default_temperature() -> f32 {
    0.7
}
pub(crate) fn default_max_tokens() -> u32 {
    256
}
pub(crate) fn default_api_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}
pub(crate) fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}
pub(crate) fn default_timeout_seconds() -> u64 {
    60
}
pub(crate) fn default_role_color() -> String {
    "#607D8B".to_string()
}
