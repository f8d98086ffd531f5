//! Config loading, validation, and lookup operations.

use super::model::Config;
use super::types::RoleOption;
use crate::error::{QaError, Result};
use std::collections::HashSet;
use std::path::Path;

/// Config file picked up from the current directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "interview-qa.yaml";

const TEMPERATURE_RANGE: std::ops::RangeInclusive<f32> = 0.0..=2.0;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            QaError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the effective config at startup.
    ///
    /// An explicit path must exist. Without one, `interview-qa.yaml` in the
    /// current directory is used when present, otherwise built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "loading config");
            return Self::load(path);
        }

        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            tracing::debug!(path = DEFAULT_CONFIG_FILE, "loading config from current directory");
            return Self::load(fallback);
        }

        tracing::debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml)
                .map_err(|e| QaError::UserError(format!("failed to parse config YAML: {}", e)))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| QaError::UserError(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values and return error on invalid values.
    pub fn validate(&self) -> Result<()> {
        check_temperature(self.temperature).map_err(invalid)?;

        if self.max_tokens == 0 {
            return Err(invalid("max_tokens must be greater than 0".to_string()));
        }
        if self.timeout_seconds == 0 {
            return Err(invalid("timeout_seconds must be greater than 0".to_string()));
        }
        if self.model.trim().is_empty() {
            return Err(invalid("model must not be empty".to_string()));
        }
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://")
        {
            return Err(invalid(format!(
                "api_base_url must start with http:// or https:// (found '{}')",
                self.api_base_url
            )));
        }
        if self.api_key_env.trim().is_empty() {
            return Err(invalid("api_key_env must not be empty".to_string()));
        }

        if self.roles.is_empty() {
            return Err(invalid("roles must list at least one role".to_string()));
        }
        let mut seen = HashSet::new();
        for role in &self.roles {
            let label = role.label.trim();
            if label.is_empty() {
                return Err(invalid("role labels must be non-empty".to_string()));
            }
            if !seen.insert(label) {
                return Err(invalid(format!("duplicate role label '{}'", label)));
            }
            if !is_hex_color(&role.color) {
                return Err(invalid(format!(
                    "role '{}' has color '{}'; expected the form #RRGGBB",
                    label, role.color
                )));
            }
        }

        if self.examples.is_empty() {
            return Err(invalid("examples must contain at least one entry".to_string()));
        }
        for (i, example) in self.examples.iter().enumerate() {
            if example.role.trim().is_empty()
                || example.question.trim().is_empty()
                || example.answer.trim().is_empty()
            {
                return Err(invalid(format!(
                    "example #{} must have non-empty role, question, and answer",
                    i + 1
                )));
            }
        }

        Ok(())
    }

    /// Look up a selectable role by label (surrounding whitespace ignored).
    pub fn find_role(&self, label: &str) -> Result<&RoleOption> {
        let wanted = label.trim();
        if wanted.is_empty() {
            return Err(QaError::InvalidInput("role must not be empty".to_string()));
        }

        self.roles
            .iter()
            .find(|r| r.label.trim() == wanted)
            .ok_or_else(|| {
                QaError::InvalidInput(format!(
                    "unknown role '{}'. Available roles: {}",
                    wanted,
                    self.role_labels().join(", ")
                ))
            })
    }

    pub fn role_labels(&self) -> Vec<&str> {
        self.roles.iter().map(|r| r.label.trim()).collect()
    }

    /// Pick the per-request temperature: an override if given, else the configured one.
    pub fn effective_temperature(&self, requested: Option<f32>) -> Result<f32> {
        match requested {
            Some(t) => {
                check_temperature(t).map_err(QaError::InvalidInput)?;
                Ok(t)
            }
            None => Ok(self.temperature),
        }
    }
}

fn check_temperature(t: f32) -> std::result::Result<(), String> {
    if TEMPERATURE_RANGE.contains(&t) {
        Ok(())
    } else {
        Err(format!(
            "temperature must be between {} and {} (found {})",
            TEMPERATURE_RANGE.start(),
            TEMPERATURE_RANGE.end(),
            t
        ))
    }
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

fn invalid(msg: String) -> QaError {
    QaError::UserError(format!("config validation failed: {}", msg))
}
