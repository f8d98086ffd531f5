//! Blocking client for OpenAI-compatible text completions.

use super::CompletionService;
use super::credentials::ApiCredential;
use crate::config::Config;
use crate::error::{QaError, Result};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Connection settings taken from [`Config`] at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSettings {
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl From<&Config> for ClientSettings {
    fn from(config: &Config) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }
}

impl ClientSettings {
    fn completions_url(&self) -> String {
        format!("{}/completions", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    #[serde(default)]
    text: Option<String>,
}

/// `/completions` client holding its credential for its whole lifetime.
#[derive(Debug)]
pub struct OpenAiCompletions {
    client: Client,
    settings: ClientSettings,
    credential: ApiCredential,
}

impl OpenAiCompletions {
    pub fn new(settings: ClientSettings, credential: ApiCredential) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| {
                QaError::ConfigurationError(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            settings,
            credential,
        })
    }
}

impl CompletionService for OpenAiCompletions {
    fn generate(&self, prompt: &str, temperature: f32) -> Result<String> {
        let url = self.settings.completions_url();
        let body = CompletionRequest {
            model: &self.settings.model,
            prompt,
            temperature,
            max_tokens: self.settings.max_tokens,
        };

        tracing::debug!(%url, model = %self.settings.model, temperature, "requesting completion");
        let started = Instant::now();

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.credential.expose())
            .json(&body)
            .send()
            .map_err(|e| {
                QaError::ConfigurationError(format!(
                    "completion service unreachable at {}: {}",
                    url, e
                ))
            })?;

        let status = response.status();
        tracing::debug!(
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "completion response received"
        );

        if !status.is_success() {
            let detail = response.text().unwrap_or_default();
            return Err(status_error(status, &detail));
        }

        let payload: CompletionResponse = response.json().map_err(|e| {
            QaError::ConfigurationError(format!("unexpected completion response body: {}", e))
        })?;

        extract_text(payload)
    }
}

fn status_error(status: StatusCode, detail: &str) -> QaError {
    let detail = detail.trim();
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => QaError::ConfigurationError(format!(
            "credential rejected by completion service ({}). Check your API key.",
            status
        )),
        _ if detail.is_empty() => {
            QaError::ConfigurationError(format!("completion service returned {}", status))
        }
        _ => QaError::ConfigurationError(format!(
            "completion service returned {}: {}",
            status, detail
        )),
    }
}

fn extract_text(payload: CompletionResponse) -> Result<String> {
    payload
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.text)
        .ok_or_else(|| {
            QaError::ConfigurationError("completion response contained no text".to_string())
        })
}
