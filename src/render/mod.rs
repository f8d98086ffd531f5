//! Output renderers for a generated question/answer pair.

mod html;
mod text;

pub use html::render_page;
pub use text::render_text;

use crate::config::RoleOption;
use crate::error::{QaError, Result};
use crate::output::QaResult;
use chrono::{DateTime, Utc};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Labelled plain text for the terminal.
    #[default]
    Text,
    /// The record as a JSON object.
    Json,
    /// A standalone, styled HTML page.
    Html,
}

/// Render `result` for `role` in the requested format.
pub fn render(
    format: OutputFormat,
    role: &RoleOption,
    result: &QaResult,
    generated_at: DateTime<Utc>,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(role, result)),
        OutputFormat::Json => render_json(result),
        OutputFormat::Html => Ok(render_page(role, result, generated_at)),
    }
}

/// The record as pretty JSON with a trailing newline; needs no role.
pub fn render_json(result: &QaResult) -> Result<String> {
    serde_json::to_string_pretty(result)
        .map(|json| json + "\n")
        .map_err(|e| QaError::UserError(format!("failed to serialize result: {}", e)))
}
