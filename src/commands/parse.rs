//! Implementation of the `interview-qa parse` command.
//!
//! Runs the reply parser on a saved model reply, which helps diagnose
//! replies that failed during `generate`.

use crate::cli::ParseArgs;
use crate::config::Config;
use crate::error::{QaError, Result};
use crate::output::{OutputSchema, parse_reply};
use crate::render::{OutputFormat, render, render_json};
use chrono::Utc;
use std::io::Read;
use std::path::Path;

/// Execute the `interview-qa parse` command.
pub fn cmd_parse(config: &Config, args: ParseArgs) -> Result<()> {
    let raw = read_input(args.input.as_deref())?;
    print!("{}", render_reply(config, &args, &raw)?);
    Ok(())
}

/// Parse `raw` and render it in the requested format.
///
/// Text and HTML output name a role, which a saved reply does not carry, so
/// `--role` is required for them. JSON output ignores it.
fn render_reply(config: &Config, args: &ParseArgs, raw: &str) -> Result<String> {
    let role = match (args.format, args.role.as_deref()) {
        (OutputFormat::Json, _) => None,
        (_, Some(label)) => Some(config.find_role(label)?),
        (_, None) => {
            return Err(QaError::InvalidInput(
                "--role is required for text and html output of a parsed reply".to_string(),
            ));
        }
    };

    let result = parse_reply(&OutputSchema::interview(), raw)?;
    match role {
        Some(role) => render(args.format, role, &result, Utc::now()),
        None => render_json(&result),
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p).map_err(|e| {
            QaError::UserError(format!("failed to read reply file '{}': {}", p.display(), e))
        }),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| QaError::UserError(format!("failed to read stdin: {}", e)))?;
            Ok(buf)
        }
    }
}
