//! Command implementations for interview-qa.
//!
//! The dispatcher resolves the configuration once, then routes each CLI
//! command to its handler. Nothing read at startup changes afterwards.

mod generate;
mod parse;
mod prompt;
mod roles;
mod show_config;

use crate::cli::{Command, GlobalArgs};
use crate::config::Config;
use crate::error::{QaError, Result};
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(global: &GlobalArgs, command: Command) -> Result<()> {
    let config = Config::resolve(global.config.as_deref())?;

    match command {
        Command::Generate(args) => generate::cmd_generate(&config, args),
        Command::Prompt(args) => prompt::cmd_prompt(&config, args),
        Command::Roles => roles::cmd_roles(&config),
        Command::Parse(args) => parse::cmd_parse(&config, args),
        Command::Config => show_config::cmd_config(&config),
    }
}

/// Write rendered output to `path`, or stdout when no path is given.
pub(crate) fn emit(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content).map_err(|e| {
                QaError::UserError(format!(
                    "failed to write output file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            tracing::info!(path = %path.display(), "output written");
            Ok(())
        }
        None => {
            print!("{}", content);
            Ok(())
        }
    }
}
