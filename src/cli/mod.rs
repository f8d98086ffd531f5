//! CLI argument parsing for interview-qa.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::render::OutputFormat;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// interview-qa: generate a mock interview question and answer for a job role.
///
/// A few-shot prompt is built from worked examples, sent to an
/// OpenAI-compatible completion endpoint, and the structured reply is
/// rendered as text, JSON, or an HTML page.
#[derive(Parser, Debug)]
#[command(name = "interview-qa")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Path to the config file (default: ./interview-qa.yaml when present).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Available commands for interview-qa.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a question and answer for a role.
    ///
    /// Requires the API key environment variable named in the config
    /// (default: OPENAI_API_KEY).
    Generate(GenerateArgs),

    /// Print the exact prompt that would be sent for a role.
    ///
    /// Makes no network call. Any non-empty role is accepted.
    Prompt(PromptArgs),

    /// List the selectable roles.
    Roles,

    /// Parse a saved model reply and print the extracted fields.
    Parse(ParseArgs),

    /// Print the effective configuration as YAML.
    Config,
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Role label, one of the configured roles (see `interview-qa roles`).
    #[arg(short, long)]
    pub role: String,

    /// Sampling temperature (0.0 to 2.0); defaults to the configured value.
    #[arg(short, long)]
    pub temperature: Option<f32>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the rendered output to this file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `prompt` command.
#[derive(Parser, Debug)]
pub struct PromptArgs {
    /// Role to interpolate into the prompt.
    #[arg(short, long)]
    pub role: String,
}

/// Arguments for the `parse` command.
#[derive(Parser, Debug)]
pub struct ParseArgs {
    /// File containing the raw model reply (`-` or omitted reads stdin).
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Role to show in text and HTML output (required for those formats).
    #[arg(short, long)]
    pub role: Option<String>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
