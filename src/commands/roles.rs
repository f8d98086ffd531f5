//! Implementation of the `interview-qa roles` command.

use crate::config::Config;
use crate::error::Result;

/// List selectable roles with their display colors.
pub fn cmd_roles(config: &Config) -> Result<()> {
    print!("{}", format_roles(config));
    Ok(())
}

// Colors are validated as `#RRGGBB`, so leading with them keeps the labels
// aligned whatever their display width.
fn format_roles(config: &Config) -> String {
    config
        .roles
        .iter()
        .map(|r| format!("{}  {}\n", r.color, r.label.trim()))
        .collect()
}
