//! Implementation of the `interview-qa config` command.

use crate::config::Config;
use crate::error::Result;

/// Print the effective configuration. The API key itself is never part of it.
pub fn cmd_config(config: &Config) -> Result<()> {
    print!("{}", config.to_yaml()?);
    Ok(())
}
