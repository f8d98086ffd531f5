//! Implementation of the `interview-qa prompt` command.

use crate::cli::PromptArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::OutputSchema;
use crate::prompt::FewShotPrompt;

/// Print the prompt for any non-empty role without calling the service.
pub fn cmd_prompt(config: &Config, args: PromptArgs) -> Result<()> {
    let prompt = FewShotPrompt::new(config.examples.clone(), OutputSchema::interview())?;
    let text = prompt.build(&args.role)?;
    tracing::debug!(examples = prompt.examples().len(), "prompt rendered");
    println!("{}", text);
    Ok(())
}
