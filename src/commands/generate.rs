//! Implementation of the `interview-qa generate` command.

use super::emit;
use crate::cli::GenerateArgs;
use crate::config::Config;
use crate::error::Result;
use crate::llm::{ApiCredential, ClientSettings, CompletionService, OpenAiCompletions};
use crate::output::OutputSchema;
use crate::pipeline::generate_interview_qa;
use crate::prompt::FewShotPrompt;
use crate::render::render;
use chrono::Utc;

/// Execute the `interview-qa generate` command.
///
/// The role and temperature are checked before the credential is read, and
/// the credential before any network call.
pub fn cmd_generate(config: &Config, args: GenerateArgs) -> Result<()> {
    config.find_role(&args.role)?;
    config.effective_temperature(args.temperature)?;

    let credential = ApiCredential::from_env(&config.api_key_env)?;
    let client = OpenAiCompletions::new(ClientSettings::from(config), credential)?;

    let rendered = run_generate(config, &args, &client)?;
    emit(args.output.as_deref(), &rendered)
}

/// Generate and render one pair using `service`.
pub(crate) fn run_generate(
    config: &Config,
    args: &GenerateArgs,
    service: &dyn CompletionService,
) -> Result<String> {
    let role = config.find_role(&args.role)?;
    let temperature = config.effective_temperature(args.temperature)?;

    let schema = OutputSchema::interview();
    let prompt = FewShotPrompt::new(config.examples.clone(), schema)?;

    tracing::info!(role = %role.label, temperature, "generating interview question");
    let result = generate_interview_qa(&prompt, &schema, service, &role.label, temperature)?;

    render(args.format, role, &result, Utc::now())
}
