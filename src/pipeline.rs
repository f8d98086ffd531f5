//! The generation pipeline: role in, validated question/answer out.

use crate::error::Result;
use crate::llm::CompletionService;
use crate::output::{OutputSchema, QaResult, parse_reply};
use crate::prompt::FewShotPrompt;
use std::time::Instant;

/// Build the prompt for `role`, send it to `service`, and parse the reply.
///
/// An empty role is rejected before the service is called. Service and parse
/// failures are returned unchanged.
pub fn generate_interview_qa(
    prompt: &FewShotPrompt,
    schema: &OutputSchema,
    service: &dyn CompletionService,
    role: &str,
    temperature: f32,
) -> Result<QaResult> {
    let text = prompt.build(role)?;
    tracing::debug!(role = role.trim(), prompt_chars = text.chars().count(), "prompt built");

    let started = Instant::now();
    let reply = service.generate(&text, temperature)?;
    tracing::info!(
        role = role.trim(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        reply_chars = reply.chars().count(),
        "completion received"
    );

    let result = parse_reply(schema, &reply)?;
    tracing::debug!("reply parsed");
    Ok(result)
}
