//! Completion service boundary.
//!
//! The pipeline only needs `generate(prompt, temperature) -> text`. The
//! production implementation talks to an OpenAI-compatible `/completions`
//! endpoint; tests substitute an in-memory fake.

mod credentials;
mod openai;

pub use credentials::ApiCredential;
pub use openai::{ClientSettings, OpenAiCompletions};

use crate::error::Result;

/// An external text-completion capability.
///
/// Calls are blocking and may be slow or fail. Implementations own any
/// timeout policy; callers never retry.
pub trait CompletionService {
    fn generate(&self, prompt: &str, temperature: f32) -> Result<String>;
}
