//! Few-shot prompt construction.
//!
//! - **Template**: `{variable}` substitution for example blocks and the suffix
//! - **Examples**: the built-in (role, question, answer) exemplars
//! - **Builder**: joins examples, the role suffix, and output format instructions
//!
//! The prompt for role `개발자` looks like:
//!
//! ```text
//! 직무: 개발자
//! 질문: 협업 중 문제 해결 경험?
//! 답변: Git 충돌 해결하며 커뮤니케이션 개선
//!
//!
//! ...
//!
//! 직무: 개발자
//! 질문:
//! The output should be a markdown code snippet ...
//! ```

mod builder;
mod examples;
mod template;

pub use builder::FewShotPrompt;
pub use examples::{Example, default_examples};
