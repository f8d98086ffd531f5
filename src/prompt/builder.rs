//! Few-shot prompt builder.

use super::examples::Example;
use super::template::{PromptTemplate, TemplateError};
use crate::error::{QaError, Result};
use crate::output::OutputSchema;
use std::collections::HashMap;

/// Template for each example block.
pub const EXAMPLE_TEMPLATE: &str = "직무: {role}\n질문: {question}\n답변: {answer}\n";

/// Template for the query block; the model continues after `질문:`.
pub const SUFFIX_TEMPLATE: &str = "직무: {input_role}\n질문:";

/// Separator placed between example blocks and before the suffix.
pub const EXAMPLE_SEPARATOR: &str = "\n\n";

/// Builds the exact text sent to the completion service.
///
/// Holds only immutable data; [`FewShotPrompt::build`] is a pure function
/// of the role.
#[derive(Debug, Clone)]
pub struct FewShotPrompt {
    examples: Vec<Example>,
    example_template: PromptTemplate,
    suffix: PromptTemplate,
    schema: OutputSchema,
}

impl FewShotPrompt {
    /// Create a builder over `examples`, kept in the given order.
    pub fn new(examples: Vec<Example>, schema: OutputSchema) -> Result<Self> {
        let example_template =
            PromptTemplate::new(EXAMPLE_TEMPLATE, &["role", "question", "answer"])
                .map_err(template_error)?;
        let suffix = PromptTemplate::new(SUFFIX_TEMPLATE, &["input_role"]).map_err(template_error)?;

        Ok(Self {
            examples,
            example_template,
            suffix,
            schema,
        })
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    /// Render one example block.
    pub fn render_example(&self, example: &Example) -> Result<String> {
        let vars = HashMap::from([
            ("role", example.role.as_str()),
            ("question", example.question.as_str()),
            ("answer", example.answer.as_str()),
        ]);
        self.example_template.format(&vars).map_err(template_error)
    }

    /// Build the full prompt for `role`.
    ///
    /// Rejects a role that is empty after trimming. Any other string is
    /// accepted; restricting to the selectable set is the caller's job.
    pub fn build(&self, role: &str) -> Result<String> {
        let role = validate_role(role)?;

        let mut pieces = Vec::with_capacity(self.examples.len() + 1);
        for example in &self.examples {
            pieces.push(self.render_example(example)?);
        }
        pieces.push(
            self.suffix
                .format(&HashMap::from([("input_role", role)]))
                .map_err(template_error)?,
        );
        pieces.retain(|p| !p.is_empty());

        let mut prompt = pieces.join(EXAMPLE_SEPARATOR);
        prompt.push('\n');
        prompt.push_str(&self.schema.format_instructions());
        Ok(prompt)
    }
}

/// Trim `role` and reject it if nothing is left.
fn validate_role(role: &str) -> Result<&str> {
    let trimmed = role.trim();
    if trimmed.is_empty() {
        return Err(QaError::InvalidInput("role must not be empty".to_string()));
    }
    Ok(trimmed)
}

fn template_error(err: TemplateError) -> QaError {
    QaError::UserError(format!("prompt template error: {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::default_examples;

    fn builder() -> FewShotPrompt {
        FewShotPrompt::new(default_examples(), OutputSchema::interview()).unwrap()
    }

    #[test]
    fn test_render_example_block() {
        let b = builder();
        let block = b.render_example(&b.examples()[0]).unwrap();
        assert_eq!(
            block,
            "직무: 개발자\n질문: 협업 중 문제 해결 경험?\n답변: Git 충돌 해결하며 커뮤니케이션 개선\n"
        );
    }

    #[test]
    fn test_prompt_layout() {
        let prompt = builder().build("개발자").unwrap();
        let expected_head = "직무: 개발자\n질문: 협업 중 문제 해결 경험?\n답변: Git 충돌 해결하며 커뮤니케이션 개선\n\
            \n\n\
            직무: UX 디자이너\n질문: 사용자 피드백 개선 사례?\n답변: 로그인 버튼 위치 변경으로 이탈률 감소\n\
            \n\n\
            직무: 기획자\n질문: 일정 지연 대처 경험?\n답변: 범위 조정과 외주 커뮤니케이션으로 일정 맞춤\n\
            \n\n\
            직무: 개발자\n질문:\n";
        assert!(prompt.starts_with(expected_head), "prompt was:\n{}", prompt);
        assert!(prompt.ends_with(&OutputSchema::interview().format_instructions()));
    }

    #[test]
    fn test_contains_role_and_examples_in_order() {
        let b = builder();
        for role in ["개발자", "데이터 엔지니어", "QA {lead}", "x"] {
            let prompt = b.build(role).unwrap();
            assert!(prompt.contains(role));

            let mut last = 0;
            for example in b.examples() {
                let block = b.render_example(example).unwrap();
                let at = prompt[last..]
                    .find(&block)
                    .map(|i| i + last)
                    .unwrap_or_else(|| panic!("example block missing or out of order: {}", block));
                last = at + block.len();
            }
        }
    }

    #[test]
    fn test_suffix_names_requested_role() {
        let prompt = builder().build("데이터 엔지니어").unwrap();
        let suffix_at = prompt.rfind("직무: ").unwrap();
        assert!(prompt[suffix_at..].starts_with("직무: 데이터 엔지니어\n질문:\n"));
    }

    #[test]
    fn test_build_is_deterministic() {
        let b = builder();
        assert_eq!(b.build("기획자").unwrap(), b.build("기획자").unwrap());
    }

    #[test]
    fn test_role_is_trimmed() {
        let b = builder();
        assert_eq!(b.build("  기획자 \n").unwrap(), b.build("기획자").unwrap());
    }

    #[test]
    fn test_empty_role_rejected() {
        let b = builder();
        for role in ["", "   ", "\n\t"] {
            match b.build(role) {
                Err(QaError::InvalidInput(msg)) => assert!(msg.contains("empty")),
                other => panic!("expected InvalidInput, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_no_examples_still_builds_suffix() {
        let b = FewShotPrompt::new(Vec::new(), OutputSchema::interview()).unwrap();
        let prompt = b.build("개발자").unwrap();
        assert!(prompt.starts_with("직무: 개발자\n질문:\n"));
    }
}
