//! Built-in few-shot exemplars.
//!
//! These are style exemplars only. Their roles are not required to match the
//! selectable role list, and the two sets are configured independently.

use serde::{Deserialize, Serialize};

/// One worked example shown to the model before the real query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub role: String,
    pub question: String,
    pub answer: String,
}

impl Example {
    pub fn new(
        role: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// The three default exemplars, in prompt order.
pub fn default_examples() -> Vec<Example> {
    vec![
        Example::new(
            "개발자",
            "협업 중 문제 해결 경험?",
            "Git 충돌 해결하며 커뮤니케이션 개선",
        ),
        Example::new(
            "UX 디자이너",
            "사용자 피드백 개선 사례?",
            "로그인 버튼 위치 변경으로 이탈률 감소",
        ),
        Example::new(
            "기획자",
            "일정 지연 대처 경험?",
            "범위 조정과 외주 커뮤니케이션으로 일정 맞춤",
        ),
    ]
}
