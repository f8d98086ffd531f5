//! Output schema, formatting instructions, and the matching encoder.

use serde::{Deserialize, Serialize};

/// Key of the interview question in the structured reply.
pub const QUESTION_FIELD: &str = "question";

/// Key of the model answer in the structured reply.
pub const ANSWER_FIELD: &str = "answer";

/// One named field the model must return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseField {
    pub name: &'static str,
    pub description: &'static str,
}

/// The parsed question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaResult {
    pub question: String,
    pub answer: String,
}

impl QaResult {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Value of the schema field `name`, if it is one of ours.
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            QUESTION_FIELD => Some(&self.question),
            ANSWER_FIELD => Some(&self.answer),
            _ => None,
        }
    }
}

/// Fixed output schema: an ordered list of string fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSchema {
    fields: &'static [ResponseField],
}

const INTERVIEW_FIELDS: &[ResponseField] = &[
    ResponseField {
        name: QUESTION_FIELD,
        description: "면접 질문",
    },
    ResponseField {
        name: ANSWER_FIELD,
        description: "면접 답변",
    },
];

impl Default for OutputSchema {
    fn default() -> Self {
        Self::interview()
    }
}

impl OutputSchema {
    /// The `question` / `answer` schema.
    pub const fn interview() -> Self {
        Self {
            fields: INTERVIEW_FIELDS,
        }
    }

    pub fn fields(&self) -> &'static [ResponseField] {
        self.fields
    }

    /// Instructions telling the model to answer with a fenced JSON block.
    pub fn format_instructions(&self) -> String {
        let body: String = self
            .fields
            .iter()
            .map(|f| format!("\t\"{}\": string  // {}\n", f.name, f.description))
            .collect();

        format!(
            "The output should be a markdown code snippet formatted in the following schema, \
             including the leading and trailing \"```json\" and \"```\":\n\n\
             ```json\n{{\n{body}}}\n```"
        )
    }

    /// Render `result` in exactly the shape the instructions ask for.
    ///
    /// [`parse_reply`](super::parse_reply) trims every value, so encoding
    /// followed by parsing returns the same record only when its fields carry
    /// no leading or trailing whitespace.
    pub fn encode(&self, result: &QaResult) -> String {
        let mut object = serde_json::Map::new();
        for field in self.fields {
            let value = result.field(field.name).unwrap_or_default();
            object.insert(
                field.name.to_string(),
                serde_json::Value::String(value.to_string()),
            );
        }
        // `{:#}` is the infallible pretty form of a `Value`.
        let json = format!("{:#}", serde_json::Value::Object(object))
            // Backticks only occur inside string values; escaping them keeps
            // a value from closing the fence early.
            .replace('`', "\\u0060");
        format!("```json\n{json}\n```")
    }
}
