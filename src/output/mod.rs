//! Structured output handling for model replies.
//!
//! The same [`OutputSchema`] drives three things: the formatting instructions
//! appended to every prompt, the encoder that renders a record in that format,
//! and the parser that reads a model reply back into a [`QaResult`].

mod parser;
mod schema;


pub use parser::parse_reply;
pub use schema::{ANSWER_FIELD, OutputSchema, QUESTION_FIELD, QaResult};
