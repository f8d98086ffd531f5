//! Reply parser: fenced JSON block in, validated [`QaResult`] out.

use super::schema::{ANSWER_FIELD, OutputSchema, QUESTION_FIELD, QaResult};
use crate::error::{QaError, Result};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

// A fenced block: optional language tag, then the body up to the closing fence.
static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```([A-Za-z0-9_+-]*)[ \t]*\r?\n?(.*?)```").expect("fenced block pattern is valid")
});

/// Parse a model reply against `schema`.
///
/// The structured segment is the first ```` ```json ```` block. Without one,
/// the first untagged block holding a JSON object is used, and failing that
/// the whole reply when it is a bare JSON object. Blocks in other languages
/// are skipped. Every schema field must be present as a
/// string that is non-empty after trimming.
pub fn parse_reply(schema: &OutputSchema, raw: &str) -> Result<QaResult> {
    let segment = locate_segment(raw)
        .ok_or_else(|| QaError::parse("no fenced JSON block or JSON object found", raw))?;

    let value: Value = serde_json::from_str(segment)
        .map_err(|e| QaError::parse(format!("structured block is not valid JSON: {}", e), raw))?;

    let object = value
        .as_object()
        .ok_or_else(|| QaError::parse("structured block is not a JSON object", raw))?;

    for field in schema.fields() {
        required_string(object, field.name, raw)?;
    }

    Ok(QaResult::new(
        required_string(object, QUESTION_FIELD, raw)?,
        required_string(object, ANSWER_FIELD, raw)?,
    ))
}

fn locate_segment(raw: &str) -> Option<&str> {
    let blocks: Vec<(&str, &str)> = FENCED_BLOCK
        .captures_iter(raw)
        .filter_map(|caps| Some((caps.get(1)?.as_str(), caps.get(2)?.as_str().trim())))
        .collect();

    if let Some((_, body)) = blocks
        .iter()
        .find(|(tag, _)| tag.eq_ignore_ascii_case("json"))
    {
        return Some(*body);
    }

    if let Some((_, body)) = blocks
        .iter()
        .find(|(tag, body)| tag.is_empty() && holds_object(body))
    {
        return Some(*body);
    }

    let trimmed = raw.trim();
    trimmed.starts_with('{').then_some(trimmed)
}

fn holds_object(segment: &str) -> bool {
    serde_json::from_str::<Value>(segment).is_ok_and(|v| v.is_object())
}

fn required_string(object: &Map<String, Value>, key: &str, raw: &str) -> Result<String> {
    let value = object
        .get(key)
        .ok_or_else(|| QaError::parse(format!("missing key '{}'", key), raw))?;

    let text = value
        .as_str()
        .ok_or_else(|| QaError::parse(format!("key '{}' is not a string", key), raw))?
        .trim();

    if text.is_empty() {
        return Err(QaError::parse(format!("key '{}' is empty", key), raw));
    }
    Ok(text.to_string())
}
