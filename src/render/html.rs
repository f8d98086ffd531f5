//! Standalone HTML page with the question and answer blocks.
//!
//! The question block uses the role's color with white text; the answer block
//! is light grey. Every interpolated value is escaped.

use crate::config::RoleOption;
use crate::output::QaResult;
use chrono::{DateTime, Utc};
use html_escape::{encode_double_quoted_attribute, encode_text};

const TITLE: &str = "🎤 AI 면접 질문/답변 생성기";
const TAGLINE: &str = "직무에 맞는 인터뷰 질문과 답변을 AI가 자동으로 생성해드립니다.";
const TITLE_COLOR: &str = "#4CAF50";
const ANSWER_BACKGROUND: &str = "#eeeeee";

// Keeps the model's line breaks visible.
fn paragraph(text: &str) -> String {
    encode_text(text).replace('\n', "<br>\n")
}

/// Render a full HTML document for one generated pair.
pub fn render_page(role: &RoleOption, result: &QaResult, generated_at: DateTime<Utc>) -> String {
    let role_label = encode_text(role.label.trim());
    let color = encode_double_quoted_attribute(&role.color);
    let question = paragraph(&result.question);
    let answer = paragraph(&result.answer);
    let stamp = generated_at.format("%Y-%m-%d %H:%M:%S UTC");

    format!(
        r#"<!DOCTYPE html>
<html lang="ko">
<head>
<meta charset="utf-8">
<title>AI 면접 생성기 - {role_label}</title>
</head>
<body style="max-width:720px; margin:40px auto; font-family:sans-serif;">
<h1 style="text-align:center; color:{TITLE_COLOR};">{TITLE}</h1>
<p style="text-align:center;">{TAGLINE}</p>
<hr>
<p>🧑‍💼 직무: <strong>{role_label}</strong></p>
<div style="background-color:{color}; padding:20px; border-radius:10px;">
<h3 style="color:white;">📝 질문</h3>
<p style="color:white; font-size:18px;">{question}</p>
</div>
<br>
<div style="background-color:{ANSWER_BACKGROUND}; padding:20px; border-radius:10px;">
<h3>💬 답변</h3>
<p style="font-size:18px;">{answer}</p>
</div>
<p style="text-align:right; color:#999999; font-size:12px;">{stamp}</p>
</body>
</html>
"#
    )
}
