use crate::config::RoleOption;
use crate::output::QaResult;

pub fn render_text(role: &RoleOption, result: &QaResult) -> String {
    let rule = "-".repeat(60);
    format!(
        "{rule}\n직무: {}\n{rule}\n\n📝 질문\n{}\n\n💬 답변\n{}\n",
        role.label.trim(),
        result.question,
        result.answer,
    )
}
