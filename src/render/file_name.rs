//! Saved-file naming: `문서제목(10901 홍길동)`

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::Document;

static UNSAFE_FILE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\\/:*?"<>|\x00-\x1f]"#).expect("valid file-name regex"));

/// Left-pad with zeros to two characters. Empty input becomes `00`.
fn pad2(value: &str) -> String {
    format!("{:0>2}", value)
}

/// Document title followed by the student code and name.
///
/// The student code is grade, two-digit class and two-digit number, so grade
/// 1, class 9, number 1 gives `10901`.
pub fn file_name(doc: &Document) -> String {
    let student = doc.student();
    let code = format!("{}{}{}", student.grade(), pad2(student.class_num()), pad2(student.number()));
    format!("{}({} {})", doc.kind().file_title(), code, student.name())
}

/// File name with path separators and reserved characters replaced.
pub fn safe_file_stem(name: &str) -> String {
    let cleaned = UNSAFE_FILE_CHARS.replace_all(name.trim(), "_");
    if cleaned.is_empty() {
        "document".to_string()
    } else {
        cleaned.into_owned()
    }
}
