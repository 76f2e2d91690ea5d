//! Shared CLI utilities.

use anyhow::{Context, Result};
use std::fs;
use std::io::{IsTerminal, Read};
use std::path::Path;

use crate::domain::Document;

/// Resolve text from an inline argument, a file, or piped stdin, in that order.
pub fn read_text_input(inline: Option<&str>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = inline {
        return Ok(text.to_string());
    }
    if let Some(path) = file {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed reading text file: {}", path.display()));
    }

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        anyhow::bail!("No text given: pass TEXT, --file, or pipe text on stdin");
    }
    let mut buf = String::new();
    stdin.read_to_string(&mut buf).context("Failed reading stdin")?;
    Ok(buf)
}

/// Load a document saved as JSON or YAML; the format follows the extension.
pub fn load_document(path: &Path) -> Result<Document> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed reading document: {}", path.display()))?;
    parse_document(&content, path)
}

pub fn parse_document(content: &str, path: &Path) -> Result<Document> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
    match ext.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(content)
            .with_context(|| format!("Invalid YAML document: {}", path.display())),
        _ => serde_json::from_str(content)
            .with_context(|| format!("Invalid JSON document: {}", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DocumentKind;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn inline_text_wins() {
        let text = read_text_input(Some("abc"), Some(Path::new("/nonexistent"))).expect("text");
        assert_eq!(text, "abc");
    }

    #[test]
    fn reads_text_file() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("reason.txt");
        fs::write(&path, "감기\n").expect("write");
        assert_eq!(read_text_input(None, Some(&path)).expect("text"), "감기\n");
    }

    #[test]
    fn missing_text_file_is_an_error() {
        let tmp = TempDir::new().expect("tmp");
        assert!(read_text_input(None, Some(&tmp.path().join("nope.txt"))).is_err());
    }

    #[test]
    fn document_format_follows_extension() {
        let yaml = parse_document("type: absence\nname: 홍길동\n", &PathBuf::from("a.yml"))
            .expect("yaml");
        assert_eq!(yaml.kind(), DocumentKind::Absence);

        let json = parse_document(r#"{"type":"trip_report"}"#, &PathBuf::from("a.json"))
            .expect("json");
        assert_eq!(json.kind(), DocumentKind::TripReport);

        assert!(parse_document("type: absence", &PathBuf::from("a.json")).is_err());
    }
}
