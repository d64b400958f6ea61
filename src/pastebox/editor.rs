use crate::error::{PasteboxError, Result};
use std::env;
use std::fs;
use std::process::Command;

/// Title/content pair as it round-trips through an editor buffer.
///
/// Buffer format: first line is the title, then a blank line, then the
/// content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorContent {
    pub title: String,
    pub content: String,
}

impl EditorContent {
    pub fn new(title: String, content: String) -> Self {
        Self { title, content }
    }

    pub fn to_buffer(&self) -> String {
        format!("{}\n\n{}", self.title, self.content)
    }

    pub fn from_buffer(buffer: &str) -> Self {
        let mut lines = buffer.lines();
        let title = lines.next().unwrap_or("").trim().to_string();

        let rest: Vec<&str> = lines.collect();
        let body_start = rest.iter().position(|l| !l.trim().is_empty()).unwrap_or(0);
        let content = rest[body_start.min(rest.len())..].join("\n");

        Self {
            title,
            content: content.trim_end().to_string(),
        }
    }
}

/// Opens `$VISUAL`/`$EDITOR` (falling back to vi) on the given content and
/// returns the parsed result.
pub fn edit_content(initial: &EditorContent) -> Result<EditorContent> {
    let editor = env::var("VISUAL")
        .or_else(|_| env::var("EDITOR"))
        .unwrap_or_else(|_| "vi".to_string());

    let buffer_path = env::temp_dir().join(format!(
        "pastebox-{}-{}.txt",
        std::process::id(),
        chrono::Utc::now().timestamp_millis()
    ));
    fs::write(&buffer_path, initial.to_buffer()).map_err(PasteboxError::Io)?;

    let status = Command::new(&editor)
        .arg(&buffer_path)
        .status()
        .map_err(|e| PasteboxError::Api(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        let _ = fs::remove_file(&buffer_path);
        return Err(PasteboxError::Api(format!(
            "Editor '{}' exited with an error",
            editor
        )));
    }

    let buffer = fs::read_to_string(&buffer_path).map_err(PasteboxError::Io)?;
    let _ = fs::remove_file(&buffer_path);

    Ok(EditorContent::from_buffer(&buffer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_roundtrip() {
        let original = EditorContent::new("Title".into(), "line one\nline two".into());
        let parsed = EditorContent::from_buffer(&original.to_buffer());
        assert_eq!(parsed, original);
    }

    #[test]
    fn parses_a_buffer_with_extra_blank_lines() {
        let parsed = EditorContent::from_buffer("Title\n\n\n\nBody\n");
        assert_eq!(parsed.title, "Title");
        assert_eq!(parsed.content, "Body");
    }

    #[test]
    fn empty_buffer_parses_to_empty_fields() {
        let parsed = EditorContent::from_buffer("");
        assert_eq!(parsed.title, "");
        assert_eq!(parsed.content, "");
    }
}
