use crate::error::{PasteboxError, Result};

/// Emptiness is a UI-layer rule: the store itself accepts empty titles.
pub fn require_non_empty(title: &str, content: &str) -> Result<()> {
    if title.trim().is_empty() || content.trim().is_empty() {
        return Err(PasteboxError::Api(
            "Title and content cannot be empty".to_string(),
        ));
    }
    Ok(())
}
