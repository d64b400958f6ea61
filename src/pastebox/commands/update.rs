use crate::commands::{helpers, CmdResult};
use crate::error::Result;
use crate::model::Paste;
use crate::notify::Notifier;
use crate::store::{PasteStore, StorageSlot, UpdateStatus};
use chrono::Utc;

pub fn run<S: StorageSlot, N: Notifier>(
    store: &mut PasteStore<S, N>,
    id: &str,
    title: String,
    content: String,
) -> Result<CmdResult> {
    helpers::require_non_empty(&title, &content)?;

    // created_at never changes on update. A missing id still goes through the
    // store so its "not found" outcome surfaces the usual way.
    let created_at = store
        .find(id)
        .map(|p| p.created_at)
        .unwrap_or_else(Utc::now);
    let paste = Paste {
        id: id.to_string(),
        title,
        content,
        created_at,
    };

    match store.update(paste.clone())? {
        UpdateStatus::Updated => Ok(CmdResult::default().with_pastes(vec![paste])),
        UpdateStatus::NotFound => Ok(CmdResult::default()),
    }
}
