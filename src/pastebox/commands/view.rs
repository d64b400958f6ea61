use crate::commands::CmdResult;
use crate::error::{PasteboxError, Result};
use crate::notify::Notifier;
use crate::store::{PasteStore, StorageSlot};

pub fn run<S: StorageSlot, N: Notifier>(
    store: &PasteStore<S, N>,
    id: &str,
) -> Result<CmdResult> {
    let paste = store
        .find(id)
        .cloned()
        .ok_or_else(|| PasteboxError::PasteNotFound(id.to_string()))?;
    Ok(CmdResult::default().with_pastes(vec![paste]))
}
