use crate::commands::CmdResult;
use crate::error::Result;
use crate::notify::Notifier;
use crate::store::{PasteStore, StorageSlot};

/// Lists pastes in insertion order, optionally filtered by a
/// case-insensitive title substring match.
pub fn run<S: StorageSlot, N: Notifier>(
    store: &PasteStore<S, N>,
    search: Option<&str>,
) -> Result<CmdResult> {
    let pastes = match search {
        Some(term) => {
            let term = term.to_lowercase();
            store
                .snapshot()
                .iter()
                .filter(|p| p.title.to_lowercase().contains(&term))
                .cloned()
                .collect()
        }
        None => store.snapshot().to_vec(),
    };

    Ok(CmdResult::default().with_pastes(pastes))
}
