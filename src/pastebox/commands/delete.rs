use crate::commands::CmdResult;
use crate::error::Result;
use crate::notify::Notifier;
use crate::store::{PasteStore, StorageSlot};

pub fn run<S: StorageSlot, N: Notifier>(
    store: &mut PasteStore<S, N>,
    id: &str,
) -> Result<CmdResult> {
    store.remove(id)?;
    Ok(CmdResult::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::notify::RecordingNotifier;
    use crate::store::memory::MemorySlot;

    #[test]
    fn deletes_by_id_and_ignores_unknown_ids() {
        let notifier = RecordingNotifier::new();
        let mut store = PasteStore::open(MemorySlot::new(), notifier.clone()).unwrap();
        let created = create::run(&mut store, "Title".into(), "Content".into()).unwrap();
        let id = created.pastes[0].id.clone();

        run(&mut store, "unknown").unwrap();
        assert_eq!(store.snapshot().len(), 1);

        run(&mut store, &id).unwrap();
        assert!(store.snapshot().is_empty());
        assert_eq!(
            notifier.notifications().last().unwrap().message,
            "Paste deleted successfully"
        );
    }
}
