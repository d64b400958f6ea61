use crate::commands::CmdResult;
use crate::error::Result;
use crate::notify::Notifier;
use crate::store::{PasteStore, StorageSlot};

pub fn run<S: StorageSlot, N: Notifier>(store: &mut PasteStore<S, N>) -> Result<CmdResult> {
    store.reset()?;
    Ok(CmdResult::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::notify::RecordingNotifier;
    use crate::store::memory::MemorySlot;

    #[test]
    fn clears_every_paste_without_a_notification() {
        let slot = MemorySlot::new();
        let notifier = RecordingNotifier::new();
        let mut store = PasteStore::open(slot.clone(), notifier.clone()).unwrap();
        create::run(&mut store, "A".into(), "a".into()).unwrap();
        create::run(&mut store, "B".into(), "b".into()).unwrap();
        let count_before = notifier.notifications().len();

        run(&mut store).unwrap();

        assert!(store.snapshot().is_empty());
        assert_eq!(slot.raw(), None);
        assert_eq!(notifier.notifications().len(), count_before);
    }
}
