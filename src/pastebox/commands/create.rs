use crate::commands::{helpers, CmdResult};
use crate::error::Result;
use crate::model::Paste;
use crate::notify::Notifier;
use crate::store::{PasteStore, StorageSlot};

pub fn run<S: StorageSlot, N: Notifier>(
    store: &mut PasteStore<S, N>,
    title: String,
    content: String,
) -> Result<CmdResult> {
    helpers::require_non_empty(&title, &content)?;

    let paste = Paste::new(title, content);
    store.add(paste.clone())?;

    Ok(CmdResult::default().with_pastes(vec![paste]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;
    use crate::store::memory::MemorySlot;

    fn store() -> PasteStore<MemorySlot, RecordingNotifier> {
        PasteStore::open(MemorySlot::new(), RecordingNotifier::new()).unwrap()
    }

    #[test]
    fn creates_a_paste_with_a_generated_id() {
        let mut store = store();
        let result = run(&mut store, "Title".into(), "Content".into()).unwrap();

        assert_eq!(result.pastes.len(), 1);
        assert!(!result.pastes[0].id.is_empty());
        assert_eq!(store.snapshot().len(), 1);
        assert_eq!(store.snapshot()[0].title, "Title");
    }

    #[test]
    fn rejects_an_empty_title() {
        let mut store = store();
        let result = run(&mut store, "  ".into(), "Content".into());

        assert!(result.is_err());
        assert!(store.snapshot().is_empty());
    }
}
