//! # Storage Layer
//!
//! The paste collection lives in memory and is mirrored to a single named
//! slot in durable storage after every mutation. The slot is an opaque raw
//! string (a JSON array of pastes on the wire); [`StorageSlot`] abstracts
//! where it lives.
//!
//! ## Implementations
//!
//! - [`fs::FileSlot`]: production storage, one `pastes.json` file in the
//!   data directory
//! - [`memory::MemorySlot`]: in-process slot for tests, including seeding
//!   raw (possibly corrupt) contents
//!
//! ## Consistency
//!
//! There is no transaction primitive underneath. The store keeps memory and
//! slot equal by serializing the full collection and persisting it
//! immediately after each in-memory change. `reset` deletes the slot itself
//! rather than persisting an empty list, so a fresh load after a reset finds
//! nothing. Two processes mutating the same slot concurrently is not a
//! supported scenario.

use crate::error::Result;
use crate::model::Paste;
use crate::notify::{Notification, Notifier};

pub mod fs;
pub mod memory;

/// A named synchronous key-value slot holding the serialized collection.
pub trait StorageSlot {
    /// Read the slot. `None` means the slot does not exist.
    fn load(&self) -> Result<Option<String>>;

    /// Overwrite the slot with the given contents.
    fn persist(&mut self, raw: &str) -> Result<()>;

    /// Delete the slot entirely.
    fn clear(&mut self) -> Result<()>;
}

/// Outcome of [`PasteStore::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStatus {
    Updated,
    NotFound,
}

/// Outcome of [`PasteStore::remove`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveStatus {
    Removed,
    NotFound,
}

/// The authoritative paste collection.
///
/// Owns an ordered `Vec<Paste>` (insertion order = creation order), the
/// storage slot it mirrors to, and the notifier it reports outcomes through.
/// All operations are synchronous; lookups are linear scans by id, first
/// match wins.
pub struct PasteStore<S: StorageSlot, N: Notifier> {
    pastes: Vec<Paste>,
    slot: S,
    notifier: N,
}

impl<S: StorageSlot, N: Notifier> PasteStore<S, N> {
    /// Opens the store, loading any previously persisted collection.
    ///
    /// An absent slot starts the store empty. So does an unparsable one:
    /// corrupt data is treated as recoverable rather than a hard failure.
    pub fn open(slot: S, notifier: N) -> Result<Self> {
        let pastes = match slot.load()? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            None => Vec::new(),
        };
        Ok(Self {
            pastes,
            slot,
            notifier,
        })
    }

    /// Appends a paste to the end of the collection and persists.
    ///
    /// The caller supplies the id; no duplicate check happens here.
    pub fn add(&mut self, paste: Paste) -> Result<()> {
        self.pastes.push(paste);
        self.persist()?;
        self.notifier
            .notify(Notification::success("Paste created successfully"));
        Ok(())
    }

    /// Replaces the entry whose id matches `paste.id`, preserving its
    /// position, and persists. A missing id leaves the collection untouched
    /// and emits a "not found" notification instead.
    pub fn update(&mut self, paste: Paste) -> Result<UpdateStatus> {
        match self.pastes.iter().position(|p| p.id == paste.id) {
            Some(index) => {
                self.pastes[index] = paste;
                self.persist()?;
                self.notifier
                    .notify(Notification::success("Paste updated successfully"));
                Ok(UpdateStatus::Updated)
            }
            None => {
                self.notifier.notify(Notification::error("Paste not found"));
                Ok(UpdateStatus::NotFound)
            }
        }
    }

    /// Removes the entry with the given id and persists.
    ///
    /// A missing id is ignored without a notification. Update reports "not
    /// found"; remove historically stays quiet, and that asymmetry is kept.
    pub fn remove(&mut self, id: &str) -> Result<RemoveStatus> {
        match self.pastes.iter().position(|p| p.id == id) {
            Some(index) => {
                self.pastes.remove(index);
                self.persist()?;
                self.notifier
                    .notify(Notification::success("Paste deleted successfully"));
                Ok(RemoveStatus::Removed)
            }
            None => Ok(RemoveStatus::NotFound),
        }
    }

    /// Clears the collection and deletes the persisted slot. No notification.
    pub fn reset(&mut self) -> Result<()> {
        self.pastes.clear();
        self.slot.clear()
    }

    /// Read-only view of the current collection.
    pub fn snapshot(&self) -> &[Paste] {
        &self.pastes
    }

    /// Linear lookup by id.
    pub fn find(&self, id: &str) -> Option<&Paste> {
        self.pastes.iter().find(|p| p.id == id)
    }

    fn persist(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.pastes)?;
        self.slot.persist(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemorySlot;
    use super::*;
    use crate::notify::{NotifyLevel, NullNotifier, RecordingNotifier};

    fn paste(id: &str, title: &str, content: &str) -> Paste {
        Paste {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
        }
    }

    fn open_store() -> (PasteStore<MemorySlot, RecordingNotifier>, MemorySlot, RecordingNotifier)
    {
        let slot = MemorySlot::new();
        let notifier = RecordingNotifier::new();
        let store = PasteStore::open(slot.clone(), notifier.clone()).unwrap();
        (store, slot, notifier)
    }

    fn reload(slot: &MemorySlot) -> Vec<Paste> {
        PasteStore::open(slot.clone(), RecordingNotifier::new())
            .unwrap()
            .snapshot()
            .to_vec()
    }

    #[test]
    fn add_appends_persists_and_notifies() {
        let (mut store, slot, notifier) = open_store();
        store.add(paste("a1", "T1", "C1")).unwrap();

        assert_eq!(store.snapshot().len(), 1);
        assert_eq!(reload(&slot), store.snapshot());
        assert_eq!(
            notifier.notifications(),
            vec![Notification::success("Paste created successfully")]
        );
    }

    #[test]
    fn update_replaces_in_place_and_preserves_position() {
        let (mut store, slot, _) = open_store();
        store.add(paste("a1", "T1", "C1")).unwrap();
        store.add(paste("a2", "T2", "C2")).unwrap();
        store.add(paste("a3", "T3", "C3")).unwrap();

        let status = store.update(paste("a2", "T2-edited", "C2")).unwrap();

        assert_eq!(status, UpdateStatus::Updated);
        let ids: Vec<&str> = store.snapshot().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "a2", "a3"]);
        assert_eq!(store.snapshot()[1].title, "T2-edited");
        assert_eq!(store.snapshot()[0], paste("a1", "T1", "C1"));
        assert_eq!(store.snapshot()[2], paste("a3", "T3", "C3"));
        assert_eq!(reload(&slot), store.snapshot());
    }

    #[test]
    fn update_missing_id_reports_not_found_and_changes_nothing() {
        let (mut store, slot, notifier) = open_store();
        store.add(paste("a1", "T1", "C1")).unwrap();
        let persisted_before = slot.raw();

        let status = store.update(paste("zz", "T", "C")).unwrap();

        assert_eq!(status, UpdateStatus::NotFound);
        assert_eq!(store.snapshot().len(), 1);
        assert_eq!(slot.raw(), persisted_before);
        let last = notifier.notifications().pop().unwrap();
        assert_eq!(last, Notification::error("Paste not found"));
    }

    #[test]
    fn remove_shrinks_collection_by_one() {
        let (mut store, slot, notifier) = open_store();
        store.add(paste("a1", "T1", "C1")).unwrap();
        store.add(paste("a2", "T2", "C2")).unwrap();

        let status = store.remove("a1").unwrap();

        assert_eq!(status, RemoveStatus::Removed);
        assert_eq!(store.snapshot().len(), 1);
        assert!(store.find("a1").is_none());
        assert_eq!(reload(&slot), store.snapshot());
        assert_eq!(
            notifier.notifications().last().unwrap().message,
            "Paste deleted successfully"
        );
    }

    #[test]
    fn remove_missing_id_is_silent() {
        let (mut store, _, notifier) = open_store();
        store.add(paste("a1", "T1", "C1")).unwrap();
        let count_before = notifier.notifications().len();

        let status = store.remove("zz").unwrap();

        assert_eq!(status, RemoveStatus::NotFound);
        assert_eq!(store.snapshot().len(), 1);
        assert_eq!(notifier.notifications().len(), count_before);
    }

    #[test]
    fn reset_empties_collection_and_deletes_the_slot() {
        let (mut store, slot, _) = open_store();
        store.add(paste("a1", "T1", "C1")).unwrap();

        store.reset().unwrap();

        assert!(store.snapshot().is_empty());
        assert_eq!(slot.raw(), None);
        assert!(reload(&slot).is_empty());
    }

    #[test]
    fn corrupt_slot_contents_fall_back_to_empty() {
        let slot = MemorySlot::with_raw("definitely not json");
        let store = PasteStore::open(slot, NullNotifier).unwrap();
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn first_match_wins_when_ids_collide() {
        let (mut store, _, _) = open_store();
        store.add(paste("a1", "first", "C")).unwrap();
        store.add(paste("a1", "second", "C")).unwrap();

        store.update(paste("a1", "edited", "C")).unwrap();

        assert_eq!(store.snapshot()[0].title, "edited");
        assert_eq!(store.snapshot()[1].title, "second");
    }

    // The full lifecycle: memory equals the persisted copy after every step,
    // and a reset leaves the slot absent.
    #[test]
    fn memory_mirrors_slot_across_a_full_lifecycle() {
        let (mut store, slot, notifier) = open_store();

        store.add(paste("a1", "T1", "C1")).unwrap();
        assert_eq!(reload(&slot), store.snapshot());

        store.update(paste("a1", "T1-edited", "C1")).unwrap();
        assert_eq!(store.snapshot().len(), 1);
        assert_eq!(store.snapshot()[0].title, "T1-edited");
        assert_eq!(reload(&slot), store.snapshot());

        store.remove("a1").unwrap();
        assert!(store.snapshot().is_empty());
        assert_eq!(reload(&slot), store.snapshot());

        let status = store.update(paste("zz", "T", "C")).unwrap();
        assert_eq!(status, UpdateStatus::NotFound);
        assert!(store.snapshot().is_empty());
        assert_eq!(
            notifier.notifications().last().unwrap().level,
            NotifyLevel::Error
        );
    }
}
