//! # API Facade
//!
//! Thin entry point for every pastebox operation. Dispatches to the command
//! layer, returns structured `Result<CmdResult>` values, and never touches
//! stdout or stderr — UI clients render what comes back, while mutation
//! toasts flow through the store's injected notifier.
//!
//! `PasteboxApi<S, N>` is generic over the storage slot and the notifier:
//! production runs on `FileSlot` plus a terminal notifier, tests on
//! `MemorySlot` plus `RecordingNotifier` with no filesystem at all.

use crate::commands;
use crate::config::PasteboxConfig;
use crate::error::Result;
use crate::notify::Notifier;
use crate::store::{PasteStore, StorageSlot};
use std::path::PathBuf;

pub struct PasteboxApi<S: StorageSlot, N: Notifier> {
    store: PasteStore<S, N>,
    config_dir: PathBuf,
}

impl<S: StorageSlot, N: Notifier> PasteboxApi<S, N> {
    pub fn new(store: PasteStore<S, N>, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    pub fn create_paste(&mut self, title: String, content: String) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, title, content)
    }

    pub fn update_paste(
        &mut self,
        id: &str,
        title: String,
        content: String,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, title, content)
    }

    pub fn delete_paste(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn list_pastes(&self, search: Option<&str>) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, search)
    }

    pub fn view_paste(&self, id: &str) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, id)
    }

    pub fn share_paste(&self, id: &str) -> Result<commands::CmdResult> {
        let config = PasteboxConfig::load(&self.config_dir)?;
        commands::share::run(&self.store, id, config.share_url())
    }

    pub fn clear_pastes(&mut self) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::share::ShareLinks;
pub use crate::commands::CmdResult;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;
    use crate::store::memory::MemorySlot;

    fn api() -> PasteboxApi<MemorySlot, RecordingNotifier> {
        let store = PasteStore::open(MemorySlot::new(), RecordingNotifier::new()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        PasteboxApi::new(store, dir.path().to_path_buf())
    }

    #[test]
    fn dispatches_create_then_list() {
        let mut api = api();
        api.create_paste("Title".into(), "Content".into()).unwrap();

        let listed = api.list_pastes(None).unwrap();
        assert_eq!(listed.pastes.len(), 1);
        assert_eq!(listed.pastes[0].title, "Title");
    }

    #[test]
    fn share_uses_the_default_config_when_none_saved() {
        let mut api = api();
        let created = api.create_paste("T".into(), "C".into()).unwrap();
        let id = created.pastes[0].id.clone();

        let links = api.share_paste(&id).unwrap().links.unwrap();
        assert!(links.url.starts_with("https://pastebox.app/p/"));
    }
}
