use crate::config::PasteboxConfig;
use crate::model::Paste;
use self::share::ShareLinks;

pub mod clear;
pub mod config;
pub mod create;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod share;
pub mod update;
pub mod view;

/// Structured outcome returned by command functions.
///
/// Mutation outcomes reach the user through the store's notifier; this
/// carries the data a UI renders afterwards.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub pastes: Vec<Paste>,
    pub links: Option<ShareLinks>,
    pub config: Option<PasteboxConfig>,
}

impl CmdResult {
    pub fn with_pastes(mut self, pastes: Vec<Paste>) -> Self {
        self.pastes = pastes;
        self
    }

    pub fn with_links(mut self, links: ShareLinks) -> Self {
        self.links = Some(links);
        self
    }

    pub fn with_config(mut self, config: PasteboxConfig) -> Self {
        self.config = Some(config);
        self
    }
}
