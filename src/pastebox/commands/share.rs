use crate::commands::CmdResult;
use crate::error::{PasteboxError, Result};
use crate::model::Paste;
use crate::notify::Notifier;
use crate::store::{PasteStore, StorageSlot};

/// Share URLs for one paste, ready to open in a browser or mail client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLinks {
    /// Direct link to the paste: `{base}/{id}`.
    pub url: String,
    pub whatsapp: String,
    pub twitter: String,
    pub facebook: String,
    pub email: String,
}

impl ShareLinks {
    pub fn for_paste(paste: &Paste, base_url: &str) -> Self {
        let url = format!("{}/{}", base_url.trim_end_matches('/'), paste.id);
        let title = urlencoding::encode(&paste.title);
        let content = urlencoding::encode(&paste.content);

        Self {
            whatsapp: format!("https://wa.me/?text={}%20{}", content, url),
            twitter: format!("https://twitter.com/intent/tweet?text={}&url={}", title, url),
            facebook: format!("https://www.facebook.com/sharer/sharer.php?u={}", url),
            email: format!("mailto:?subject={}&body={}%20{}", title, content, url),
            url,
        }
    }
}

pub fn run<S: StorageSlot, N: Notifier>(
    store: &PasteStore<S, N>,
    id: &str,
    base_url: &str,
) -> Result<CmdResult> {
    let paste = store
        .find(id)
        .ok_or_else(|| PasteboxError::PasteNotFound(id.to_string()))?;
    Ok(CmdResult::default().with_links(ShareLinks::for_paste(paste, base_url)))
}
