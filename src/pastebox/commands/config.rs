use crate::commands::CmdResult;
use crate::config::PasteboxConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    SetShareUrl(String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = PasteboxConfig::load(config_dir)?;

    match action {
        ConfigAction::ShowAll | ConfigAction::ShowKey(_) => {
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::SetShareUrl(url) => {
            config.set_share_url(&url);
            config.save(config_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
    }
}
