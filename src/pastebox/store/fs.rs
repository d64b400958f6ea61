use super::StorageSlot;
use crate::error::{PasteboxError, Result};
use std::fs;
use std::path::{Path, PathBuf};

const SLOT_FILENAME: &str = "pastes.json";

/// File-backed storage slot: one `pastes.json` under the data directory.
///
/// The directory is created on first persist, so a fresh install needs no
/// setup step. `clear` removes the file itself, which is what makes a
/// post-reset load start empty.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            path: data_dir.as_ref().join(SLOT_FILENAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageSlot for FileSlot {
    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path).map_err(PasteboxError::Io)?;
        Ok(Some(raw))
    }

    fn persist(&mut self, raw: &str) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(PasteboxError::Io)?;
            }
        }
        fs::write(&self.path, raw).map_err(PasteboxError::Io)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(PasteboxError::Io)?;
        }
        Ok(())
    }
}
