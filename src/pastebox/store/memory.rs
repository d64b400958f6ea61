use super::StorageSlot;
use crate::error::Result;
use std::cell::RefCell;
use std::rc::Rc;

/// In-process storage slot for tests. Does NOT persist data.
///
/// Clones share the same underlying cell, so a test can hand one handle to
/// the store and keep another to inspect (or corrupt) what was persisted.
#[derive(Debug, Default, Clone)]
pub struct MemorySlot {
    contents: Rc<RefCell<Option<String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot pre-seeded with raw contents, valid JSON or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            contents: Rc::new(RefCell::new(Some(raw.into()))),
        }
    }

    /// Current raw contents, `None` if the slot is absent.
    pub fn raw(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl StorageSlot for MemorySlot {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.contents.borrow().clone())
    }

    fn persist(&mut self, raw: &str) -> Result<()> {
        *self.contents.borrow_mut() = Some(raw.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        *self.contents.borrow_mut() = None;
        Ok(())
    }
}
