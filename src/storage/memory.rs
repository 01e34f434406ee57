use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::StorageError;

use super::Storage;

/// Process-local slots, lost on exit
#[derive(Debug, Default)]
pub(crate) struct MemoryStorage {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub(crate) fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_slot_is_none() {
        let storage = MemoryStorage::default();
        assert_eq!(storage.get_item("nothing").unwrap(), None);
    }

    #[test]
    fn set_overwrites() {
        let storage = MemoryStorage::with_item("k", "old");
        storage.set_item("k", "new").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("new"));
    }
}
