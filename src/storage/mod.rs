//! Key-value storage backends
//!
//! The pledge store reads and writes one named slot through the
//! [`Storage`] trait, the same get/set contract a browser's local
//! storage offers. Backends differ only in where the slot lives.

mod file;
#[cfg(test)]
mod memory;
mod sqlite;

use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;

use crate::error::StorageError;

pub(crate) use file::FileStorage;
#[cfg(test)]
pub(crate) use memory::MemoryStorage;
pub(crate) use sqlite::SqliteStorage;

/// Named text slots that persist across runs
pub(crate) trait Storage {
    /// Stored value for `key`, or `None` when the slot was never written
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value in `key`
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

/// Which backend holds the ledger
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Backend {
    /// One JSON file per slot (default)
    #[default]
    File,
    /// A key/value table in a SQLite database
    Sqlite,
}

/// Open the selected backend rooted at `data_dir`
pub(crate) fn open(backend: Backend, data_dir: &Path) -> Result<Box<dyn Storage>, StorageError> {
    match backend {
        Backend::File => Ok(Box::new(FileStorage::new(data_dir))),
        Backend::Sqlite => Ok(Box::new(SqliteStorage::open(
            &data_dir.join("ecopledge.db"),
        )?)),
    }
}
