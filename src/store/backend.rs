use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw key-value I/O.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// [`super::CollectionStore`] handles the "what" (the collection
/// contract, versioning, validation).
pub trait StorageBackend {
    /// Read the blob stored under `key`.
    /// Returns Ok(None) if no blob exists for the key.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write the blob under `key`, replacing any previous value.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial
    /// writes.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// The path of the entry for `key`.
    /// For [`super::fs_backend::FsBackend`] this is the real file path;
    /// for memory backends, a virtual one.
    fn entry_path(&self, key: &str) -> PathBuf;
}
