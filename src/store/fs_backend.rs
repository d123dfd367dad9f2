use super::backend::StorageBackend;
use crate::error::{RecipeBoxError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Filesystem backend: each key is stored as `<key>.json` under the data
/// directory. The directory is created lazily on first write.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_filename(key: &str) -> String {
        format!("{}.json", key)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(RecipeBoxError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.root.join(Self::entry_filename(key));
        if !path.exists() {
            return Ok(None);
        }
        let blob = fs::read_to_string(path).map_err(RecipeBoxError::Io)?;
        Ok(Some(blob))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;

        let target_path = self.root.join(Self::entry_filename(key));

        // Atomic write
        let tmp_path = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_path, value).map_err(RecipeBoxError::Io)?;
        fs::rename(&tmp_path, target_path).map_err(RecipeBoxError::Io)?;

        Ok(())
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(Self::entry_filename(key))
    }
}
