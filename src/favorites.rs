//! Favorites repository: shared toggle state keyed by recipe id.
//!
//! Screens take this repository as an explicit dependency instead of
//! reaching into ambient global state. The set is persisted under its
//! own key so favorites survive across invocations; the collection blob
//! is never touched by favorite operations.

use std::path::PathBuf;
use uuid::Uuid;

use crate::error::Result;
use crate::store::StorageBackend;

/// The fixed key under which the favorited ids are kept.
pub const FAVORITES_KEY: &str = "favorites";

pub struct FavoritesRepo<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> FavoritesRepo<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn entry_path(&self) -> PathBuf {
        self.backend.entry_path(FAVORITES_KEY)
    }

    /// All favorited ids, in the order they were first favorited.
    pub fn all(&self) -> Result<Vec<Uuid>> {
        match self.backend.read(FAVORITES_KEY)? {
            None => Ok(Vec::new()),
            // A malformed blob is treated as an empty set, same policy
            // as the collection store.
            Some(blob) => Ok(serde_json::from_str(&blob).unwrap_or_default()),
        }
    }

    pub fn is_favorite(&self, id: &Uuid) -> Result<bool> {
        Ok(self.all()?.contains(id))
    }

    /// Flip the favorite state for `id` and return the new state.
    pub fn toggle(&mut self, id: &Uuid) -> Result<bool> {
        let mut ids = self.all()?;
        let now_favorite = match ids.iter().position(|f| f == id) {
            Some(pos) => {
                ids.remove(pos);
                false
            }
            None => {
                ids.push(*id);
                true
            }
        };

        let blob = serde_json::to_string_pretty(&ids)?;
        self.backend.write(FAVORITES_KEY, &blob)?;
        Ok(now_favorite)
    }

    /// Set the favorite state for `id`, idempotently. Returns true if
    /// the stored set changed; a no-op skips the write entirely.
    pub fn set(&mut self, id: &Uuid, favorite: bool) -> Result<bool> {
        let mut ids = self.all()?;
        let pos = ids.iter().position(|f| f == id);
        let changed = match (pos, favorite) {
            (None, true) => {
                ids.push(*id);
                true
            }
            (Some(pos), false) => {
                ids.remove(pos);
                true
            }
            _ => false,
        };

        if changed {
            let blob = serde_json::to_string_pretty(&ids)?;
            self.backend.write(FAVORITES_KEY, &blob)?;
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn test_toggle_flips_state() {
        let mut repo = FavoritesRepo::new(MemBackend::new());
        let id = Uuid::new_v4();

        assert!(!repo.is_favorite(&id).unwrap());
        assert!(repo.toggle(&id).unwrap());
        assert!(repo.is_favorite(&id).unwrap());
        assert!(!repo.toggle(&id).unwrap());
        assert!(!repo.is_favorite(&id).unwrap());
    }

    #[test]
    fn test_all_preserves_first_favorited_order() {
        let mut repo = FavoritesRepo::new(MemBackend::new());
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        repo.toggle(&a).unwrap();
        repo.toggle(&b).unwrap();
        assert_eq!(repo.all().unwrap(), vec![a, b]);

        // Re-favoriting moves an id to the back.
        repo.toggle(&a).unwrap();
        repo.toggle(&a).unwrap();
        assert_eq!(repo.all().unwrap(), vec![b, a]);
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut repo = FavoritesRepo::new(MemBackend::new());
        let id = Uuid::new_v4();

        assert!(repo.set(&id, true).unwrap());
        assert!(!repo.set(&id, true).unwrap());
        assert!(repo.is_favorite(&id).unwrap());

        assert!(repo.set(&id, false).unwrap());
        assert!(!repo.set(&id, false).unwrap());
        assert!(!repo.is_favorite(&id).unwrap());
    }

    #[test]
    fn test_set_false_on_absent_id_skips_the_write() {
        let mut repo = FavoritesRepo::new(MemBackend::new());
        repo.backend.set_simulate_write_error(true);

        // No state change, so the failing backend is never touched.
        assert!(!repo.set(&Uuid::new_v4(), false).unwrap());
    }

    #[test]
    fn test_malformed_blob_is_empty_set() {
        let repo = FavoritesRepo::new(MemBackend::new());
        repo.backend.write(FAVORITES_KEY, "garbage").unwrap();
        assert!(repo.all().unwrap().is_empty());
    }

    #[test]
    fn test_write_failure_propagates() {
        let mut repo = FavoritesRepo::new(MemBackend::new());
        repo.backend.set_simulate_write_error(true);
        assert!(repo.toggle(&Uuid::new_v4()).is_err());
    }
}
