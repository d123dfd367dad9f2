use super::backend::StorageBackend;
use crate::error::{RecipeBoxError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since recipebox is
/// single-threaded. This avoids the overhead of `RwLock` while still
/// allowing the `StorageBackend` trait to use `&self` for all methods.
pub struct MemBackend {
    entries: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
            simulate_write_error: RefCell::new(false),
        }
    }
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.borrow();
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(RecipeBoxError::Store("Simulated write error".to_string()));
        }
        let mut entries = self.entries.borrow_mut();
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        PathBuf::from(format!("memory://{}", key))
    }
}
