//! The Recipe Collection Store: single source of truth for the user's
//! custom recipes.
//!
//! Every operation is a self-contained load-mutate-persist cycle against
//! the `customrecipes` key. There are no multi-step transactions: the
//! store holds no in-memory state between calls, so two instances over
//! the same backend always observe each other's successful persists.
//!
//! Mutations are rejected whole when the target is invalid (index out of
//! range, unknown id, empty title) or when the version check fails; the
//! persisted sequence is never partially changed.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

use super::backend::StorageBackend;
use crate::error::{RecipeBoxError, Result};
use crate::model::{Recipe, RecipeDraft};

/// The fixed key under which the serialized collection blob is kept.
pub const RECIPES_KEY: &str = "customrecipes";

/// Where a loaded collection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// No blob exists yet; the collection was lazily materialized empty.
    Absent,
    /// Decoded from a stored blob.
    Blob,
    /// The stored blob was unreadable; treated as empty.
    Malformed,
}

/// A decoded collection snapshot plus the version it was loaded at.
#[derive(Debug)]
pub struct Loaded {
    pub version: u64,
    pub recipes: Vec<Recipe>,
    pub source: LoadSource,
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u64,
    recipes: &'a [Recipe],
}

#[derive(Deserialize)]
struct Envelope {
    version: u64,
    recipes: Vec<Recipe>,
}

pub struct CollectionStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> CollectionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// The path of the collection entry (for the `path` command).
    pub fn entry_path(&self) -> PathBuf {
        self.backend.entry_path(RECIPES_KEY)
    }

    /// Load the collection snapshot, including its version stamp.
    ///
    /// An absent key or a malformed blob both yield an empty collection;
    /// the two cases are distinguished by [`Loaded::source`] so callers
    /// can warn about the latter.
    pub fn load(&self) -> Result<Loaded> {
        match self.backend.read(RECIPES_KEY)? {
            None => Ok(Loaded {
                version: 0,
                recipes: Vec::new(),
                source: LoadSource::Absent,
            }),
            Some(blob) => Ok(decode(&blob)),
        }
    }

    /// Load the ordered sequence of recipes.
    pub fn load_all(&self) -> Result<Vec<Recipe>> {
        Ok(self.load()?.recipes)
    }

    /// Find a recipe by its stable id.
    pub fn get(&self, id: &Uuid) -> Result<Recipe> {
        self.load_all()?
            .into_iter()
            .find(|r| r.id == *id)
            .ok_or(RecipeBoxError::RecipeNotFound(*id))
    }

    /// Append a new recipe at the end of the collection.
    pub fn append(&mut self, draft: RecipeDraft) -> Result<Recipe> {
        draft.validate()?;
        let loaded = self.load()?;
        let mut recipes = loaded.recipes;

        let recipe = Recipe::new(draft);
        recipes.push(recipe.clone());

        self.persist(loaded.version, &recipes)?;
        Ok(recipe)
    }

    /// Replace the editable fields of the recipe at `index` (0-based).
    ///
    /// The record keeps its stable id and creation time. An out-of-range
    /// index is rejected with no mutation.
    pub fn replace_at(&mut self, index: usize, draft: RecipeDraft) -> Result<Recipe> {
        draft.validate()?;
        let loaded = self.load()?;
        let mut recipes = loaded.recipes;
        let len = recipes.len();

        let slot = recipes
            .get_mut(index)
            .ok_or(RecipeBoxError::IndexOutOfRange { index, len })?;
        slot.apply(draft);
        let recipe = slot.clone();

        self.persist(loaded.version, &recipes)?;
        Ok(recipe)
    }

    /// Remove the recipe at `index` (0-based), shifting later recipes
    /// down by one. An out-of-range index is rejected with no mutation.
    pub fn remove_at(&mut self, index: usize) -> Result<Recipe> {
        let loaded = self.load()?;
        let mut recipes = loaded.recipes;

        if index >= recipes.len() {
            return Err(RecipeBoxError::IndexOutOfRange {
                index,
                len: recipes.len(),
            });
        }
        let removed = recipes.remove(index);

        self.persist(loaded.version, &recipes)?;
        Ok(removed)
    }

    /// Replace the editable fields of the recipe with the given id.
    pub fn update(&mut self, id: &Uuid, draft: RecipeDraft) -> Result<Recipe> {
        draft.validate()?;
        let loaded = self.load()?;
        let mut recipes = loaded.recipes;

        let slot = recipes
            .iter_mut()
            .find(|r| r.id == *id)
            .ok_or(RecipeBoxError::RecipeNotFound(*id))?;
        slot.apply(draft);
        let recipe = slot.clone();

        self.persist(loaded.version, &recipes)?;
        Ok(recipe)
    }

    /// Remove the recipe with the given id, preserving the relative
    /// order of the remaining recipes.
    pub fn remove(&mut self, id: &Uuid) -> Result<Recipe> {
        let loaded = self.load()?;
        let mut recipes = loaded.recipes;

        let pos = recipes
            .iter()
            .position(|r| r.id == *id)
            .ok_or(RecipeBoxError::RecipeNotFound(*id))?;
        let removed = recipes.remove(pos);

        self.persist(loaded.version, &recipes)?;
        Ok(removed)
    }

    /// Persist the full sequence, replacing the stored blob.
    ///
    /// `loaded_version` must be the version the sequence was loaded at;
    /// if the stored version has moved since, the write is refused with
    /// [`RecipeBoxError::VersionConflict`] so a concurrent writer's
    /// update is not silently discarded.
    pub fn persist(&mut self, loaded_version: u64, recipes: &[Recipe]) -> Result<()> {
        let current = match self.backend.read(RECIPES_KEY)? {
            None => 0,
            Some(blob) => decode(&blob).version,
        };
        if current != loaded_version {
            return Err(RecipeBoxError::VersionConflict);
        }

        let envelope = EnvelopeRef {
            version: loaded_version + 1,
            recipes,
        };
        let blob = serde_json::to_string_pretty(&envelope)?;
        self.backend.write(RECIPES_KEY, &blob)
    }
}

fn decode(blob: &str) -> Loaded {
    if let Ok(envelope) = serde_json::from_str::<Envelope>(blob) {
        return Loaded {
            version: envelope.version,
            recipes: envelope.recipes,
            source: LoadSource::Blob,
        };
    }

    // Legacy shape: a bare array of records, no version stamp.
    if let Ok(recipes) = serde_json::from_str::<Vec<Recipe>>(blob) {
        return Loaded {
            version: 0,
            recipes,
            source: LoadSource::Blob,
        };
    }

    Loaded {
        version: 0,
        recipes: Vec::new(),
        source: LoadSource::Malformed,
    }
}
