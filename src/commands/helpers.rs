use uuid::Uuid;

use crate::error::{RecipeBoxError, Result};
use crate::index::DisplayIndex;
use crate::model::Recipe;
use crate::store::{CollectionStore, StorageBackend};

/// Resolve display indexes to stable ids against one snapshot of the
/// collection. Any stale index rejects the whole batch before a single
/// mutation runs.
pub fn resolve_ids<B: StorageBackend>(
    store: &CollectionStore<B>,
    indexes: &[DisplayIndex],
) -> Result<Vec<Uuid>> {
    let recipes = store.load_all()?;
    indexes
        .iter()
        .map(|ix| pick(&recipes, *ix).map(|r| r.id))
        .collect()
}

/// Look up the recipe at a 1-based display index.
pub fn pick(recipes: &[Recipe], index: DisplayIndex) -> Result<&Recipe> {
    recipes
        .get(index.0 - 1)
        .ok_or(RecipeBoxError::IndexOutOfRange {
            index: index.0,
            len: recipes.len(),
        })
}
