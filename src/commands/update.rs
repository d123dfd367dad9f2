use crate::commands::{helpers, CmdMessage, CmdResult, RecipeUpdate};
use crate::error::Result;
use crate::index::DisplayRecipe;
use crate::store::{CollectionStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &mut CollectionStore<B>,
    updates: &[RecipeUpdate],
) -> Result<CmdResult> {
    // Resolve every target id first so one stale index rejects the
    // whole batch.
    let indexes: Vec<_> = updates.iter().map(|u| u.index).collect();
    let ids = helpers::resolve_ids(store, &indexes)?;

    let mut result = CmdResult::default();
    for (update, id) in updates.iter().zip(&ids) {
        let updated = store.update(id, update.draft.clone())?;
        result.add_message(CmdMessage::success(format!(
            "Recipe updated: {}",
            updated.title
        )));
        result.affected_recipes.push(DisplayRecipe {
            recipe: updated,
            index: update.index,
            favorite: false,
        });
    }
    Ok(result)
}
