use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::favorites::FavoritesRepo;
use crate::index::{DisplayIndex, DisplayRecipe};
use crate::store::{CollectionStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &mut CollectionStore<B>,
    favorites: &mut FavoritesRepo<B>,
    indexes: &[DisplayIndex],
) -> Result<CmdResult> {
    // Resolve to stable ids before deleting anything: removing by
    // position would shift later targets onto the wrong recipe.
    let ids = helpers::resolve_ids(store, indexes)?;

    let mut result = CmdResult::default();
    for (index, id) in indexes.iter().zip(&ids) {
        let removed = store.remove(id)?;
        // Drop the id from the favorites set too, or the blob would
        // collect ids that no longer resolve to a recipe.
        favorites.set(id, false)?;
        result.affected_recipes.push(DisplayRecipe {
            recipe: removed,
            index: *index,
            favorite: false,
        });
    }

    let count = result.affected_recipes.len();
    result.add_message(CmdMessage::success(if count == 1 {
        format!(
            "Deleted recipe: {}",
            result.affected_recipes[0].recipe.title
        )
    } else {
        format!("Deleted {} recipes", count)
    }));
    Ok(result)
}
