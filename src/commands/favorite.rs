use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::favorites::FavoritesRepo;
use crate::index::{DisplayIndex, DisplayRecipe};
use crate::store::{CollectionStore, StorageBackend};

/// Toggle the favorite state of the recipe at `index`.
pub fn run<B: StorageBackend>(
    store: &CollectionStore<B>,
    favorites: &mut FavoritesRepo<B>,
    index: DisplayIndex,
) -> Result<CmdResult> {
    let recipes = store.load_all()?;
    let recipe = helpers::pick(&recipes, index)?.clone();

    let now_favorite = favorites.toggle(&recipe.id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(if now_favorite {
        format!("Favorited: {}", recipe.title)
    } else {
        format!("Unfavorited: {}", recipe.title)
    }));
    result.affected_recipes.push(DisplayRecipe {
        recipe,
        index,
        favorite: now_favorite,
    });
    Ok(result)
}

/// Ensure the recipe at `index` is not favorited. Unlike the toggle
/// this is idempotent: running it twice leaves the same state.
pub fn unfavorite<B: StorageBackend>(
    store: &CollectionStore<B>,
    favorites: &mut FavoritesRepo<B>,
    index: DisplayIndex,
) -> Result<CmdResult> {
    let recipes = store.load_all()?;
    let recipe = helpers::pick(&recipes, index)?.clone();

    let changed = favorites.set(&recipe.id, false)?;

    let mut result = CmdResult::default();
    result.add_message(if changed {
        CmdMessage::success(format!("Unfavorited: {}", recipe.title))
    } else {
        CmdMessage::info(format!("Not a favorite: {}", recipe.title))
    });
    result.affected_recipes.push(DisplayRecipe {
        recipe,
        index,
        favorite: false,
    });
    Ok(result)
}
