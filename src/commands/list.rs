use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::favorites::FavoritesRepo;
use crate::index::{DisplayIndex, DisplayRecipe};
use crate::store::{CollectionStore, LoadSource, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &CollectionStore<B>,
    favorites: &FavoritesRepo<B>,
) -> Result<CmdResult> {
    let loaded = store.load()?;
    let favorite_ids = favorites.all()?;

    let mut result = CmdResult::default();
    if loaded.source == LoadSource::Malformed {
        result.add_message(CmdMessage::warning(
            "The stored collection was unreadable and is being treated as empty.",
        ));
    }

    result.listed_recipes = loaded
        .recipes
        .into_iter()
        .enumerate()
        .map(|(i, recipe)| DisplayRecipe {
            favorite: favorite_ids.contains(&recipe.id),
            index: DisplayIndex(i + 1),
            recipe,
        })
        .collect();

    Ok(result)
}
