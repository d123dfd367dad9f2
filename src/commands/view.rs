use crate::commands::CmdResult;
use crate::commands::helpers;
use crate::error::Result;
use crate::favorites::FavoritesRepo;
use crate::index::{DisplayIndex, DisplayRecipe};
use crate::store::{CollectionStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &CollectionStore<B>,
    favorites: &FavoritesRepo<B>,
    indexes: &[DisplayIndex],
) -> Result<CmdResult> {
    let recipes = store.load_all()?;
    let favorite_ids = favorites.all()?;

    let mut listed = Vec::with_capacity(indexes.len());
    for index in indexes {
        let recipe = helpers::pick(&recipes, *index)?.clone();
        listed.push(DisplayRecipe {
            favorite: favorite_ids.contains(&recipe.id),
            index: *index,
            recipe,
        });
    }

    Ok(CmdResult::default().with_listed_recipes(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecipeBoxError;
    use crate::model::RecipeDraft;
    use crate::store::mem_backend::MemBackend;

    fn seeded() -> (CollectionStore<MemBackend>, FavoritesRepo<MemBackend>) {
        let mut store = CollectionStore::new(MemBackend::new());
        store
            .append(RecipeDraft::new("Soup", "http://img/soup", "Warm"))
            .unwrap();
        store.append(RecipeDraft::new("Bread", "", "")).unwrap();
        (store, FavoritesRepo::new(MemBackend::new()))
    }

    #[test]
    fn test_view_returns_requested_recipes() {
        let (store, favorites) = seeded();
        let result = run(&store, &favorites, &[DisplayIndex(2), DisplayIndex(1)]).unwrap();

        assert_eq!(result.listed_recipes.len(), 2);
        assert_eq!(result.listed_recipes[0].recipe.title, "Bread");
        assert_eq!(result.listed_recipes[1].recipe.title, "Soup");
    }

    #[test]
    fn test_view_out_of_range_is_rejected() {
        let (store, favorites) = seeded();
        let err = run(&store, &favorites, &[DisplayIndex(3)]).unwrap_err();
        assert!(matches!(
            err,
            RecipeBoxError::IndexOutOfRange { index: 3, len: 2 }
        ));
    }
}
