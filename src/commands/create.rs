use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayIndex, DisplayRecipe};
use crate::model::RecipeDraft;
use crate::store::{CollectionStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &mut CollectionStore<B>,
    draft: RecipeDraft,
) -> Result<CmdResult> {
    let recipe = store.append(draft)?;
    // Appended at the end, so its display index is the new length
    let index = DisplayIndex(store.load_all()?.len());

    let mut result = CmdResult::default();
    result.affected_recipes.push(DisplayRecipe {
        recipe: recipe.clone(),
        index,
        favorite: false,
    });
    result.add_message(CmdMessage::success(format!(
        "Recipe added: {}",
        recipe.title
    )));
    Ok(result)
}
