//! CLI layer: argument parsing, context wiring, dispatch, and terminal
//! rendering. Everything user-facing lives here; the library below it
//! never touches the terminal.

mod args;
mod print;

use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;

use recipebox::api::{RecipeBoxApi, RecipeUpdate};
use recipebox::config::RecipeBoxConfig;
use recipebox::error::{RecipeBoxError, Result};
use recipebox::favorites::FavoritesRepo;
use recipebox::model::RecipeDraft;
use recipebox::store::{CollectionStore, FsBackend};

pub use args::{Cli, Commands};

struct AppContext {
    api: RecipeBoxApi<FsBackend>,
    config: RecipeBoxConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = resolve_data_dir(cli.data_dir)?;
    let config = RecipeBoxConfig::load(&data_dir)?;
    let store = CollectionStore::new(FsBackend::new(data_dir.clone()));
    let favorites = FavoritesRepo::new(FsBackend::new(data_dir));
    let mut ctx = AppContext {
        api: RecipeBoxApi::new(store, favorites),
        config,
    };

    match cli.command {
        Commands::Add {
            title,
            image,
            description,
        } => handle_add(&mut ctx, title, image, description),
        Commands::List => handle_list(&ctx),
        Commands::View { indexes } => handle_view(&ctx, indexes),
        Commands::Edit {
            index,
            title,
            image,
            description,
        } => handle_edit(&mut ctx, index, title, image, description),
        Commands::Delete { indexes, yes } => handle_delete(&mut ctx, indexes, yes),
        Commands::Favorite { index } => handle_favorite(&mut ctx, index),
        Commands::Unfavorite { index } => handle_unfavorite(&mut ctx, index),
        Commands::Path => handle_path(&ctx),
    }
}

fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Ok(dir) = std::env::var("RECIPEBOX_DATA") {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let dirs = ProjectDirs::from("", "", "recipebox").ok_or_else(|| {
        RecipeBoxError::Store("Could not determine a data directory".to_string())
    })?;
    Ok(dirs.data_dir().to_path_buf())
}

fn handle_add(
    ctx: &mut AppContext,
    title: String,
    image: String,
    description: String,
) -> Result<()> {
    let draft = RecipeDraft::new(title, image, description);
    let result = ctx.api.add_recipe(draft)?;
    print::print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_recipes()?;
    print::print_recipes(&result.listed_recipes);
    print::print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.view_recipes(&indexes)?;
    print::print_full_recipes(&result.listed_recipes);
    print::print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    index: String,
    title: Option<String>,
    image: Option<String>,
    description: Option<String>,
) -> Result<()> {
    if title.is_none() && image.is_none() && description.is_none() {
        return Err(RecipeBoxError::Api(
            "Nothing to change; pass --title, --image or --description".to_string(),
        ));
    }

    // Merge the flags over the recipe's current fields
    let current = ctx.api.view_recipes(&[index])?;
    if current.listed_recipes.len() != 1 {
        return Err(RecipeBoxError::Api(
            "Edit expects a single index".to_string(),
        ));
    }
    let target = &current.listed_recipes[0];
    let draft = RecipeDraft::new(
        title.unwrap_or_else(|| target.recipe.title.clone()),
        image.unwrap_or_else(|| target.recipe.image.clone()),
        description.unwrap_or_else(|| target.recipe.description.clone()),
    );

    let updates = [RecipeUpdate::new(target.index, draft)];
    let result = ctx.api.update_recipes(&updates)?;
    print::print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, indexes: Vec<String>, yes: bool) -> Result<()> {
    if ctx.config.confirm_delete && !yes {
        let preview = ctx.api.view_recipes(&indexes)?;
        print::print_recipes(&preview.listed_recipes);
        let prompt = format!("Delete {} recipe(s)?", preview.listed_recipes.len());
        if !print::confirm(&prompt)? {
            println!("Aborted.");
            return Ok(());
        }
    }

    let result = ctx.api.delete_recipes(&indexes)?;
    print::print_messages(&result.messages);
    Ok(())
}

fn handle_favorite(ctx: &mut AppContext, index: String) -> Result<()> {
    let result = ctx.api.toggle_favorite(&index)?;
    print::print_messages(&result.messages);
    Ok(())
}

fn handle_unfavorite(ctx: &mut AppContext, index: String) -> Result<()> {
    let result = ctx.api.unfavorite(&index)?;
    print::print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    println!("{}", ctx.api.store_path().display());
    Ok(())
}
