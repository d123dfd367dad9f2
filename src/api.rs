//! # API Facade
//!
//! The single entry point for all recipebox operations, regardless of
//! the UI in front of it. The facade stays thin: it parses user-typed
//! index selectors into [`DisplayIndex`] values, dispatches to the
//! command modules, and returns structured `Result<CmdResult>` values.
//! Business logic belongs in `commands/*.rs`; presentation belongs to
//! the caller.
//!
//! `RecipeBoxApi<B>` is generic over the storage backend: `FsBackend`
//! in production, `MemBackend` in tests.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::commands;
use crate::error::{RecipeBoxError, Result};
use crate::favorites::FavoritesRepo;
use crate::index::{parse_index_or_range, DisplayIndex};
use crate::model::RecipeDraft;
use crate::store::{CollectionStore, StorageBackend};

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, RecipeUpdate};

pub struct RecipeBoxApi<B: StorageBackend> {
    store: CollectionStore<B>,
    favorites: FavoritesRepo<B>,
}

impl<B: StorageBackend> RecipeBoxApi<B> {
    pub fn new(store: CollectionStore<B>, favorites: FavoritesRepo<B>) -> Self {
        Self { store, favorites }
    }

    pub fn add_recipe(&mut self, draft: RecipeDraft) -> Result<CmdResult> {
        commands::create::run(&mut self.store, draft)
    }

    pub fn list_recipes(&self) -> Result<CmdResult> {
        commands::list::run(&self.store, &self.favorites)
    }

    pub fn view_recipes<I: AsRef<str>>(&self, indexes: &[I]) -> Result<CmdResult> {
        let indexes = parse_indexes(indexes)?;
        commands::view::run(&self.store, &self.favorites, &indexes)
    }

    pub fn update_recipes(&mut self, updates: &[RecipeUpdate]) -> Result<CmdResult> {
        commands::update::run(&mut self.store, updates)
    }

    pub fn delete_recipes<I: AsRef<str>>(&mut self, indexes: &[I]) -> Result<CmdResult> {
        let indexes = parse_indexes(indexes)?;
        commands::delete::run(&mut self.store, &mut self.favorites, &indexes)
    }

    pub fn toggle_favorite(&mut self, index: &str) -> Result<CmdResult> {
        let index = parse_single_index(index)?;
        commands::favorite::run(&self.store, &mut self.favorites, index)
    }

    pub fn unfavorite(&mut self, index: &str) -> Result<CmdResult> {
        let index = parse_single_index(index)?;
        commands::favorite::unfavorite(&self.store, &mut self.favorites, index)
    }

    /// The path of the collection file.
    pub fn store_path(&self) -> PathBuf {
        self.store.entry_path()
    }
}

/// Parse user-typed selectors (`"2"`, `"1-3"`) into display indexes,
/// deduplicating while preserving order.
fn parse_indexes<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<DisplayIndex>> {
    let mut all: Vec<DisplayIndex> = Vec::new();
    for input in inputs {
        let parsed = parse_index_or_range(input.as_ref()).map_err(RecipeBoxError::Api)?;
        all.extend(parsed);
    }

    let mut seen = HashSet::new();
    Ok(all.into_iter().filter(|ix| seen.insert(*ix)).collect())
}

/// Parse a selector that must name exactly one recipe; a range makes
/// no sense for favorite operations.
fn parse_single_index(input: &str) -> Result<DisplayIndex> {
    let indexes = parse_indexes(&[input])?;
    if indexes.len() != 1 {
        return Err(RecipeBoxError::Api(format!(
            "Expected a single index, got: {}",
            input
        )));
    }
    Ok(indexes[0])
}
