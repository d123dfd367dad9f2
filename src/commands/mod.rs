//! # Command Layer
//!
//! The core business logic lives here, one operation per submodule.
//! Commands operate on domain types, return structured [`CmdResult`]
//! values, and are completely UI-agnostic: no stdout, no prompts, no
//! exit codes. The CLI layer decides how to render what comes back.
//!
//! Failures and notices travel as leveled [`CmdMessage`]s inside the
//! result (there is no logger); the presentation layer colors them.
//!
//! This is where the lion's share of testing lives: each submodule
//! carries unit tests against [`crate::store::mem_backend::MemBackend`].

use serde::Serialize;

use crate::index::DisplayRecipe;

pub mod create;
pub mod delete;
pub mod favorite;
pub mod helpers;
pub mod list;
pub mod update;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Recipes modified by the operation.
    pub affected_recipes: Vec<DisplayRecipe>,
    /// Recipes to display.
    pub listed_recipes: Vec<DisplayRecipe>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_recipes(mut self, recipes: Vec<DisplayRecipe>) -> Self {
        self.listed_recipes = recipes;
        self
    }
}

/// One edit to apply: which recipe (by display index) and its new
/// fields.
#[derive(Debug, Clone)]
pub struct RecipeUpdate {
    pub index: crate::index::DisplayIndex,
    pub draft: crate::model::RecipeDraft,
}

impl RecipeUpdate {
    pub fn new(index: crate::index::DisplayIndex, draft: crate::model::RecipeDraft) -> Self {
        Self { index, draft }
    }
}
