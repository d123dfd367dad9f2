//! # Domain Model: Recipe Records
//!
//! A [`Recipe`] is one user-authored entry: a title (required), an image
//! reference (URI or empty), and a free-form description. Each record
//! carries a stable generated [`Uuid`] assigned at creation time; edits
//! and deletes are keyed by that id, never by the record's position in
//! the collection.
//!
//! ## Legacy blobs
//!
//! Earlier versions of the collection blob stored bare
//! `{title, image, description}` objects with no id and no timestamps.
//! The custom deserializer fills in generated ids and current timestamps
//! so old data loads cleanly and gets upgraded on the next persist.
//!
//! Callers construct a [`RecipeDraft`] (the user-editable fields) and the
//! store turns it into a full [`Recipe`]. Validation is on the draft: the
//! title must contain at least one non-whitespace character.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{RecipeBoxError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    pub image: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Custom deserializer to handle legacy records where `id` and the
// timestamps are missing. Missing ids are generated; missing timestamps
// default to now.
impl<'de> Deserialize<'de> for Recipe {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let helper = RecipeHelper::deserialize(deserializer)?;
        let now = Utc::now();

        Ok(Recipe {
            id: helper.id.unwrap_or_else(Uuid::new_v4),
            title: helper.title,
            image: helper.image,
            description: helper.description,
            created_at: helper.created_at.unwrap_or(now),
            updated_at: helper.updated_at.unwrap_or(now),
        })
    }
}

#[derive(Deserialize)]
struct RecipeHelper {
    #[serde(default)]
    id: Option<Uuid>,
    title: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl Recipe {
    pub fn new(draft: RecipeDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            image: draft.image,
            description: draft.description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the editable fields, keeping id and creation time.
    pub fn apply(&mut self, draft: RecipeDraft) {
        self.title = draft.title;
        self.image = draft.image;
        self.description = draft.description;
        self.updated_at = Utc::now();
    }
}

/// The caller-supplied fields of a recipe, before the store assigns
/// identity and timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeDraft {
    pub title: String,
    pub image: String,
    pub description: String,
}

impl RecipeDraft {
    pub fn new(
        title: impl Into<String>,
        image: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            image: image.into(),
            description: description.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(RecipeBoxError::Api("Title cannot be empty".to_string()));
        }
        Ok(())
    }
}
