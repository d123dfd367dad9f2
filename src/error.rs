use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum RecipeBoxError {
    #[error("Recipe not found: {0}")]
    RecipeNotFound(Uuid),

    #[error("Index {index} is out of range ({len} recipes)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("The collection changed since it was loaded; re-run the command")]
    VersionConflict,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RecipeBoxError>;
