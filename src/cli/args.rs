use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recipebox")]
#[command(about = "A local recipe box for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory (defaults to $RECIPEBOX_DATA or the OS data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new recipe
    #[command(alias = "a")]
    Add {
        /// Recipe title
        title: String,

        /// Image URL
        #[arg(short, long, default_value = "")]
        image: String,

        /// Description text
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// List recipes
    #[command(alias = "ls")]
    List,

    /// View one or more recipes
    #[command(alias = "v")]
    View {
        /// Indexes of the recipes (e.g. 1 3 or 1-3)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Edit a recipe's fields
    #[command(alias = "e")]
    Edit {
        /// Index of the recipe
        index: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New image URL
        #[arg(short, long)]
        image: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Delete one or more recipes
    #[command(alias = "rm")]
    Delete {
        /// Indexes of the recipes (e.g. 1 3 or 1-3)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Toggle a recipe's favorite state
    #[command(alias = "fav")]
    Favorite {
        /// Index of the recipe
        index: String,
    },

    /// Remove a recipe from the favorites
    #[command(alias = "unfav")]
    Unfavorite {
        /// Index of the recipe
        index: String,
    },

    /// Print the path of the collection file
    Path,
}
