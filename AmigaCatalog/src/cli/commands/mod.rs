use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::catalog::SearchRoots;

pub mod catalog;
pub mod execute;

/// Search root overrides shared by lookup commands
#[derive(Args, Debug, Clone, Default)]
pub struct RootArgs {
    /// JSON file with `app_dir`, `user_dir` and `system_dir`
    #[arg(long)]
    pub roots: Option<PathBuf>,

    /// Application folder (defaults to the folder of this executable)
    #[arg(long)]
    pub app_dir: Option<PathBuf>,

    /// User configuration folder
    #[arg(long)]
    pub user_dir: Option<PathBuf>,

    /// System configuration folder
    #[arg(long)]
    pub system_dir: Option<PathBuf>,

    /// Only search the folders given on the command line
    #[arg(long)]
    pub no_detect: bool,
}

impl RootArgs {
    /// Build the search roots: JSON file or detected defaults, then
    /// per-folder overrides.
    pub fn resolve(&self) -> crate::Result<SearchRoots> {
        let mut roots = match &self.roots {
            Some(path) => SearchRoots::load(path)?,
            None if self.no_detect => SearchRoots::default(),
            None => SearchRoots::detect(),
        };

        if let Some(dir) = &self.app_dir {
            roots.app_dir = Some(dir.clone());
        }
        if let Some(dir) = &self.user_dir {
            roots.user_dir = Some(dir.clone());
        }
        if let Some(dir) = &self.system_dir {
            roots.system_dir = Some(dir.clone());
        }
        Ok(roots)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a catalog file and list its strings
    Dump {
        /// Catalog file
        path: PathBuf,

        /// Print the decoded record as JSON
        #[arg(long)]
        json: bool,

        /// Only print the strings
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print a single string by ID
    Get {
        /// Catalog file
        path: PathBuf,

        /// String ID
        #[arg(allow_negative_numbers = true)]
        id: i32,
    },

    /// Search string texts
    Search {
        /// Catalog file
        path: PathBuf,

        /// Text to look for (case-insensitive)
        query: String,

        /// Maximum number of results
        #[arg(short, long, default_value = "50")]
        limit: usize,
    },

    /// List the top-level chunks of a catalog file
    Inspect {
        /// Catalog file
        path: PathBuf,
    },

    /// Show which catalog file would be loaded for an application
    Locate {
        /// Application signature (catalog base name)
        #[arg(short, long)]
        signature: String,

        /// Language name (e.g. deutsch)
        #[arg(short, long)]
        language: String,

        #[command(flatten)]
        roots: RootArgs,
    },

    /// List languages that have a catalog for an application
    Languages {
        /// Application signature (catalog base name)
        #[arg(short, long)]
        signature: String,

        #[command(flatten)]
        roots: RootArgs,
    },

    /// Show catalog file statistics
    Stats {
        /// Catalog file(s)
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}
