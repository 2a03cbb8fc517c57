//! Catalog search paths
//!
//! A catalog for `signature` in `language` lives at
//! `Catalogs/<language>/<signature>.catalog` below one of three roots,
//! tried in this order:
//!
//! 1. the application's own folder
//! 2. the user configuration folder
//! 3. the system configuration folder
//!
//! The first candidate that opens and decodes wins, so a catalog shipped
//! next to the application overrides the user's, which overrides the
//! system-wide one.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use super::{CATALOG_EXTENSION, CATALOG_FOLDER};
use crate::error::{Error, Result};

/// Roots searched for catalog files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRoots {
    #[serde(default)]
    pub app_dir: Option<PathBuf>,
    #[serde(default)]
    pub user_dir: Option<PathBuf>,
    #[serde(default)]
    pub system_dir: Option<PathBuf>,
}

impl SearchRoots {
    /// Roots for the running process
    ///
    /// The application folder is the folder of the current executable.
    pub fn detect() -> Self {
        let app_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        let system_dir = if cfg!(unix) {
            Some(PathBuf::from("/etc"))
        } else {
            None
        };

        Self {
            app_dir,
            user_dir: dirs::config_dir(),
            system_dir,
        }
    }

    /// Load roots from a JSON file
    ///
    /// Missing fields are left unset.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Configured roots in priority order
    pub fn roots(&self) -> impl Iterator<Item = &Path> {
        [&self.app_dir, &self.user_dir, &self.system_dir]
            .into_iter()
            .filter_map(|root| root.as_deref())
    }

    /// Candidate catalog files in priority order
    pub fn candidates(&self, signature: &str, language: &str) -> Vec<PathBuf> {
        let relative = catalog_relative_path(signature, language);
        self.roots().map(|root| root.join(&relative)).collect()
    }
}

/// `Catalogs/<language>/<signature>.catalog`
pub fn catalog_relative_path(signature: &str, language: &str) -> PathBuf {
    Path::new(CATALOG_FOLDER)
        .join(language)
        .join(format!("{signature}.{CATALOG_EXTENSION}"))
}

/// Try `attempt` on each candidate until one succeeds
///
/// Returns the winning path with its result. If every candidate fails, the
/// error of the last candidate that could be opened is returned, or
/// [`Error::NotFound`] if none of them could be opened at all. A file
/// missing further down the list never hides a decode error.
///
/// [`Error::NotFound`]: crate::Error::NotFound
pub fn load_first<T, F>(candidates: &[PathBuf], mut attempt: F) -> Result<(PathBuf, T)>
where
    F: FnMut(&Path) -> Result<T>,
{
    let mut last_error = None;

    for path in candidates {
        match attempt(path) {
            Ok(value) => {
                tracing::info!("Loaded catalog from {}", path.display());
                return Ok((path.clone(), value));
            }
            Err(err) => {
                tracing::debug!("Catalog candidate {} rejected: {}", path.display(), err);
                if !err.is_unopened() {
                    last_error = Some(err);
                }
            }
        }
    }

    match last_error {
        Some(err) => {
            tracing::warn!("No usable catalog among {} candidates: {}", candidates.len(), err);
            Err(err)
        }
        None => Err(Error::NotFound(format!(
            "no catalog file among {} candidates",
            candidates.len()
        ))),
    }
}

/// Languages that have a catalog for `signature` under any root
///
/// Languages are listed once each, in root priority order and then by name.
pub fn available_languages(roots: &SearchRoots, signature: &str) -> Result<Vec<String>> {
    let file_name = format!("{signature}.{CATALOG_EXTENSION}");
    let mut languages: Vec<String> = Vec::new();

    for root in roots.roots() {
        let folder = root.join(CATALOG_FOLDER);
        if !folder.is_dir() {
            continue;
        }

        for entry in WalkDir::new(&folder)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;
            if !entry.file_type().is_dir() || !entry.path().join(&file_name).is_file() {
                continue;
            }
            let language = entry.file_name().to_string_lossy().into_owned();
            if !languages.contains(&language) {
                languages.push(language);
            }
        }
    }

    Ok(languages)
}
