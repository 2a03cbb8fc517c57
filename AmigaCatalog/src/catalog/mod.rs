//! Catalog loading for string lookup
//!
//! A decoded [`CatalogRecord`] is committed into a [`StringTable`], which
//! owns the ID to text map and computes the fingerprint used by callers to
//! tell whether a cached catalog is stale. [`AmigaCatalog`] ties the table
//! to the file it was loaded from and to the search-path policy in
//! [`locator`].
//!
//! [`CatalogRecord`]: crate::formats::ctlg::CatalogRecord

mod amiga;
pub mod locator;

use indexmap::IndexMap;

use crate::error::Result;
use crate::utils::hash_entry;

pub use amiga::{AmigaCatalog, create_catalog, instantiate_catalog, instantiate_catalog_in};
pub use locator::{SearchRoots, available_languages, catalog_relative_path, load_first};

/// Priority of this catalog reader among the ones a host can choose from
pub const CATALOG_ADDON_PRIORITY: u8 = 80;

/// MIME type of Amiga catalog files
pub const CATALOG_MIME_TYPE: &str = "locale/x-vnd.Be.locale-catalog.amiga";

/// Version of the catalog archive structure
pub const CATALOG_ARCHIVE_VERSION: i16 = 1;

/// Folder holding per-language catalog folders, below each search root
pub const CATALOG_FOLDER: &str = "Catalogs";

/// Extension of catalog files
pub const CATALOG_EXTENSION: &str = "catalog";

/// Placeholder path of catalogs made with [`create_catalog`]
pub const EMPTY_CATALOG_PATH: &str = "emptycat";

/// Destination for decoded catalog strings
pub trait StringTable {
    /// Store `text` under `id`, replacing any previous text
    fn set_string(&mut self, id: i32, text: String);

    fn get_string(&self, id: i32) -> Option<&str>;

    /// Fingerprint over the current contents
    fn compute_fingerprint(&self) -> u32;

    /// Whether the table can accept strings
    fn init_check(&self) -> Result<()> {
        Ok(())
    }
}

/// In-memory string table keyed by catalog ID
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HashMapCatalog {
    strings: IndexMap<i32, String>,
}

impl HashMapCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Strings in first-insertion order
    pub fn iter(&self) -> impl Iterator<Item = (i32, &str)> {
        self.strings.iter().map(|(id, text)| (*id, text.as_str()))
    }
}

impl StringTable for HashMapCatalog {
    fn set_string(&mut self, id: i32, text: String) {
        self.strings.insert(id, text);
    }

    fn get_string(&self, id: i32) -> Option<&str> {
        self.strings.get(&id).map(String::as_str)
    }

    // Sum of per-entry hashes, so insertion order does not matter
    fn compute_fingerprint(&self) -> u32 {
        self.strings
            .iter()
            .fold(0u32, |sum, (id, text)| sum.wrapping_add(hash_entry(*id, text)))
    }
}
