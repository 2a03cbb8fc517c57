//! Catalog backed by an Amiga `.catalog` file
//!
//! Amiga catalogs are looked up by numeric ID instead of by source string,
//! which makes them handy when porting Amiga applications or when ID-based
//! lookup is preferred for speed.

use std::path::{Path, PathBuf};

use super::locator::{self, SearchRoots};
use super::{EMPTY_CATALOG_PATH, HashMapCatalog, StringTable};
use crate::error::{Error, Result};
use crate::formats::ctlg::{CatalogRecord, parse_catalog_bytes, read_catalog};

/// A string table loaded from an Amiga catalog
#[derive(Debug)]
pub struct AmigaCatalog<T: StringTable = HashMapCatalog> {
    signature: String,
    language_name: String,
    fingerprint: u32,
    path: Option<PathBuf>,
    table: T,
    init_error: Option<Error>,
}

impl AmigaCatalog<HashMapCatalog> {
    /// Find and load the catalog for `signature` in `language`.
    ///
    /// The candidates from `roots` are tried in order. Check
    /// [`init_check`](Self::init_check) to see whether one of them loaded.
    pub fn open(signature: &str, language: &str, fingerprint: u32, roots: &SearchRoots) -> Self {
        Self::open_with_table(HashMapCatalog::new(), signature, language, fingerprint, roots)
    }

    /// An empty catalog bound to `path`, for editing and tests.
    ///
    /// No file is read; the catalog is always valid.
    pub fn create(path: impl Into<PathBuf>, signature: &str, language: &str) -> Self {
        Self::with_table(HashMapCatalog::new(), signature, language, 0, Some(path.into()))
    }
}

impl<T: StringTable> AmigaCatalog<T> {
    /// Like [`AmigaCatalog::open`], committing strings into `table`
    pub fn open_with_table(
        table: T,
        signature: &str,
        language: &str,
        fingerprint: u32,
        roots: &SearchRoots,
    ) -> Self {
        let mut catalog = Self::with_table(table, signature, language, fingerprint, None);

        // Give highest priority to the catalog next to the application
        let candidates = roots.candidates(signature, language);
        let result = locator::load_first(&candidates, |path| catalog.read_from_file(Some(path)));
        if let Err(err) = result {
            catalog.init_error = Some(err);
        }
        catalog
    }

    fn with_table(
        table: T,
        signature: &str,
        language: &str,
        fingerprint: u32,
        path: Option<PathBuf>,
    ) -> Self {
        Self {
            signature: signature.to_owned(),
            language_name: language.to_owned(),
            fingerprint,
            path,
            table,
            init_error: None,
        }
    }

    /// Load strings from `path`, or from the path this catalog is bound to.
    ///
    /// The table is only touched once the whole file decoded, so a failed
    /// read leaves the catalog as it was.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no path is given and none is bound,
    /// otherwise any error from [`read_catalog`].
    pub fn read_from_file(&mut self, path: Option<&Path>) -> Result<()> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => self.path.clone().ok_or_else(|| {
                Error::NotFound(format!("no file bound to catalog {}", self.signature))
            })?,
        };

        self.table.init_check()?;
        let record = read_catalog(&path)?;
        self.commit(record);
        self.path = Some(path);
        Ok(())
    }

    /// Load strings from an in-memory catalog file
    pub fn read_from_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.table.init_check()?;
        let record = parse_catalog_bytes(data)?;
        self.commit(record);
        Ok(())
    }

    /// Catalogs in this format are read-only.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::WriteUnsupported`]; nothing is written.
    pub fn write_to_file(&self, _path: Option<&Path>) -> Result<()> {
        Err(Error::WriteUnsupported)
    }

    fn commit(&mut self, record: CatalogRecord) {
        let count = record.entries.len();
        for entry in record.entries {
            self.table.set_string(entry.id, entry.text);
        }
        if let Some(signature) = record.signature {
            self.signature = signature;
        }
        if let Some(language) = record.language_name {
            self.language_name = language;
        }
        self.fingerprint = self.table.compute_fingerprint();

        tracing::debug!(
            "Committed {} strings to catalog {} ({}), fingerprint {:#010x}",
            count,
            self.signature,
            self.language_name,
            self.fingerprint
        );
    }

    /// Status of the initial load
    pub fn init_check(&self) -> std::result::Result<(), &Error> {
        match &self.init_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Application signature, or the `FVER` text once a file is loaded
    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn language_name(&self) -> &str {
        &self.language_name
    }

    pub fn fingerprint(&self) -> u32 {
        self.fingerprint
    }

    /// File the catalog was loaded from or created for
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    pub fn get_string(&self, id: i32) -> Option<&str> {
        self.table.get_string(id)
    }
}

/// Load the catalog for `signature` in `language` from the standard roots.
///
/// Returns `None` if no candidate could be loaded. `fingerprint` is only the
/// initial value; comparing it with [`AmigaCatalog::fingerprint`] is up to
/// the caller.
pub fn instantiate_catalog(signature: &str, language: &str, fingerprint: u32) -> Option<AmigaCatalog> {
    instantiate_catalog_in(&SearchRoots::detect(), signature, language, fingerprint)
}

/// [`instantiate_catalog`] with explicit search roots
pub fn instantiate_catalog_in(
    roots: &SearchRoots,
    signature: &str,
    language: &str,
    fingerprint: u32,
) -> Option<AmigaCatalog> {
    let catalog = AmigaCatalog::open(signature, language, fingerprint, roots);
    if let Err(err) = catalog.init_check() {
        tracing::debug!("No catalog for {} ({}): {}", signature, language, err);
        return None;
    }
    Some(catalog)
}

/// An empty, writable-in-memory catalog
pub fn create_catalog(signature: &str, language: &str) -> AmigaCatalog {
    AmigaCatalog::create(EMPTY_CATALOG_PATH, signature, language)
}
