//! # AmigaCatalog
//!
//! A pure-Rust reader for Amiga locale catalogs (`.catalog`, IFF `FORM CTLG`).
//!
//! ## Supported Formats
//!
//! - **CTLG** - Chunked catalog files with ISO-8859-1 strings, addressed by
//!   numeric ID
//!
//! Writing catalogs is not supported.
//!
//! ## Quick Start
//!
//! ### Decoding a Catalog File
//!
//! ```no_run
//! use amiga_catalog::formats::read_catalog;
//!
//! let record = read_catalog("Catalogs/deutsch/demo.catalog")?;
//! println!("{} strings in {:?}", record.len(), record.language_name);
//! # Ok::<(), amiga_catalog::Error>(())
//! ```
//!
//! ### Looking Up Strings
//!
//! ```no_run
//! use amiga_catalog::catalog::{SearchRoots, instantiate_catalog_in};
//!
//! let roots = SearchRoots::detect();
//! if let Some(catalog) = instantiate_catalog_in(&roots, "demo", "deutsch", 0) {
//!     println!("{:?}", catalog.get_string(1));
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `amigacat` command-line binary

pub mod catalog;
pub mod error;
pub mod formats;
pub mod utils;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::formats::ctlg::{
        CatalogEntry, CatalogRecord, Chunk, ChunkReader, ChunkTag, parse_catalog_bytes,
        read_catalog,
    };

    pub use crate::catalog::{
        AmigaCatalog, CATALOG_ADDON_PRIORITY, HashMapCatalog, SearchRoots, StringTable,
        available_languages, create_catalog, instantiate_catalog, instantiate_catalog_in,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
