//! File format handlers
//!
//! Only reading is supported. Catalogs are produced by external tools
//! (`CatComp`, `FlexCat`).

pub mod ctlg;

// Re-export main catalog types
pub use ctlg::{
    CatalogEntry, CatalogRecord, Chunk, ChunkReader, ChunkTag, parse_catalog_bytes, read_catalog,
};
