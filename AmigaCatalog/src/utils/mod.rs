//! Utility functions

pub mod hash;

pub use hash::{hash_bytes_djb2, hash_entry};
