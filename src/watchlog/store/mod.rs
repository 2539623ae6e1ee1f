//! # Storage Layer
//!
//! Storage is abstracted behind the [`DataStore`] trait so the command layer
//! can be tested against [`memory::InMemoryStore`] without touching the
//! filesystem, while production uses [`fs::FileStore`] over a single JSON
//! file.
//!
//! ## Storage Format
//!
//! `FileStore` keeps the whole collection in one file (by default
//! `media_database.json`): a JSON array of records, insertion order
//! preserved. Every mutation rewrites the entire file. There is no file
//! locking; a concurrent external writer can lose data, which is an accepted
//! limitation of the format.

use crate::error::Result;
use crate::model::MediaRecord;

pub mod fs;
pub mod memory;

/// Abstract interface over the persisted record collection.
///
/// Implementations load and save the collection as a whole; ordering must be
/// preserved across a save/load round-trip.
pub trait DataStore {
    /// Load the full collection. A backing store that does not exist yet is
    /// an empty collection, not an error.
    fn load(&self) -> Result<Vec<MediaRecord>>;

    /// Overwrite the backing store with the given collection.
    fn save(&mut self, records: &[MediaRecord]) -> Result<()>;
}
