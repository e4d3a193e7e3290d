//! # Storage Layer
//!
//! The glossary is one ordered list of [`Entry`] records. The [`DataStore`]
//! trait hides where that list lives so the commands can be tested without
//! touching the filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single JSON document holding a top-level array.
//!   The file is created as `[]` the first time it is read.
//! - [`memory::InMemoryStore`]: no persistence, for tests.
//!
//! ## Write Model
//!
//! Every add loads the whole list, appends, and writes the whole list back.
//! There is no locking: two processes adding at the same time race and the
//! last writer wins.

use crate::error::Result;
use crate::model::Entry;

pub mod fs;
pub mod memory;

/// Abstract interface for glossary storage.
pub trait DataStore {
    /// Load every entry in insertion order, bootstrapping an empty store if
    /// none exists yet.
    fn load(&self) -> Result<Vec<Entry>>;

    /// Replace the stored list with `entries`.
    fn save(&mut self, entries: &[Entry]) -> Result<()>;
}
