use super::DataStore;
use crate::error::Result;
use crate::model::Entry;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    entries: Vec<Entry>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Entry>> {
        Ok(self.entries.clone())
    }

    fn save(&mut self, entries: &[Entry]) -> Result<()> {
        self.entries = entries.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_entry(mut self, term: &str, expansion: &str) -> Self {
            self.store.entries.push(Entry::new(term, expansion));
            self
        }

        pub fn with_detailed_entry(
            mut self,
            term: &str,
            expansion: &str,
            description: &str,
        ) -> Self {
            self.store
                .entries
                .push(Entry::new(term, expansion).with_details(description, "", ""));
            self
        }
    }
}
