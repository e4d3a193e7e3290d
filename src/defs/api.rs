//! # API Facade
//!
//! The single entry point for glossary operations. It dispatches to
//! `commands/*.rs` and returns structured [`CmdResult`]s; printing and exit
//! codes belong to the binary.
//!
//! `DefsApi<S: DataStore>` is generic over the storage backend:
//! - Production: `DefsApi<FileStore>`
//! - Testing: `DefsApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::prompt::Prompt;
use crate::store::DataStore;

pub struct DefsApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> DefsApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Interactively creates an entry, asking for the term when `term` is
    /// `None`.
    pub fn add_entry<P: Prompt + ?Sized>(
        &mut self,
        prompt: &mut P,
        term: Option<String>,
    ) -> Result<CmdResult> {
        commands::add::run(&mut self.store, prompt, term)
    }

    #[cfg(any(test, feature = "test_utils"))]
    pub fn lookup(&self, query: &str) -> Result<CmdResult> {
        commands::lookup::run(&self.store, query)
    }

    /// Looks up `query`, offering to create it when nothing matches.
    pub fn lookup_or_offer<P: Prompt + ?Sized>(
        &mut self,
        prompt: &mut P,
        query: &str,
    ) -> Result<CmdResult> {
        commands::lookup::run_or_offer(&mut self.store, prompt, query)
    }

    #[cfg(any(test, feature = "test_utils"))]
    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::scripted::ScriptedPrompt;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn add_then_lookup_sees_new_entry() {
        let mut api = DefsApi::new(InMemoryStore::new());
        let mut prompt = ScriptedPrompt::new(["Internet Engineering Task Force", "", "", ""]);

        api.add_entry(&mut prompt, Some("IETF".into())).unwrap();
        let found = api.lookup("ietf").unwrap();

        assert_eq!(found.listed_entries.len(), 1);
        assert_eq!(found.listed_entries[0].term, "IETF");
    }

    #[test]
    fn lookup_or_offer_dispatches_to_create() {
        let mut api = DefsApi::new(InMemoryStore::new());
        let mut prompt = ScriptedPrompt::new(["yes", "Zig Zag Zoom", "", "", ""]);

        let result = api.lookup_or_offer(&mut prompt, "zzz").unwrap();

        assert_eq!(result.affected_entries[0].term, "zzz");
        assert_eq!(api.store().entries().len(), 1);
    }
}
