use crate::commands::{CmdMessage, CmdResult, add};
use crate::error::Result;
use crate::model::Entry;
use crate::prompt::Prompt;
use crate::store::DataStore;
use tracing::debug;

pub const OFFER_QUESTION: &str = "No definition. Would you like to create it? [y/N]";
pub const DECLINED: &str = "Okay, never mind.";

/// Filters `entries` down to those whose term matches `query`, ordered by
/// expansion. The sort is stable so entries with equal expansions keep their
/// store order.
pub fn find_matches(entries: Vec<Entry>, query: &str) -> Vec<Entry> {
    let mut matches: Vec<Entry> = entries
        .into_iter()
        .filter(|entry| entry.matches(query))
        .collect();
    matches.sort_by(|a, b| a.expansion.cmp(&b.expansion));
    matches
}

pub fn run<S: DataStore>(store: &S, query: &str) -> Result<CmdResult> {
    let entries = store.load()?;
    let total = entries.len();
    let matches = find_matches(entries, query);
    debug!(query, total, matched = matches.len(), "lookup");
    Ok(CmdResult::default().with_listed_entries(matches))
}

/// Whether a reply to the creation offer counts as yes.
pub fn is_affirmative(reply: &str) -> bool {
    matches!(reply.to_lowercase().as_str(), "y" | "yes")
}

/// Looks `query` up and, when nothing matches, offers to create it.
///
/// Declining (or closing the input) is a normal outcome: the store is left
/// untouched and the result carries an info message.
pub fn run_or_offer<S: DataStore, P: Prompt + ?Sized>(
    store: &mut S,
    prompt: &mut P,
    query: &str,
) -> Result<CmdResult> {
    let found = run(store, query)?;
    if !found.listed_entries.is_empty() {
        return Ok(found);
    }

    match prompt.ask(OFFER_QUESTION)? {
        Some(reply) if is_affirmative(&reply) => add::run(store, prompt, Some(query.to_string())),
        _ => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(DECLINED));
            Ok(result)
        }
    }
}
