use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Entry, EntryAnswers};
use crate::prompt::Prompt;
use crate::store::DataStore;
use tracing::debug;

/// Asks for the fields of a new entry. When `term` is given the question for
/// it is skipped and the user is told which term is being created.
pub fn prompt_answers<P: Prompt + ?Sized>(
    prompt: &mut P,
    term: Option<String>,
) -> Result<EntryAnswers> {
    let term = match term {
        Some(term) => {
            prompt.say(&format!("Creating an entry for definition \"{}\".", term))?;
            term
        }
        None => prompt.ask_required("What is the new definition?")?,
    };

    let expansion = prompt.ask_required(&format!("\nWhat is \"{}\"?", term))?;
    let description = prompt.ask_required("\nFull Description (optional)")?;
    let example = prompt.ask_required("\nExample (optional)")?;
    let result = prompt.ask_required("\nResult (optional)")?;

    Ok(EntryAnswers {
        term,
        expansion,
        description,
        example,
        result,
    })
}

/// Appends `entry` to the store. Duplicates are allowed.
pub fn append<S: DataStore>(store: &mut S, entry: Entry) -> Result<CmdResult> {
    let mut entries = store.load()?;
    entries.push(entry.clone());
    store.save(&entries)?;
    debug!(term = %entry.term, total = entries.len(), "appended entry");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added definition: {}",
        entry.term
    )));
    Ok(result.with_affected_entries(vec![entry]))
}

/// The full create flow: ask, normalize, append.
pub fn run<S: DataStore, P: Prompt + ?Sized>(
    store: &mut S,
    prompt: &mut P,
    term: Option<String>,
) -> Result<CmdResult> {
    let answers = prompt_answers(prompt, term)?;
    append(store, Entry::from_answers(answers))
}
