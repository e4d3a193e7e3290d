use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const TERM_KEY: &str = "term";
const LEGACY_TERM_KEY: &str = "definitions";
const EXPANSION_KEY: &str = "expansion";
const DESCRIPTION_KEY: &str = "description";
const EXAMPLE_KEY: &str = "example";
const RESULT_KEY: &str = "result";

/// One glossary record.
///
/// The optional fields travel together: a record created with a non-empty
/// description carries `description`, `example` and `result`, and a record
/// created without one carries none of them.
///
/// A stored object goes through a JSON map on the way in and out, so a
/// load/save cycle writes back what was read: keys this type does not know
/// about stay in `extra`, an optional field holding anything but a string
/// (an explicit `null`, say) stays there too, and the headword keeps the key
/// it was stored under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Entry {
    pub term: String,
    pub expansion: String,
    pub description: Option<String>,
    pub example: Option<String>,
    pub result: Option<String>,
    pub extra: Map<String, Value>,
    headword: HeadwordKey,
}

/// The key a record's headword is stored under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeadwordKey {
    #[default]
    Term,
    /// Older stores keyed the headword as "definitions".
    Legacy,
}

impl HeadwordKey {
    fn as_str(self) -> &'static str {
        match self {
            HeadwordKey::Term => TERM_KEY,
            HeadwordKey::Legacy => LEGACY_TERM_KEY,
        }
    }
}

fn take_required(map: &mut Map<String, Value>, key: &str) -> Result<String, String> {
    match map.remove(key) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(format!("field `{}` must be a string, found {}", key, other)),
        None => Err(format!("missing field `{}`", key)),
    }
}

/// Takes `key` out of the map only when it holds a string; any other value
/// is left in place for `extra`.
fn take_optional(map: &mut Map<String, Value>, key: &str) -> Option<String> {
    if !matches!(map.get(key), Some(Value::String(_))) {
        return None;
    }
    match map.remove(key) {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

impl TryFrom<Map<String, Value>> for Entry {
    type Error = String;

    fn try_from(mut map: Map<String, Value>) -> Result<Self, Self::Error> {
        let headword = if map.contains_key(TERM_KEY) {
            HeadwordKey::Term
        } else if map.contains_key(LEGACY_TERM_KEY) {
            HeadwordKey::Legacy
        } else {
            return Err(format!("missing field `{}`", TERM_KEY));
        };

        let term = take_required(&mut map, headword.as_str())?;
        let expansion = take_required(&mut map, EXPANSION_KEY)?;
        let description = take_optional(&mut map, DESCRIPTION_KEY);
        let example = take_optional(&mut map, EXAMPLE_KEY);
        let result = take_optional(&mut map, RESULT_KEY);

        Ok(Self {
            term,
            expansion,
            description,
            example,
            result,
            extra: map,
            headword,
        })
    }
}

impl From<Entry> for Map<String, Value> {
    fn from(entry: Entry) -> Self {
        let mut map = entry.extra;
        map.insert(entry.headword.as_str().to_string(), Value::String(entry.term));
        map.insert(EXPANSION_KEY.to_string(), Value::String(entry.expansion));
        for (key, value) in [
            (DESCRIPTION_KEY, entry.description),
            (EXAMPLE_KEY, entry.example),
            (RESULT_KEY, entry.result),
        ] {
            if let Some(value) = value {
                map.insert(key.to_string(), Value::String(value));
            }
        }
        map
    }
}

/// The answers collected by the create flow, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryAnswers {
    pub term: String,
    pub expansion: String,
    pub description: String,
    pub example: String,
    pub result: String,
}

impl Entry {
    pub fn new(term: impl Into<String>, expansion: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            expansion: expansion.into(),
            description: None,
            example: None,
            result: None,
            extra: Map::new(),
            headword: HeadwordKey::Term,
        }
    }

    pub fn headword_key(&self) -> HeadwordKey {
        self.headword
    }

    pub fn with_details(
        mut self,
        description: impl Into<String>,
        example: impl Into<String>,
        result: impl Into<String>,
    ) -> Self {
        self.description = Some(description.into());
        self.example = Some(example.into());
        self.result = Some(result.into());
        self
    }

    /// Builds a record from the create-flow answers.
    ///
    /// Only the description answer decides whether the optional fields are
    /// stored. Existing stores depend on this shape, so an example given
    /// without a description is discarded.
    pub fn from_answers(answers: EntryAnswers) -> Self {
        let entry = Self::new(answers.term, answers.expansion);
        if answers.description.is_empty() {
            entry
        } else {
            entry.with_details(answers.description, answers.example, answers.result)
        }
    }

    /// The two keys a query is compared against: the lowercased term, and
    /// the lowercased term reduced to ASCII letters.
    pub fn lookup_keys(&self) -> (String, String) {
        let lowered = self.term.to_lowercase();
        let letters = letters_only(&lowered);
        (lowered, letters)
    }

    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        let (lowered, letters) = self.lookup_keys();
        query == lowered || query == letters
    }
}

/// Drops every character outside `a..=z`. Input is expected to be lowercased
/// already; non-ASCII letters are removed rather than folded.
pub fn letters_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_lowercase()).collect()
}
