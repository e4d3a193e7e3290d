//! Text layout for a single glossary entry.
//!
//! Styling is injected through [`Emphasis`] so the layout can be tested as
//! plain text and the binary can decide whether the terminal gets escape
//! codes.

use crate::model::Entry;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const DESCRIPTION_WIDTH: usize = 100;
pub const DESCRIPTION_INDENT: &str = "    ";
pub const DETAIL_WIDTH: usize = 200;

pub trait Emphasis {
    /// Starts bold text and returns it, left open until [`Emphasis::reset`].
    fn bold(&self, text: &str) -> String;
    fn reset(&self) -> String;
}

/// ANSI SGR codes, suppressed when `colored` decides the output should not be
/// colorized (NO_COLOR, CLICOLOR=0, ...).
pub struct Ansi;

impl Emphasis for Ansi {
    fn bold(&self, text: &str) -> String {
        if colored::control::SHOULD_COLORIZE.should_colorize() {
            format!("\x1b[1m{}", text)
        } else {
            text.to_string()
        }
    }

    fn reset(&self) -> String {
        if colored::control::SHOULD_COLORIZE.should_colorize() {
            "\x1b[0m".to_string()
        } else {
            String::new()
        }
    }
}

pub struct Plain;

impl Emphasis for Plain {
    fn bold(&self, text: &str) -> String {
        text.to_string()
    }

    fn reset(&self) -> String {
        String::new()
    }
}

/// Lays out one entry: a blank line, the bold headline, the wrapped optional
/// fields, and a closing blank line.
///
/// The headline is the term, one space, then the expansion. Without the space
/// the two run together on the shared line (`NASANational ...`).
pub fn format_entry(entry: &Entry, style: &dyn Emphasis) -> String {
    let mut lines = vec![String::new()];

    let headline = format!("{} {}", entry.term, entry.expansion);
    lines.push(format!("{}{}", style.bold(&headline), style.reset()));

    if let Some(description) = &entry.description {
        lines.push(fill(description, DESCRIPTION_WIDTH, DESCRIPTION_INDENT));
    }
    if let Some(example) = &entry.example {
        lines.push(fill(example, DETAIL_WIDTH, ""));
    }
    if let Some(result) = &entry.result {
        lines.push(fill(result, DETAIL_WIDTH, ""));
    }

    lines.push(String::new());
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Wraps `text` into a single string of lines no wider than `width`
/// (indent included). Empty or all-whitespace text yields an empty string.
pub fn fill(text: &str, width: usize, indent: &str) -> String {
    wrap(text, width, indent).join("\n")
}

/// Greedy word wrap on whitespace. Words that cannot fit on a line of their
/// own are split.
///
/// Unlike Python's `textwrap.fill`, which the old glossary script used, runs
/// of whitespace collapse to one space everywhere (not only at line breaks)
/// and hyphenated words are never broken after the hyphen.
pub fn wrap(text: &str, width: usize, indent: &str) -> Vec<String> {
    let indent_width = indent.width();
    let avail = width.saturating_sub(indent_width).max(1);

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if current_width > 0 && current_width + 1 + word_width <= avail {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
            continue;
        }

        if current_width > 0 {
            lines.push(format!("{}{}", indent, current));
            current.clear();
            current_width = 0;
        }

        if word_width <= avail {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        for c in word.chars() {
            let char_width = c.width().unwrap_or(0);
            if current_width + char_width > avail && current_width > 0 {
                lines.push(format!("{}{}", indent, current));
                current.clear();
                current_width = 0;
            }
            current.push(c);
            current_width += char_width;
        }
    }

    if current_width > 0 || !current.is_empty() {
        lines.push(format!("{}{}", indent, current));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tags;

    impl Emphasis for Tags {
        fn bold(&self, text: &str) -> String {
            format!("<b>{}", text)
        }

        fn reset(&self) -> String {
            "</b>".to_string()
        }
    }

    #[test]
    fn formats_minimal_entry() {
        let entry = Entry::new("GUI", "Graphical User Interface");
        assert_eq!(
            format_entry(&entry, &Plain),
            "\nGUI Graphical User Interface\n\n"
        );
    }

    #[test]
    fn headline_is_wrapped_in_emphasis() {
        let entry = Entry::new("GUI", "Graphical User Interface");
        let out = format_entry(&entry, &Tags);
        assert_eq!(out, "\n<b>GUI Graphical User Interface</b>\n\n");
    }

    #[test]
    fn detailed_entry_has_indented_description() {
        let entry = Entry::new("CLI", "Command Line Interface").with_details(
            "Typed commands",
            "ls -la",
            "a listing",
        );
        assert_eq!(
            format_entry(&entry, &Plain),
            "\nCLI Command Line Interface\n    Typed commands\nls -la\na listing\n\n"
        );
    }

    #[test]
    fn empty_optional_fields_render_as_blank_lines() {
        let entry = Entry::new("CLI", "Command Line Interface").with_details("Typed", "", "");
        assert_eq!(
            format_entry(&entry, &Plain),
            "\nCLI Command Line Interface\n    Typed\n\n\n\n"
        );
    }

    #[test]
    fn description_wraps_at_one_hundred_columns() {
        let description = "word ".repeat(60);
        let entry = Entry::new("W", "words").with_details(description.trim(), "", "");
        let out = format_entry(&entry, &Plain);

        let desc_lines: Vec<&str> = out.lines().filter(|l| l.starts_with("    ")).collect();
        assert!(desc_lines.len() > 1);
        for line in &desc_lines {
            assert!(line.width() <= DESCRIPTION_WIDTH, "too wide: {:?}", line);
        }
        // 4 indent + 19 words * 5 - 1 = 98; a 20th word would need 103.
        assert_eq!(desc_lines[0].width(), 98);
    }

    #[test]
    fn example_wraps_at_two_hundred_columns() {
        let example = "x".repeat(150) + " " + &"y".repeat(100);
        let lines = wrap(&example, DETAIL_WIDTH, "");
        assert_eq!(lines, vec!["x".repeat(150), "y".repeat(100)]);
    }

    #[test]
    fn long_words_are_split() {
        let lines = wrap(&"z".repeat(25), 10, "");
        assert_eq!(lines, vec!["z".repeat(10), "z".repeat(10), "z".repeat(5)]);
    }

    #[test]
    fn whitespace_collapses() {
        assert_eq!(wrap("  a \t b\n c  ", 80, ""), vec!["a b c"]);
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(wrap("", 80, "    ").is_empty());
        assert_eq!(fill("   ", 80, "    "), "");
    }

    #[test]
    fn wide_characters_count_double() {
        let lines = wrap("日本 語", 5, "");
        assert_eq!(lines, vec!["日本", "語"]);
    }
}
