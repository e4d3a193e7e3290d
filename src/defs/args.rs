use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "defs", version)]
#[command(
    about = "A personal glossary: record acronyms and look them up",
    long_about = "A personal glossary: record acronyms and look them up.\n\n\
        Add a term with `defs -a NASA`, then answer the questions.\n\
        Look one up with `defs -l nasa`; hyphens and punctuation in stored\n\
        terms are ignored, so `defs -l abc` also finds `A-BC`."
)]
pub struct Cli {
    /// Add a new definition for TERM
    #[arg(short, long, value_name = "TERM")]
    pub add: Option<String>,

    /// Look up an existing definition
    #[arg(short, long, value_name = "TERM")]
    pub lookup: Option<String>,

    /// Glossary file to use instead of definitions.json beside the executable
    #[arg(short, long, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// True when no operation was requested.
    pub fn is_empty(&self) -> bool {
        self.add.is_none() && self.lookup.is_none()
    }
}
