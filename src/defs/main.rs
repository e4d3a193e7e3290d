use clap::{CommandFactory, Parser};
use colored::Colorize;
use defs::api::{CmdMessage, DefsApi, MessageLevel};
use defs::config::StoreLocation;
use defs::error::Result;
use defs::model::Entry;
use defs::prompt::ConsolePrompt;
use defs::render::{Ansi, format_entry};
use defs::store::fs::FileStore;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod args;
use args::Cli;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose { "defs=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    if cli.is_empty() {
        Cli::command().print_help()?;
        return Ok(());
    }

    let location = StoreLocation::resolve(cli.store)?;
    debug!(path = %location.path.display(), "using store");

    let mut api = DefsApi::new(FileStore::new(location.path));
    let mut prompt = ConsolePrompt::stdio();

    if let Some(term) = cli.add {
        let result = api.add_entry(&mut prompt, Some(term))?;
        print_messages(&result.messages);
    }

    if let Some(query) = cli.lookup {
        let result = api.lookup_or_offer(&mut prompt, &query)?;
        print_entries(&result.listed_entries);
        print_messages(&result.messages);
    }

    Ok(())
}

fn print_entries(entries: &[Entry]) {
    for entry in entries {
        print!("{}", format_entry(entry, &Ansi));
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}
