//! rolo - personal contacts and notes from the command line

pub mod cli;
pub mod domain;
pub mod infra;
pub mod store;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_add, handle_birthdays, handle_edit, handle_list, handle_notes, handle_remove,
        handle_search, handle_show,
    },
    logging,
};
use infra::Storage;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Command::Completions(args) = &cli.command {
        let mut command = Cli::command();
        clap_complete::generate(args.shell, &mut command, "rolo", &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load()?;
    let storage = Storage::new(config.data_dir(cli.dir.as_ref()));
    tracing::debug!(dir = %storage.dir().display(), "using data directory");

    match &cli.command {
        Command::Add(args) => handle_add(args, &storage),
        Command::Find(args) => handle_search(args, &storage),
        Command::Show(args) => handle_show(args, &storage),
        Command::List(args) => handle_list(args, &storage, &config),
        Command::Remove(args) => handle_remove(args, &storage),
        Command::Edit(args) => handle_edit(args, &storage),
        Command::Birthdays(args) => handle_birthdays(args, &storage),
        Command::Notes(args) => handle_notes(args, &storage),
        Command::Completions(_) => Ok(()),
    }
}
