//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod logging;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::domain::RecordId;
use output::OutputFormat;

/// rolo - personal contacts and notes
#[derive(Parser, Debug)]
#[command(name = "rolo", version, about, long_about = None)]
pub struct Cli {
    /// Data directory (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a contact
    Add(AddArgs),

    /// Find contacts by name, phone or email
    Find(FindArgs),

    /// Show a single contact
    Show(ShowArgs),

    /// List contacts, optionally one page at a time
    #[command(name = "ls")]
    List(ListArgs),

    /// Delete a contact by ID
    #[command(name = "rm")]
    Remove(RemoveArgs),

    /// Edit a contact's fields and notes
    Edit(EditArgs),

    /// List upcoming birthdays
    Birthdays(BirthdaysArgs),

    /// Manage standalone notes and tags
    Notes(NotesArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `add` command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Full name
    pub name: String,

    /// Date of birth (YYYY-MM-DD)
    #[arg(short, long)]
    pub birthday: Option<String>,

    /// Phone number, 9 digits (can be specified multiple times)
    #[arg(short, long = "phone", action = ArgAction::Append)]
    pub phones: Vec<String>,

    /// Email address (can be specified multiple times)
    #[arg(short, long = "email", action = ArgAction::Append)]
    pub emails: Vec<String>,

    /// Postal address
    #[arg(long, num_args = 4, value_names = ["STREET", "CITY", "POSTAL_CODE", "COUNTRY"])]
    pub address: Option<Vec<String>>,

    /// Attach a note (can be specified multiple times)
    #[arg(
        long = "note",
        num_args = 2,
        value_names = ["TITLE", "CONTENT"],
        action = ArgAction::Append
    )]
    pub notes: Vec<String>,
}

/// Arguments for the `find` command
#[derive(Parser, Debug)]
pub struct FindArgs {
    /// Text to look for in names (any case), phones and emails
    pub term: String,

    /// Match names only, ignoring phones and emails
    #[arg(short, long)]
    pub name: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Contact ID
    pub id: RecordId,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Show only this page (1-based)
    #[arg(long)]
    pub page: Option<usize>,

    /// Contacts per page (overrides config file)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Contact ID
    pub id: RecordId,
}

/// Arguments for the `edit` command
///
/// All changes are applied together; if any of them fails nothing is saved.
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Contact ID
    pub id: RecordId,

    /// Replace the name
    #[arg(long)]
    pub name: Option<String>,

    /// Replace the date of birth (YYYY-MM-DD)
    #[arg(long)]
    pub birthday: Option<String>,

    /// Add a phone number
    #[arg(long, action = ArgAction::Append)]
    pub add_phone: Vec<String>,

    /// Remove a phone number
    #[arg(long, action = ArgAction::Append)]
    pub remove_phone: Vec<String>,

    /// Replace a phone number
    #[arg(long, num_args = 2, value_names = ["OLD", "NEW"], action = ArgAction::Append)]
    pub replace_phone: Vec<String>,

    /// Add an email address
    #[arg(long, action = ArgAction::Append)]
    pub add_email: Vec<String>,

    /// Remove an email address
    #[arg(long, action = ArgAction::Append)]
    pub remove_email: Vec<String>,

    /// Replace an email address
    #[arg(long, num_args = 2, value_names = ["OLD", "NEW"], action = ArgAction::Append)]
    pub replace_email: Vec<String>,

    /// Set the postal address, replacing any existing one
    #[arg(long, num_args = 4, value_names = ["STREET", "CITY", "POSTAL_CODE", "COUNTRY"])]
    pub address: Option<Vec<String>>,

    /// Attach a note
    #[arg(long, num_args = 2, value_names = ["TITLE", "CONTENT"], action = ArgAction::Append)]
    pub add_note: Vec<String>,

    /// Remove the note at this position (1-based, as shown by `show`)
    #[arg(long, action = ArgAction::Append)]
    pub remove_note: Vec<usize>,
}

/// Arguments for the `birthdays` command
#[derive(Parser, Debug)]
pub struct BirthdaysArgs {
    /// Look ahead this many days
    #[arg(short, long, default_value_t = 7)]
    pub within: i64,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `notes` command group
#[derive(Parser, Debug)]
pub struct NotesArgs {
    #[command(subcommand)]
    pub command: NotesCommand,
}

#[derive(Subcommand, Debug)]
pub enum NotesCommand {
    /// Create a note
    Add(NoteAddArgs),

    /// Show all notes with their tags
    #[command(name = "ls")]
    List,

    /// Delete a note by position
    #[command(name = "rm")]
    Remove(NoteRemoveArgs),

    /// Create a free-standing tag
    Tag(TagCreateArgs),

    /// Show all free-standing tags
    Tags,

    /// Show notes carrying a tag
    Find(NoteFindArgs),
}

/// Arguments for `notes add`
#[derive(Parser, Debug)]
pub struct NoteAddArgs {
    /// Note title
    pub title: String,

    /// Note content
    pub content: String,

    /// Tag for the note (can be specified multiple times)
    #[arg(short, long = "tag", action = ArgAction::Append)]
    pub tags: Vec<String>,
}

/// Arguments for `notes rm`
#[derive(Parser, Debug)]
pub struct NoteRemoveArgs {
    /// Note position (1-based, as shown by `notes ls`)
    pub position: usize,
}

/// Arguments for `notes tag`
#[derive(Parser, Debug)]
pub struct TagCreateArgs {
    /// Tag name
    pub name: String,
}

/// Arguments for `notes find`
#[derive(Parser, Debug)]
pub struct NoteFindArgs {
    /// Tag name
    pub tag: String,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
