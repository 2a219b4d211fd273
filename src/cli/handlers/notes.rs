//! Notebook command handlers (notes add/ls/rm/tag/tags/find).

use anyhow::{Context, Result};

use crate::cli::{NoteAddArgs, NotesArgs, NotesCommand};
use crate::domain::{Note, Tag};
use crate::infra::Storage;

pub fn handle_notes(args: &NotesArgs, storage: &Storage) -> Result<()> {
    let mut notebook = storage.load_notebook();

    let changed = match &args.command {
        NotesCommand::Add(add) => {
            let position = notebook.add_note(note_from_args(add));
            println!("Note {} created.", position);
            true
        }
        NotesCommand::List => {
            println!("{}", notebook.show_notes());
            false
        }
        NotesCommand::Remove(rm) => {
            let removed = notebook.delete_note(rm.position)?;
            println!("Deleted note {} ({}).", rm.position, removed.title());
            true
        }
        NotesCommand::Tag(tag) => {
            notebook.create_tag(Tag::new(tag.name.as_str()));
            println!("Tag created.");
            true
        }
        NotesCommand::Tags => {
            println!("{}", notebook.show_tags());
            false
        }
        NotesCommand::Find(find) => {
            let found = notebook.find_by_tag(&find.tag);
            if found.is_empty() {
                println!("No notes tagged '{}'.", find.tag);
            }
            for (position, note) in found {
                println!("{}. {}", position, note);
            }
            false
        }
    };

    if changed {
        storage
            .save_notebook(&notebook)
            .with_context(|| "failed to save notebook")?;
    }
    Ok(())
}

pub(crate) fn note_from_args(args: &NoteAddArgs) -> Note {
    Note::new(&args.title, &args.content).with_tags(args.tags.iter().map(|t| Tag::new(t.as_str())))
}
