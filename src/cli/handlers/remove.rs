//! Delete contact command handler.

use anyhow::{Context, Result};

use crate::cli::RemoveArgs;
use crate::infra::Storage;

pub fn handle_remove(args: &RemoveArgs, storage: &Storage) -> Result<()> {
    let mut book = storage.load_address_book();
    let removed = book.delete_by_id(args.id)?;
    storage
        .save_address_book(&book)
        .with_context(|| "failed to save address book")?;
    println!("Deleted record with ID: {} ({}).", args.id, removed.name());
    Ok(())
}
