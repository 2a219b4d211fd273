//! Find command handler.

use anyhow::Result;

use super::{print_records, today};
use crate::cli::FindArgs;
use crate::cli::output::OutputFormat;
use crate::domain::Record;
use crate::infra::Storage;

pub fn handle_search(args: &FindArgs, storage: &Storage) -> Result<()> {
    let book = storage.load_address_book();
    let found: Vec<&Record> = if args.name {
        book.find_by_name(&args.term)
            .into_iter()
            .map(|(_, r)| r)
            .collect()
    } else {
        book.find_by_text(&args.term)
    };

    if let OutputFormat::Human = args.format {
        if found.is_empty() {
            println!("No matching contacts found.");
            return Ok(());
        }
        print_records(&found, args.format, today())?;
        println!();
        println!("{} result(s)", found.len());
        return Ok(());
    }

    print_records(&found, args.format, today())
}
