//! List and show command handlers.

use anyhow::{Result, bail};

use super::{print_records, today};
use crate::cli::config::Config;
use crate::cli::output::{Output, OutputFormat, PageListing, RecordListing};
use crate::cli::{ListArgs, ShowArgs};
use crate::domain::Record;
use crate::infra::Storage;
use crate::store::StoreError;

/// Number of pages needed for `len` records at `page_size` per page.
pub fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

pub fn handle_list(args: &ListArgs, storage: &Storage, config: &Config) -> Result<()> {
    let book = storage.load_address_book();
    let today = today();

    let Some(page) = args.page else {
        match args.format {
            OutputFormat::Human => println!("{}", book.show_all(today)),
            OutputFormat::Json => {
                let records: Vec<&Record> = book.iter().collect();
                print_records(&records, args.format, today)?;
            }
        }
        return Ok(());
    };

    let page_size = config.page_size(args.page_size);
    let pages = page_count(book.len(), page_size);
    if page == 0 {
        bail!("pages start at 1");
    }
    if book.is_empty() && matches!(args.format, OutputFormat::Human) {
        println!("{}", book.show_all(today));
        return Ok(());
    }
    if !book.is_empty() && page > pages {
        bail!("page {} out of range (1-{})", page, pages);
    }

    let batch = book.batches(page_size).nth(page - 1).unwrap_or_default();
    match args.format {
        OutputFormat::Human => {
            print_records(&batch, args.format, today)?;
            println!();
            println!("Page {} of {}", page, pages);
        }
        OutputFormat::Json => {
            let listing = PageListing {
                page,
                pages,
                records: batch
                    .iter()
                    .map(|r| RecordListing::from_record(r, today))
                    .collect(),
            };
            println!("{}", serde_json::to_string_pretty(&Output::new(listing))?);
        }
    }
    Ok(())
}

pub fn handle_show(args: &ShowArgs, storage: &Storage) -> Result<()> {
    let book = storage.load_address_book();
    let record = book
        .get(args.id)
        .ok_or(StoreError::NotFound { id: args.id })?;
    print_records(&[record], args.format, today())
}
