//! Command handlers for the CLI.
//!
//! Each handler loads the collection it needs, applies the command and saves
//! only when something changed.

mod add;
mod birthdays;
mod edit;
mod list;
mod notes;
mod remove;
mod search;


use chrono::{Local, NaiveDate};

use crate::cli::output::{Output, OutputFormat, RecordListing};
use crate::domain::Record;

// Re-export public items
pub use add::{create_record, handle_add};
pub use birthdays::handle_birthdays;
pub use edit::{apply_edits, handle_edit};
pub use list::{handle_list, handle_show, page_count};
pub use notes::handle_notes;
pub use remove::handle_remove;
pub use search::handle_search;

// ===========================================
// Shared Utilities
// ===========================================

/// Today's date in the local time zone.
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Prints records in the requested format.
pub(crate) fn print_records(
    records: &[&Record],
    format: OutputFormat,
    today: NaiveDate,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Human => {
            let rendered: Vec<String> = records.iter().map(|r| r.render(today)).collect();
            println!("{}", rendered.join("\n"));
        }
        OutputFormat::Json => {
            let listings: Vec<RecordListing> = records
                .iter()
                .map(|r| RecordListing::from_record(r, today))
                .collect();
            println!("{}", serde_json::to_string_pretty(&Output::new(listings))?);
        }
    }
    Ok(())
}
