//! Upcoming birthdays command handler.

use anyhow::Result;

use super::today;
use crate::cli::BirthdaysArgs;
use crate::cli::output::{BirthdayListing, Output, OutputFormat};
use crate::infra::Storage;

pub fn handle_birthdays(args: &BirthdaysArgs, storage: &Storage) -> Result<()> {
    let book = storage.load_address_book();
    let upcoming = book.upcoming_birthdays(today(), args.within);

    let listings: Vec<BirthdayListing> = upcoming
        .iter()
        .filter_map(|(days, r)| {
            r.birthday().map(|b| BirthdayListing {
                id: r.id().map(|id| id.get()),
                name: r.name().to_string(),
                birthday: b.to_string(),
                days: *days,
            })
        })
        .collect();

    match args.format {
        OutputFormat::Human => {
            if listings.is_empty() {
                println!("No birthdays in the next {} days.", args.within);
            }
            for l in &listings {
                let id = l.id.map_or_else(|| "-".to_string(), |id| id.to_string());
                let when = match l.days {
                    0 => "today".to_string(),
                    1 => "tomorrow".to_string(),
                    n => format!("in {} days", n),
                };
                println!("{} {} ({}) {}", id, l.name, l.birthday, when);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(listings))?);
        }
    }
    Ok(())
}
