//! Add contact command handler.

use anyhow::{Context, Result, bail};

use crate::cli::AddArgs;
use crate::domain::{Address, Field, FieldKind, Name, Note, Record};
use crate::infra::Storage;

/// Builds a record from raw command-line input (pure function, no I/O).
///
/// Every raw value is validated as a field of its kind before the record is
/// assembled, so a single bad value rejects the whole contact.
///
/// # Errors
///
/// Returns an error if the name is empty or any phone, email or birthday is
/// malformed.
pub fn create_record(args: &AddArgs) -> Result<Record> {
    let name = Name::new(&args.name)?;

    let raw_fields = args
        .birthday
        .iter()
        .map(|b| (FieldKind::Birthday, b))
        .chain(args.phones.iter().map(|p| (FieldKind::Phone, p)))
        .chain(args.emails.iter().map(|e| (FieldKind::Email, e)));

    let mut builder = Record::builder(name);
    for (kind, raw) in raw_fields {
        builder = builder.field(Field::parse(kind, raw)?);
    }

    let address = args.address.as_deref().map(address_from_parts).transpose()?;
    let notes = args
        .notes
        .chunks(2)
        .map(note_from_pair)
        .collect::<Result<Vec<_>>>()?;

    Ok(builder.address(address).notes(notes).build())
}

pub fn handle_add(args: &AddArgs, storage: &Storage) -> Result<()> {
    let record = create_record(args)?;
    let mut book = storage.load_address_book();
    let id = book.insert(record)?;
    storage
        .save_address_book(&book)
        .with_context(|| "failed to save address book")?;
    println!("Added contact with ID: {}.", id);
    Ok(())
}

pub(crate) fn address_from_parts(parts: &[String]) -> Result<Address> {
    match parts {
        [street, city, postal_code, country] => {
            Ok(Address::new(street, city, postal_code, country))
        }
        _ => bail!("address needs street, city, postal code and country"),
    }
}

pub(crate) fn note_from_pair(pair: &[String]) -> Result<Note> {
    match pair {
        [title, content] => Ok(Note::new(title, content)),
        _ => bail!("a note needs both a title and content"),
    }
}
