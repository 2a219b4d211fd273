//! Edit contact command handler.

use anyhow::{Context, Result, anyhow, bail};

use super::add::{address_from_parts, note_from_pair};
use crate::cli::EditArgs;
use crate::domain::{Birthday, Email, Name, Phone, Record};
use crate::infra::Storage;
use crate::store::StoreError;

/// Applies every change requested in `args` to `record` (pure function).
///
/// Order: name, birthday, phones, emails, address, note removals, note
/// additions. Note positions refer to the notes as they were before the
/// edit. Stops at the first failure; callers apply this to a copy so a
/// failed edit leaves the stored record untouched.
///
/// # Errors
///
/// Returns an error if no change was requested, a value is malformed, or a
/// value to remove or replace is not present.
pub fn apply_edits(record: &mut Record, args: &EditArgs) -> Result<()> {
    if !has_changes(args) {
        bail!("nothing to edit; pass at least one change (see `rolo edit --help`)");
    }

    if let Some(name) = &args.name {
        record.edit_name(Name::new(name)?);
    }
    if let Some(birthday) = &args.birthday {
        record.set_birthday(Some(Birthday::new(birthday)?));
    }

    for raw in &args.add_phone {
        record.add_phone(Phone::new(raw)?);
    }
    for raw in &args.remove_phone {
        record.remove_phone(&Phone::new(raw)?)?;
    }
    for pair in args.replace_phone.chunks(2) {
        let [old, new] = pair else {
            bail!("--replace-phone needs OLD and NEW");
        };
        record.edit_phone(&Phone::new(old)?, Phone::new(new)?)?;
    }

    for raw in &args.add_email {
        record.add_email(Email::new(raw)?);
    }
    for raw in &args.remove_email {
        record.remove_email(&Email::new(raw)?)?;
    }
    for pair in args.replace_email.chunks(2) {
        let [old, new] = pair else {
            bail!("--replace-email needs OLD and NEW");
        };
        record.edit_email(&Email::new(old)?, Email::new(new)?)?;
    }

    if let Some(parts) = &args.address {
        record.add_address(address_from_parts(parts)?);
    }

    // highest position first so earlier positions stay valid
    let mut positions = args.remove_note.clone();
    positions.sort_unstable_by(|a, b| b.cmp(a));
    positions.dedup();
    let original = record.notes().to_vec();
    for position in positions {
        let note = position
            .checked_sub(1)
            .and_then(|i| original.get(i))
            .ok_or_else(|| {
                anyhow!(
                    "note {} not found (contact has {} notes)",
                    position,
                    original.len()
                )
            })?;
        record.remove_note(note)?;
    }

    for pair in args.add_note.chunks(2) {
        record.add_note(note_from_pair(pair)?);
    }

    Ok(())
}

fn has_changes(args: &EditArgs) -> bool {
    args.name.is_some()
        || args.birthday.is_some()
        || !args.add_phone.is_empty()
        || !args.remove_phone.is_empty()
        || !args.replace_phone.is_empty()
        || !args.add_email.is_empty()
        || !args.remove_email.is_empty()
        || !args.replace_email.is_empty()
        || args.address.is_some()
        || !args.add_note.is_empty()
        || !args.remove_note.is_empty()
}

pub fn handle_edit(args: &EditArgs, storage: &Storage) -> Result<()> {
    let mut book = storage.load_address_book();
    let slot = book
        .get_mut(args.id)
        .ok_or(StoreError::NotFound { id: args.id })?;

    let mut edited = slot.clone();
    apply_edits(&mut edited, args).with_context(|| format!("contact {} not changed", args.id))?;
    *slot = edited;

    storage
        .save_address_book(&book)
        .with_context(|| "failed to save address book")?;
    println!("Updated contact with ID: {}.", args.id);
    Ok(())
}
