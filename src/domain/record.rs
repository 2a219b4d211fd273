//! Contact record aggregating validated fields and notes.

use crate::domain::{Address, Birthday, Email, Field, Name, Note, Phone};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Numeric identifier assigned to a record by the address book.
///
/// Identifiers start at 1 and are reused after deletion, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u32);

impl RecordId {
    /// The first identifier handed out by an empty address book.
    pub const FIRST: RecordId = RecordId(1);

    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// The identifier after this one, or `None` at `u32::MAX`.
    pub(crate) fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when parsing an invalid record identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid record ID '{value}': {reason}")]
pub struct ParseRecordIdError {
    value: String,
    reason: &'static str,
}

impl FromStr for RecordId {
    type Err = ParseRecordIdError;

    /// Parses `"7"`, and also `"ID: 7"` as copied from a rendered record.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix("ID:").unwrap_or(trimmed).trim();
        let value: u32 = digits.parse().map_err(|_| ParseRecordIdError {
            value: s.to_string(),
            reason: "expected a positive number",
        })?;
        if value == 0 {
            return Err(ParseRecordIdError {
                value: s.to_string(),
                reason: "record IDs start at 1",
            });
        }
        Ok(Self(value))
    }
}

/// Errors from record mutations that reference an absent value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("phone number not found: {0}")]
    PhoneNotFound(String),

    #[error("email address not found: {0}")]
    EmailNotFound(String),

    #[error("note not found: {0}")]
    NoteNotFound(String),
}

/// One contact entry.
///
/// The `id` stays unset until the record is inserted into an
/// [`AddressBook`](crate::store::AddressBook), which assigns it exactly once.
///
/// # Examples
///
/// ```
/// use rolo::domain::{Name, Phone, Record};
///
/// let mut record = Record::new(Name::new("Alice Smith").unwrap(), None);
/// record.add_phone(Phone::new("123456789").unwrap());
/// assert!(record.id().is_none());
/// assert_eq!(record.phones().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    id: Option<RecordId>,
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    emails: Vec<Email>,
    #[serde(default)]
    birthday: Option<Birthday>,
    #[serde(default)]
    address: Option<Address>,
    #[serde(default)]
    notes: Vec<Note>,
}

impl Record {
    pub fn new(name: Name, birthday: Option<Birthday>) -> Self {
        Self {
            id: None,
            name,
            phones: Vec::new(),
            emails: Vec::new(),
            birthday,
            address: None,
            notes: Vec::new(),
        }
    }

    /// Creates a builder for a record with optional fields.
    pub fn builder(name: Name) -> RecordBuilder {
        RecordBuilder::new(name)
    }

    pub fn id(&self) -> Option<RecordId> {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn emails(&self) -> &[Email] {
        &self.emails
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    // ===========================================
    // Mutations
    // ===========================================

    pub fn edit_name(&mut self, name: Name) {
        self.name = name;
    }

    pub fn set_birthday(&mut self, birthday: Option<Birthday>) {
        self.birthday = birthday;
    }

    /// Sets the address, replacing any existing one.
    pub fn add_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    pub fn add_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Removes the first phone equal to `phone`.
    pub fn remove_phone(&mut self, phone: &Phone) -> Result<(), RecordError> {
        if remove_first(&mut self.phones, phone) {
            Ok(())
        } else {
            Err(RecordError::PhoneNotFound(phone.to_string()))
        }
    }

    /// Replaces `old` with `new`; the new number goes to the end of the list.
    ///
    /// On error the phone list is left untouched.
    pub fn edit_phone(&mut self, old: &Phone, new: Phone) -> Result<(), RecordError> {
        self.remove_phone(old)?;
        self.add_phone(new);
        Ok(())
    }

    pub fn add_email(&mut self, email: Email) {
        self.emails.push(email);
    }

    pub fn remove_email(&mut self, email: &Email) -> Result<(), RecordError> {
        if remove_first(&mut self.emails, email) {
            Ok(())
        } else {
            Err(RecordError::EmailNotFound(email.to_string()))
        }
    }

    pub fn edit_email(&mut self, old: &Email, new: Email) -> Result<(), RecordError> {
        self.remove_email(old)?;
        self.add_email(new);
        Ok(())
    }

    pub fn add_note(&mut self, note: Note) {
        self.notes.push(note);
    }

    pub fn remove_note(&mut self, note: &Note) -> Result<(), RecordError> {
        if remove_first(&mut self.notes, note) {
            Ok(())
        } else {
            Err(RecordError::NoteNotFound(note.title().to_string()))
        }
    }

    pub fn edit_note(&mut self, old: &Note, new: Note) -> Result<(), RecordError> {
        self.remove_note(old)?;
        self.add_note(new);
        Ok(())
    }

    /// Applies a single validated field: names and birthdays replace,
    /// phones and emails append, addresses replace.
    pub fn add_field(&mut self, field: Field) {
        match field {
            Field::Name(name) => self.edit_name(name),
            Field::Phone(phone) => self.add_phone(phone),
            Field::Email(email) => self.add_email(email),
            Field::Birthday(birthday) => self.set_birthday(Some(birthday)),
            Field::Address(address) => self.add_address(address),
        }
    }

    // ===========================================
    // Birthdays & Rendering
    // ===========================================

    /// Returns the number of days from `today` until the next birthday.
    ///
    /// Returns `None` when no birthday is set. A birthday falling on `today`
    /// yields 0. In non-leap years, 29 February birthdays are counted on
    /// 28 February.
    pub fn days_to_next_birthday(&self, today: NaiveDate) -> Option<i64> {
        let date = self.birthday?.date();
        let this_year = occurrence_in(date, today.year())?;
        let next = if this_year < today {
            occurrence_in(date, today.year() + 1)?
        } else {
            this_year
        };
        Some((next - today).num_days())
    }

    /// Renders the record for display, counting birthdays from `today`.
    pub fn render(&self, today: NaiveDate) -> String {
        let id = self
            .id
            .map_or_else(|| "-".to_string(), |id| id.to_string());
        let mut out = format!(
            "ID: {}, Name: {}, Phones: {}, Email: {}",
            id,
            self.name,
            join_display(&self.phones),
            join_display(&self.emails)
        );

        if let Some(birthday) = self.birthday {
            out.push_str(&format!(", Birthday: {}", birthday));
            if let Some(days) = self.days_to_next_birthday(today) {
                out.push_str(&format!(", Days to birthday: {}", days));
            }
        }

        if let Some(address) = &self.address {
            out.push_str(&format!("\nAddress: {}", address));
        }

        let notes: Vec<String> = self.notes.iter().map(ToString::to_string).collect();
        out.push_str("\nNotes:\n");
        out.push_str(&notes.join("\n"));
        out
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Local::now().date_naive()))
    }
}

/// Builder for records with optional fields.
#[derive(Debug)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    fn new(name: Name) -> Self {
        Self {
            record: Record::new(name, None),
        }
    }

    pub fn birthday(mut self, birthday: Option<Birthday>) -> Self {
        self.record.birthday = birthday;
        self
    }

    pub fn phones(mut self, phones: impl IntoIterator<Item = Phone>) -> Self {
        self.record.phones.extend(phones);
        self
    }

    pub fn emails(mut self, emails: impl IntoIterator<Item = Email>) -> Self {
        self.record.emails.extend(emails);
        self
    }

    pub fn address(mut self, address: Option<Address>) -> Self {
        self.record.address = address;
        self
    }

    pub fn notes(mut self, notes: impl IntoIterator<Item = Note>) -> Self {
        self.record.notes.extend(notes);
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.record.add_field(field);
        self
    }

    pub fn build(self) -> Record {
        self.record
    }
}

fn occurrence_in(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

fn remove_first<T: PartialEq>(items: &mut Vec<T>, item: &T) -> bool {
    match items.iter().position(|x| x == item) {
        Some(pos) => {
            items.remove(pos);
            true
        }
        None => false,
    }
}

fn join_display<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FieldKind, Tag};
    use pretty_assertions::assert_eq;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn phone(s: &str) -> Phone {
        Phone::new(s).unwrap()
    }

    fn email(s: &str) -> Email {
        Email::new(s).unwrap()
    }

    fn alice() -> Record {
        Record::new(Name::new("Alice Smith").unwrap(), None)
    }

    fn with_birthday(s: &str) -> Record {
        Record::new(Name::new("B").unwrap(), Some(Birthday::new(s).unwrap()))
    }

    // ===========================================
    // RecordId
    // ===========================================

    #[test]
    fn record_id_parses_plain_and_prefixed() {
        assert_eq!("7".parse::<RecordId>().unwrap(), RecordId::new(7));
        assert_eq!("ID: 12".parse::<RecordId>().unwrap(), RecordId::new(12));
        assert_eq!(" ID:3 ".parse::<RecordId>().unwrap(), RecordId::new(3));
    }

    #[test]
    fn record_id_rejects_garbage_and_zero() {
        assert!("abc".parse::<RecordId>().is_err());
        assert!("-1".parse::<RecordId>().is_err());
        assert!("0".parse::<RecordId>().is_err());
    }

    // ===========================================
    // Phones, emails, notes
    // ===========================================

    #[test]
    fn phones_keep_order_and_duplicates() {
        let mut r = alice();
        r.add_phone(phone("111111111"));
        r.add_phone(phone("222222222"));
        r.add_phone(phone("111111111"));
        assert_eq!(r.phones().len(), 3);
        assert_eq!(r.phones()[1], phone("222222222"));
    }

    #[test]
    fn remove_phone_by_value() {
        let mut r = alice();
        r.add_phone(phone("111111111"));
        r.add_phone(phone("222222222"));
        r.remove_phone(&phone("111111111")).unwrap();
        assert_eq!(r.phones(), &[phone("222222222")]);
    }

    #[test]
    fn remove_missing_phone_is_not_found() {
        let mut r = alice();
        r.add_phone(phone("111111111"));
        let err = r.remove_phone(&phone("999999999")).unwrap_err();
        assert_eq!(err, RecordError::PhoneNotFound("999999999".to_string()));
        assert_eq!(r.phones().len(), 1);
    }

    #[test]
    fn edit_phone_replaces_and_appends() {
        let mut r = alice();
        r.add_phone(phone("111111111"));
        r.add_phone(phone("222222222"));
        r.edit_phone(&phone("111111111"), phone("333333333")).unwrap();
        assert_eq!(r.phones(), &[phone("222222222"), phone("333333333")]);
    }

    #[test]
    fn edit_phone_with_absent_old_leaves_list_unchanged() {
        let mut r = alice();
        r.add_phone(phone("111111111"));
        assert!(r.edit_phone(&phone("444444444"), phone("333333333")).is_err());
        assert_eq!(r.phones(), &[phone("111111111")]);
    }

    #[test]
    fn edit_email_replaces() {
        let mut r = alice();
        r.add_email(email("a@b.co"));
        r.edit_email(&email("a@b.co"), email("c@d.co")).unwrap();
        assert_eq!(r.emails(), &[email("c@d.co")]);
        assert_eq!(
            r.remove_email(&email("a@b.co")).unwrap_err(),
            RecordError::EmailNotFound("a@b.co".to_string())
        );
    }

    #[test]
    fn notes_compare_by_value() {
        let mut r = alice();
        let note = Note::new("Call", "Sunday").with_tags([Tag::new("family")]);
        r.add_note(note.clone());
        // same title, different tags is a different note
        assert!(r.remove_note(&Note::new("Call", "Sunday")).is_err());
        r.edit_note(&note, Note::new("Call", "Monday")).unwrap();
        assert_eq!(r.notes(), &[Note::new("Call", "Monday")]);
    }

    #[test]
    fn add_address_replaces_existing() {
        let mut r = alice();
        r.add_address(Address::new("A", "B", "C", "D"));
        r.add_address(Address::new("E", "F", "G", "H"));
        assert_eq!(r.address().unwrap().street(), "E");
    }

    #[test]
    fn add_field_dispatches_by_kind() {
        let mut r = alice();
        r.add_field(Field::parse(FieldKind::Phone, "123456789").unwrap());
        r.add_field(Field::parse(FieldKind::Name, "Alicja").unwrap());
        r.add_field(Field::parse(FieldKind::Birthday, "1990-01-01").unwrap());
        assert_eq!(r.phones(), &[phone("123456789")]);
        assert_eq!(r.name().as_str(), "Alicja");
        assert!(r.birthday().is_some());
    }

    // ===========================================
    // Birthdays
    // ===========================================

    #[test]
    fn days_to_birthday_unset() {
        assert_eq!(alice().days_to_next_birthday(date("2024-01-01")), None);
    }

    #[test]
    fn days_to_birthday_later_this_year() {
        let r = with_birthday("1990-03-15");
        assert_eq!(r.days_to_next_birthday(date("2023-03-01")), Some(14));
    }

    #[test]
    fn days_to_birthday_today_is_zero() {
        let r = with_birthday("1990-03-15");
        assert_eq!(r.days_to_next_birthday(date("2023-03-15")), Some(0));
    }

    #[test]
    fn days_to_birthday_already_passed_wraps_to_next_year() {
        let r = with_birthday("1990-03-15");
        // 2024 is a leap year, so the wrap spans 366 days
        assert_eq!(r.days_to_next_birthday(date("2023-03-16")), Some(365));
        assert_eq!(r.days_to_next_birthday(date("2023-03-14")), Some(1));
        assert_eq!(r.days_to_next_birthday(date("2023-12-31")), Some(75));
    }

    #[test]
    fn days_to_leap_day_birthday() {
        let r = with_birthday("2000-02-29");
        assert_eq!(r.days_to_next_birthday(date("2024-02-01")), Some(28));
        assert_eq!(r.days_to_next_birthday(date("2023-02-01")), Some(27));
    }

    // ===========================================
    // Rendering & builder
    // ===========================================

    #[test]
    fn render_minimal_record() {
        let r = alice();
        assert_eq!(
            r.render(date("2024-01-01")),
            "ID: -, Name: Alice Smith, Phones: , Email: \nNotes:\n"
        );
    }

    #[test]
    fn render_full_record() {
        let mut r = Record::builder(Name::new("Alice Smith").unwrap())
            .birthday(Some(Birthday::new("1990-01-10").unwrap()))
            .phones([phone("123456789"), phone("987654321")])
            .emails([email("alice@example.com")])
            .address(Some(Address::new("Main 1", "Springfield", "12-345", "Poland")))
            .notes([
                Note::new("Gift", "Tea").with_tags([Tag::new("ideas")]),
                Note::new("Met", "2020"),
            ])
            .build();
        r.set_id(RecordId::new(4));

        assert_eq!(
            r.render(date("2024-01-01")),
            "ID: 4, Name: Alice Smith, Phones: 123456789, 987654321, Email: alice@example.com, \
             Birthday: 1990-01-10, Days to birthday: 9\n\
             Address: Main 1, Springfield, 12-345, Poland\n\
             Notes:\n\
             Title: Gift, Content: Tea, Tags: ideas\n\
             Title: Met, Content: 2020, Tags: "
        );
    }

    #[test]
    fn serde_roundtrip_keeps_everything() {
        let mut r = Record::builder(Name::new("Bob").unwrap())
            .phones([phone("123456789")])
            .address(Some(Address::new("a", "b", "c", "d")))
            .build();
        r.set_id(RecordId::new(2));
        let json = serde_json::to_string(&r).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
