//! AddressBook: records keyed by reusable numeric IDs.

use crate::domain::{Record, RecordId};
use chrono::NaiveDate;
use indexmap::IndexMap;
use indexmap::map::Values;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::{debug, info};

/// Number of records per batch when no size is configured.
pub const DEFAULT_BATCH_SIZE: usize = 5;

/// Errors that can occur during address book operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record has the requested ID.
    #[error("record not found: {id}")]
    NotFound { id: RecordId },

    /// Every identifier up to `u32::MAX` is taken.
    #[error("no record IDs left to assign")]
    IdsExhausted,

    /// Deserialized data violates the address book's invariants.
    #[error("inconsistent address book: {0}")]
    Inconsistent(String),
}

/// Result type for address book operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// The owning collection of contact records.
///
/// Records are kept in insertion order. IDs are allocated densely: a
/// released ID is always handed out again before a fresh one, smallest
/// first.
///
/// # Examples
///
/// ```
/// use rolo::domain::{Name, Record};
/// use rolo::store::AddressBook;
///
/// let mut book = AddressBook::new();
/// let a = book.insert(Record::new(Name::new("Ann").unwrap(), None)).unwrap();
/// let b = book.insert(Record::new(Name::new("Ben").unwrap(), None)).unwrap();
/// book.delete_by_id(a).unwrap();
/// let c = book.insert(Record::new(Name::new("Cat").unwrap(), None)).unwrap();
/// assert_eq!(c, a);
/// assert_ne!(c, b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "AddressBookData")]
pub struct AddressBook {
    entries: IndexMap<RecordId, Record>,
    next_id: RecordId,
    free_ids: BTreeSet<RecordId>,
}

impl Default for AddressBook {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
            next_id: RecordId::FIRST,
            free_ids: BTreeSet::new(),
        }
    }
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The smallest ID a fresh (non-reused) allocation may receive.
    pub fn next_id(&self) -> RecordId {
        self.next_id
    }

    /// Released IDs awaiting reuse, in ascending order.
    pub fn free_ids(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.free_ids.iter().copied()
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.entries.get(&id)
    }

    pub fn get_mut(&mut self, id: RecordId) -> Option<&mut Record> {
        self.entries.get_mut(&id)
    }

    /// Iterates over records in store order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.entries.values()
    }

    // ===========================================
    // Insertion & deletion
    // ===========================================

    /// Inserts a record, assigns its ID and returns it.
    ///
    /// The smallest released ID is reused when one exists; otherwise the
    /// record takes `next_id`, which then advances past every ID held by an
    /// entry or waiting in the free set. Any ID the record carried before is
    /// replaced.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IdsExhausted` when no fresh ID can be assigned;
    /// the store is left unchanged.
    pub fn insert(&mut self, mut record: Record) -> StoreResult<RecordId> {
        let id = match self.free_ids.pop_first() {
            Some(id) => id,
            None => {
                let id = self.first_unreserved(self.next_id)?;
                self.next_id = id.next().ok_or(StoreError::IdsExhausted)?;
                id
            }
        };
        record.set_id(id);
        self.entries.insert(id, record);
        // at the top of the range next_id stays put and the next insert fails
        if let Ok(next) = self.first_unreserved(self.next_id) {
            self.next_id = next;
        }
        debug!(%id, next_id = %self.next_id, free = self.free_ids.len(), "allocated record id");
        Ok(id)
    }

    /// Removes a record and releases its ID for reuse.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no record has this ID; the store is
    /// left unchanged.
    pub fn delete_by_id(&mut self, id: RecordId) -> StoreResult<Record> {
        let record = self
            .entries
            .shift_remove(&id)
            .ok_or(StoreError::NotFound { id })?;
        self.free_ids.insert(id);
        info!(%id, "deleted record");
        Ok(record)
    }

    /// The first ID at or after `start` that no entry holds and that is not
    /// waiting in the free set.
    fn first_unreserved(&self, start: RecordId) -> StoreResult<RecordId> {
        let mut id = start;
        while self.entries.contains_key(&id) || self.free_ids.contains(&id) {
            id = id.next().ok_or(StoreError::IdsExhausted)?;
        }
        Ok(id)
    }

    // ===========================================
    // Search
    // ===========================================

    /// Finds records whose name contains `term` ignoring case, or whose
    /// phones or emails contain `term` exactly.
    ///
    /// Each record appears at most once, in store order.
    pub fn find_by_text(&self, term: &str) -> Vec<&Record> {
        let lowered = term.to_lowercase();
        self.entries
            .values()
            .filter(|r| {
                r.name().as_str().to_lowercase().contains(&lowered)
                    || r.phones().iter().any(|p| p.as_str().contains(term))
                    || r.emails().iter().any(|e| e.as_str().contains(term))
            })
            .collect()
    }

    /// Finds records whose name contains `part`, ignoring case.
    pub fn find_by_name(&self, part: &str) -> Vec<(RecordId, &Record)> {
        let lowered = part.to_lowercase();
        self.entries
            .iter()
            .filter(|(_, r)| r.name().as_str().to_lowercase().contains(&lowered))
            .map(|(id, r)| (*id, r))
            .collect()
    }

    /// Records whose next birthday is at most `within_days` days after
    /// `today`, soonest first.
    pub fn upcoming_birthdays(&self, today: NaiveDate, within_days: i64) -> Vec<(i64, &Record)> {
        let mut upcoming: Vec<(i64, &Record)> = self
            .entries
            .values()
            .filter_map(|r| r.days_to_next_birthday(today).map(|days| (days, r)))
            .filter(|(days, _)| *days <= within_days)
            .collect();
        upcoming.sort_by_key(|(days, _)| *days);
        upcoming
    }

    // ===========================================
    // Iteration & display
    // ===========================================

    /// Starts a fresh traversal in batches of up to `size` records.
    ///
    /// The cursor lives in the returned iterator, so independent traversals
    /// never interfere. A size of 0 is treated as 1.
    pub fn batches(&self, size: usize) -> Batches<'_> {
        Batches {
            records: self.entries.values(),
            size: size.max(1),
        }
    }

    /// Renders every record in store order, one per line group.
    pub fn show_all(&self, today: NaiveDate) -> String {
        if self.entries.is_empty() {
            return "Address book is empty.".to_string();
        }
        self.entries
            .values()
            .map(|r| r.render(today))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Lazy, one-shot traversal of an address book in fixed-size batches.
///
/// Created by [`AddressBook::batches`].
#[derive(Debug, Clone)]
pub struct Batches<'a> {
    records: Values<'a, RecordId, Record>,
    size: usize,
}

impl<'a> Iterator for Batches<'a> {
    type Item = Vec<&'a Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let batch: Vec<&Record> = self.records.by_ref().take(self.size).collect();
        if batch.is_empty() { None } else { Some(batch) }
    }
}

// ===========================================
// Serde
// ===========================================

#[derive(Serialize)]
struct AddressBookRef<'a> {
    next_id: RecordId,
    free_ids: &'a BTreeSet<RecordId>,
    records: Vec<&'a Record>,
}

#[derive(Deserialize)]
struct AddressBookData {
    next_id: RecordId,
    #[serde(default)]
    free_ids: BTreeSet<RecordId>,
    #[serde(default)]
    records: Vec<Record>,
}

impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        AddressBookRef {
            next_id: self.next_id,
            free_ids: &self.free_ids,
            records: self.entries.values().collect(),
        }
        .serialize(serializer)
    }
}

impl TryFrom<AddressBookData> for AddressBook {
    type Error = StoreError;

    fn try_from(data: AddressBookData) -> Result<Self, Self::Error> {
        if data.next_id.get() == 0 || data.free_ids.contains(&RecordId::new(0)) {
            return Err(StoreError::Inconsistent("record IDs start at 1".into()));
        }

        let mut entries = IndexMap::with_capacity(data.records.len());
        for record in data.records {
            let id = record
                .id()
                .ok_or_else(|| StoreError::Inconsistent("stored record has no ID".into()))?;
            if data.free_ids.contains(&id) {
                return Err(StoreError::Inconsistent(format!(
                    "ID {id} is both in use and free"
                )));
            }
            if entries.insert(id, record).is_some() {
                return Err(StoreError::Inconsistent(format!("duplicate record ID {id}")));
            }
        }

        Ok(Self {
            entries,
            next_id: data.next_id,
            free_ids: data.free_ids,
        })
    }
}
