//! Output format types for CLI commands.

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Serialize;

use crate::domain::{Note, Record};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A contact in listing output.
#[derive(Debug, Serialize)]
pub struct RecordListing {
    pub id: Option<u32>,
    pub name: String,
    pub phones: Vec<String>,
    pub emails: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_to_birthday: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub notes: Vec<NoteListing>,
}

impl RecordListing {
    pub fn from_record(record: &Record, today: NaiveDate) -> Self {
        Self {
            id: record.id().map(|id| id.get()),
            name: record.name().to_string(),
            phones: record.phones().iter().map(ToString::to_string).collect(),
            emails: record.emails().iter().map(ToString::to_string).collect(),
            birthday: record.birthday().map(|b| b.to_string()),
            days_to_birthday: record.days_to_next_birthday(today),
            address: record.address().map(ToString::to_string),
            notes: record.notes().iter().map(NoteListing::from_note).collect(),
        }
    }
}

/// A note in listing output.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

impl NoteListing {
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title().to_string(),
            content: note.content().to_string(),
            tags: note.tags().iter().map(|t| t.name().to_string()).collect(),
        }
    }
}

/// A page of contacts from `ls --page`.
#[derive(Debug, Serialize)]
pub struct PageListing {
    pub page: usize,
    pub pages: usize,
    pub records: Vec<RecordListing>,
}

/// An upcoming birthday.
#[derive(Debug, Serialize)]
pub struct BirthdayListing {
    pub id: Option<u32>,
    pub name: String,
    pub birthday: String,
    pub days: i64,
}
