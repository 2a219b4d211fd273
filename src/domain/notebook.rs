//! Standalone notes and tags, kept apart from contacts.

use crate::domain::Note;
use crate::domain::Tag;
use crate::domain::tag::join_tags;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from notebook operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotebookError {
    #[error("note {position} not found (notebook has {len} notes)")]
    NoteNotFound { position: usize, len: usize },
}

/// A list of notes plus a free-standing list of tags.
///
/// Notes are addressed by their 1-based position. Unlike the address book,
/// positions shift when an earlier note is deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notebook {
    #[serde(default)]
    notes: Vec<Note>,
    #[serde(default)]
    tags: Vec<Tag>,
}

impl Notebook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Appends a note and returns its 1-based position.
    pub fn add_note(&mut self, note: Note) -> usize {
        self.notes.push(note);
        self.notes.len()
    }

    /// Deletes the note at a 1-based position.
    pub fn delete_note(&mut self, position: usize) -> Result<Note, NotebookError> {
        if position == 0 || position > self.notes.len() {
            return Err(NotebookError::NoteNotFound {
                position,
                len: self.notes.len(),
            });
        }
        Ok(self.notes.remove(position - 1))
    }

    pub fn create_tag(&mut self, tag: Tag) {
        self.tags.push(tag);
    }

    /// Returns `(position, note)` pairs for notes carrying the tag.
    pub fn find_by_tag(&self, name: &str) -> Vec<(usize, &Note)> {
        self.notes
            .iter()
            .enumerate()
            .filter(|(_, note)| note.has_tag(name))
            .map(|(i, note)| (i + 1, note))
            .collect()
    }

    /// Renders every note with its position.
    pub fn show_notes(&self) -> String {
        if self.notes.is_empty() {
            return "No notes available.".to_string();
        }
        let mut lines = Vec::new();
        for (i, note) in self.notes.iter().enumerate() {
            lines.push(format!("{}. {}", i + 1, note));
            if !note.tags().is_empty() {
                lines.push(format!("   Tags: {}", join_tags(note.tags())));
            }
        }
        lines.join("\n")
    }

    pub fn show_tags(&self) -> String {
        if self.tags.is_empty() {
            "No tags available.".to_string()
        } else {
            format!("Tags: {}", join_tags(&self.tags))
        }
    }
}
