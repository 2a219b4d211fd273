//! Titled free-text note with tags.

use crate::domain::Tag;
use crate::domain::tag::join_tags;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors from note mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    #[error("tag not found: {0}")]
    TagNotFound(String),
}

/// A note with a title, free-text content and tags.
///
/// Notes are compared by value, so removing a note from a record removes the
/// first note with the same title, content and tags.
///
/// # Examples
///
/// ```
/// use rolo::domain::{Note, Tag};
///
/// let mut note = Note::new("Gift ideas", "Books, tea");
/// note.add_tag(Tag::new("birthday"));
/// assert_eq!(note.to_string(), "Title: Gift ideas, Content: Books, tea, Tags: birthday");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    title: String,
    content: String,
    #[serde(default)]
    tags: Vec<Tag>,
}

impl Note {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            tags: Vec::new(),
        }
    }

    /// Returns a copy of this note carrying the given tags.
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.extend(tags);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Appends a tag. Duplicates are kept.
    pub fn add_tag(&mut self, tag: Tag) {
        self.tags.push(tag);
    }

    /// Removes the first occurrence of `tag`.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::TagNotFound` if the note does not carry the tag.
    pub fn remove_tag(&mut self, tag: &Tag) -> Result<(), NoteError> {
        let pos = self
            .tags
            .iter()
            .position(|t| t == tag)
            .ok_or_else(|| NoteError::TagNotFound(tag.name().to_string()))?;
        self.tags.remove(pos);
        Ok(())
    }

    /// Returns true if the note carries a tag with this name.
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t.name() == name)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}, Content: {}, Tags: {}",
            self.title,
            self.content,
            join_tags(&self.tags)
        )
    }
}
