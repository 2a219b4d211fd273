//! Core types: validated fields, Record, Note, Tag, Notebook

mod field;
mod note;
mod notebook;
mod record;
mod tag;

pub use field::{Address, Birthday, Email, Field, FieldKind, Name, Phone, ValidationError};
pub use note::{Note, NoteError};
pub use notebook::{Notebook, NotebookError};
pub use record::{ParseRecordIdError, Record, RecordBuilder, RecordError, RecordId};
pub use tag::Tag;
