//! Data directory holding the contact store and the notebook.

use crate::domain::Notebook;
use crate::infra::persist::{self, PersistError};
use crate::store::AddressBook;
use std::path::{Path, PathBuf};

const CONTACTS_FILE: &str = "contacts.json";
const NOTEBOOK_FILE: &str = "notebook.json";

/// Binds the two persisted collections to files in one directory.
#[derive(Debug, Clone)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn contacts_path(&self) -> PathBuf {
        self.dir.join(CONTACTS_FILE)
    }

    pub fn notebook_path(&self) -> PathBuf {
        self.dir.join(NOTEBOOK_FILE)
    }

    /// Loads the address book; never fails (see [`persist::load_or_default`]).
    pub fn load_address_book(&self) -> AddressBook {
        persist::load_or_default(&self.contacts_path())
    }

    pub fn save_address_book(&self, book: &AddressBook) -> Result<(), PersistError> {
        persist::save(&self.contacts_path(), book)
    }

    pub fn load_notebook(&self) -> Notebook {
        persist::load_or_default(&self.notebook_path())
    }

    pub fn save_notebook(&self, notebook: &Notebook) -> Result<(), PersistError> {
        persist::save(&self.notebook_path(), notebook)
    }
}
