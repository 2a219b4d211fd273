//! Isolated test environment with temp directory.

use super::{RoloCommand, TestContact};
use rolo::domain::{Note, RecordId};
use rolo::infra::Storage;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary data directory.
///
/// Creates a temp directory that is automatically cleaned up on drop.
/// Provides methods for seeding contacts and notes without going through
/// the CLI.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the data directory
    data_dir: PathBuf,
    /// Path used as the config home, so no real config file is read
    config_home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let data_dir = temp_dir.path().join("data");
        let config_home = temp_dir.path().join("config");
        Self {
            _temp_dir: temp_dir,
            data_dir,
            config_home,
        }
    }

    /// Returns the path to the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn storage(&self) -> Storage {
        Storage::new(&self.data_dir)
    }

    pub fn contacts_path(&self) -> PathBuf {
        self.storage().contacts_path()
    }

    pub fn notebook_path(&self) -> PathBuf {
        self.storage().notebook_path()
    }

    /// Stores contacts in order and returns their assigned IDs.
    pub fn add_contacts(&self, contacts: &[TestContact]) -> Vec<RecordId> {
        let storage = self.storage();
        let mut book = storage.load_address_book();
        let ids = contacts
            .iter()
            .map(|c| book.insert(c.to_record()).expect("Failed to insert test contact"))
            .collect();
        storage
            .save_address_book(&book)
            .expect("Failed to save test contacts");
        ids
    }

    pub fn add_note(&self, note: Note) -> usize {
        let storage = self.storage();
        let mut notebook = storage.load_notebook();
        let position = notebook.add_note(note);
        storage
            .save_notebook(&notebook)
            .expect("Failed to save test notebook");
        position
    }

    /// Writes `contents` as the config file read by the binary.
    pub fn write_config(&self, contents: &str) {
        let dir = self.config_home.join("rolo");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        std::fs::write(dir.join("config.toml"), contents).expect("Failed to write config");
    }

    /// Creates a RoloCommand configured for this test environment.
    pub fn cmd(&self) -> RoloCommand {
        RoloCommand::new()
            .config_home(&self.config_home)
            .dir(&self.data_dir)
    }

    /// Creates a RoloCommand without `--dir`, relying on the config file.
    pub fn cmd_without_dir(&self) -> RoloCommand {
        RoloCommand::new().config_home(&self.config_home)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
