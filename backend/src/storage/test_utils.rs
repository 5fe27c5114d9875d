//! Test infrastructure shared by storage, domain and REST tests.
//!
//! `TestEnvironment` keeps its temporary directory alive until dropped, so
//! test data is removed even when a test panics.

use anyhow::Result;
use shared::Novena;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::TempDir;

use super::json::{JsonConnection, NovenaRepository};
use super::{Connection, NovenaStorage, StorageError, StoredNovenas};

/// RAII test environment around a temporary backing file
pub struct TestEnvironment {
    _temp_dir: TempDir,
    pub connection: JsonConnection,
    pub repository: NovenaRepository,
    /// Directory holding the backing file
    pub base_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();
        let connection = JsonConnection::new(base_path.join("novenas.json"))?;
        let repository = connection.create_novena_repository();

        Ok(Self {
            _temp_dir: temp_dir,
            connection,
            repository,
            base_path,
        })
    }

    pub fn write_data_file(&self, content: &str) {
        fs::write(self.connection.data_file(), content).expect("Failed to write data file");
    }

    pub fn read_data_file(&self) -> String {
        fs::read_to_string(self.connection.data_file()).expect("Failed to read data file")
    }
}

/// In-memory storage that records every save and can be told to fail
#[derive(Default)]
pub struct MemoryStorage {
    initial: Vec<Novena>,
    saves: Mutex<Vec<Vec<Novena>>>,
    fail_saves: bool,
}

impl MemoryStorage {
    pub fn with_novenas(initial: Vec<Novena>) -> Self {
        Self {
            initial,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    pub fn save_count(&self) -> usize {
        self.saves.lock().unwrap().len()
    }

    pub fn last_save(&self) -> Option<Vec<Novena>> {
        self.saves.lock().unwrap().last().cloned()
    }
}

impl NovenaStorage for MemoryStorage {
    fn load_novenas(&self) -> Result<StoredNovenas, StorageError> {
        Ok(StoredNovenas::new(self.initial.clone()))
    }

    fn save_novenas(&self, novenas: &[Novena]) -> Result<(), StorageError> {
        if self.fail_saves {
            return Err(StorageError::io(
                "memory",
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            ));
        }
        self.saves.lock().unwrap().push(novenas.to_vec());
        Ok(())
    }
}
