use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::novena_repository::NovenaRepository;
use crate::storage::traits::Connection;

/// JsonConnection owns the location of the backing file
#[derive(Clone, Debug)]
pub struct JsonConnection {
    data_file: PathBuf,
}

impl JsonConnection {
    /// Create a connection for `data_file`, creating its parent directory if
    /// needed. The file itself is only created by the first save.
    pub fn new<P: AsRef<Path>>(data_file: P) -> Result<Self> {
        let data_file = data_file.as_ref().to_path_buf();

        if let Some(parent) = data_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create data directory {}", parent.display())
                })?;
                info!("Created data directory: {}", parent.display());
            }
        }

        Ok(Self { data_file })
    }

    /// Path of the backing file
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Sibling file that a save writes before renaming it over the data file
    pub fn temp_file(&self) -> PathBuf {
        self.data_file.with_extension("tmp")
    }
}

impl Connection for JsonConnection {
    type NovenaRepository = NovenaRepository;

    fn create_novena_repository(&self) -> NovenaRepository {
        NovenaRepository::new(self.clone())
    }
}
