use serde_json::Value;
use shared::Novena;
use std::fs;
use std::io;
use tracing::{debug, info, warn};

use super::connection::JsonConnection;
use crate::storage::{NovenaStorage, StorageError, StoredNovenas};

/// Reads and rewrites the JSON backing file.
///
/// The file holds a single array of novenas, written as compact JSON followed
/// by a newline.
#[derive(Clone, Debug)]
pub struct NovenaRepository {
    connection: JsonConnection,
}

impl NovenaRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    /// Decode file content, falling back to element-by-element recovery when
    /// the array as a whole does not decode.
    fn decode_novenas(&self, content: &str) -> StoredNovenas {
        match serde_json::from_str::<Vec<Novena>>(content) {
            Ok(novenas) => StoredNovenas::new(novenas),
            Err(e) => {
                warn!(
                    "Error loading novenas from {}: {}",
                    self.connection.data_file().display(),
                    e
                );
                Self::recover_novenas(content)
            }
        }
    }

    /// Keep every element that decodes on its own. Skipped elements still
    /// count towards the id watermark when they carry an integer `id`.
    fn recover_novenas(content: &str) -> StoredNovenas {
        let items = match serde_json::from_str::<Value>(content) {
            Ok(Value::Array(items)) => items,
            _ => {
                warn!("Novena file is not a JSON array, starting with an empty collection");
                return StoredNovenas::default();
            }
        };

        let total = items.len();
        let raw_highest_id = items
            .iter()
            .filter_map(|item| item.get("id").and_then(Value::as_i64))
            .max()
            .unwrap_or(0);

        let recovered: Vec<Novena> = items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value::<Novena>(item) {
                Ok(novena) => Some(novena),
                Err(e) => {
                    warn!("Skipping unreadable novena at index {}: {}", index, e);
                    None
                }
            })
            .collect();

        warn!("Recovered {} of {} novenas", recovered.len(), total);
        let mut stored = StoredNovenas::new(recovered);
        stored.highest_id = stored.highest_id.max(raw_highest_id);
        stored
    }
}

impl NovenaStorage for NovenaRepository {
    fn load_novenas(&self) -> Result<StoredNovenas, StorageError> {
        let path = self.connection.data_file();

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No novena file at {}, starting empty", path.display());
                return Ok(StoredNovenas::default());
            }
            Err(e) => return Err(StorageError::io(path, e)),
        };

        let stored = self.decode_novenas(&content);
        info!(
            "Loaded {} novenas from {}",
            stored.novenas.len(),
            path.display()
        );
        Ok(stored)
    }

    fn save_novenas(&self, novenas: &[Novena]) -> Result<(), StorageError> {
        let path = self.connection.data_file();
        let mut encoded = serde_json::to_vec(novenas)?;
        encoded.push(b'\n');

        // Atomic write using temp file
        let temp_path = self.connection.temp_file();
        fs::write(&temp_path, &encoded).map_err(|e| StorageError::io(&temp_path, e))?;
        fs::rename(&temp_path, path).map_err(|e| StorageError::io(path, e))?;

        debug!("Saved {} novenas to {}", novenas.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_utils::TestEnvironment;
    use shared::Donation;

    #[test]
    fn test_missing_file_loads_empty() {
        let env = TestEnvironment::new().unwrap();
        let stored = env.repository.load_novenas().expect("Missing file is not an error");
        assert!(stored.novenas.is_empty());
        assert_eq!(stored.highest_id, 0);
    }

    #[test]
    fn test_save_then_load() {
        let env = TestEnvironment::new().unwrap();

        let mut novena = Novena::new(1, "Santo Antônio", "2024-06-01", "2024-06-13");
        novena.donations.push(Donation::new("Maria", "50", "2024-06-05"));
        novena.donations.push(Donation::new("José", "20", "2024-06-06"));
        let second = Novena::new(2, "São João", "", "");

        env.repository
            .save_novenas(&[novena.clone(), second.clone()])
            .expect("Failed to save novenas");

        let stored = env.repository.load_novenas().expect("Failed to load novenas");
        assert_eq!(stored.novenas, vec![novena, second]);
        assert_eq!(stored.highest_id, 2);
        assert!(!env.connection.temp_file().exists());
    }

    #[test]
    fn test_load_then_save_reproduces_file() {
        let env = TestEnvironment::new().unwrap();
        let original = concat!(
            r#"[{"id":1,"name":"A","dateinicio":"2024-01-01","datefim":"2024-01-09","#,
            r#""donations":[{"name":"M","donation":"5","date":"2024-01-02"},"#,
            r#"{"name":"N","donation":"dez reais","date":"ontem"}]},"#,
            r#"{"id":4,"name":"B","dateinicio":"","datefim":"","donations":[]}]"#,
            "\n"
        );
        env.write_data_file(original);

        let stored = env.repository.load_novenas().unwrap();
        env.repository.save_novenas(&stored.novenas).unwrap();

        assert_eq!(env.read_data_file(), original);
    }

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let env = TestEnvironment::new().unwrap();
        env.write_data_file(
            r#"[{"id":1,"name":"A","dateinicio":"","datefim":"","donations":[{"name":"M","donation":"5","date":"","recibo":12}],"capela":"Matriz"}]"#,
        );

        let stored = env.repository.load_novenas().unwrap();
        env.repository.save_novenas(&stored.novenas).unwrap();

        let saved: Value = serde_json::from_str(&env.read_data_file()).unwrap();
        assert_eq!(saved[0]["capela"], "Matriz");
        assert_eq!(saved[0]["donations"][0]["recibo"], 12);
    }

    #[test]
    fn test_null_donations_from_older_files() {
        let env = TestEnvironment::new().unwrap();
        env.write_data_file(r#"[{"id":1,"name":"A","dateinicio":"x","datefim":"y","donations":null}]"#);

        let loaded = env.repository.load_novenas().unwrap().novenas;
        assert_eq!(loaded.len(), 1);
        assert!(loaded[0].donations.is_empty());
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let env = TestEnvironment::new().unwrap();
        env.write_data_file("{ this is not json");

        let stored = env.repository.load_novenas().expect("Corrupt file is not fatal");
        assert!(stored.novenas.is_empty());
    }

    #[test]
    fn test_empty_file_loads_empty() {
        let env = TestEnvironment::new().unwrap();
        env.write_data_file("");

        assert!(env.repository.load_novenas().unwrap().novenas.is_empty());
    }

    #[test]
    fn test_non_utf8_file_is_an_io_error() {
        let env = TestEnvironment::new().unwrap();
        std::fs::write(env.connection.data_file(), [0x5b, 0xff, 0xfe, 0x5d]).unwrap();

        let result = env.repository.load_novenas();
        assert!(matches!(result, Err(StorageError::Io { .. })));
    }

    #[test]
    fn test_directory_at_data_path_is_an_io_error() {
        let env = TestEnvironment::new().unwrap();
        std::fs::create_dir(env.connection.data_file()).unwrap();

        let result = env.repository.load_novenas();
        assert!(matches!(result, Err(StorageError::Io { .. })));
    }

    #[test]
    fn test_partially_valid_array_keeps_valid_entries() {
        let env = TestEnvironment::new().unwrap();
        env.write_data_file(
            r#"[{"id":1,"name":"A"},{"id":"dois","name":"B"},{"id":3,"name":"C","donations":"none"},{"id":4,"name":"D"}]"#,
        );

        let stored = env.repository.load_novenas().unwrap();
        let ids: Vec<i64> = stored.novenas.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 4]);
        assert_eq!(stored.highest_id, 4);
    }

    #[test]
    fn test_skipped_entries_keep_their_ids_reserved() {
        let env = TestEnvironment::new().unwrap();
        env.write_data_file(
            r#"[{"id":1,"name":"A"},{"id":9,"name":"B","donations":{"broken":true}},{"id":2,"name":"C"}]"#,
        );

        let stored = env.repository.load_novenas().unwrap();
        let ids: Vec<i64> = stored.novenas.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(stored.highest_id, 9);
    }

    #[test]
    fn test_save_replaces_previous_content() {
        let env = TestEnvironment::new().unwrap();
        env.repository
            .save_novenas(&[Novena::new(1, "A", "", ""), Novena::new(2, "B", "", "")])
            .unwrap();
        env.repository.save_novenas(&[Novena::new(1, "A", "", "")]).unwrap();

        let loaded = env.repository.load_novenas().unwrap().novenas;
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "A");
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let env = TestEnvironment::new().unwrap();
        let connection = JsonConnection::new(env.base_path.join("novenas.json")).unwrap();
        std::fs::remove_dir_all(&env.base_path).unwrap();
        let repository = NovenaRepository::new(connection);

        let result = repository.save_novenas(&[Novena::new(1, "A", "", "")]);
        assert!(matches!(result, Err(StorageError::Io { .. })));
    }
}
