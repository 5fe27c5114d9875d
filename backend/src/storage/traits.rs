//! # Storage Traits
//!
//! Abstractions that let the domain layer persist novenas without knowing
//! which backend holds them.

use shared::Novena;

use super::StorageError;

/// A loaded collection plus the highest id the backing store has ever held
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredNovenas {
    pub novenas: Vec<Novena>,
    /// Includes ids of entries that were present but could not be decoded,
    /// so new ids never reuse them.
    pub highest_id: i64,
}

impl StoredNovenas {
    /// Collection whose watermark is simply its own highest id
    pub fn new(novenas: Vec<Novena>) -> Self {
        let highest_id = novenas.iter().map(|n| n.id).max().unwrap_or(0);
        Self {
            novenas,
            highest_id,
        }
    }
}

/// Loads and saves the complete novena collection.
///
/// Implementations are synchronous; callers hold the store lock while saving
/// so that the file never lags behind a write that has already been applied
/// to a newer in-memory state.
pub trait NovenaStorage: Send + Sync {
    /// Load every stored novena in file order.
    ///
    /// A missing backing file is an empty collection, not an error. Content
    /// that cannot be fully decoded yields whatever could be recovered.
    fn load_novenas(&self) -> Result<StoredNovenas, StorageError>;

    /// Replace the stored collection with `novenas`.
    fn save_novenas(&self, novenas: &[Novena]) -> Result<(), StorageError>;
}

/// Factory for repositories bound to one storage location
pub trait Connection: Send + Sync + Clone {
    /// The type of NovenaStorage this connection creates
    type NovenaRepository: NovenaStorage + 'static;

    /// Create a new novena repository for this connection
    fn create_novena_repository(&self) -> Self::NovenaRepository;
}
