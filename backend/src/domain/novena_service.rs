use shared::Novena;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{error, info, warn};

use super::commands::{RegisterDonationCommand, RegisterNovenaCommand, RegisterNovenaResult};
use super::identity::IdsExhausted;
use super::novena_store::NovenaStore;
use crate::storage::{NovenaStorage, StorageError, StoredNovenas};

/// Service for registering novenas and donations.
///
/// Holds the single store instance behind a mutex. Every write runs its
/// lookup, mutation and file rewrite under that lock, so concurrent requests
/// cannot lose updates or create duplicate names. A failed save is logged and
/// the in-memory state stays authoritative.
#[derive(Clone)]
pub struct NovenaService {
    store: Arc<Mutex<NovenaStore>>,
    storage: Arc<dyn NovenaStorage>,
}

impl NovenaService {
    /// Load the stored collection and build the service around it.
    ///
    /// Never fails: unreadable storage leaves the service empty.
    pub fn open(storage: Arc<dyn NovenaStorage>) -> Self {
        let stored = match storage.load_novenas() {
            Ok(stored) => stored,
            Err(e) => {
                error!("Error loading novenas, starting empty: {}", e);
                StoredNovenas::default()
            }
        };
        info!("Novena service ready with {} novenas", stored.novenas.len());

        Self {
            store: Arc::new(Mutex::new(NovenaStore::resume(
                stored.novenas,
                stored.highest_id,
            ))),
            storage,
        }
    }

    /// Register a donation, creating its novena on first use, then save.
    ///
    /// Fails without touching the store when the novena is new and no id is
    /// left.
    pub fn register_donation(
        &self,
        command: RegisterDonationCommand,
    ) -> Result<Novena, IdsExhausted> {
        info!(
            "Registering donation: novena={}, name={}, donation={}",
            command.novena_name, command.contributor_name, command.amount
        );

        let mut store = self.lock_store();
        let novena = store
            .register_donation(
                &command.novena_name,
                &command.contributor_name,
                &command.amount,
                &command.date,
            )
            .map_err(|e| {
                error!("Refusing donation for {}: {}", command.novena_name, e);
                e
            })?
            .clone();
        self.persist(&store);

        info!(
            "Novena {} ({}) has {} donations",
            novena.id,
            novena.name,
            novena.donations.len()
        );
        Ok(novena)
    }

    /// Register a novena unless its name is taken; saves only on creation.
    pub fn register_novena(
        &self,
        command: RegisterNovenaCommand,
    ) -> Result<RegisterNovenaResult, IdsExhausted> {
        info!(
            "Registering novena: name={}, dateinicio={}, datefim={}",
            command.name, command.start_date, command.end_date
        );

        let mut store = self.lock_store();
        let (novena, created) = store
            .register_novena(&command.name, &command.start_date, &command.end_date)
            .map_err(|e| {
                error!("Refusing novena {}: {}", command.name, e);
                e
            })?;
        let novena = novena.clone();

        if created {
            self.persist(&store);
            info!("Created novena: {} with ID: {}", novena.name, novena.id);
        } else {
            info!("Novena {} already exists with ID: {}", novena.name, novena.id);
        }

        Ok(RegisterNovenaResult { novena, created })
    }

    /// Copy of every novena in creation order
    pub fn list_novenas(&self) -> Vec<Novena> {
        self.lock_store().snapshot().to_vec()
    }

    pub fn get_novena(&self, id: i64) -> Option<Novena> {
        let novena = self.lock_store().find_by_id(id).cloned();
        if novena.is_none() {
            warn!("Novena not found: {}", id);
        }
        novena
    }

    pub fn find_novena_by_name(&self, name: &str) -> Option<Novena> {
        self.lock_store().find_by_name(name).cloned()
    }

    /// Write the current collection regardless of pending changes.
    pub fn flush(&self) -> Result<(), StorageError> {
        let store = self.lock_store();
        self.storage.save_novenas(store.snapshot())?;
        info!("Saved {} novenas", store.len());
        Ok(())
    }

    fn persist(&self, store: &NovenaStore) {
        if let Err(e) = self.storage.save_novenas(store.snapshot()) {
            error!("Error saving novenas, keeping in-memory state: {}", e);
        }
    }

    // A panic while holding the lock cannot leave the store half-written:
    // every mutation is a single push.
    fn lock_store(&self) -> MutexGuard<'_, NovenaStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
