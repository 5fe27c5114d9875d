use shared::{Donation, Novena};
use tracing::debug;

use super::identity::{IdAllocator, IdsExhausted};

/// The in-memory novena collection.
///
/// Novenas are kept in creation order. Lookups are linear scans, which is fine
/// for the handful of novenas a parish runs in a year. The store never
/// persists anything itself; see `NovenaService` for the save-on-write policy.
#[derive(Debug, Clone, Default)]
pub struct NovenaStore {
    novenas: Vec<Novena>,
    ids: IdAllocator,
}

impl NovenaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a loaded snapshot.
    ///
    /// New ids continue after the highest id in the snapshot so that records
    /// created after a restart never collide with loaded ones.
    pub fn from_snapshot(novenas: Vec<Novena>) -> Self {
        Self::resume(novenas, 0)
    }

    /// Like `from_snapshot`, but new ids also stay above `watermark`, the
    /// highest id storage has seen, including entries it could not decode.
    pub fn resume(novenas: Vec<Novena>, watermark: i64) -> Self {
        let watermark = novenas.iter().map(|n| n.id).fold(watermark, i64::max);
        Self {
            novenas,
            ids: IdAllocator::resume_after(watermark),
        }
    }

    /// First novena whose name matches exactly
    pub fn find_by_name(&self, name: &str) -> Option<&Novena> {
        self.novenas.iter().find(|n| n.name == name)
    }

    pub fn find_by_id(&self, id: i64) -> Option<&Novena> {
        self.novenas.iter().find(|n| n.id == id)
    }

    /// Append a donation to the novena called `novena_name`, creating that
    /// novena with empty dates if it does not exist yet.
    ///
    /// Fails only when the novena is new and no id is left; the store is
    /// then unchanged.
    pub fn register_donation(
        &mut self,
        novena_name: &str,
        contributor_name: &str,
        amount: &str,
        date: &str,
    ) -> Result<&Novena, IdsExhausted> {
        let index = match self.position_by_name(novena_name) {
            Some(index) => index,
            None => self.create(novena_name, "", "")?,
        };

        let novena = &mut self.novenas[index];
        novena
            .donations
            .push(Donation::new(contributor_name, amount, date));
        debug!(
            "Novena {} now has {} donations",
            novena.id,
            novena.donations.len()
        );
        Ok(novena)
    }

    /// Create a novena unless one with this name already exists.
    ///
    /// An existing novena keeps its original dates. Returns the stored novena
    /// and whether it was created by this call.
    pub fn register_novena(
        &mut self,
        name: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<(&Novena, bool), IdsExhausted> {
        match self.position_by_name(name) {
            Some(index) => Ok((&self.novenas[index], false)),
            None => {
                let index = self.create(name, start_date, end_date)?;
                Ok((&self.novenas[index], true))
            }
        }
    }

    /// Every novena in creation order
    pub fn snapshot(&self) -> &[Novena] {
        &self.novenas
    }

    pub fn len(&self) -> usize {
        self.novenas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.novenas.is_empty()
    }

    fn position_by_name(&self, name: &str) -> Option<usize> {
        self.novenas.iter().position(|n| n.name == name)
    }

    fn create(
        &mut self,
        name: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<usize, IdsExhausted> {
        let id = self.ids.next_id()?;
        self.novenas.push(Novena::new(id, name, start_date, end_date));
        debug!("Created novena {} with ID: {}", name, id);
        Ok(self.novenas.len() - 1)
    }
}
