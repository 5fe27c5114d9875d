/// No id is left after the highest one already in use
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("No novena id available after {0}")]
pub struct IdsExhausted(pub i64);

/// Hands out increasing novena ids.
///
/// The counter is bumped before use, so a fresh allocator issues 1 first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdAllocator {
    last_issued: i64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue after `watermark`, the highest id already in use.
    /// Negative watermarks are treated as 0.
    pub fn resume_after(watermark: i64) -> Self {
        Self {
            last_issued: watermark.max(0),
        }
    }

    /// Issue the next id. Once `i64::MAX` has been issued or loaded, every
    /// further call fails and the counter stays where it is.
    pub fn next_id(&mut self) -> Result<i64, IdsExhausted> {
        let next = self
            .last_issued
            .checked_add(1)
            .ok_or(IdsExhausted(self.last_issued))?;
        self.last_issued = next;
        Ok(next)
    }

    pub fn last_issued(&self) -> i64 {
        self.last_issued
    }
}
