//! Sequential employee id allocation.

use crate::error::{EngineError, EngineResult};

/// Hands out strictly increasing employee ids.
///
/// Each registry owns its own generator, so independent registries (for
/// example in tests) never affect each other's numbering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    /// Creates a generator whose first id is `first`.
    pub fn starting_at(first: u64) -> Self {
        Self { next: first.max(1) }
    }

    /// Creates a generator that continues after the highest id in `existing`.
    pub fn after<I: IntoIterator<Item = u64>>(existing: I) -> Self {
        let highest = existing.into_iter().max().unwrap_or(0);
        Self::starting_at(highest.saturating_add(1))
    }

    /// The id the next call to [`allocate`](Self::allocate) will return.
    pub fn peek(&self) -> u64 {
        self.next
    }

    /// Returns the next id and advances the generator.
    ///
    /// Fails without advancing once the id space is used up. `u64::MAX`
    /// itself is never handed out, so a stored record holding it can never
    /// be duplicated.
    pub fn allocate(&mut self) -> EngineResult<u64> {
        let id = self.next;
        self.next = id
            .checked_add(1)
            .ok_or(EngineError::IdsExhausted { last: id })?;
        Ok(id)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}
