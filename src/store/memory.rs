use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use uuid::Uuid;

use crate::domain::{Identifiable, NamedEntity, Opportunity, PriceLevel, ValidityWindow};
use crate::errors::StoreError;
use crate::store::{RecordStore, Result};

/// A single recorded price-level assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    pub opportunity_id: Uuid,
    pub price_level_id: Uuid,
}

#[derive(Debug, Default)]
struct Inner {
    price_levels: Vec<PriceLevel>,
    opportunities: HashMap<Uuid, Opportunity>,
    assignments: Vec<Assignment>,
}

/// In-memory [`RecordStore`] used by the test suites and as the reference
/// backend. Every update is appended to an assignment log so callers can
/// assert on how many writes a given flow produced.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn insert_price_level(&self, level: PriceLevel) {
        self.lock().price_levels.push(level);
    }

    pub fn insert_opportunity(&self, opportunity: Opportunity) {
        self.lock()
            .opportunities
            .insert(opportunity.id(), opportunity);
    }

    /// Returns a snapshot of the stored opportunity, if present.
    pub fn opportunity(&self, id: Uuid) -> Option<Opportunity> {
        self.lock().opportunities.get(&id).cloned()
    }

    /// Returns the full assignment log in write order.
    pub fn assignments(&self) -> Vec<Assignment> {
        self.lock().assignments.clone()
    }
}

impl RecordStore for MemoryStore {
    fn price_levels_with_window(&self, window: ValidityWindow) -> Result<Vec<PriceLevel>> {
        let inner = self.lock();
        let mut matches: Vec<PriceLevel> = inner
            .price_levels
            .iter()
            .filter(|level| level.window() == window)
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(matches)
    }

    fn assign_price_level(&self, opportunity_id: Uuid, price_level_id: Uuid) -> Result<()> {
        let mut inner = self.lock();
        let opportunity = inner
            .opportunities
            .get_mut(&opportunity_id)
            .ok_or(StoreError::RecordNotFound(opportunity_id))?;
        opportunity.price_level_id = Some(price_level_id);
        inner.assignments.push(Assignment {
            opportunity_id,
            price_level_id,
        });
        Ok(())
    }
}
