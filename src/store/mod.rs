pub mod memory;

use uuid::Uuid;

use crate::domain::{PriceLevel, ValidityWindow};
use crate::errors::StoreError;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Abstraction over the host record store consumed by the pricing logic.
///
/// Implementations stand in for the host's query/update client. Two
/// capabilities are required: an equality query over price-level validity
/// windows whose results come back name-ascending, and a partial update that
/// touches a single field of one opportunity record. Transactional guarantees
/// around the read-then-write sequence belong to the host, not to
/// implementations of this trait.
pub trait RecordStore: Send + Sync {
    /// Returns every price level whose validity window equals `window`,
    /// sorted by name ascending. An empty result is not an error.
    fn price_levels_with_window(&self, window: ValidityWindow) -> Result<Vec<PriceLevel>>;

    /// Sets the price-level reference on the opportunity identified by
    /// `opportunity_id`, leaving every other field untouched.
    fn assign_price_level(&self, opportunity_id: Uuid, price_level_id: Uuid) -> Result<()>;
}

pub use memory::{Assignment, MemoryStore};
