//! Resolution of the price level matching an opportunity's creation year.

use chrono::{DateTime, Datelike, Utc};

use crate::domain::{PriceLevel, ValidityWindow};
use crate::store::{RecordStore, Result};

/// Looks up the price level whose validity window spans exactly the calendar
/// year of a creation timestamp.
pub struct PriceLevelResolver;

impl PriceLevelResolver {
    /// Returns the first price level (name ascending) whose window runs from
    /// January 1 through December 31 of the year of `created_on`, or `None`
    /// when no such window exists.
    ///
    /// The year is read from the timestamp as stored, in UTC. Windows that
    /// merely contain the timestamp but start or end on other dates do not
    /// match. An empty result is a valid outcome, not an error.
    pub fn resolve(
        store: &dyn RecordStore,
        created_on: DateTime<Utc>,
    ) -> Result<Option<PriceLevel>> {
        let window = ValidityWindow::calendar_year(created_on.year());
        let matches = store.price_levels_with_window(window)?;
        Ok(matches.into_iter().next())
    }
}
