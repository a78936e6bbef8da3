use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Identifiable, LogicalNamed, NamedEntity};

/// A price list valid over a date window.
///
/// Owned and persisted by the host record store; this crate only ever reads
/// it. Nothing enforces that validity windows are unique; when several price
/// levels share a window, resolution falls back to the alphabetically-first
/// name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceLevel {
    pub id: Uuid,
    pub name: String,
    pub begin_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl PriceLevel {
    /// Creates a price level covering the given validity window.
    pub fn new(name: impl Into<String>, window: ValidityWindow) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            begin_date: window.begin,
            end_date: window.end,
        }
    }

    /// The validity window spanned by this price level.
    pub fn window(&self) -> ValidityWindow {
        ValidityWindow {
            begin: self.begin_date,
            end: self.end_date,
        }
    }
}

impl Identifiable for PriceLevel {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for PriceLevel {
    fn name(&self) -> &str {
        &self.name
    }
}

impl LogicalNamed for PriceLevel {
    const LOGICAL_NAME: &'static str = "pricelevel";
}

/// Inclusive validity window of a price list.
///
/// Windows match by exact-day equality on both bounds: a window covers a
/// calendar year only when it begins on January 1 and ends on December 31 of
/// that year, never by mere overlap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidityWindow {
    pub begin: NaiveDate,
    pub end: NaiveDate,
}

impl ValidityWindow {
    pub fn new(begin: NaiveDate, end: NaiveDate) -> Self {
        Self { begin, end }
    }

    /// Window spanning one full calendar year, January 1 through December 31.
    pub fn calendar_year(year: i32) -> Self {
        // chrono's calendar range starts on a January 1 and ends on a
        // December 31, so both bounds exist for every representable year.
        Self {
            begin: NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(year, 12, 31).unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_year_spans_january_through_december() {
        let window = ValidityWindow::calendar_year(2024);
        assert_eq!(window.begin, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(window.end, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }

    #[test]
    fn window_equality_requires_both_bounds() {
        let year = ValidityWindow::calendar_year(2024);
        let shifted_begin = ValidityWindow::new(
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        );
        let shifted_end = ValidityWindow::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 30).unwrap(),
        );
        assert_ne!(year, shifted_begin);
        assert_ne!(year, shifted_end);
        assert_eq!(year, ValidityWindow::calendar_year(2024));
    }

    #[test]
    fn price_level_reports_its_window() {
        let window = ValidityWindow::calendar_year(2023);
        let level = PriceLevel::new("Retail 2023", window);
        assert_eq!(level.window(), window);
        assert_eq!(level.name(), "Retail 2023");
    }

    #[test]
    fn logical_name_matches_the_host_schema() {
        assert_eq!(PriceLevel::LOGICAL_NAME, "pricelevel");
    }
}
