//! Form-side surface for price-list date validation: the form client
//! abstraction and an in-memory form implementing it.

pub mod date_range;

pub use date_range::validate_date_range;

use std::collections::BTreeMap;

use chrono::NaiveDate;

/// Schema name of the validity start-date field.
pub const BEGIN_DATE: &str = "begindate";
/// Schema name of the validity end-date field.
pub const END_DATE: &str = "enddate";

/// Notification key for the ordering rule.
pub const ORDERING_KEY: &str = "100";
/// Notification key for the same-year rule.
pub const SAME_YEAR_KEY: &str = "200";

pub const ORDERING_MESSAGE: &str = "End Date must not be before Start Date.";
pub const SAME_YEAR_MESSAGE: &str = "Start Date and End Date should be in same year";

/// Form client surface consumed by the date-range rules: get/set of date
/// field values and keyed, per-field notifications.
///
/// Setting a field to `None` clears it. Notification operations on a key
/// that is not set are no-ops.
pub trait DateRangeForm {
    fn date_value(&self, field: &str) -> Option<NaiveDate>;
    fn set_date_value(&mut self, field: &str, value: Option<NaiveDate>);
    fn set_notification(&mut self, field: &str, key: &str, message: &str);
    fn clear_notification(&mut self, field: &str, key: &str);
}

/// In-memory price-list form holding the two date fields and their
/// notifications. Stands in for the host's form context in tests and
/// host-free embeddings.
#[derive(Debug, Clone)]
pub struct PriceListForm {
    fields: BTreeMap<String, Option<NaiveDate>>,
    notifications: BTreeMap<String, BTreeMap<String, String>>,
}

impl Default for PriceListForm {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceListForm {
    pub fn new() -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(BEGIN_DATE.to_string(), None);
        fields.insert(END_DATE.to_string(), None);
        Self {
            fields,
            notifications: BTreeMap::new(),
        }
    }

    pub fn with_begin_date(mut self, date: NaiveDate) -> Self {
        self.set_date_value(BEGIN_DATE, Some(date));
        self
    }

    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.set_date_value(END_DATE, Some(date));
        self
    }

    /// Message attached to `field` under `key`, if any.
    pub fn notification(&self, field: &str, key: &str) -> Option<&str> {
        self.notifications
            .get(field)
            .and_then(|keys| keys.get(key))
            .map(String::as_str)
    }
}

impl DateRangeForm for PriceListForm {
    fn date_value(&self, field: &str) -> Option<NaiveDate> {
        self.fields.get(field).copied().flatten()
    }

    fn set_date_value(&mut self, field: &str, value: Option<NaiveDate>) {
        if let Some(slot) = self.fields.get_mut(field) {
            *slot = value;
        }
    }

    fn set_notification(&mut self, field: &str, key: &str, message: &str) {
        self.notifications
            .entry(field.to_string())
            .or_default()
            .insert(key.to_string(), message.to_string());
    }

    fn clear_notification(&mut self, field: &str, key: &str) {
        if let Some(keys) = self.notifications.get_mut(field) {
            keys.remove(key);
        }
    }
}
