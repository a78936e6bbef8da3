//! Date-range rules run on every change to either price-list date field.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;

use crate::form::{
    DateRangeForm, BEGIN_DATE, END_DATE, ORDERING_KEY, ORDERING_MESSAGE, SAME_YEAR_KEY,
    SAME_YEAR_MESSAGE,
};

// An absent date takes part in every comparison as the epoch.
static EPOCH: Lazy<NaiveDate> = Lazy::new(|| NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());

fn date_or_epoch(value: Option<NaiveDate>) -> NaiveDate {
    value.unwrap_or(*EPOCH)
}

/// Runs both date-range rules against the form's current state.
///
/// Rule 1 (ordering): an end date on or before the start date raises the
/// `"100"` notification on the end-date field and clears that field's value;
/// otherwise the notification is cleared.
///
/// Rule 2 (same year): start and end dates in different calendar years raise
/// the `"200"` notification on the end-date field; otherwise it is cleared.
/// Rule 2 reads the field values as they stand after Rule 1, so an end date
/// cleared by Rule 1 is compared as the epoch.
///
/// Never fails; every outcome is expressed as form state and is recoverable
/// by further edits.
pub fn validate_date_range(form: &mut dyn DateRangeForm) {
    let begin = date_or_epoch(form.date_value(BEGIN_DATE));
    let end = date_or_epoch(form.date_value(END_DATE));

    if end <= begin {
        form.set_notification(END_DATE, ORDERING_KEY, ORDERING_MESSAGE);
        form.set_date_value(END_DATE, None);
    } else {
        form.clear_notification(END_DATE, ORDERING_KEY);
    }

    let begin = date_or_epoch(form.date_value(BEGIN_DATE));
    let end = date_or_epoch(form.date_value(END_DATE));

    if begin.year() == end.year() {
        form.clear_notification(END_DATE, SAME_YEAR_KEY);
    } else {
        form.set_notification(END_DATE, SAME_YEAR_KEY, SAME_YEAR_MESSAGE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::PriceListForm;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn ordered_same_year_dates_raise_nothing() {
        let mut form = PriceListForm::new()
            .with_begin_date(date(2024, 1, 10))
            .with_end_date(date(2024, 6, 15));

        validate_date_range(&mut form);

        assert_eq!(form.notification(END_DATE, ORDERING_KEY), None);
        assert_eq!(form.notification(END_DATE, SAME_YEAR_KEY), None);
        assert_eq!(form.date_value(END_DATE), Some(date(2024, 6, 15)));
    }

    #[test]
    fn end_before_start_raises_ordering_and_clears_the_end_date() {
        let mut form = PriceListForm::new()
            .with_begin_date(date(2024, 1, 10))
            .with_end_date(date(2024, 1, 5));

        validate_date_range(&mut form);

        assert_eq!(
            form.notification(END_DATE, ORDERING_KEY),
            Some(ORDERING_MESSAGE)
        );
        assert_eq!(form.date_value(END_DATE), None);
    }

    #[test]
    fn cleared_end_date_feeds_the_same_year_rule_as_epoch() {
        let mut form = PriceListForm::new()
            .with_begin_date(date(2024, 1, 10))
            .with_end_date(date(2024, 1, 5));

        validate_date_range(&mut form);

        assert_eq!(
            form.notification(END_DATE, SAME_YEAR_KEY),
            Some(SAME_YEAR_MESSAGE)
        );
    }

    #[test]
    fn different_years_raise_only_the_same_year_notification() {
        let mut form = PriceListForm::new()
            .with_begin_date(date(2024, 1, 10))
            .with_end_date(date(2025, 6, 15));

        validate_date_range(&mut form);

        assert_eq!(form.notification(END_DATE, ORDERING_KEY), None);
        assert_eq!(
            form.notification(END_DATE, SAME_YEAR_KEY),
            Some(SAME_YEAR_MESSAGE)
        );
        assert_eq!(form.date_value(END_DATE), Some(date(2025, 6, 15)));
    }

    #[test]
    fn equal_dates_count_as_out_of_order() {
        let mut form = PriceListForm::new()
            .with_begin_date(date(2024, 3, 1))
            .with_end_date(date(2024, 3, 1));

        validate_date_range(&mut form);

        assert_eq!(
            form.notification(END_DATE, ORDERING_KEY),
            Some(ORDERING_MESSAGE)
        );
        assert_eq!(form.date_value(END_DATE), None);
    }

    #[test]
    fn two_empty_fields_compare_as_epoch_and_raise_ordering() {
        let mut form = PriceListForm::new();

        validate_date_range(&mut form);

        assert_eq!(
            form.notification(END_DATE, ORDERING_KEY),
            Some(ORDERING_MESSAGE)
        );
        assert_eq!(form.notification(END_DATE, SAME_YEAR_KEY), None);
    }
}
