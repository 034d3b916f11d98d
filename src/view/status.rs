use chrono::{Datelike, NaiveDate};

use crate::config::ServiceRecord;

/// True when `date` falls in a calendar month strictly before the month of
/// `today`. Any earlier year counts; a later year never does, whatever the
/// month numbers are.
pub fn is_before_month(date: NaiveDate, today: NaiveDate) -> bool {
    (date.year(), date.month()) < (today.year(), today.month())
}

/// Unpaid and from a previous month.
pub fn is_urgent(service: &ServiceRecord, today: NaiveDate) -> bool {
    service.is_payment_pending() && is_before_month(service.date, today)
}
