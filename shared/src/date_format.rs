//! Canonical `YYYY-MM-DD` date strings.
//!
//! Statistic records arrive with dates in whatever shape the card company
//! reported them (`20240105`, `2024-01-05`, ...) while the calendar works with
//! real dates. Every date comparison in the crate goes through
//! [`ToCanonicalDate`] so both sides end up in the same string form.

use chrono::{NaiveDate, NaiveDateTime};

/// Format string for canonical dates.
pub const CANONICAL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Normalizes a date value into its canonical `YYYY-MM-DD` string.
///
/// Inputs that are not recognised are returned unchanged; such values simply
/// never compare equal to a real date.
pub trait ToCanonicalDate {
    fn canonical_date(&self) -> String;
}

impl ToCanonicalDate for str {
    fn canonical_date(&self) -> String {
        if self.len() == 8 && self.bytes().all(|b| b.is_ascii_digit()) {
            format!("{}-{}-{}", &self[0..4], &self[4..6], &self[6..8])
        } else {
            self.to_string()
        }
    }
}

impl ToCanonicalDate for String {
    fn canonical_date(&self) -> String {
        self.as_str().canonical_date()
    }
}

impl ToCanonicalDate for NaiveDate {
    fn canonical_date(&self) -> String {
        self.format(CANONICAL_DATE_FORMAT).to_string()
    }
}

impl ToCanonicalDate for NaiveDateTime {
    fn canonical_date(&self) -> String {
        self.date().canonical_date()
    }
}

impl<T: ToCanonicalDate + ?Sized> ToCanonicalDate for &T {
    fn canonical_date(&self) -> String {
        (**self).canonical_date()
    }
}

/// Parse a canonical date string back into a `NaiveDate`.
pub fn parse_canonical_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&value.canonical_date(), CANONICAL_DATE_FORMAT).ok()
}
