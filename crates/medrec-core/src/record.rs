//! Patient record — the single domain entity.
//!
//! A record is constructed transiently either from parsed OCR output (fields
//! may be empty, not yet validated) or from a submitted form (validated before
//! persistence). Persisted rows are immutable; no update or delete exists.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The date format accepted for `birthdate` and `issued_date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date, reporting the offending field on failure.
pub fn parse_record_date(field: &'static str, value: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| Error::InvalidDate {
    field,
    value: value.to_string(),
  })
}

// ─── NewRecord ───────────────────────────────────────────────────────────────

/// Input to [`crate::store::RecordStore::insert`]. The row id is assigned by
/// the store; it is not accepted from callers.
///
/// `age` is kept as entered — scanned documents write it as free text
/// ("34 years"), so the column is not numeric.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewRecord {
  pub name:        String,
  pub age:         String,
  pub sex:         String,
  pub id_card:     String,
  pub birthdate:   String,
  pub diagnosis:   String,
  pub doctor:      String,
  pub issued_date: String,
}

impl NewRecord {
  /// Check the persistence invariant: all eight fields non-empty, both dates
  /// valid `YYYY-MM-DD` calendar dates. Returns the first violation found.
  pub fn validate(&self) -> Result<()> {
    for (field, value) in [
      ("name", &self.name),
      ("age", &self.age),
      ("sex", &self.sex),
      ("id_card", &self.id_card),
      ("birthdate", &self.birthdate),
      ("diagnosis", &self.diagnosis),
      ("doctor", &self.doctor),
      ("issued_date", &self.issued_date),
    ] {
      if value.is_empty() {
        return Err(Error::MissingField(field));
      }
    }

    parse_record_date("birthdate", &self.birthdate)?;
    parse_record_date("issued_date", &self.issued_date)?;
    Ok(())
  }
}

// ─── PatientRecord ───────────────────────────────────────────────────────────

/// A persisted patient record. Immutable once written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRecord {
  pub id:          i64,
  pub name:        String,
  pub age:         String,
  pub sex:         String,
  pub id_card:     String,
  pub birthdate:   String,
  pub diagnosis:   String,
  pub doctor:      String,
  pub issued_date: String,
}

impl PatientRecord {
  /// The stored birthdate as a calendar date.
  pub fn birthdate(&self) -> Result<NaiveDate> {
    parse_record_date("birthdate", &self.birthdate)
  }

  /// Derived age relative to `today`. Computed on read, never stored.
  ///
  /// Behaviour for a birthdate after `today` is undefined (values may go
  /// negative).
  pub fn age_on(&self, today: NaiveDate) -> Result<AgeBreakdown> {
    Ok(AgeBreakdown::between(self.birthdate()?, today))
  }
}

// ─── AgeBreakdown ────────────────────────────────────────────────────────────

/// Age expressed as whole years plus leftover months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBreakdown {
  pub years:  i32,
  pub months: i32,
}

impl AgeBreakdown {
  /// Years are the calendar-year difference, minus one when `today`'s
  /// (month, day) falls before the birthdate's. Months are the month
  /// difference reduced modulo 12, adjusted by day-of-month.
  pub fn between(birthdate: NaiveDate, today: NaiveDate) -> Self {
    let before_birthday =
      (today.month(), today.day()) < (birthdate.month(), birthdate.day());
    let years = today.year() - birthdate.year() - i32::from(before_birthday);

    let mut months = today.month() as i32
      - birthdate.month() as i32
      - i32::from(today.day() < birthdate.day());
    if months < 0 {
      months += 12;
    }

    Self { years, months }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
