//! Request validation.
//!
//! Create requests are checked in a single pass: every missing required field and
//! every malformed value is collected into one [`FieldReport`] and reported together
//! as a single bad request. Validators for each entity return the storage record
//! ready for insertion.
//!
//! Update requests only validate the values they actually supply, see the
//! `update_*` helpers.

pub mod account;
pub mod athlete;
pub mod club;
pub mod coach;
pub mod organizer;

use chrono::NaiveDate;
use entity::sea_orm_active_enums::{ActiveStatus, Gender};

use crate::server::error::request::RequestError;

static DATE_FORMAT: &str = "%Y-%m-%d";

/// Accumulates missing and malformed fields of a request.
#[derive(Debug, Default)]
pub struct FieldReport {
    missing: Vec<&'static str>,
    malformed: Vec<String>,
}

impl FieldReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `field` as missing when `value` is empty.
    pub fn require(&mut self, field: &'static str, value: &str) {
        if value.is_empty() {
            self.missing.push(field);
        }
    }

    /// Requires a `yyyy-mm-dd` calendar date.
    pub fn require_date(&mut self, field: &'static str, value: &str) -> Option<NaiveDate> {
        if value.is_empty() {
            self.missing.push(field);
            return None;
        }

        let date = parse_date(value);
        if date.is_none() {
            self.malformed.push(format!("{} (format: yyyy-mm-dd)", field));
        }

        date
    }

    /// Requires `MALE` or `FEMALE`.
    pub fn require_gender(&mut self, field: &'static str, value: &str) -> Option<Gender> {
        if value.is_empty() {
            self.missing.push(field);
            return None;
        }

        let gender = Gender::from_request(value);
        if gender.is_none() {
            self.malformed.push(format!("{} (format: MALE or FEMALE)", field));
        }

        gender
    }

    /// An empty `active` means [`ActiveStatus::Unknown`], anything else must be
    /// `TRUE` or `FALSE`.
    pub fn optional_active(&mut self, value: &str) -> ActiveStatus {
        if value.is_empty() {
            return ActiveStatus::Unknown;
        }

        match ActiveStatus::from_request(value) {
            Some(active) => active,
            None => {
                self.malformed.push("active (format: TRUE or FALSE)".to_string());
                ActiveStatus::Unknown
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.malformed.is_empty()
    }

    /// Renders the report, `None` when nothing was recorded.
    pub fn message(&self) -> Option<String> {
        let mut parts = Vec::new();

        if !self.missing.is_empty() {
            parts.push(format!(
                "Missing required fields: [{}]",
                self.missing.join(",")
            ));
        }

        if !self.malformed.is_empty() {
            parts.push(format!(
                "Wrong Format fields: [{}]",
                self.malformed.join(",")
            ));
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" + "))
        }
    }

    /// Converts the report into a result.
    pub fn finish(self) -> Result<(), RequestError> {
        match self.message() {
            None => Ok(()),
            Some(message) => Err(RequestError::Validation(message)),
        }
    }
}

/// Unwraps a value a finished report has already vouched for.
pub(crate) fn present<T>(field: &'static str, value: Option<T>) -> Result<T, RequestError> {
    value.ok_or_else(|| RequestError::Validation(format!("Missing required fields: [{}]", field)))
}

/// Parses a strict `yyyy-mm-dd` date; impossible dates such as `2024-02-30` fail.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if value.len() != 10 {
        return None;
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Requires the identifier of an update or delete request.
pub fn require_id(id: &str) -> Result<&str, RequestError> {
    if id.is_empty() {
        return Err(RequestError::NoId);
    }

    Ok(id)
}

/// Validates a supplied `active` value, `None` when empty.
pub fn update_active(value: &str) -> Result<Option<ActiveStatus>, RequestError> {
    if value.is_empty() {
        return Ok(None);
    }

    ActiveStatus::from_request(value)
        .map(Some)
        .ok_or(RequestError::InvalidActive)
}

/// Validates a supplied date, `None` when empty.
pub fn update_date(field: &'static str, value: &str) -> Result<Option<NaiveDate>, RequestError> {
    if value.is_empty() {
        return Ok(None);
    }

    let mut report = FieldReport::new();
    let date = report.require_date(field, value);
    report.finish()?;

    Ok(date)
}

/// Validates a supplied gender, `None` when empty.
pub fn update_gender(field: &'static str, value: &str) -> Result<Option<Gender>, RequestError> {
    if value.is_empty() {
        return Ok(None);
    }

    let mut report = FieldReport::new();
    let gender = report.require_gender(field, value);
    report.finish()?;

    Ok(gender)
}
