//! Component option errors.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while configuring components.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComponentError {
    #[error("datepicker range start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}
