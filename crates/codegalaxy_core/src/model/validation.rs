//! Shared field validation rules.
//!
//! # Invariants
//! - Dates are real calendar days written as canonical `YYYY-MM-DD`.
//! - Times are canonical 24h `HH:MM` strings.
//! - Validation never mutates its input; normalization happens in
//!   constructors and patch application.

use super::galaxy::CelestialKind;
use super::UserId;
use chrono::{NaiveDate, NaiveTime};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Field-level validation failure for any domain record.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyTitle,
    EmptyCategory,
    InvalidDate(String),
    InvalidTime(String),
    InvalidMonth(u32),
    InvalidOwner(UserId),
    PositionOutOfRange { axis: char, value: f64 },
    SizeOutOfRange { kind: CelestialKind, value: f64 },
    ColorNotInPalette { kind: CelestialKind, color: String },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::EmptyCategory => write!(f, "category must not be empty"),
            Self::InvalidDate(value) => {
                write!(f, "invalid date `{value}`; expected YYYY-MM-DD")
            }
            Self::InvalidTime(value) => write!(f, "invalid time `{value}`; expected HH:MM"),
            Self::InvalidMonth(value) => write!(f, "invalid month {value}; expected 1-12"),
            Self::InvalidOwner(value) => write!(f, "invalid owner id {value}"),
            Self::PositionOutOfRange { axis, value } => {
                write!(f, "position_{axis} {value} is outside the galaxy bounds")
            }
            Self::SizeOutOfRange { kind, value } => {
                write!(f, "size {value} is outside the {} range", kind.as_str())
            }
            Self::ColorNotInPalette { kind, color } => {
                write!(f, "color `{color}` is not in the {} palette", kind.as_str())
            }
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn validate_owner(user_id: UserId) -> Result<(), ValidationError> {
    if user_id <= 0 {
        return Err(ValidationError::InvalidOwner(user_id));
    }
    Ok(())
}

pub(crate) fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(())
}

pub(crate) fn validate_category(category: &str) -> Result<(), ValidationError> {
    if category.trim().is_empty() {
        return Err(ValidationError::EmptyCategory);
    }
    Ok(())
}

/// Accepts only dates that exist and are already in canonical form, so
/// stored text sorts and slices (`substr`) like the date it names.
pub(crate) fn validate_date(date: &str) -> Result<(), ValidationError> {
    let canonical = NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map(|parsed| parsed.format(DATE_FORMAT).to_string());
    match canonical {
        Ok(text) if text == date => Ok(()),
        _ => Err(ValidationError::InvalidDate(date.to_string())),
    }
}

pub(crate) fn validate_time(time: &str) -> Result<(), ValidationError> {
    let canonical = NaiveTime::parse_from_str(time, TIME_FORMAT)
        .map(|parsed| parsed.format(TIME_FORMAT).to_string());
    match canonical {
        Ok(text) if text == time => Ok(()),
        _ => Err(ValidationError::InvalidTime(time.to_string())),
    }
}

/// Trims an optional date and maps blank input to `None`.
pub(crate) fn normalize_optional_date(date: Option<&str>) -> Option<String> {
    date.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
