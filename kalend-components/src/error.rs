//! Errors produced while building calendar and clock values.

use thiserror::Error;

/// Reasons a calendar or clock value could not be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// Month outside 1-12.
    #[error("month {0} is outside 1-12")]
    InvalidMonth(u32),
    /// The day does not exist in the month.
    #[error("day {day} does not exist in {year}-{month:02}")]
    InvalidDay {
        /// Year of the month.
        year: i32,
        /// Month number (1-12).
        month: u32,
        /// Requested day.
        day: u32,
    },
    /// The year is outside the range supported by the date library.
    #[error("year {0} is out of range")]
    YearOutOfRange(i32),
    /// Hour outside 0-23.
    #[error("hour {0} is outside 0-23")]
    InvalidHour(u32),
    /// Minute outside 0-59.
    #[error("minute {0} is outside 0-59")]
    InvalidMinute(u32),
    /// A select reported a value that is not one of its options.
    #[error("{field} option {value:?} is not recognized")]
    InvalidOption {
        /// Field the select edits.
        field: &'static str,
        /// Reported value.
        value: String,
    },
    /// Unknown size name.
    #[error("unknown picker size {0:?}, expected sm, md or lg")]
    UnknownSize(String),
    /// Unknown theme name.
    #[error("unknown picker theme {0:?}, expected light, dark or custom")]
    UnknownTheme(String),
    /// Unknown time format.
    #[error("unknown time format {0:?}, expected 12 or 24")]
    UnknownTimeFormat(String),
    /// Unknown day period.
    #[error("unknown day period {0:?}, expected AM or PM")]
    UnknownPeriod(String),
}
