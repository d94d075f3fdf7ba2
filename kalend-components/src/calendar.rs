//! Calendar arithmetic shared by the pickers.
//!
//! Everything here is pure: month navigation, month lengths, the day grid
//! of a month and the bounds check that marks days as unavailable.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate};

use crate::error::CalendarError;

/// English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Abbreviated weekday names in Sunday-first order.
pub const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A year and month pair used for month navigation.
///
/// # Examples
///
/// ```
/// use kalend_components::calendar::YearMonth;
///
/// let january = YearMonth::new(2024, 1).unwrap();
/// assert_eq!(january.previous().to_string(), "December 2023");
/// assert_eq!(january.days_in_month(), 31);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a year/month pair if the month is within 1-12 and the year is
    /// representable.
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        let month = Self { year, month };
        month.first_day()?;
        Ok(month)
    }

    /// Returns the month containing `date`.
    pub fn of(date: impl Datelike) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the English name of the month.
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Adds or subtracts months, adjusting the year as needed.
    pub fn add_months(&self, delta: i32) -> Self {
        let total = self.year * 12 + (self.month as i32 - 1) + delta;
        let year = total.div_euclid(12);
        let month = (total.rem_euclid(12) + 1) as u32;
        Self { year, month }
    }

    /// The month before this one.
    pub fn previous(&self) -> Self {
        self.add_months(-1)
    }

    /// The month after this one.
    pub fn next(&self) -> Self {
        self.add_months(1)
    }

    /// Returns the first day of the month.
    pub fn first_day(&self) -> Result<NaiveDate, CalendarError> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .ok_or(CalendarError::YearOutOfRange(self.year))
    }

    /// Number of days in the month, February 29 included in leap years.
    pub fn days_in_month(&self) -> u32 {
        match self.month {
            4 | 6 | 9 | 11 => 30,
            2 if is_leap_year(self.year) => 29,
            2 => 28,
            _ => 31,
        }
    }

    /// Number of blank cells before day 1 in a Sunday-first week.
    pub fn leading_blanks(&self) -> Result<u32, CalendarError> {
        Ok(self.first_day()?.weekday().num_days_from_sunday())
    }

    /// Returns the date for `day` of this month.
    pub fn date(&self, day: u32) -> Result<NaiveDate, CalendarError> {
        if day == 0 || day > self.days_in_month() {
            return Err(CalendarError::InvalidDay {
                year: self.year,
                month: self.month,
                day,
            });
        }
        NaiveDate::from_ymd_opt(self.year, self.month, day)
            .ok_or(CalendarError::YearOutOfRange(self.year))
    }

    /// Heading text such as `June 2023`.
    pub fn title(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year)
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Optional inclusive date limits. Days outside them can not be picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateBounds {
    /// Earliest selectable day.
    pub min: Option<NaiveDate>,
    /// Latest selectable day.
    pub max: Option<NaiveDate>,
}

impl DateBounds {
    /// Creates bounds from optional limits.
    pub fn new(min: Option<NaiveDate>, max: Option<NaiveDate>) -> Self {
        Self { min, max }
    }

    /// True when `date` lies strictly before `min` or strictly after `max`.
    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        self.min.is_some_and(|min| date < min) || self.max.is_some_and(|max| date > max)
    }
}

/// The current date, read by components through context so hosts can pin
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Today(pub NaiveDate);

impl Default for Today {
    fn default() -> Self {
        Self(Local::now().date_naive())
    }
}

impl Today {
    /// True when `date` is this day.
    pub fn is_today(&self, date: NaiveDate) -> bool {
        self.0 == date
    }
}

/// A day of the visible month together with its display flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    /// The date of the cell.
    pub date: NaiveDate,
    /// Same day as the committed value.
    pub selected: bool,
    /// Same day as [`Today`].
    pub today: bool,
    /// Outside the [`DateBounds`].
    pub disabled: bool,
}

impl CalendarDay {
    /// Day of the month.
    pub fn day(&self) -> u32 {
        self.date.day()
    }
}

/// A cell of the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCell {
    /// Padding before day 1.
    Blank,
    /// A day of the month.
    Day(CalendarDay),
}

impl DayCell {
    /// The day, if this is not a blank cell.
    pub fn day(&self) -> Option<&CalendarDay> {
        match self {
            Self::Blank => None,
            Self::Day(day) => Some(day),
        }
    }
}

/// Dates of the month grid: leading `None`s for the weekday offset of day 1,
/// then every day of the month. There is no trailing padding.
pub fn month_grid(month: YearMonth) -> Result<Vec<Option<NaiveDate>>, CalendarError> {
    let blanks = month.leading_blanks()?;
    let days = month.days_in_month();
    let mut grid = Vec::with_capacity((blanks + days) as usize);
    grid.extend((0..blanks).map(|_| None));
    for day in 1..=days {
        grid.push(Some(month.date(day)?));
    }
    Ok(grid)
}

/// The month grid with selection, today and bounds flags resolved.
pub fn month_cells(
    month: YearMonth,
    selected: NaiveDate,
    today: Today,
    bounds: DateBounds,
) -> Result<Vec<DayCell>, CalendarError> {
    Ok(month_grid(month)?
        .into_iter()
        .map(|date| match date {
            None => DayCell::Blank,
            Some(date) => DayCell::Day(CalendarDay {
                date,
                selected: date == selected,
                today: today.is_today(date),
                disabled: bounds.is_disabled(date),
            }),
        })
        .collect())
}
