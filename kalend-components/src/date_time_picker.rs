//! Calendar and time selects combined over one value.
//!
//! ## Usage
//!
//! Use when a form needs both a day and a clock time. The composite holds
//! no state; it merges each partial edit into the current value.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use derive_setters::Setters;
use kalend_ui::{CallbackWith, ClassList, Node, component, element};
use tracing::{debug, warn};

use crate::{
    date_picker::{DatePickerArgs, date_picker},
    error::CalendarError,
    style::ClassOverrides,
    theme::{PickerSize, PickerTheme},
    time_picker::{TimeFormat, TimePickerArgs, time_picker},
};

/// `value` with its year, month and day taken from `update`.
pub fn merge_date(value: NaiveDateTime, update: NaiveDateTime) -> NaiveDateTime {
    NaiveDateTime::new(update.date(), value.time())
}

/// `value` with its hour and minute taken from `update`. Date, seconds and
/// sub-seconds are kept.
pub fn merge_time(
    value: NaiveDateTime,
    update: NaiveDateTime,
) -> Result<NaiveDateTime, CalendarError> {
    value
        .with_hour(update.hour())
        .ok_or(CalendarError::InvalidHour(update.hour()))?
        .with_minute(update.minute())
        .ok_or(CalendarError::InvalidMinute(update.minute()))
}

/// Configuration options for [`date_time_picker`].
#[derive(Clone, PartialEq, Setters)]
pub struct DateTimePickerArgs {
    /// The committed value, shared by both parts.
    pub value: NaiveDateTime,
    /// Receives the merged value after any edit.
    #[setters(into)]
    pub on_change: CallbackWith<NaiveDateTime>,
    /// 12 or 24-hour display of the time part.
    pub time_format: TimeFormat,
    /// Earliest selectable day.
    #[setters(strip_option)]
    pub min_date: Option<NaiveDate>,
    /// Latest selectable day.
    #[setters(strip_option)]
    pub max_date: Option<NaiveDate>,
    /// Disables both parts.
    pub disabled: bool,
    /// Extra class appended to the outer container.
    #[setters(into)]
    pub class_name: String,
    /// Class placed before `class_name` on the outer container.
    #[setters(into)]
    pub container_class_name: String,
    /// Extra class for the calendar container.
    #[setters(into)]
    pub date_picker_class_name: String,
    /// Extra class for the time selects container.
    #[setters(into)]
    pub time_picker_class_name: String,
    /// Size tier of both parts.
    #[setters(strip_option)]
    pub size: Option<PickerSize>,
    /// Theme tier of both parts.
    #[setters(strip_option)]
    pub theme: Option<PickerTheme>,
    /// Class overrides for the calendar.
    pub date_picker_overrides: ClassOverrides,
    /// Class overrides for the time selects.
    pub time_picker_overrides: ClassOverrides,
}

impl Default for DateTimePickerArgs {
    fn default() -> Self {
        Self {
            value: NaiveDateTime::default(),
            on_change: CallbackWith::default(),
            time_format: TimeFormat::H24,
            min_date: None,
            max_date: None,
            disabled: false,
            class_name: String::new(),
            container_class_name: String::new(),
            date_picker_class_name: String::new(),
            time_picker_class_name: String::new(),
            size: None,
            theme: None,
            date_picker_overrides: ClassOverrides::default(),
            time_picker_overrides: ClassOverrides::default(),
        }
    }
}

impl DateTimePickerArgs {
    /// Creates args for a controlled picker in 24-hour form.
    pub fn new(value: NaiveDateTime, on_change: impl Into<CallbackWith<NaiveDateTime>>) -> Self {
        Self {
            value,
            on_change: on_change.into(),
            ..Self::default()
        }
    }

    fn date_args(&self) -> DatePickerArgs {
        let value = self.value;
        DatePickerArgs {
            value,
            on_change: self.on_change.adapt(move |update: NaiveDateTime| {
                let merged = merge_date(value, update);
                debug!(%merged, "date part changed");
                Some(merged)
            }),
            min_date: self.min_date,
            max_date: self.max_date,
            disabled: self.disabled,
            class_name: self.date_picker_class_name.clone(),
            overrides: self.date_picker_overrides.clone(),
            size: self.size,
            theme: self.theme,
        }
    }

    fn time_args(&self) -> TimePickerArgs {
        let value = self.value;
        TimePickerArgs {
            value,
            on_change: self.on_change.adapt(move |update: NaiveDateTime| {
                match merge_time(value, update) {
                    Ok(merged) => {
                        debug!(%merged, "time part changed");
                        Some(merged)
                    }
                    Err(err) => {
                        warn!(%err, "dropped time update");
                        None
                    }
                }
            }),
            time_format: self.time_format,
            disabled: self.disabled,
            class_name: self.time_picker_class_name.clone(),
            overrides: self.time_picker_overrides.clone(),
            size: self.size,
            theme: self.theme,
        }
    }
}

/// Renders a [`date_picker`] above a centered [`time_picker`], both bound to
/// the same value.
pub fn date_time_picker(args: &DateTimePickerArgs) {
    component("date_time_picker", || {
        let class = ClassList::new()
            .push("space-y-4")
            .push(&args.container_class_name)
            .push(&args.class_name)
            .build();
        let date_args = args.date_args();
        let time_args = args.time_args();
        element(Node::container().class(class), || {
            date_picker(&date_args);
            element(Node::container().class("flex justify-center"), || {
                time_picker(&time_args);
            });
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn date_merge_keeps_the_clock() {
        let value = at(2023, 6, 15, 14, 30, 59);
        assert_eq!(
            merge_date(value, at(2024, 2, 29, 0, 0, 0)),
            at(2024, 2, 29, 14, 30, 59)
        );
    }

    #[test]
    fn date_merge_does_not_overflow_short_months() {
        let value = at(2023, 1, 31, 8, 0, 0);
        assert_eq!(
            merge_date(value, at(2023, 2, 28, 0, 0, 0)),
            at(2023, 2, 28, 8, 0, 0)
        );
    }

    #[test]
    fn time_merge_keeps_date_and_seconds() {
        let value = at(2023, 6, 15, 14, 30, 12);
        assert_eq!(
            merge_time(value, at(1999, 1, 1, 16, 45, 0)),
            Ok(at(2023, 6, 15, 16, 45, 12))
        );
    }

    #[test]
    fn merging_unchanged_parts_is_identity() {
        let value = at(2023, 6, 15, 14, 30, 7);
        let date_only = value.date().and_hms_opt(0, 0, 0).unwrap();
        let merged = merge_time(merge_date(value, date_only), value).unwrap();
        assert_eq!(merged, value);
    }
}
