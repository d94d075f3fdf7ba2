//! Hour and minute selects for a controlled date/time value.
//!
//! ## Usage
//!
//! Edit the clock time of a value in 24-hour or 12-hour form. Every edit is
//! reported right away with the date and seconds of the value untouched.

use std::{fmt, str::FromStr};

use chrono::{NaiveDateTime, Timelike};
use derive_setters::Setters;
use kalend_ui::{
    CallbackWith, ClassList, Node, SelectOption, State, component, element, leaf, remember,
    use_context,
};
use tracing::{debug, trace, warn};

use crate::{
    error::CalendarError,
    style::{ClassOverrides, PickerElement},
    theme::{PickerSize, PickerStyle, PickerTheme},
};

/// Clock convention used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeFormat {
    /// 1-12 with an AM/PM select.
    H12,
    /// 0-23.
    #[default]
    H24,
}

impl TimeFormat {
    /// Range of hours offered by the hour select.
    pub fn hour_range(self) -> std::ops::RangeInclusive<u32> {
        match self {
            Self::H12 => 1..=12,
            Self::H24 => 0..=23,
        }
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::H12 => "12",
            Self::H24 => "24",
        })
    }
}

impl FromStr for TimeFormat {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "12" => Ok(Self::H12),
            "24" => Ok(Self::H24),
            _ => Err(CalendarError::UnknownTimeFormat(s.to_string())),
        }
    }
}

/// Indicates whether a time is in AM or PM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DayPeriod {
    /// Ante meridiem (before noon).
    #[default]
    Am,
    /// Post meridiem (noon and after).
    Pm,
}

impl DayPeriod {
    /// The period of a 24-hour `hour`.
    pub fn of_hour(hour: u32) -> Self {
        if hour >= 12 { Self::Pm } else { Self::Am }
    }
}

impl fmt::Display for DayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        })
    }
}

impl FromStr for DayPeriod {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AM" => Ok(Self::Am),
            "PM" => Ok(Self::Pm),
            _ => Err(CalendarError::UnknownPeriod(s.to_string())),
        }
    }
}

/// Converts a 24-hour `hour` to what the hour select shows.
///
/// In 12-hour form midnight shows as 12 AM and noon as 12 PM.
///
/// ```
/// use kalend_components::time_picker::{DayPeriod, TimeFormat, hour_for_display};
///
/// assert_eq!(hour_for_display(0, TimeFormat::H12), (12, DayPeriod::Am));
/// assert_eq!(hour_for_display(13, TimeFormat::H12), (1, DayPeriod::Pm));
/// assert_eq!(hour_for_display(13, TimeFormat::H24), (13, DayPeriod::Pm));
/// ```
pub fn hour_for_display(hour: u32, format: TimeFormat) -> (u32, DayPeriod) {
    let period = DayPeriod::of_hour(hour);
    match format {
        TimeFormat::H24 => (hour, period),
        TimeFormat::H12 => {
            let hour = hour % 12;
            (if hour == 0 { 12 } else { hour }, period)
        }
    }
}

/// Converts a displayed hour back to 24-hour form.
pub fn hour_from_display(hour: u32, period: DayPeriod, format: TimeFormat) -> u32 {
    match (format, period) {
        (TimeFormat::H24, _) => hour,
        (TimeFormat::H12, DayPeriod::Pm) if hour != 12 => hour + 12,
        (TimeFormat::H12, DayPeriod::Am) if hour == 12 => 0,
        (TimeFormat::H12, _) => hour,
    }
}

/// Formats a number with at least two digits.
pub fn format_two_digit(value: u32) -> String {
    format!("{value:02}")
}

/// The fields shown by the selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeFields {
    /// Displayed hour, 0-23 or 1-12 depending on the format.
    pub hour: u32,
    /// Minute, 0-59.
    pub minute: u32,
    /// AM/PM, only meaningful in 12-hour form.
    pub period: DayPeriod,
}

impl TimeFields {
    /// Reads the fields of `time` for display in `format`.
    pub fn from_time(time: &impl Timelike, format: TimeFormat) -> Self {
        let (hour, period) = hour_for_display(time.hour(), format);
        Self {
            hour,
            minute: time.minute(),
            period,
        }
    }

    /// The 24-hour hour these fields stand for.
    pub fn hour_24(&self, format: TimeFormat) -> u32 {
        hour_from_display(self.hour, self.period, format)
    }

    /// Returns `value` with its hour and minute replaced by these fields.
    /// Date, seconds and sub-seconds are kept.
    pub fn apply_to(
        &self,
        value: NaiveDateTime,
        format: TimeFormat,
    ) -> Result<NaiveDateTime, CalendarError> {
        let hour = self.hour_24(format);
        value
            .with_hour(hour)
            .ok_or(CalendarError::InvalidHour(hour))?
            .with_minute(self.minute)
            .ok_or(CalendarError::InvalidMinute(self.minute))
    }
}

/// A select of the time picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    /// Hour select.
    Hour,
    /// Minute select.
    Minute,
    /// AM/PM select.
    Period,
}

impl TimeField {
    fn name(self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Period => "period",
        }
    }

    fn invalid(self, raw: &str) -> CalendarError {
        CalendarError::InvalidOption {
            field: self.name(),
            value: raw.to_string(),
        }
    }

    /// Writes the option value `raw` into `fields`.
    pub fn apply(
        self,
        fields: &mut TimeFields,
        raw: &str,
        format: TimeFormat,
    ) -> Result<(), CalendarError> {
        match self {
            Self::Hour => {
                let hour = raw.trim().parse::<u32>().map_err(|_| self.invalid(raw))?;
                if !format.hour_range().contains(&hour) {
                    return Err(self.invalid(raw));
                }
                fields.hour = hour;
            }
            Self::Minute => {
                let minute = raw.trim().parse::<u32>().map_err(|_| self.invalid(raw))?;
                if minute > 59 {
                    return Err(self.invalid(raw));
                }
                fields.minute = minute;
            }
            Self::Period => fields.period = raw.parse()?,
        }
        Ok(())
    }
}

/// Holds the displayed fields of a [`time_picker`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimePickerState {
    fields: TimeFields,
    synced: (NaiveDateTime, TimeFormat),
}

impl TimePickerState {
    /// Creates a state showing `value` in `format`.
    pub fn new(value: NaiveDateTime, format: TimeFormat) -> Self {
        Self {
            fields: TimeFields::from_time(&value, format),
            synced: (value, format),
        }
    }

    /// Returns the displayed fields.
    pub fn fields(&self) -> TimeFields {
        self.fields
    }

    /// Re-derives the fields when the value or the format changed since the
    /// last call. Returns true when they were re-derived.
    pub fn sync(&mut self, value: NaiveDateTime, format: TimeFormat) -> bool {
        if self.synced == (value, format) {
            return false;
        }
        *self = Self::new(value, format);
        true
    }

    /// Applies an edit of `field` and returns the value to report.
    pub fn edit(
        &mut self,
        field: TimeField,
        raw: &str,
        value: NaiveDateTime,
    ) -> Result<NaiveDateTime, CalendarError> {
        let format = self.synced.1;
        let mut fields = self.fields;
        field.apply(&mut fields, raw, format)?;
        let updated = fields.apply_to(value, format)?;
        self.fields = fields;
        Ok(updated)
    }
}

/// Configuration options for [`time_picker`].
#[derive(Clone, PartialEq, Setters)]
pub struct TimePickerArgs {
    /// The committed value. Only its hour and minute are edited.
    pub value: NaiveDateTime,
    /// Receives the edited value.
    #[setters(into)]
    pub on_change: CallbackWith<NaiveDateTime>,
    /// 12 or 24-hour display.
    pub time_format: TimeFormat,
    /// Disables every select.
    pub disabled: bool,
    /// Extra class appended to the container.
    #[setters(into)]
    pub class_name: String,
    /// Per-element class overrides.
    pub overrides: ClassOverrides,
    /// Size tier. Falls back to the ambient [`PickerStyle`].
    #[setters(strip_option)]
    pub size: Option<PickerSize>,
    /// Theme tier. Falls back to the ambient [`PickerStyle`].
    #[setters(strip_option)]
    pub theme: Option<PickerTheme>,
}

impl Default for TimePickerArgs {
    fn default() -> Self {
        Self {
            value: NaiveDateTime::default(),
            on_change: CallbackWith::default(),
            time_format: TimeFormat::default(),
            disabled: false,
            class_name: String::new(),
            overrides: ClassOverrides::default(),
            size: None,
            theme: None,
        }
    }
}

impl TimePickerArgs {
    /// Creates args for a controlled picker.
    pub fn new(
        value: NaiveDateTime,
        on_change: impl Into<CallbackWith<NaiveDateTime>>,
        time_format: TimeFormat,
    ) -> Self {
        Self {
            value,
            on_change: on_change.into(),
            time_format,
            ..Self::default()
        }
    }
}

fn two_digit_options(range: std::ops::RangeInclusive<u32>) -> Vec<SelectOption> {
    range
        .map(|value| SelectOption::new(value.to_string(), format_two_digit(value)))
        .collect()
}

fn edit_handler(
    field: TimeField,
    state: &State<TimePickerState>,
    args: &TimePickerArgs,
) -> CallbackWith<String> {
    let state = state.clone();
    let value = args.value;
    let on_change = args.on_change.clone();
    CallbackWith::new(move |raw: String| {
        match state.with_mut(|state| state.edit(field, &raw, value)) {
            Ok(updated) => {
                debug!(field = field.name(), %updated, "time edited");
                on_change.call(updated);
            }
            Err(err) => warn!(%err, "dropped time edit"),
        }
    })
}

/// Renders hour and minute selects, plus an AM/PM select in 12-hour form.
///
/// Selects are labelled "Hour", "Minute" and "AM/PM". Options are labelled
/// with two digits and carry plain decimal values.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
///
/// use chrono::{NaiveDate, NaiveDateTime};
/// use kalend_components::time_picker::{TimeFormat, TimePickerArgs, time_picker};
/// use kalend_ui::{Host, NodeQuery};
///
/// let value = NaiveDate::from_ymd_opt(2023, 6, 15)
///     .unwrap()
///     .and_hms_opt(14, 30, 0)
///     .unwrap();
/// let reported = Arc::new(Mutex::new(Vec::new()));
/// let sink = reported.clone();
/// let args = TimePickerArgs::new(
///     value,
///     move |value: NaiveDateTime| sink.lock().unwrap().push(value),
///     TimeFormat::H24,
/// );
///
/// let mut host = Host::new(move || time_picker(&args));
/// host.render();
/// host.select(&NodeQuery::label("Hour"), "16").unwrap();
///
/// assert_eq!(reported.lock().unwrap()[0].to_string(), "2023-06-15 16:30:00");
/// ```
pub fn time_picker(args: &TimePickerArgs) {
    component("time_picker", || {
        let style = *use_context::<PickerStyle>();
        let size = args.size.unwrap_or(style.size).clock();
        let theme = args.theme.unwrap_or(style.theme);
        let format = args.time_format;

        let state = remember(|| TimePickerState::new(args.value, format));
        if state.with_mut(|state| state.sync(args.value, format)) {
            trace!(value = %args.value, %format, "time fields follow new value");
        }
        let fields = state.with(TimePickerState::fields);

        let container_class = ClassList::new()
            .push("flex items-center")
            .push(size.container)
            .push(args.overrides.get(PickerElement::Container))
            .push(&args.class_name)
            .build();
        let select_class = ClassList::new()
            .push("rounded disabled:cursor-not-allowed transition-colors")
            .push(theme.clock_select())
            .push(size.select)
            .push(args.overrides.get(PickerElement::Select))
            .build();
        let separator_class = ClassList::new()
            .push("text-gray-500")
            .push(size.separator)
            .push(args.overrides.get(PickerElement::Separator))
            .build();

        element(Node::container().class(container_class), || {
            leaf(
                Node::select()
                    .label("Hour")
                    .class(select_class.clone())
                    .value(fields.hour.to_string())
                    .options(two_digit_options(format.hour_range()))
                    .disabled(args.disabled)
                    .on_change(edit_handler(TimeField::Hour, &state, args)),
            );
            leaf(Node::inline(":").class(separator_class));
            leaf(
                Node::select()
                    .label("Minute")
                    .class(select_class.clone())
                    .value(fields.minute.to_string())
                    .options(two_digit_options(0..=59))
                    .disabled(args.disabled)
                    .on_change(edit_handler(TimeField::Minute, &state, args)),
            );
            if format == TimeFormat::H12 {
                leaf(
                    Node::select()
                        .label("AM/PM")
                        .class(select_class)
                        .value(fields.period.to_string())
                        .options(vec![
                            SelectOption::new("AM", "AM"),
                            SelectOption::new("PM", "PM"),
                        ])
                        .disabled(args.disabled)
                        .on_change(edit_handler(TimeField::Period, &state, args)),
                );
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 6, 15)
            .unwrap()
            .and_hms_milli_opt(hour, minute, second, 250)
            .unwrap()
    }

    #[test]
    fn every_hour_survives_the_twelve_hour_round_trip() {
        for hour in 0..24 {
            let (shown, period) = hour_for_display(hour, TimeFormat::H12);
            assert!((1..=12).contains(&shown));
            assert_eq!(hour_from_display(shown, period, TimeFormat::H12), hour);
            assert_eq!(hour_from_display(hour, period, TimeFormat::H24), hour);
        }
        assert_eq!(hour_for_display(12, TimeFormat::H12), (12, DayPeriod::Pm));
    }

    #[test]
    fn edits_keep_date_and_seconds() {
        let value = at(14, 30, 45);
        let mut state = TimePickerState::new(value, TimeFormat::H12);
        assert_eq!(
            state.fields(),
            TimeFields {
                hour: 2,
                minute: 30,
                period: DayPeriod::Pm,
            }
        );

        assert_eq!(state.edit(TimeField::Period, "AM", value), Ok(at(2, 30, 45)));
        assert_eq!(state.edit(TimeField::Minute, "5", value), Ok(at(2, 5, 45)));
        assert_eq!(state.edit(TimeField::Hour, "12", value), Ok(at(0, 5, 45)));
    }

    #[test]
    fn bad_option_values_leave_fields_untouched() {
        let value = at(9, 0, 0);
        let mut state = TimePickerState::new(value, TimeFormat::H12);
        let before = state.fields();
        assert!(matches!(
            state.edit(TimeField::Hour, "0", value),
            Err(CalendarError::InvalidOption { field: "hour", .. })
        ));
        assert!(state.edit(TimeField::Minute, "60", value).is_err());
        assert!(state.edit(TimeField::Minute, "ten", value).is_err());
        assert_eq!(
            state.edit(TimeField::Period, "noon", value),
            Err(CalendarError::UnknownPeriod("noon".to_string()))
        );
        assert_eq!(state.fields(), before);
    }

    #[test]
    fn sync_follows_value_and_format() {
        let value = at(14, 30, 0);
        let mut state = TimePickerState::new(value, TimeFormat::H24);
        state.edit(TimeField::Hour, "16", value).unwrap();
        assert!(!state.sync(value, TimeFormat::H24));
        assert_eq!(state.fields().hour, 16);

        assert!(state.sync(value, TimeFormat::H12));
        assert_eq!(state.fields().hour, 2);
        assert!(state.sync(at(0, 15, 0), TimeFormat::H12));
        assert_eq!(state.fields().hour, 12);
        assert_eq!(state.fields().period, DayPeriod::Am);
    }

    #[test]
    fn formats_parse_from_text() {
        assert_eq!("12".parse::<TimeFormat>(), Ok(TimeFormat::H12));
        assert_eq!("24".parse::<TimeFormat>(), Ok(TimeFormat::H24));
        assert!("36".parse::<TimeFormat>().is_err());
        assert_eq!("pm".parse::<DayPeriod>(), Ok(DayPeriod::Pm));
        assert_eq!(format_two_digit(7), "07");
        assert_eq!(format_two_digit(42), "42");
    }
}
