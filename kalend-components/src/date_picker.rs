//! Calendar grid for picking a day.
//!
//! ## Usage
//!
//! Render a month page for a controlled date/time value and report the day
//! the user activates. The visible month can be paged independently of the
//! value until a day is picked.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use derive_setters::Setters;
use kalend_ui::{
    Callback, CallbackWith, ClassList, Node, Role, State, component, element, leaf, remember,
    use_context,
};
use tracing::{debug, trace, warn};

use crate::{
    calendar::{DateBounds, DayCell, Today, WEEKDAY_NAMES, YearMonth, month_cells},
    error::CalendarError,
    style::{ClassOverrides, PickerElement},
    theme::{CalendarSizeClasses, CalendarThemeClasses, PickerSize, PickerStyle, PickerTheme},
};

/// Holds the month page shown by a [`date_picker`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePickerState {
    displayed_month: YearMonth,
    synced_value: NaiveDateTime,
}

impl DatePickerState {
    /// Creates a state showing the month of `value`.
    pub fn new(value: NaiveDateTime) -> Self {
        Self {
            displayed_month: YearMonth::of(value),
            synced_value: value,
        }
    }

    /// Returns the month currently displayed.
    pub fn displayed_month(&self) -> YearMonth {
        self.displayed_month
    }

    /// Jumps back to the month of `value` when it differs from the value
    /// seen last. Returns true when the page was reset.
    pub fn sync(&mut self, value: NaiveDateTime) -> bool {
        if self.synced_value == value {
            return false;
        }
        self.synced_value = value;
        self.displayed_month = YearMonth::of(value);
        true
    }

    /// Shows the previous month.
    pub fn previous_month(&mut self) {
        self.displayed_month = self.displayed_month.previous();
    }

    /// Shows the next month.
    pub fn next_month(&mut self) {
        self.displayed_month = self.displayed_month.next();
    }

    /// Shows `month`.
    pub fn set_displayed_month(&mut self, month: YearMonth) {
        self.displayed_month = month;
    }
}

/// Configuration options for [`date_picker`].
#[derive(Clone, PartialEq, Setters)]
pub struct DatePickerArgs {
    /// The committed value. Only its date is shown.
    pub value: NaiveDateTime,
    /// Receives the activated day at midnight.
    #[setters(into)]
    pub on_change: CallbackWith<NaiveDateTime>,
    /// Earliest selectable day.
    #[setters(strip_option)]
    pub min_date: Option<NaiveDate>,
    /// Latest selectable day.
    #[setters(strip_option)]
    pub max_date: Option<NaiveDate>,
    /// Disables navigation and every day cell.
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

impl Default for DatePickerArgs {
    fn default() -> Self {
        Self {
            value: NaiveDateTime::default(),
            on_change: CallbackWith::default(),
            min_date: None,
            max_date: None,
            disabled: false,
            class_name: String::new(),
            overrides: ClassOverrides::default(),
            size: None,
            theme: None,
        }
    }
}

impl DatePickerArgs {
    /// Creates args for a controlled picker.
    pub fn new(value: NaiveDateTime, on_change: impl Into<CallbackWith<NaiveDateTime>>) -> Self {
        Self {
            value,
            on_change: on_change.into(),
            ..Self::default()
        }
    }

    /// The bounds formed by `min_date` and `max_date`.
    pub fn bounds(&self) -> DateBounds {
        DateBounds::new(self.min_date, self.max_date)
    }
}

/// Resolves a click on `day` of `month` to the value to report, or `None`
/// when the picker is disabled or the day is out of bounds.
pub fn activate_day(
    month: YearMonth,
    day: u32,
    bounds: DateBounds,
    disabled: bool,
) -> Result<Option<NaiveDateTime>, CalendarError> {
    let date = month.date(day)?;
    if disabled || bounds.is_disabled(date) {
        return Ok(None);
    }
    Ok(Some(date.and_time(NaiveTime::MIN)))
}

struct DayFlags {
    selected: bool,
    today: bool,
    disabled: bool,
}

fn day_class(
    size: &CalendarSizeClasses,
    theme: &CalendarThemeClasses,
    overrides: &ClassOverrides,
    flags: &DayFlags,
) -> String {
    let theme_class = if flags.selected {
        theme.selected_day
    } else if flags.today {
        theme.today
    } else if flags.disabled {
        theme.disabled_day
    } else {
        theme.day_button
    };
    let override_element = if flags.selected {
        PickerElement::SelectedDay
    } else if flags.today {
        PickerElement::Today
    } else if flags.disabled {
        PickerElement::DisabledDay
    } else {
        PickerElement::DayButton
    };
    ClassList::new()
        .push("text-center rounded transition-colors disabled:cursor-not-allowed")
        .push(theme_class)
        .push(size.day_button)
        .push(overrides.get(override_element))
        .build()
}

/// Renders a month calendar for a controlled value.
///
/// The header holds "Previous month" and "Next month" buttons around a
/// `Month YYYY` heading. Below it a grid labelled "Calendar" lists the
/// weekday names, blank cells up to the weekday of day 1 and then one cell
/// per day. Clicking an enabled day reports that day at midnight through
/// `on_change`; paging never reports anything.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
///
/// use chrono::{NaiveDate, NaiveDateTime};
/// use kalend_components::date_picker::{DatePickerArgs, date_picker};
/// use kalend_ui::{Host, NodeQuery};
///
/// let value = NaiveDate::from_ymd_opt(2023, 6, 15)
///     .unwrap()
///     .and_hms_opt(14, 30, 0)
///     .unwrap();
/// let picked = Arc::new(Mutex::new(None));
/// let sink = picked.clone();
/// let args = DatePickerArgs::new(value, move |date: NaiveDateTime| {
///     *sink.lock().unwrap() = Some(date);
/// });
///
/// let mut host = Host::new(move || date_picker(&args));
/// host.render();
/// host.click(&NodeQuery::text("20")).unwrap();
///
/// let expected = NaiveDate::from_ymd_opt(2023, 6, 20).unwrap().and_hms_opt(0, 0, 0);
/// assert_eq!(*picked.lock().unwrap(), expected);
/// ```
pub fn date_picker(args: &DatePickerArgs) {
    component("date_picker", || {
        let style = *use_context::<PickerStyle>();
        let today = *use_context::<Today>();
        let size = args.size.unwrap_or(style.size).calendar();
        let theme_tier = args.theme.unwrap_or(style.theme);
        let theme = theme_tier.calendar();

        let state = remember(|| DatePickerState::new(args.value));
        if state.with_mut(|state| state.sync(args.value)) {
            trace!(value = %args.value, "calendar page follows new value");
        }
        let month = state.with(DatePickerState::displayed_month);
        let bounds = args.bounds();

        let container_class = ClassList::new()
            .push_if(!theme_tier.is_custom(), "border rounded-lg shadow-lg")
            .push(theme.container)
            .push(size.container)
            .push(args.overrides.get(PickerElement::Container))
            .push(&args.class_name)
            .build();

        element(Node::container().class(container_class), || {
            calendar_header(args, &state, month, &size, &theme);
            calendar_grid(args, month, today, bounds, &size, &theme);
        });
    });
}

fn calendar_header(
    args: &DatePickerArgs,
    state: &State<DatePickerState>,
    month: YearMonth,
    size: &CalendarSizeClasses,
    theme: &CalendarThemeClasses,
) {
    let nav_class = ClassList::new()
        .push("rounded disabled:opacity-50 transition-colors")
        .push(theme.nav_button)
        .push(size.nav_button)
        .push(args.overrides.get(PickerElement::NavButton))
        .build();
    let heading_class = ClassList::new()
        .push("font-semibold")
        .push(theme.header)
        .push(size.header)
        .push(args.overrides.get(PickerElement::Header))
        .build();

    element(
        Node::container().class("flex justify-between items-center mb-4"),
        || {
            let previous = state.clone();
            leaf(
                Node::button()
                    .label("Previous month")
                    .text("<")
                    .class(nav_class.clone())
                    .disabled(args.disabled)
                    .on_click(Callback::new(move || {
                        let month = previous.with_mut(|state| {
                            state.previous_month();
                            state.displayed_month()
                        });
                        debug!(%month, "calendar paged back");
                    })),
            );
            leaf(Node::heading(month.title()).class(heading_class));
            let next = state.clone();
            leaf(
                Node::button()
                    .label("Next month")
                    .text(">")
                    .class(nav_class)
                    .disabled(args.disabled)
                    .on_click(Callback::new(move || {
                        let month = next.with_mut(|state| {
                            state.next_month();
                            state.displayed_month()
                        });
                        debug!(%month, "calendar paged forward");
                    })),
            );
        },
    );
}

fn calendar_grid(
    args: &DatePickerArgs,
    month: YearMonth,
    today: Today,
    bounds: DateBounds,
    size: &CalendarSizeClasses,
    theme: &CalendarThemeClasses,
) {
    let cells = match month_cells(month, args.value.date(), today, bounds) {
        Ok(cells) => cells,
        Err(err) => {
            warn!(%err, %month, "cannot lay out calendar month");
            Vec::new()
        }
    };
    let day_name_class = ClassList::new()
        .push("text-center font-medium")
        .push(theme.day_name)
        .push(size.day_name)
        .push(args.overrides.get(PickerElement::DayName))
        .build();

    element(
        Node::container()
            .class("grid grid-cols-7 gap-1")
            .role(Role::Grid)
            .label("Calendar"),
        || {
            for name in WEEKDAY_NAMES {
                leaf(
                    Node::inline(name)
                        .class(day_name_class.clone())
                        .role(Role::ColumnHeader),
                );
            }
            for cell in cells {
                match cell {
                    DayCell::Blank => {
                        let flags = DayFlags {
                            selected: false,
                            today: false,
                            disabled: true,
                        };
                        leaf(
                            Node::button()
                                .role(Role::GridCell)
                                .text("")
                                .class(day_class(size, theme, &args.overrides, &flags))
                                .disabled(true)
                                .aria_selected(false)
                                .aria_disabled(true),
                        );
                    }
                    DayCell::Day(day) => {
                        let flags = DayFlags {
                            selected: day.selected,
                            today: day.today,
                            disabled: day.disabled,
                        };
                        let on_change = args.on_change.clone();
                        let picker_disabled = args.disabled;
                        let number = day.day();
                        leaf(
                            Node::button()
                                .role(Role::GridCell)
                                .text(number.to_string())
                                .class(day_class(size, theme, &args.overrides, &flags))
                                .disabled(args.disabled || day.disabled)
                                .aria_selected(day.selected)
                                .aria_disabled(day.disabled)
                                .on_click(Callback::new(move || {
                                    match activate_day(month, number, bounds, picker_disabled) {
                                        Ok(Some(date)) => {
                                            debug!(%date, "day picked");
                                            on_change.call(date);
                                        }
                                        Ok(None) => debug!(number, "ignored unavailable day"),
                                        Err(err) => warn!(%err, "dropped day activation"),
                                    }
                                })),
                        );
                    }
                }
            }
        },
    );
}
