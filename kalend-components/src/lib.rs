//! Date, time and date-time picker components for kalend-ui.
//!
//! # Usage
//!
//! Every picker is controlled: it shows the value it is given and reports
//! edits through `on_change`. Feed the reported value back on the next
//! render for the picker to move on.
//!
//! ```
//! use std::sync::Arc;
//!
//! use chrono::{NaiveDate, NaiveDateTime};
//! use kalend_components::date_time_picker::{DateTimePickerArgs, date_time_picker};
//! use kalend_ui::{Host, NodeQuery};
//! use parking_lot::Mutex;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//!
//! let value = Arc::new(Mutex::new(
//!     NaiveDate::from_ymd_opt(2023, 6, 15)
//!         .and_then(|date| date.and_hms_opt(14, 30, 0))
//!         .ok_or("invalid date")?,
//! ));
//!
//! let current = value.clone();
//! let mut host = Host::new(move || {
//!     let sink = current.clone();
//!     let args = DateTimePickerArgs::new(*current.lock(), move |next: NaiveDateTime| {
//!         *sink.lock() = next;
//!     });
//!     date_time_picker(&args);
//! });
//!
//! host.render();
//! host.click(&NodeQuery::text("20"))?;
//! host.render();
//! host.select(&NodeQuery::label("Minute"), "5")?;
//!
//! assert_eq!(value.lock().to_string(), "2023-06-20 14:05:00");
//! # Ok(())
//! # }
//! ```
//!
//! # Styling
//!
//! Classes come from a size tier and a theme tier, see [`theme`], followed
//! by caller overrides per sub-element, see [`style`]. Provide a
//! [`PickerStyle`](theme::PickerStyle) to set defaults for a subtree and a
//! [`Today`](calendar::Today) to pin the highlighted current day.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod calendar;
pub mod date_picker;
pub mod date_time_picker;
pub mod error;
pub mod style;
pub mod theme;
pub mod time_picker;

pub use crate::{
    calendar::{DateBounds, Today, YearMonth},
    date_picker::{DatePickerArgs, DatePickerState, date_picker},
    date_time_picker::{DateTimePickerArgs, date_time_picker},
    error::CalendarError,
    style::{ClassOverrides, PickerElement},
    theme::{PickerSize, PickerStyle, PickerTheme},
    time_picker::{DayPeriod, TimeFormat, TimePickerArgs, TimePickerState, time_picker},
};
