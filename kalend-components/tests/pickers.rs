use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use kalend_components::{
    ClassOverrides, DatePickerArgs, DateTimePickerArgs, PickerElement, PickerSize, PickerStyle,
    PickerTheme, TimeFormat, TimePickerArgs, Today, date_picker, date_time_picker, time_picker,
};
use kalend_ui::{
    CallbackWith, DispatchError, ElementKind, Host, Node, NodeQuery, Role, provide_context,
};
use parking_lot::Mutex;

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

type Reports = Arc<Mutex<Vec<NaiveDateTime>>>;

fn recorder() -> (Reports, CallbackWith<NaiveDateTime>) {
    let reports = Reports::default();
    let sink = reports.clone();
    let callback = CallbackWith::new(move |value: NaiveDateTime| sink.lock().push(value));
    (reports, callback)
}

/// Renders `root` with the current day pinned to 2023-06-01.
fn pinned(root: impl Fn() + 'static) -> Host {
    Host::new(move || provide_context(Today(date(2023, 6, 1)), || root()))
}

fn heading(tree: &Node) -> String {
    tree.find(|node| node.kind == ElementKind::Heading)
        .and_then(|node| node.text.clone())
        .unwrap_or_default()
}

fn day<'a>(tree: &'a Node, number: u32) -> &'a Node {
    let text = number.to_string();
    tree.find(|node| node.role == Some(Role::GridCell) && node.text.as_deref() == Some(text.as_str()))
        .unwrap()
}

#[test]
fn clicking_a_day_keeps_the_time_of_day() {
    let (reports, on_change) = recorder();
    let args = DateTimePickerArgs::new(at(2023, 6, 15, 14, 30), on_change);
    let mut host = pinned(move || date_time_picker(&args));

    assert_eq!(heading(host.render()), "June 2023");
    host.click(&NodeQuery::text("20")).unwrap();

    assert_eq!(*reports.lock(), vec![at(2023, 6, 20, 14, 30)]);
}

#[test]
fn changing_the_hour_keeps_the_date() {
    let (reports, on_change) = recorder();
    let args = DateTimePickerArgs::new(at(2023, 6, 15, 14, 30), on_change);
    let mut host = pinned(move || date_time_picker(&args));
    host.render();

    host.select(&NodeQuery::label("Hour"), "16").unwrap();

    assert_eq!(*reports.lock(), vec![at(2023, 6, 15, 16, 30)]);
}

#[test]
fn switching_to_am_in_twelve_hour_form() {
    let (reports, on_change) = recorder();
    let args = DateTimePickerArgs::new(at(2023, 6, 15, 14, 30), on_change)
        .time_format(TimeFormat::H12);
    let mut host = pinned(move || date_time_picker(&args));
    let tree = host.render();

    let hour = tree.find_by_label("Hour").unwrap();
    assert_eq!(hour.value.as_deref(), Some("2"));
    assert_eq!(hour.options.len(), 12);
    assert_eq!(hour.options[0].label, "01");
    assert_eq!(hour.options[11].value, "12");
    assert_eq!(
        tree.find_by_label("AM/PM").unwrap().value.as_deref(),
        Some("PM")
    );

    host.select(&NodeQuery::label("AM/PM"), "AM").unwrap();
    assert_eq!(*reports.lock(), vec![at(2023, 6, 15, 2, 30)]);
}

#[test]
fn twenty_four_hour_form_has_no_period_select() {
    let args = TimePickerArgs::new(at(2023, 6, 15, 9, 5), |_: NaiveDateTime| {}, TimeFormat::H24);
    let mut host = pinned(move || time_picker(&args));
    let tree = host.render();

    assert!(tree.find_by_label("AM/PM").is_none());
    let hour = tree.find_by_label("Hour").unwrap();
    assert_eq!(hour.options.len(), 24);
    assert_eq!(hour.options[0].label, "00");
    let minute = tree.find_by_label("Minute").unwrap();
    assert_eq!(minute.value.as_deref(), Some("5"));
    assert_eq!(minute.options.len(), 60);
    assert_eq!(minute.options[59].label, "59");
    assert_eq!(tree.text_content(), ":");
}

#[test]
fn grid_pads_to_the_first_weekday() {
    let args = DatePickerArgs::new(at(2023, 6, 15, 14, 30), |_: NaiveDateTime| {});
    let mut host = pinned(move || date_picker(&args));
    let tree = host.render();

    let names: Vec<_> = tree
        .find_all_by_role(Role::ColumnHeader)
        .into_iter()
        .filter_map(|node| node.text.as_deref())
        .collect();
    assert_eq!(names, ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]);

    let cells = tree.find_all_by_role(Role::GridCell);
    assert_eq!(cells.len(), 4 + 30);
    for blank in &cells[..4] {
        assert_eq!(blank.text.as_deref(), Some(""));
        assert!(blank.disabled);
        assert_eq!(blank.aria_disabled, Some(true));
        assert_eq!(blank.aria_selected, Some(false));
    }
    assert_eq!(cells[4].text.as_deref(), Some("1"));
    assert_eq!(cells[33].text.as_deref(), Some("30"));

    let grid = tree.find_by_label("Calendar").unwrap();
    assert_eq!(grid.role, Some(Role::Grid));
    assert!(grid.has_class("grid-cols-7"));
}

#[test]
fn leap_february_has_twenty_nine_days() {
    let args = DatePickerArgs::new(at(2024, 2, 10, 0, 0), |_: NaiveDateTime| {});
    let mut host = pinned(move || date_picker(&args));
    let cells = host.render().find_all_by_role(Role::GridCell).len();
    // February 1st 2024 was a Thursday.
    assert_eq!(cells, 4 + 29);
}

#[test]
fn selected_and_today_are_marked() {
    let args = DatePickerArgs::new(at(2023, 6, 15, 14, 30), |_: NaiveDateTime| {});
    let mut host = pinned(move || date_picker(&args));
    let tree = host.render();

    let selected = day(tree, 15);
    assert_eq!(selected.aria_selected, Some(true));
    assert!(selected.has_class("bg-blue-500"));

    let today = day(tree, 1);
    assert_eq!(today.aria_selected, Some(false));
    assert!(today.has_class("bg-blue-100"));

    let plain = day(tree, 2);
    assert!(plain.has_class("text-gray-700"));
    assert_eq!(
        tree.find_all_by_role(Role::GridCell)
            .iter()
            .filter(|cell| cell.aria_selected == Some(true))
            .count(),
        1
    );
}

#[test]
fn days_outside_bounds_are_disabled_and_silent() {
    let (reports, on_change) = recorder();
    let args = DatePickerArgs::new(at(2023, 6, 15, 14, 30), on_change)
        .min_date(date(2023, 6, 10))
        .max_date(date(2023, 6, 20));
    let mut host = pinned(move || date_picker(&args));
    let tree = host.render();

    for number in [9, 21] {
        let cell = day(tree, number);
        assert!(cell.disabled);
        assert_eq!(cell.aria_disabled, Some(true));
        assert!(cell.has_class("text-gray-400"));
    }
    for number in [10, 20] {
        assert!(!day(tree, number).disabled);
    }

    assert!(matches!(
        host.click(&NodeQuery::text("21")),
        Err(DispatchError::Disabled(_))
    ));
    host.click(&NodeQuery::text("10")).unwrap();
    assert_eq!(*reports.lock(), vec![at(2023, 6, 10, 0, 0)]);
}

#[test]
fn navigation_pages_without_reporting() {
    let (reports, on_change) = recorder();
    let args = DatePickerArgs::new(at(2023, 1, 15, 8, 0), on_change);
    let mut host = pinned(move || date_picker(&args));
    assert_eq!(heading(host.render()), "January 2023");

    host.click(&NodeQuery::label("Previous month")).unwrap();
    assert_eq!(heading(host.render()), "December 2022");
    host.click(&NodeQuery::label("Next month")).unwrap();
    host.click(&NodeQuery::label("Next month")).unwrap();
    assert_eq!(heading(host.render()), "February 2023");

    host.click(&NodeQuery::text("3")).unwrap();
    assert!(reports.lock().iter().all(|value| value.date() == date(2023, 2, 3)));
    assert_eq!(reports.lock().len(), 1);
}

#[test]
fn a_new_value_brings_the_page_back() {
    let value = Arc::new(Mutex::new(at(2023, 6, 15, 14, 30)));
    let current = value.clone();
    let mut host = pinned(move || {
        let sink = current.clone();
        let args = DatePickerArgs::new(*current.lock(), move |next: NaiveDateTime| {
            *sink.lock() = next;
        });
        date_picker(&args);
    });
    host.render();

    host.click(&NodeQuery::label("Next month")).unwrap();
    host.click(&NodeQuery::label("Next month")).unwrap();
    assert_eq!(heading(host.render()), "August 2023");
    // Re-rendering with the same value keeps the page.
    assert_eq!(heading(host.render()), "August 2023");

    host.click(&NodeQuery::text("3")).unwrap();
    assert_eq!(*value.lock(), at(2023, 8, 3, 0, 0));
    *value.lock() = at(2021, 3, 1, 0, 0);
    assert_eq!(heading(host.render()), "March 2021");
}

#[test]
fn disabled_picker_rejects_every_interaction() {
    let (reports, on_change) = recorder();
    let args = DateTimePickerArgs::new(at(2023, 6, 15, 14, 30), on_change)
        .disabled(true)
        .time_format(TimeFormat::H12);
    let mut host = pinned(move || date_time_picker(&args));
    let tree = host.render();

    for label in ["Previous month", "Next month", "Hour", "Minute", "AM/PM"] {
        assert!(tree.find_by_label(label).unwrap().disabled, "{label}");
    }
    let cell = day(tree, 20);
    assert!(cell.disabled);
    assert_eq!(cell.aria_disabled, Some(false));

    assert!(host.click(&NodeQuery::label("Next month")).is_err());
    assert!(host.click(&NodeQuery::text("20")).is_err());
    assert!(host.select(&NodeQuery::label("Hour"), "3").is_err());
    assert!(reports.lock().is_empty());
    assert_eq!(heading(host.render()), "June 2023");
}

#[test]
fn composite_feeds_each_edit_from_the_latest_value() {
    let value = Arc::new(Mutex::new(at(2023, 6, 15, 14, 30)));
    let current = value.clone();
    let mut host = pinned(move || {
        let sink = current.clone();
        let args = DateTimePickerArgs::new(*current.lock(), move |next: NaiveDateTime| {
            *sink.lock() = next;
        });
        date_time_picker(&args);
    });
    host.render();

    host.click(&NodeQuery::text("20")).unwrap();
    host.render();
    host.select(&NodeQuery::label("Hour"), "9").unwrap();
    host.render();
    host.select(&NodeQuery::label("Minute"), "45").unwrap();
    let tree = host.render();

    assert_eq!(*value.lock(), at(2023, 6, 20, 9, 45));
    assert_eq!(tree.find_by_label("Hour").unwrap().value.as_deref(), Some("9"));
    assert_eq!(day(tree, 20).aria_selected, Some(true));
}

#[test]
fn composite_classes_and_overrides_reach_each_part() {
    let args = DateTimePickerArgs::new(at(2023, 6, 15, 14, 30), |_: NaiveDateTime| {})
        .container_class_name("outer")
        .class_name("extra")
        .date_picker_class_name("calendar")
        .time_picker_class_name("clock")
        .date_picker_overrides(ClassOverrides::new().with(PickerElement::Header, "title"))
        .time_picker_overrides(ClassOverrides::new().with(PickerElement::Separator, "sep"));
    let mut host = pinned(move || date_time_picker(&args));
    let tree = host.render();

    assert_eq!(tree.class, "space-y-4 outer extra");
    let calendar = &tree.children[0];
    assert_eq!(
        calendar.class,
        "border rounded-lg shadow-lg bg-white border-gray-300 p-4 text-base calendar"
    );
    let heading = tree.find(|node| node.kind == ElementKind::Heading).unwrap();
    assert_eq!(heading.class, "font-semibold text-gray-800 text-lg mb-4 title");

    let row = &tree.children[1];
    assert_eq!(row.class, "flex justify-center");
    assert_eq!(row.children[0].class, "flex items-center space-x-2 clock");
    let separator = tree.find(|node| node.text.as_deref() == Some(":")).unwrap();
    assert_eq!(separator.class, "text-gray-500 text-sm sep");
}

#[test]
fn ambient_style_applies_unless_args_override_it() {
    let ambient = DatePickerArgs::new(at(2023, 6, 15, 14, 30), |_: NaiveDateTime| {});
    let explicit = ambient.clone().size(PickerSize::Sm).theme(PickerTheme::Custom);
    let mut host = pinned(move || {
        provide_context(PickerStyle::new(PickerSize::Lg, PickerTheme::Dark), || {
            date_picker(&ambient);
            date_picker(&explicit);
        });
    });
    let tree = host.render();

    assert_eq!(
        tree.children[0].class,
        "border rounded-lg shadow-lg bg-gray-800 border-gray-600 p-6 text-lg"
    );
    assert_eq!(tree.children[1].class, "p-2 text-sm");
}

#[test]
fn custom_theme_uses_only_overrides_for_day_states() {
    let args = DatePickerArgs::new(at(2023, 6, 15, 14, 30), |_: NaiveDateTime| {})
        .theme(PickerTheme::Custom)
        .overrides(
            ClassOverrides::new()
                .with(PickerElement::SelectedDay, "chosen")
                .with(PickerElement::DisabledDay, "muted"),
        );
    let mut host = pinned(move || date_picker(&args));
    let tree = host.render();

    assert_eq!(
        day(tree, 15).class,
        "text-center rounded transition-colors disabled:cursor-not-allowed py-2 px-3 chosen"
    );
    let blank = tree.find_all_by_role(Role::GridCell)[0];
    assert!(blank.has_class("muted"));
    assert!(!blank.has_class("text-gray-400"));
}

#[test]
fn time_selects_follow_an_external_format_change() {
    let format = Arc::new(Mutex::new(TimeFormat::H24));
    let current = format.clone();
    let mut host = pinned(move || {
        let args = TimePickerArgs::new(at(2023, 6, 15, 0, 15), |_: NaiveDateTime| {}, *current.lock());
        time_picker(&args);
    });
    assert_eq!(
        host.render().find_by_label("Hour").unwrap().value.as_deref(),
        Some("0")
    );

    *format.lock() = TimeFormat::H12;
    let tree = host.render();
    assert_eq!(tree.find_by_label("Hour").unwrap().value.as_deref(), Some("12"));
    assert_eq!(tree.find_by_label("AM/PM").unwrap().value.as_deref(), Some("AM"));
}
