//! Renders a date-time picker to the terminal and replays a short session
//! against it.
//!
//! ```text
//! example [sm|md|lg] [light|dark|custom] [12|24]
//! ```

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use kalend_components::{
    DateTimePickerArgs, PickerSize, PickerStyle, PickerTheme, TimeFormat, date_time_picker,
};
use kalend_ui::{Host, NodeQuery, Role, provide_context};
use parking_lot::Mutex;
use tracing::info;

enum Step {
    Click(NodeQuery),
    Select(NodeQuery, &'static str),
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("warn,example=info") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("warn"),
        },
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn script(format: TimeFormat) -> Vec<Step> {
    let mut steps = vec![
        Step::Click(NodeQuery::label("Next month")),
        Step::Click(NodeQuery::text("3")),
        Step::Select(NodeQuery::label("Hour"), "9"),
        Step::Select(NodeQuery::label("Minute"), "45"),
        Step::Click(NodeQuery::label("Previous month")),
        // Blank cells are disabled, so this one is refused.
        Step::Click(NodeQuery::role(Role::GridCell, 0)),
    ];
    if format == TimeFormat::H12 {
        steps.push(Step::Select(NodeQuery::label("AM/PM"), "PM"));
    }
    steps
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let size: PickerSize = args.next().as_deref().unwrap_or("md").parse()?;
    let theme: PickerTheme = args.next().as_deref().unwrap_or("light").parse()?;
    let format: TimeFormat = args.next().as_deref().unwrap_or("24").parse()?;

    let start = NaiveDate::from_ymd_opt(2023, 6, 15)
        .and_then(|date| date.and_hms_opt(14, 30, 0))
        .ok_or("invalid start value")?;
    let value = Arc::new(Mutex::new(start));

    let current = value.clone();
    let mut host = Host::new(move || {
        let sink = current.clone();
        let args = DateTimePickerArgs::new(*current.lock(), move |next: NaiveDateTime| {
            info!(%next, "value changed");
            *sink.lock() = next;
        })
        .time_format(format)
        .container_class_name("mx-auto");
        provide_context(PickerStyle::new(size, theme), || date_time_picker(&args));
    });

    println!("{}", host.render());
    for step in script(format) {
        let outcome = match &step {
            Step::Click(query) => host.click(query),
            Step::Select(query, option) => host.select(query, option),
        };
        if let Err(err) = outcome {
            println!("! {err}");
        }
        host.render();
    }
    println!("{}", host.render());
    println!("final value: {}", *value.lock());
    Ok(())
}
