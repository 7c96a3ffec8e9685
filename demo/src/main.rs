//! Terminal walkthrough of the calendar widget.
//!
//! Drives the headless widget through the interactions a host UI would
//! forward (clicks, hovers, key presses, drill navigation) and prints the
//! grid models it projects. Run with `RUST_LOG=debug` to see the widget's
//! diagnostics.

use std::sync::Arc;

use tracing::info;

use almanac_core::date::{CalendarDate, FixedClock};
use almanac_core::selection::{SelectionClass, SelectionMode};
use almanac_core::view::{NavDirection, NavStride, ViewGranularity};
use almanac_widget::calendar::{Calendar, CalendarCallbacks, Key};
use almanac_widget::config::CalendarConfig;
use almanac_widget::event::Event;
use almanac_widget::render::GridModel;

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn date(y: i32, m: u8, d: u8) -> CalendarDate {
    CalendarDate::new(y, m, d).expect("demo dates are valid")
}

fn sample_events() -> Vec<Event> {
    let mut standup = Event::new(date(2025, 6, 10), "Team standup", "meeting");
    standup.time = Some("09:30".to_string());
    standup.color = Some("#4a90d9".to_string());

    let mut launch = Event::new(date(2025, 6, 10), "Launch review", "meeting");
    launch.time = Some("14:00".to_string());

    let mut holiday = Event::new(date(2025, 6, 19), "Juneteenth", "holiday");
    holiday.color = Some("#d94a4a".to_string());
    holiday.description = Some("Office closed".to_string());

    vec![standup, launch, holiday]
}

/// Prints a grid model as rows of marked cells.
///
/// Markers: `*` today, `[n]` selected or in the committed range, `~`
/// range preview, `.` disabled, parentheses for neighboring-period cells.
fn print_grid(model: &GridModel) {
    println!("== {} ==", model.title);
    if !model.weekday_labels.is_empty() {
        let header: Vec<&str> = model.weekday_labels.iter().map(String::as_str).collect();
        println!("      {}", header.join("   "));
    }

    let columns = if model.granularity == ViewGranularity::Month {
        7
    } else {
        4
    };
    for (row, chunk) in model.cells.chunks(columns).enumerate() {
        let mut line = String::new();
        if !model.week_numbers.is_empty() {
            match model.week_numbers.get(row).copied().flatten() {
                Some(week) => line.push_str(&format!("w{week:02} ")),
                None => line.push_str("    "),
            }
        }
        for cell in chunk {
            let label = if cell.label.is_empty() {
                "  ".to_string()
            } else {
                format!("{:>2}", cell.label)
            };
            let marked = match cell.selection {
                SelectionClass::None => format!(" {label} "),
                SelectionClass::RangePreview => format!("~{label}~"),
                _ => format!("[{label}]"),
            };
            let marked = if cell.disabled {
                format!(".{marked}.")
            } else if !cell.in_current_period {
                format!("({marked})")
            } else if cell.today {
                format!("*{marked}*")
            } else {
                format!(" {marked} ")
            };
            line.push_str(&marked);
        }
        println!("{line}");
    }
    if let Some(secondary) = &model.secondary {
        print_grid(secondary);
    }
    println!();
}

fn callbacks() -> CalendarCallbacks {
    CalendarCallbacks::default()
        .on_change(|value| println!("-> selection changed: {value:?}"))
        .on_view_change(|granularity| println!("-> view changed: {}", granularity.name()))
        .on_active_start_date_change(|anchor| println!("-> anchor moved: {anchor}"))
        .on_range_hover(|start, end| match end {
            Some(end) => println!("-> previewing {start} .. {end}"),
            None => println!("-> preview cleared, start {start} kept"),
        })
        .on_click_event(|event, day| println!("-> event clicked on {day}: {}", event.title))
}

fn single_selection_walkthrough(events: &[Event]) {
    println!("--- single selection, week numbers, June 2025 ---");
    let mut calendar = Calendar::with_clock(
        CalendarConfig::default()
            .initial_anchor(date(2025, 6, 15))
            .show_week_numbers(true)
            .min_detail(ViewGranularity::Decade)
            .max_detail(ViewGranularity::Day)
            .disabled_dates(vec![date(2025, 6, 27), date(2025, 6, 28)]),
        Box::new(FixedClock(date(2025, 6, 15))),
    )
    .expect("demo configuration is valid");
    calendar.set_callbacks(callbacks());

    calendar.click_date(date(2025, 6, 10), events);
    print_grid(&calendar.render(events));

    // A click on a disabled date is ignored.
    calendar.click_date(date(2025, 6, 27), events);

    println!("--- keyboard: right, down, enter ---");
    calendar.handle_key(Key::ArrowRight, events);
    calendar.handle_key(Key::ArrowDown, events);
    calendar.handle_key(Key::Enter, events);

    println!("--- header arrows: next month, then jump back a year ---");
    calendar.navigate(NavDirection::Next, NavStride::Period);
    calendar.navigate(NavDirection::Previous, NavStride::Jump);
    print_grid(&calendar.render(events));

    println!("--- drill up to the year view, then the decade view ---");
    calendar.drill_up();
    print_grid(&calendar.render(events));
    calendar.drill_up();
    print_grid(&calendar.render(events));

    println!("--- click a year, then a month, then drill into the day ---");
    calendar.click_year(2026);
    calendar.click_month(almanac_core::date::YearMonth::new(2026, 3).expect("valid month"));
    calendar.set_anchor(date(2026, 3, 14));
    calendar.drill_down(ViewGranularity::Day);
    print_grid(&calendar.render(events));

    println!("--- unwind the drill history ---");
    calendar.back();
    calendar.back();
    calendar.back();
}

fn range_selection_walkthrough(events: &[Event]) {
    println!("--- range selection with a 7-day limit ---");
    let mut calendar = Calendar::with_clock(
        CalendarConfig::default()
            .initial_anchor(date(2025, 6, 1))
            .selection_mode(SelectionMode::Range)
            .range_limit(7),
        Box::new(FixedClock(date(2025, 6, 15))),
    )
    .expect("demo configuration is valid");
    calendar.set_callbacks(callbacks());

    calendar.click_date(date(2025, 6, 3), events);
    calendar.hover_date(date(2025, 6, 8));
    print_grid(&calendar.render(events));

    // Over the limit: rejected, the pending start survives.
    calendar.click_date(date(2025, 6, 20), events);
    calendar.click_date(date(2025, 6, 8), events);
    print_grid(&calendar.render(events));
}

fn double_view_walkthrough(events: &[Event]) {
    println!("--- double view, Monday week start, dd/mm/yyyy ---");
    let mut calendar = Calendar::with_clock(
        CalendarConfig::default()
            .initial_anchor(date(2025, 6, 15))
            .week_start_day(1)
            .date_format("dd/mm/yyyy")
            .show_double_view(true)
            .show_fixed_number_of_weeks(true),
        Box::new(FixedClock(date(2025, 6, 15))),
    )
    .expect("demo configuration is valid");
    println!(
        "today formats as {}",
        calendar.format_date(date(2025, 6, 15))
    );
    calendar.set_callbacks(callbacks());
    calendar.click_event(&events[2]);
    print_grid(&calendar.render(events));
}

fn custom_policy_walkthrough(events: &[Event]) {
    println!("--- custom disabled predicate: weekends only ---");
    let mut calendar = Calendar::with_clock(
        CalendarConfig::default()
            .initial_anchor(date(2025, 6, 15))
            .disable_date(Arc::new(|d: CalendarDate| {
                use almanac_core::date::Weekday;
                matches!(d.weekday(), Weekday::Saturday | Weekday::Sunday)
            })),
        Box::new(FixedClock(date(2025, 6, 15))),
    )
    .expect("demo configuration is valid");
    calendar.set_callbacks(callbacks());
    calendar.click_date(date(2025, 6, 14), events); // Saturday, ignored
    calendar.click_date(date(2025, 6, 16), events); // Monday, selected
    print_grid(&calendar.render(events));
}

fn main() {
    init_logging();
    let events = sample_events();
    info!(events = events.len(), "almanac walkthrough starting");
    single_selection_walkthrough(&events);
    range_selection_walkthrough(&events);
    double_view_walkthrough(&events);
    custom_policy_walkthrough(&events);
    info!("almanac walkthrough finished");
}
