//! Grid projection.
//!
//! Each granularity has a renderer that maps the widget state onto a
//! presentational [`GridModel`], derived fresh on every call and never
//! mutated in place. A host can override the renderer per granularity; an
//! override receives exactly the [`RenderContext`] the built-in one would.

use almanac_core::date::{
    CalendarDate, Weekday, format_long_date, month_name, month_short_name,
};
use almanac_core::grid::{DayCell, build_month_grid, decade_start, decade_years, year_months};
use almanac_core::selection::{SelectionClass, SelectionState};
use almanac_core::view::ViewGranularity;

use crate::event::{Event, events_on};
use crate::policy::DisabledPolicy;

/// Snapshot of everything a renderer may read.
pub struct RenderContext<'a> {
    /// Granularity being projected.
    pub granularity: ViewGranularity,
    /// Anchor date the view is centered on.
    pub anchor: CalendarDate,
    /// The current day, for today-highlighting and the disabled policy.
    pub today: CalendarDate,
    /// Live selection state, for per-cell classification.
    pub selection: &'a SelectionState,
    /// Disabled rules.
    pub policy: &'a DisabledPolicy,
    /// Externally owned event list.
    pub events: &'a [Event],
    /// First day of the week for the month grid.
    pub week_start: Weekday,
    /// Whether the month view carries an ISO week-number column.
    pub show_week_numbers: bool,
    /// Whether neighboring-month days are shown.
    pub show_neighboring_month: bool,
    /// Whether neighboring-decade years are shown.
    pub show_neighboring_decade: bool,
    /// Whether the month view always has six rows.
    pub fixed_six_weeks: bool,
    /// Locale tag, passed through untouched for host-side formatting.
    pub locale: &'a str,
}

/// One presentational cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarCell {
    /// The date the cell stands for; `None` for placeholder slots.
    pub date: Option<CalendarDate>,
    /// Whether the cell belongs to the anchor period (month, decade) as
    /// opposed to a neighboring cell shown for grid completeness.
    pub in_current_period: bool,
    /// Whether interaction with the cell is rejected.
    pub disabled: bool,
    /// Whether the cell is today (day cells only).
    pub today: bool,
    /// Visual selection classification.
    pub selection: SelectionClass,
    /// Display label (day number, month name, year).
    pub label: String,
    /// Events falling on the cell's date.
    pub events: Vec<Event>,
}

impl CalendarCell {
    fn placeholder() -> Self {
        Self {
            date: None,
            in_current_period: false,
            disabled: true,
            today: false,
            selection: SelectionClass::None,
            label: String::new(),
            events: Vec::new(),
        }
    }
}

/// A rendered view: title, optional label rows, and the cell sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridModel {
    /// Granularity this model was projected from.
    pub granularity: ViewGranularity,
    /// Header title ("March 2025", "2025", "2020 - 2029", or a long date).
    pub title: String,
    /// Weekday labels in week-start order; empty outside the month view.
    pub weekday_labels: Vec<String>,
    /// ISO week number per row, `None` for rows made entirely of
    /// placeholders; empty unless enabled in the month view.
    pub week_numbers: Vec<Option<u32>>,
    /// The cells, in row-major order.
    pub cells: Vec<CalendarCell>,
    /// Second month grid when double view is enabled.
    pub secondary: Option<Box<GridModel>>,
}

/// Strategy interface for projecting a view.
///
/// The built-in renderers implement this; a host-supplied override
/// replaces the built-in one for its granularity entirely.
pub trait GridRenderer: Send + Sync {
    /// Projects the context onto a presentational grid.
    fn render(&self, ctx: &RenderContext<'_>) -> GridModel;
}

/// Built-in month view: a week-aligned day grid.
pub struct MonthRenderer;

impl GridRenderer for MonthRenderer {
    fn render(&self, ctx: &RenderContext<'_>) -> GridModel {
        let month = ctx.anchor.year_month();
        let grid = build_month_grid(
            month,
            ctx.week_start,
            ctx.fixed_six_weeks,
            ctx.show_neighboring_month,
        );

        let cells: Vec<CalendarCell> = grid
            .iter()
            .map(|slot| match slot {
                DayCell::Day { date, .. } => CalendarCell {
                    date: Some(*date),
                    in_current_period: slot.is_current_month(),
                    disabled: ctx.policy.is_date_disabled(*date, ctx.today),
                    today: *date == ctx.today,
                    selection: ctx.selection.classify(*date),
                    label: date.day().to_string(),
                    events: events_on(ctx.events, *date).into_iter().cloned().collect(),
                },
                DayCell::Placeholder => CalendarCell::placeholder(),
            })
            .collect();

        let weekday_labels = (0..7)
            .map(|offset| {
                Weekday::from_sunday_index(ctx.week_start.index_from_sunday() + offset)
                    .short_label()
                    .to_string()
            })
            .collect();

        let week_numbers = if ctx.show_week_numbers {
            cells
                .chunks(7)
                .map(|row| {
                    row.iter()
                        .find_map(|cell| cell.date)
                        .map(almanac_core::date::iso_week_number)
                })
                .collect()
        } else {
            Vec::new()
        };

        GridModel {
            granularity: ViewGranularity::Month,
            title: format!("{} {}", month_name(month.month()), month.year()),
            weekday_labels,
            week_numbers,
            cells,
            secondary: None,
        }
    }
}

/// Built-in year view: twelve month cells.
pub struct YearRenderer;

impl GridRenderer for YearRenderer {
    fn render(&self, ctx: &RenderContext<'_>) -> GridModel {
        let year = ctx.anchor.year();
        let cells = year_months(year)
            .into_iter()
            .map(|month| {
                let selection = if ctx.selection.touches_month(year, month.month()) {
                    SelectionClass::SelectedSingle
                } else {
                    SelectionClass::None
                };
                CalendarCell {
                    date: Some(month.first_day()),
                    in_current_period: true,
                    disabled: ctx.policy.is_month_disabled(year, month.month(), ctx.today),
                    today: ctx.today.year_month() == month,
                    selection,
                    label: month_short_name(month.month()).to_string(),
                    events: Vec::new(),
                }
            })
            .collect();

        GridModel {
            granularity: ViewGranularity::Year,
            title: year.to_string(),
            weekday_labels: Vec::new(),
            week_numbers: Vec::new(),
            cells,
            secondary: None,
        }
    }
}

/// Built-in decade view: ten year cells plus optional neighbors.
pub struct DecadeRenderer;

impl GridRenderer for DecadeRenderer {
    fn render(&self, ctx: &RenderContext<'_>) -> GridModel {
        let start = decade_start(ctx.anchor.year());
        let cells = decade_years(ctx.anchor.year(), ctx.show_neighboring_decade)
            .into_iter()
            .map(|year_cell| {
                let selection = if ctx.selection.touches_year(year_cell.year) {
                    SelectionClass::SelectedSingle
                } else {
                    SelectionClass::None
                };
                CalendarCell {
                    date: CalendarDate::new(year_cell.year, 1, 1),
                    in_current_period: year_cell.in_decade,
                    disabled: ctx.policy.is_year_disabled(year_cell.year, ctx.today),
                    today: ctx.today.year() == year_cell.year,
                    selection,
                    label: year_cell.year.to_string(),
                    events: Vec::new(),
                }
            })
            .collect();

        GridModel {
            granularity: ViewGranularity::Decade,
            title: format!("{} - {}", start, start + 9),
            weekday_labels: Vec::new(),
            week_numbers: Vec::new(),
            cells,
            secondary: None,
        }
    }
}

/// Built-in day view: one cell carrying the day's events.
pub struct DayRenderer;

impl GridRenderer for DayRenderer {
    fn render(&self, ctx: &RenderContext<'_>) -> GridModel {
        let date = ctx.anchor;
        let cell = CalendarCell {
            date: Some(date),
            in_current_period: true,
            disabled: ctx.policy.is_date_disabled(date, ctx.today),
            today: date == ctx.today,
            selection: ctx.selection.classify(date),
            label: date.day().to_string(),
            events: events_on(ctx.events, date).into_iter().cloned().collect(),
        };

        GridModel {
            granularity: ViewGranularity::Day,
            title: format_long_date(date),
            weekday_labels: Vec::new(),
            week_numbers: Vec::new(),
            cells: vec![cell],
            secondary: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_core::selection::SelectionMode;

    fn date(y: i32, m: u8, d: u8) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    fn ctx<'a>(
        granularity: ViewGranularity,
        anchor: CalendarDate,
        selection: &'a SelectionState,
        policy: &'a DisabledPolicy,
        events: &'a [Event],
    ) -> RenderContext<'a> {
        RenderContext {
            granularity,
            anchor,
            today: date(2025, 6, 15),
            selection,
            policy,
            events,
            week_start: Weekday::Sunday,
            show_week_numbers: false,
            show_neighboring_month: true,
            show_neighboring_decade: true,
            fixed_six_weeks: false,
            locale: "en-US",
        }
    }

    #[test]
    fn test_month_model_shape() {
        let selection = SelectionState::default();
        let policy = DisabledPolicy::default();
        let model = MonthRenderer.render(&ctx(
            ViewGranularity::Month,
            date(2025, 6, 15),
            &selection,
            &policy,
            &[],
        ));
        assert_eq!(model.title, "June 2025");
        assert_eq!(model.weekday_labels[0], "Sun");
        assert_eq!(model.cells.len(), 35);
        let today = model.cells.iter().find(|c| c.today).expect("today cell");
        assert_eq!(today.date, Some(date(2025, 6, 15)));
    }

    #[test]
    fn test_month_weekday_labels_rotate() {
        let selection = SelectionState::default();
        let policy = DisabledPolicy::default();
        let mut context = ctx(
            ViewGranularity::Month,
            date(2025, 6, 15),
            &selection,
            &policy,
            &[],
        );
        context.week_start = Weekday::Monday;
        let model = MonthRenderer.render(&context);
        assert_eq!(model.weekday_labels[0], "Mon");
        assert_eq!(model.weekday_labels[6], "Sun");
    }

    #[test]
    fn test_week_numbers_per_row() {
        let selection = SelectionState::default();
        let policy = DisabledPolicy::default();
        let mut context = ctx(
            ViewGranularity::Month,
            date(2024, 1, 10),
            &selection,
            &policy,
            &[],
        );
        context.show_week_numbers = true;
        let model = MonthRenderer.render(&context);
        assert_eq!(model.week_numbers.len(), model.cells.len() / 7);
        // The first row opens on 2023-12-31, still ISO week 52 of 2023;
        // the second row (Jan 7) is back in week 1 of 2024.
        assert_eq!(model.week_numbers[0], Some(52));
        assert_eq!(model.week_numbers[1], Some(1));
    }

    #[test]
    fn test_week_numbers_absent_for_placeholder_rows() {
        let selection = SelectionState::default();
        let policy = DisabledPolicy::default();
        let mut context = ctx(
            ViewGranularity::Month,
            date(2025, 6, 15),
            &selection,
            &policy,
            &[],
        );
        context.show_week_numbers = true;
        context.show_neighboring_month = false;
        context.fixed_six_weeks = true;
        let model = MonthRenderer.render(&context);
        // June 2025 fills five rows; the sixth is pure placeholders and
        // must not carry a fabricated week number.
        assert_eq!(model.week_numbers.len(), 6);
        assert_eq!(model.week_numbers[0], Some(22));
        assert!(model.week_numbers[4].is_some());
        assert_eq!(model.week_numbers[5], None);
    }

    #[test]
    fn test_month_cells_carry_events() {
        let selection = SelectionState::default();
        let policy = DisabledPolicy::default();
        let events = vec![Event::new(date(2025, 6, 10), "release", "work")];
        let model = MonthRenderer.render(&ctx(
            ViewGranularity::Month,
            date(2025, 6, 15),
            &selection,
            &policy,
            &events,
        ));
        let cell = model
            .cells
            .iter()
            .find(|c| c.date == Some(date(2025, 6, 10)))
            .expect("event day");
        assert_eq!(cell.events.len(), 1);
        assert_eq!(cell.events[0].title, "release");
    }

    #[test]
    fn test_year_model_marks_selected_month() {
        let mut selection = SelectionState::new(SelectionMode::Single, None);
        selection.select(date(2025, 4, 20));
        let policy = DisabledPolicy::default();
        let model = YearRenderer.render(&ctx(
            ViewGranularity::Year,
            date(2025, 6, 15),
            &selection,
            &policy,
            &[],
        ));
        assert_eq!(model.title, "2025");
        assert_eq!(model.cells.len(), 12);
        assert_eq!(model.cells[3].selection, SelectionClass::SelectedSingle);
        assert_eq!(model.cells[3].label, "Apr");
        assert_eq!(model.cells[4].selection, SelectionClass::None);
        assert!(model.cells[5].today);
    }

    #[test]
    fn test_decade_model_neighbors_and_title() {
        let selection = SelectionState::default();
        let policy = DisabledPolicy::default();
        let model = DecadeRenderer.render(&ctx(
            ViewGranularity::Decade,
            date(2025, 6, 15),
            &selection,
            &policy,
            &[],
        ));
        assert_eq!(model.title, "2020 - 2029");
        assert_eq!(model.cells.len(), 13);
        assert!(!model.cells[0].in_current_period);
        assert_eq!(model.cells[0].label, "2019");
        assert!(model.cells[1].in_current_period);
    }

    #[test]
    fn test_day_model_lists_events() {
        let selection = SelectionState::default();
        let policy = DisabledPolicy::default();
        let day = date(2025, 3, 5);
        let events = vec![
            Event::new(day, "standup", "meeting"),
            Event::new(day, "dentist", "personal"),
            Event::new(date(2025, 3, 6), "review", "meeting"),
        ];
        let model = DayRenderer.render(&ctx(
            ViewGranularity::Day,
            day,
            &selection,
            &policy,
            &events,
        ));
        assert_eq!(model.title, "Wednesday, March 5, 2025");
        assert_eq!(model.cells.len(), 1);
        assert_eq!(model.cells[0].events.len(), 2);
    }
}
