//! Core calendar logic for the almanac widget.
//!
//! Three layers, leaves first:
//!
//! - [`date`] — civil dates, day arithmetic, ISO week numbers, literal
//!   date-format patterns, and the injectable [`date::Clock`] capability.
//! - [`grid`] — pure projections of an anchor period onto month, year, and
//!   decade cell sequences.
//! - [`view`] / [`selection`] — the drill-down view state machine and the
//!   single/range selection engine.
//!
//! Everything is synchronous and free of interior mutability; state lives
//! in plain owned values mutated by the widget layer in response to input
//! events.
//!
//! # Example
//!
//! ```
//! use almanac_core::date::{CalendarDate, Weekday, YearMonth};
//! use almanac_core::grid::build_month_grid;
//!
//! let june = YearMonth::new(2025, 6).unwrap();
//! let grid = build_month_grid(june, Weekday::Sunday, false, true);
//! assert_eq!(grid.len() % 7, 0);
//! assert_eq!(grid[0].date(), CalendarDate::new(2025, 6, 1));
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod date;
pub mod grid;
pub mod selection;
pub mod view;

pub use date::{CalendarDate, Clock, DateFormat, FixedClock, SystemClock, Weekday, YearMonth};
pub use grid::{DayCell, MonthPeriod, YearCell, build_month_grid, decade_years, year_months};
pub use selection::{
    SelectOutcome, SelectionClass, SelectionMode, SelectionState, SelectionValue,
};
pub use view::{DrillBounds, NavDirection, NavStride, ViewGranularity, ViewState};
