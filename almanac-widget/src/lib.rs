//! Headless drill-down calendar widget.
//!
//! The widget owns navigation and selection state and projects it onto
//! presentational grids; drawing those grids is the host's job. All
//! operations are synchronous and run inside the host's event callbacks.
//!
//! # Example
//!
//! ```
//! use almanac_core::date::{CalendarDate, FixedClock};
//! use almanac_widget::calendar::Calendar;
//! use almanac_widget::config::CalendarConfig;
//!
//! let today = CalendarDate::new(2025, 6, 15).unwrap();
//! let mut calendar = Calendar::with_clock(
//!     CalendarConfig::default(),
//!     Box::new(FixedClock(today)),
//! )
//! .expect("default configuration is valid");
//!
//! calendar.click_date(today, &[]);
//! let model = calendar.render(&[]);
//! assert_eq!(model.title, "June 2025");
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod calendar;
pub mod config;
pub mod error;
pub mod event;
pub mod policy;
pub mod render;

pub use calendar::{Calendar, CalendarCallbacks, Key, RendererOverrides};
pub use config::CalendarConfig;
pub use error::ConfigError;
pub use event::{Event, events_on};
pub use policy::{DatePredicate, DisabledPolicy, YearPredicate};
pub use render::{CalendarCell, GridModel, GridRenderer, RenderContext};
