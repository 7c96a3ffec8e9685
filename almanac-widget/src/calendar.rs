//! The calendar widget controller.
//!
//! Owns the view state machine, the selection engine, the validated
//! configuration, and the callback surface. Every operation runs
//! synchronously inside the host's event callback and fires each callback
//! at most once per user action.

use std::sync::Arc;

use tracing::debug;

use almanac_core::date::{CalendarDate, Clock, DateFormat, SystemClock, Weekday, YearMonth};
use almanac_core::selection::{SelectOutcome, SelectionState, SelectionValue};
use almanac_core::view::{NavDirection, NavStride, ViewGranularity, ViewState};

use crate::config::{CalendarConfig, ResolvedConfig};
use crate::error::ConfigError;
use crate::event::{Event, events_on};
use crate::policy::DisabledPolicy;
use crate::render::{
    DayRenderer, DecadeRenderer, GridModel, GridRenderer, MonthRenderer, RenderContext,
    YearRenderer,
};

/// Keys the widget reacts to.
///
/// Keyboard navigation applies to the month view: the arrows move the
/// anchor by one day or one week, Enter selects the anchor, and Backspace
/// unwinds the last drill-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Move the anchor one day back.
    ArrowLeft,
    /// Move the anchor one day forward.
    ArrowRight,
    /// Move the anchor one week back.
    ArrowUp,
    /// Move the anchor one week forward.
    ArrowDown,
    /// Select the anchor date.
    Enter,
    /// Navigate back to the previous view.
    Backspace,
}

/// Callbacks the widget invokes, each at most once per user action.
#[derive(Clone, Default)]
pub struct CalendarCallbacks {
    on_change: Option<Arc<dyn Fn(&SelectionValue) + Send + Sync>>,
    on_active_start_date_change: Option<Arc<dyn Fn(CalendarDate) + Send + Sync>>,
    on_view_change: Option<Arc<dyn Fn(ViewGranularity) + Send + Sync>>,
    on_range_hover: Option<Arc<dyn Fn(CalendarDate, Option<CalendarDate>) + Send + Sync>>,
    on_drill_down: Option<Arc<dyn Fn() + Send + Sync>>,
    on_drill_up: Option<Arc<dyn Fn() + Send + Sync>>,
    on_click_month: Option<Arc<dyn Fn(YearMonth) + Send + Sync>>,
    on_click_week_number: Option<Arc<dyn Fn(u32) + Send + Sync>>,
    on_click_event: Option<Arc<dyn Fn(&Event, CalendarDate) + Send + Sync>>,
}

impl CalendarCallbacks {
    /// Notified when the selection changes.
    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(&SelectionValue) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(f));
        self
    }

    /// Notified when the anchor date moves.
    pub fn on_active_start_date_change<F>(mut self, f: F) -> Self
    where
        F: Fn(CalendarDate) + Send + Sync + 'static,
    {
        self.on_active_start_date_change = Some(Arc::new(f));
        self
    }

    /// Notified when the displayed granularity changes.
    pub fn on_view_change<F>(mut self, f: F) -> Self
    where
        F: Fn(ViewGranularity) + Send + Sync + 'static,
    {
        self.on_view_change = Some(Arc::new(f));
        self
    }

    /// Notified with `(start, Some(end))` while hovering a tentative range
    /// end, and `(start, None)` when the hover leaves the grid.
    pub fn on_range_hover<F>(mut self, f: F) -> Self
    where
        F: Fn(CalendarDate, Option<CalendarDate>) + Send + Sync + 'static,
    {
        self.on_range_hover = Some(Arc::new(f));
        self
    }

    /// Notified after a drill-down transition.
    pub fn on_drill_down<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_drill_down = Some(Arc::new(f));
        self
    }

    /// Notified after a drill-up transition.
    pub fn on_drill_up<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_drill_up = Some(Arc::new(f));
        self
    }

    /// Notified when a month cell is clicked in the year view.
    pub fn on_click_month<F>(mut self, f: F) -> Self
    where
        F: Fn(YearMonth) + Send + Sync + 'static,
    {
        self.on_click_month = Some(Arc::new(f));
        self
    }

    /// Notified when a week number is clicked in the month view.
    pub fn on_click_week_number<F>(mut self, f: F) -> Self
    where
        F: Fn(u32) + Send + Sync + 'static,
    {
        self.on_click_week_number = Some(Arc::new(f));
        self
    }

    /// Notified when an event annotation is clicked.
    pub fn on_click_event<F>(mut self, f: F) -> Self
    where
        F: Fn(&Event, CalendarDate) + Send + Sync + 'static,
    {
        self.on_click_event = Some(Arc::new(f));
        self
    }
}

/// Per-granularity renderer overrides.
#[derive(Clone, Default)]
pub struct RendererOverrides {
    /// Replaces the built-in day renderer.
    pub day: Option<Arc<dyn GridRenderer>>,
    /// Replaces the built-in month renderer.
    pub month: Option<Arc<dyn GridRenderer>>,
    /// Replaces the built-in year renderer.
    pub year: Option<Arc<dyn GridRenderer>>,
    /// Replaces the built-in decade renderer.
    pub decade: Option<Arc<dyn GridRenderer>>,
}

/// The headless calendar widget.
pub struct Calendar {
    resolved: ResolvedConfig,
    policy: DisabledPolicy,
    view: ViewState,
    selection: SelectionState,
    clock: Box<dyn Clock>,
    callbacks: CalendarCallbacks,
    overrides: RendererOverrides,
}

impl Calendar {
    /// Builds a calendar from a configuration, using the system clock.
    ///
    /// Refuses construction for an unsupported calendar type; corrects
    /// every recoverable configuration problem with a warning.
    pub fn new(config: CalendarConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, Box::new(SystemClock))
    }

    /// Builds a calendar with an injected clock, for hosts and tests that
    /// need a pinned "today".
    pub fn with_clock(config: CalendarConfig, clock: Box<dyn Clock>) -> Result<Self, ConfigError> {
        let resolved = config.resolve()?;
        let anchor = CalendarDate::sanitize(resolved.config.initial_anchor, clock.as_ref());
        let view = ViewState::new(resolved.initial_view, anchor);
        let selection = SelectionState::new(
            resolved.config.selection_mode,
            resolved.config.range_limit,
        );
        let policy = DisabledPolicy {
            min_date: resolved.config.min_date,
            max_date: resolved.config.max_date,
            disable_before_today: resolved.config.disable_before_today,
            disabled_dates: resolved.config.disabled_dates.clone(),
            disabled_months: resolved.config.disabled_months.clone(),
            disabled_years: resolved.config.disabled_years.clone(),
            disable_date: resolved.config.disable_date.clone(),
            disable_year: resolved.config.disable_year.clone(),
        };
        Ok(Self {
            resolved,
            policy,
            view,
            selection,
            clock,
            callbacks: CalendarCallbacks::default(),
            overrides: RendererOverrides::default(),
        })
    }

    /// Installs the callback surface.
    pub fn set_callbacks(&mut self, callbacks: CalendarCallbacks) {
        self.callbacks = callbacks;
    }

    /// Installs per-granularity renderer overrides.
    pub fn set_renderer_overrides(&mut self, overrides: RendererOverrides) {
        self.overrides = overrides;
    }

    /// Returns the displayed granularity.
    pub fn granularity(&self) -> ViewGranularity {
        self.view.granularity()
    }

    /// Returns the anchor date.
    pub fn anchor(&self) -> CalendarDate {
        self.view.anchor()
    }

    /// Returns the current selection, if any.
    pub fn selection(&self) -> Option<SelectionValue> {
        self.selection.value()
    }

    /// Returns how many drill-down steps "back" can unwind.
    pub fn history_depth(&self) -> usize {
        self.view.history_depth()
    }

    /// Returns the resolved date format.
    pub fn date_format(&self) -> DateFormat {
        self.resolved.date_format
    }

    /// Returns the resolved first day of the week.
    pub fn week_start(&self) -> Weekday {
        self.resolved.week_start
    }

    /// Formats a date with the configured pattern.
    pub fn format_date(&self, date: CalendarDate) -> String {
        self.resolved.date_format.format(date)
    }

    /// True when the date is disabled under the configured policy.
    pub fn is_date_disabled(&self, date: CalendarDate) -> bool {
        self.policy.is_date_disabled(date, self.clock.today())
    }

    /// Handles a click on a day cell.
    ///
    /// Disabled dates are ignored. A selection change fires `on_change`;
    /// when the day carries events and `select_on_event_click` is set,
    /// each of them is forwarded to `on_click_event`.
    pub fn click_date(&mut self, date: CalendarDate, events: &[Event]) {
        if self.is_date_disabled(date) {
            debug!(date = %self.format_date(date), "click on disabled date ignored");
            return;
        }
        if let SelectOutcome::Changed(value) = self.selection.select(date) {
            if let Some(on_change) = &self.callbacks.on_change {
                on_change(&value);
            }
            if self.resolved.config.select_on_event_click
                && let Some(on_click_event) = &self.callbacks.on_click_event
            {
                for event in events_on(events, date) {
                    on_click_event(event, date);
                }
            }
        }
    }

    /// Handles a click on a month cell in the year view: moves the anchor
    /// to the month's first day and drills down to the month view.
    pub fn click_month(&mut self, month: YearMonth) {
        if self
            .policy
            .is_month_disabled(month.year(), month.month(), self.clock.today())
        {
            return;
        }
        self.change_anchor(month.first_day());
        if let Some(on_click_month) = &self.callbacks.on_click_month {
            on_click_month(month);
        }
        self.drill_down(ViewGranularity::Month);
    }

    /// Handles a click on a year cell in the decade view: moves the anchor
    /// to January 1 and drills down to the year view.
    pub fn click_year(&mut self, year: i32) {
        if self.policy.is_year_disabled(year, self.clock.today()) {
            return;
        }
        if let Some(first) = CalendarDate::new(year, 1, 1) {
            self.change_anchor(first);
        }
        self.drill_down(ViewGranularity::Year);
    }

    /// Forwards a week-number click.
    pub fn click_week_number(&self, week: u32) {
        if let Some(on_click_week_number) = &self.callbacks.on_click_week_number {
            on_click_week_number(week);
        }
    }

    /// Handles a click on an event annotation: forwards it, and selects
    /// the event's day when `select_on_event_click` is set.
    pub fn click_event(&mut self, event: &Event) {
        if self.resolved.config.select_on_event_click
            && !self.is_date_disabled(event.date)
            && let SelectOutcome::Changed(value) = self.selection.select(event.date)
            && let Some(on_change) = &self.callbacks.on_change
        {
            on_change(&value);
        }
        if let Some(on_click_event) = &self.callbacks.on_click_event {
            on_click_event(event, event.date);
        }
    }

    /// Handles pointer hover over a day cell.
    ///
    /// Updates the range preview while a range start is pending; the hover
    /// callback is skipped when the hovered date is disabled.
    pub fn hover_date(&mut self, date: CalendarDate) {
        if let Some((start, end)) = self.selection.hover_preview(date)
            && !self.is_date_disabled(end)
            && let Some(on_range_hover) = &self.callbacks.on_range_hover
        {
            on_range_hover(start, Some(end));
        }
    }

    /// Handles the pointer leaving the grid: drops the preview and reports
    /// the cleared hover.
    pub fn clear_hover(&mut self) {
        if let Some(start) = self.selection.clear_hover()
            && let Some(on_range_hover) = &self.callbacks.on_range_hover
        {
            on_range_hover(start, None);
        }
    }

    /// Drills to the given granularity, recording the current one for
    /// "back". No-op outside the configured bounds or disabled views.
    pub fn drill_down(&mut self, target: ViewGranularity) {
        if self.view.drill_to(target, &self.resolved.bounds) {
            self.notify_view_changed();
            if let Some(on_drill_down) = &self.callbacks.on_drill_down {
                on_drill_down();
            }
        }
    }

    /// Transitions to the next coarser granularity, independent of the
    /// history. No-op at the coarsest bound.
    pub fn drill_up(&mut self) {
        if self.view.drill_up(&self.resolved.bounds) {
            self.notify_view_changed();
            if let Some(on_drill_up) = &self.callbacks.on_drill_up {
                on_drill_up();
            }
        }
    }

    /// Restores the granularity recorded by the last drill-down. No-op
    /// when the history is empty.
    pub fn back(&mut self) {
        if self.view.back() {
            self.notify_view_changed();
        }
    }

    /// Shifts the anchor by one arrow-navigation step of the displayed
    /// granularity.
    pub fn navigate(&mut self, direction: NavDirection, stride: NavStride) {
        if let Some(anchor) = self.view.navigate(direction, stride)
            && let Some(on_anchor) = &self.callbacks.on_active_start_date_change
        {
            on_anchor(anchor);
        }
    }

    /// Replaces the anchor date.
    pub fn set_anchor(&mut self, date: CalendarDate) {
        self.change_anchor(date);
    }

    /// Handles a key press. Keyboard navigation applies to the month view
    /// only, mirroring pointer behavior elsewhere.
    pub fn handle_key(&mut self, key: Key, events: &[Event]) {
        if self.view.granularity() != ViewGranularity::Month {
            return;
        }
        match key {
            Key::ArrowLeft => self.change_anchor(self.view.anchor().add_days(-1)),
            Key::ArrowRight => self.change_anchor(self.view.anchor().add_days(1)),
            Key::ArrowUp => self.change_anchor(self.view.anchor().add_days(-7)),
            Key::ArrowDown => self.change_anchor(self.view.anchor().add_days(7)),
            Key::Enter => {
                let anchor = self.view.anchor();
                self.click_date(anchor, events);
            }
            Key::Backspace => self.back(),
        }
    }

    /// Projects the current state onto a presentational grid, using the
    /// host override for the displayed granularity when one is installed.
    pub fn render(&self, events: &[Event]) -> GridModel {
        let granularity = self.view.granularity();
        let mut model = self.render_at(granularity, self.view.anchor(), events);
        if granularity == ViewGranularity::Month && self.resolved.config.show_double_view {
            let next_month = self.view.anchor().add_months_clamped(1);
            let secondary = self.render_at(granularity, next_month, events);
            model.secondary = Some(Box::new(secondary));
        }
        model
    }

    fn render_at(
        &self,
        granularity: ViewGranularity,
        anchor: CalendarDate,
        events: &[Event],
    ) -> GridModel {
        let config = &self.resolved.config;
        let ctx = RenderContext {
            granularity,
            anchor,
            today: self.clock.today(),
            selection: &self.selection,
            policy: &self.policy,
            events,
            week_start: self.resolved.week_start,
            show_week_numbers: config.show_week_numbers,
            show_neighboring_month: config.show_neighboring_month,
            show_neighboring_decade: config.show_neighboring_decade,
            fixed_six_weeks: config.show_fixed_number_of_weeks,
            locale: &config.locale,
        };
        match granularity {
            ViewGranularity::Day => match &self.overrides.day {
                Some(renderer) => renderer.render(&ctx),
                None => DayRenderer.render(&ctx),
            },
            ViewGranularity::Month => match &self.overrides.month {
                Some(renderer) => renderer.render(&ctx),
                None => MonthRenderer.render(&ctx),
            },
            ViewGranularity::Year => match &self.overrides.year {
                Some(renderer) => renderer.render(&ctx),
                None => YearRenderer.render(&ctx),
            },
            ViewGranularity::Decade => match &self.overrides.decade {
                Some(renderer) => renderer.render(&ctx),
                None => DecadeRenderer.render(&ctx),
            },
        }
    }

    fn change_anchor(&mut self, anchor: CalendarDate) {
        self.view.set_anchor(anchor);
        if let Some(on_anchor) = &self.callbacks.on_active_start_date_change {
            on_anchor(anchor);
        }
    }

    fn notify_view_changed(&self) {
        if let Some(on_view_change) = &self.callbacks.on_view_change {
            on_view_change(self.view.granularity());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use almanac_core::date::FixedClock;
    use almanac_core::selection::SelectionMode;

    use super::*;

    fn date(y: i32, m: u8, d: u8) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    fn calendar(config: CalendarConfig) -> Calendar {
        Calendar::with_clock(config, Box::new(FixedClock(date(2025, 6, 15))))
            .expect("test configuration is valid")
    }

    #[test]
    fn test_unsupported_calendar_refuses_construction() {
        let result = Calendar::new(CalendarConfig::default().calendar_type("lunar"));
        assert!(matches!(
            result.err(),
            Some(ConfigError::UnsupportedCalendarType(_))
        ));
    }

    #[test]
    fn test_initial_anchor_defaults_to_today() {
        let cal = calendar(CalendarConfig::default());
        assert_eq!(cal.anchor(), date(2025, 6, 15));
        assert_eq!(cal.granularity(), ViewGranularity::Month);
    }

    #[test]
    fn test_single_selection_fires_on_change_once() {
        let mut cal = calendar(CalendarConfig::default());
        let fired = Arc::new(AtomicUsize::new(0));
        let seen = fired.clone();
        cal.set_callbacks(CalendarCallbacks::default().on_change(move |value| {
            assert!(matches!(value, SelectionValue::Single(_)));
            seen.fetch_add(1, Ordering::SeqCst);
        }));
        cal.click_date(date(2025, 6, 10), &[]);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert_eq!(cal.selection(), Some(SelectionValue::Single(date(2025, 6, 10))));
    }

    #[test]
    fn test_range_limit_rejection_fires_no_change() {
        let mut cal = calendar(
            CalendarConfig::default()
                .selection_mode(SelectionMode::Range)
                .range_limit(5),
        );
        let fired = Arc::new(AtomicUsize::new(0));
        let seen = fired.clone();
        cal.set_callbacks(
            CalendarCallbacks::default().on_change(move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            }),
        );
        cal.click_date(date(2025, 6, 1), &[]);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        // Ten days out: over the limit, ignored.
        cal.click_date(date(2025, 6, 10), &[]);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert_eq!(
            cal.selection(),
            Some(SelectionValue::PartialRange(date(2025, 6, 1)))
        );
    }

    #[test]
    fn test_disabled_date_click_is_inert() {
        let mut cal = calendar(
            CalendarConfig::default().min_date(date(2025, 6, 10)),
        );
        let fired = Arc::new(AtomicUsize::new(0));
        let seen = fired.clone();
        cal.set_callbacks(
            CalendarCallbacks::default().on_change(move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            }),
        );
        cal.click_date(date(2025, 6, 5), &[]);
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert_eq!(cal.selection(), None);
    }

    #[test]
    fn test_predicate_overrides_min_max_window() {
        let mut cal = calendar(
            CalendarConfig::default()
                .min_date(date(2025, 6, 10))
                .max_date(date(2025, 6, 20))
                .disable_date(Arc::new(|d: CalendarDate| d.day() == 15)),
        );
        // Outside the window but force-enabled by the predicate.
        cal.click_date(date(2025, 6, 1), &[]);
        assert_eq!(cal.selection(), Some(SelectionValue::Single(date(2025, 6, 1))));
        // Inside the window but force-disabled.
        cal.click_date(date(2025, 6, 15), &[]);
        assert_eq!(cal.selection(), Some(SelectionValue::Single(date(2025, 6, 1))));
    }

    #[test]
    fn test_drill_down_rejected_by_max_detail() {
        let mut cal = calendar(
            CalendarConfig::default().max_detail(ViewGranularity::Month),
        );
        let fired = Arc::new(AtomicUsize::new(0));
        let seen = fired.clone();
        cal.set_callbacks(
            CalendarCallbacks::default().on_view_change(move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            }),
        );
        cal.drill_down(ViewGranularity::Day);
        assert_eq!(cal.granularity(), ViewGranularity::Month);
        assert_eq!(cal.history_depth(), 0);
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_back_unwinds_drill_history() {
        let mut cal = calendar(
            CalendarConfig::default().min_detail(ViewGranularity::Decade),
        );
        cal.drill_down(ViewGranularity::Year);
        cal.drill_down(ViewGranularity::Decade);
        assert_eq!(cal.granularity(), ViewGranularity::Decade);

        cal.back();
        assert_eq!(cal.granularity(), ViewGranularity::Year);
        cal.back();
        assert_eq!(cal.granularity(), ViewGranularity::Month);
        cal.back();
        assert_eq!(cal.granularity(), ViewGranularity::Month);
    }

    #[test]
    fn test_click_month_moves_anchor_and_drills() {
        let mut cal = calendar(CalendarConfig::default());
        cal.drill_down(ViewGranularity::Year);
        assert_eq!(cal.granularity(), ViewGranularity::Year);

        let drills = Arc::new(AtomicUsize::new(0));
        let seen = drills.clone();
        cal.set_callbacks(
            CalendarCallbacks::default().on_drill_down(move || {
                seen.fetch_add(1, Ordering::SeqCst);
            }),
        );
        cal.click_month(YearMonth::new(2025, 9).expect("valid month"));
        assert_eq!(cal.granularity(), ViewGranularity::Month);
        assert_eq!(cal.anchor(), date(2025, 9, 1));
        assert_eq!(drills.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_keyboard_navigation_moves_anchor() {
        let mut cal = calendar(CalendarConfig::default());
        cal.handle_key(Key::ArrowRight, &[]);
        assert_eq!(cal.anchor(), date(2025, 6, 16));
        cal.handle_key(Key::ArrowUp, &[]);
        assert_eq!(cal.anchor(), date(2025, 6, 9));
        cal.handle_key(Key::Enter, &[]);
        assert_eq!(cal.selection(), Some(SelectionValue::Single(date(2025, 6, 9))));
    }

    #[test]
    fn test_keyboard_is_inert_outside_month_view() {
        let mut cal = calendar(CalendarConfig::default());
        cal.drill_down(ViewGranularity::Year);
        let anchor = cal.anchor();
        cal.handle_key(Key::ArrowRight, &[]);
        assert_eq!(cal.anchor(), anchor);
    }

    #[test]
    fn test_hover_reports_preview_and_clear() {
        let mut cal = calendar(
            CalendarConfig::default().selection_mode(SelectionMode::Range),
        );
        let hovers = Arc::new(std::sync::Mutex::new(Vec::new()));
        let seen = hovers.clone();
        cal.set_callbacks(CalendarCallbacks::default().on_range_hover(
            move |start, end| {
                seen.lock().expect("lock").push((start, end));
            },
        ));
        cal.click_date(date(2025, 6, 5), &[]);
        cal.hover_date(date(2025, 6, 9));
        cal.clear_hover();
        let log = hovers.lock().expect("lock");
        assert_eq!(
            *log,
            vec![
                (date(2025, 6, 5), Some(date(2025, 6, 9))),
                (date(2025, 6, 5), None),
            ]
        );
    }

    #[test]
    fn test_hover_on_disabled_date_skips_callback() {
        let mut cal = calendar(
            CalendarConfig::default()
                .selection_mode(SelectionMode::Range)
                .max_date(date(2025, 6, 20)),
        );
        let fired = Arc::new(AtomicUsize::new(0));
        let seen = fired.clone();
        cal.set_callbacks(
            CalendarCallbacks::default().on_range_hover(move |_, _| {
                seen.fetch_add(1, Ordering::SeqCst);
            }),
        );
        cal.click_date(date(2025, 6, 5), &[]);
        cal.hover_date(date(2025, 6, 25));
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_event_click_forwarding() {
        let mut cal = calendar(CalendarConfig::default());
        let day = date(2025, 6, 10);
        let events = vec![
            Event::new(day, "standup", "meeting"),
            Event::new(day, "dentist", "personal"),
        ];
        let titles = Arc::new(std::sync::Mutex::new(Vec::new()));
        let seen = titles.clone();
        cal.set_callbacks(CalendarCallbacks::default().on_click_event(
            move |event, clicked| {
                assert_eq!(clicked, day);
                seen.lock().expect("lock").push(event.title.clone());
            },
        ));
        cal.click_date(day, &events);
        assert_eq!(*titles.lock().expect("lock"), vec!["standup", "dentist"]);
    }

    #[test]
    fn test_navigation_arrows_fire_anchor_callback() {
        let mut cal = calendar(CalendarConfig::default());
        let anchors = Arc::new(std::sync::Mutex::new(Vec::new()));
        let seen = anchors.clone();
        cal.set_callbacks(
            CalendarCallbacks::default().on_active_start_date_change(move |anchor| {
                seen.lock().expect("lock").push(anchor);
            }),
        );
        cal.navigate(NavDirection::Next, NavStride::Period);
        cal.navigate(NavDirection::Previous, NavStride::Jump);
        assert_eq!(
            *anchors.lock().expect("lock"),
            vec![date(2025, 7, 15), date(2024, 7, 15)]
        );
    }

    #[test]
    fn test_render_respects_override() {
        struct Flat;
        impl GridRenderer for Flat {
            fn render(&self, ctx: &RenderContext<'_>) -> GridModel {
                GridModel {
                    granularity: ctx.granularity,
                    title: "override".to_string(),
                    weekday_labels: Vec::new(),
                    week_numbers: Vec::new(),
                    cells: Vec::new(),
                    secondary: None,
                }
            }
        }

        let mut cal = calendar(CalendarConfig::default());
        cal.set_renderer_overrides(RendererOverrides {
            month: Some(Arc::new(Flat)),
            ..RendererOverrides::default()
        });
        assert_eq!(cal.render(&[]).title, "override");

        cal.drill_down(ViewGranularity::Year);
        // The year view still uses the built-in renderer.
        assert_eq!(cal.render(&[]).title, "2025");
    }

    #[test]
    fn test_double_view_renders_following_month() {
        let mut cal = calendar(CalendarConfig::default().show_double_view(true));
        let model = cal.render(&[]);
        let secondary = model.secondary.expect("double view");
        assert_eq!(model.title, "June 2025");
        assert_eq!(secondary.title, "July 2025");

        cal.drill_down(ViewGranularity::Year);
        assert!(cal.render(&[]).secondary.is_none());
    }

    #[test]
    fn test_drill_up_fires_view_change_and_drill_up() {
        let mut cal = calendar(CalendarConfig::default());
        let log = Arc::new(std::sync::Mutex::new(Vec::new()));
        let views = log.clone();
        let ups = log.clone();
        cal.set_callbacks(
            CalendarCallbacks::default()
                .on_view_change(move |granularity| {
                    views.lock().expect("lock").push(granularity.name());
                })
                .on_drill_up(move || {
                    ups.lock().expect("lock").push("up");
                }),
        );
        cal.drill_up();
        assert_eq!(*log.lock().expect("lock"), vec!["year", "up"]);
        // Already at min_detail (year by default): a second drill-up is inert.
        cal.drill_up();
        assert_eq!(log.lock().expect("lock").len(), 2);
    }
}
