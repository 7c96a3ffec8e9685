//! The drill-down view state machine.
//!
//! Tracks the displayed granularity, the anchor date the view is centered
//! on, and a bounded history of granularities visited by drill-down, which
//! "back" navigation unwinds in LIFO order.

use smallvec::SmallVec;
use tracing::debug;

use crate::date::CalendarDate;

/// How many drill-down steps "back" can unwind. Pushing past the bound
/// drops the oldest entry.
const HISTORY_LIMIT: usize = 16;

/// The calendar drill level being displayed.
///
/// Ordered by coarseness: `Day < Month < Year < Decade`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ViewGranularity {
    /// Single-day detail view.
    Day,
    /// Days of one month.
    Month,
    /// Months of one year.
    Year,
    /// Years of one decade.
    Decade,
}

impl ViewGranularity {
    /// Returns the next coarser granularity, or `None` at `Decade`.
    pub fn coarser(self) -> Option<Self> {
        match self {
            ViewGranularity::Day => Some(ViewGranularity::Month),
            ViewGranularity::Month => Some(ViewGranularity::Year),
            ViewGranularity::Year => Some(ViewGranularity::Decade),
            ViewGranularity::Decade => None,
        }
    }

    /// Returns the next finer granularity, or `None` at `Day`.
    pub fn finer(self) -> Option<Self> {
        match self {
            ViewGranularity::Day => None,
            ViewGranularity::Month => Some(ViewGranularity::Day),
            ViewGranularity::Year => Some(ViewGranularity::Month),
            ViewGranularity::Decade => Some(ViewGranularity::Year),
        }
    }

    /// Lowercase name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ViewGranularity::Day => "day",
            ViewGranularity::Month => "month",
            ViewGranularity::Year => "year",
            ViewGranularity::Decade => "decade",
        }
    }
}

/// Which granularities a view transition is allowed to land on.
///
/// `max_detail` is the finest permitted granularity and `min_detail` the
/// coarsest; `disabled_views` knocks out individual granularities inside
/// those bounds.
#[derive(Debug, Clone)]
pub struct DrillBounds {
    /// Finest granularity the widget may display.
    pub max_detail: ViewGranularity,
    /// Coarsest granularity the widget may display.
    pub min_detail: ViewGranularity,
    /// Granularities that can never be displayed.
    pub disabled_views: Vec<ViewGranularity>,
}

impl Default for DrillBounds {
    fn default() -> Self {
        Self {
            max_detail: ViewGranularity::Month,
            min_detail: ViewGranularity::Year,
            disabled_views: Vec::new(),
        }
    }
}

impl DrillBounds {
    /// True when a transition may land on `target`.
    pub fn allows(&self, target: ViewGranularity) -> bool {
        target >= self.max_detail
            && target <= self.min_detail
            && !self.disabled_views.contains(&target)
    }
}

/// Direction of an arrow-navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    /// Toward earlier dates.
    Previous,
    /// Toward later dates.
    Next,
}

/// Magnitude of an arrow-navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavStride {
    /// One period of the displayed granularity (a month in the month view,
    /// a year in the year view, a decade in the decade view).
    Period,
    /// The double-arrow jump: a year in the month view, a decade in the
    /// year view, a century in the decade view.
    Jump,
}

/// Displayed granularity, anchor date, and drill-down history.
#[derive(Debug, Clone)]
pub struct ViewState {
    granularity: ViewGranularity,
    anchor: CalendarDate,
    history: SmallVec<[ViewGranularity; 8]>,
}

impl ViewState {
    /// Creates a view state at the given granularity and anchor.
    pub fn new(granularity: ViewGranularity, anchor: CalendarDate) -> Self {
        Self {
            granularity,
            anchor,
            history: SmallVec::new(),
        }
    }

    /// Returns the displayed granularity.
    pub fn granularity(&self) -> ViewGranularity {
        self.granularity
    }

    /// Returns the anchor date.
    pub fn anchor(&self) -> CalendarDate {
        self.anchor
    }

    /// Returns the number of drill-down steps "back" can unwind.
    pub fn history_depth(&self) -> usize {
        self.history.len()
    }

    /// Replaces the anchor date.
    pub fn set_anchor(&mut self, anchor: CalendarDate) {
        self.anchor = anchor;
    }

    /// Transitions to `target`, recording the current granularity in the
    /// history. No-op when the bounds reject the target or it is already
    /// displayed; returns whether a transition happened.
    pub fn drill_to(&mut self, target: ViewGranularity, bounds: &DrillBounds) -> bool {
        if target == self.granularity || !bounds.allows(target) {
            debug!(target = target.name(), "drill rejected");
            return false;
        }
        if self.history.len() == HISTORY_LIMIT {
            self.history.remove(0);
        }
        self.history.push(self.granularity);
        self.granularity = target;
        true
    }

    /// Transitions to the next coarser granularity without touching the
    /// history. No-op at the coarsest bound; returns whether a transition
    /// happened.
    pub fn drill_up(&mut self, bounds: &DrillBounds) -> bool {
        let Some(coarser) = self.granularity.coarser() else {
            return false;
        };
        if !bounds.allows(coarser) {
            return false;
        }
        self.granularity = coarser;
        true
    }

    /// Pops the most recent history entry and restores it. No-op when the
    /// history is empty; returns whether a transition happened.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.granularity = previous;
                true
            }
            None => false,
        }
    }

    /// Shifts the anchor by one navigation step of the displayed
    /// granularity. Returns the new anchor, or `None` when the granularity
    /// has no arrow navigation (the day view).
    pub fn navigate(&mut self, direction: NavDirection, stride: NavStride) -> Option<CalendarDate> {
        let sign = match direction {
            NavDirection::Previous => -1,
            NavDirection::Next => 1,
        };
        let anchor = self.anchor;
        let next = match (self.granularity, stride) {
            (ViewGranularity::Day, _) => return None,
            (ViewGranularity::Month, NavStride::Period) => anchor.add_months_clamped(sign),
            (ViewGranularity::Month, NavStride::Jump) => anchor.add_years_clamped(sign),
            (ViewGranularity::Year, NavStride::Period) => anchor.add_years_clamped(sign),
            (ViewGranularity::Year, NavStride::Jump) => anchor.add_years_clamped(sign * 10),
            (ViewGranularity::Decade, NavStride::Period) => anchor.add_years_clamped(sign * 10),
            (ViewGranularity::Decade, NavStride::Jump) => anchor.add_years_clamped(sign * 100),
        };
        self.anchor = next;
        Some(next)
    }
}
