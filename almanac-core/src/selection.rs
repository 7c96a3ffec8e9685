//! Single and range date selection.
//!
//! Range selection is two-step: the first click records a pending start,
//! the second commits a sorted pair. While the start is pending, a hover
//! date drives a preview that is never committed. A configured range limit
//! silently rejects a second click whose day span exceeds it.

use tracing::debug;

use crate::date::CalendarDate;

/// Whether the widget selects one date or a date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// One date at a time.
    #[default]
    Single,
    /// A start/end pair committed over two clicks.
    Range,
}

/// A selection as reported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionValue {
    /// A single selected date.
    Single(CalendarDate),
    /// A range start awaiting its end.
    PartialRange(CalendarDate),
    /// A committed range; the pair is sorted, start <= end.
    Range(CalendarDate, CalendarDate),
}

/// Result of a select operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The selection changed to the carried value.
    Changed(SelectionValue),
    /// The click was ignored and no state changed.
    Rejected,
}

/// Visual classification of a cell relative to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionClass {
    /// Not part of any selection.
    #[default]
    None,
    /// The single-mode selected date.
    SelectedSingle,
    /// Start of a committed or pending range.
    RangeStart,
    /// End of a committed range.
    RangeEnd,
    /// Strictly between a committed range's endpoints.
    InRange,
    /// Inside the tentative hover preview of a pending range.
    RangePreview,
}

/// Selection state for one widget instance.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    mode: SelectionMode,
    range_limit: Option<u32>,
    value: Option<SelectionValue>,
    pending_start: Option<CalendarDate>,
    hover: Option<CalendarDate>,
}

impl SelectionState {
    /// Creates a selection state for the given mode and optional maximum
    /// range span in whole days.
    pub fn new(mode: SelectionMode, range_limit: Option<u32>) -> Self {
        Self {
            mode,
            range_limit,
            ..Self::default()
        }
    }

    /// Returns the selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Returns the current selection, if any.
    pub fn value(&self) -> Option<SelectionValue> {
        self.value
    }

    /// Returns the pending range start, if a range is half-committed.
    pub fn pending_start(&self) -> Option<CalendarDate> {
        self.pending_start
    }

    /// Returns the live hover preview date, if any.
    pub fn hover(&self) -> Option<CalendarDate> {
        self.hover
    }

    /// Clears the selection, any pending start, and the hover preview.
    pub fn clear(&mut self) {
        self.value = None;
        self.pending_start = None;
        self.hover = None;
    }

    /// Applies a date click.
    ///
    /// Single mode replaces the selection unconditionally. Range mode
    /// records a start on the first click and commits the sorted pair on
    /// the second, unless the span exceeds the range limit, in which case
    /// the click is ignored and the pending start survives.
    pub fn select(&mut self, date: CalendarDate) -> SelectOutcome {
        match self.mode {
            SelectionMode::Single => {
                self.pending_start = None;
                self.hover = None;
                let value = SelectionValue::Single(date);
                self.value = Some(value);
                SelectOutcome::Changed(value)
            }
            SelectionMode::Range => match self.pending_start {
                None => {
                    self.pending_start = Some(date);
                    self.hover = None;
                    let value = SelectionValue::PartialRange(date);
                    self.value = Some(value);
                    SelectOutcome::Changed(value)
                }
                Some(start) => {
                    if let Some(limit) = self.range_limit
                        && date.days_between(&start) > limit as i64
                    {
                        debug!(limit, "range commit rejected: span over limit");
                        return SelectOutcome::Rejected;
                    }
                    let (lo, hi) = if start <= date { (start, date) } else { (date, start) };
                    self.pending_start = None;
                    self.hover = None;
                    let value = SelectionValue::Range(lo, hi);
                    self.value = Some(value);
                    SelectOutcome::Changed(value)
                }
            },
        }
    }

    /// Updates the hover preview.
    ///
    /// Only meaningful in range mode while a start is pending; returns the
    /// `(start, hovered)` pair for the hover callback, or `None` when the
    /// hover has no preview effect.
    pub fn hover_preview(&mut self, date: CalendarDate) -> Option<(CalendarDate, CalendarDate)> {
        if self.mode != SelectionMode::Range {
            return None;
        }
        let start = self.pending_start?;
        self.hover = Some(date);
        Some((start, date))
    }

    /// Drops the hover preview. Returns the pending start when a preview
    /// was actually showing, for the cleared-hover callback.
    pub fn clear_hover(&mut self) -> Option<CalendarDate> {
        if self.hover.take().is_some() {
            self.pending_start
        } else {
            None
        }
    }

    /// Classifies a date against the selection.
    ///
    /// The hover preview takes precedence while a start is pending and no
    /// commit has happened; otherwise the committed selection decides.
    pub fn classify(&self, date: CalendarDate) -> SelectionClass {
        if let Some(start) = self.pending_start {
            if let Some(hover) = self.hover {
                let (lo, hi) = if start <= hover { (start, hover) } else { (hover, start) };
                if date >= lo && date <= hi {
                    return SelectionClass::RangePreview;
                }
            }
            if date == start {
                return SelectionClass::RangeStart;
            }
        }
        match self.value {
            Some(SelectionValue::Single(selected)) if date == selected => {
                SelectionClass::SelectedSingle
            }
            Some(SelectionValue::PartialRange(start)) if date == start => {
                SelectionClass::RangeStart
            }
            Some(SelectionValue::Range(start, end)) => {
                if date == start {
                    SelectionClass::RangeStart
                } else if date == end {
                    SelectionClass::RangeEnd
                } else if date > start && date < end {
                    SelectionClass::InRange
                } else {
                    SelectionClass::None
                }
            }
            _ => SelectionClass::None,
        }
    }

    /// True when the selection touches any day of the given month. Used by
    /// the year view to mark month cells.
    pub fn touches_month(&self, year: i32, month: u8) -> bool {
        let in_month = |d: &CalendarDate| d.year() == year && d.month() == month;
        match &self.value {
            Some(SelectionValue::Single(d)) | Some(SelectionValue::PartialRange(d)) => in_month(d),
            Some(SelectionValue::Range(start, end)) => in_month(start) || in_month(end),
            None => false,
        }
    }

    /// True when the selection touches the given year. Used by the decade
    /// view to mark year cells.
    pub fn touches_year(&self, year: i32) -> bool {
        match &self.value {
            Some(SelectionValue::Single(d)) | Some(SelectionValue::PartialRange(d)) => {
                d.year() == year
            }
            Some(SelectionValue::Range(start, end)) => {
                start.year() == year || end.year() == year
            }
            None => false,
        }
    }
}
