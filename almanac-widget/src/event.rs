//! Calendar events supplied by the host.
//!
//! The event list is owned by an external collaborator; the widget only
//! reads it to annotate cells and to forward click notifications. Nothing
//! here mutates the list.

use almanac_core::date::CalendarDate;

/// An annotation attached to a calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// The day the event falls on.
    pub date: CalendarDate,
    /// Short display title.
    pub title: String,
    /// Free-form category tag (e.g. "meeting", "holiday").
    pub kind: String,
    /// Optional display color, passed through to the presentation layer.
    pub color: Option<String>,
    /// Optional longer description, shown in the day view.
    pub description: Option<String>,
    /// Optional time-of-day label. The widget itself is date-granular;
    /// this is display-only.
    pub time: Option<String>,
}

impl Event {
    /// Creates an event with just a date, title, and kind.
    pub fn new(date: CalendarDate, title: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            date,
            title: title.into(),
            kind: kind.into(),
            color: None,
            description: None,
            time: None,
        }
    }
}

/// Returns the events falling on `date`, preserving the list's order.
pub fn events_on(events: &[Event], date: CalendarDate) -> Vec<&Event> {
    events.iter().filter(|event| event.date == date).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_on_filters_and_preserves_order() {
        let day = CalendarDate::new(2025, 3, 5).unwrap();
        let other = CalendarDate::new(2025, 3, 6).unwrap();
        let events = vec![
            Event::new(day, "standup", "meeting"),
            Event::new(other, "review", "meeting"),
            Event::new(day, "dentist", "personal"),
        ];
        let on_day = events_on(&events, day);
        assert_eq!(on_day.len(), 2);
        assert_eq!(on_day[0].title, "standup");
        assert_eq!(on_day[1].title, "dentist");
        assert!(events_on(&events, CalendarDate::new(2025, 3, 7).unwrap()).is_empty());
    }
}
