use super::dates::{month_name, parse_display_date};
use crate::agenda::model::Event;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

/// Per-day lookup behind the calendar widget's event dots. Rebuilt from
/// scratch whenever the event list changes; events without a readable
/// date are simply absent from it.
#[derive(Debug, Default)]
pub struct CalendarIndex {
    days: BTreeSet<NaiveDate>,
}

impl CalendarIndex {
    pub fn build(events: &[Event]) -> Self {
        Self {
            days: events
                .iter()
                .filter_map(|event| parse_display_date(&event.display_date))
                .collect(),
        }
    }

    pub fn has_events(&self, day: NaiveDate) -> bool {
        self.days.contains(&day)
    }

    /// Distinct days with at least one event in the given month. A day
    /// with two events counts once.
    pub fn event_day_count(&self, year: i32, month: u32) -> usize {
        self.days
            .iter()
            .filter(|day| day.year() == year && day.month() == month)
            .count()
    }

    pub fn month_summary(&self, year: i32, month: u32) -> String {
        let count = self.event_day_count(year, month);
        let noun = if count == 1 { "dia" } else { "dias" };

        format!("{} {} com eventos em {}", count, noun, month_name(month))
    }
}
