use super::dates::parse_display_date;
use crate::agenda::model::{Event, Mode, Price};
use chrono::NaiveDate;
use itertools::Itertools;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFilterMode {
    /// Only events on the selected day pass
    Exact,
    /// Events on or after the selected day pass
    From,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFilter {
    pub day: NaiveDate,
    pub mode: DateFilterMode,
}

/// The showcase's current search box and dropdown selections. `None` in a
/// categorical filter is the "all" sentinel. Held by the UI layer, which
/// re-applies it over the event list after every interaction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub search_text: String,
    pub mode_filter: Option<Mode>,
    pub price_filter: Option<Price>,
    pub category_filter: Option<String>,
    pub date_filter: Option<DateFilter>,
}

impl FilterState {
    /// Reacts to a calendar day click. When some event falls exactly on
    /// the clicked day the filter becomes `Exact`; clicking an empty day
    /// falls back to `From`, so the visitor sees the upcoming events
    /// rather than an empty list. The mode is recomputed on every click,
    /// never carried over from the previous selection.
    pub fn select_day(&mut self, day: NaiveDate, events: &[Event]) {
        let has_exact_match = events
            .iter()
            .any(|event| parse_display_date(&event.display_date) == Some(day));
        let mode = if has_exact_match {
            DateFilterMode::Exact
        } else {
            DateFilterMode::From
        };

        trace!("Selected day {} with mode {:?}", day, mode);

        self.date_filter = Some(DateFilter { day, mode });
    }

    pub fn clear_date(&mut self) {
        self.date_filter = None;
    }

    /// Runs every active predicate (ANDed) over the list and returns the
    /// survivors sorted by date, soonest first. Events whose date cannot
    /// be read sort after all the dated ones, keeping their relative
    /// order.
    pub fn apply(&self, events: &[Event]) -> FilterOutcome {
        let mut matched: Vec<Event> = events
            .iter()
            .filter(|event| self.matches(event))
            .cloned()
            .collect();

        matched.sort_by_cached_key(|event| {
            parse_display_date(&event.display_date).unwrap_or(NaiveDate::MAX)
        });

        FilterOutcome {
            total: events.len(),
            shown: matched.len(),
            chips: self.chips(),
            events: matched,
        }
    }

    fn matches(&self, event: &Event) -> bool {
        self.matches_search(event)
            && self.mode_filter.map_or(true, |mode| event.mode == mode)
            && self.price_filter.map_or(true, |price| event.price == price)
            && self
                .category_filter
                .as_ref()
                .map_or(true, |category| event.category == *category)
            && self.matches_date(event)
    }

    fn matches_search(&self, event: &Event) -> bool {
        if self.search_text.is_empty() {
            return true;
        }

        let needle = self.search_text.to_lowercase();

        [
            &event.name,
            &event.location,
            &event.target_audience,
            &event.category,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_date(&self, event: &Event) -> bool {
        let Some(filter) = self.date_filter else {
            return true;
        };
        let Some(date) = parse_display_date(&event.display_date) else {
            return false;
        };

        match filter.mode {
            DateFilterMode::Exact => date == filter.day,
            DateFilterMode::From => date >= filter.day,
        }
    }

    /// Descriptors of the active filters, in the order the chips row
    /// renders them
    fn chips(&self) -> Vec<FilterChip> {
        let mut chips = Vec::new();

        if !self.search_text.is_empty() {
            chips.push(FilterChip {
                kind: FilterKind::Search,
                label: format!("\"{}\"", self.search_text),
            });
        }
        if let Some(mode) = self.mode_filter {
            chips.push(FilterChip {
                kind: FilterKind::Mode,
                label: mode.to_string(),
            });
        }
        if let Some(price) = self.price_filter {
            chips.push(FilterChip {
                kind: FilterKind::Price,
                label: price.to_string(),
            });
        }
        if let Some(category) = &self.category_filter {
            chips.push(FilterChip {
                kind: FilterKind::Category,
                label: category.to_string(),
            });
        }
        if let Some(filter) = self.date_filter {
            let day = filter.day.format("%d/%m/%Y");

            chips.push(FilterChip {
                kind: FilterKind::Date,
                label: match filter.mode {
                    DateFilterMode::Exact => day.to_string(),
                    DateFilterMode::From => format!("A partir de {}", day),
                },
            });
        }

        chips
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    pub events: Vec<Event>,
    pub total: usize,
    pub shown: usize,
    pub chips: Vec<FilterChip>,
}

impl FilterOutcome {
    pub fn summary(&self) -> String {
        format!("Exibindo {} de {} eventos", self.shown, self.total)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    pub kind: FilterKind,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Search,
    Mode,
    Price,
    Category,
    Date,
}

/// Sorted, de-duplicated category list for the category dropdown
pub fn distinct_categories(events: &[Event]) -> Vec<String> {
    events
        .iter()
        .map(|event| event.category.to_string())
        .filter(|category| !category.is_empty())
        .sorted()
        .dedup()
        .collect()
}
