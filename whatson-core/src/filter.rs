//! Filtering and sorting of the event list.
//!
//! Everything here is a pure derivation: the reference date and the
//! favorite lookup are explicit inputs, so callers re-run `apply_filters`
//! whenever the list, the selection or the favorite set changes.

use chrono::{Datelike, Months, NaiveDate};

use crate::event::Event;

/// The mutually-exclusive date-range filter mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateBucket {
    #[default]
    All,
    ThisMonth,
    NextMonth,
    Starred,
}

/// The user's current filter choices. Transient, never persisted.
#[derive(Debug, Clone, Default)]
pub struct FilterSelection {
    pub bucket: DateBucket,
    pub city: Option<String>,
    pub category: Option<String>,
}

/// Derive the visible event list.
///
/// Keeps upcoming events only (`date_from >= today`, date-only comparison),
/// applies the bucket, then city/category facets, and sorts ascending by
/// start date. Events whose `date_from` does not parse are excluded up
/// front, so the sort never has to order an unparsable pair.
///
/// The `Starred` bucket shows all favorites regardless of the city and
/// category selections. That short-circuit is intentional.
pub fn apply_filters<F>(
    events: &[Event],
    selection: &FilterSelection,
    is_favorite: F,
    today: NaiveDate,
) -> Vec<Event>
where
    F: Fn(&str) -> bool,
{
    let mut visible: Vec<(NaiveDate, Event)> = events
        .iter()
        .filter_map(|event| event.start_date().map(|start| (start, event)))
        .filter(|(start, _)| *start >= today)
        .filter(|(start, event)| match selection.bucket {
            DateBucket::Starred => is_favorite(&event.id),
            bucket => {
                in_bucket(*start, bucket, today)
                    && matches_facet(selection.city.as_deref(), &event.city)
                    && matches_facet(
                        selection.category.as_deref(),
                        event.category.as_deref().unwrap_or(""),
                    )
            }
        })
        .map(|(start, event)| (start, event.clone()))
        .collect();

    visible.sort_by_key(|(start, _)| *start);
    visible.into_iter().map(|(_, event)| event).collect()
}

/// Date-bucket predicate for the non-starred buckets.
fn in_bucket(start: NaiveDate, bucket: DateBucket, today: NaiveDate) -> bool {
    match bucket {
        DateBucket::All => true,
        DateBucket::ThisMonth => same_month(start, today),
        DateBucket::NextMonth => match today.checked_add_months(Months::new(1)) {
            Some(next) => same_month(start, next),
            None => false,
        },
        // Handled by the caller before facets are applied.
        DateBucket::Starred => true,
    }
}

fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Exact string equality, no case folding. `None` means "no selection".
fn matches_facet(selected: Option<&str>, value: &str) -> bool {
    match selected {
        Some(wanted) => wanted == value,
        None => true,
    }
}

/// Distinct cities across the full list, sorted lexicographically.
pub fn available_cities(events: &[Event]) -> Vec<String> {
    let mut cities: Vec<String> = events.iter().map(|e| e.city.clone()).collect();
    cities.sort();
    cities.dedup();
    cities
}

/// Distinct non-empty categories across the full list, sorted
/// lexicographically. Events without a category contribute nothing.
pub fn available_categories(events: &[Event]) -> Vec<String> {
    let mut categories: Vec<String> = events
        .iter()
        .filter_map(|e| e.category.clone())
        .filter(|c| !c.is_empty())
        .collect();
    categories.sort();
    categories.dedup();
    categories
}
