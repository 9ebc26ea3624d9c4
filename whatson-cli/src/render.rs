//! Terminal rendering helpers for events.

use chrono::{Datelike, NaiveDate};
use owo_colors::OwoColorize;
use whatson_core::Event;

/// Month heading used to group the list (e.g. "March 2025").
pub fn month_header(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// One list row: day-of-month, name, dimmed city, star marker.
pub fn render_row(event: &Event, starred: bool) -> String {
    let day = event
        .start_date()
        .map(|d| format!("{:>2}", d.day()))
        .unwrap_or_else(|| "??".to_string());

    let star = if starred { " ★".yellow().to_string() } else { String::new() };

    format!(
        "  {}  {} {}{}",
        day.bold(),
        event.name,
        format!("({})", event.city).dimmed(),
        star
    )
}

/// Human date span for the detail view: "20 Mar" for a single day,
/// "20 Mar to 22 Mar" otherwise. Falls back to the raw strings when the
/// dates do not parse.
pub fn format_date_span(event: &Event) -> String {
    let Some(from) = event.start_date() else {
        return event.date_from.clone();
    };

    match event.end_date() {
        Some(to) if to != from => {
            format!("{} to {}", format_day(from), format_day(to))
        }
        _ => format_day(from),
    }
}

fn format_day(date: NaiveDate) -> String {
    format!("{} {}", date.day(), date.format("%b"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_event(date_from: &str, date_to: &str) -> Event {
        Event {
            id: "e1".to_string(),
            name: "Conf".to_string(),
            host: "Acme".to_string(),
            city: "Berlin".to_string(),
            date_from: date_from.to_string(),
            date_to: date_to.to_string(),
            category: None,
            link: None,
        }
    }

    #[test]
    fn span_collapses_single_day() {
        let event = make_event("2025-03-20", "2025-03-20");
        assert_eq!(format_date_span(&event), "20 Mar");
    }

    #[test]
    fn span_shows_both_ends() {
        let event = make_event("2025-03-20", "2025-03-22");
        assert_eq!(format_date_span(&event), "20 Mar to 22 Mar");
    }

    #[test]
    fn span_falls_back_to_raw_string() {
        let event = make_event("someday", "2025-03-22");
        assert_eq!(format_date_span(&event), "someday");
    }

    #[test]
    fn span_ignores_unparsable_end() {
        let event = make_event("2025-03-20", "later");
        assert_eq!(format_date_span(&event), "20 Mar");
    }

    #[test]
    fn month_header_is_full_month_and_year() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
        assert_eq!(month_header(date), "March 2025");
    }
}
