//! ICS file generation.

use chrono::Days;
use icalendar::{Calendar, Component, EventLike, Property, ValueType};

use crate::error::{FeedError, FeedResult};
use crate::event::Event;

/// Generate .ics content for an event as a full-day entry.
///
/// The event spans `date_from` through `date_to` inclusive; DTEND is the
/// day after `date_to` because all-day ends are exclusive in RFC 5545.
/// An unparsable `date_to` collapses the entry to the start day. An
/// unparsable `date_from` is an error: there is no date to anchor on.
pub fn generate_ics(event: &Event) -> FeedResult<String> {
    let start = event.start_date().ok_or_else(|| {
        FeedError::IcsGenerate(format!(
            "event '{}' has no parsable start date ('{}')",
            event.id, event.date_from
        ))
    })?;
    let last_day = event.end_date().unwrap_or(start).max(start);
    let end = last_day
        .checked_add_days(Days::new(1))
        .ok_or_else(|| FeedError::IcsGenerate("end date out of range".into()))?;

    let mut cal = Calendar::new();

    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&format!("{}@whatson", event.id));
    ics_event.summary(event.name.trim());
    ics_event.location(&event.city);

    add_date_property(&mut ics_event, "DTSTART", start);
    add_date_property(&mut ics_event, "DTEND", end);

    // Host and category travel in the description, like the detail view
    // shows them.
    let mut description = format!("Host: {}", event.host);
    if let Some(ref category) = event.category {
        description.push_str(&format!("\nCategory: {category}"));
    }
    ics_event.description(&description);

    if let Some(ref link) = event.link {
        ics_event.add_property("URL", link);
    }

    let ics_event = ics_event.done();
    cal.push(ics_event);
    let cal = cal.done();

    Ok(strip_ics_bloat(&cal.to_string()))
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with WHATSON (we post-process the output)
/// - Remove CALSCALE:GREGORIAN (it's the default)
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:WHATSON\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

/// Add an all-day date property (VALUE=DATE)
fn add_date_property(ics_event: &mut icalendar::Event, name: &str, date: chrono::NaiveDate) {
    let mut prop = Property::new(name, date.format("%Y%m%d").to_string());
    prop.append_parameter(ValueType::Date);
    ics_event.append_property(prop);
}
