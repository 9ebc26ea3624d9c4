//! The event record.
//!
//! Events are immutable server truth: they arrive from the feed and are
//! never written back. Favorite status lives in `favorites::FavoriteStore`,
//! keyed by event id, and is not part of this record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used by the feed for `dateFrom`/`dateTo`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single event from the feed.
///
/// `host`, `city`, `dateFrom` and `dateTo` are required on input; a
/// missing `name` falls back to a placeholder. Feed payloads sometimes
/// carry extra members (e.g. a legacy `starred` flag); those are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,

    #[serde(default = "default_name")]
    pub name: String,

    pub host: String,

    pub city: String,

    /// Start date as `YYYY-MM-DD`. Sort and filter key.
    #[serde(rename = "dateFrom")]
    pub date_from: String,

    /// End date as `YYYY-MM-DD`. Display and export only.
    #[serde(rename = "dateTo")]
    pub date_to: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Link to an external agenda page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

fn default_name() -> String {
    "Unnamed Event".to_string()
}

impl Event {
    /// Parsed start date, or `None` if `date_from` is not `YYYY-MM-DD`.
    pub fn start_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date_from, DATE_FORMAT).ok()
    }

    /// Parsed end date, or `None` if `date_to` is not `YYYY-MM-DD`.
    pub fn end_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date_to, DATE_FORMAT).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_fills_in_default_name() {
        let json = r#"{
            "id": "e1",
            "host": "Acme",
            "city": "Berlin",
            "dateFrom": "2025-03-20",
            "dateTo": "2025-03-21"
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.name, "Unnamed Event");
        assert_eq!(event.category, None);
        assert_eq!(event.link, None);
    }

    #[test]
    fn decode_fails_without_required_fields() {
        // city missing
        let json = r#"{
            "id": "e1",
            "name": "Conf",
            "host": "Acme",
            "dateFrom": "2025-03-20",
            "dateTo": "2025-03-21"
        }"#;
        assert!(serde_json::from_str::<Event>(json).is_err());
    }

    #[test]
    fn decode_ignores_legacy_starred_member() {
        let json = r#"{
            "id": "e1",
            "name": "Conf",
            "host": "Acme",
            "city": "Berlin",
            "dateFrom": "2025-03-20",
            "dateTo": "2025-03-21",
            "starred": true
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.name, "Conf");
    }

    #[test]
    fn start_date_parses_iso_date() {
        let json = r#"{
            "id": "e1",
            "name": "Conf",
            "host": "Acme",
            "city": "Berlin",
            "dateFrom": "2025-03-20",
            "dateTo": "not-a-date"
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(
            event.start_date(),
            Some(NaiveDate::from_ymd_opt(2025, 3, 20).unwrap())
        );
        assert_eq!(event.end_date(), None);
    }
}
