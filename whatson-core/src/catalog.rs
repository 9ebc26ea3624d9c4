//! Loading the event catalog.
//!
//! The catalog is read-only server truth: a JSON array of event objects,
//! either fetched from `GET <feed_url>/events` or read from a bundled
//! file. After every successful fetch the list is snapshotted to disk so
//! a later load can keep showing the last-known events when the network
//! is down. The loader never touches the favorite store.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, warn};
use url::Url;

use crate::config::FeedSource;
use crate::error::{FeedError, FeedResult};
use crate::event::Event;

const SNAPSHOT_FILE: &str = "feed.json";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Loads the event list from the configured source.
pub struct Catalog {
    source: FeedSource,
    snapshot_path: PathBuf,
    http: reqwest::Client,
}

impl Catalog {
    pub fn new(source: FeedSource, data_dir: &Path) -> Catalog {
        Catalog {
            source,
            snapshot_path: data_dir.join(SNAPSHOT_FILE),
            http: reqwest::Client::new(),
        }
    }

    /// Load the current event list.
    ///
    /// A bundled source is read directly and its errors surface. A remote
    /// source falls back to the last-good snapshot on transport or decode
    /// failure, and to an empty list on a first run with no snapshot;
    /// event data is never invented.
    pub async fn load(&self) -> FeedResult<Vec<Event>> {
        match &self.source {
            FeedSource::Bundled(path) => read_bundled(path),
            FeedSource::Remote(base) => match self.fetch(base).await {
                Ok(events) => {
                    self.write_snapshot(&events);
                    Ok(events)
                }
                Err(e) => {
                    warn!("feed fetch failed, using last-good snapshot: {e}");
                    Ok(self.read_snapshot().unwrap_or_default())
                }
            },
        }
    }

    /// Re-fetch from the remote endpoint, bypassing the snapshot.
    ///
    /// Errors surface to the caller; a bundled-only setup has nothing to
    /// refresh and reports a configuration error.
    pub async fn refresh(&self) -> FeedResult<Vec<Event>> {
        match &self.source {
            FeedSource::Bundled(_) => Err(FeedError::Config(
                "Refresh requires a remote feed. Set feed_url in the config file.".into(),
            )),
            FeedSource::Remote(base) => {
                let events = self.fetch(base).await?;
                self.write_snapshot(&events);
                Ok(events)
            }
        }
    }

    /// GET <base>/events
    async fn fetch(&self, base: &Url) -> FeedResult<Vec<Event>> {
        let url = format!("{}/events", base.as_str().trim_end_matches('/'));

        let resp = self
            .http
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| FeedError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(FeedError::Transport(format!(
                "feed returned {}",
                resp.status()
            )));
        }

        resp.json::<Vec<Event>>()
            .await
            .map_err(|e| FeedError::Decode(e.to_string()))
    }

    // The snapshot is best-effort: failures are logged, never surfaced.
    fn write_snapshot(&self, events: &[Event]) {
        let result = (|| -> FeedResult<()> {
            if let Some(parent) = self.snapshot_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(events)
                .map_err(|e| FeedError::Serialization(e.to_string()))?;
            let temp = self.snapshot_path.with_extension("json.tmp");
            std::fs::write(&temp, content)?;
            std::fs::rename(&temp, &self.snapshot_path)?;
            Ok(())
        })();

        if let Err(e) = result {
            warn!("could not write feed snapshot: {e}");
        }
    }

    fn read_snapshot(&self) -> Option<Vec<Event>> {
        let content = std::fs::read_to_string(&self.snapshot_path).ok()?;
        match serde_json::from_str(&content) {
            Ok(events) => {
                debug!("loaded feed snapshot from {}", self.snapshot_path.display());
                Some(events)
            }
            Err(e) => {
                warn!("ignoring corrupt feed snapshot: {e}");
                None
            }
        }
    }
}

/// Read a bundled JSON feed. The whole batch is rejected when any record
/// is missing a required field; there is no partial salvage.
fn read_bundled(path: &Path) -> FeedResult<Vec<Event>> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| FeedError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_FEED: &str = r#"[
        {
            "id": "a",
            "name": "Spring Conf",
            "host": "Acme",
            "city": "NYC",
            "dateFrom": "2025-01-10",
            "dateTo": "2025-01-11",
            "category": "Music"
        },
        {
            "id": "b",
            "host": "Globex",
            "city": "LA",
            "dateFrom": "2025-02-05",
            "dateTo": "2025-02-05"
        }
    ]"#;

    fn unreachable_source() -> FeedSource {
        FeedSource::Remote(Url::parse("http://127.0.0.1:1").unwrap())
    }

    #[test]
    fn bundled_feed_parses_and_defaults_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(&path, VALID_FEED).unwrap();

        let events = read_bundled(&path).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].name, "Spring Conf");
        assert_eq!(events[1].name, "Unnamed Event");
    }

    #[test]
    fn bundled_feed_rejects_whole_batch_on_one_bad_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        // second record has no city
        std::fs::write(
            &path,
            r#"[
                {"id": "a", "host": "Acme", "city": "NYC",
                 "dateFrom": "2025-01-10", "dateTo": "2025-01-11"},
                {"id": "b", "host": "Globex",
                 "dateFrom": "2025-02-05", "dateTo": "2025-02-05"}
            ]"#,
        )
        .unwrap();

        assert!(matches!(read_bundled(&path), Err(FeedError::Decode(_))));
    }

    #[test]
    fn missing_bundled_feed_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        assert!(matches!(read_bundled(&path), Err(FeedError::Io(_))));
    }

    #[tokio::test]
    async fn load_falls_back_to_snapshot_when_remote_is_down() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SNAPSHOT_FILE), VALID_FEED).unwrap();

        let catalog = Catalog::new(unreachable_source(), dir.path());
        let events = catalog.load().await.unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].id, "a");
    }

    #[tokio::test]
    async fn load_is_empty_on_first_run_without_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::new(unreachable_source(), dir.path());
        let events = catalog.load().await.unwrap();
        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn refresh_surfaces_transport_errors() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SNAPSHOT_FILE), VALID_FEED).unwrap();

        let catalog = Catalog::new(unreachable_source(), dir.path());
        assert!(matches!(
            catalog.refresh().await,
            Err(FeedError::Transport(_))
        ));
    }

    #[tokio::test]
    async fn refresh_requires_a_remote_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(&path, VALID_FEED).unwrap();

        let catalog = Catalog::new(FeedSource::Bundled(path), dir.path());
        assert!(matches!(catalog.refresh().await, Err(FeedError::Config(_))));
    }
}
