//! Global whatson configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{FeedError, FeedResult};

/// Where the event list comes from: a remote feed or a bundled file.
///
/// Validated once at construction; a malformed URL is a configuration
/// error surfaced at startup, never at fetch time.
#[derive(Debug, Clone)]
pub enum FeedSource {
    Remote(Url),
    Bundled(PathBuf),
}

/// Global configuration at ~/.config/whatson/config.toml
#[derive(Serialize, Deserialize, Clone, Default)]
pub struct WhatsonConfig {
    /// Base URL of the event feed. Events are fetched from `<feed_url>/events`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_url: Option<String>,

    /// Path to a bundled JSON feed, used instead of the remote endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_file: Option<PathBuf>,

    /// Where favorites and the feed snapshot live. Defaults to the
    /// platform data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl WhatsonConfig {
    pub fn config_path() -> FeedResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| FeedError::Config("Could not determine config directory".into()))?
            .join("whatson");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config, creating a commented default file on first run.
    pub fn load() -> FeedResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: WhatsonConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| FeedError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| FeedError::Config(e.to_string()))?;

        Ok(config)
    }

    /// Save the current config to ~/.config/whatson/config.toml
    pub fn save(&self) -> FeedResult<()> {
        let config_path = Self::config_path()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| FeedError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| FeedError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> FeedResult<()> {
        let contents = "\
# whatson configuration

# Base URL of the event feed (events are fetched from <feed_url>/events):
# feed_url = \"https://example.com\"

# Or a bundled JSON file with the same array-of-events schema:
# feed_file = \"~/events.json\"

# Where favorites and the cached feed are stored:
# data_dir = \"~/.local/share/whatson\"
";

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                FeedError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| FeedError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Resolve the configured source, validating it.
    ///
    /// `feed_file` wins over `feed_url` when both are set. Returns a
    /// configuration error when neither is configured.
    pub fn feed_source(&self) -> FeedResult<FeedSource> {
        if let Some(file) = &self.feed_file {
            return Ok(FeedSource::Bundled(expand(file)));
        }

        if let Some(raw) = &self.feed_url {
            let url = Url::parse(raw)
                .map_err(|e| FeedError::Config(format!("Invalid feed_url '{raw}': {e}")))?;
            return Ok(FeedSource::Remote(url));
        }

        Err(FeedError::Config(
            "No feed configured. Set feed_url or feed_file in the config file.".into(),
        ))
    }

    /// Data directory for favorites and the feed snapshot.
    pub fn data_dir(&self) -> FeedResult<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(expand(dir)),
            None => Ok(dirs::data_dir()
                .ok_or_else(|| FeedError::Config("Could not determine data directory".into()))?
                .join("whatson")),
        }
    }

    pub fn favorites_path(&self) -> FeedResult<PathBuf> {
        Ok(self.data_dir()?.join("favorites.json"))
    }
}

fn expand(path: &Path) -> PathBuf {
    let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
    PathBuf::from(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_source_rejects_malformed_url() {
        let config = WhatsonConfig {
            feed_url: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.feed_source(),
            Err(FeedError::Config(_))
        ));
    }

    #[test]
    fn feed_source_requires_some_source() {
        let config = WhatsonConfig::default();
        assert!(matches!(
            config.feed_source(),
            Err(FeedError::Config(_))
        ));
    }

    #[test]
    fn bundled_file_wins_over_url() {
        let config = WhatsonConfig {
            feed_url: Some("https://example.com".to_string()),
            feed_file: Some(PathBuf::from("/tmp/events.json")),
            ..Default::default()
        };
        assert!(matches!(
            config.feed_source().unwrap(),
            FeedSource::Bundled(_)
        ));
    }
}
