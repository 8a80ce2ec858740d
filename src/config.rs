use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

use crate::error::FeedError;
use crate::feed::refresh::{DEFAULT_REFRESH_INTERVAL, MIN_REFRESH_INTERVAL};

// Default configuration
pub const DEFAULT_THEME: &str = "light";
pub const DEFAULT_LOG_FILTER: &str = "now_feed=info";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub theme: String,
    /// Feed document loaded on startup when no path is given on the command line
    pub feed_path: Option<PathBuf>,
    pub refresh_interval_ms: u64,
    pub log_filter: String,
    /// Shown instead of the package version (development builds)
    pub version_override: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            feed_path: None,
            refresh_interval_ms: DEFAULT_REFRESH_INTERVAL.as_millis() as u64,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            version_override: None,
        }
    }
}

impl Settings {
    pub fn dark_mode(&self) -> bool {
        self.theme == "dark"
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms).max(MIN_REFRESH_INTERVAL)
    }

    pub fn version(&self) -> String {
        self.version_override
            .clone()
            .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string())
    }
}

pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("co", "zeit", "now-feed")
}

pub fn settings_path() -> Option<PathBuf> {
    let proj = project_dirs()?;
    let dir = proj.config_dir();
    if let Err(e) = fs::create_dir_all(dir) {
        warn!(error = %e, "failed to create config dir");
        return None;
    }
    Some(dir.join("settings.json"))
}

/// Settings from disk, or defaults when the file is missing or unreadable.
pub fn load_settings() -> Settings {
    let Some(path) = settings_path() else {
        return Settings::default();
    };
    match read_settings(&path) {
        Ok(settings) => settings,
        Err(FeedError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            Settings::default()
        }
        Err(e) => {
            warn!(error = %e, "ignoring unreadable settings");
            Settings::default()
        }
    }
}

pub fn read_settings(path: &Path) -> Result<Settings, FeedError> {
    let content = fs::read_to_string(path).map_err(|e| FeedError::io(path, e))?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save_settings(settings: &Settings) -> Result<(), FeedError> {
    if let Some(path) = settings_path() {
        write_settings(&path, settings)?;
    }
    Ok(())
}

pub fn write_settings(path: &Path, settings: &Settings) -> Result<(), FeedError> {
    let data = serde_json::to_string_pretty(settings)?;
    let mut file = fs::File::create(path).map_err(|e| FeedError::io(path, e))?;
    file.write_all(data.as_bytes())
        .map_err(|e| FeedError::io(path, e))?;
    Ok(())
}
