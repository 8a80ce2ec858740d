//! Model behind the about window: version and release-date line.
//!
//! Release metadata is supplied by the host alongside the feed; this module only
//! picks the release matching the running version and keeps its age current.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::feed::{format_age, RefreshHandle};
use crate::host::Host;

pub const DOCS_URL: &str = "https://zeit.co/docs";
pub const SOURCE_URL: &str = "https://github.com/zeit/now-desktop";
pub const HOMEPAGE_URL: &str = "https://zeit.co";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Release {
    pub tag_name: String,
    /// `None` when missing or unparsable
    #[serde(default, deserialize_with = "crate::feed::record::deserialize_timestamp")]
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseDate {
    /// No release list received yet
    Unknown,
    NotYetReleased,
    Published(DateTime<Utc>),
}

/// The last release whose tag equals `version`.
pub fn find_release<'a>(version: &str, releases: &'a [Release]) -> Option<&'a Release> {
    releases.iter().rev().find(|r| r.tag_name == version)
}

pub fn release_line(release: &ReleaseDate, now: DateTime<Utc>) -> Option<String> {
    match release {
        ReleaseDate::Unknown => None,
        ReleaseDate::NotYetReleased => Some("(not yet released)".to_string()),
        ReleaseDate::Published(at) => Some(match format_age(*at, now) {
            Some(age) => format!("({} ago)", age),
            None => format!("({})", at.format("%Y-%m-%d")),
        }),
    }
}

#[derive(Debug)]
pub struct AboutModel {
    pub version: Option<String>,
    pub dark_mode: bool,
    release: ReleaseDate,
    line: Option<String>,
    refresh: Option<RefreshHandle>,
}

impl AboutModel {
    pub fn new(host: &Host, dark_mode: bool) -> Self {
        Self {
            version: host.version().map(str::to_string),
            dark_mode,
            release: ReleaseDate::Unknown,
            line: None,
            refresh: None,
        }
    }

    pub fn release(&self) -> &ReleaseDate {
        &self.release
    }

    pub fn set_releases(&mut self, releases: &[Release], now: DateTime<Utc>) {
        let Some(version) = self.version.as_deref() else {
            return;
        };
        self.release = match find_release(version, releases) {
            Some(Release {
                published_at: Some(at),
                ..
            }) => ReleaseDate::Published(*at),
            _ => ReleaseDate::NotYetReleased,
        };
        self.refresh(now);
    }

    pub fn refresh(&mut self, now: DateTime<Utc>) -> Option<&str> {
        self.line = release_line(&self.release, now);
        self.line.as_deref()
    }

    pub fn release_line(&self) -> Option<&str> {
        self.line.as_deref()
    }

    /// `Version 3.1.0 (2d ago)`
    pub fn heading(&self) -> String {
        let mut heading = String::from("Version");
        if let Some(version) = &self.version {
            heading.push(' ');
            heading.push_str(version);
        }
        if let Some(line) = &self.line {
            heading.push(' ');
            heading.push_str(line);
        }
        heading
    }

    /// Keep the release line ticking while the window is open.
    pub fn open(&mut self, handle: Option<RefreshHandle>) {
        self.refresh = handle;
    }

    /// Window closed: stop ticking.
    pub fn close(&mut self) {
        if let Some(handle) = self.refresh.take() {
            handle.cancel();
        }
    }

    pub fn is_ticking(&self) -> bool {
        self.refresh.is_some()
    }
}
