//! Feed documents handed over by the host.
//!
//! Accepted shapes:
//! - a bare JSON array of event records
//! - an object with `events` and optionally `user`, `team` and `releases`

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use super::record::{EventRecord, Identity, Team};
use crate::about::Release;
use crate::error::FeedError;

#[derive(Debug, Clone, Default)]
pub struct Feed {
    pub events: Vec<EventRecord>,
    pub user: Option<Identity>,
    pub team: Option<Team>,
    pub releases: Vec<Release>,
}

// Entries stay raw here so one bad record cannot sink the whole document.
#[derive(Deserialize)]
#[serde(untagged)]
enum FeedDocument {
    List(Vec<Value>),
    Object {
        events: Vec<Value>,
        #[serde(default)]
        user: Option<Value>,
        #[serde(default)]
        team: Option<Value>,
        #[serde(default)]
        releases: Vec<Value>,
    },
}

/// Parse a feed document. Only the outer shape can fail; malformed entries are
/// logged and skipped.
pub fn parse_feed(text: &str) -> Result<Feed, FeedError> {
    let feed = match serde_json::from_str::<FeedDocument>(text)? {
        FeedDocument::List(events) => Feed {
            events: entries(events, "event"),
            ..Feed::default()
        },
        FeedDocument::Object {
            events,
            user,
            team,
            releases,
        } => Feed {
            events: entries(events, "event"),
            user: optional(user, "user"),
            team: optional(team, "team"),
            releases: entries(releases, "release"),
        },
    };
    Ok(feed)
}

fn entries<T: DeserializeOwned>(raw: Vec<Value>, kind: &str) -> Vec<T> {
    raw.into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!(kind, index, error = %e, "skipping malformed entry");
                None
            }
        })
        .collect()
}

fn optional<T: DeserializeOwned>(raw: Option<Value>, kind: &str) -> Option<T> {
    match raw? {
        Value::Null => None,
        value => match serde_json::from_value(value) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!(kind, error = %e, "ignoring malformed identity");
                None
            }
        },
    }
}

pub async fn load_feed(path: &Path) -> Result<Feed, FeedError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| FeedError::io(path, e))?;
    parse_feed(&text)
}
