//! One displayed feed item: resolved click target, rendered summary and age.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use once_cell::unsync::OnceCell;

use super::record::{EventRecord, Identity, Team};
use super::refresh::RefreshHandle;
use super::registry::{MessageRegistry, Summary};
use super::time_ago::format_age;
use super::url::{external_url, resolve_url};
use crate::host::Host;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageState {
    /// URL not resolved yet
    Idle,
    Resolved,
}

/// Everything the UI needs to draw one item.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedItem {
    pub id: u64,
    pub summary: Summary,
    pub age: Option<String>,
    /// Seed for the avatar identicon
    pub avatar: String,
    pub clickable: bool,
}

pub struct EventMessage {
    id: u64,
    record: Arc<EventRecord>,
    url: OnceCell<Option<String>>,
    age: Option<String>,
    refresh: Option<RefreshHandle>,
}

impl EventMessage {
    pub fn new(id: u64, record: Arc<EventRecord>) -> Self {
        Self {
            id,
            record,
            url: OnceCell::new(),
            age: None,
            refresh: None,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn record(&self) -> &Arc<EventRecord> {
        &self.record
    }

    pub fn state(&self) -> MessageState {
        if self.url.get().is_some() {
            MessageState::Resolved
        } else {
            MessageState::Idle
        }
    }

    /// Resolve the click target on first call; later calls return the cached value.
    pub fn present(&self) -> Option<&str> {
        self.url
            .get_or_init(|| resolve_url(&self.record))
            .as_deref()
    }

    /// Swap in a new record. The URL is resolved again only if it is a different record.
    pub fn replace_record(&mut self, record: Arc<EventRecord>) {
        if Arc::ptr_eq(&self.record, &record) {
            return;
        }
        self.record = record;
        self.url = OnceCell::new();
    }

    /// Recompute the age label against `now`.
    pub fn refresh_age(&mut self, now: DateTime<Utc>) -> Option<&str> {
        self.age = self.record.created.and_then(|created| format_age(created, now));
        self.age.as_deref()
    }

    /// The label computed by the last [`refresh_age`](Self::refresh_age).
    pub fn age(&self) -> Option<&str> {
        self.age.as_deref()
    }

    pub fn attach_refresh(&mut self, handle: RefreshHandle) {
        // Replacing an existing handle drops, and so cancels, the old task.
        self.refresh = Some(handle);
    }

    pub fn is_refreshing(&self) -> bool {
        self.refresh.as_ref().is_some_and(|h| !h.is_cancelled())
    }

    /// Cancel the refresh task. Safe to call more than once.
    pub fn teardown(&mut self) {
        if let Some(handle) = self.refresh.take() {
            handle.cancel();
        }
    }

    /// Handle a click. Opens `https://<url>` when there is a resolved URL and the host
    /// can open links; otherwise does nothing. Returns whether a link was requested.
    pub fn activate(&self, host: &Host) -> bool {
        let Some(url) = self.present() else {
            return false;
        };
        host.open_external(&external_url(url))
    }

    /// Draw data for this item, or `None` when no renderer knows the event type.
    pub fn render(
        &self,
        registry: &MessageRegistry,
        user: &Identity,
        team: Option<&Team>,
    ) -> Option<RenderedItem> {
        let renderer = registry.resolve(&self.record.event_type)?;

        Some(RenderedItem {
            id: self.id,
            summary: renderer.render(&self.record, user, team),
            age: self.age.clone(),
            avatar: self.avatar_seed(team),
            clickable: self.present().is_some(),
        })
    }

    fn avatar_seed(&self, team: Option<&Team>) -> String {
        self.record
            .actor_name()
            .or(self.record.actor_uid())
            .or(team.map(|t| t.slug.as_str()))
            .unwrap_or("?")
            .to_string()
    }
}

impl std::fmt::Debug for EventMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventMessage")
            .field("id", &self.id)
            .field("type", &self.record.event_type)
            .field("state", &self.state())
            .field("age", &self.age)
            .finish()
    }
}

impl Drop for EventMessage {
    fn drop(&mut self) {
        self.teardown();
    }
}
