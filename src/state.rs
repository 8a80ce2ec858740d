//! The displayed feed, separated from UI logic.
//!
//! `FeedState` owns one [`EventMessage`] per visible record. It is owned by the app
//! on the UI thread and passed to the renderer as needed.

use std::sync::Arc;

use tracing::{debug, info};

use crate::feed::{
    Clock, EventMessage, EventRecord, Identity, MessageRegistry, RefreshScheduler,
    RefreshTarget, RefreshTick, RenderedItem, Team,
};
use crate::host::Host;

pub struct FeedState {
    items: Vec<EventMessage>,
    pub user: Identity,
    pub team: Option<Team>,
    registry: Arc<MessageRegistry>,
    scheduler: Option<RefreshScheduler>,
    clock: Box<dyn Clock>,
    /// Presentation ids are never reused, so a late tick cannot reach a newer item.
    next_id: u64,
}

impl FeedState {
    pub fn new(
        registry: Arc<MessageRegistry>,
        scheduler: Option<RefreshScheduler>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            items: Vec::new(),
            user: Identity::default(),
            team: None,
            registry,
            scheduler,
            clock,
            next_id: 1,
        }
    }

    pub fn items(&self) -> &[EventMessage] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn set_identity(&mut self, user: Identity, team: Option<Team>) {
        self.user = user;
        self.team = team;
    }

    /// Replace the displayed list. Old items are torn down (timers cancelled) before
    /// the new ones are presented.
    pub fn replace_events(&mut self, events: Vec<EventRecord>) {
        self.clear();

        let now = self.clock.now();
        for record in events {
            let id = self.next_id;
            self.next_id += 1;

            let mut item = EventMessage::new(id, Arc::new(record));
            item.present();
            item.refresh_age(now);

            // Items without a renderer are never visible, so they get no timer.
            if self.registry.contains(&item.record().event_type) {
                if let Some(scheduler) = &self.scheduler {
                    item.attach_refresh(scheduler.schedule(RefreshTarget::Item(id)));
                }
            } else {
                debug!(event_type = %item.record().event_type, id, "no renderer, item hidden");
            }
            self.items.push(item);
        }

        info!(count = self.items.len(), "feed replaced");
    }

    /// Tear down every item.
    pub fn clear(&mut self) {
        for item in &mut self.items {
            item.teardown();
        }
        self.items.clear();
    }

    /// Tear down and remove a single item.
    pub fn remove(&mut self, id: u64) -> bool {
        match self.position(id) {
            Some(idx) => {
                let mut item = self.items.remove(idx);
                item.teardown();
                true
            }
            None => false,
        }
    }

    /// Recompute the age of the ticked item. Ticks for items that are gone are
    /// ignored and return `false`.
    pub fn apply_tick(&mut self, tick: RefreshTick) -> bool {
        let RefreshTarget::Item(id) = tick.target else {
            return false;
        };
        let Some(idx) = self.position(id) else {
            debug!(id, "tick for torn-down item ignored");
            return false;
        };
        let now = self.clock.now();
        self.items[idx].refresh_age(now);
        true
    }

    /// Draw data for every item that has a renderer, in feed order.
    pub fn rendered(&self) -> Vec<RenderedItem> {
        self.items
            .iter()
            .filter_map(|item| item.render(&self.registry, &self.user, self.team.as_ref()))
            .collect()
    }

    /// Click on the item with `id`.
    pub fn activate(&self, id: u64, host: &Host) -> bool {
        self.position(id)
            .is_some_and(|idx| self.items[idx].activate(host))
    }

    pub fn get(&self, id: u64) -> Option<&EventMessage> {
        self.position(id).map(|idx| &self.items[idx])
    }

    fn position(&self, id: u64) -> Option<usize> {
        // Ids are assigned in increasing order and removal keeps order.
        self.items.binary_search_by_key(&id, EventMessage::id).ok()
    }
}

impl Drop for FeedState {
    fn drop(&mut self) {
        self.clear();
    }
}
