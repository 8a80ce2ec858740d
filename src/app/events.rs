//! Event processing from the backend and the refresh timers

use tracing::{debug, error};

use super::FeedApp;
use crate::feed::{RefreshTarget, RefreshTick};
use crate::protocol::GuiEvent;

impl FeedApp {
    /// Drain both channels. Returns whether anything visible changed.
    pub fn process_events(&mut self) -> bool {
        let mut changed = false;

        while let Ok(event) = self.event_rx.try_recv() {
            self.process_single_event(event);
            changed = true;
        }

        while let Ok(tick) = self.tick_rx.try_recv() {
            changed |= self.process_tick(tick);
        }

        changed
    }

    fn process_single_event(&mut self, event: GuiEvent) {
        match event {
            GuiEvent::FeedLoaded { events, user, team } => {
                self.feed.set_identity(user.unwrap_or_default(), team);
                self.feed.replace_events(events);
                self.status = None;
            }
            GuiEvent::ReleasesLoaded(releases) => {
                let now = self.clock.now();
                self.about.set_releases(&releases, now);
            }
            GuiEvent::Error(msg) => {
                error!(%msg, "backend error");
                self.status = Some(msg);
            }
        }
    }

    fn process_tick(&mut self, tick: RefreshTick) -> bool {
        match tick.target {
            RefreshTarget::About => {
                if !self.about.is_ticking() {
                    debug!("about tick after close ignored");
                    return false;
                }
                let now = self.clock.now();
                self.about.refresh(now);
                true
            }
            RefreshTarget::Item(_) => self.feed.apply_tick(tick),
        }
    }
}
