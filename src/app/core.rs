//! Core FeedApp struct definition and initialization

use crossbeam_channel::{unbounded, Receiver, Sender};
use eframe::egui;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::about::AboutModel;
use crate::backend::Backend;
use crate::config::{save_settings, Settings};
use crate::feed::{Clock, MessageRegistry, RefreshScheduler, RefreshTarget, RefreshTick, SystemClock};
use crate::host::{EguiLinkOpener, Host};
use crate::protocol::{BackendAction, GuiEvent};
use crate::state::FeedState;
use crate::ui::theme::{apply_app_style, FeedTheme};

pub struct FeedApp {
    // Displayed items and the identity they are rendered for
    pub feed: FeedState,
    pub about: AboutModel,
    pub host: Host,
    pub settings: Settings,

    // Channels for backend communication
    pub action_tx: Sender<BackendAction>,
    pub event_rx: Receiver<GuiEvent>,
    pub tick_rx: Receiver<RefreshTick>,

    pub show_about: bool,
    /// Last backend error, shown above the feed until the next successful load
    pub status: Option<String>,

    pub(super) scheduler: Option<RefreshScheduler>,
    pub(super) clock: Rc<dyn Clock>,
    persist_settings: bool,

    // Declared last: items cancel their timers before the runtime goes away.
    backend: Option<Backend>,
}

impl FeedApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, feed_path: Option<PathBuf>) -> Self {
        apply_app_style(&cc.egui_ctx, &FeedTheme::for_mode(settings.dark_mode()));

        let host = Host::new()
            .with_link_opener(EguiLinkOpener::new(cc.egui_ctx.clone()))
            .with_version(settings.version());

        let mut app = Self::with_host(settings, host, Rc::new(SystemClock));
        app.persist_settings = true;
        if let Some(path) = feed_path.or_else(|| app.settings.feed_path.clone()) {
            app.load(path);
        }
        app
    }

    /// Everything except the window: backend thread, timers and feed state.
    /// Settings are not written back on drop.
    pub fn with_host(settings: Settings, host: Host, clock: Rc<dyn Clock>) -> Self {
        // Create channels for UI <-> Backend
        let (action_tx, action_rx) = unbounded::<BackendAction>();
        let (event_tx, event_rx) = unbounded::<GuiEvent>();
        let (tick_tx, tick_rx) = unbounded::<RefreshTick>();

        let mut status = None;
        let backend = match Backend::start(action_tx.clone(), action_rx, event_tx) {
            Ok(backend) => Some(backend),
            Err(e) => {
                error!(error = %e, "backend unavailable, ages will not refresh");
                status = Some(e.to_string());
                None
            }
        };
        let scheduler = backend
            .as_ref()
            .map(|b| RefreshScheduler::new(b.handle(), tick_tx, settings.refresh_interval()));

        let registry = Arc::new(MessageRegistry::with_defaults());
        info!(renderers = registry.len(), "message registry ready");

        let feed = FeedState::new(registry, scheduler.clone(), Box::new(clock.clone()));
        let about = AboutModel::new(&host, settings.dark_mode());

        Self {
            feed,
            about,
            host,
            settings,
            action_tx,
            event_rx,
            tick_rx,
            show_about: false,
            status,
            scheduler,
            clock,
            persist_settings: false,
            backend,
        }
    }

    pub fn theme(&self) -> FeedTheme {
        FeedTheme::for_mode(self.settings.dark_mode())
    }

    /// Ask the backend to read a feed document.
    pub fn load(&mut self, path: PathBuf) {
        info!(path = %path.display(), "loading feed");
        if self.action_tx.send(BackendAction::LoadFeed(path)).is_err() {
            warn!("backend is gone, feed not loaded");
        }
    }

    /// Flip between light and dark. Returns the new mode.
    pub fn toggle_theme(&mut self) -> bool {
        let dark = !self.settings.dark_mode();
        self.settings.theme = if dark { "dark" } else { "light" }.to_string();
        self.about.dark_mode = dark;
        dark
    }

    pub(super) fn apply_theme(&self, ctx: &egui::Context) {
        apply_app_style(ctx, &self.theme());
    }

    pub fn open_about(&mut self) {
        if self.about.is_ticking() {
            return;
        }
        self.show_about = true;
        self.about.refresh(self.clock.now());
        let handle = self
            .scheduler
            .as_ref()
            .map(|s| s.schedule(RefreshTarget::About));
        self.about.open(handle);
    }

    pub fn close_about(&mut self) {
        self.show_about = false;
        self.about.close();
    }

    pub fn is_backend_running(&self) -> bool {
        self.backend.is_some()
    }

    /// Click on a feed item.
    pub fn activate(&self, id: u64) -> bool {
        self.feed.activate(id, &self.host)
    }
}

impl Drop for FeedApp {
    fn drop(&mut self) {
        // Cancel item timers before the backend (and its runtime) shuts down.
        self.feed.clear();
        self.about.close();

        // Persist settings on exit
        if self.persist_settings {
            if let Err(e) = save_settings(&self.settings) {
                warn!(error = %e, "failed to save settings");
            }
        }
    }
}
