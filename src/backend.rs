//! Backend thread: stands in for the host process.
//!
//! Runs a tokio runtime on its own thread, reads feed documents on request and posts
//! the results to the UI. The same runtime hosts the per-item refresh timers.

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use std::path::Path;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tokio::runtime::{Handle, Runtime};
use tracing::{info, warn};

use crate::error::FeedError;
use crate::feed::load_feed;
use crate::protocol::{BackendAction, GuiEvent};

/// Owns the runtime and the backend thread. Dropping it shuts both down.
pub struct Backend {
    action_tx: Sender<BackendAction>,
    thread: Option<JoinHandle<()>>,
    // Dropped last, after the loop thread has exited.
    runtime: Runtime,
}

impl Backend {
    pub fn start(
        action_tx: Sender<BackendAction>,
        action_rx: Receiver<BackendAction>,
        event_tx: Sender<GuiEvent>,
    ) -> Result<Self, FeedError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("now-feed-runtime")
            .enable_time()
            .build()
            .map_err(|e| FeedError::Runtime(format!("Failed to create Tokio runtime: {}", e)))?;

        let handle = runtime.handle().clone();
        let thread = thread::Builder::new()
            .name("now-feed-backend".into())
            .spawn(move || handle.block_on(run_backend(action_rx, event_tx)))
            .map_err(|e| FeedError::Runtime(format!("Failed to spawn backend thread: {}", e)))?;

        Ok(Self {
            action_tx,
            thread: Some(thread),
            runtime,
        })
    }

    /// Handle for spawning refresh timers.
    pub fn handle(&self) -> Handle {
        self.runtime.handle().clone()
    }
}

impl Drop for Backend {
    fn drop(&mut self) {
        let _ = self.action_tx.send(BackendAction::Shutdown);
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!("backend thread panicked");
            }
        }
    }
}

/// The backend loop. Returns on `Shutdown` or when every action sender is gone.
pub async fn run_backend(action_rx: Receiver<BackendAction>, event_tx: Sender<GuiEvent>) {
    loop {
        // Check for actions from the UI (non-blocking)
        match action_rx.try_recv() {
            Ok(BackendAction::LoadFeed(path)) => handle_load(&path, &event_tx).await,
            Ok(BackendAction::Shutdown) | Err(TryRecvError::Disconnected) => break,
            Err(TryRecvError::Empty) => {
                // Nothing to do, sleep a bit to avoid busy-looping
                tokio::time::sleep(Duration::from_millis(50)).await;
            }
        }
    }
    info!("backend stopped");
}

async fn handle_load(path: &Path, event_tx: &Sender<GuiEvent>) {
    match load_feed(path).await {
        Ok(feed) => {
            info!(path = %path.display(), events = feed.events.len(), "feed loaded");
            if !feed.releases.is_empty() {
                let _ = event_tx.send(GuiEvent::ReleasesLoaded(feed.releases));
            }
            let _ = event_tx.send(GuiEvent::FeedLoaded {
                events: feed.events,
                user: feed.user,
                team: feed.team,
            });
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "feed load failed");
            let _ = event_tx.send(GuiEvent::Error(e.to_string()));
        }
    }
}
