use std::path::PathBuf;

use crate::about::Release;
use crate::feed::{EventRecord, Identity, Team};

/// Actions sent from the UI to the Backend
#[derive(Debug, Clone)]
pub enum BackendAction {
    /// Read a feed document and deliver its records
    LoadFeed(PathBuf),
    /// Stop the backend loop
    Shutdown,
}

/// Events sent from the Backend to the UI
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// A feed document was read
    FeedLoaded {
        events: Vec<EventRecord>,
        user: Option<Identity>,
        team: Option<Team>,
    },
    /// Release metadata for the about window
    ReleasesLoaded(Vec<Release>),
    /// Something went wrong in the backend
    Error(String),
}
