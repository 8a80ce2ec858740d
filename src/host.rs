//! Capabilities provided by the host environment.
//!
//! Everything here is optional. When the app runs outside a real window (tests, or
//! a host that does not expose link opening) the capability is simply absent and
//! callers degrade to a no-op.

use eframe::egui;
use tracing::{debug, warn};

use crate::error::FeedError;

/// Opens a URL in the system's default handler.
pub trait LinkOpener {
    fn open_external(&self, url: &str) -> Result<(), FeedError>;
}

/// Opens links through egui, which hands them to the platform browser.
#[derive(Clone)]
pub struct EguiLinkOpener {
    ctx: egui::Context,
}

impl EguiLinkOpener {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl LinkOpener for EguiLinkOpener {
    fn open_external(&self, url: &str) -> Result<(), FeedError> {
        self.ctx.open_url(egui::OpenUrl::new_tab(url));
        Ok(())
    }
}

#[derive(Default)]
pub struct Host {
    link_opener: Option<Box<dyn LinkOpener>>,
    version: Option<String>,
}

impl Host {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_link_opener(mut self, opener: impl LinkOpener + 'static) -> Self {
        self.link_opener = Some(Box::new(opener));
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn link_opener(&self) -> Option<&dyn LinkOpener> {
        self.link_opener.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Fire-and-forget link opening. Returns whether an opener was available; a
    /// failure inside the opener is logged and otherwise swallowed.
    pub fn open_external(&self, url: &str) -> bool {
        let Some(opener) = self.link_opener() else {
            debug!(url, "no link opener available, ignoring");
            return false;
        };
        if let Err(e) = opener.open_external(url) {
            warn!(url, error = %e, "failed to open external link");
        }
        true
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::LinkOpener;
    use crate::error::FeedError;

    /// Records every URL it is asked to open.
    #[derive(Clone, Default)]
    pub struct RecordingOpener {
        pub opened: Rc<RefCell<Vec<String>>>,
    }

    impl LinkOpener for RecordingOpener {
        fn open_external(&self, url: &str) -> Result<(), FeedError> {
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    /// Always fails, to check failures stay inside the host.
    pub struct FailingOpener;

    impl LinkOpener for FailingOpener {
        fn open_external(&self, _url: &str) -> Result<(), FeedError> {
            Err(FeedError::Host("no default browser".into()))
        }
    }
}
