//! Error type for the fallible edges of the application.
//!
//! The feed core itself never fails: unknown event types, missing URL fields and
//! bad timestamps all degrade to "render less". Errors only come from the shell
//! around it (reading feed documents and settings, starting the runtime, asking the
//! host to open a link).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    /// A feed document or settings file could not be read or written.
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed JSON in a feed document or settings file.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The host refused or failed to open an external link.
    #[error("Host error: {0}")]
    Host(String),

    /// The tokio runtime or backend thread could not be started.
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl FeedError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
