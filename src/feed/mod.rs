//! Event feed rendering core.
//!
//! - `record`: event records and identity context
//! - `url`: click-target resolution
//! - `time_ago`: compact relative ages
//! - `registry` / `messages`: type-tag dispatch to renderers
//! - `message`: one displayed item composing the above
//! - `refresh`: cancellable per-item refresh timers
//! - `document`: feed documents as delivered by the host

pub mod clock;
pub mod document;
pub mod message;
mod messages;
pub mod record;
pub mod refresh;
pub mod registry;
pub mod time_ago;
pub mod url;

pub use clock::{Clock, FixedClock, SystemClock};
pub use document::{load_feed, parse_feed, Feed};
pub use message::{EventMessage, MessageState, RenderedItem};
pub use record::{Actor, EventRecord, Identity, Team};
pub use refresh::{RefreshHandle, RefreshScheduler, RefreshTarget, RefreshTick};
pub use registry::{MessageRegistry, Renderer, Span, Summary};
pub use time_ago::format_age;
pub use url::{external_url, resolve_url};
