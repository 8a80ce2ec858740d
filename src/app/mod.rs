//! Application module structure for FeedApp
//!
//! - `core`: FeedApp struct and initialization
//! - `events`: backend events and refresh ticks
//! - `update`: the per-frame update loop

pub mod core;
pub mod events;
pub mod update;

pub use core::FeedApp;
