//! Now desktop event feed.
//!
//! This module re-exports the core components for testing and extension.

pub mod about;
pub mod app;
pub mod backend;
pub mod config;
pub mod error;
pub mod feed;
pub mod host;
pub mod logging;
pub mod protocol;
pub mod state;
pub mod ui;
