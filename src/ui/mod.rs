//! egui rendering, organized by component:
//! - `feed`: the event list
//! - `about`: the about window
//! - `avatar`: identicons for event actors
//! - `theme`: palettes and global styling

pub mod about;
pub mod avatar;
pub mod feed;
pub mod theme;

pub use theme::FeedTheme;
