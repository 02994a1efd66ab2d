//! Bodha Library
//!
//! A small community forum browsed from the terminal.
//!
//! # Features
//!
//! - Categories with case-insensitive search
//! - Per-category post lists with pinned posts first
//! - Local post creation (kept in memory only)
//! - Logo and mobile-number login screens
//!
//! # Modules
//!
//! - `forum`: categories, posts and the in-memory store
//! - `login`: phone number entry for the login screen
//! - `ui`: terminal user interface, event handling and logging
pub mod forum;
pub mod login;
pub mod ui;

pub use forum::{Category, DraftRejection, ForumStore, Post};
pub use ui::{App, AppMode, Event, EventHandler, Screen, Tui, View, init_panic_hook, logging};
