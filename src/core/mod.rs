//! Core player logic.
//!
//! This module contains:
//! - PlaybackController: Stopped / Playing / Paused state machine
//! - PlaylistRegistry: case-insensitive playlist ownership
//! - SearchService: flag-aware title and tag search
//! - Player: the facade that owns all of the above and routes moderation

pub mod playback;
pub mod player;
pub mod playlists;
pub mod search;

// Re-export commonly used types
pub use playback::PlaybackController;
pub use player::{FlagApplied, Player};
pub use playlists::PlaylistRegistry;
pub use search::SearchService;
