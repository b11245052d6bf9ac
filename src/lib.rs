//! vidplayer - In-memory video catalog player
//!
//! Tracks a fixed library of videos, exposes playback state
//! (playing/paused/stopped), organizes videos into named playlists,
//! supports moderation (flag/allow) and simple search.
//!
//! # Architecture
//!
//! A single `Player` owns all state and is threaded through the
//! command interface:
//! - The catalog is loaded once and never changes membership
//! - Flagging the active video stops playback
//! - Flagged videos stay in playlists but cannot be played, found or added
//!
//! # Modules
//!
//! - `domain`: Data structures (Video, Playlist, PlaybackState, PlayerError)
//! - `library`: Catalog and catalog loading
//! - `core`: Playback, playlists, search and the Player facade
//! - `cli`: Command-line interface and interactive shell
//!
//! # Usage
//!
//! ```bash
//! # Interactive shell over the bundled catalog
//! vidplayer
//!
//! # Search a custom catalog
//! vidplayer --catalog videos.json search cat
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod library;

// Re-export main types at crate root for convenience
pub use self::core::{FlagApplied, PlaybackController, Player, PlaylistRegistry, SearchService};
pub use domain::{
    Entity, Flag, PauseOutcome, PlayStarted, PlaybackState, PlayerError, PlayerResult, Playlist,
    PlaylistName, Video, VideoId,
};
pub use library::{CatalogFormat, VideoCatalog};
