//! Domain types for the video player.
//!
//! This module contains the plain data structures:
//! - Video: catalog entry and its moderation flag
//! - Playlist: named list of video references
//! - PlaybackState: Stopped / Playing / Paused
//! - PlayerError: failure kinds for every operation

pub mod errors;
pub mod playback;
pub mod playlist;
pub mod video;

// Re-export commonly used types
pub use errors::{Entity, PlayerError, PlayerResult};
pub use playback::{PauseOutcome, PlayStarted, PlaybackState};
pub use playlist::{Playlist, PlaylistName};
pub use video::{Flag, Video, VideoId, DEFAULT_FLAG_REASON};
