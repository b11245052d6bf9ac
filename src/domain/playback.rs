//! Playback state.

use serde::{Deserialize, Serialize};

use super::video::VideoId;

/// Current playback status, referencing at most one video
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "video_id")]
pub enum PlaybackState {
    /// Nothing loaded
    #[default]
    Stopped,

    /// Video is playing
    Playing(VideoId),

    /// Video is loaded but paused
    Paused(VideoId),
}

impl PlaybackState {
    /// The active video, if any
    pub fn video_id(&self) -> Option<&VideoId> {
        match self {
            PlaybackState::Stopped => None,
            PlaybackState::Playing(id) | PlaybackState::Paused(id) => Some(id),
        }
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self, PlaybackState::Stopped)
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, PlaybackState::Paused(_))
    }

    /// Whether the playing or paused video is `id`
    pub fn references(&self, id: &VideoId) -> bool {
        self.video_id() == Some(id)
    }
}

/// Result of a successful `play`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayStarted {
    /// Video that was implicitly stopped first, if any
    pub stopped: Option<VideoId>,

    /// Video now playing
    pub playing: VideoId,
}

/// Result of a successful `pause`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PauseOutcome {
    /// Transitioned from playing to paused
    Paused(VideoId),

    /// Was already paused; nothing changed
    AlreadyPaused(VideoId),
}
