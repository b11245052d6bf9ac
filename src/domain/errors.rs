//! Failure kinds reported by player operations.
//!
//! Every operation reports one of these instead of a generic error. None is
//! fatal; turning a kind into a user-facing message is the caller's job.

use thiserror::Error;

use super::video::VideoId;

/// What a `NotFound` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Video,
    Playlist,
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Entity::Video => write!(f, "video"),
            Entity::Playlist => write!(f, "playlist"),
        }
    }
}

/// Player operation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    #[error("Unknown {entity}: {key}")]
    NotFound { entity: Entity, key: String },

    #[error("Playlist already exists: {name}")]
    AlreadyExists { name: String },

    #[error("Video already flagged: {id}")]
    AlreadyFlagged { id: VideoId },

    #[error("Video not flagged: {id}")]
    NotFlagged { id: VideoId },

    #[error("Video {id} is flagged: {reason}")]
    Flagged { id: VideoId, reason: String },

    #[error("No video is playing")]
    NothingPlaying,

    #[error("Video is not paused")]
    NotPaused,

    #[error("No unflagged videos available")]
    NoneAvailable,

    #[error("Video {id} already in playlist {playlist}")]
    DuplicateInPlaylist { playlist: String, id: VideoId },

    #[error("Video {id} not in playlist {playlist}")]
    NotInPlaylist { playlist: String, id: VideoId },
}

impl PlayerError {
    pub(crate) fn video_not_found(id: &str) -> Self {
        Self::NotFound {
            entity: Entity::Video,
            key: id.to_string(),
        }
    }

    pub(crate) fn playlist_not_found(name: &str) -> Self {
        Self::NotFound {
            entity: Entity::Playlist,
            key: name.to_string(),
        }
    }

    /// Check if this is a `NotFound` for the given entity
    pub fn is_not_found(&self, entity: Entity) -> bool {
        matches!(self, PlayerError::NotFound { entity: e, .. } if *e == entity)
    }
}

pub type PlayerResult<T> = std::result::Result<T, PlayerError>;
