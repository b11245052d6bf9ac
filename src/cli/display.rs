//! Human-readable rendering of videos and player failures.

use crate::domain::{Entity, PlayerError, Video};

/// `Title (id) [tags]`, with a flag suffix when flagged
pub fn video_line(video: &Video) -> String {
    let mut line = format!(
        "{} ({}) [{}]",
        video.title(),
        video.id(),
        video.tags().join(" ")
    );
    if let Some(reason) = video.flag_reason() {
        line.push_str(&format!(" - FLAGGED (reason: {})", reason));
    }
    line
}

/// Short explanation of why an operation failed
pub fn reason(err: &PlayerError) -> String {
    match err {
        PlayerError::NotFound {
            entity: Entity::Video,
            ..
        } => "Video does not exist".to_string(),
        PlayerError::NotFound {
            entity: Entity::Playlist,
            ..
        } => "Playlist does not exist".to_string(),
        PlayerError::AlreadyExists { .. } => {
            "A playlist with the same name already exists".to_string()
        }
        PlayerError::AlreadyFlagged { .. } => "Video is already flagged".to_string(),
        PlayerError::NotFlagged { .. } => "Video is not flagged".to_string(),
        PlayerError::Flagged { reason, .. } => {
            format!("Video is currently flagged (reason: {})", reason)
        }
        PlayerError::NothingPlaying => "No video is currently playing".to_string(),
        PlayerError::NotPaused => "Video is not paused".to_string(),
        PlayerError::NoneAvailable => "No videos available".to_string(),
        PlayerError::DuplicateInPlaylist { .. } => "Video already added".to_string(),
        PlayerError::NotInPlaylist { .. } => "Video is not in playlist".to_string(),
    }
}

/// `<action>: <reason>`
pub fn cannot(action: &str, err: &PlayerError) -> String {
    format!("{}: {}", action, reason(err))
}
