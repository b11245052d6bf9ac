//! Catalog of all known videos.
//!
//! Membership is fixed at construction. The only mutation is the moderation
//! flag on individual videos, which the player routes through `flag`/`allow`.

use std::collections::HashMap;

use thiserror::Error;
use tracing::info;

use crate::domain::{Flag, PlayerError, PlayerResult, Video, VideoId};

/// Errors raised while assembling a catalog
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("Duplicate video id in catalog: {0}")]
    DuplicateId(VideoId),
}

/// Fixed set of videos keyed by id
#[derive(Debug, Clone, Default)]
pub struct VideoCatalog {
    videos: HashMap<VideoId, Video>,
}

impl VideoCatalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn from_videos(videos: impl IntoIterator<Item = Video>) -> Result<Self, CatalogError> {
        let mut map = HashMap::new();
        for video in videos {
            if map.contains_key(video.id()) {
                return Err(CatalogError::DuplicateId(video.id().clone()));
            }
            map.insert(video.id().clone(), video);
        }
        Ok(Self { videos: map })
    }

    /// Get a video by id
    pub fn get(&self, id: &str) -> Option<&Video> {
        self.videos.get(id)
    }

    /// All videos, in no particular order
    pub fn list(&self) -> Vec<&Video> {
        self.videos.values().collect()
    }

    /// All videos sorted by title, ties broken by id
    pub fn list_sorted(&self) -> Vec<&Video> {
        let mut videos = self.list();
        sort_by_title(&mut videos);
        videos
    }

    /// Videos eligible for playback (not flagged), sorted by id
    pub fn unflagged(&self) -> Vec<&Video> {
        let mut videos: Vec<_> = self.videos.values().filter(|v| !v.is_flagged()).collect();
        videos.sort_by(|a, b| a.id().cmp(b.id()));
        videos
    }

    /// Get the number of videos
    pub fn count(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// Mark a video as flagged
    pub(crate) fn flag(&mut self, id: &str, reason: &str) -> PlayerResult<&Video> {
        let video = self
            .videos
            .get_mut(id)
            .ok_or_else(|| PlayerError::video_not_found(id))?;

        if video.is_flagged() {
            return Err(PlayerError::AlreadyFlagged {
                id: video.id().clone(),
            });
        }

        video.set_flag(Flag::new(reason));
        info!(video_id = %video.id(), reason, "Video flagged");
        Ok(&*video)
    }

    /// Remove the flag from a video
    pub(crate) fn allow(&mut self, id: &str) -> PlayerResult<&Video> {
        let video = self
            .videos
            .get_mut(id)
            .ok_or_else(|| PlayerError::video_not_found(id))?;

        if video.clear_flag().is_none() {
            return Err(PlayerError::NotFlagged {
                id: video.id().clone(),
            });
        }

        info!(video_id = %video.id(), "Video flag removed");
        Ok(&*video)
    }
}

/// Sort videos by title ascending, ties broken by id
pub fn sort_by_title(videos: &mut [&Video]) {
    videos.sort_by(|a, b| a.title().cmp(b.title()).then_with(|| a.id().cmp(b.id())));
}
