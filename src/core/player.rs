//! The player: one owner for catalog, playlists and playback.
//!
//! Construct once from a loaded catalog and thread it through the command
//! interface. Moderation goes through `flag`/`allow` here so a flagged video
//! can never stay active in playback.

use rand::Rng;
use tracing::{debug, info};

use crate::domain::{
    PauseOutcome, PlayStarted, PlaybackState, Playlist, PlayerError, PlayerResult, Video, VideoId,
    DEFAULT_FLAG_REASON,
};
use crate::library::VideoCatalog;

use super::playback::PlaybackController;
use super::playlists::PlaylistRegistry;
use super::search::SearchService;

/// Result of a successful `flag`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagApplied {
    pub id: VideoId,
    pub reason: String,

    /// Whether the flagged video was active and playback was stopped
    pub stopped_playback: bool,
}

/// Video player facade
#[derive(Debug)]
pub struct Player {
    catalog: VideoCatalog,
    playlists: PlaylistRegistry,
    playback: PlaybackController,
    default_flag_reason: String,
}

impl Player {
    /// Create a player over a loaded catalog
    pub fn new(catalog: VideoCatalog) -> Self {
        Self {
            catalog,
            playlists: PlaylistRegistry::new(),
            playback: PlaybackController::new(),
            default_flag_reason: DEFAULT_FLAG_REASON.to_string(),
        }
    }

    /// Override the reason used when `flag` is called without one
    pub fn with_default_flag_reason(mut self, reason: impl Into<String>) -> Self {
        self.default_flag_reason = reason.into();
        self
    }

    pub fn catalog(&self) -> &VideoCatalog {
        &self.catalog
    }

    pub fn playlists(&self) -> &PlaylistRegistry {
        &self.playlists
    }

    /// Look up a video by id
    pub fn video(&self, id: &str) -> Option<&Video> {
        self.catalog.get(id)
    }

    /// All videos sorted by title
    pub fn all_videos_sorted(&self) -> Vec<&Video> {
        self.catalog.list_sorted()
    }

    // ------------------------------------------------------------------
    // Playback
    // ------------------------------------------------------------------

    pub fn state(&self) -> &PlaybackState {
        self.playback.state()
    }

    pub fn play(&mut self, id: &str) -> PlayerResult<PlayStarted> {
        self.playback.play(&self.catalog, id)
    }

    pub fn play_random(&mut self) -> PlayerResult<PlayStarted> {
        self.playback.play_random(&self.catalog)
    }

    pub fn play_random_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> PlayerResult<PlayStarted> {
        self.playback.play_random_with(&self.catalog, rng)
    }

    pub fn stop(&mut self) -> PlayerResult<VideoId> {
        self.playback.stop()
    }

    pub fn pause(&mut self) -> PlayerResult<PauseOutcome> {
        self.playback.pause()
    }

    pub fn resume(&mut self) -> PlayerResult<VideoId> {
        self.playback.resume()
    }

    /// The active video and whether it is paused
    pub fn current(&self) -> Option<(&Video, bool)> {
        self.playback.current(&self.catalog)
    }

    // ------------------------------------------------------------------
    // Playlists
    // ------------------------------------------------------------------

    pub fn create_playlist(&mut self, name: &str) -> PlayerResult<&Playlist> {
        self.playlists.create(name)
    }

    /// Case-insensitive playlist lookup
    pub fn playlist(&self, name: &str) -> PlayerResult<&Playlist> {
        self.playlists
            .get(name)
            .ok_or_else(|| PlayerError::playlist_not_found(name))
    }

    /// Append a video to a playlist. Flagged videos cannot be added.
    pub fn add_to_playlist(&mut self, name: &str, id: &str) -> PlayerResult<&Video> {
        let playlist = self
            .playlists
            .get_mut(name)
            .ok_or_else(|| PlayerError::playlist_not_found(name))?;
        let video = self
            .catalog
            .get(id)
            .ok_or_else(|| PlayerError::video_not_found(id))?;

        if let Some(reason) = video.flag_reason() {
            return Err(PlayerError::Flagged {
                id: video.id().clone(),
                reason: reason.to_string(),
            });
        }

        if !playlist.add(video.id()) {
            return Err(PlayerError::DuplicateInPlaylist {
                playlist: name.to_string(),
                id: video.id().clone(),
            });
        }

        debug!(playlist = name, video_id = %video.id(), "Added video to playlist");
        Ok(video)
    }

    /// Remove a video from a playlist
    pub fn remove_from_playlist(&mut self, name: &str, id: &str) -> PlayerResult<&Video> {
        let playlist = self
            .playlists
            .get_mut(name)
            .ok_or_else(|| PlayerError::playlist_not_found(name))?;
        let video = self
            .catalog
            .get(id)
            .ok_or_else(|| PlayerError::video_not_found(id))?;

        if !playlist.remove(video.id()) {
            return Err(PlayerError::NotInPlaylist {
                playlist: name.to_string(),
                id: video.id().clone(),
            });
        }

        debug!(playlist = name, video_id = %video.id(), "Removed video from playlist");
        Ok(video)
    }

    /// Remove every video from a playlist, keeping the playlist
    pub fn clear_playlist(&mut self, name: &str) -> PlayerResult<()> {
        let playlist = self
            .playlists
            .get_mut(name)
            .ok_or_else(|| PlayerError::playlist_not_found(name))?;
        playlist.clear();
        debug!(playlist = name, "Cleared playlist");
        Ok(())
    }

    pub fn delete_playlist(&mut self, name: &str) -> PlayerResult<()> {
        if self.playlists.delete(name) {
            Ok(())
        } else {
            Err(PlayerError::playlist_not_found(name))
        }
    }

    /// Videos of a playlist in insertion order, flagged members included
    pub fn playlist_videos(&self, name: &str) -> PlayerResult<Vec<&Video>> {
        let playlist = self.playlist(name)?;
        Ok(playlist
            .videos()
            .iter()
            .filter_map(|id| self.catalog.get(id.as_str()))
            .collect())
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    pub fn search(&self) -> SearchService<'_> {
        SearchService::new(&self.catalog)
    }

    pub fn search_titles(&self, term: &str) -> Vec<&Video> {
        self.search().by_title_substring(term)
    }

    pub fn search_tag(&self, tag: &str) -> Vec<&Video> {
        self.search().by_tag(tag)
    }

    // ------------------------------------------------------------------
    // Moderation
    // ------------------------------------------------------------------

    /// Flag a video, stopping playback if it is the active one
    pub fn flag(&mut self, id: &str, reason: Option<&str>) -> PlayerResult<FlagApplied> {
        let reason = reason
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(self.default_flag_reason.as_str())
            .to_string();

        let video_id = self.catalog.flag(id, &reason)?.id().clone();
        let stopped_playback = self.playback.force_stop_if_playing(&video_id);
        if stopped_playback {
            info!(video_id = %video_id, "Stopped playback of flagged video");
        }

        Ok(FlagApplied {
            id: video_id,
            reason,
            stopped_playback,
        })
    }

    /// Clear a video's flag
    pub fn allow(&mut self, id: &str) -> PlayerResult<&Video> {
        self.catalog.allow(id)
    }
}
