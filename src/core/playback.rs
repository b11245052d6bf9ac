//! Playback state machine.
//!
//! States are `Stopped`, `Playing(id)` and `Paused(id)`, starting at
//! `Stopped`. Any non-stopped state references a catalog video that is not
//! flagged; the player calls `force_stop_if_playing` when that would break.

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::debug;

use crate::domain::{PauseOutcome, PlayStarted, PlaybackState, PlayerError, PlayerResult, Video, VideoId};
use crate::library::VideoCatalog;

/// Owns the single current playback state
#[derive(Debug, Default)]
pub struct PlaybackController {
    state: PlaybackState,
}

impl PlaybackController {
    /// Create a controller in the `Stopped` state
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Start playing a video, implicitly stopping whatever was active
    pub fn play(&mut self, catalog: &VideoCatalog, id: &str) -> PlayerResult<PlayStarted> {
        let video = catalog
            .get(id)
            .ok_or_else(|| PlayerError::video_not_found(id))?;

        if let Some(reason) = video.flag_reason() {
            return Err(PlayerError::Flagged {
                id: video.id().clone(),
                reason: reason.to_string(),
            });
        }

        let stopped = std::mem::take(&mut self.state).video_id().cloned();
        if let Some(ref previous) = stopped {
            debug!(video_id = %previous, "Implicitly stopping video");
        }

        self.state = PlaybackState::Playing(video.id().clone());
        debug!(video_id = %video.id(), "Playing video");

        Ok(PlayStarted {
            stopped,
            playing: video.id().clone(),
        })
    }

    /// Play a uniformly random unflagged video
    pub fn play_random(&mut self, catalog: &VideoCatalog) -> PlayerResult<PlayStarted> {
        self.play_random_with(catalog, &mut rand::rng())
    }

    /// Play a random unflagged video using the given source of randomness
    pub fn play_random_with<R: Rng + ?Sized>(
        &mut self,
        catalog: &VideoCatalog,
        rng: &mut R,
    ) -> PlayerResult<PlayStarted> {
        let candidates = catalog.unflagged();
        let chosen = candidates
            .choose(rng)
            .map(|v| v.id().clone())
            .ok_or(PlayerError::NoneAvailable)?;

        self.play(catalog, chosen.as_str())
    }

    /// Stop the active video, returning its id
    pub fn stop(&mut self) -> PlayerResult<VideoId> {
        match std::mem::take(&mut self.state) {
            PlaybackState::Stopped => Err(PlayerError::NothingPlaying),
            PlaybackState::Playing(id) | PlaybackState::Paused(id) => {
                debug!(video_id = %id, "Stopped video");
                Ok(id)
            }
        }
    }

    /// Pause the active video; pausing twice is a no-op
    pub fn pause(&mut self) -> PlayerResult<PauseOutcome> {
        match &self.state {
            PlaybackState::Stopped => Err(PlayerError::NothingPlaying),
            PlaybackState::Paused(id) => Ok(PauseOutcome::AlreadyPaused(id.clone())),
            PlaybackState::Playing(id) => {
                let id = id.clone();
                debug!(video_id = %id, "Paused video");
                self.state = PlaybackState::Paused(id.clone());
                Ok(PauseOutcome::Paused(id))
            }
        }
    }

    /// Resume a paused video
    pub fn resume(&mut self) -> PlayerResult<VideoId> {
        match &self.state {
            PlaybackState::Stopped => Err(PlayerError::NothingPlaying),
            PlaybackState::Playing(_) => Err(PlayerError::NotPaused),
            PlaybackState::Paused(id) => {
                let id = id.clone();
                debug!(video_id = %id, "Resumed video");
                self.state = PlaybackState::Playing(id.clone());
                Ok(id)
            }
        }
    }

    /// The active video and whether it is paused
    pub fn current<'a>(&self, catalog: &'a VideoCatalog) -> Option<(&'a Video, bool)> {
        let id = self.state.video_id()?;
        catalog
            .get(id.as_str())
            .map(|video| (video, self.state.is_paused()))
    }

    /// Stop playback only if `id` is the active video. Returns whether it stopped.
    pub fn force_stop_if_playing(&mut self, id: &VideoId) -> bool {
        if !self.state.references(id) {
            return false;
        }
        self.state = PlaybackState::Stopped;
        debug!(video_id = %id, "Forced stop");
        true
    }
}
