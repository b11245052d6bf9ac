//! Playlists: named, ordered, duplicate-free lists of video references.

use serde::{Deserialize, Serialize};

use super::video::VideoId;

/// Playlist name with case-preserving display and case-insensitive identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistName {
    display: String,
    key: String,
}

impl PlaylistName {
    pub fn new(name: impl Into<String>) -> Self {
        let display = name.into();
        let key = Self::key_for(&display);
        Self { display, key }
    }

    /// Lookup key used for identity (lower-cased)
    pub fn key_for(name: &str) -> String {
        name.to_lowercase()
    }

    /// The name exactly as the user gave it
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl PartialEq for PlaylistName {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for PlaylistName {}

impl std::fmt::Display for PlaylistName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display)
    }
}

/// A named playlist.
///
/// Holds video ids, not videos: the catalog owns the entities and a later
/// flag does not evict a member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    name: PlaylistName,
    videos: Vec<VideoId>,
}

impl Playlist {
    /// Create an empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: PlaylistName::new(name),
            videos: Vec::new(),
        }
    }

    pub fn name(&self) -> &PlaylistName {
        &self.name
    }

    /// Display title (case preserved)
    pub fn title(&self) -> &str {
        self.name.display()
    }

    /// Append a video; returns false without change if already present
    pub fn add(&mut self, id: &VideoId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.videos.push(id.clone());
        true
    }

    /// Remove a video; returns false if it was not present
    pub fn remove(&mut self, id: &VideoId) -> bool {
        match self.videos.iter().position(|v| v == id) {
            Some(pos) => {
                self.videos.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Empty the playlist, keeping its name
    pub fn clear(&mut self) {
        self.videos.clear();
    }

    pub fn contains(&self, id: &VideoId) -> bool {
        self.videos.contains(id)
    }

    /// Member ids in insertion order
    pub fn videos(&self) -> &[VideoId] {
        &self.videos
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}
