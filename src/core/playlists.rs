//! Registry of all playlists, keyed case-insensitively by name.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{Playlist, PlaylistName, PlayerError, PlayerResult};

/// Owns every playlist; at most one per case-insensitive name
#[derive(Debug, Default)]
pub struct PlaylistRegistry {
    playlists: HashMap<String, Playlist>,
}

impl PlaylistRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty playlist displayed exactly as `name`
    pub fn create(&mut self, name: &str) -> PlayerResult<&Playlist> {
        let key = PlaylistName::key_for(name);
        if self.playlists.contains_key(&key) {
            return Err(PlayerError::AlreadyExists {
                name: name.to_string(),
            });
        }

        debug!(playlist = name, "Created playlist");
        let playlist = self.playlists.entry(key).or_insert_with(|| Playlist::new(name));
        Ok(&*playlist)
    }

    /// Case-insensitive lookup
    pub fn get(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&PlaylistName::key_for(name))
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Playlist> {
        self.playlists.get_mut(&PlaylistName::key_for(name))
    }

    /// Remove a playlist by name; returns false if there was none
    pub fn delete(&mut self, name: &str) -> bool {
        let removed = self.playlists.remove(&PlaylistName::key_for(name)).is_some();
        if removed {
            debug!(playlist = name, "Deleted playlist");
        }
        removed
    }

    /// All playlists sorted by display title, case-insensitive
    pub fn list(&self) -> Vec<&Playlist> {
        let mut playlists: Vec<_> = self.playlists.values().collect();
        playlists.sort_by(|a, b| {
            a.name()
                .key()
                .cmp(b.name().key())
                .then_with(|| a.title().cmp(b.title()))
        });
        playlists
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_rejects_case_insensitive_duplicate() {
        let mut registry = PlaylistRegistry::new();

        assert!(registry.create("Foo").is_ok());
        assert_eq!(
            registry.create("foo").unwrap_err(),
            PlayerError::AlreadyExists {
                name: "foo".to_string()
            }
        );
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("FOO").map(Playlist::title), Some("Foo"));
    }

    #[test]
    fn test_delete() {
        let mut registry = PlaylistRegistry::new();
        registry.create("My List").unwrap();

        assert!(registry.delete("my list"));
        assert!(!registry.delete("My List"));
        assert!(registry.get("My List").is_none());
    }

    #[test]
    fn test_list_sorted_case_insensitive() {
        let mut registry = PlaylistRegistry::new();
        registry.create("beta").unwrap();
        registry.create("Alpha").unwrap();
        registry.create("Gamma").unwrap();

        let titles: Vec<_> = registry.list().iter().map(|p| p.title()).collect();
        assert_eq!(titles, vec!["Alpha", "beta", "Gamma"]);
    }

    #[test]
    fn test_recreate_after_delete() {
        let mut registry = PlaylistRegistry::new();
        registry.create("Mix").unwrap();
        registry.delete("MIX");

        assert_eq!(registry.create("mix").map(Playlist::title), Ok("mix"));
    }
}
