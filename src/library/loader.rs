//! Catalog loading.
//!
//! Two on-disk formats, picked by file extension:
//!
//! ```text
//! # videos.txt: title | id | comma-separated tags
//! Amazing Cats | amazing_cats_video_id | #cat , #animal
//! ```
//!
//! ```text
//! # videos.json
//! [{ "id": "amazing_cats_video_id", "title": "Amazing Cats", "tags": ["#cat"] }]
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;
use tracing::info;

use super::catalog::VideoCatalog;
use crate::domain::Video;

/// Catalog shipped with the binary
const BUNDLED_CATALOG: &str = include_str!("../../data/videos.txt");

/// Supported catalog file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// Pipe-delimited text, one video per line
    Text,

    /// JSON array of videos
    Json,
}

impl CatalogFormat {
    /// Detect the format from a file extension (text unless `.json`)
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => CatalogFormat::Json,
            _ => CatalogFormat::Text,
        }
    }

    /// Parse catalog content in this format
    pub fn parse(self, content: &str) -> Result<Vec<Video>> {
        match self {
            CatalogFormat::Text => parse_text(content),
            CatalogFormat::Json => parse_json(content),
        }
    }
}

/// Parse the pipe-delimited text format
pub fn parse_text(content: &str) -> Result<Vec<Video>> {
    let mut videos = Vec::new();

    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('|').map(str::trim).collect();
        if fields.len() < 2 || fields[1].is_empty() {
            anyhow::bail!(
                "Malformed catalog line {}: expected 'title | id | tags'",
                index + 1
            );
        }

        let tags = fields
            .get(2)
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        videos.push(Video::new(fields[1], fields[0], tags));
    }

    Ok(videos)
}

/// Parse the JSON array format
pub fn parse_json(content: &str) -> Result<Vec<Video>> {
    serde_json::from_str(content).context("Failed to parse catalog JSON")
}

/// Load a catalog file from disk
pub async fn load_catalog(path: &Path) -> Result<VideoCatalog> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read catalog: {}", path.display()))?;

    let videos = CatalogFormat::from_path(path)
        .parse(&content)
        .with_context(|| format!("Failed to load catalog: {}", path.display()))?;

    let catalog = VideoCatalog::from_videos(videos)
        .with_context(|| format!("Invalid catalog: {}", path.display()))?;

    info!(path = %path.display(), videos = catalog.count(), "Catalog loaded");
    Ok(catalog)
}

/// The catalog embedded in the binary
pub fn bundled_catalog() -> Result<VideoCatalog> {
    let videos = parse_text(BUNDLED_CATALOG).context("Failed to parse bundled catalog")?;
    Ok(VideoCatalog::from_videos(videos)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_line() {
        let videos = parse_text("Amazing Cats | amazing_cats_video_id | #cat , #animal\n").unwrap();

        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].title(), "Amazing Cats");
        assert_eq!(videos[0].id().as_str(), "amazing_cats_video_id");
        assert_eq!(videos[0].tags(), &["#cat".to_string(), "#animal".to_string()]);
    }

    #[test]
    fn test_parse_text_empty_tags_and_blank_lines() {
        let content = "\nVideo about nothing | nothing_video_id |\n\nNo Tags | no_tags\n";
        let videos = parse_text(content).unwrap();

        assert_eq!(videos.len(), 2);
        assert!(videos[0].tags().is_empty());
        assert!(videos[1].tags().is_empty());
    }

    #[test]
    fn test_parse_text_malformed_line() {
        let err = parse_text("Good | good_id | #a\njust a title\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_parse_json() {
        let content = r##"[
            {"id": "v1", "title": "Amazing Cat Video", "tags": ["#cat"]},
            {"id": "v2", "title": "Untagged"}
        ]"##;
        let videos = parse_json(content).unwrap();

        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0].tags(), &["#cat".to_string()]);
        assert!(videos[1].tags().is_empty());
        assert!(!videos[0].is_flagged());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(CatalogFormat::from_path(Path::new("videos.json")), CatalogFormat::Json);
        assert_eq!(CatalogFormat::from_path(Path::new("videos.JSON")), CatalogFormat::Json);
        assert_eq!(CatalogFormat::from_path(Path::new("videos.txt")), CatalogFormat::Text);
        assert_eq!(CatalogFormat::from_path(Path::new("videos")), CatalogFormat::Text);
    }

    #[test]
    fn test_bundled_catalog() {
        let catalog = bundled_catalog().unwrap();

        assert_eq!(catalog.count(), 5);
        assert_eq!(
            catalog.get("amazing_cats_video_id").map(|v| v.title()),
            Some("Amazing Cats")
        );
    }
}
