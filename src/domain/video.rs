//! Video entity and its moderation record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reason recorded when a video is flagged without an explicit one
pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

/// Stable video identifier, unique within a catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Create an id from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::borrow::Borrow<str> for VideoId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VideoId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for VideoId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Moderation record attached to a flagged video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
    /// Human-readable reason
    pub reason: String,

    /// When the flag was set
    pub flagged_at: DateTime<Utc>,
}

impl Flag {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            flagged_at: Utc::now(),
        }
    }
}

/// A single video in the catalog.
///
/// Identity, title and tags are fixed at load time. The moderation record
/// is the only mutable part and is changed exclusively through the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    id: VideoId,
    title: String,
    #[serde(default)]
    tags: Vec<String>,

    #[serde(skip)]
    flag: Option<Flag>,
}

impl Video {
    /// Create an unflagged video
    pub fn new(
        id: impl Into<VideoId>,
        title: impl Into<String>,
        tags: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags: tags.into_iter().map(Into::into).collect(),
            flag: None,
        }
    }

    pub fn id(&self) -> &VideoId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Tags in their original order
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn is_flagged(&self) -> bool {
        self.flag.is_some()
    }

    /// The moderation record, present iff the video is flagged
    pub fn flag(&self) -> Option<&Flag> {
        self.flag.as_ref()
    }

    /// Reason the video was flagged, if it is
    pub fn flag_reason(&self) -> Option<&str> {
        self.flag.as_ref().map(|f| f.reason.as_str())
    }

    /// Case-insensitive exact match against any tag
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag_lower = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag_lower)
    }

    pub(crate) fn set_flag(&mut self, flag: Flag) {
        self.flag = Some(flag);
    }

    pub(crate) fn clear_flag(&mut self) -> Option<Flag> {
        self.flag.take()
    }
}
