use serde::{Deserialize, Serialize};

/// Duration assumed when the detail lookup has nothing for a video
pub const DEFAULT_DURATION: &str = "PT0S";
/// View count assumed when the detail lookup has nothing for a video
pub const DEFAULT_VIEW_COUNT: &str = "0";

/// A video as returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub channel: String,
    /// Formatted view count (e.g. "1.5M")
    pub views: String,
    /// Formatted duration (e.g. "1:02:03")
    pub duration: String,
    pub thumbnail: String,
    pub description: String,
}

/// Success body: `{"videos": [...]}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VideoList {
    pub videos: Vec<Video>,
}

// ============================================================================
// YouTube Data API v3 Types
// ============================================================================

/// Raw response from GET /search
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchItem {
    pub id: SearchItemId,
    #[serde(default)]
    pub snippet: SearchSnippet,
}

impl SearchItem {
    /// The video id, if this result is a video at all
    pub fn video_id(&self) -> Option<&str> {
        self.id.video_id.as_deref()
    }
}

/// Resource id of a search result; only video results carry `videoId`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItemId {
    #[serde(default)]
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSnippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub channel_title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Thumbnails {
    #[serde(default)]
    pub medium: Option<Thumbnail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    #[serde(default)]
    pub url: String,
}

/// Raw response from GET /videos
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoDetails>,
}

/// Content details and statistics for one video
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetails {
    pub id: String,
    #[serde(default)]
    pub content_details: Option<ContentDetails>,
    #[serde(default)]
    pub statistics: Option<Statistics>,
}

impl VideoDetails {
    /// ISO-8601 duration, `PT0S` when absent
    pub fn duration(&self) -> &str {
        self.content_details
            .as_ref()
            .and_then(|details| details.duration.as_deref())
            .unwrap_or(DEFAULT_DURATION)
    }

    /// Raw view count string, `0` when absent or hidden
    pub fn view_count(&self) -> &str {
        self.statistics
            .as_ref()
            .and_then(|stats| stats.view_count.as_deref())
            .unwrap_or(DEFAULT_VIEW_COUNT)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentDetails {
    #[serde(default)]
    pub duration: Option<String>,
}

/// The API reports counters as decimal strings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    #[serde(default)]
    pub view_count: Option<String>,
}
