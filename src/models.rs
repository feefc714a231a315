use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Channel {
    pub channel_id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub custom_url: Option<String>,
    pub published_at: Option<String>,
    pub thumbnail_url: Option<String>,
    pub view_count: Option<u64>,
    pub subscriber_count: Option<u64>,
    pub video_count: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct Video {
    pub video_id: String,
    pub title: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub view_count: Option<u64>,
    pub like_count: Option<u64>,
    pub comment_count: Option<u64>,
    pub duration_seconds: u64,
}

#[derive(Debug, Clone)]
pub struct PlaylistMetadata {
    pub playlist_id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub channel_title: Option<String>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct PlaylistItem {
    pub id: String,
    pub snippet: PlaylistItemSnippet,
    #[serde(rename = "contentDetails")]
    pub content_details: PlaylistItemContentDetails,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct PlaylistItemSnippet {
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
    pub title: String,
    #[serde(rename = "playlistId")]
    pub playlist_id: String,
    pub position: u32,
    #[serde(rename = "resourceId")]
    pub resource_id: PlaylistItemResourceId,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct PlaylistItemResourceId {
    pub kind: String,
    #[serde(rename = "videoId")]
    pub video_id: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct PlaylistItemContentDetails {
    #[serde(rename = "videoId")]
    pub video_id: String,
    #[serde(rename = "videoPublishedAt")]
    pub video_published_at: Option<String>,
}
