use std::fmt;

use chrono::{DateTime, Utc};

use crate::models::Video;
use crate::{YouTubeClient, YouTubeError};

/// A single video's metadata, hydrated from the Data API.
///
/// Construction is strict: a missing video or a response without title,
/// publish timestamp or view count is an error, never a half-filled
/// record. Like and comment counts default to zero when the API withholds
/// them (comments disabled, likes hidden).
#[derive(Debug, Clone)]
pub struct VideoRecord {
    video_id: String,
    pub title: String,
    pub published_at: DateTime<Utc>,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
}

impl VideoRecord {
    pub async fn fetch(client: &mut YouTubeClient, video_id: &str) -> Result<Self, YouTubeError> {
        let mut videos = client.list_videos(vec![video_id.to_string()]).send().await?;

        if videos.is_empty() {
            return Err(YouTubeError::NotFound);
        }

        VideoRecord::try_from(videos.remove(0))
    }

    pub fn video_id(&self) -> &str {
        &self.video_id
    }

    /// Canonical short link for the video.
    pub fn short_url(&self) -> String {
        format!("https://youtu.be/{}", self.video_id)
    }
}

impl TryFrom<Video> for VideoRecord {
    type Error = YouTubeError;

    fn try_from(video: Video) -> Result<Self, YouTubeError> {
        Ok(VideoRecord {
            title: video.title.ok_or(YouTubeError::MissingField("snippet.title"))?,
            published_at: video
                .published_at
                .ok_or(YouTubeError::MissingField("snippet.publishedAt"))?,
            view_count: video
                .view_count
                .ok_or(YouTubeError::MissingField("statistics.viewCount"))?,
            like_count: video.like_count.unwrap_or(0),
            comment_count: video.comment_count.unwrap_or(0),
            video_id: video.video_id,
        })
    }
}

impl fmt::Display for VideoRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// A video looked up through the playlist it appears in.
///
/// The playlist id is an association only — the playlist does not own the
/// video, and nothing beyond the id is carried.
#[derive(Debug, Clone)]
pub struct PlaylistVideoRecord {
    pub video: VideoRecord,
    playlist_id: String,
}

impl PlaylistVideoRecord {
    pub fn new(video: VideoRecord, playlist_id: impl Into<String>) -> Self {
        PlaylistVideoRecord {
            video,
            playlist_id: playlist_id.into(),
        }
    }

    pub async fn fetch(
        client: &mut YouTubeClient,
        video_id: &str,
        playlist_id: &str,
    ) -> Result<Self, YouTubeError> {
        let video = VideoRecord::fetch(client, video_id).await?;
        Ok(PlaylistVideoRecord::new(video, playlist_id))
    }

    pub fn playlist_id(&self) -> &str {
        &self.playlist_id
    }
}

impl fmt::Display for PlaylistVideoRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.video.fmt(f)
    }
}
