use std::time::Duration;

use crate::{YouTubeClient, YouTubeError};

/// Most playlist entries a single Data API page can return.
///
/// The aggregation methods below deliberately read one page: playlists
/// longer than this are summarized from their first 50 entries only.
pub const PLAYLIST_PAGE_SIZE: u32 = 50;

/// A playlist plus aggregate queries over its videos.
///
/// [`Playlist::fetch`] resolves the title and canonical URL once; the
/// aggregate queries hit the API on every call.
#[derive(Debug, Clone)]
pub struct Playlist {
    playlist_id: String,
    pub title: String,
    pub url: String,
}

impl Playlist {
    pub async fn fetch(
        client: &mut YouTubeClient,
        playlist_id: &str,
    ) -> Result<Self, YouTubeError> {
        let mut playlists = client
            .list_playlists(vec![playlist_id.to_string()])
            .send()
            .await?;

        if playlists.is_empty() {
            return Err(YouTubeError::NotFound);
        }

        let metadata = playlists.remove(0);

        Ok(Playlist {
            title: metadata
                .title
                .ok_or(YouTubeError::MissingField("snippet.title"))?,
            url: format!("https://www.youtube.com/playlist?list={playlist_id}"),
            playlist_id: playlist_id.to_string(),
        })
    }

    pub fn playlist_id(&self) -> &str {
        &self.playlist_id
    }

    /// Combined watch time of the playlist's videos.
    ///
    /// Reads a single page of up to [`PLAYLIST_PAGE_SIZE`] entries — videos
    /// past the first page are not counted. One batched `videos.list` call
    /// resolves every duration; an empty playlist is zero seconds.
    pub async fn total_duration(
        &self,
        client: &mut YouTubeClient,
    ) -> Result<Duration, YouTubeError> {
        let page = client
            .list_playlist_items(self.playlist_id.clone(), None, Some(PLAYLIST_PAGE_SIZE))
            .send()
            .await?;

        let video_ids: Vec<String> = page
            .items
            .iter()
            .map(|item| item.content_details.video_id.clone())
            .collect();

        if video_ids.is_empty() {
            return Ok(Duration::ZERO);
        }

        let videos = client.list_videos(video_ids).send().await?;
        let total_seconds: u64 = videos.iter().map(|v| v.duration_seconds).sum();

        Ok(Duration::from_secs(total_seconds))
    }

    /// Short link to the playlist video with the strictly highest like
    /// count, or `None` when the playlist is empty or every like count is
    /// zero. Ties go to the earliest entry.
    ///
    /// Reads a single page of up to [`PLAYLIST_PAGE_SIZE`] entries and
    /// issues one statistics lookup per video, sequentially.
    pub async fn best_video(
        &self,
        client: &mut YouTubeClient,
    ) -> Result<Option<String>, YouTubeError> {
        let page = client
            .list_playlist_items(self.playlist_id.clone(), None, Some(PLAYLIST_PAGE_SIZE))
            .send()
            .await?;

        let mut like_counts = Vec::with_capacity(page.items.len());
        for item in &page.items {
            let video_id = item.snippet.resource_id.video_id.clone();
            let videos = client.list_videos(vec![video_id.clone()]).send().await?;
            let likes = videos.first().and_then(|v| v.like_count).unwrap_or(0);
            like_counts.push((video_id, likes));
        }

        Ok(most_liked(like_counts).map(|id| format!("https://youtu.be/{id}")))
    }
}

/// First entry with the strictly greatest like count; zero never wins.
pub(crate) fn most_liked(videos: Vec<(String, u64)>) -> Option<String> {
    let mut best = None;
    let mut max_likes = 0;

    for (video_id, likes) in videos {
        if likes > max_likes {
            max_likes = likes;
            best = Some(video_id);
        }
    }

    best
}
