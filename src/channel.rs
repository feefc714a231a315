use std::cmp::Ordering;
use std::fmt;
use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::models::Channel;
use crate::{YouTubeClient, YouTubeError};

/// A channel snapshot hydrated from the Data API.
///
/// [`ChannelRecord::fetch`] resolves the channel and populates every field
/// in one call; a record that exists always has a subscriber count, while
/// the other fields stay `None` whenever the API omits them. The record is
/// not mutated afterwards except through [`ChannelRecord::refresh`].
#[derive(Debug, Clone)]
pub struct ChannelRecord {
    channel_id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub custom_url: Option<String>,
    pub published_at: Option<String>,
    pub thumbnail_url: Option<String>,
    pub view_count: Option<u64>,
    pub subscriber_count: Option<u64>,
    pub video_count: Option<u64>,
}

impl ChannelRecord {
    pub async fn fetch(
        client: &mut YouTubeClient,
        channel_id: &str,
    ) -> Result<Self, YouTubeError> {
        let mut channels = client
            .list_channels(vec![channel_id.to_string()])
            .send()
            .await?;

        if channels.is_empty() {
            return Err(YouTubeError::NotFound);
        }

        ChannelRecord::try_from(channels.remove(0))
    }

    /// Re-hydrates every field from the API, in place.
    pub async fn refresh(&mut self, client: &mut YouTubeClient) -> Result<(), YouTubeError> {
        let channel_id = self.channel_id.clone();
        *self = ChannelRecord::fetch(client, &channel_id).await?;
        Ok(())
    }

    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }

    pub fn url(&self) -> String {
        format!("https://www.youtube.com/channel/{}", self.channel_id)
    }

    pub fn subscribers(&self) -> Result<u64, YouTubeError> {
        self.subscriber_count
            .ok_or(YouTubeError::Unpopulated("subscriber_count"))
    }

    /// Orders two channels by subscriber count alone. Identity and title
    /// play no part: distinct channels with equal counts compare equal.
    pub fn compare_subscribers(&self, other: &ChannelRecord) -> Result<Ordering, YouTubeError> {
        Ok(self.subscribers()?.cmp(&other.subscribers()?))
    }

    pub fn combined_subscribers(&self, other: &ChannelRecord) -> Result<u64, YouTubeError> {
        Ok(self.subscribers()? + other.subscribers()?)
    }

    pub fn subscriber_gap(&self, other: &ChannelRecord) -> Result<i64, YouTubeError> {
        Ok(self.subscribers()? as i64 - other.subscribers()? as i64)
    }

    /// The eight descriptive and statistical fields, ready to serialize.
    pub fn snapshot(&self) -> ChannelExport {
        ChannelExport {
            title: self.title.clone(),
            description: self.description.clone(),
            custom_url: self.custom_url.clone(),
            published_at: self.published_at.clone(),
            thumbnail_url: self.thumbnail_url.clone(),
            view_count: self.view_count,
            subscriber_count: self.subscriber_count,
            video_count: self.video_count,
        }
    }

    /// Writes the snapshot as pretty-printed JSON with 4-space indentation,
    /// overwriting `path` if it already exists.
    pub fn export(&self, path: impl AsRef<Path>) -> Result<(), YouTubeError> {
        let file = File::create(path)?;
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(file, formatter);
        self.snapshot().serialize(&mut serializer)?;
        Ok(())
    }
}

impl TryFrom<Channel> for ChannelRecord {
    type Error = YouTubeError;

    fn try_from(channel: Channel) -> Result<Self, YouTubeError> {
        if channel.subscriber_count.is_none() {
            return Err(YouTubeError::MissingField("statistics.subscriberCount"));
        }

        Ok(ChannelRecord {
            channel_id: channel.channel_id,
            title: channel.title,
            description: channel.description,
            custom_url: channel.custom_url,
            published_at: channel.published_at,
            thumbnail_url: channel.thumbnail_url,
            view_count: channel.view_count,
            subscriber_count: channel.subscriber_count,
            video_count: channel.video_count,
        })
    }
}

impl fmt::Display for ChannelRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}",
            self.title.as_deref().unwrap_or("unknown"),
            self.url()
        )
    }
}

/// What [`ChannelRecord::export`] writes: exactly these eight keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelExport {
    pub title: Option<String>,
    pub description: Option<String>,
    pub custom_url: Option<String>,
    pub published_at: Option<String>,
    pub thumbnail_url: Option<String>,
    pub view_count: Option<u64>,
    pub subscriber_count: Option<u64>,
    pub video_count: Option<u64>,
}
