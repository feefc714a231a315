use std::error::Error;

use chrono::NaiveDate;

use crate::channel::{ChannelExport, ChannelRecord};
use crate::models::{Channel, Video};
use crate::playlist::{most_liked, Playlist};
use crate::utils::parse_iso8601_duration;
use crate::video::{PlaylistVideoRecord, VideoRecord};
use crate::{YouTubeClient, YouTubeError};

fn sample_channel(channel_id: &str, subscriber_count: Option<u64>) -> Channel {
    Channel {
        channel_id: channel_id.to_string(),
        title: Some(format!("Channel {channel_id}")),
        description: Some("A channel about things".to_string()),
        custom_url: Some("@things".to_string()),
        published_at: Some("2014-06-29T09:35:02Z".to_string()),
        thumbnail_url: Some("https://yt3.ggpht.com/abc=s240".to_string()),
        view_count: Some(123_456),
        subscriber_count,
        video_count: Some(321),
    }
}

fn sample_video(video_id: &str, like_count: Option<u64>) -> Video {
    Video {
        video_id: video_id.to_string(),
        title: Some(format!("Video {video_id}")),
        published_at: Some(
            NaiveDate::from_ymd_opt(2023, 1, 15)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap()
                .and_utc(),
        ),
        view_count: Some(50_000),
        like_count,
        comment_count: Some(42),
        duration_seconds: 600,
    }
}

#[test]
fn test_parse_duration_hours_minutes_seconds() {
    assert_eq!(parse_iso8601_duration("PT1H2M3S").unwrap(), 3723);
    assert_eq!(parse_iso8601_duration("PT15M33S").unwrap(), 933);
    assert_eq!(parse_iso8601_duration("PT1H").unwrap(), 3600);
    assert_eq!(parse_iso8601_duration("PT45S").unwrap(), 45);
    assert_eq!(parse_iso8601_duration("PT0S").unwrap(), 0);
}

#[test]
fn test_parse_duration_long_components() {
    // The API emits minute counts above 59 for some livestream archives
    assert_eq!(parse_iso8601_duration("PT90M").unwrap(), 5400);
    assert_eq!(parse_iso8601_duration("PT26H3M44S").unwrap(), 93824);
}

#[test]
fn test_parse_duration_rejects_garbage() {
    assert!(parse_iso8601_duration("P0D").is_err());
    assert!(parse_iso8601_duration("1H2M3S").is_err());
    assert!(parse_iso8601_duration("PT90X").is_err());
    assert!(parse_iso8601_duration("PT5").is_err());
    assert!(parse_iso8601_duration("PTM").is_err());
}

#[test]
fn test_most_liked_empty_playlist() {
    assert_eq!(most_liked(Vec::new()), None);
}

#[test]
fn test_most_liked_all_zero_likes() {
    let videos = vec![
        ("aaaaaaaaaaa".to_string(), 0),
        ("bbbbbbbbbbb".to_string(), 0),
        ("ccccccccccc".to_string(), 0),
    ];
    // Zero never wins, so even the first video is not "best"
    assert_eq!(most_liked(videos), None);
}

#[test]
fn test_most_liked_tie_goes_to_earliest() {
    let videos = vec![
        ("aaaaaaaaaaa".to_string(), 5),
        ("bbbbbbbbbbb".to_string(), 9),
        ("ccccccccccc".to_string(), 9),
    ];
    assert_eq!(most_liked(videos), Some("bbbbbbbbbbb".to_string()));
}

#[test]
fn test_most_liked_single_video() {
    let videos = vec![("aaaaaaaaaaa".to_string(), 1)];
    assert_eq!(most_liked(videos), Some("aaaaaaaaaaa".to_string()));
}

#[test]
fn test_channel_ordering_by_subscribers_only() -> Result<(), Box<dyn Error>> {
    let small = ChannelRecord::try_from(sample_channel("UCsmall000000000000000", Some(800)))?;
    let big = ChannelRecord::try_from(sample_channel("UCbig00000000000000000", Some(1200)))?;

    assert_eq!(
        small.compare_subscribers(&big)?,
        std::cmp::Ordering::Less
    );
    assert_eq!(
        big.compare_subscribers(&small)?,
        std::cmp::Ordering::Greater
    );

    // Different channel, different title, same count: equal under this model
    let other = ChannelRecord::try_from(sample_channel("UCother000000000000000", Some(800)))?;
    assert_eq!(
        small.compare_subscribers(&other)?,
        std::cmp::Ordering::Equal
    );

    Ok(())
}

#[test]
fn test_channel_subscriber_arithmetic() -> Result<(), Box<dyn Error>> {
    let a = ChannelRecord::try_from(sample_channel("UCa0000000000000000000", Some(1200)))?;
    let b = ChannelRecord::try_from(sample_channel("UCb0000000000000000000", Some(800)))?;

    assert_eq!(a.combined_subscribers(&b)?, 2000);
    assert_eq!(b.combined_subscribers(&a)?, 2000);
    assert_eq!(a.subscriber_gap(&b)?, 400);
    assert_eq!(b.subscriber_gap(&a)?, -400);

    Ok(())
}

#[test]
fn test_channel_unpopulated_subscriber_count() -> Result<(), Box<dyn Error>> {
    let a = ChannelRecord::try_from(sample_channel("UCa0000000000000000000", Some(1200)))?;
    let mut b = ChannelRecord::try_from(sample_channel("UCb0000000000000000000", Some(800)))?;
    b.subscriber_count = None;

    let err = a.combined_subscribers(&b).unwrap_err();
    assert!(matches!(err, YouTubeError::Unpopulated("subscriber_count")));

    let err = a.compare_subscribers(&b).unwrap_err();
    assert!(matches!(err, YouTubeError::Unpopulated("subscriber_count")));

    Ok(())
}

#[test]
fn test_channel_requires_subscriber_count() {
    let result = ChannelRecord::try_from(sample_channel("UCa0000000000000000000", None));
    assert!(matches!(
        result,
        Err(YouTubeError::MissingField("statistics.subscriberCount"))
    ));
}

#[test]
fn test_channel_url_and_display() -> Result<(), Box<dyn Error>> {
    let channel = ChannelRecord::try_from(sample_channel("UCa0000000000000000000", Some(1)))?;

    assert_eq!(channel.channel_id(), "UCa0000000000000000000");
    assert_eq!(
        channel.url(),
        "https://www.youtube.com/channel/UCa0000000000000000000"
    );
    assert_eq!(
        channel.to_string(),
        "Channel UCa0000000000000000000 -> https://www.youtube.com/channel/UCa0000000000000000000"
    );

    Ok(())
}

#[test]
fn test_channel_display_without_title() -> Result<(), Box<dyn Error>> {
    let mut channel = ChannelRecord::try_from(sample_channel("UCa0000000000000000000", Some(1)))?;
    channel.title = None;

    assert_eq!(
        channel.to_string(),
        "unknown -> https://www.youtube.com/channel/UCa0000000000000000000"
    );

    Ok(())
}

#[test]
fn test_channel_export_round_trip() -> Result<(), Box<dyn Error>> {
    let channel = ChannelRecord::try_from(sample_channel("UCa0000000000000000000", Some(9001)))?;

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("channel.json");
    channel.export(&path)?;

    let written = std::fs::read_to_string(&path)?;
    // 4-space indentation, exactly the eight keys
    assert!(written.contains("    \"title\""));
    assert!(!written.contains("channel_id"));

    let read_back: ChannelExport = serde_json::from_str(&written)?;
    assert_eq!(read_back, channel.snapshot());
    assert_eq!(read_back.subscriber_count, Some(9001));

    Ok(())
}

#[test]
fn test_channel_export_overwrites() -> Result<(), Box<dyn Error>> {
    let first = ChannelRecord::try_from(sample_channel("UCa0000000000000000000", Some(1)))?;
    let second = ChannelRecord::try_from(sample_channel("UCb0000000000000000000", Some(2)))?;

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("channel.json");
    first.export(&path)?;
    second.export(&path)?;

    let read_back: ChannelExport = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    assert_eq!(read_back, second.snapshot());

    Ok(())
}

#[test]
fn test_video_record_from_model() -> Result<(), Box<dyn Error>> {
    let video = VideoRecord::try_from(sample_video("dQw4w9WgXcQ", Some(17_000_000)))?;

    assert_eq!(video.video_id(), "dQw4w9WgXcQ");
    assert_eq!(video.title, "Video dQw4w9WgXcQ");
    assert_eq!(video.view_count, 50_000);
    assert_eq!(video.like_count, 17_000_000);
    assert_eq!(video.comment_count, 42);
    assert_eq!(video.short_url(), "https://youtu.be/dQw4w9WgXcQ");
    assert_eq!(video.to_string(), "Video dQw4w9WgXcQ");

    Ok(())
}

#[test]
fn test_video_record_defaults_hidden_counts() -> Result<(), Box<dyn Error>> {
    let mut model = sample_video("dQw4w9WgXcQ", None);
    model.comment_count = None;

    let video = VideoRecord::try_from(model)?;
    assert_eq!(video.like_count, 0);
    assert_eq!(video.comment_count, 0);

    Ok(())
}

#[test]
fn test_video_record_requires_title() {
    let mut model = sample_video("dQw4w9WgXcQ", Some(1));
    model.title = None;

    let result = VideoRecord::try_from(model);
    assert!(matches!(
        result,
        Err(YouTubeError::MissingField("snippet.title"))
    ));
}

#[test]
fn test_playlist_video_association() -> Result<(), Box<dyn Error>> {
    let video = VideoRecord::try_from(sample_video("dQw4w9WgXcQ", Some(1)))?;
    let in_playlist = PlaylistVideoRecord::new(video, "PL0000000000000000000000000000000A");

    assert_eq!(
        in_playlist.playlist_id(),
        "PL0000000000000000000000000000000A"
    );
    assert_eq!(in_playlist.video.video_id(), "dQw4w9WgXcQ");
    assert_eq!(in_playlist.to_string(), "Video dQw4w9WgXcQ");

    Ok(())
}

// The tests below hit the live Data API and need YT_API_KEY set.

#[tokio::test]
#[ignore = "requires network and YT_API_KEY"]
async fn test_fetch_channel_live() -> Result<(), Box<dyn Error>> {
    // MrBeast's channel
    let mut client = YouTubeClient::from_env()?;
    let channel = ChannelRecord::fetch(&mut client, "UCX6OQ3DkcsbYNE6H8uQQuVA").await?;

    assert_eq!(channel.channel_id(), "UCX6OQ3DkcsbYNE6H8uQQuVA");
    assert!(channel.title.is_some());
    assert!(channel.subscribers()? > 0);

    Ok(())
}

#[tokio::test]
#[ignore = "requires network and YT_API_KEY"]
async fn test_fetch_missing_channel_live() -> Result<(), Box<dyn Error>> {
    let mut client = YouTubeClient::from_env()?;
    let result = ChannelRecord::fetch(&mut client, "UC0123456789ABCDEFGHIJ").await;

    assert!(matches!(result, Err(YouTubeError::NotFound)));

    Ok(())
}

#[tokio::test]
#[ignore = "requires network and YT_API_KEY"]
async fn test_playlist_aggregates_live() -> Result<(), Box<dyn Error>> {
    // MrBeast's uploads playlist
    let mut client = YouTubeClient::from_env()?;
    let playlist = Playlist::fetch(&mut client, "UUX6OQ3DkcsbYNE6H8uQQuVA").await?;

    assert!(!playlist.title.is_empty());
    assert_eq!(
        playlist.url,
        "https://www.youtube.com/playlist?list=UUX6OQ3DkcsbYNE6H8uQQuVA"
    );

    let total = playlist.total_duration(&mut client).await?;
    assert!(total.as_secs() > 0);

    let best = playlist.best_video(&mut client).await?;
    assert!(best.unwrap().starts_with("https://youtu.be/"));

    Ok(())
}
