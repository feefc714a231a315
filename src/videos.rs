use crate::models::Video;
use crate::utils::parse_iso8601_duration;
use crate::{YouTubeError, API_HOST};
use chrono::NaiveDateTime;
use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper::{Method, Request, StatusCode};
use hyper_tls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use serde::Deserialize;

/// Timestamp layout the Data API uses for `publishedAt`.
const PUBLISHED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

pub struct ListVideosRequest<'a> {
    pub client: &'a mut Client<HttpsConnector<HttpConnector>, Empty<Bytes>>,
    pub key: &'a str,
    pub video_ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    items: Option<Vec<ApiVideo>>,
}

#[derive(Debug, Deserialize)]
struct ApiVideo {
    id: String,
    snippet: Option<VideoSnippet>,
    #[serde(rename = "contentDetails")]
    content_details: Option<VideoContentDetails>,
    statistics: Option<VideoStatistics>,
}

#[derive(Debug, Deserialize)]
struct VideoSnippet {
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VideoContentDetails {
    duration: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VideoStatistics {
    #[serde(rename = "viewCount")]
    view_count: Option<String>,
    #[serde(rename = "likeCount")]
    like_count: Option<String>,
    #[serde(rename = "commentCount")]
    comment_count: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl<'a> ListVideosRequest<'a> {
    /// Batched lookup. Only ids the API actually returned are present in
    /// the result; an empty `items` array yields an empty vector.
    pub async fn send(self) -> Result<Vec<Video>, YouTubeError> {
        let ids_str = self.video_ids.join(",");

        let url = format!(
            "https://{}/youtube/v3/videos?part=snippet%2CcontentDetails%2Cstatistics&id={}&key={}",
            API_HOST, ids_str, self.key
        );

        let req = Request::builder()
            .method(Method::GET)
            .uri(url)
            .body(Empty::new())
            .map_err(|e| YouTubeError::Other(Box::new(e)))?;

        let resp = self.client.request(req).await?;

        match resp.status() {
            StatusCode::OK => (),
            StatusCode::TOO_MANY_REQUESTS => return Err(YouTubeError::Ratelimited),
            StatusCode::FORBIDDEN => {
                let body_bytes = resp.into_body().collect().await?.to_bytes();
                if let Ok(error_response) = serde_json::from_slice::<ErrorResponse>(&body_bytes) {
                    if error_response.error.message.starts_with(
                        "The request cannot be completed because you have exceeded your",
                    ) {
                        return Err(YouTubeError::Ratelimited);
                    }
                    tracing::warn!(message = %error_response.error.message, "videos.list forbidden");
                }
                return Err(YouTubeError::Forbidden);
            }
            StatusCode::NOT_FOUND => return Err(YouTubeError::NotFound),
            StatusCode::UNAUTHORIZED => return Err(YouTubeError::Unauthorized),
            StatusCode::INTERNAL_SERVER_ERROR | StatusCode::SERVICE_UNAVAILABLE => {
                return Err(YouTubeError::InternalServerError)
            }
            status => {
                let body_bytes = resp.into_body().collect().await?.to_bytes();
                tracing::warn!(
                    status = status.as_u16(),
                    body = %String::from_utf8_lossy(&body_bytes),
                    "videos.list returned an unexpected status"
                );
                return Err(YouTubeError::UnknownStatusCode(status));
            }
        };

        let body_bytes = resp.into_body().collect().await?.to_bytes();
        let api_response: ApiResponse = serde_json::from_slice(&body_bytes)?;

        let videos: Vec<Video> = api_response
            .items
            .unwrap_or_default()
            .into_iter()
            .map(|video| {
                let published_at = video
                    .snippet
                    .as_ref()
                    .and_then(|s| s.published_at.as_ref())
                    .and_then(|dt| NaiveDateTime::parse_from_str(dt, PUBLISHED_AT_FORMAT).ok())
                    .map(|dt| dt.and_utc());

                let duration_seconds = video
                    .content_details
                    .as_ref()
                    .and_then(|c| c.duration.as_ref())
                    .map(|d| match parse_iso8601_duration(d) {
                        Ok(seconds) => seconds,
                        Err(e) => {
                            tracing::warn!(video_id = %video.id, error = %e, "unparseable video duration");
                            0
                        }
                    })
                    .unwrap_or(0);

                let parse_count =
                    |s: Option<&String>| -> Option<u64> { s.and_then(|v| v.parse::<u64>().ok()) };

                let statistics = video.statistics.as_ref();

                Video {
                    title: video.snippet.as_ref().and_then(|s| s.title.clone()),
                    published_at,
                    view_count: parse_count(statistics.and_then(|s| s.view_count.as_ref())),
                    like_count: parse_count(statistics.and_then(|s| s.like_count.as_ref())),
                    comment_count: parse_count(statistics.and_then(|s| s.comment_count.as_ref())),
                    duration_seconds,
                    video_id: video.id,
                }
            })
            .collect();

        Ok(videos)
    }
}
