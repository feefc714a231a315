use crate::models::Channel;
use crate::{YouTubeError, API_HOST};
use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper::{Method, Request, StatusCode};
use hyper_tls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use serde::Deserialize;

pub struct ListChannelsRequest<'a> {
    pub client: &'a mut Client<HttpsConnector<HttpConnector>, Empty<Bytes>>,
    pub key: &'a str,
    pub channel_ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    items: Option<Vec<ApiChannel>>,
}

#[derive(Debug, Deserialize)]
struct ApiChannel {
    id: String,
    snippet: Option<ChannelSnippet>,
    statistics: Option<ChannelStatistics>,
}

#[derive(Debug, Deserialize)]
struct ChannelSnippet {
    title: Option<String>,
    description: Option<String>,
    #[serde(rename = "customUrl")]
    custom_url: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
    thumbnails: Option<Thumbnails>,
}

#[derive(Debug, Deserialize)]
struct Thumbnails {
    medium: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChannelStatistics {
    #[serde(rename = "viewCount")]
    view_count: Option<String>,
    #[serde(rename = "subscriberCount")]
    subscriber_count: Option<String>,
    #[serde(rename = "videoCount")]
    video_count: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl<'a> ListChannelsRequest<'a> {
    pub async fn send(self) -> Result<Vec<Channel>, YouTubeError> {
        let url = format!(
            "https://{}/youtube/v3/channels?part=snippet%2Cstatistics&id={}&key={}",
            API_HOST,
            self.channel_ids.join(","),
            self.key
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
                    tracing::warn!(message = %error_response.error.message, "channels.list forbidden");
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
                    "channels.list returned an unexpected status"
                );
                return Err(YouTubeError::UnknownStatusCode(status));
            }
        };

        let body_bytes = resp.into_body().collect().await?.to_bytes();
        let api_response: ApiResponse = serde_json::from_slice(&body_bytes)?;

        let channels: Vec<Channel> = api_response
            .items
            .unwrap_or_default()
            .into_iter()
            .map(|channel| {
                let thumbnail_url = channel
                    .snippet
                    .as_ref()
                    .and_then(|s| s.thumbnails.as_ref())
                    .and_then(|t| t.medium.as_ref())
                    .and_then(|m| m.url.clone());

                let parse_count =
                    |s: Option<&String>| -> Option<u64> { s.and_then(|v| v.parse::<u64>().ok()) };

                let statistics = channel.statistics.as_ref();

                Channel {
                    title: channel.snippet.as_ref().and_then(|s| s.title.clone()),
                    description: channel.snippet.as_ref().and_then(|s| s.description.clone()),
                    custom_url: channel.snippet.as_ref().and_then(|s| s.custom_url.clone()),
                    published_at: channel.snippet.as_ref().and_then(|s| s.published_at.clone()),
                    thumbnail_url,
                    view_count: parse_count(statistics.and_then(|s| s.view_count.as_ref())),
                    subscriber_count: parse_count(
                        statistics.and_then(|s| s.subscriber_count.as_ref()),
                    ),
                    video_count: parse_count(statistics.and_then(|s| s.video_count.as_ref())),
                    channel_id: channel.id,
                }
            })
            .collect();

        Ok(channels)
    }
}
