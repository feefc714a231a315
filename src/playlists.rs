use crate::models::PlaylistMetadata;
use crate::{YouTubeError, API_HOST};
use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper::{Method, Request, StatusCode};
use hyper_tls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use serde::Deserialize;

pub struct ListPlaylistsRequest<'a> {
    pub client: &'a mut Client<HttpsConnector<HttpConnector>, Empty<Bytes>>,
    pub key: &'a str,
    pub playlist_ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    items: Option<Vec<ApiPlaylist>>,
}

#[derive(Debug, Deserialize)]
struct ApiPlaylist {
    id: String,
    snippet: Option<PlaylistSnippet>,
}

#[derive(Debug, Deserialize)]
struct PlaylistSnippet {
    title: Option<String>,
    description: Option<String>,
    #[serde(rename = "channelTitle")]
    channel_title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl<'a> ListPlaylistsRequest<'a> {
    pub async fn send(self) -> Result<Vec<PlaylistMetadata>, YouTubeError> {
        let url = format!(
            "https://{}/youtube/v3/playlists?part=snippet&id={}&key={}",
            API_HOST,
            self.playlist_ids.join(","),
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
                    tracing::warn!(message = %error_response.error.message, "playlists.list forbidden");
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
                    "playlists.list returned an unexpected status"
                );
                return Err(YouTubeError::UnknownStatusCode(status));
            }
        };

        let body_bytes = resp.into_body().collect().await?.to_bytes();
        let api_response: ApiResponse = serde_json::from_slice(&body_bytes)?;

        let playlists: Vec<PlaylistMetadata> = api_response
            .items
            .unwrap_or_default()
            .into_iter()
            .map(|playlist| PlaylistMetadata {
                title: playlist.snippet.as_ref().and_then(|s| s.title.clone()),
                description: playlist.snippet.as_ref().and_then(|s| s.description.clone()),
                channel_title: playlist
                    .snippet
                    .as_ref()
                    .and_then(|s| s.channel_title.clone()),
                playlist_id: playlist.id,
            })
            .collect();

        Ok(playlists)
    }
}
