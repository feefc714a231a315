use std::error::Error;

use http_body_util::Empty;
use hyper::body::Bytes;
use hyper::StatusCode;
use hyper_tls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use native_tls::TlsConnector;
use thiserror::Error;

#[cfg(test)]
mod tests;

pub mod models;
pub mod utils;
pub mod channels;
pub use channels::ListChannelsRequest;
pub mod playlists;
pub use playlists::ListPlaylistsRequest;
pub mod playlist_items;
pub use playlist_items::{ListPlaylistItemsRequest, ListPlaylistItemsResponse};
pub mod videos;
pub use videos::ListVideosRequest;
pub mod channel;
pub use channel::{ChannelExport, ChannelRecord};
pub mod video;
pub use video::{PlaylistVideoRecord, VideoRecord};
pub mod playlist;
pub use playlist::Playlist;

/// Host every Data API request is sent to.
pub(crate) const API_HOST: &str = "www.googleapis.com";

/// Environment variable [`YouTubeClient::from_env`] reads the API key from.
pub const API_KEY_VAR: &str = "YT_API_KEY";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Network error: {0}")]
    NetworkError(#[from] std::io::Error),
    #[error("TLS error: {0}")]
    TlsError(#[from] native_tls::Error),
    #[error("YT_API_KEY is not set: {0}")]
    MissingApiKey(#[from] std::env::VarError),
}

pub fn initialize_client() -> Result<Client<HttpsConnector<HttpConnector>, Empty<Bytes>>, ClientError> {
    let mut http = HttpConnector::new();
    http.enforce_http(false);

    let tls = TlsConnector::builder().build()?;

    // Create an HTTPS connector using the HTTP connector and the custom TLS connector
    let https = HttpsConnector::from((http, tls.into()));

    let client = Client::builder(TokioExecutor::new()).build::<_, Empty<Bytes>>(https);

    Ok(client)
}

#[derive(Error, Debug)]
pub enum YouTubeError {
    #[error("Not found")]
    NotFound,
    #[error("Ratelimited")]
    Ratelimited,
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Forbidden")]
    Forbidden,
    #[error("Internal server error")]
    InternalServerError,
    #[error("Unknown Status Code")]
    UnknownStatusCode(StatusCode),
    #[error("Missing field: {0}")]
    MissingField(&'static str),
    #[error("Field never populated: {0}")]
    Unpopulated(&'static str),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("HTTP error: {0}")]
    HttpError(#[from] hyper::Error),
    #[error("Legacy HTTP error: {0}")]
    LegacyHttpError(#[from] hyper_util::client::legacy::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Other error: {0}")]
    Other(Box<dyn Error + Send + Sync>),
}

/// Handle to the YouTube Data API v3.
///
/// Owns the HTTPS client stack plus the API key; every request issued
/// through it carries the key automatically. Construct one explicitly and
/// pass it to whatever needs to fetch — there is no process-global client.
pub struct YouTubeClient {
    client: Client<HttpsConnector<HttpConnector>, Empty<Bytes>>,
    api_key: String,
}

impl YouTubeClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, ClientError> {
        Ok(YouTubeClient {
            client: initialize_client()?,
            api_key: api_key.into(),
        })
    }

    /// Reads the API key from [`API_KEY_VAR`].
    pub fn from_env() -> Result<Self, ClientError> {
        let api_key = std::env::var(API_KEY_VAR)?;
        Self::new(api_key)
    }

    pub fn list_channels(&mut self, channel_ids: Vec<String>) -> ListChannelsRequest<'_> {
        ListChannelsRequest {
            client: &mut self.client,
            key: &self.api_key,
            channel_ids,
        }
    }

    pub fn list_playlists(&mut self, playlist_ids: Vec<String>) -> ListPlaylistsRequest<'_> {
        ListPlaylistsRequest {
            client: &mut self.client,
            key: &self.api_key,
            playlist_ids,
        }
    }

    pub fn list_playlist_items(
        &mut self,
        playlist_id: String,
        page_token: Option<String>,
        max_results: Option<u32>,
    ) -> ListPlaylistItemsRequest<'_> {
        ListPlaylistItemsRequest {
            client: &mut self.client,
            key: &self.api_key,
            playlist_id,
            page_token,
            max_results,
        }
    }

    pub fn list_videos(&mut self, video_ids: Vec<String>) -> ListVideosRequest<'_> {
        ListVideosRequest {
            client: &mut self.client,
            key: &self.api_key,
            video_ids,
        }
    }
}
