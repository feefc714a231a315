use crate::models::PlaylistItem;
use crate::{YouTubeError, API_HOST};
use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper::{Method, Request, StatusCode};
use hyper_tls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use serde::Deserialize;

pub struct ListPlaylistItemsRequest<'a> {
    pub client: &'a mut Client<HttpsConnector<HttpConnector>, Empty<Bytes>>,
    pub key: &'a str,
    pub playlist_id: String,
    pub page_token: Option<String>,
    pub max_results: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
    #[serde(rename = "pageInfo")]
    page_info: PageInfo,
    #[serde(default)]
    items: Vec<PlaylistItem>,
}

#[derive(Debug, Deserialize)]
struct PageInfo {
    #[serde(rename = "totalResults")]
    total_results: u32,
    #[serde(rename = "resultsPerPage")]
    results_per_page: u32,
}

#[derive(Debug)]
pub struct ListPlaylistItemsResponse {
    pub next_page_token: Option<String>,
    pub total_results: u32,
    pub results_per_page: u32,
    pub items: Vec<PlaylistItem>,
}

impl<'a> ListPlaylistItemsRequest<'a> {
    pub async fn send(self) -> Result<ListPlaylistItemsResponse, YouTubeError> {
        let mut url = format!(
            "https://{}/youtube/v3/playlistItems?part=snippet%2CcontentDetails&playlistId={}&key={}",
            API_HOST, self.playlist_id, self.key
        );

        if let Some(page_token) = &self.page_token {
            url.push_str(&format!("&pageToken={}", urlencoding::encode(page_token)));
        }

        if let Some(max_results) = self.max_results {
            url.push_str(&format!("&maxResults={}", max_results));
        }

        let req = Request::builder()
            .method(Method::GET)
            .uri(url)
            .body(Empty::<Bytes>::new())
            .map_err(|e| YouTubeError::Other(Box::new(e)))?;

        let res = self.client.request(req).await?;
        let status = res.status();

        match status {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => return Err(YouTubeError::NotFound),
            StatusCode::UNAUTHORIZED => return Err(YouTubeError::Unauthorized),
            StatusCode::FORBIDDEN => return Err(YouTubeError::Forbidden),
            StatusCode::TOO_MANY_REQUESTS => return Err(YouTubeError::Ratelimited),
            StatusCode::INTERNAL_SERVER_ERROR | StatusCode::SERVICE_UNAVAILABLE => {
                return Err(YouTubeError::InternalServerError)
            }
            _ => return Err(YouTubeError::UnknownStatusCode(status)),
        }

        let body = res.collect().await?.to_bytes();
        let body_str =
            std::str::from_utf8(&body).map_err(|e| YouTubeError::ParseError(e.to_string()))?;

        let api_response: ApiResponse = serde_json::from_str(body_str)?;

        Ok(ListPlaylistItemsResponse {
            next_page_token: api_response.next_page_token,
            total_results: api_response.page_info.total_results,
            results_per_page: api_response.page_info.results_per_page,
            items: api_response.items,
        })
    }
}
