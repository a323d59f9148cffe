/// YouTube Data API v3 provider
///
/// API Flow:
/// 1. Search: /search?part=snippet&type=video → ids and snippets
/// 2. Details: /videos?part=contentDetails,statistics&id=a,b,c → durations and view counts
use crate::{
    error::{AppError, AppResult},
    models::{SearchListResponse, VideoListResponse},
    services::{
        providers::VideoSource,
        query::{details_query_pairs, SearchRequest},
    },
};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;

#[derive(Clone)]
pub struct YouTubeClient {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl YouTubeClient {
    pub fn new(http_client: HttpClient, api_key: String, api_url: String) -> Self {
        Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, resource: &str) -> String {
        format!("{}/{}", self.api_url, resource)
    }

    /// GET `resource` with the given pairs plus the API key
    ///
    /// Non-2xx responses become [`AppError::UpstreamApi`] carrying the raw body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: &str,
        mut pairs: Vec<(&'static str, String)>,
    ) -> AppResult<T> {
        pairs.push(("key", self.api_key.clone()));

        let response = self
            .http_client
            .get(self.endpoint(resource))
            .query(&pairs)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let body = if body.is_empty() {
                status.to_string()
            } else {
                body
            };
            tracing::warn!(
                resource = %resource,
                status = %status,
                "YouTube API returned an error"
            );
            return Err(AppError::UpstreamApi(body));
        }

        Ok(response.json().await?)
    }
}

#[async_trait::async_trait]
impl VideoSource for YouTubeClient {
    async fn search(&self, request: &SearchRequest) -> AppResult<SearchListResponse> {
        let results: SearchListResponse = self.get_json("search", request.query_pairs()).await?;

        tracing::info!(
            query = %request.query,
            category = ?request.category,
            results = results.items.len(),
            provider = self.name(),
            "Video search completed"
        );

        Ok(results)
    }

    async fn video_details(&self, video_ids: &[String]) -> AppResult<VideoListResponse> {
        let details: VideoListResponse = self
            .get_json("videos", details_query_pairs(video_ids))
            .await?;

        tracing::info!(
            requested = video_ids.len(),
            returned = details.items.len(),
            provider = self.name(),
            "Video details fetched"
        );

        Ok(details)
    }

    fn name(&self) -> &'static str {
        "youtube"
    }
}
