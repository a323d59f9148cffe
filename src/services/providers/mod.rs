/// Video data providers
///
/// The fetcher talks to the upstream platform through [`VideoSource`], so the
/// search/detail merge can be exercised without the network.
use crate::{
    error::AppResult,
    models::{SearchListResponse, VideoListResponse},
    services::query::SearchRequest,
};

pub mod youtube;

pub use youtube::YouTubeClient;

/// Trait for video search providers
///
/// The two calls are made in sequence by the caller: a search for a single
/// page of results, then one batch lookup for the ids it produced.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait VideoSource: Send + Sync {
    /// Search for videos matching the request
    async fn search(&self, request: &SearchRequest) -> AppResult<SearchListResponse>;

    /// Fetch content details and statistics for a batch of video ids
    async fn video_details(&self, video_ids: &[String]) -> AppResult<VideoListResponse>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
