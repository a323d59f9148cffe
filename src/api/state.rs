use std::sync::Arc;

use crate::{
    config::Config,
    services::{VideoSource, YouTubeClient},
};

/// Shared application state
///
/// Holds nothing mutable: each request builds its own search and result list.
#[derive(Clone, Default)]
pub struct AppState {
    /// `None` when no API key is configured
    video_source: Option<Arc<dyn VideoSource>>,
}

impl AppState {
    /// Builds the YouTube client from configuration, if an API key is present
    pub fn from_config(config: &Config) -> Self {
        let video_source = config.api_key().map(|api_key| {
            Arc::new(YouTubeClient::new(
                reqwest::Client::new(),
                api_key.to_string(),
                config.youtube_api_url.clone(),
            )) as Arc<dyn VideoSource>
        });

        Self { video_source }
    }

    /// State backed by an arbitrary provider
    pub fn with_source(source: Arc<dyn VideoSource>) -> Self {
        Self {
            video_source: Some(source),
        }
    }

    /// State with no API key configured
    pub fn unconfigured() -> Self {
        Self::default()
    }

    pub fn video_source(&self) -> Option<&Arc<dyn VideoSource>> {
        self.video_source.as_ref()
    }
}
