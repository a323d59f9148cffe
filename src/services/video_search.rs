use std::collections::HashMap;

use crate::{
    error::{AppError, AppResult},
    formatting::{format_duration, format_views},
    models::{SearchItem, Video, VideoDetails, VideoList, DEFAULT_DURATION, DEFAULT_VIEW_COUNT},
    services::{providers::VideoSource, query::SearchRequest},
};

/// Runs the search and enriches every hit with its duration and view count
///
/// The detail lookup is skipped entirely when the search has no video ids.
/// Output order follows the search response; results whose id is not a video
/// are dropped.
pub async fn search_videos(
    source: &dyn VideoSource,
    request: &SearchRequest,
) -> AppResult<VideoList> {
    let results = source.search(request).await?;

    let video_ids: Vec<String> = results
        .items
        .iter()
        .filter_map(|item| item.video_id().map(str::to_string))
        .collect();

    if video_ids.is_empty() {
        tracing::debug!(query = %request.query, "No videos found, skipping detail lookup");
        return Ok(VideoList::default());
    }

    let details = source.video_details(&video_ids).await?;
    let details_by_id: HashMap<&str, &VideoDetails> = details
        .items
        .iter()
        .map(|detail| (detail.id.as_str(), detail))
        .collect();

    let missing = video_ids
        .iter()
        .filter(|id| !details_by_id.contains_key(id.as_str()))
        .count();
    if missing > 0 {
        tracing::warn!(missing, "Some videos had no details, using defaults");
    }

    let videos = results
        .items
        .iter()
        .filter_map(|item| {
            item.video_id()
                .map(|id| build_video(id, item, details_by_id.get(id).copied()))
        })
        .collect::<AppResult<Vec<Video>>>()?;

    Ok(VideoList { videos })
}

/// Combines a search hit with its (optional) detail record
fn build_video(id: &str, item: &SearchItem, details: Option<&VideoDetails>) -> AppResult<Video> {
    let duration = details.map_or(DEFAULT_DURATION, VideoDetails::duration);
    let view_count = details.map_or(DEFAULT_VIEW_COUNT, VideoDetails::view_count);

    let views: u64 = view_count
        .parse()
        .map_err(|_| AppError::InvalidViewCount(view_count.to_string()))?;

    let snippet = &item.snippet;
    Ok(Video {
        id: id.to_string(),
        title: snippet.title.clone(),
        channel: snippet.channel_title.clone(),
        views: format_views(views),
        duration: format_duration(duration)?,
        thumbnail: snippet
            .thumbnails
            .medium
            .as_ref()
            .map(|thumbnail| thumbnail.url.clone())
            .unwrap_or_default(),
        description: snippet.description.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        formatting::DurationError,
        models::{
            ContentDetails, SearchItemId, SearchListResponse, SearchSnippet, Statistics,
            Thumbnail, Thumbnails, VideoListResponse,
        },
        services::providers::MockVideoSource,
    };
    use tokio_test::{assert_err, assert_ok};

    fn search_item(id: Option<&str>, title: &str) -> SearchItem {
        SearchItem {
            id: SearchItemId {
                video_id: id.map(str::to_string),
            },
            snippet: SearchSnippet {
                title: title.to_string(),
                channel_title: format!("{} channel", title),
                description: format!("About {}", title),
                thumbnails: Thumbnails {
                    medium: Some(Thumbnail {
                        url: format!("https://i.ytimg.com/vi/{}/mqdefault.jpg", title),
                    }),
                },
            },
        }
    }

    fn details(id: &str, duration: &str, views: &str) -> VideoDetails {
        VideoDetails {
            id: id.to_string(),
            content_details: Some(ContentDetails {
                duration: Some(duration.to_string()),
            }),
            statistics: Some(Statistics {
                view_count: Some(views.to_string()),
            }),
        }
    }

    fn mock_with_search(items: Vec<SearchItem>) -> MockVideoSource {
        let mut source = MockVideoSource::new();
        source
            .expect_search()
            .times(1)
            .returning(move |_| Ok(SearchListResponse { items: items.clone() }));
        source
    }

    #[tokio::test]
    async fn test_empty_search_skips_detail_lookup() {
        let mut source = mock_with_search(vec![]);
        source.expect_video_details().never();

        let list = assert_ok!(search_videos(&source, &SearchRequest::default()).await);
        assert!(list.videos.is_empty());
    }

    #[tokio::test]
    async fn test_results_without_video_ids_skip_detail_lookup() {
        let mut source = mock_with_search(vec![search_item(None, "channel")]);
        source.expect_video_details().never();

        let list = assert_ok!(search_videos(&source, &SearchRequest::default()).await);
        assert!(list.videos.is_empty());
    }

    #[tokio::test]
    async fn test_merges_details_in_search_order() {
        let mut source = mock_with_search(vec![
            search_item(Some("b"), "second"),
            search_item(Some("a"), "first"),
        ]);
        source
            .expect_video_details()
            .withf(|ids| ids.len() == 2 && ids[0] == "b" && ids[1] == "a")
            .times(1)
            .returning(|_| {
                Ok(VideoListResponse {
                    items: vec![
                        details("a", "PT45S", "999"),
                        details("b", "PT1H2M3S", "1500000"),
                    ],
                })
            });

        let list = assert_ok!(search_videos(&source, &SearchRequest::default()).await);

        assert_eq!(list.videos.len(), 2);
        assert_eq!(list.videos[0].id, "b");
        assert_eq!(list.videos[0].title, "second");
        assert_eq!(list.videos[0].channel, "second channel");
        assert_eq!(list.videos[0].duration, "1:02:03");
        assert_eq!(list.videos[0].views, "1.5M");
        assert_eq!(
            list.videos[0].thumbnail,
            "https://i.ytimg.com/vi/second/mqdefault.jpg"
        );
        assert_eq!(list.videos[1].id, "a");
        assert_eq!(list.videos[1].duration, "0:45");
        assert_eq!(list.videos[1].views, "999");
        assert_eq!(list.videos[1].description, "About first");
    }

    #[tokio::test]
    async fn test_missing_details_default_to_zero() {
        let mut source = mock_with_search(vec![
            search_item(Some("known"), "known"),
            search_item(Some("gone"), "gone"),
        ]);
        source.expect_video_details().times(1).returning(|_| {
            Ok(VideoListResponse {
                items: vec![details("known", "PT5M9S", "2500")],
            })
        });

        let list = assert_ok!(search_videos(&source, &SearchRequest::default()).await);

        assert_eq!(list.videos[0].duration, "5:09");
        assert_eq!(list.videos[0].views, "3K");
        assert_eq!(list.videos[1].id, "gone");
        assert_eq!(list.videos[1].duration, "0:00");
        assert_eq!(list.videos[1].views, "0");
    }

    #[tokio::test]
    async fn test_missing_thumbnail_is_empty_string() {
        let mut item = search_item(Some("x"), "x");
        item.snippet.thumbnails.medium = None;

        let mut source = mock_with_search(vec![item]);
        source
            .expect_video_details()
            .returning(|_| Ok(VideoListResponse::default()));

        let list = assert_ok!(search_videos(&source, &SearchRequest::default()).await);
        assert_eq!(list.videos[0].thumbnail, "");
    }

    #[tokio::test]
    async fn test_search_error_propagates() {
        let mut source = MockVideoSource::new();
        source
            .expect_search()
            .returning(|_| Err(AppError::UpstreamApi("quotaExceeded".to_string())));
        source.expect_video_details().never();

        let err = assert_err!(search_videos(&source, &SearchRequest::default()).await);
        assert_eq!(err.to_string(), "YouTube API Error: quotaExceeded");
    }

    #[tokio::test]
    async fn test_malformed_duration_fails_request() {
        let mut source = mock_with_search(vec![search_item(Some("a"), "a")]);
        source.expect_video_details().returning(|_| {
            Ok(VideoListResponse {
                items: vec![details("a", "PT3M1H", "10")],
            })
        });

        let err = assert_err!(search_videos(&source, &SearchRequest::default()).await);
        assert!(matches!(
            err,
            AppError::InvalidDuration(DurationError::OutOfOrder('H'))
        ));
    }

    #[tokio::test]
    async fn test_malformed_view_count_fails_request() {
        let mut source = mock_with_search(vec![search_item(Some("a"), "a")]);
        source.expect_video_details().returning(|_| {
            Ok(VideoListResponse {
                items: vec![details("a", "PT1M", "lots")],
            })
        });

        let err = assert_err!(search_videos(&source, &SearchRequest::default()).await);
        assert!(matches!(err, AppError::InvalidViewCount(ref value) if value == "lots"));
    }
}
