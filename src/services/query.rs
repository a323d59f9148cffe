use std::collections::HashMap;

pub const DEFAULT_QUERY: &str = "trending videos";
pub const DEFAULT_MAX_RESULTS: &str = "20";

/// Search parameters taken from the incoming query string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub category: Option<String>,
    /// Passed through to the API untouched
    pub max_results: String,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            query: DEFAULT_QUERY.to_string(),
            category: None,
            max_results: DEFAULT_MAX_RESULTS.to_string(),
        }
    }
}

impl SearchRequest {
    /// Reads `q`, `category` and `maxResults`
    ///
    /// An absent `q` falls back to the default query, while a present but empty
    /// one is forwarded as-is. An empty `category` means no category filter.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let query = params
            .get("q")
            .cloned()
            .unwrap_or_else(|| DEFAULT_QUERY.to_string());

        let category = params
            .get("category")
            .filter(|category| !category.is_empty())
            .cloned();

        let max_results = params
            .get("maxResults")
            .cloned()
            .unwrap_or_else(|| DEFAULT_MAX_RESULTS.to_string());

        Self {
            query,
            category,
            max_results,
        }
    }

    /// Query pairs for a relevance-ordered video search, without the API key
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("part", "snippet".to_string()),
            ("q", self.query.clone()),
            ("type", "video".to_string()),
            ("maxResults", self.max_results.clone()),
            ("order", "relevance".to_string()),
        ];

        if let Some(category) = &self.category {
            pairs.push(("videoCategoryId", category.clone()));
        }

        pairs
    }
}

/// Query pairs for the batch detail lookup, without the API key
pub fn details_query_pairs(video_ids: &[String]) -> Vec<(&'static str, String)> {
    vec![
        ("part", "contentDetails,statistics".to_string()),
        ("id", video_ids.join(",")),
    ]
}
