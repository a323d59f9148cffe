pub mod providers;
pub mod query;
pub mod video_search;

pub use providers::{VideoSource, YouTubeClient};
pub use query::SearchRequest;
