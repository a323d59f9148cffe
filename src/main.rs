use tracing_subscriber::EnvFilter;
use video_search_fn::{
    api::{create_router, AppState},
    config::Config,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    if config.api_key().is_none() {
        tracing::warn!("YOUTUBE_API_KEY is not set, searches will return a configuration error");
    }

    // Initialize application state
    let state = AppState::from_config(&config);

    // Create the router with all routes
    let app = create_router(state);

    // Start the server
    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "Video search function listening");
    axum::serve(listener, app).await?;

    Ok(())
}
