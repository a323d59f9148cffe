use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// YouTube Data API key
    ///
    /// Optional at startup so the function can still answer preflight and
    /// report the missing key per request.
    #[serde(default)]
    pub youtube_api_key: Option<String>,

    /// YouTube Data API base URL
    #[serde(default = "default_youtube_api_url")]
    pub youtube_api_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_youtube_api_url() -> String {
    "https://www.googleapis.com/youtube/v3".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// The API key, treating an empty value as unset
    pub fn api_key(&self) -> Option<&str> {
        self.youtube_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(vars(&[])).unwrap();
        assert_eq!(config.api_key(), None);
        assert_eq!(
            config.youtube_api_url,
            "https://www.googleapis.com/youtube/v3"
        );
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_reads_api_key_and_overrides() {
        let config = Config::from_vars(vars(&[
            ("YOUTUBE_API_KEY", "abc123"),
            ("YOUTUBE_API_URL", "http://localhost:9000"),
            ("PORT", "8080"),
        ]))
        .unwrap();

        assert_eq!(config.api_key(), Some("abc123"));
        assert_eq!(config.youtube_api_url, "http://localhost:9000");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_empty_api_key_is_unset() {
        let config = Config::from_vars(vars(&[("YOUTUBE_API_KEY", "  ")])).unwrap();
        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn test_invalid_port() {
        assert!(Config::from_vars(vars(&[("PORT", "not-a-port")])).is_err());
    }
}
