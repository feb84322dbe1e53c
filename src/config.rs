/// Base URL used when no override is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Environment variable consulted by [`RemoteConfig::from_env`].
pub const API_URL_ENV: &str = "SUBTRACK_API_URL";

/// Configuration for talking to the remote tracking API.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub base_url: String,
}

impl RemoteConfig {
    /// Loads config from `SUBTRACK_API_URL`, falling back to the compiled
    /// default base URL.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        Self { base_url }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_api() {
        let config = RemoteConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000/api");
    }
}
